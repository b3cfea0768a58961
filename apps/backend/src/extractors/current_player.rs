use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Name of the session cookie carrying the player's pseudonym.
pub const PSEUDO_COOKIE: &str = "pseudo";

/// The player identified by the pseudo cookie on the current request.
///
/// This only resolves the identifier; whether a session is actually
/// registered for it is the service layer's concern. A missing or empty
/// cookie maps to 401.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPlayer {
    pub pseudo: String,
}

impl FromRequest for CurrentPlayer {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let pseudo = req
            .cookie(PSEUDO_COOKIE)
            .map(|cookie| cookie.value().trim().to_string())
            .filter(|value| !value.is_empty());

        ready(match pseudo {
            Some(pseudo) => Ok(CurrentPlayer { pseudo }),
            None => Err(AppError::unauthorized()),
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::cookie::Cookie;
    use actix_web::test::TestRequest;

    use super::*;

    #[actix_web::test]
    async fn extracts_pseudo_from_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(PSEUDO_COOKIE, "alice"))
            .to_http_request();
        let player = CurrentPlayer::extract(&req).await.unwrap();
        assert_eq!(player.pseudo, "alice");
    }

    #[actix_web::test]
    async fn missing_cookie_is_unauthorized() {
        let req = TestRequest::default().to_http_request();
        assert!(CurrentPlayer::extract(&req).await.is_err());
    }

    #[actix_web::test]
    async fn blank_cookie_is_unauthorized() {
        let req = TestRequest::default()
            .cookie(Cookie::new(PSEUDO_COOKIE, "   "))
            .to_http_request();
        assert!(CurrentPlayer::extract(&req).await.is_err());
    }
}
