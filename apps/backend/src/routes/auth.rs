//! Pseudonym login and logout.
//!
//! No credentials, no tokens: the pseudo cookie identifies the player for
//! the process lifetime. This is deliberately not an authentication system.

use actix_web::cookie::Cookie;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::current_player::PSEUDO_COOKIE;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct LoginRequest {
    pseudo: String,
}

#[derive(Debug, Serialize)]
struct LoginResponse {
    pseudo: String,
}

async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let pseudo = GameService::login(&state, &body.pseudo)?;

    let cookie = Cookie::build(PSEUDO_COOKIE, pseudo.clone())
        .path("/")
        .finish();

    Ok(HttpResponse::Ok()
        .cookie(cookie)
        .json(LoginResponse { pseudo }))
}

async fn logout(state: web::Data<AppState>, req: HttpRequest) -> Result<HttpResponse, AppError> {
    if let Some(cookie) = req.cookie(PSEUDO_COOKIE) {
        GameService::logout(&state, cookie.value().trim());
    }

    let mut removal = Cookie::new(PSEUDO_COOKIE, "");
    removal.set_path("/");
    removal.make_removal();

    Ok(HttpResponse::Ok().cookie(removal).finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .route("/login", web::post().to(login))
            .route("/logout", web::post().to(logout)),
    );
}
