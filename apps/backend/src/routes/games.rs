//! Game endpoints: start, guess, status, result, reset.
//!
//! Handlers are thin: resolve the player from the cookie, run one service
//! operation, serialize its projection. All game-state errors surface as
//! problem+json through `AppError`.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::domain::Difficulty;
use crate::error::AppError;
use crate::extractors::current_player::CurrentPlayer;
use crate::services::games::GameService;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
struct StartRequest {
    difficulty: String,
}

#[derive(Debug, Deserialize)]
struct GuessRequest {
    letter: String,
}

async fn start(
    state: web::Data<AppState>,
    player: CurrentPlayer,
    body: web::Json<StartRequest>,
) -> Result<HttpResponse, AppError> {
    // Parsed here rather than via serde so unknown tags surface as
    // UNKNOWN_DIFFICULTY instead of a generic deserialize error.
    let difficulty: Difficulty = body.difficulty.parse()?;
    let view = GameService::start_or_resume(&state, &player.pseudo, difficulty)?;
    Ok(HttpResponse::Ok().json(view))
}

async fn guess(
    state: web::Data<AppState>,
    player: CurrentPlayer,
    body: web::Json<GuessRequest>,
) -> Result<HttpResponse, AppError> {
    let view = GameService::submit_guess(&state, &player.pseudo, &body.letter)?;
    Ok(HttpResponse::Ok().json(view))
}

async fn status(
    state: web::Data<AppState>,
    player: CurrentPlayer,
) -> Result<HttpResponse, AppError> {
    let view = GameService::status(&state, &player.pseudo)?;
    Ok(HttpResponse::Ok().json(view))
}

async fn result(
    state: web::Data<AppState>,
    player: CurrentPlayer,
) -> Result<HttpResponse, AppError> {
    let view = GameService::result(&state, &player.pseudo)?;
    Ok(HttpResponse::Ok().json(view))
}

async fn reset(
    state: web::Data<AppState>,
    player: CurrentPlayer,
) -> Result<HttpResponse, AppError> {
    let view = GameService::reset(&state, &player.pseudo)?;
    Ok(HttpResponse::Ok().json(view))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/game")
            .route("/start", web::post().to(start))
            .route("/guess", web::post().to(guess))
            .route("/status", web::get().to(status))
            .route("/result", web::get().to(result))
            .route("/reset", web::post().to(reset)),
    );
}
