use actix_web::{web, App, HttpServer};
use hangman_backend::config::words::WordsConfig;
use hangman_backend::middleware::request_trace::RequestTrace;
use hangman_backend::routes;
use hangman_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let host = std::env::var("HANGMAN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("HANGMAN_PORT")
        .unwrap_or_else(|_| "8080".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ HANGMAN_PORT must be a valid port number");
            std::process::exit(1);
        });

    let words = WordsConfig::from_env();
    if let Err(e) = words.verify() {
        eprintln!("❌ Word lists not usable: {e}");
        std::process::exit(1);
    }

    println!("🚀 Starting Hangman Backend on http://{}:{}", host, port);

    let data = web::Data::new(AppState::new(words));

    HttpServer::new(move || {
        App::new()
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
