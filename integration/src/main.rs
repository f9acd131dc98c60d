//! Practice-drill HTTP service.
//!
//! Exposes `math_drill_gen` sessions to the browser client: create a
//! session, fetch card state, submit answers, ask the tutor. The Gemini key
//! comes from the environment; without one the tutor runs offline and the
//! drill keeps working.

mod practice;

use std::net::SocketAddr;
use std::sync::Arc;

use dotenv::dotenv;
use math_drill_gen::tutor::{GeminiTutor, OfflineTutor, TutorClient};
use tracing::{info, warn};

use crate::practice::handler::AppState;

#[tokio::main]
async fn main() {
    // .env is optional; production reads the host environment directly.
    let _ = dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "math_drill_server=info,math_drill_gen=info".into()),
        )
        .init();

    let tutor: Arc<dyn TutorClient> = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.is_empty() => Arc::new(GeminiTutor::new(&key, None)),
        _ => {
            warn!("GEMINI_API_KEY not set; tutor answers with canned offline lines");
            Arc::new(OfflineTutor)
        }
    };
    info!(tutor = tutor.name(), "tutor client ready");

    let state = AppState::new(tutor);
    let app = practice::routes::router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()
        .expect("invalid BIND_ADDR");
    info!(%addr, "practice drill server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
