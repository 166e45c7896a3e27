use session_auth_axum::{AppState, session_auth_router};

mod server;

use crate::server::{init_tracing, listen_port, serve_http};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing(env!("CARGO_CRATE_NAME"));

    let app = session_auth_router(AppState::default());

    // A listener that cannot start is the one fatal error
    serve_http(listen_port(), app).await?;
    Ok(())
}
