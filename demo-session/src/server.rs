use axum::Router;
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub(crate) async fn serve_http(port: u16, app: Router) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("HTTP server listening on {}", addr);
    axum_server::bind(addr).serve(app.into_make_service()).await
}

pub(crate) fn listen_port() -> u16 {
    parse_port(std::env::var("PORT").ok().as_deref())
}

fn parse_port(value: Option<&str>) -> u16 {
    value.and_then(|v| v.parse().ok()).unwrap_or(8080)
}

pub(crate) fn init_tracing(app_name: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        #[cfg(debug_assertions)]
        {
            format!(
                "session_auth_axum=trace,session_auth=trace,tower_http=debug,{}=trace,info",
                app_name
            )
            .into()
        }

        #[cfg(not(debug_assertions))]
        {
            "info".into()
        }
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(debug_assertions)]
    tracing::info!("Debug mode enabled - showing detailed logs by default");
    tracing::info!("You can change verbosity by setting the RUST_LOG environment variable.");
}
