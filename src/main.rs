#![allow(non_snake_case)]

#[cfg(all(feature = "desktop", not(feature = "server")))]
fn main() {
    dioxus::launch(registru::client::App);
}

#[cfg(not(any(feature = "desktop", feature = "server")))]
fn main() {
    eprintln!("Built without the `desktop` or `server` feature, nothing to run");
}

#[cfg(feature = "server")]
fn main() {
    use dioxus_logger::tracing::{self, Level};
    use registru::server::{config::Config, model::app::AppState, router, startup};
    use tower_http::services::ServeDir;

    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Failed to start runtime: {}", e);
            std::process::exit(1);
        }
    };

    let result: Result<(), registru::server::error::Error> = runtime.block_on(async move {
        let session = startup::connect_to_session(&config).await?;
        let db = startup::connect_to_database(&config).await?;
        startup::ensure_bootstrap_user(&config, &db).await?;
        startup::sync_lookups(&config, &db).await?;

        let mut app = router::routes()
            .with_state(AppState::new(db, &config))
            .layer(session);

        // Images are only served locally when the media URL is a path on this host
        let media_path = format!("/{}", config.media_url.trim_matches('/'));
        if config.media_url.starts_with('/') && media_path != "/" {
            app = app.nest_service(&media_path, ServeDir::new(&config.media_root));
        }

        let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
        tracing::info!("Starting server on {}", config.bind_addr);

        axum::serve(listener, app).await?;

        Ok(())
    });

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
