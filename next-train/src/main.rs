use std::sync::Arc;

use next_train::clock::SystemClock;
use next_train::config::AppConfig;
use next_train::controller::TimetableController;
use next_train::directory::StationDirectory;
use next_train::display::ConsoleDisplay;
use next_train::geolocation::{FixedPosition, GeolocationProvider, Unsupported};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("next_train=info")),
        )
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let directory = match &config.data_path {
        Some(path) => StationDirectory::from_path(path),
        None => StationDirectory::embedded(),
    }
    .expect("Failed to load station data");
    println!(
        "Loaded {} stations ({})",
        directory.len(),
        directory.line().unwrap_or("unnamed line")
    );

    match config.position {
        Some(position) => run(FixedPosition::new(position), directory, config).await,
        None => {
            eprintln!("Warning: NEXT_TRAIN_LAT/NEXT_TRAIN_LON not set. Showing the fallback station.");
            run(Unsupported, directory, config).await
        }
    }
}

async fn run<G: GeolocationProvider>(geolocation: G, directory: StationDirectory, config: AppConfig) {
    let mut controller = TimetableController::new(
        Arc::new(directory),
        geolocation,
        Arc::new(ConsoleDisplay),
        Arc::new(SystemClock),
        config.controller,
    );

    // Errors are already on screen; keep the session for Ctrl-C either way.
    let _ = controller.initialize().await;

    let handle = controller.handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = handle.shutdown();
        }
    });

    controller.run().await;
}
