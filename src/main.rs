#![allow(non_snake_case)]

mod client;

#[cfg(feature = "server")]
use raidcomp::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let state = match startup::build_app_state(&config).await {
            Ok(state) => state,
            Err(e) => {
                eprintln!("Startup error: {}", e);
                std::process::exit(1);
            }
        };

        tracing::info!(
            raiders = ?config.raiders_file,
            builds = ?config.builds_file,
            hash_policy = %config.hash_policy,
            "Starting server"
        );

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
