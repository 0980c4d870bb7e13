#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config {
    use serde::Deserialize;

    #[derive(Deserialize, Clone, Debug)]
    pub struct Config {
        pub server: ServerConfig,
        pub data: DataConfig,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct ServerConfig {
        pub bind: String,
        pub port: u16,
    }

    #[derive(Deserialize, Clone, Debug)]
    pub struct DataConfig {
        pub events_path: String,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                server: ServerConfig {
                    bind: "0.0.0.0".into(),
                    port: 3000,
                },
                data: DataConfig {
                    events_path: "events.ndjson".into(),
                },
            }
        }
    }

    pub fn load(path: &str) -> Config {
        match std::fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("failed to parse config {path}: {e}, using defaults");
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("failed to read config {path}: {e}, using defaults");
                Config::default()
            }
        }
    }

    /// Resolves the listen address from the config, falling back to
    /// `fallback` (with a warning) when bind/port do not form a valid
    /// socket address.
    pub fn resolve_addr(
        bind: &str,
        port: u16,
        fallback: std::net::SocketAddr,
    ) -> std::net::SocketAddr {
        match format!("{bind}:{port}").parse::<std::net::SocketAddr>() {
            Ok(addr) => addr,
            Err(e) => {
                tracing::warn!("invalid bind address {bind}:{port}: {e}, using {fallback}");
                fallback
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn fallback() -> std::net::SocketAddr {
            "127.0.0.1:3000".parse().unwrap()
        }

        #[test]
        fn valid_bind_and_port_are_used() {
            let addr = resolve_addr("0.0.0.0", 8080, fallback());
            assert_eq!(addr, "0.0.0.0:8080".parse().unwrap());
        }

        #[test]
        fn malformed_bind_falls_back() {
            let addr = resolve_addr("not an address", 8080, fallback());
            assert_eq!(addr, fallback());
        }
    }
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tally_types::EventsPath;
    use tally_ui::{shell, App};
    use tower_http::trace::TraceLayer;
    use tracing_subscriber::{fmt, EnvFilter};

    // Initialize tracing
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse config path from args
    let args: Vec<String> = std::env::args().collect();
    let configPath = if let Some(idx) = args.iter().position(|a| a == "--config") {
        args.get(idx + 1)
            .cloned()
            .unwrap_or_else(|| "config.example.toml".into())
    } else {
        "config.example.toml".into()
    };

    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}, events={}",
        appConfig.server.bind,
        appConfig.server.port,
        appConfig.data.events_path
    );

    let eventsPath = EventsPath(appConfig.data.events_path.clone());

    // Get Leptos configuration
    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;

    let addr = config::resolve_addr(
        &appConfig.server.bind,
        appConfig.server.port,
        leptosOptions.site_addr,
    );

    // Generate route list from Leptos App
    let routes = generate_route_list(App);

    // Compose the router: the events path is provided as context so the
    // dashboard server fn can find the log
    let app = Router::new()
        .leptos_routes_with_context(
            &leptosOptions,
            routes,
            {
                let eventsPath = eventsPath.clone();
                move || {
                    leptos::prelude::provide_context(eventsPath.clone());
                }
            },
            {
                let leptosOptions = leptosOptions.clone();
                move || shell(leptosOptions.clone())
            },
        )
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
