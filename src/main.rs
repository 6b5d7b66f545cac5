#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() {
    portfolio::server::configure_logging();

    if let Err(err) = portfolio::server::run(portfolio::config::ServerConfig::from_env()).await {
        tracing::error!("server stopped: {err}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    portfolio::frontend::run();
}
