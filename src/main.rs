use std::sync::Arc;

use playserve::config::{AppState, Config};
use playserve::server::{self, server_loop};
use playserve::{browser, logger};

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let cfg = Config::load()?;

    // Build the Tokio runtime, honoring the optional workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    logger::init(&cfg)?;

    let addr = cfg.get_socket_addr()?;
    let state = Arc::new(AppState::new(cfg)?);

    // The serving root is the process working directory for its lifetime
    std::env::set_current_dir(&state.root_dir)?;

    let listener = match server::create_listener(addr) {
        Ok(l) => l,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    logger::log_server_start(&addr, &state.root_dir);

    let signals = server::SignalHandler::new();
    server::start_signal_handler(&signals);

    if state.config.server.open_browser {
        browser::launch(&format!("http://{addr}/"));
    }

    server_loop::run(listener, state, Arc::clone(&signals.shutdown)).await?;
    logger::log_server_stop();
    Ok(())
}
