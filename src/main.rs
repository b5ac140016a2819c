use clap::Parser;
use std::sync::Arc;

mod cli;
mod config;
mod handler;
mod http;
mod logger;
mod reflect;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli::Cli::parse();
    let mut cfg = config::Config::load_from(&cli.config)?;
    cli.apply(&mut cfg);

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&cfg)?);
        return Ok(());
    }

    logger::init(&cfg)?;

    // Size the Tokio runtime from the workers setting, CPU cores otherwise
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: config::Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_listener(addr, cfg.performance.backlog)?;

    let routes = reflect::RouteTable::from_config(&cfg.reflect);
    logger::log_server_start(&addr, &cfg, &routes);

    let state = Arc::new(config::AppState::new(cfg, routes));
    server::serve(listener, state).await;
    Ok(())
}
