use hyper::body::Incoming;
use method_switch::config::Config;
use method_switch::{configure_invalid, logger, shared};

mod routes;
mod server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;
    logger::init(&cfg)?;
    configure_invalid(&cfg.invalid)?;

    // Tokio runtime sized by the workers setting
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }

    let runtime = runtime_builder.build()?;
    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let listener = server::create_reusable_listener(addr)?;
    logger::log_server_start(&addr, &cfg);

    let router = shared(routes::demo_router::<Incoming>());
    server::serve(listener, router).await
}
