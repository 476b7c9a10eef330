// Demo server module
// Accept loop, connection handling and listener setup

pub mod connection;
pub mod listener;

use hyper::body::Incoming;
use method_switch::{logger, SharedHandler};
use std::sync::Arc;
use tokio::net::TcpListener;

pub use listener::create_reusable_listener;

/// Accept connections until Ctrl+C, serving each with `handler`
pub async fn serve(
    listener: TcpListener,
    handler: SharedHandler<Incoming>,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        logger::log_connection_accepted(&peer_addr);
                        connection::handle_connection(stream, Arc::clone(&handler));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            signal = tokio::signal::ctrl_c() => {
                signal?;
                logger::log_warning("Shutdown signal received, stopping accept loop");
                return Ok(());
            }
        }
    }
}
