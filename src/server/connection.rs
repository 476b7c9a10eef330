// Connection module
// Serves a single TCP connection with the root handler

use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use method_switch::{into_service, logger, SharedHandler};

/// Serve one connection on its own task.
///
/// Errors are logged; a failing connection never stops the accept loop.
pub fn handle_connection(stream: tokio::net::TcpStream, handler: SharedHandler<Incoming>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);
        let result = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, into_service(handler))
            .await;

        if let Err(err) = result {
            logger::log_connection_error(&err);
        }
    });
}
