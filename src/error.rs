use std::io;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum AppError {

    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error
    },

    #[error("server failed: {0}")]
    Serve(#[from] io::Error)

}
