pub mod commands;
mod error;
mod handler;
mod message;
mod registration;


use std::net::SocketAddr;
use std::sync::Arc;

use tokio::io::AsyncWrite;
use tracing::debug;

use crate::server::registry::{ClientRegistry, ConnectionId};

/// Per-connection state: the write half of the transport plus a handle to
/// the shared registry. Commands execute against this.
pub struct Client<W> {
    pub(crate) id: ConnectionId,
    addr: SocketAddr,
    writer: W,
    registry: Arc<ClientRegistry>,
}

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub fn new(
        id: ConnectionId,
        addr: SocketAddr,
        writer: W,
        registry: Arc<ClientRegistry>,
    ) -> Self {
        debug!("Creating client {} for connection from {}", id, addr);
        Self {
            id,
            addr,
            writer,
            registry,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub(crate) fn server_name(&self) -> &str {
        self.registry.hostname()
    }
}
