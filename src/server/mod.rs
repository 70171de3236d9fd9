pub mod registry;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::client::Client;
use crate::config::ServerConfig;
use crate::error::{IrcError, IrcResult};
use crate::message::Message;
use crate::server::registry::{ClientRegistry, ConnectionId};

#[derive(Clone)]
pub struct Server {
    pub(crate) config: Arc<ServerConfig>,
    registry: Arc<ClientRegistry>,
    connections: Arc<AtomicUsize>,
}

impl Server {
    pub fn new(config: ServerConfig) -> Self {
        let registry = ClientRegistry::new(config.server.name.clone());
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
            connections: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn run(&self) -> IrcResult<()> {
        let addr = self.config.listen_addr();

        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
            IrcError::Io(e)
        })?;

        info!("Server listening on {}", addr);
        self.serve(listener).await
    }

    pub async fn serve(&self, listener: TcpListener) -> IrcResult<()> {
        loop {
            match listener.accept().await {
                Ok((socket, addr)) => {
                    info!("New connection from: {}", addr);
                    let server = self.clone();

                    tokio::spawn(async move {
                        if let Err(e) = handle_connection(socket, addr, server).await {
                            error!("Error handling connection from {}: {}", addr, e);
                        }
                    });
                }
                Err(e) => {
                    error!("Error accepting connection: {}", e);
                }
            }
        }
    }

    fn acquire_slot(&self) -> Option<ConnectionSlot> {
        let max = self.config.limits.max_clients;
        self.connections
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                (count < max).then_some(count + 1)
            })
            .ok()
            .map(|_| ConnectionSlot(Arc::clone(&self.connections)))
    }
}

/// Counts one live connection against `limits.max_clients` until dropped.
struct ConnectionSlot(Arc<AtomicUsize>);

impl Drop for ConnectionSlot {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

pub async fn handle_connection(
    mut stream: TcpStream,
    addr: SocketAddr,
    server: Server,
) -> IrcResult<()> {
    let Some(_slot) = server.acquire_slot() else {
        warn!("Rejecting connection from {}: server full", addr);
        let line = format!("{}\r\n", Message::new("ERROR", vec!["Server full".to_string()]));
        stream.write_all(line.as_bytes()).await?;
        return Ok(());
    };

    stream.set_nodelay(true)?;
    let (reader, writer) = stream.into_split();

    let id = ConnectionId::next();
    let limits = &server.config.limits;
    let mut client = Client::new(id, addr, writer, Arc::clone(&server.registry));

    let result = client
        .handle_connection(reader, limits.read_buffer_size, limits.idle_timeout())
        .await;

    server.registry.remove_client(id).await;
    debug!(
        "Client {} cleanup completed, {} records remain",
        id,
        server.registry.len().await
    );
    result
}
