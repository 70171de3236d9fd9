use std::time::Duration;

use futures_util::StreamExt;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::FramedRead;
use tracing::{debug, error, info, warn};

use crate::client::commands::Command;
use crate::error::IrcResult;
use crate::message::codec::LineCodec;
use crate::message::parser::parse_chunk;

use super::Client;

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    /// Reads lines until end-of-stream, a read error, or the idle timeout.
    pub async fn handle_connection<R>(
        &mut self,
        reader: R,
        buffer_size: usize,
        idle_timeout: Option<Duration>,
    ) -> IrcResult<()>
    where
        R: AsyncRead + Unpin,
    {
        debug!("Starting connection handler for client {} ({})", self.id, self.addr());
        let mut lines = FramedRead::with_capacity(reader, LineCodec::new(), buffer_size);

        loop {
            let next = match idle_timeout {
                Some(limit) => match tokio::time::timeout(limit, lines.next()).await {
                    Ok(next) => next,
                    Err(_) => {
                        info!("Client {} idle for {:?}, closing", self.id, limit);
                        if let Err(e) = self.send_error("Closing link: idle timeout").await {
                            debug!("Could not notify client {} of timeout: {}", self.id, e);
                        }
                        return Ok(());
                    }
                },
                None => lines.next().await,
            };

            let line = match next {
                Some(Ok(line)) => line,
                Some(Err(e)) => {
                    error!("Read error for client {} ({}): {}", self.id, self.addr(), e);
                    return Err(e);
                }
                None => {
                    info!("Client {} ({}) closed connection", self.id, self.addr());
                    return Ok(());
                }
            };

            self.process_chunk(&line).await;
        }
    }

    /// Runs every command in `data` in order; failures are logged and skipped.
    pub async fn process_chunk(&mut self, data: &str) {
        for command in parse_chunk(data) {
            if let Err(e) = self.dispatch(&command).await {
                warn!("Command {} from client {} failed: {}", command.name(), self.id, e);
            }
        }
    }

    pub(crate) async fn dispatch(&mut self, command: &Command) -> IrcResult<()> {
        command.validate()?;
        // Arguments are not logged, PASS carries a secret
        debug!("Executing command {} for client {}", command.name(), self.id);
        command.execute(self).await
    }
}
