use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, error};

use crate::client::Client;
use crate::error::{IrcError, IrcResult};
use crate::message::Message;

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub async fn send_message(&mut self, message: &Message) -> IrcResult<()> {
        self.write_line(&message.to_string()).await
    }

    /// Writes `line` followed by `\r\n` and flushes.
    pub async fn write_line(&mut self, line: &str) -> IrcResult<()> {
        debug!("Sending line to client {}: {:?}", self.id, line);
        let mut data = Vec::with_capacity(line.len() + 2);
        data.extend_from_slice(line.as_bytes());
        data.extend_from_slice(b"\r\n");
        self.write_raw(&data).await
    }

    pub async fn write_raw(&mut self, data: &[u8]) -> IrcResult<()> {
        let id = self.id;
        self.writer.write_all(data).await.map_err(|e| {
            error!("Failed to send data to client {}: {}", id, e);
            IrcError::Io(e)
        })?;
        self.writer.flush().await.map_err(|e| {
            error!("Failed to flush stream for client {}: {}", id, e);
            IrcError::Io(e)
        })
    }
}
