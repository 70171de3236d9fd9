use tokio::io::AsyncWrite;
use tracing::debug;

use crate::error::IrcResult;
use crate::message::Message;
use super::super::Client;

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub(crate) async fn handle_ping(&mut self) -> IrcResult<()> {
        debug!("Received PING from client {}", self.id);
        self.send_message(&Message::new("PONG", vec![])).await
    }

    /// Capability negotiation is a fixed acknowledgement.
    pub(crate) async fn handle_cap(&mut self) -> IrcResult<()> {
        let ack = Message::new(
            "CAP",
            vec!["*".to_string(), "ACK".to_string(), "multi-prefix".to_string()],
        );
        self.send_message(&ack).await
    }

    pub(crate) async fn handle_echo(&mut self, message: &str) -> IrcResult<()> {
        debug!("Echoing message back to client {}", self.id);
        self.write_line(message).await
    }
}
