use tokio::io::AsyncWrite;
use tracing::debug;

use crate::error::IrcResult;
use super::super::Client;

const PRIVMSG_PLACEHOLDER: &str = "hun?";

// Channel membership and message routing are not implemented; these commands
// are accepted and validated only.
impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub(crate) async fn handle_join(&mut self, channels: &[String]) -> IrcResult<()> {
        debug!("Client {} JOIN {:?} accepted without membership", self.id, channels);
        Ok(())
    }

    pub(crate) async fn handle_privmsg(&mut self, target: &str, _message: &str) -> IrcResult<()> {
        debug!("Client {} PRIVMSG to {} not routed", self.id, target);
        self.write_line(PRIVMSG_PLACEHOLDER).await
    }
}
