use tokio::io::AsyncWrite;

use crate::client::Client;
use crate::error::IrcResult;
use crate::message::Message;

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub async fn send_error(&mut self, msg: &str) -> IrcResult<()> {
        self.send_message(&Message::new("ERROR", vec![msg.to_string()]))
            .await
    }
}
