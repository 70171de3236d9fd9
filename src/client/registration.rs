use tokio::io::AsyncWrite;
use tracing::info;

use crate::error::IrcResult;
use crate::message::Message;
use crate::server::registry::ClientRecord;

use super::Client;

/// Which command completed registration; decides the welcome reply form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Welcome {
    Notice,
    Numeric,
}

impl Welcome {
    fn command(self) -> &'static str {
        match self {
            Welcome::Notice => "NOTICE",
            Welcome::Numeric => "001",
        }
    }
}

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub(crate) async fn complete_registration(
        &mut self,
        record: &ClientRecord,
        welcome: Welcome,
    ) -> IrcResult<()> {
        let nickname = record.nickname.as_deref().unwrap_or_default();
        let username = record.username.as_deref().unwrap_or_default();
        info!("Client {} registered as {}", self.id, nickname);

        let server_name = self.server_name().to_string();
        let text = format!(
            "Welcome to the Internet Relay Chat Network {}!{}@{}",
            username, nickname, server_name
        );
        let message = Message::with_source(
            &server_name,
            welcome.command(),
            vec![nickname.to_string(), text],
        );
        self.send_message(&message).await
    }
}
