use tokio::io::AsyncWrite;
use tracing::{debug, info, warn};

use crate::client::registration::Welcome;
use crate::error::{IrcError, IrcResult};
use super::super::Client;

impl<W> Client<W>
where
    W: AsyncWrite + Unpin,
{
    pub(crate) async fn handle_pass(&mut self, password: &str) -> IrcResult<()> {
        // Only this connection's task writes its record, so the check cannot go stale
        if self.registry.is_registered(self.id).await {
            return Err(IrcError::AlreadyRegistered);
        }

        self.registry.set_password(self.id, password).await;
        debug!("Client {} supplied a password", self.id);
        Ok(())
    }

    pub(crate) async fn handle_nick(&mut self, nickname: &str) -> IrcResult<()> {
        debug!("Client {} requesting nick change to {}", self.id, nickname);

        let update = self.registry.set_nick(self.id, nickname).await?;
        info!("Client {} nickname set to {}", self.id, nickname);

        if update.completed_registration {
            self.complete_registration(&update.record, Welcome::Notice).await?;
        }
        Ok(())
    }

    pub(crate) async fn handle_user(
        &mut self,
        username: &str,
        hostname: &str,
        realname: &str,
    ) -> IrcResult<()> {
        let update = self
            .registry
            .set_user(self.id, username, hostname, realname)
            .await;
        info!(
            "Client {} set username={}, hostname={}, realname={}",
            self.id, username, hostname, realname
        );

        if update.completed_registration {
            self.complete_registration(&update.record, Welcome::Numeric).await?;
        }
        Ok(())
    }

    pub(crate) async fn handle_quit(&mut self, reason: Option<&str>) -> IrcResult<()> {
        let reason = reason.unwrap_or("Client Quit");

        match self.registry.remove_client(self.id).await {
            Some(record) => {
                let session = chrono::Utc::now() - record.created_at;
                info!(
                    "Client {} quit after {}s: {}",
                    self.id,
                    session.num_seconds(),
                    reason
                );
            }
            None => warn!("Client {} sent QUIT without a client record", self.id),
        }
        Ok(())
    }
}
