mod channel;
mod server;
mod user;

use tokio::io::AsyncWrite;

use crate::client::Client;
use crate::error::{IrcError, IrcResult};

/// A parsed client command. The set of verbs is closed; dispatch is a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pass {
        password: String,
    },
    Nick {
        nickname: String,
    },
    User {
        username: String,
        hostname: String,
        /// Accepted for compatibility, never used
        servername: Option<String>,
        realname: String,
    },
    Ping,
    Cap,
    Join {
        channels: Vec<String>,
    },
    Quit {
        reason: Option<String>,
    },
    Privmsg {
        target: String,
        message: String,
    },
    /// Non-standard diagnostic command
    Echo {
        message: String,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Pass { .. } => "PASS",
            Command::Nick { .. } => "NICK",
            Command::User { .. } => "USER",
            Command::Ping => "PING",
            Command::Cap => "CAP",
            Command::Join { .. } => "JOIN",
            Command::Quit { .. } => "QUIT",
            Command::Privmsg { .. } => "PRIVMSG",
            Command::Echo { .. } => "ECHO",
        }
    }

    pub fn arguments(&self) -> Vec<&str> {
        match self {
            Command::Pass { password } => vec![password.as_str()],
            Command::Nick { nickname } => vec![nickname.as_str()],
            Command::User {
                username,
                hostname,
                realname,
                ..
            } => vec![username.as_str(), hostname.as_str(), realname.as_str()],
            Command::Ping | Command::Cap => vec![],
            Command::Join { channels } => channels.iter().map(String::as_str).collect(),
            Command::Quit { reason } => reason.as_deref().into_iter().collect(),
            Command::Privmsg { target, message } => vec![target.as_str(), message.as_str()],
            Command::Echo { message } => vec![message.as_str()],
        }
    }

    pub fn validate(&self) -> IrcResult<()> {
        let invalid = |reason: &str| -> IrcResult<()> {
            Err(IrcError::Validation(self.name(), reason.to_string()))
        };

        match self {
            Command::Pass { password } if password.is_empty() => invalid("password cannot be empty"),
            Command::Nick { nickname } if nickname.is_empty() => invalid("nickname cannot be empty"),
            Command::User { username, .. } if username.is_empty() => {
                invalid("username cannot be empty")
            }
            Command::Join { channels } if channels.is_empty() => {
                invalid("at least one channel is required")
            }
            Command::Join { channels } if channels.iter().any(String::is_empty) => {
                invalid("channel names cannot be empty")
            }
            Command::Privmsg { target, message } if target.is_empty() || message.is_empty() => {
                invalid("a target and a message are required")
            }
            Command::Echo { message } if message.is_empty() => invalid("message cannot be empty"),
            _ => Ok(()),
        }
    }

    pub async fn execute<W>(&self, client: &mut Client<W>) -> IrcResult<()>
    where
        W: AsyncWrite + Unpin,
    {
        match self {
            Command::Pass { password } => client.handle_pass(password).await,
            Command::Nick { nickname } => client.handle_nick(nickname).await,
            Command::User {
                username,
                hostname,
                realname,
                ..
            } => client.handle_user(username, hostname, realname).await,
            Command::Ping => client.handle_ping().await,
            Command::Cap => client.handle_cap().await,
            Command::Join { channels } => client.handle_join(channels).await,
            Command::Quit { reason } => client.handle_quit(reason.as_deref()).await,
            Command::Privmsg { target, message } => client.handle_privmsg(target, message).await,
            Command::Echo { message } => client.handle_echo(message).await,
        }
    }
}
