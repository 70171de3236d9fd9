use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{IrcError, IrcResult};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub server: Server,
    pub limits: Limits,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Server {
    /// Name used as the source prefix of server replies
    pub name: String,
    pub bind_addr: String,
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            name: "irc.example.com".to_string(),
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub max_clients: usize,
    /// Size of a single socket read; one read is parsed as one chunk
    pub read_buffer_size: usize,
    /// Seconds a connection may stay silent before it is closed, 0 disables
    pub idle_timeout_secs: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_clients: 1000,
            read_buffer_size: 1024,
            idle_timeout_secs: 300,
        }
    }
}

impl Limits {
    pub fn idle_timeout(&self) -> Option<Duration> {
        match self.idle_timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl ServerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> IrcResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> IrcResult<Self> {
        let config: ServerConfig =
            toml::from_str(contents).map_err(|e| IrcError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> IrcResult<()> {
        if self.server.name.trim().is_empty() {
            return Err(IrcError::Config("server.name must not be empty".into()));
        }
        if self.limits.read_buffer_size == 0 {
            return Err(IrcError::Config("limits.read_buffer_size must be positive".into()));
        }
        Ok(())
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind_addr, self.server.port)
    }
}
