use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::{IrcError, IrcResult};

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one accepted transport connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn next() -> Self {
        Self(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRecord {
    pub nickname: Option<String>,
    pub username: Option<String>,
    pub hostname: Option<String>,
    pub realname: Option<String>,
    pub password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ClientRecord {
    fn new() -> Self {
        Self {
            nickname: None,
            username: None,
            hostname: None,
            realname: None,
            password: None,
            created_at: Utc::now(),
        }
    }

    /// Registered once both nickname and username are non-empty.
    pub fn is_registered(&self) -> bool {
        let filled = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        filled(&self.nickname) && filled(&self.username)
    }
}

/// Result of a registration field update.
#[derive(Debug, Clone)]
pub struct RecordUpdate {
    pub record: ClientRecord,
    /// True only for the update that moved the record into the registered state
    pub completed_registration: bool,
}

/// Server-wide table of connected clients.
///
/// Every operation holds the table lock for its whole duration and never
/// calls another registry operation while holding it.
pub struct ClientRegistry {
    hostname: String,
    clients: Mutex<HashMap<ConnectionId, ClientRecord>>,
}

impl ClientRegistry {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            clients: Mutex::new(HashMap::new()),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub async fn is_nickname_taken(&self, nickname: &str) -> bool {
        let clients = self.clients.lock().await;
        clients
            .values()
            .any(|record| record.nickname.as_deref() == Some(nickname))
    }

    pub async fn is_registered(&self, id: ConnectionId) -> bool {
        let clients = self.clients.lock().await;
        clients.get(&id).is_some_and(ClientRecord::is_registered)
    }

    /// Claims `nickname` for `id`, failing if another live record holds it.
    pub async fn set_nick(&self, id: ConnectionId, nickname: &str) -> IrcResult<RecordUpdate> {
        let mut clients = self.clients.lock().await;

        let taken = clients
            .iter()
            .any(|(other, record)| *other != id && record.nickname.as_deref() == Some(nickname));
        if taken {
            return Err(IrcError::NicknameInUse(nickname.to_string()));
        }

        debug!("Setting nickname {} for connection {}", nickname, id);
        Ok(Self::update(&mut clients, id, |record| {
            record.nickname = Some(nickname.to_string());
        }))
    }

    pub async fn set_user(
        &self,
        id: ConnectionId,
        username: &str,
        hostname: &str,
        realname: &str,
    ) -> RecordUpdate {
        let mut clients = self.clients.lock().await;
        debug!(
            "Setting user details for connection {}: username={}, hostname={}, realname={}",
            id, username, hostname, realname
        );
        Self::update(&mut clients, id, |record| {
            record.username = Some(username.to_string());
            record.hostname = Some(hostname.to_string());
            record.realname = Some(realname.to_string());
        })
    }

    pub async fn set_password(&self, id: ConnectionId, password: &str) {
        let mut clients = self.clients.lock().await;
        debug!("Setting password for connection {}", id);
        clients
            .entry(id)
            .or_insert_with(ClientRecord::new)
            .password = Some(password.to_string());
    }

    pub async fn get_client(&self, id: ConnectionId) -> Option<ClientRecord> {
        let clients = self.clients.lock().await;
        clients.get(&id).cloned()
    }

    pub async fn clients(&self) -> HashMap<ConnectionId, ClientRecord> {
        self.clients.lock().await.clone()
    }

    pub async fn remove_client(&self, id: ConnectionId) -> Option<ClientRecord> {
        let removed = self.clients.lock().await.remove(&id);
        if removed.is_some() {
            info!("Removed client record for connection {}", id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }

    fn update(
        clients: &mut HashMap<ConnectionId, ClientRecord>,
        id: ConnectionId,
        apply: impl FnOnce(&mut ClientRecord),
    ) -> RecordUpdate {
        let record = clients.entry(id).or_insert_with(ClientRecord::new);
        let was_registered = record.is_registered();
        apply(record);
        RecordUpdate {
            record: record.clone(),
            completed_registration: !was_registered && record.is_registered(),
        }
    }
}
