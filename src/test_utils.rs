use std::net::SocketAddr;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{timeout, Duration};

use crate::config::ServerConfig;
use crate::error::{IrcError, IrcResult};
use crate::server::Server;

const READ_TIMEOUT: Duration = Duration::from_secs(2);

pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl TestClient {
    pub async fn connect(addr: SocketAddr) -> IrcResult<Self> {
        let stream = TcpStream::connect(addr).await?;
        let (read, write) = stream.into_split();

        Ok(Self {
            reader: BufReader::new(read),
            writer: write,
        })
    }

    /// Sends NICK then USER and returns the welcome line.
    pub async fn register(&mut self, nickname: &str, username: &str) -> IrcResult<String> {
        self.send_raw(&format!("NICK {}", nickname)).await?;
        self.send_raw(&format!("USER {} localhost irc.example.com :{}", username, username))
            .await?;
        self.read_message().await
    }

    pub async fn send_raw(&mut self, message: &str) -> IrcResult<()> {
        self.send_chunk(&format!("{}\r\n", message)).await
    }

    /// Writes `data` as-is, for tests that pack several lines in one write.
    pub async fn send_chunk(&mut self, data: &str) -> IrcResult<()> {
        self.writer.write_all(data.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Reads one line with its terminator removed.
    pub async fn read_message(&mut self) -> IrcResult<String> {
        let mut line = String::new();
        match timeout(READ_TIMEOUT, self.reader.read_line(&mut line)).await {
            Ok(Ok(0)) => Err(IrcError::Io(std::io::ErrorKind::UnexpectedEof.into())),
            Ok(Ok(_)) => Ok(line.trim_end_matches("\r\n").to_string()),
            Ok(Err(e)) => Err(IrcError::Io(e)),
            Err(_) => Err(IrcError::Io(std::io::ErrorKind::TimedOut.into())),
        }
    }

    /// True when nothing arrives within a short grace period.
    pub async fn is_silent(&mut self) -> bool {
        let mut line = String::new();
        timeout(Duration::from_millis(100), self.reader.read_line(&mut line))
            .await
            .is_err()
    }
}

pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig::default();
    config.server.name = "test.server".to_string();
    config.server.bind_addr = "127.0.0.1".to_string();
    config.server.port = 0;
    config
}

/// Serves `config` on an ephemeral local port.
pub async fn setup_test_server(config: ServerConfig) -> (Server, SocketAddr) {
    let server = Server::new(config);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server_clone = server.clone();
    tokio::spawn(async move {
        server_clone.serve(listener).await.ok();
    });

    (server, addr)
}
