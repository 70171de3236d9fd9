use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Generate an example configuration file and exit
    #[arg(short, long)]
    pub generate_config: bool,

    /// Set the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Port to listen on, overrides the configuration file
    #[arg(short, long)]
    pub port: Option<u16>,
}

pub fn generate_example_config() -> String {
    r#"# tinyircd Example Configuration

[server]
name = "irc.example.com"  # Used as the source of server replies
bind_addr = "0.0.0.0"     # Address to bind to
port = 8080               # Port to listen on

[limits]
max_clients = 1000        # Maximum number of connections
read_buffer_size = 1024   # Bytes read from a socket at a time
idle_timeout_secs = 300   # Close silent connections, 0 disables
"#
    .to_string()
}
