use thiserror::Error;

#[derive(Error, Debug)]
pub enum IrcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("{0} requires {1}")]
    NeedMoreParams(&'static str, &'static str),

    #[error("Invalid {0} command: {1}")]
    Validation(&'static str, String),

    #[error("Nickname {0} is already in use")]
    NicknameInUse(String),

    #[error("Connection already registered")]
    AlreadyRegistered,
}

pub type IrcResult<T> = Result<T, IrcError>;
