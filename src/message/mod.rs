pub mod codec;
pub mod parser;

use std::fmt;

/// An outbound protocol line, rendered without its `\r\n` terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub source: Option<String>,
    pub command: String,
    pub params: Vec<String>,
}

impl Message {
    pub fn new(command: &str, params: Vec<String>) -> Self {
        Self {
            source: None,
            command: command.to_string(),
            params,
        }
    }

    pub fn with_source(source: &str, command: &str, params: Vec<String>) -> Self {
        Self {
            source: Some(source.to_string()),
            command: command.to_string(),
            params,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, ":{} ", source)?;
        }
        f.write_str(&self.command)?;

        // Last parameter is always sent as trailing
        if let Some((last, middle)) = self.params.split_last() {
            for param in middle {
                write!(f, " {}", param)?;
            }
            write!(f, " :{}", last)?;
        }
        Ok(())
    }
}
