use tracing::{debug, warn};

use crate::client::commands::Command;
use crate::error::{IrcError, IrcResult};

const LINE_TERMINATOR: &str = "\r\n";

/// Splits framed text into its non-blank protocol lines.
pub fn split_lines(chunk: &str) -> impl Iterator<Item = &str> {
    chunk
        .split(LINE_TERMINATOR)
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Parses every line of a chunk, skipping lines that fail to parse.
pub fn parse_chunk(chunk: &str) -> Vec<Command> {
    split_lines(chunk)
        .filter_map(|line| match parse_line(line) {
            Ok(command) => Some(command),
            Err(e) => {
                warn!("Failed to parse line {:?}: {}", line, e);
                None
            }
        })
        .collect()
}

pub fn parse_line(line: &str) -> IrcResult<Command> {
    debug!("Attempting to parse line: {:?}", line);
    let mut tokens = line.split(' ');
    let verb = tokens.next().unwrap_or_default().to_uppercase();
    let args: Vec<&str> = tokens.collect();

    match verb.as_str() {
        "PASS" => {
            let password = require(&args, 1, "PASS", "a password")?[0];
            Ok(Command::Pass {
                password: password.to_string(),
            })
        }
        "NICK" => {
            let nickname = require(&args, 1, "NICK", "a nickname")?[0];
            Ok(Command::Nick {
                nickname: nickname.to_string(),
            })
        }
        "USER" => {
            let args = require(&args, 3, "USER", "a username, hostname and realname")?;
            let (servername, realname) = match args.len() {
                3 => (None, args[2].to_string()),
                _ => (Some(args[2].to_string()), args[3..].join(" ")),
            };
            Ok(Command::User {
                username: args[0].to_string(),
                hostname: args[1].to_string(),
                servername,
                realname: trailing(&realname).to_string(),
            })
        }
        "PING" => Ok(Command::Ping),
        "CAP" => Ok(Command::Cap),
        "JOIN" => {
            let channels: Vec<String> = args
                .first()
                .map(|list| list.split(',').map(str::to_string).collect())
                .unwrap_or_default();
            Ok(Command::Join { channels })
        }
        "QUIT" => {
            let reason = args.join(" ");
            Ok(Command::Quit {
                reason: (!args.is_empty()).then(|| trailing(&reason).to_string()),
            })
        }
        "PRIVMSG" => {
            let args = require(&args, 2, "PRIVMSG", "a target and a message")?;
            Ok(Command::Privmsg {
                target: args[0].to_string(),
                message: trailing(&args[1..].join(" ")).to_string(),
            })
        }
        "ECHO" => Ok(Command::Echo {
            message: args.join(" "),
        }),
        other => Err(IrcError::UnknownCommand(other.to_string())),
    }
}

fn require<'a, 'b>(
    args: &'a [&'b str],
    count: usize,
    verb: &'static str,
    what: &'static str,
) -> IrcResult<&'a [&'b str]> {
    if args.len() < count {
        return Err(IrcError::NeedMoreParams(verb, what));
    }
    Ok(args)
}

fn trailing(param: &str) -> &str {
    param.strip_prefix(':').unwrap_or(param)
}
