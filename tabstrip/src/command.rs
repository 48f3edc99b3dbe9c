//! The line protocol read from stdin.
use std::str::FromStr;
use tabstrip_api::tab::{TabDescriptor, TabId};
use tabstrip_workspace::{message::workspace::WorkspaceRecv, store::TabValue};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Open(TabDescriptor),
    Close(TabId),
    Activate(TabId),
    CloseAll,
    ClearClosed,
    Reopen(Option<TabId>),
    Set {
        tab: TabId,
        key: String,
        value: TabValue,
    },
    Purge(TabId),
    Back,
    Forward,
    List,
    Closed,
    Quit,
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("`{0}` requires the argument <{1}>")]
    MissingArgument(&'static str, &'static str),
    #[error("`{0}` does not accept the argument `{1}`")]
    UnexpectedArgument(&'static str, String),
    #[error("invalid value `{0}`: {1}")]
    InvalidValue(String, serde_yaml::Error),
}

impl Command {
    /// The workspace transition for this command.  Commands handled by the host return None.
    pub fn into_recv(self) -> Option<WorkspaceRecv> {
        match self {
            Command::Open(descriptor) => Some(WorkspaceRecv::Open(descriptor)),
            Command::Close(id) => Some(WorkspaceRecv::Close(id)),
            Command::Activate(id) => Some(WorkspaceRecv::Activate(id)),
            Command::CloseAll => Some(WorkspaceRecv::CloseAll),
            Command::ClearClosed => Some(WorkspaceRecv::ClearClosedHistory),
            Command::Reopen(id) => Some(WorkspaceRecv::ReopenClosed(id)),
            Command::Set { tab, key, value } => Some(WorkspaceRecv::Write { tab, key, value }),
            Command::Purge(id) => Some(WorkspaceRecv::Purge(id)),
            Command::Back | Command::Forward | Command::List | Command::Closed | Command::Quit => {
                None
            }
        }
    }
}

const COMMANDS: &[&str] = &[
    "open",
    "close",
    "activate",
    "close-all",
    "clear-closed",
    "reopen",
    "set",
    "purge",
    "back",
    "forward",
    "list",
    "closed",
    "quit",
];

struct Args<'a> {
    command: &'static str,
    words: std::str::SplitWhitespace<'a>,
}

impl<'a> Args<'a> {
    fn required(&mut self, name: &'static str) -> Result<&'a str, CommandError> {
        self.words
            .next()
            .ok_or(CommandError::MissingArgument(self.command, name))
    }

    fn optional(&mut self) -> Option<&'a str> {
        self.words.next()
    }

    fn rest(self) -> Vec<&'a str> {
        self.words.collect()
    }

    fn done(mut self) -> Result<(), CommandError> {
        match self.words.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(
                self.command,
                extra.to_string(),
            )),
            None => Ok(()),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;

        let name = if name == "exit" { "quit" } else { name };
        let command = COMMANDS
            .iter()
            .copied()
            .find(|command| *command == name)
            .ok_or_else(|| CommandError::Unknown(name.to_string()))?;

        let mut args = Args { command, words };

        let parsed = match command {
            "open" => {
                let id = args.required("id")?;
                let component = args.required("component")?;
                let url = args.required("url")?;
                let title = args.rest().join(" ");
                let title = if title.is_empty() { id.to_string() } else { title };

                return Ok(Command::Open(
                    TabDescriptor::builder()
                        .id(id)
                        .title(title)
                        .component(component)
                        .url(url)
                        .build(),
                ));
            }
            "close" => Command::Close(args.required("id")?.into()),
            "activate" => Command::Activate(args.required("id")?.into()),
            "close-all" => Command::CloseAll,
            "clear-closed" => Command::ClearClosed,
            "reopen" => Command::Reopen(args.optional().map(TabId::from)),
            "set" => {
                let tab = args.required("id")?.into();
                let key = args.required("key")?.to_string();
                let value = args.rest().join(" ");
                if value.is_empty() {
                    return Err(CommandError::MissingArgument("set", "value"));
                }

                let value = serde_yaml::from_str(value.as_str())
                    .map_err(|err| CommandError::InvalidValue(value.clone(), err))?;

                return Ok(Command::Set { tab, key, value });
            }
            "purge" => Command::Purge(args.required("id")?.into()),
            "back" => Command::Back,
            "forward" => Command::Forward,
            "list" => Command::List,
            "closed" => Command::Closed,
            _ => Command::Quit,
        };

        args.done()?;
        Ok(parsed)
    }
}
