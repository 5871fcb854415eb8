use std::str::FromStr;

use thiserror::Error;

use crate::models::{CourseField, Direction, StudentField, UnknownKeyword};

pub const HELP: &str = "\
commands:
  show                                         redraw the form
  set <name|id|email|phone> <value>            fill a student field
  reason <text>                                notes for the advisor
  advisor <id>                                 choose an advisor
  row <add|drop>                               append a blank course row
  edit <add|drop> <n> <code|crn|section|name> <value>
  remove <add|drop> <n>                        remove course row n
  submit                                       send the request
  cancel                                       abort a request in flight
  clear                                        empty the whole form
  help                                         this text
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Help,
    Quit,
    Submit,
    Cancel,
    Clear,
    SetField(StudentField, String),
    Reason(String),
    Advisor(String),
    AddRow(Direction),
    Edit {
        direction: Direction,
        ordinal: usize,
        field: CourseField,
        value: String,
    },
    Remove {
        direction: Direction,
        ordinal: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("row number must be a positive integer, got {0}")]
    InvalidOrdinal(String),

    #[error(transparent)]
    Keyword(#[from] UnknownKeyword),
}

/// Splits off the first whitespace-delimited word; the rest keeps its inner spacing.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim_start();
    match input.find(char::is_whitespace) {
        Some(at) => (&input[..at], input[at..].trim()),
        None => (input, ""),
    }
}

fn required<'a>(word: &'a str, what: &'static str) -> Result<&'a str, ParseCommandError> {
    if word.is_empty() {
        Err(ParseCommandError::MissingArgument(what))
    } else {
        Ok(word)
    }
}

fn parse_ordinal(word: &str) -> Result<usize, ParseCommandError> {
    match word.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ParseCommandError::InvalidOrdinal(word.to_string())),
    }
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, rest) = split_word(line);
        match name.to_ascii_lowercase().as_str() {
            "" => Err(ParseCommandError::Empty),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "submit" => Ok(Command::Submit),
            "cancel" => Ok(Command::Cancel),
            "clear" => Ok(Command::Clear),
            "set" => {
                let (field, value) = split_word(rest);
                let field = required(field, "student field")?.parse::<StudentField>()?;
                Ok(Command::SetField(field, value.to_string()))
            }
            "reason" => Ok(Command::Reason(rest.to_string())),
            "advisor" => {
                let (id, _) = split_word(rest);
                Ok(Command::Advisor(required(id, "advisor id")?.to_string()))
            }
            "row" => {
                let (direction, _) = split_word(rest);
                Ok(Command::AddRow(required(direction, "direction")?.parse::<Direction>()?))
            }
            "edit" => {
                let (direction, rest) = split_word(rest);
                let (ordinal, rest) = split_word(rest);
                let (field, value) = split_word(rest);
                Ok(Command::Edit {
                    direction: required(direction, "direction")?.parse::<Direction>()?,
                    ordinal: parse_ordinal(required(ordinal, "row number")?)?,
                    field: required(field, "course field")?.parse::<CourseField>()?,
                    value: value.to_string(),
                })
            }
            "remove" => {
                let (direction, rest) = split_word(rest);
                let (ordinal, _) = split_word(rest);
                Ok(Command::Remove {
                    direction: required(direction, "direction")?.parse::<Direction>()?,
                    ordinal: parse_ordinal(required(ordinal, "row number")?)?,
                })
            }
            other => Err(ParseCommandError::UnknownCommand(other.to_string())),
        }
    }
}
