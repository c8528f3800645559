use gem_rush_core::CellIndex;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Reveal(CellIndex),
    Stake(f64),
    NewGame,
    Show,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'{0}' expects a value")]
    MissingValue(&'static str),
    #[error("'{0}' is not a valid value")]
    InvalidValue(String),
}

pub const HELP: &str = "\
commands:
  <n> | reveal <n>   reveal block n
  stake <amount>     change the stake before the first pick
  new                start a new game
  show               redraw the board
  quit               leave";

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseCommandError::Empty);
        };

        let mut value = |name: &'static str| {
            words
                .next()
                .ok_or(ParseCommandError::MissingValue(name))
        };

        match word.to_ascii_lowercase().as_str() {
            "r" | "reveal" => parse_value(value("reveal")?).map(Command::Reveal),
            "s" | "stake" => parse_value(value("stake")?).map(Command::Stake),
            "n" | "new" => Ok(Command::NewGame),
            "p" | "show" => Ok(Command::Show),
            "h" | "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => match other.parse() {
                Ok(index) => Ok(Command::Reveal(index)),
                Err(_) => Err(ParseCommandError::Unknown(other.to_string())),
            },
        }
    }
}

fn parse_value<T: FromStr>(text: &str) -> Result<T, ParseCommandError> {
    text.parse()
        .map_err(|_| ParseCommandError::InvalidValue(text.to_string()))
}
