use std::str::FromStr;
use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Uncover(Coord2),
    Flag(Coord2),
    Restart,
    Mute,
    Dump,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum CommandError {
    #[error("No command given")]
    Empty,
    #[error("Unknown command {0:?}, type \"help\" for a list")]
    Unknown(String),
    #[error("\"{0}\" expects a row and a column")]
    MissingCoords(String),
    #[error("Invalid number {0:?}")]
    InvalidNumber(String),
    #[error("Unexpected argument {0:?}")]
    Trailing(String),
}

pub(crate) const HELP: &str = "\
Commands:
  u, open ROW COL   reveal a cell
  f, flag ROW COL   place or remove a flag
  r, restart        start over (next level after a win)
  m, mute           toggle sound cues
  d, dump           print the board state as JSON
  h, help           show this list
  q, quit           leave the game";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let command = match name.as_str() {
            "u" | "open" => Command::Uncover(parse_coords(&name, &mut words)?),
            "f" | "flag" => Command::Flag(parse_coords(&name, &mut words)?),
            "r" | "restart" => Command::Restart,
            "m" | "mute" => Command::Mute,
            "d" | "dump" => Command::Dump,
            "h" | "help" | "?" => Command::Help,
            "q" | "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(name)),
        };

        match words.next() {
            Some(extra) => Err(CommandError::Trailing(extra.to_owned())),
            None => Ok(command),
        }
    }
}

fn parse_coords<'a>(
    name: &str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<Coord2, CommandError> {
    let mut next = || -> Result<Coord, CommandError> {
        let word = words
            .next()
            .ok_or_else(|| CommandError::MissingCoords(name.to_owned()))?;
        word.parse()
            .map_err(|_| CommandError::InvalidNumber(word.to_owned()))
    };
    let row = next()?;
    let column = next()?;
    Ok((row, column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_actions() {
        assert_eq!("u 1 2".parse::<Command>(), Ok(Command::Uncover((1, 2))));
        assert_eq!("  OPEN 0 9 ".parse::<Command>(), Ok(Command::Uncover((0, 9))));
        assert_eq!("flag 3 -1".parse::<Command>(), Ok(Command::Flag((3, -1))));
        assert_eq!("r".parse::<Command>(), Ok(Command::Restart));
        assert_eq!("quit\n".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "boom".parse::<Command>(),
            Err(CommandError::Unknown("boom".into()))
        );
        assert_eq!(
            "f 1".parse::<Command>(),
            Err(CommandError::MissingCoords("f".into()))
        );
        assert_eq!(
            "u one 2".parse::<Command>(),
            Err(CommandError::InvalidNumber("one".into()))
        );
        assert_eq!(
            "m now".parse::<Command>(),
            Err(CommandError::Trailing("now".into()))
        );
    }
}
