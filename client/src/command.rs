use std::str::FromStr;
use tictactoe_engine::tictactoe::{CELL_COUNT, Difficulty, GameMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    CellSelected(usize),
    ModeSelected(GameMode),
    DifficultySelected(Difficulty),
    Reset,
    NewGame,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  1-9                          mark a cell (1 is top left, 9 is bottom right)
  mode pvp|pvc                 play against a person or the computer
  difficulty easy|medium|hard  computer strength
  reset                        restart the round, keep the score
  new                          restart the round and clear the score
  help                         show this text
  quit                         leave";

pub fn parse_mode(value: &str) -> Result<GameMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "pvp" | "hvh" | "human" => Ok(GameMode::HumanVsHuman),
        "pvc" | "hvc" | "computer" => Ok(GameMode::HumanVsComputer),
        other => Err(format!("Unknown mode '{}', expected pvp or pvc", other)),
    }
}

pub fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    match value.to_ascii_lowercase().as_str() {
        "easy" => Ok(Difficulty::Easy),
        "medium" => Ok(Difficulty::Medium),
        "hard" => Ok(Difficulty::Hard),
        other => Err(format!(
            "Unknown difficulty '{}', expected easy, medium or hard",
            other
        )),
    }
}

impl FromStr for InputCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(first) = words.next() else {
            return Err("Empty command, type 'help' for a list".to_string());
        };
        let argument = words.next();

        if let Ok(cell) = first.parse::<usize>() {
            if (1..=CELL_COUNT).contains(&cell) {
                return Ok(InputCommand::CellSelected(cell - 1));
            }
            return Err(format!("Cell must be between 1 and {}", CELL_COUNT));
        }

        match (first.to_ascii_lowercase().as_str(), argument) {
            ("mode", Some(value)) => parse_mode(value).map(InputCommand::ModeSelected),
            ("difficulty" | "diff", Some(value)) => {
                parse_difficulty(value).map(InputCommand::DifficultySelected)
            }
            ("mode" | "difficulty" | "diff", None) => {
                Err(format!("'{}' needs a value, type 'help' for a list", first))
            }
            ("reset", _) => Ok(InputCommand::Reset),
            ("new", _) => Ok(InputCommand::NewGame),
            ("help" | "?", _) => Ok(InputCommand::Help),
            ("quit" | "exit" | "q", _) => Ok(InputCommand::Quit),
            _ => Err(format!("Unknown command '{}', type 'help' for a list", first)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!("1".parse(), Ok(InputCommand::CellSelected(0)));
        assert_eq!(" 9 ".parse(), Ok(InputCommand::CellSelected(8)));
        assert!("0".parse::<InputCommand>().is_err());
        assert!("10".parse::<InputCommand>().is_err());
    }

    #[test]
    fn test_settings_commands() {
        assert_eq!(
            "mode pvc".parse(),
            Ok(InputCommand::ModeSelected(GameMode::HumanVsComputer))
        );
        assert_eq!(
            "Difficulty HARD".parse(),
            Ok(InputCommand::DifficultySelected(Difficulty::Hard))
        );
        assert!("mode".parse::<InputCommand>().is_err());
        assert!("difficulty impossible".parse::<InputCommand>().is_err());
    }

    #[test]
    fn test_session_commands() {
        assert_eq!("reset".parse(), Ok(InputCommand::Reset));
        assert_eq!("new".parse(), Ok(InputCommand::NewGame));
        assert_eq!("q".parse(), Ok(InputCommand::Quit));
        assert!("".parse::<InputCommand>().is_err());
        assert!("jump".parse::<InputCommand>().is_err());
    }
}
