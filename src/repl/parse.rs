use regex::Regex;
use std::sync::LazyLock;

use crate::repl::commands::{CommandId, find_command};

static SCORE_TOKEN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^(?:[+-]?\d+|-)$"));

/// One parsed line of input. Player, hole and round numbers are still 1-based here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplAction {
    Score(String),
    Set {
        player: usize,
        hole: usize,
        round: usize,
        value: String,
    },
    Next,
    Previous,
    Goto {
        player: usize,
        hole: usize,
        round: usize,
    },
    Player(usize),
    Card,
    Results,
    Export(Option<String>),
    Html(Option<String>),
    Json,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplParseError {
    Empty,
    UnknownCommand(String),
    Usage(&'static str),
}

fn is_score_token(token: &str) -> bool {
    match SCORE_TOKEN.as_ref() {
        Ok(re) => re.is_match(token),
        Err(_) => token == "-" || token.parse::<i64>().is_ok(),
    }
}

/// `-` stands for "clear", which the matrix receives as empty text.
fn score_text(token: &str) -> String {
    if token == "-" {
        String::new()
    } else {
        token.to_string()
    }
}

fn parse_index(token: &str) -> Option<usize> {
    token.parse::<usize>().ok().filter(|&n| n >= 1)
}

/// # Errors
///
/// Will return `Err` for blank lines, unknown commands and malformed arguments
pub fn parse_line(input: &str) -> Result<ReplAction, ReplParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ReplParseError::Empty);
    }
    if is_score_token(input) {
        return Ok(ReplAction::Score(score_text(input)));
    }

    let mut parts = input.split_whitespace();
    let token = parts.next().unwrap_or_default();
    let Some(command) = find_command(token) else {
        return Err(ReplParseError::UnknownCommand(token.to_string()));
    };
    let args: Vec<&str> = parts.collect();

    let action = match command.id {
        CommandId::Help => ReplAction::Help,
        CommandId::Next => ReplAction::Next,
        CommandId::Previous => ReplAction::Previous,
        CommandId::Card => ReplAction::Card,
        CommandId::Results => ReplAction::Results,
        CommandId::Json => ReplAction::Json,
        CommandId::Quit => ReplAction::Quit,
        CommandId::Export => ReplAction::Export(args.first().map(|s| (*s).to_string())),
        CommandId::Html => ReplAction::Html(args.first().map(|s| (*s).to_string())),
        CommandId::Player => match (args.len(), args.first().and_then(|t| parse_index(t))) {
            (1, Some(player)) => ReplAction::Player(player),
            _ => return Err(ReplParseError::Usage(command.usage)),
        },
        CommandId::Goto => match args.as_slice() {
            [p, h, r] => match (
                parse_index(p),
                parse_index(h),
                parse_index(r),
            ) {
                (Some(player), Some(hole), Some(round)) => ReplAction::Goto {
                    player,
                    hole,
                    round,
                },
                _ => return Err(ReplParseError::Usage(command.usage)),
            },
            _ => return Err(ReplParseError::Usage(command.usage)),
        },
        CommandId::Set => match args.as_slice() {
            [p, h, r, v] => match (
                parse_index(p),
                parse_index(h),
                parse_index(r),
            ) {
                (Some(player), Some(hole), Some(round)) => ReplAction::Set {
                    player,
                    hole,
                    round,
                    value: score_text(v),
                },
                _ => return Err(ReplParseError::Usage(command.usage)),
            },
            _ => return Err(ReplParseError::Usage(command.usage)),
        },
    };
    Ok(action)
}
