//! Line commands typed at the prompt, mapped onto catalog UI events.

use client_core::UiEvent;
use shared::domain::{SortCriterion, PRICE_BRACKETS};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  color <name> on|off     select or unselect a color
  size <name> [on|off]    select, unselect or flip a size
  price <n> on|off        select or unselect price bracket n (1-5)
  apply                   apply the selected filters
  clear                   clear every filter
  more                    load more products
  sort <order>            0|none, 1|recent, 2|price-asc, 3|price-desc
  buy [n]                 add n items to the cart (default 1)
  help                    show this message
  quit                    exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Ui(UiEvent),
    /// Size given without on/off: the caller flips it against the pending selection.
    FlipSize(String),
    Buy(u32),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}'; type 'help'")]
    Unknown(String),
    #[error("missing {0}")]
    MissingArgument(&'static str),
    #[error("invalid {what} '{value}'")]
    InvalidArgument { what: &'static str, value: String },
}

pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match verb.to_ascii_lowercase().as_str() {
        "color" | "cor" => {
            let (color, on) = name_and_switch(&args, "color")?;
            Command::Ui(UiEvent::ToggleColor {
                color,
                on: on.ok_or(CommandError::MissingArgument("on|off"))?,
            })
        }
        "size" | "tamanho" => {
            let (size, on) = name_and_switch(&args, "size")?;
            match on {
                Some(on) => Command::Ui(UiEvent::ToggleSize { size, on }),
                None => Command::FlipSize(size),
            }
        }
        "price" | "preco" => {
            let raw = args.first().ok_or(CommandError::MissingArgument("bracket"))?;
            let bracket = raw
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| PRICE_BRACKETS.get(index))
                .ok_or_else(|| CommandError::InvalidArgument {
                    what: "bracket",
                    value: raw.to_string(),
                })?;
            let on = args
                .get(1)
                .map(|word| parse_switch(word))
                .transpose()?
                .ok_or(CommandError::MissingArgument("on|off"))?;
            Command::Ui(UiEvent::TogglePriceRange {
                range: bracket.range,
                on,
            })
        }
        "apply" => Command::Ui(UiEvent::ApplyFilters),
        "clear" => Command::Ui(UiEvent::ClearFilters),
        "more" => Command::Ui(UiEvent::LoadMore),
        "sort" => {
            let raw = args.first().ok_or(CommandError::MissingArgument("order"))?;
            Command::Ui(UiEvent::SortChanged(parse_sort(raw)?))
        }
        "buy" | "comprar" => match args.first() {
            None => Command::Buy(1),
            Some(raw) => Command::Buy(raw.parse().map_err(|_| CommandError::InvalidArgument {
                what: "quantity",
                value: raw.to_string(),
            })?),
        },
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(Some(command))
}

/// Names may contain spaces ("Azul Marinho"); a trailing on/off is the switch.
fn name_and_switch(
    args: &[&str],
    what: &'static str,
) -> Result<(String, Option<bool>), CommandError> {
    let (switch, name_words) = match args.split_last() {
        Some((last, rest)) if !rest.is_empty() && is_switch(last) => {
            (Some(parse_switch(last)?), rest)
        }
        _ => (None, args),
    };
    if name_words.is_empty() {
        return Err(CommandError::MissingArgument(what));
    }
    Ok((name_words.join(" "), switch))
}

fn is_switch(word: &str) -> bool {
    parse_switch(word).is_ok()
}

fn parse_switch(word: &str) -> Result<bool, CommandError> {
    match word.to_ascii_lowercase().as_str() {
        "on" | "yes" | "+" => Ok(true),
        "off" | "no" | "-" => Ok(false),
        _ => Err(CommandError::InvalidArgument {
            what: "switch",
            value: word.to_string(),
        }),
    }
}

fn parse_sort(raw: &str) -> Result<SortCriterion, CommandError> {
    if let Some(criterion) = SortCriterion::from_code(raw) {
        return Ok(criterion);
    }
    match raw.to_ascii_lowercase().as_str() {
        "none" => Ok(SortCriterion::None),
        "recent" | "recency" | "date" => Ok(SortCriterion::Recency),
        "price-asc" | "asc" => Ok(SortCriterion::PriceAsc),
        "price-desc" | "desc" => Ok(SortCriterion::PriceDesc),
        _ => Err(CommandError::InvalidArgument {
            what: "sort order",
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
