use core::str::FromStr;

use thiserror::Error;

use farmstead_core::FarmError;
use farmstead_crops::CropKind;
use farmstead_livestock::Species;

pub const HELP: &str = "\
commands:
  add-animal <cow|chicken|sheep> <name>
  add-crop <wheat|corn|vegetables> <name>
  feed <id|name> <amount>      feed-all <amount>
  produce <id|name>            produce-all
  grow <id|name> <days>        grow-all <days>
  water <id|name>              water-all
  harvest <id|name>            harvest-all
  sell <product> <quantity>
  day                          report [--json]
  help                         quit";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command {0:?} (try `help`)")]
    Unknown(String),

    #[error("{command}: missing {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{command}: {value:?} is not a whole number")]
    NotANumber { command: &'static str, value: String },

    #[error("could not render output: {0}")]
    Render(String),

    #[error(transparent)]
    Farm(#[from] FarmError),
}

/// One parsed front-end command. Entity targets are kept as raw text (id or
/// name) and resolved against the farm at execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddAnimal { species: Species, name: String },
    AddCrop { kind: CropKind, name: String },
    Feed { target: String, amount: i64 },
    FeedAll { amount: i64 },
    Produce { target: String },
    ProduceAll,
    Grow { target: String, days: i64 },
    GrowAll { days: i64 },
    Water { target: String },
    WaterAll,
    Harvest { target: String },
    HarvestAll,
    Sell { product: String, quantity: i64 },
    Day,
    Report { json: bool },
    Help,
    Quit,
}

fn rest(command: &'static str, argument: &'static str, words: &[&str]) -> Result<String, CommandError> {
    if words.is_empty() {
        return Err(CommandError::MissingArgument { command, argument });
    }
    Ok(words.join(" "))
}

fn number(command: &'static str, value: &str) -> Result<i64, CommandError> {
    value.parse().map_err(|_| CommandError::NotANumber {
        command,
        value: value.to_string(),
    })
}

/// Split `<text...> <number>` where the text may contain spaces.
fn text_then_number(
    command: &'static str,
    text: &'static str,
    num: &'static str,
    words: &[&str],
) -> Result<(String, i64), CommandError> {
    let (last, head) = words
        .split_last()
        .ok_or(CommandError::MissingArgument { command, argument: text })?;
    if head.is_empty() {
        return Err(CommandError::MissingArgument { command, argument: num });
    }
    Ok((head.join(" "), number(command, last)?))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let (head, args) = words.split_first().ok_or(CommandError::Empty)?;

        let command = match head.to_ascii_lowercase().as_str() {
            "add-animal" => {
                let (kind, name) = args.split_first().ok_or(CommandError::MissingArgument {
                    command: "add-animal",
                    argument: "animal type",
                })?;
                Command::AddAnimal {
                    species: kind.parse()?,
                    name: rest("add-animal", "name", name)?,
                }
            }
            "add-crop" => {
                let (kind, name) = args.split_first().ok_or(CommandError::MissingArgument {
                    command: "add-crop",
                    argument: "crop type",
                })?;
                Command::AddCrop {
                    kind: kind.parse()?,
                    name: rest("add-crop", "name", name)?,
                }
            }
            "feed" => {
                let (target, amount) = text_then_number("feed", "animal", "amount", args)?;
                Command::Feed { target, amount }
            }
            "feed-all" => Command::FeedAll {
                amount: number("feed-all", &rest("feed-all", "amount", args)?)?,
            },
            "produce" => Command::Produce {
                target: rest("produce", "animal", args)?,
            },
            "produce-all" => Command::ProduceAll,
            "grow" => {
                let (target, days) = text_then_number("grow", "crop", "days", args)?;
                Command::Grow { target, days }
            }
            "grow-all" => Command::GrowAll {
                days: number("grow-all", &rest("grow-all", "days", args)?)?,
            },
            "water" => Command::Water {
                target: rest("water", "crop", args)?,
            },
            "water-all" => Command::WaterAll,
            "harvest" => Command::Harvest {
                target: rest("harvest", "crop", args)?,
            },
            "harvest-all" => Command::HarvestAll,
            "sell" => {
                let (product, quantity) = text_then_number("sell", "product", "quantity", args)?;
                Command::Sell { product, quantity }
            }
            "day" => Command::Day,
            "report" => Command::Report {
                json: args.iter().any(|a| a.eq_ignore_ascii_case("--json")),
            },
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
