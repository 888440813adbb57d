//! Command line grammar

use anyhow::{anyhow, bail, Context, Result};
use ranklist_core::{Direction, Score};
use std::str::FromStr;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a name, or move it to a new score if already present
    Set { name: String, score: Score },
    Delete { name: String },
    Rank { name: String },
    At { rank: usize },
    Top { n: usize },
    Near { rank: usize, up: usize, down: usize },
    Range { min: Score, max: Score },
    DeleteScores { min: Score, max: Score },
    DeleteRanks { start: usize, end: usize },
    Walk { direction: Direction, limit: Option<usize> },
    Len,
    Height,
    Dump,
    Verify,
    Help,
}

pub const HELP: &str = "\
commands:
  set <name> <score>        insert or move a name
  del <name>                remove a name
  rank <name>               ascending rank and leaderboard position
  at <rank>                 element at a 1-based rank
  top <n>                   best n names
  near <rank> <up> <down>   names around a rank
  range <min> <max>         names with score in [min, max]
  delscore <min> <max>      remove names with score in [min, max]
  delrank <start> <end>     remove ranks [start, end]
  walk asc|desc [limit]     list names with ranks
  len | height | dump | verify | help";

fn arg<T>(parts: &[&str], idx: usize, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = parts
        .get(idx)
        .ok_or_else(|| anyhow!("missing {}", what))?;
    raw.parse()
        .with_context(|| format!("invalid {} '{}'", what, raw))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(verb) = parts.first() else {
            bail!("empty command");
        };

        let cmd = match verb.to_ascii_lowercase().as_str() {
            "set" | "insert" => Command::Set {
                name: arg(&parts, 1, "name")?,
                score: arg(&parts, 2, "score")?,
            },
            "del" | "delete" => Command::Delete {
                name: arg(&parts, 1, "name")?,
            },
            "rank" => Command::Rank {
                name: arg(&parts, 1, "name")?,
            },
            "at" => Command::At {
                rank: arg(&parts, 1, "rank")?,
            },
            "top" => Command::Top {
                n: arg(&parts, 1, "count")?,
            },
            "near" => Command::Near {
                rank: arg(&parts, 1, "rank")?,
                up: arg(&parts, 2, "up")?,
                down: arg(&parts, 3, "down")?,
            },
            "range" => Command::Range {
                min: arg(&parts, 1, "min")?,
                max: arg(&parts, 2, "max")?,
            },
            "delscore" => Command::DeleteScores {
                min: arg(&parts, 1, "min")?,
                max: arg(&parts, 2, "max")?,
            },
            "delrank" => Command::DeleteRanks {
                start: arg(&parts, 1, "start")?,
                end: arg(&parts, 2, "end")?,
            },
            "walk" => {
                let direction = match parts.get(1).copied() {
                    None | Some("asc") => Direction::Ascending,
                    Some("desc") => Direction::Descending,
                    Some(other) => bail!("invalid direction '{}', expected asc or desc", other),
                };
                let limit = if parts.len() > 2 {
                    Some(arg(&parts, 2, "limit")?)
                } else {
                    None
                };
                Command::Walk { direction, limit }
            }
            "len" => Command::Len,
            "height" => Command::Height,
            "dump" => Command::Dump,
            "verify" => Command::Verify,
            "help" => Command::Help,
            other => bail!("unknown command '{}'", other),
        };
        Ok(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "set jack 2012".parse::<Command>().unwrap(),
            Command::Set {
                name: "jack".into(),
                score: 2012
            }
        );
        assert_eq!(
            "NEAR 5 2 1".parse::<Command>().unwrap(),
            Command::Near {
                rank: 5,
                up: 2,
                down: 1
            }
        );
        assert_eq!(
            "walk desc 3".parse::<Command>().unwrap(),
            Command::Walk {
                direction: Direction::Descending,
                limit: Some(3)
            }
        );
        assert_eq!(
            "walk".parse::<Command>().unwrap(),
            Command::Walk {
                direction: Direction::Ascending,
                limit: None
            }
        );
        assert_eq!("dump".parse::<Command>().unwrap(), Command::Dump);
    }

    #[test]
    fn test_parse_errors() {
        assert!("".parse::<Command>().is_err());
        assert!("fly away".parse::<Command>().is_err());
        assert!("set jack".parse::<Command>().is_err());
        assert!("set jack -4".parse::<Command>().is_err());
        assert!("walk sideways".parse::<Command>().is_err());

        let err = "at x".parse::<Command>().unwrap_err();
        assert_eq!(err.to_string(), "invalid rank 'x'");
    }
}
