//! A list plus the caller-side presence index it relies on

use crate::command::{Command, HELP};
use anyhow::{bail, Result};
use ranklist_core::{Score, SkipList};
use std::collections::HashMap;
use std::fmt::Write;
use tracing::debug;

/// Interactive session state
///
/// The skip list needs each name's current score to find it, and must never
/// see the same name twice; `scores` tracks both.
pub struct Session {
    list: SkipList<String>,
    scores: HashMap<String, Score>,
}

impl Session {
    /// Create a session over an empty list
    pub fn new(list: SkipList<String>) -> Self {
        Self {
            list,
            scores: HashMap::new(),
        }
    }

    /// Number of names held
    pub fn len(&self) -> usize {
        self.list.len()
    }

    fn score_of(&self, name: &str) -> Result<Score> {
        match self.scores.get(name) {
            Some(score) => Ok(*score),
            None => bail!("'{}' is not ranked", name),
        }
    }

    /// Position counted from the best end
    fn position(&self, rank: usize) -> usize {
        self.list.len() - rank + 1
    }

    /// Drop presence entries whose element a range delete removed
    fn forget_removed(&mut self) {
        let list = &self.list;
        self.scores.retain(|name, score| list.contains(*score, name));
    }

    /// Run one command, returning its printable output
    pub fn execute(&mut self, cmd: Command) -> Result<String> {
        let mut out = String::new();
        match cmd {
            Command::Set { name, score } => {
                match self.scores.get(&name).copied() {
                    Some(old) => {
                        debug!("Moving {} from {} to {}", name, old, score);
                        if self.list.update_score(old, &name, score).is_none() {
                            bail!("'{}' is missing from the list", name);
                        }
                    }
                    None => {
                        self.list.insert(score, name.clone());
                    }
                }
                self.scores.insert(name.clone(), score);
                let Some(rank) = self.list.get_rank(score, &name) else {
                    bail!("'{}' is missing from the list", name);
                };
                write!(out, "{} {} #{}", name, score, self.position(rank))?;
            }
            Command::Delete { name } => {
                let score = self.score_of(&name)?;
                if self.list.delete(score, &name).is_none() {
                    bail!("'{}' is missing from the list", name);
                }
                self.scores.remove(&name);
                write!(out, "removed {}", name)?;
            }
            Command::Rank { name } => {
                let score = self.score_of(&name)?;
                let Some(rank) = self.list.get_rank(score, &name) else {
                    bail!("'{}' is missing from the list", name);
                };
                write!(
                    out,
                    "{} {} rank {} #{}",
                    name,
                    score,
                    rank,
                    self.position(rank)
                )?;
            }
            Command::At { rank } => match self.list.get_element_by_rank(rank) {
                Some((score, name)) => write!(out, "{} {} {}", rank, name, score)?,
                None => write!(out, "no element at rank {}", rank)?,
            },
            Command::Top { n } => {
                let names: Vec<&str> =
                    self.list.get_top_range(n).into_iter().map(String::as_str).collect();
                out.push_str(&names.join(" "));
            }
            Command::Near { rank, up, down } => {
                let names: Vec<&str> = self
                    .list
                    .get_near_range(rank, up, down)
                    .into_iter()
                    .map(String::as_str)
                    .collect();
                out.push_str(&names.join(" "));
            }
            Command::Range { min, max } => {
                let entries: Vec<String> = self
                    .list
                    .range(min, max)
                    .map(|(score, name)| format!("{}:{}", name, score))
                    .collect();
                out.push_str(&entries.join(" "));
            }
            Command::DeleteScores { min, max } => {
                let removed = self.list.delete_range_by_score(min, max);
                self.forget_removed();
                write!(out, "removed {}", removed)?;
            }
            Command::DeleteRanks { start, end } => {
                let removed = self.list.delete_range_by_rank(start, end);
                self.forget_removed();
                write!(out, "removed {}", removed)?;
            }
            Command::Walk { direction, limit } => {
                let limit = limit.unwrap_or(usize::MAX);
                let mut lines = Vec::new();
                if limit > 0 {
                    self.list.walk(direction, |rank, name| {
                        lines.push(format!("{} {}", rank, name));
                        lines.len() < limit
                    });
                }
                out.push_str(&lines.join("\n"));
            }
            Command::Len => write!(out, "{}", self.list.len())?,
            Command::Height => write!(out, "{}", self.list.height())?,
            Command::Dump => write!(out, "{}", self.list)?,
            Command::Verify => {
                self.list.verify()?;
                out.push_str("ok");
            }
            Command::Help => out.push_str(HELP),
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> String {
        session.execute(line.parse().unwrap()).unwrap()
    }

    fn players() -> Session {
        let mut session = Session::new(SkipList::new(1));
        for line in [
            "set jack 2012",
            "set tom 2015",
            "set mike 2014",
            "set john 2014",
            "set kevin 2011",
        ] {
            run(&mut session, line);
        }
        session
    }

    #[test]
    fn test_rank_and_position() {
        let mut session = players();
        assert_eq!(run(&mut session, "len"), "5");
        assert_eq!(run(&mut session, "rank jack"), "jack 2012 rank 2 #4");
        assert_eq!(run(&mut session, "rank tom"), "tom 2015 rank 5 #1");
        assert_eq!(run(&mut session, "at 3"), "3 john 2014");
        assert_eq!(run(&mut session, "top 2"), "tom mike");
        assert_eq!(run(&mut session, "near 3 1 1"), "jack john mike");
        assert_eq!(run(&mut session, "verify"), "ok");
    }

    #[test]
    fn test_set_moves_existing_name() {
        let mut session = players();
        assert_eq!(run(&mut session, "set jack 2022"), "jack 2022 #1");
        assert_eq!(run(&mut session, "len"), "5");
        assert_eq!(run(&mut session, "top 1"), "jack");
        assert_eq!(run(&mut session, "verify"), "ok");
    }

    #[test]
    fn test_range_delete_forgets_names() {
        let mut session = players();
        assert_eq!(run(&mut session, "range 2013 2015"), "john:2014 mike:2014 tom:2015");
        assert_eq!(run(&mut session, "delscore 2013 2015"), "removed 3");
        assert!(session.execute("rank tom".parse().unwrap()).is_err());

        // a forgotten name can come back without a duplicate
        run(&mut session, "set tom 1");
        assert_eq!(run(&mut session, "walk asc"), "1 tom\n2 kevin\n3 jack");
        assert_eq!(run(&mut session, "delrank 1 2"), "removed 2");
        assert_eq!(run(&mut session, "walk desc 5"), "1 jack");
        assert_eq!(run(&mut session, "verify"), "ok");
    }

    #[test]
    fn test_unknown_name() {
        let mut session = players();
        assert!(session.execute("del nobody".parse().unwrap()).is_err());
        assert_eq!(run(&mut session, "at 9"), "no element at rank 9");
        assert_eq!(run(&mut session, "walk desc 0"), "");
        assert_eq!(run(&mut session, "walk desc 2"), "5 tom\n4 mike");
    }

    #[test]
    fn test_index_out_of_step_with_list() {
        let mut session = players();
        session.list.delete(2012, &"jack".to_string());

        assert!(session.execute("del jack".parse().unwrap()).is_err());
        assert!(session.execute("set jack 2030".parse().unwrap()).is_err());
        assert_eq!(run(&mut session, "len"), "4");
        assert_eq!(run(&mut session, "verify"), "ok");
    }

    #[test]
    fn test_near_with_huge_counts() {
        let mut session = players();
        assert_eq!(
            run(&mut session, "near 2 99999999999999 0"),
            "kevin jack"
        );
        assert_eq!(
            run(&mut session, "near 4 0 18446744073709551615"),
            "mike tom"
        );
    }
}
