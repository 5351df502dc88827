use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::components::Side;
use crate::resources::Score;

/// One completed match. `Display` is the persisted wire format, one line
/// per match: `"{name1} vs {name2}: {leftScore}-{rightScore}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub player1: String,
    pub player2: String,
    pub left_score: u8,
    pub right_score: u8,
}

impl MatchRecord {
    pub fn new(
        player1: impl Into<String>,
        player2: impl Into<String>,
        score: Score,
    ) -> Self {
        Self {
            player1: player1.into(),
            player2: player2.into(),
            left_score: score.left,
            right_score: score.right,
        }
    }

    pub fn winner(&self) -> Side {
        if self.left_score > self.right_score {
            Side::Left
        } else {
            Side::Right
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vs {}: {}-{}",
            self.player1, self.player2, self.left_score, self.right_score
        )
    }
}

/// Append-only human-readable match history file.
#[derive(Debug)]
pub struct MatchLog {
    path: PathBuf,
    entries: Vec<String>,
}

impl MatchLog {
    /// Open a log, loading any existing entries. A missing file is an
    /// empty history, not an error.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load match log");
                return Err(e);
            }
        };
        Ok(Self { path, entries })
    }

    pub fn append(&mut self, record: &MatchRecord) -> io::Result<()> {
        let line = record.to_string();
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")?;
        info!(entry = %line, "match logged");
        self.entries.push(line);
        Ok(())
    }

    /// The most recent `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(l: u8, r: u8) -> MatchRecord {
        MatchRecord::new("Ada", "Grace", Score { left: l, right: r })
    }

    #[test]
    fn test_record_line_format() {
        assert_eq!(record(5, 3).to_string(), "Ada vs Grace: 5-3");
    }

    #[test]
    fn test_record_winner() {
        assert_eq!(record(5, 3).winner(), Side::Left);
        assert_eq!(record(2, 5).winner(), Side::Right);
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = MatchLog::open(dir.path().join("history.txt")).unwrap();
        assert!(log.is_empty());
    }

    #[test]
    fn test_append_then_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");

        let mut log = MatchLog::open(&path).unwrap();
        log.append(&record(5, 2)).unwrap();
        log.append(&record(1, 5)).unwrap();
        assert_eq!(log.len(), 2);

        let reopened = MatchLog::open(&path).unwrap();
        assert_eq!(
            reopened.recent(10),
            &["Ada vs Grace: 5-2".to_string(), "Ada vs Grace: 1-5".to_string()]
        );
    }

    #[test]
    fn test_recent_caps_at_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = MatchLog::open(dir.path().join("history.txt")).unwrap();
        for i in 0..8 {
            log.append(&record(5, i)).unwrap();
        }
        let recent = log.recent(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent.last().unwrap(), "Ada vs Grace: 5-7");
    }
}
