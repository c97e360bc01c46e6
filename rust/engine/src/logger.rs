use serde::{Deserialize, Serialize};

use crate::ai::Difficulty;
use crate::board::PlayerId;
use crate::engine::{Engine, GameMode, GameStatus, MoveRecord};

/// How a finished (or abandoned) game ended.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win { winner: PlayerId },
    Draw,
    Unfinished,
}

impl From<GameStatus> for GameResult {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::Won(winner) => GameResult::Win { winner },
            GameStatus::Draw => GameResult::Draw,
            GameStatus::InProgress => GameResult::Unfinished,
        }
    }
}

/// Complete record of one game: settings, moves in order and the result.
/// Serialized as one JSON object per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Identifier in `YYYYMMDD-NNNNNN` form
    pub game_id: String,
    /// Seed of the computer's RNG (replays the same tie-breaks)
    pub seed: u64,
    pub mode: GameMode,
    pub difficulty: Difficulty,
    /// Accepted moves in the order they were played
    pub moves: Vec<MoveRecord>,
    pub result: GameResult,
    /// Timestamp when the record was written (RFC3339)
    #[serde(default)]
    pub ts: Option<String>,
}

impl GameRecord {
    /// Snapshot of `engine` under the given id.
    pub fn from_engine(game_id: String, engine: &Engine) -> Self {
        Self {
            game_id,
            seed: engine.seed(),
            mode: engine.mode(),
            difficulty: engine.difficulty(),
            moves: engine.history().to_vec(),
            result: engine.status().into(),
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Appends [`GameRecord`]s to a JSONL file.
pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_per_date() {
        let mut logger = GameLogger::with_seq_for_test("20260101");
        assert_eq!(logger.next_id(), "20260101-000001");
        assert_eq!(logger.next_id(), "20260101-000002");
    }

    #[test]
    fn result_tracks_status() {
        assert_eq!(
            GameResult::from(GameStatus::Won(PlayerId::Two)),
            GameResult::Win {
                winner: PlayerId::Two
            }
        );
        assert_eq!(GameResult::from(GameStatus::Draw), GameResult::Draw);
        assert_eq!(
            GameResult::from(GameStatus::InProgress),
            GameResult::Unfinished
        );
    }
}
