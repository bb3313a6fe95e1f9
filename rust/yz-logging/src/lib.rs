//! yz-logging: NDJSON score events.
//!
//! Append-only, one JSON object per line, so logs survive partial writes and can be
//! concatenated across runs.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use thiserror::Error;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifies the rule set that produced a score.
pub const RULESET_ID: &str = "yatzy_ones_chance_yatzy_v1";

pub fn now_ms() -> u64 {
    let d = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    d.as_millis() as u64
}

pub fn hash_config_bytes(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

#[derive(Debug, Clone, Serialize)]
pub struct VersionInfoV1 {
    pub ruleset_id: &'static str,
}

impl Default for VersionInfoV1 {
    fn default() -> Self {
        Self {
            ruleset_id: RULESET_ID,
        }
    }
}

/// One scored category for one roll.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreEventV1 {
    pub event: &'static str,
    pub ts_ms: u64,
    pub v: VersionInfoV1,

    pub dice: [u8; 5],
    pub category: &'static str,
    pub score: u32,

    pub config_hash: Option<String>,
}

impl ScoreEventV1 {
    pub fn new(dice: [u8; 5], category: &'static str, score: u32) -> Self {
        Self {
            event: "score",
            ts_ms: now_ms(),
            v: VersionInfoV1::default(),
            dice,
            category,
            score,
            config_hash: None,
        }
    }

    pub fn with_config_hash(mut self, config_hash: Option<String>) -> Self {
        self.config_hash = config_hash;
        self
    }
}

/// Event log errors.
#[derive(Error, Debug)]
pub enum NdjsonError {
    #[error("event log I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("event encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Append-only NDJSON writer.
///
/// Contract: each call writes exactly one JSON object followed by a newline.
pub struct NdjsonWriter {
    w: BufWriter<File>,
    lines_since_flush: u64,
    flush_every_lines: u64,
}

impl NdjsonWriter {
    /// Open a file for append. Creates it if it doesn't exist.
    pub fn open_append(path: impl AsRef<Path>) -> Result<Self, NdjsonError> {
        Self::open_append_with_flush(path, 0)
    }

    /// `flush_every_lines=0` disables periodic flushing.
    pub fn open_append_with_flush(
        path: impl AsRef<Path>,
        flush_every_lines: u64,
    ) -> Result<Self, NdjsonError> {
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            w: BufWriter::new(f),
            lines_since_flush: 0,
            flush_every_lines,
        })
    }

    pub fn write_event<T: Serialize>(&mut self, event: &T) -> Result<(), NdjsonError> {
        let mut buf = serde_json::to_vec(event)?;
        buf.push(b'\n');
        self.w.write_all(&buf)?;
        self.lines_since_flush += 1;
        if self.flush_every_lines > 0 && self.lines_since_flush >= self.flush_every_lines {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), NdjsonError> {
        self.w.flush()?;
        self.lines_since_flush = 0;
        Ok(())
    }
}
