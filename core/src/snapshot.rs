//! Snapshot wire format — the simulator's JSON dump, one record per tick.
//!
//! The dump is a single JSON array. Each element carries the tick number,
//! the agent roster, and the order book's per-side (price, quantity) pairs
//! for that tick.

use crate::error::{VizError, VizResult};
use crate::types::{AgentId, Tick};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickSnapshot {
    pub tick: Tick,
    pub agents: Vec<AgentRecord>,
    pub order_book: OrderBookSnapshot,
}

/// One agent row. Dumps may carry extra per-agent fields; they are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentRecord {
    pub id: AgentId,
    pub capital: f64,
    pub shares: i64,
}

/// Sparse per-side distributions: unordered (price_level, quantity) pairs.
/// Quantities arrive as plain JSON numbers and are validated during parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    pub bid_counts: Vec<(f64, f64)>,
    pub ask_counts: Vec<(f64, f64)>,
}

/// Load the full snapshot sequence from a dump file.
///
/// Decoding is element-wise so a bad record is reported with its position
/// in the sequence rather than as an opaque whole-file failure.
pub fn load_snapshots(path: &Path) -> VizResult<Vec<TickSnapshot>> {
    let file = File::open(path)?;
    let raw: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))?;
    if raw.is_empty() {
        return Err(VizError::EmptyInput);
    }
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|e| VizError::MalformedSnapshot {
                tick: index,
                reason: e.to_string(),
            })
        })
        .collect()
}
