//! Temporal aligner — sparse per-tick distributions into one dense,
//! globally aligned table.
//!
//! RULES:
//!   - The level axis is the union over ALL ticks and BOTH sides, so bids
//!     and asks share x positions in every frame.
//!   - Levels are sorted ascending by price, once; the order is fixed for
//!     the whole run.
//!   - Every absent (tick, side, level) cell is written as an explicit 0.

use crate::error::{VizError, VizResult};
use crate::parse::parse_book;
use crate::snapshot::TickSnapshot;
use crate::types::Quantity;
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, BTreeSet};

/// Which side of the book a column belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bid,
    Ask,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Bid => "bids",
            Side::Ask => "asks",
        }
    }
}

/// One column of the aligned table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnKey {
    pub side: Side,
    pub price: f64,
}

/// Dense tick × column matrix. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedTable {
    levels: Vec<f64>,
    bids: Vec<Vec<Quantity>>,
    asks: Vec<Vec<Quantity>>,
}

impl AlignedTable {
    /// Build the aligned table from the full ordered snapshot sequence.
    ///
    /// Rejects an empty sequence, and any snapshot whose declared tick
    /// disagrees with its position — input order is not trusted to repair
    /// a corrupt dump.
    pub fn from_snapshots(snapshots: &[TickSnapshot]) -> VizResult<Self> {
        if snapshots.is_empty() {
            return Err(VizError::EmptyInput);
        }

        let mut books = Vec::with_capacity(snapshots.len());
        for (index, snapshot) in snapshots.iter().enumerate() {
            if snapshot.tick != index as u64 {
                return Err(VizError::NonContiguousTick {
                    index,
                    expected: index as u64,
                    actual: snapshot.tick,
                });
            }
            books.push(parse_book(index, &snapshot.order_book)?);
        }

        let mut level_set: BTreeSet<OrderedFloat<f64>> = BTreeSet::new();
        for book in &books {
            level_set.extend(book.bids.keys().copied());
            level_set.extend(book.asks.keys().copied());
        }
        // BTreeSet iteration is already ascending by price.
        let levels: Vec<f64> = level_set.iter().map(|p| p.into_inner()).collect();

        let mut bids = Vec::with_capacity(books.len());
        let mut asks = Vec::with_capacity(books.len());
        for book in &books {
            bids.push(dense_row(&levels, &book.bids));
            asks.push(dense_row(&levels, &book.asks));
        }

        log::debug!(
            "aligned {} ticks over {} shared price levels",
            books.len(),
            levels.len()
        );

        Ok(Self { levels, bids, asks })
    }

    /// Shared level axis, ascending by price.
    pub fn levels(&self) -> &[f64] {
        &self.levels
    }

    pub fn row_count(&self) -> usize {
        self.bids.len()
    }

    pub fn bid_row(&self, tick_index: usize) -> &[Quantity] {
        &self.bids[tick_index]
    }

    pub fn ask_row(&self, tick_index: usize) -> &[Quantity] {
        &self.asks[tick_index]
    }

    /// Largest quantity anywhere in the table.
    pub fn max_quantity(&self) -> Quantity {
        self.bids
            .iter()
            .chain(self.asks.iter())
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }

    /// Fixed column layout: every bid column in ascending price order, then
    /// every ask column in the same order. Identical for every row.
    pub fn columns(&self) -> Vec<ColumnKey> {
        let side_columns = |side| {
            self.levels
                .iter()
                .map(move |&price| ColumnKey { side, price })
        };
        side_columns(Side::Bid).chain(side_columns(Side::Ask)).collect()
    }
}

/// Densify one sparse side over the shared axis: recorded quantity where
/// present, explicit 0 elsewhere.
fn dense_row(levels: &[f64], sparse: &BTreeMap<OrderedFloat<f64>, Quantity>) -> Vec<Quantity> {
    levels
        .iter()
        .map(|&price| sparse.get(&OrderedFloat(price)).copied().unwrap_or(0))
        .collect()
}
