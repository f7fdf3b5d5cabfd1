//! Snapshot parser — one raw tick record into an agent table and a
//! per-side sparse price→quantity map.
//!
//! Pure transformation, no side effects. All per-tick input validation
//! happens here, before alignment ever sees the data.

use crate::error::{VizError, VizResult};
use crate::snapshot::{AgentRecord, OrderBookSnapshot, TickSnapshot};
use crate::types::Quantity;
use ordered_float::OrderedFloat;
use std::collections::{BTreeMap, HashSet};

/// Sparse per-side distribution for one tick, keyed by price level.
#[derive(Debug, Clone, Default)]
pub struct SparseBook {
    pub bids: BTreeMap<OrderedFloat<f64>, Quantity>,
    pub asks: BTreeMap<OrderedFloat<f64>, Quantity>,
}

#[derive(Debug, Clone)]
pub struct ParsedTick {
    pub agents: Vec<AgentRecord>,
    pub book: SparseBook,
}

/// Parse one tick record. `index` is the snapshot's position in the input
/// sequence and is used for error reporting only.
pub fn parse_tick(index: usize, snapshot: &TickSnapshot) -> VizResult<ParsedTick> {
    Ok(ParsedTick {
        agents: parse_agents(index, &snapshot.agents)?,
        book: parse_book(index, &snapshot.order_book)?,
    })
}

/// Validate one tick's agent roster. The id stays as the row key; duplicate
/// ids would make the key ambiguous and are rejected.
pub fn parse_agents(index: usize, agents: &[AgentRecord]) -> VizResult<Vec<AgentRecord>> {
    let mut seen = HashSet::new();
    for agent in agents {
        if !seen.insert(agent.id) {
            return Err(malformed(index, format!("duplicate agent id {}", agent.id)));
        }
        if !agent.capital.is_finite() {
            return Err(malformed(
                index,
                format!("agent {} has non-finite capital {}", agent.id, agent.capital),
            ));
        }
    }
    Ok(agents.to_vec())
}

pub fn parse_book(index: usize, book: &OrderBookSnapshot) -> VizResult<SparseBook> {
    Ok(SparseBook {
        bids: parse_side(index, "bid", &book.bid_counts)?,
        asks: parse_side(index, "ask", &book.ask_counts)?,
    })
}

fn parse_side(
    index: usize,
    side: &str,
    counts: &[(f64, f64)],
) -> VizResult<BTreeMap<OrderedFloat<f64>, Quantity>> {
    let mut out = BTreeMap::new();
    for &(price, quantity) in counts {
        if !price.is_finite() {
            return Err(malformed(
                index,
                format!("non-finite {side} price level {price}"),
            ));
        }
        let quantity = integral_quantity(index, side, price, quantity)?;
        if out.insert(OrderedFloat(price), quantity).is_some() {
            return Err(malformed(
                index,
                format!("duplicate {side} price level {price}"),
            ));
        }
    }
    Ok(out)
}

/// Quantities must be non-negative integers. The dump encodes them as plain
/// JSON numbers, so both constraints are checked here.
fn integral_quantity(index: usize, side: &str, price: f64, raw: f64) -> VizResult<Quantity> {
    if !raw.is_finite() || raw < 0.0 || raw.fract() != 0.0 {
        return Err(malformed(
            index,
            format!("{side} quantity {raw} at price level {price} is not a non-negative integer"),
        ));
    }
    Ok(raw as Quantity)
}

fn malformed(tick: usize, reason: String) -> VizError {
    VizError::MalformedSnapshot { tick, reason }
}
