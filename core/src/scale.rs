//! Scale resolver — one global vertical bound for every frame.

use crate::align::AlignedTable;

/// Multiplicative slack above the tallest bar so it never touches the plot
/// boundary.
pub const SCALE_MARGIN: f64 = 1.1;

/// Fallback axis height for an all-zero table. Never 0 — an empty axis
/// range is not drawable.
pub const MIN_Y_MAX: f64 = 1.0;

/// Compute the fixed vertical bound for the whole run. Computed once over
/// the entire table; frames never rescale individually, which is what keeps
/// quantity changes visually comparable across ticks.
pub fn resolve_y_max(table: &AlignedTable) -> f64 {
    match table.max_quantity() {
        0 => MIN_Y_MAX,
        max => max as f64 * SCALE_MARGIN,
    }
}
