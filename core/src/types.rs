//! Shared primitive types used across the pipeline.

/// A simulation tick. One tick = one snapshot = one animation frame.
pub type Tick = u64;

/// A recorded order quantity at one price level. Always a non-negative integer.
pub type Quantity = u64;

/// Stable agent identifier carried through from the simulator dump.
pub type AgentId = i64;
