//! bookviz-core — snapshot-alignment and animated-rendering pipeline for
//! market simulation dumps.
//!
//! PIPELINE (fixed, one direction, no stage re-entry):
//!   1. parse    — one raw tick record -> agent table + sparse book
//!   2. align    — all sparse books -> dense table over one shared level axis
//!   3. scale    — one global vertical bound for the whole run
//!   4. render   — persistent bar handles mutated row by row
//!   5. animate  — frames sequenced into PNG / GIF artifacts

pub mod align;
pub mod animate;
pub mod charts;
pub mod error;
pub mod parse;
pub mod render;
pub mod scale;
pub mod snapshot;
pub mod types;
