//! Frame renderer — persistent bar handles mutated row by row.
//!
//! RULES:
//!   - All handles are allocated exactly once, at init.
//!   - render_frame mutates bar heights and the title text, nothing else:
//!     no handle is created, dropped, or reordered after init.
//!   - An out-of-range frame index is a contract violation and is rejected,
//!     never clamped.

use crate::align::{AlignedTable, ColumnKey};
use crate::error::{VizError, VizResult};
use crate::types::Quantity;

/// One persistent visual primitive: a bar for one (side, price) column.
#[derive(Debug, Clone, PartialEq)]
pub struct BarHandle {
    pub column: ColumnKey,
    pub height: Quantity,
}

/// All mutable drawing state for the animation. Construction is the
/// Uninitialized→Ready transition: a RenderState that exists is ready, so
/// "init before any frame render" holds by the type system.
#[derive(Debug)]
pub struct RenderState<'a> {
    table: &'a AlignedTable,
    bars: Vec<BarHandle>,
    title: String,
    y_max: f64,
}

impl<'a> RenderState<'a> {
    /// Allocate one bar handle per aligned column plus the title handle.
    /// Heights start at 0; call render_frame before drawing.
    pub fn init(table: &'a AlignedTable, y_max: f64) -> Self {
        let bars = table
            .columns()
            .into_iter()
            .map(|column| BarHandle { column, height: 0 })
            .collect();
        Self {
            table,
            bars,
            title: String::new(),
            y_max,
        }
    }

    /// Project one aligned row onto the existing handles and return them.
    ///
    /// The column order produced at init matches the table's bid-then-ask
    /// layout, so the row values zip straight onto the handle list.
    pub fn render_frame(&mut self, tick_index: usize) -> VizResult<&[BarHandle]> {
        let frames = self.table.row_count();
        if tick_index >= frames {
            return Err(VizError::FrameIndex {
                index: tick_index,
                frames,
            });
        }

        let bid_row = self.table.bid_row(tick_index);
        let ask_row = self.table.ask_row(tick_index);
        for (bar, &quantity) in self.bars.iter_mut().zip(bid_row.iter().chain(ask_row)) {
            bar.height = quantity;
        }
        self.title = format!("tick {tick_index}");

        Ok(&self.bars)
    }

    pub fn bars(&self) -> &[BarHandle] {
        &self.bars
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Fixed vertical bound shared by every frame.
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    pub fn levels(&self) -> &[f64] {
        self.table.levels()
    }
}
