//! Animation driver — sequences the frame renderer across every tick and
//! serializes the frames into a single artifact.

use crate::align::AlignedTable;
use crate::charts::{draw_book_frame, BOOK_FRAME_SIZE};
use crate::error::{VizError, VizResult};
use crate::render::RenderState;
use crate::scale::resolve_y_max;
use plotters::prelude::*;
use std::path::Path;

/// Wall-clock pacing of the output artifact, per frame.
pub const FRAME_DELAY_MS: u32 = 200;

/// Play every aligned row back into an animated GIF at a fixed frame
/// interval and a fixed vertical scale.
///
/// One RenderState serves the whole run: each iteration mutates the same
/// handles and composites them onto the next GIF frame.
pub fn animate_book(table: &AlignedTable, path: &Path, frame_delay_ms: u32) -> VizResult<()> {
    let y_max = resolve_y_max(table);
    let root = BitMapBackend::gif(path, BOOK_FRAME_SIZE, frame_delay_ms)
        .map_err(VizError::render)?
        .into_drawing_area();

    let mut state = RenderState::init(table, y_max);
    for tick_index in 0..table.row_count() {
        state.render_frame(tick_index)?;
        draw_book_frame(&root, &state)?;
        root.present().map_err(VizError::render)?;
        log::debug!("animation frame {tick_index} written");
    }
    log::info!(
        "animation complete: {} frames -> {}",
        table.row_count(),
        path.display()
    );
    Ok(())
}

/// Render one selected tick as a standalone static chart: init plus a
/// single render_frame, then one serialized frame.
pub fn book_frame_png(table: &AlignedTable, tick_index: usize, path: &Path) -> VizResult<()> {
    let y_max = resolve_y_max(table);
    let root = BitMapBackend::new(path, BOOK_FRAME_SIZE).into_drawing_area();

    let mut state = RenderState::init(table, y_max);
    state.render_frame(tick_index)?;
    draw_book_frame(&root, &state)?;
    root.present().map_err(VizError::render)?;
    Ok(())
}
