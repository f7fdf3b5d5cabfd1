//! Chart projection — plotters drawing of agent bars and book frames.
//!
//! Everything here projects already-computed state onto pixels; all numeric
//! decisions (alignment, scale, frame contents) are made upstream.

use crate::align::Side;
use crate::error::{VizError, VizResult};
use crate::render::RenderState;
use crate::snapshot::AgentRecord;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

const BID_COLOR: RGBColor = RGBColor(0, 128, 0);
const ASK_COLOR: RGBColor = RGBColor(200, 30, 30);
const CAPITAL_COLOR: RGBColor = RGBColor(0, 128, 0);
const SHARES_COLOR: RGBColor = RGBColor(30, 60, 200);

pub const BOOK_FRAME_SIZE: (u32, u32) = (900, 600);
pub const AGENTS_CHART_SIZE: (u32, u32) = (1000, 500);

/// Draw one book frame from the renderer's current handles onto `root`.
/// Shared by the static chart and every animation frame.
pub fn draw_book_frame(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    state: &RenderState<'_>,
) -> VizResult<()> {
    root.fill(&WHITE).map_err(VizError::render)?;

    let (x_min, x_max, half_width) = level_geometry(state.levels());
    let mut chart = ChartBuilder::on(root)
        .caption(state.title(), ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(x_min..x_max, 0.0..state.y_max())
        .map_err(VizError::render)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .draw()
        .map_err(VizError::render)?;

    // Bids first, asks on top at reduced width so both stay visible at the
    // shared x positions.
    for &(side, shrink) in &[(Side::Bid, 1.0), (Side::Ask, 0.55)] {
        let color = side_color(side);
        let w = half_width * shrink;
        chart
            .draw_series(
                state
                    .bars()
                    .iter()
                    .filter(|bar| bar.column.side == side && bar.height > 0)
                    .map(|bar| {
                        let x = bar.column.price;
                        Rectangle::new([(x - w, 0.0), (x + w, bar.height as f64)], color.filled())
                    }),
            )
            .map_err(VizError::render)?
            .label(side.label())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 4), (x + 10, y + 4)], color.filled())
            });
    }

    chart
        .configure_series_labels()
        .border_style(&BLACK)
        .background_style(&WHITE.mix(0.8))
        .draw()
        .map_err(VizError::render)?;
    Ok(())
}

/// Side-by-side capital and shares bars for one tick's agent table, with a
/// value label above each bar.
pub fn agents_chart(agents: &[AgentRecord], path: &Path) -> VizResult<()> {
    let root = BitMapBackend::new(path, AGENTS_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(VizError::render)?;

    let x_min = agents.iter().map(|a| a.id).min().unwrap_or(0) as f64 - 1.0;
    let x_max = agents.iter().map(|a| a.id).max().unwrap_or(1) as f64 + 1.0;
    let y_top = agents
        .iter()
        .flat_map(|a| [a.capital, a.shares as f64])
        .fold(1.0f64, f64::max)
        * crate::scale::SCALE_MARGIN;

    let mut chart = ChartBuilder::on(&root)
        .caption("Agents", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(x_min..x_max, 0.0..y_top)
        .map_err(VizError::render)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .draw()
        .map_err(VizError::render)?;

    // Two bars per agent: capital at the id position, shares beside it.
    const BAR_WIDTH: f64 = 0.25;
    for agent in agents {
        let x = agent.id as f64;
        draw_labeled_bar(&mut chart, x + BAR_WIDTH * 0.5, agent.capital, CAPITAL_COLOR)?;
        draw_labeled_bar(
            &mut chart,
            x + BAR_WIDTH * 1.5,
            agent.shares as f64,
            SHARES_COLOR,
        )?;
    }

    root.present().map_err(VizError::render)?;
    Ok(())
}

type AgentsChart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

fn draw_labeled_bar(
    chart: &mut AgentsChart<'_, '_>,
    x: f64,
    value: f64,
    color: RGBColor,
) -> VizResult<()> {
    const HALF: f64 = 0.125;
    chart
        .draw_series(std::iter::once(Rectangle::new(
            [(x - HALF, 0.0), (x + HALF, value)],
            color.filled(),
        )))
        .map_err(VizError::render)?;
    chart
        .draw_series(std::iter::once(Text::new(
            format!("{value:.0}"),
            (x - HALF, value),
            ("sans-serif", 12),
        )))
        .map_err(VizError::render)?;
    Ok(())
}

fn side_color(side: Side) -> RGBColor {
    match side {
        Side::Bid => BID_COLOR,
        Side::Ask => ASK_COLOR,
    }
}

/// X span and bar half-width for a level axis. The half-width comes from
/// the smallest gap between adjacent levels so neighboring bars cannot
/// overlap, with a fallback for single-level or empty axes.
fn level_geometry(levels: &[f64]) -> (f64, f64, f64) {
    let (min, max) = match (levels.first(), levels.last()) {
        (Some(&min), Some(&max)) => (min, max),
        _ => (0.0, 1.0),
    };
    let min_gap = levels
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min);
    let half_width = if min_gap.is_finite() { min_gap * 0.4 } else { 0.4 };
    (min - 2.0 * half_width, max + 2.0 * half_width, half_width)
}
