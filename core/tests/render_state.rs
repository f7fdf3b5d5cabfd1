//! Frame renderer tests: one-time handle allocation, mutation-only frame
//! updates, stable handle identity, and the frame-index contract.

use bookviz_core::align::{AlignedTable, ColumnKey};
use bookviz_core::error::VizError;
use bookviz_core::render::RenderState;
use bookviz_core::scale::resolve_y_max;
use bookviz_core::snapshot::{OrderBookSnapshot, TickSnapshot};

fn snapshot(tick: u64, bids: &[(f64, f64)], asks: &[(f64, f64)]) -> TickSnapshot {
    TickSnapshot {
        tick,
        agents: vec![],
        order_book: OrderBookSnapshot {
            bid_counts: bids.to_vec(),
            ask_counts: asks.to_vec(),
        },
    }
}

fn example_table() -> AlignedTable {
    let snapshots = vec![
        snapshot(0, &[(100.0, 5.0)], &[(105.0, 3.0)]),
        snapshot(1, &[(100.0, 2.0), (99.0, 1.0)], &[]),
    ];
    AlignedTable::from_snapshots(&snapshots).expect("align")
}

#[test]
fn init_allocates_one_handle_per_column() {
    let table = example_table();
    let state = RenderState::init(&table, resolve_y_max(&table));
    assert_eq!(state.bars().len(), 2 * table.levels().len());
    assert!(state.bars().iter().all(|bar| bar.height == 0));
    assert!(state.title().is_empty(), "no frame rendered yet");
}

#[test]
fn render_frame_projects_the_aligned_row() {
    let table = example_table();
    let mut state = RenderState::init(&table, resolve_y_max(&table));

    let bars = state.render_frame(0).expect("frame 0");
    let heights: Vec<u64> = bars.iter().map(|bar| bar.height).collect();
    // Bid columns over [99, 100, 105], then ask columns over the same axis.
    assert_eq!(heights, vec![0, 5, 0, 0, 0, 3]);
    assert_eq!(state.title(), "tick 0");

    state.render_frame(1).expect("frame 1");
    let heights: Vec<u64> = state.bars().iter().map(|bar| bar.height).collect();
    assert_eq!(heights, vec![1, 2, 0, 0, 0, 0]);
    assert_eq!(state.title(), "tick 1");
}

#[test]
fn handle_identity_is_stable_across_frames() {
    let table = example_table();
    let mut state = RenderState::init(&table, resolve_y_max(&table));

    let columns_before: Vec<ColumnKey> = state.bars().iter().map(|bar| bar.column).collect();
    for pass in 0..3 {
        for tick in 0..table.row_count() {
            state
                .render_frame(tick)
                .unwrap_or_else(|e| panic!("pass {pass} frame {tick}: {e}"));
        }
    }
    let columns_after: Vec<ColumnKey> = state.bars().iter().map(|bar| bar.column).collect();

    assert_eq!(
        columns_before, columns_after,
        "a column must always map to the same handle"
    );
    assert_eq!(state.bars().len(), columns_before.len(), "no reallocation");
}

#[test]
fn rendering_the_same_frame_twice_is_stable() {
    let table = example_table();
    let mut state = RenderState::init(&table, resolve_y_max(&table));

    let first: Vec<u64> = state
        .render_frame(1)
        .expect("frame 1")
        .iter()
        .map(|bar| bar.height)
        .collect();
    let second: Vec<u64> = state
        .render_frame(1)
        .expect("frame 1 again")
        .iter()
        .map(|bar| bar.height)
        .collect();
    assert_eq!(first, second);
}

#[test]
fn out_of_range_frame_index_is_rejected_not_clamped() {
    let table = example_table();
    let mut state = RenderState::init(&table, resolve_y_max(&table));

    let err = state.render_frame(5).unwrap_err();
    match err {
        VizError::FrameIndex { index, frames } => {
            assert_eq!(index, 5);
            assert_eq!(frames, 2);
        }
        other => panic!("expected FrameIndex, got {other:?}"),
    }
}

#[test]
fn fixed_scale_is_carried_unchanged() {
    let table = example_table();
    let state = RenderState::init(&table, 5.5);
    assert_eq!(state.y_max(), 5.5);
    assert_eq!(state.levels(), table.levels());
}
