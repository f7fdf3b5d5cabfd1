//! plot-runner: headless chart runner for simulator snapshot dumps.
//!
//! Usage:
//!   plot-runner --input data/pretty.json --out-dir img
//!   plot-runner --input data/pretty.json --out-dir img --tick 2 --frame-ms 100

use anyhow::{Context, Result};
use bookviz_core::{
    align::AlignedTable,
    animate::{animate_book, book_frame_png, FRAME_DELAY_MS},
    charts::agents_chart,
    parse::parse_agents,
    scale::resolve_y_max,
    snapshot::load_snapshots,
};
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let input = parse_path(&args, "--input", "data/pretty.json");
    let out_dir = parse_path(&args, "--out-dir", "img");
    let tick = parse_arg(&args, "--tick", 0usize);
    let frame_ms = parse_arg(&args, "--frame-ms", FRAME_DELAY_MS);

    println!("plot-runner");
    println!("  input:    {}", input.display());
    println!("  out dir:  {}", out_dir.display());
    println!("  tick:     {tick}");
    println!("  frame ms: {frame_ms}");
    println!();

    let snapshots = load_snapshots(&input)
        .with_context(|| format!("loading snapshots from {}", input.display()))?;
    let table = AlignedTable::from_snapshots(&snapshots)?;

    if tick >= table.row_count() {
        anyhow::bail!(
            "--tick {tick} out of range: input has {} ticks",
            table.row_count()
        );
    }

    fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let agents = parse_agents(tick, &snapshots[tick].agents)?;
    let agents_path = out_dir.join("agents.png");
    agents_chart(&agents, &agents_path)?;
    log::info!("agents chart written: {}", agents_path.display());

    let book_path = out_dir.join("book.png");
    book_frame_png(&table, tick, &book_path)?;
    log::info!("static book chart written: {}", book_path.display());

    let gif_path = out_dir.join("book.gif");
    animate_book(&table, &gif_path, frame_ms)?;

    println!("=== RUN SUMMARY ===");
    println!("  ticks:        {}", table.row_count());
    println!("  price levels: {}", table.levels().len());
    println!("  y max:        {:.2}", resolve_y_max(&table));
    println!("  wrote:        {}", agents_path.display());
    println!("  wrote:        {}", book_path.display());
    println!("  wrote:        {}", gif_path.display());

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn parse_path(args: &[String], flag: &str, default: &str) -> PathBuf {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| PathBuf::from(&w[1]))
        .unwrap_or_else(|| PathBuf::from(default))
}
