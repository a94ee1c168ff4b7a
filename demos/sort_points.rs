use bkd_point_sort::{BkdConfig, Point, PointArray, PointSort, DEFAULT_MAX_POINTS_IN_LEAF_NODE};
use log::info;
use nanorand::{Rng, WyRand};
use std::time::Instant;

fn run(n: usize, disable_sort_doc_id: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = BkdConfig::new(1, 1, 4, DEFAULT_MAX_POINTS_IN_LEAF_NODE, disable_sort_doc_id)?;
    let mut rng = WyRand::new();
    let mut docs: Vec<u32> = (0..n as u32).collect();

    // Docs only need a tie-break when they arrive out of order
    if !disable_sort_doc_id {
        rng.shuffle(&mut docs);
    }

    let points: Vec<Point> = docs
        .into_iter()
        .map(|doc| Point::new(rng.generate::<u32>().to_be_bytes(), doc))
        .collect();
    let mut seq = PointArray::new(points);

    let start = Instant::now();
    seq.sort_points(&config)?;

    info!(
        "disable_sort_doc_id={}, sorted {} points in {:?}",
        disable_sort_doc_id,
        n,
        start.elapsed()
    );

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    run(2_000_000, false)?;
    run(2_000_000, true)?;

    Ok(())
}
