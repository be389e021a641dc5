use timebuckets::TimeBuckets;
use timebuckets_demos::common::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug
    init_tracing();

    let mut buckets = TimeBuckets::new();
    buckets.set_interval("auto")?;

    // Unparseable bounds are cleared with a warning, not an error.
    let update = buckets.set_bounds(("last tuesday", "2024-01-08"))?;
    tracing::info!(?update, "bounds update");

    // 1h over a week is 168 buckets; scaling to max bars emits a debug event.
    buckets.set_bounds(("2024-01-01", "2024-01-08"))?;
    buckets.set_interval("1h")?;
    let interval = buckets.get_interval();
    tracing::info!(interval = %interval, scaled = interval.scaled(), "resolved");

    Ok(())
}
