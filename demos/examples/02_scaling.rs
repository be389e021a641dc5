use std::sync::Arc;

use chrono::TimeDelta;
use timebuckets::{MemoryConfigStore, TimeBuckets};
use timebuckets_demos::common::describe_interval;
use timebuckets_mock::MockAutoInterval;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // An auto calculator that always suggests 8h, so a week gives 21 buckets.
    let auto = Arc::new(MockAutoInterval::new().with_fixed_near(TimeDelta::hours(8)));
    let store = Arc::new(MemoryConfigStore::new());
    store.set("histogram:barTarget", 20);
    store.set("histogram:maxBars", 15);

    let mut buckets = TimeBuckets::builder()
        .auto_interval(auto.clone())
        .config(store.clone())
        .build()?;
    buckets.set_bounds(("2024-01-01", "2024-01-08"))?;
    buckets.set_interval("auto")?;

    let interval = buckets.get_interval();
    println!("{}", describe_interval(&buckets, &interval));
    println!("calculator calls: {:?}", auto.calls());

    // Raising the cap takes effect on the next call.
    store.set("histogram:maxBars", 100);
    let interval = buckets.get_interval();
    println!("{}", describe_interval(&buckets, &interval));
    Ok(())
}
