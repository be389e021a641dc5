use timebuckets::TimeBuckets;
use timebuckets_demos::common::describe_interval;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buckets = TimeBuckets::new();
    buckets.set_interval("auto")?;

    for (from, to) in [
        ("2024-01-01T00:00:00Z", "2024-01-01T00:15:00Z"),
        ("2024-01-01T00:00:00Z", "2024-01-02T00:00:00Z"),
        ("2024-01-01T00:00:00Z", "2024-02-01T00:00:00Z"),
        ("2020-01-01T00:00:00Z", "2024-01-01T00:00:00Z"),
    ] {
        buckets.set_bounds((from, to))?;
        let interval = buckets.get_interval();
        println!("{}", describe_interval(&buckets, &interval));
    }
    Ok(())
}
