use timebuckets::{SerializableState, TimeBuckets};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut buckets = TimeBuckets::new();
    buckets.set_bounds(("2024-03-01", "2024-03-31"))?;
    buckets.set_interval("day")?;

    let json = serde_json::to_string_pretty(&buckets.serialize())?;
    println!("{json}");

    let state: SerializableState = serde_json::from_str(&json)?;
    let restored = TimeBuckets::builder().state(state).build()?;
    assert_eq!(restored.get_interval(), buckets.get_interval());
    println!("restored: {}", restored.get_interval());
    Ok(())
}
