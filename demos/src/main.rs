//! timebuckets-demo: print the bucket interval for a time range.
//!
//! ```text
//! timebuckets-demo --from 2024-01-01 --to 2024-01-08 --bar-target 20 --max-bars 15
//! ```

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use timebuckets::{
    BAR_TARGET_KEY, BoundsUpdate, MAX_BARS_KEY, MemoryConfigStore, SerializableState, TimeBuckets,
};
use timebuckets_demos::common::{describe_interval, init_tracing};

#[derive(Parser)]
#[command(
    name = "timebuckets-demo",
    about = "Pick a histogram bucket interval for a time range"
)]
struct Cli {
    /// Lower bound (RFC 3339, YYYY-MM-DD, or epoch milliseconds).
    #[arg(long)]
    from: Option<String>,

    /// Upper bound.
    #[arg(long)]
    to: Option<String>,

    /// Requested interval: auto, a unit (hour, d) or an expression (3h, 90m).
    #[arg(long, default_value = "auto")]
    interval: String,

    /// Overrides histogram:barTarget.
    #[arg(long)]
    bar_target: Option<u32>,

    /// Overrides histogram:maxBars.
    #[arg(long)]
    max_bars: Option<u32>,

    /// Restore from a persisted state document instead of --from/--to/--interval.
    #[arg(long, conflicts_with_all = ["from", "to"])]
    state: Option<String>,

    /// Print the persisted state as JSON after the summary.
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let store = Arc::new(MemoryConfigStore::new());
    if let Some(n) = cli.bar_target {
        store.set(BAR_TARGET_KEY, n);
    }
    if let Some(n) = cli.max_bars {
        store.set(MAX_BARS_KEY, n);
    }

    let mut builder = TimeBuckets::builder().config(store);
    if let Some(doc) = &cli.state {
        let state: SerializableState =
            serde_json::from_str(doc).context("state is not a valid document")?;
        builder = builder.state(state);
    }
    let mut buckets = builder.build()?;

    if cli.state.is_none() {
        match (&cli.from, &cli.to) {
            (Some(from), Some(to)) => {
                if let BoundsUpdate::Cleared {
                    reason: Some(reason),
                } = buckets.set_bounds((from.as_str(), to.as_str()))?
                {
                    bail!("bounds rejected: {reason}");
                }
            }
            (None, None) => {}
            _ => bail!("--from and --to go together"),
        }
        buckets.set_interval(cli.interval.as_str())?;
    }

    let interval = buckets.get_interval();
    print!("{}", describe_interval(&buckets, &interval));
    if cli.json {
        println!("{}", serde_json::to_string(&buckets.serialize())?);
    }
    Ok(())
}
