use std::fmt::Write as _;

use timebuckets::{ResolvedInterval, TimeBuckets};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Suggested: `RUST_LOG=timebuckets=debug,timebuckets_calc=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE)
        .try_init();
}

/// Multi-line summary of a resolved interval.
#[must_use]
pub fn describe_interval(buckets: &TimeBuckets, interval: &ResolvedInterval) -> String {
    let mut out = String::new();
    if let Some(b) = buckets.get_bounds() {
        let _ = writeln!(out, "bounds:      {} .. {}", b.min().to_rfc3339(), b.max().to_rfc3339());
    }
    let _ = writeln!(
        out,
        "interval:    {} ({})",
        interval.query_expression(),
        interval.description()
    );
    match (interval.scale(), interval.pre_scaled()) {
        (Some(scale), Some(pre)) => {
            let _ = writeln!(
                out,
                "scaled:      yes, from {}ms (scale {scale:.4})",
                pre.num_milliseconds()
            );
        }
        _ => {
            let _ = writeln!(out, "scaled:      no");
        }
    }
    if let Some(fmt) = buckets.get_scaled_date_format() {
        let _ = writeln!(out, "date format: {fmt}");
    }
    out
}
