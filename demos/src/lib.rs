//! Shared helpers for the timebuckets demos.

pub mod common;
