//! Integration test suite for the `sf-ant` binary.
//!
//! Run with:
//!   cargo test --test integration

#[path = "integration/common.rs"]
mod common;
#[path = "integration/cli.rs"]
mod cli;
#[path = "integration/ant.rs"]
mod ant;
