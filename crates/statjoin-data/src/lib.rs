//! Data layer for statjoin.
//!
//! Responsible for reading per-metric CSV tables, joining them into
//! per-state rows keyed by region, and writing the final JSON document.

pub mod joiner;
pub mod reader;
pub mod writer;

pub use statjoin_core as core;
