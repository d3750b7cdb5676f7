//! Offline builder library for the component registry

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod builder;

pub use builder::{BuildSummary, IndexDocument, IndexEntry, build_registry};
