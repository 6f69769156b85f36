//! Fetch a GitHub user's contribution data and render it as a summary card.
//!
//! The [`summary`] module holds the pure computation pipeline (streaks,
//! language shares, score and rank); [`github`] fetches the raw data and
//! [`render`] turns a computed [`summary::Summary`] into SVG, markdown or a
//! terminal report.

pub mod endpoint;
pub mod error;
pub mod github;
pub mod render;
pub mod summary;

pub use error::Error;
