//! Library components of the movie catalogue cleaner CLI.

pub mod logging;
pub mod pipeline;
