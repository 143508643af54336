//! Library components of the `extract-valueset` command.

pub mod logging;
pub mod pipeline;
