//! NOVA - gamified learning assistant CLI
//!
//! Ask a free-text question, get back a cleaned answer, and level up a
//! persistent learning streak while you do it. The interesting parts live
//! in [`core`]: the progress state machine (levels, streaks, badges) and
//! the answer text-normalization pipeline. Everything else is plumbing
//! around them: config, storage, the remote answer client, and the CLI.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod remote;
pub mod storage;
pub mod test_utils;
pub mod utils;

pub use error::{NovaError, Result};
