//! Core domain logic: the progress state machine and the answer
//! normalization pipeline. Everything here is deterministic; time and
//! storage come in from the outside.

pub mod answer;
pub mod progress;

pub use answer::{bullet_points, clean};
pub use progress::{ProgressEvent, ProgressState, ProgressTracker};
