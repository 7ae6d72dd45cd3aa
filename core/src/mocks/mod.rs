//! Mock collaborators for testing.
//!
//! Available when the `test-utils` feature is enabled (on by default) so
//! downstream crates can exercise the engine without real transports.

mod encoder;
mod notifier;

pub use encoder::{FailingEncoder, StaticEncoder};
pub use notifier::{FailingNotifier, RecordingNotifier};
