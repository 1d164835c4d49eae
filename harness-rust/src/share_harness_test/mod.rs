//! Test doubles for the operator-facing surfaces.

mod notifier;

pub use notifier::RecordingNotifier;
