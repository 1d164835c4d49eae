//! Test doubles for the share capability surface.

mod platform;

pub use platform::{MockSharePlatform, MockShareResult};
