mod display;
mod errors;
mod fetcher;
mod payload;
mod platform;
pub mod share_sdk_test;

pub use display::{DisplayRef, DisplayRegistry};
pub use errors::*;
pub use fetcher::{FetchedArtifact, ImageFetcher, DEFAULT_IMAGE_URL};
pub use payload::{
    SharePayload, ShareFile, METHOD_NAMES, SHARED_FILE_NAME, SHARED_FILE_TYPE,
};
pub use platform::{ShareCapability, SharePlatform};
