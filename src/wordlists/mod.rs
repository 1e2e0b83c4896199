//! Word lists for secret selection
//!
//! Provides the embedded secret list compiled into the binary.

mod embedded;
pub mod loader;

pub use embedded::{SECRETS, SECRETS_COUNT};
