//! Port definitions.
//!
//! The orchestration code talks to the remote content API only through
//! these traits. The reqwest implementation lives in `mangadl-api`.

mod content_api;
mod error;

pub use content_api::ContentApiPort;
pub use error::{ApiPortError, ApiPortResult};

#[cfg(any(test, feature = "test-utils"))]
pub use content_api::MockContentApiPort;
