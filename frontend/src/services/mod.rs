//! Analysis service communication.
//!
//! # Services
//!
//! - [`analyze`] - Multipart upload of papers to the analysis endpoint
//! - [`health`] - Service liveness probe

pub mod analyze;
pub mod health;

pub use analyze::*;
pub use health::*;
