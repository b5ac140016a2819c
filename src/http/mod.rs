//! HTTP protocol layer module
//!
//! Response builders shared by the reflector and the error paths,
//! decoupled from the reflection logic itself.

pub mod response;

// Re-export commonly used types
pub use response::{build_bytes_response, build_error_response};
