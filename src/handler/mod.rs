//! Request handler module
//!
//! Entry point for every HTTP request: dispatches to the reflector and
//! writes the access log.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
