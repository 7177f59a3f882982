//! Request handler module
//!
//! Routing dispatch and the three behaviors behind it: interstitial
//! rendering, short-link resolution, and static file serving.

pub mod interstitial;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
