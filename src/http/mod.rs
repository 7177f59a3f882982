//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by every handler: response builders, MIME
//! lookup, HTML escaping, and URL safety checks. Decoupled from routing and
//! business logic.

pub mod escape;
pub mod mime;
pub mod response;
pub mod url;

// Re-export commonly used items
pub use response::{
    build_400_response, build_404_empty_response, build_404_response, build_405_response,
    build_html_response, build_options_response,
};
