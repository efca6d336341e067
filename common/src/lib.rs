//! Shared building blocks for the osstatus workspace.
//!
//! Everything here is free of domain knowledge: call-site tracking for
//! error values and a thin wrapper around HTTP status codes. Both the
//! lookup client and the command front-end depend on these types so that
//! every error rendered to a console carries the same shape.

pub mod error;
pub mod http_status;


pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
