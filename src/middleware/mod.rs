//! Edge middleware applied to every response.

pub mod body_limit;
pub mod https;
pub mod security_headers;

pub use body_limit::json_payload_too_large;
pub use https::enforce_https;
pub use security_headers::security_headers;
