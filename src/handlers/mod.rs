//! HTTP handlers for the account resource.

pub mod account;
pub use account::*;
