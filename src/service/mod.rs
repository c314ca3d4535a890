//! Account validation rules.

mod validation;
pub use validation::{RequestValidator, ADDRESS_MAX, EMAIL_MAX, NAME_MAX, PHONE_MAX};
