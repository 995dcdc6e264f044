//! Domain value objects and validation rules.
//!
//! This module contains type-safe wrappers for the constrained fields of a
//! contact (name, email address, phone number) and the validation pass
//! that every create and update goes through before touching storage.

pub mod contact_name;
pub mod email;
pub mod errors;
pub mod phone;
pub mod validation;

pub use contact_name::ContactName;
pub use email::EmailAddress;
pub use errors::{ValidationError, ValidationErrors};
pub use phone::InternationalNumber;
pub use validation::{validate_contact, validate_email, validate_phone_number};
