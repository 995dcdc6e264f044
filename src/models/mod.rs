//! Data models for contacts and the emails and phone numbers they own.

pub mod contact;
pub mod email;
pub mod phone_number;

pub use contact::Contact;
pub use email::Email;
pub use phone_number::PhoneNumber;
