//! Application service layer.
//!
//! Services contain the lifecycle rules for contacts and their children
//! and sit between the HTTP handlers and the repositories. Each takes its
//! collaborators through its constructor.

mod contact_service;
mod email_service;
mod image_service;
mod phone_number_service;
pub mod transfer;

pub use contact_service::{ContactService, ContactServiceImpl};
pub use email_service::{EmailService, EmailServiceImpl};
pub use image_service::{
    content_type_for, file_extension, unique_file_name, ImageService, StoredImage,
    DEFAULT_IMAGE_CONTENT_TYPE,
};
pub use phone_number_service::{PhoneNumberService, PhoneNumberServiceImpl};
pub use transfer::{decode_contacts, encode_contacts, ImportSummary, TransferService};
