//! Field validation run before every create and update.
//!
//! Each function walks the whole entity and returns every violation it
//! finds rather than stopping at the first one.

use super::{ContactName, EmailAddress, InternationalNumber, ValidationError, ValidationErrors};
use crate::models::{Contact, Email, PhoneNumber};

/// Validate a contact and the children it carries.
///
/// Nested emails and phone numbers are checked for their value field only;
/// their owner is the contact being saved, so a missing `contact_id` is
/// expected at this point.
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Err(e) = ContactName::new(contact.name.as_str()) {
        errors.push(e);
    }
    for email in &contact.emails {
        check_address(&email.address, &mut errors);
    }
    for phone in &contact.phone_numbers {
        check_number(&phone.number, &mut errors);
    }

    errors.into_result()
}

/// Validate a standalone email, including its owner reference.
pub fn validate_email(email: &Email) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_address(&email.address, &mut errors);
    if email.contact_id.is_none() {
        errors.push(ValidationError::MissingOwner);
    }
    errors.into_result()
}

/// Validate a standalone phone number, including its owner reference.
pub fn validate_phone_number(phone: &PhoneNumber) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    check_number(&phone.number, &mut errors);
    if phone.contact_id.is_none() {
        errors.push(ValidationError::MissingOwner);
    }
    errors.into_result()
}

fn check_address(address: &str, errors: &mut ValidationErrors) {
    if let Err(e) = EmailAddress::new(address) {
        errors.push(e);
    }
}

fn check_number(number: &str, errors: &mut ValidationErrors) {
    if let Err(e) = InternationalNumber::new(number) {
        errors.push(e);
    }
}
