//! Test fixtures and sample data.

use phone_contacts::Contact;

pub const JOHN_EMAIL: &str = "val@gmail.com";
pub const JOHN_PHONE: &str = "+12-345-6789012";

/// John Doe with one email and one phone number.
pub fn john_doe() -> Contact {
    Contact::new("John Doe")
        .with_email(JOHN_EMAIL)
        .with_phone_number(JOHN_PHONE)
}

/// A small address book with distinct names, addresses and numbers.
pub fn address_book() -> Vec<Contact> {
    vec![
        john_doe(),
        Contact::new("Jane Roe")
            .with_email("jane@example.com")
            .with_email("jane.roe@work.example.org")
            .with_phone_number("+44-207-1234567"),
        Contact::new("Max Mustermann").with_phone_number("+49-301-2345678"),
    ]
}

/// Multipart body with a single file part; returns (content type, body).
pub fn multipart_file(field: &str, file_name: &str, bytes: &[u8]) -> (String, Vec<u8>) {
    let boundary = "phone-contacts-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    (format!("multipart/form-data; boundary={}", boundary), body)
}
