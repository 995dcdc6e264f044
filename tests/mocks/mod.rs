//! In-memory repository mocks shared by the integration tests.

mod mock_contact_repository;
mod mock_email_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::MockContactRepository;
#[allow(unused_imports)]
pub use mock_email_repository::MockEmailRepository;
