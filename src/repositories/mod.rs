mod sqlite;
mod traits;

pub use sqlite::{
    SqliteContactRepository, SqliteEmailRepository, SqlitePhoneNumberRepository, SqliteStore,
};
pub use traits::{ContactRepository, EmailRepository, PhoneNumberRepository};
