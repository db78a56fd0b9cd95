//! Domain primitives, the load-contacts use case, and its ports.
//!
//! Public surface:
//! - User — contact value type (first and last name).
//! - LoadContactsError — opaque failure returned to presenters.
//! - LoadContactsInteractor — use case mapping service records into users.

pub mod error;
pub mod load_contacts_interactor;
pub mod ports;
pub mod user;

pub use self::error::LoadContactsError;
pub use self::load_contacts_interactor::LoadContactsInteractor;
pub use self::user::User;
