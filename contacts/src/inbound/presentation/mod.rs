//! Presentation layer for the contacts list screen.
//!
//! The presenter is the only driving adapter: it invokes the load-contacts
//! port and translates the outcome into view calls. View and router are
//! collaborator traits implemented by whichever front end hosts the screen.

mod presenter;
mod view;

pub use presenter::ContactsPresenter;
pub use view::{ContactsRouter, ContactsView};
