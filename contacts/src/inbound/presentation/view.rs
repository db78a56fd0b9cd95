//! Collaborator contracts the presenter drives.

use crate::domain::User;

/// Passive view rendering the contacts screen state.
pub trait ContactsView: Send + Sync {
    /// Show the loaded contacts; the list may be empty.
    fn display_users(&self, users: &[User]);

    /// Show a human-readable failure message.
    fn display_error(&self, message: &str);

    /// Toggle the loading indicator.
    fn display_loading(&self, is_loading: bool);
}

/// Navigation collaborator opening the detail screen for one contact.
pub trait ContactsRouter: Send + Sync {
    /// Show the detail screen for `user`, starting from `view`.
    fn show_detail_contact(&self, view: &dyn ContactsView, user: &User);
}
