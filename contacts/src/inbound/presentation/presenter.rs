//! Presenter driving the contacts view through one load cycle.
//!
//! Each `on_load` emits `display_loading(true)`, then either the users or an
//! error message, then `display_loading(false)`. The view is held weakly
//! because in a real UI the view owns its presenter; every emission checks the
//! view is still alive and is skipped otherwise.

use std::sync::{Arc, Weak};

use tracing::debug;

use super::view::{ContactsRouter, ContactsView};
use crate::domain::User;
use crate::domain::ports::LoadContacts;

/// Presenter for the contacts list screen.
pub struct ContactsPresenter<L, V, R> {
    interactor: Arc<L>,
    view: Weak<V>,
    router: Arc<R>,
}

impl<L, V, R> ContactsPresenter<L, V, R>
where
    L: LoadContacts,
    V: ContactsView,
    R: ContactsRouter,
{
    /// Create a presenter for `view`. Nothing is loaded until `on_load`.
    pub fn new(interactor: Arc<L>, view: &Arc<V>, router: Arc<R>) -> Self {
        Self {
            interactor,
            view: Arc::downgrade(view),
            router,
        }
    }

    /// Run one load cycle against the interactor.
    pub async fn on_load(&self) {
        self.with_view(|view| view.display_loading(true));
        match self.interactor.execute().await {
            Ok(users) => self.with_view(|view| view.display_users(&users)),
            Err(error) => {
                let message = error.to_string();
                self.with_view(|view| view.display_error(&message));
            }
        }
        self.with_view(|view| view.display_loading(false));
    }

    /// Forward a selection to the router.
    ///
    /// The router needs the originating view, so a selection arriving after
    /// the view has been dropped is not routed.
    pub fn on_select_user(&self, user: &User) {
        match self.view.upgrade() {
            Some(view) => self.router.show_detail_contact(&*view, user),
            None => debug!(user = %user, "contacts view dropped; skipping selection"),
        }
    }

    fn with_view(&self, emit: impl FnOnce(&V)) {
        match self.view.upgrade() {
            Some(view) => emit(&view),
            None => debug!("contacts view dropped; skipping emission"),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Presenter state sequencing with recording collaborators.

    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::LoadContactsError;
    use crate::domain::ports::{ContactServiceError, MockLoadContacts};
    use rstest::rstest;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ViewEvent {
        Loading(bool),
        Users(Vec<User>),
        Error(String),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Arc<Mutex<Vec<ViewEvent>>>,
    }

    impl RecordingView {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().expect("view events lock").clone()
        }

        fn push(&self, event: ViewEvent) {
            self.events.lock().expect("view events lock").push(event);
        }
    }

    impl ContactsView for RecordingView {
        fn display_users(&self, users: &[User]) {
            self.push(ViewEvent::Users(users.to_vec()));
        }

        fn display_error(&self, message: &str) {
            self.push(ViewEvent::Error(message.to_owned()));
        }

        fn display_loading(&self, is_loading: bool) {
            self.push(ViewEvent::Loading(is_loading));
        }
    }

    #[derive(Default)]
    struct RecordingRouter {
        shown: Mutex<Vec<User>>,
    }

    impl ContactsRouter for RecordingRouter {
        fn show_detail_contact(&self, _view: &dyn ContactsView, user: &User) {
            self.shown.lock().expect("router lock").push(user.clone());
        }
    }

    /// Interactor that drops the only strong view handle before answering.
    struct ViewDroppingInteractor {
        view: Mutex<Option<Arc<RecordingView>>>,
    }

    #[async_trait]
    impl LoadContacts for ViewDroppingInteractor {
        async fn execute(&self) -> Result<Vec<User>, LoadContactsError> {
            drop(self.view.lock().expect("view slot lock").take());
            Ok(vec![User::new("Arifin", "Firdaus")])
        }
    }

    fn presenter_with(
        interactor: MockLoadContacts,
    ) -> (
        ContactsPresenter<MockLoadContacts, RecordingView, RecordingRouter>,
        Arc<RecordingView>,
        Arc<RecordingRouter>,
    ) {
        let view = Arc::new(RecordingView::default());
        let router = Arc::new(RecordingRouter::default());
        let presenter = ContactsPresenter::new(Arc::new(interactor), &view, Arc::clone(&router));
        (presenter, view, router)
    }

    #[rstest]
    fn construction_does_not_execute_the_interactor() {
        let mut interactor = MockLoadContacts::new();
        interactor.expect_execute().times(0);

        let (_presenter, view, _router) = presenter_with(interactor);

        assert!(view.events().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn successful_load_displays_users_between_loading_toggles() {
        let users = vec![
            User::new("Arifin", "Firdaus"),
            User::new("SomePersonName", "SomeLastName"),
        ];
        let returned = users.clone();
        let mut interactor = MockLoadContacts::new();
        interactor
            .expect_execute()
            .times(1)
            .return_once(move || Ok(returned));

        let (presenter, view, _router) = presenter_with(interactor);
        presenter.on_load().await;

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Loading(true),
                ViewEvent::Users(users),
                ViewEvent::Loading(false),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn empty_load_still_displays_an_empty_list() {
        let mut interactor = MockLoadContacts::new();
        interactor
            .expect_execute()
            .times(1)
            .return_once(|| Ok(Vec::new()));

        let (presenter, view, _router) = presenter_with(interactor);
        presenter.on_load().await;

        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Loading(true),
                ViewEvent::Users(Vec::new()),
                ViewEvent::Loading(false),
            ]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn failed_load_displays_error_message_between_loading_toggles() {
        let mut interactor = MockLoadContacts::new();
        interactor.expect_execute().times(1).return_once(|| {
            Err(LoadContactsError::from(ContactServiceError::connectivity(
                "connection refused",
            )))
        });

        let (presenter, view, _router) = presenter_with(interactor);
        presenter.on_load().await;

        let events = view.events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], ViewEvent::Loading(true));
        match &events[1] {
            ViewEvent::Error(message) => assert!(!message.trim().is_empty()),
            other => panic!("expected an error message, got {other:?}"),
        }
        assert_eq!(events[2], ViewEvent::Loading(false));
    }

    #[rstest]
    #[tokio::test]
    async fn each_load_runs_the_interactor_again() {
        let mut interactor = MockLoadContacts::new();
        interactor
            .expect_execute()
            .times(2)
            .returning(|| Ok(Vec::new()));

        let (presenter, view, _router) = presenter_with(interactor);
        presenter.on_load().await;
        presenter.on_load().await;

        assert_eq!(view.events().len(), 6);
    }

    #[rstest]
    #[tokio::test]
    async fn dropped_view_receives_no_further_emissions() {
        let view = Arc::new(RecordingView::default());
        let events = Arc::clone(&view.events);
        let interactor = Arc::new(ViewDroppingInteractor {
            view: Mutex::new(None),
        });
        let presenter =
            ContactsPresenter::new(Arc::clone(&interactor), &view, Arc::new(RecordingRouter::default()));
        *interactor.view.lock().expect("view slot lock") = Some(view);

        presenter.on_load().await;

        assert_eq!(
            *events.lock().expect("view events lock"),
            vec![ViewEvent::Loading(true)]
        );
    }

    #[rstest]
    fn selecting_a_user_routes_to_its_detail_once() {
        let mut interactor = MockLoadContacts::new();
        interactor.expect_execute().times(0);
        let (presenter, view, router) = presenter_with(interactor);
        let user = User::new("Arifin", "Firdaus");

        presenter.on_select_user(&user);

        assert_eq!(*router.shown.lock().expect("router lock"), vec![user]);
        assert!(view.events().is_empty());
    }

    #[rstest]
    fn selecting_after_the_view_is_dropped_does_not_route() {
        let mut interactor = MockLoadContacts::new();
        interactor.expect_execute().times(0);
        let (presenter, view, router) = presenter_with(interactor);
        drop(view);

        presenter.on_select_user(&User::new("Arifin", "Firdaus"));

        assert!(router.shown.lock().expect("router lock").is_empty());
    }
}
