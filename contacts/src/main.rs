//! Contacts entry-point: loads settings, wires the pipeline, prints the list.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use color_eyre::eyre::{WrapErr, bail, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use contacts::ContactsSettings;
use contacts::domain::ports::{FixtureHttpClient, HttpClient};
use contacts::domain::{LoadContactsInteractor, User};
use contacts::inbound::presentation::{ContactsPresenter, ContactsRouter, ContactsView};
use contacts::outbound::contact_service::HttpContactService;
use contacts::outbound::http::ReqwestHttpClient;

const FIXTURE_ENDPOINT: &str = "https://any-url.com";

/// Terminal view: users on stdout, errors on stderr.
#[derive(Default)]
struct TerminalContactsView {
    failed: AtomicBool,
}

impl TerminalContactsView {
    /// Whether an error was displayed; drives the non-zero exit.
    fn failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }
}

impl ContactsView for TerminalContactsView {
    fn display_users(&self, users: &[User]) {
        if users.is_empty() {
            println!("no contacts");
        }
        for user in users {
            println!("{}", user.full_name());
        }
    }

    fn display_error(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        eprintln!("error: {message}");
    }

    fn display_loading(&self, is_loading: bool) {
        info!(is_loading, "contacts loading state changed");
    }
}

/// The terminal has no detail screen; selections are only logged.
struct LoggingRouter;

impl ContactsRouter for LoggingRouter {
    fn show_detail_contact(&self, _view: &dyn ContactsView, user: &User) {
        info!(user = %user, "detail contact requested");
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ContactsSettings::load().map_err(|error| eyre!("load configuration: {error}"))?;
    let view = Arc::new(TerminalContactsView::default());

    if settings.use_fixture {
        let url = Url::parse(FIXTURE_ENDPOINT).wrap_err("parse fixture endpoint")?;
        run(Arc::new(FixtureHttpClient), url, &view).await;
    } else {
        let url = settings.endpoint_url()?;
        let client = ReqwestHttpClient::with_user_agent(settings.timeout(), settings.user_agent())
            .wrap_err("build HTTP client")?;
        run(Arc::new(client), url, &view).await;
    }

    if view.failed() {
        bail!("contacts could not be loaded");
    }
    Ok(())
}

async fn run<C>(client: Arc<C>, url: Url, view: &Arc<TerminalContactsView>)
where
    C: HttpClient,
{
    let service = Arc::new(HttpContactService::new(client, url));
    let interactor = Arc::new(LoadContactsInteractor::new(service));
    let presenter = ContactsPresenter::new(interactor, view, Arc::new(LoggingRouter));
    presenter.on_load().await;
}
