//! Page router: navigation, render guards and user actions.
//!
//! Every navigation rebuilds the chrome immediately, then issues at most one
//! fetch and replaces the content region once it settles. Each navigation
//! owns a [`CancellationToken`]; starting a new one cancels the previous, and
//! a fetch that resolves under a cancelled token is dropped. A 401 is the
//! exception: if the session still holds the rejected bearer it is cleared
//! and the router returns home, stale or not.

mod screen;

pub use screen::Screen;

use std::sync::Arc;
use std::time::{Duration, Instant};

use portal_core::PortalError;
use portal_core::api::PortalApi;
use portal_core::application::{Application, ApplicationStatus};
use portal_core::error::Result;
use portal_core::forms::{LoginForm, NewApplicationForm, RegisterForm};
use portal_core::modal::{Modal, ModalResponse, PendingAction};
use portal_core::page::Page;
use portal_core::session::AuthGrant;
use portal_core::user::{Manager, Role, SessionUser, User};
use portal_core::view::{Action, Chrome, FormId, View};
use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::notification_center::NotificationCenter;
use crate::session::SessionManager;
use crate::views::{
    applications, auth, chrome, dashboard, home, new_application, profile, users,
};

pub const LOGIN_REQUIRED: &str = "Please log in to continue";
pub const INSUFFICIENT_PERMISSIONS: &str = "Insufficient permissions";
pub const APPLICATION_NOT_FOUND: &str = "Application not found";
pub const APPLICATION_CLOSED: &str = "Only applications in progress can change status";
pub const USER_NOT_FOUND: &str = "User not found";

/// Result of a single render pass.
enum Outcome {
    Done,
    Redirect(Page),
}

/// Data a page needs before its content can be built.
enum Fetch {
    Managers,
    Dashboard(SessionUser),
    Applications(Role),
    Users,
}

enum Fetched {
    Managers(Result<Vec<Manager>>),
    Dashboard(SessionUser, Result<Vec<Application>>),
    Applications(Role, Result<Vec<Application>>),
    Users(Result<Vec<User>>),
}

impl Fetched {
    fn error(&self) -> Option<&PortalError> {
        match self {
            Fetched::Managers(r) => r.as_ref().err(),
            Fetched::Dashboard(_, r) | Fetched::Applications(_, r) => r.as_ref().err(),
            Fetched::Users(r) => r.as_ref().err(),
        }
    }
}

/// What a front end should do after dispatching a button action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    Handled,
    /// The action submits a form; collect its input and call the matching
    /// router method.
    NeedsInput(FormId),
}

struct RouterState {
    page: Page,
    chrome: Chrome,
    content: View,
    applications: Vec<Application>,
    users: Vec<User>,
    managers: Vec<Manager>,
    register_role: Role,
    modal: Option<Modal>,
    notifications: NotificationCenter,
    nav_token: CancellationToken,
}

impl RouterState {
    fn new(notification_ttl: Duration) -> Self {
        Self {
            page: Page::Home,
            chrome: chrome::render(None, Page::Home),
            content: home::render(false),
            applications: Vec::new(),
            users: Vec::new(),
            managers: Vec::new(),
            register_role: Role::Client,
            modal: None,
            notifications: NotificationCenter::new(notification_ttl),
            nav_token: CancellationToken::new(),
        }
    }

    /// Shows the error banner for `err`, if it has one.
    fn report(&mut self, err: &PortalError) {
        if let Some(message) = err.banner_message() {
            self.notifications.error(message);
        }
    }

    /// Unwraps a fetch result, reporting the error. `None` renders as absent
    /// data.
    fn settle<T>(&mut self, result: Result<Vec<T>>) -> Option<Vec<T>> {
        match result {
            Ok(list) => Some(list),
            Err(e) => {
                tracing::warn!(error = %e, "page fetch failed");
                self.report(&e);
                None
            }
        }
    }
}

/// Routes between pages and runs user actions against the API.
///
/// # Usage
///
/// ```ignore
/// let router = Router::new(api, session, config.notification_ttl());
/// router.start().await;
/// router.navigate(Page::Applications).await;
/// let screen = router.screen().await;
/// ```
pub struct Router {
    api: Arc<dyn PortalApi>,
    session: Arc<SessionManager>,
    state: Mutex<RouterState>,
}

impl Router {
    pub fn new(
        api: Arc<dyn PortalApi>,
        session: Arc<SessionManager>,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            api,
            session,
            state: Mutex::new(RouterState::new(notification_ttl)),
        }
    }

    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Restores any persisted session, then shows `home`.
    pub async fn start(&self) {
        let restored = self.session.restore().await;
        tracing::info!(restored, "router started");
        self.navigate(Page::Home).await;
    }

    pub async fn current_page(&self) -> Page {
        self.state.lock().await.page
    }

    pub async fn screen(&self) -> Screen {
        self.screen_at(Instant::now()).await
    }

    pub async fn screen_at(&self, now: Instant) -> Screen {
        let mut state = self.state.lock().await;
        Screen {
            page: state.page,
            chrome: state.chrome.clone(),
            content: state.content.clone(),
            modal: state.modal.clone(),
            banner: state.notifications.visible_at(now),
        }
    }

    /// Navigates to `page`, following guard redirects.
    pub async fn navigate(&self, page: Page) {
        let mut target = page;
        loop {
            match self.render(target).await {
                Outcome::Done => break,
                Outcome::Redirect(next) => {
                    tracing::debug!(from = %target, to = %next, "redirect");
                    target = next;
                }
            }
        }
    }

    /// Renders the current page again.
    pub async fn refresh(&self) {
        let page = self.current_page().await;
        self.navigate(page).await;
    }

    async fn render(&self, page: Page) -> Outcome {
        let session = self.session.current().await;
        let (user, bearer) = match session {
            Some(s) => (Some(s.user), Some(s.token)),
            None => (None, None),
        };

        let (token, fetch) = {
            let mut state = self.state.lock().await;
            state.nav_token.cancel();
            state.nav_token = CancellationToken::new();
            state.modal = None;

            if page.requires_session() && user.is_none() {
                state.notifications.info(LOGIN_REQUIRED);
                return Outcome::Redirect(Page::Login);
            }
            if page == Page::Users && user.as_ref().map(|u| u.role) != Some(Role::Admin) {
                state.notifications.error(INSUFFICIENT_PERMISSIONS);
                return Outcome::Redirect(Page::Dashboard);
            }

            tracing::info!(page = %page, "navigate");
            state.page = page;
            state.chrome = chrome::render(user.as_ref(), page);

            let fetch = match (page, user) {
                (Page::Home, user) => {
                    state.content = home::render(user.is_some());
                    None
                }
                (Page::Login, _) => {
                    state.content = auth::login();
                    None
                }
                (Page::Register, _) => {
                    state.register_role = Role::Client;
                    Some(Fetch::Managers)
                }
                (Page::Profile, Some(user)) => {
                    state.content = profile::render(&user);
                    None
                }
                (Page::NewApplication, Some(_)) => {
                    state.content = new_application::render();
                    None
                }
                (Page::Dashboard, Some(user)) => Some(Fetch::Dashboard(user)),
                (Page::Applications, Some(user)) => Some(Fetch::Applications(user.role)),
                (Page::Users, Some(_)) => Some(Fetch::Users),
                // Session-only pages were redirected above.
                (_, None) => None,
            };
            match fetch {
                Some(fetch) => (state.nav_token.clone(), fetch),
                None => return Outcome::Done,
            }
        };

        let bearer = bearer.as_deref();
        let fetched = match fetch {
            Fetch::Managers => Fetched::Managers(self.api.managers(bearer).await),
            Fetch::Dashboard(user) => Fetched::Dashboard(user, self.api.applications(bearer).await),
            Fetch::Applications(role) => {
                Fetched::Applications(role, self.api.applications(bearer).await)
            }
            Fetch::Users => Fetched::Users(self.api.users(bearer).await),
        };

        if fetched.error().is_some_and(PortalError::is_auth_expired) {
            tracing::info!(
                page = %page,
                stale = token.is_cancelled(),
                "authentication expired during fetch"
            );
            if self.expire(bearer).await {
                return Outcome::Redirect(Page::Home);
            }
            return Outcome::Done;
        }

        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        if token.is_cancelled() {
            tracing::debug!(page = %page, "discarding stale fetch");
            return Outcome::Done;
        }

        match fetched {
            Fetched::Managers(result) => {
                state.managers = state.settle(result).unwrap_or_default();
                state.content = auth::register(&state.managers, state.register_role);
            }
            Fetched::Dashboard(user, result) => {
                let list = state.settle(result);
                state.content = dashboard::render(&user, list.as_deref(), today());
                state.applications = list.unwrap_or_default();
            }
            Fetched::Applications(role, result) => {
                let list = state.settle(result);
                state.content = applications::render(role, list.as_deref());
                state.applications = list.unwrap_or_default();
            }
            Fetched::Users(result) => {
                let list = state.settle(result);
                state.content = users::render(list.as_deref());
                state.users = list.unwrap_or_default();
            }
        }
        Outcome::Done
    }

    /// Switches the registration form's role selector. The manager field
    /// follows it.
    pub async fn select_register_role(&self, role: Role) {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        if state.page != Page::Register {
            return;
        }
        state.register_role = role;
        state.content = auth::register(&state.managers, role);
    }

    pub async fn login(&self, form: &LoginForm) {
        let credentials = match form.validate() {
            Ok(credentials) => credentials,
            Err(e) => return self.fail(e, None).await,
        };
        let bearer = self.session.token().await;
        match self.api.login(bearer.as_deref(), &credentials).await {
            Ok(grant) => self.enter(grant, "Logged in successfully!").await,
            Err(e) => self.fail(e, bearer.as_deref()).await,
        }
    }

    pub async fn register(&self, form: &RegisterForm) {
        let registration = match form.validate() {
            Ok(registration) => registration,
            Err(e) => return self.fail(e, None).await,
        };
        let bearer = self.session.token().await;
        match self.api.register(bearer.as_deref(), &registration).await {
            Ok(grant) => self.enter(grant, "Registration successful!").await,
            Err(e) => self.fail(e, bearer.as_deref()).await,
        }
    }

    async fn enter(&self, grant: AuthGrant, message: &str) {
        match self.session.establish(grant).await {
            Ok(_) => {
                self.state.lock().await.notifications.success(message);
                self.navigate(Page::Dashboard).await;
            }
            Err(e) => self.fail(e, None).await,
        }
    }

    pub async fn logout(&self) {
        self.session.clear().await;
        self.state.lock().await.notifications.success("Logged out");
        self.navigate(Page::Home).await;
    }

    pub async fn submit_application(&self, form: &NewApplicationForm) {
        let application = match form.validate() {
            Ok(application) => application,
            Err(e) => return self.fail(e, None).await,
        };
        let bearer = self.session.token().await;
        match self
            .api
            .create_application(bearer.as_deref(), &application)
            .await
        {
            Ok(id) => {
                tracing::info!(application_id = id, "application created");
                self.state
                    .lock()
                    .await
                    .notifications
                    .success("Application created!");
                self.navigate(Page::Applications).await;
            }
            Err(e) => self.fail(e, bearer.as_deref()).await,
        }
    }

    /// Opens the confirmation dialog for a status change on an application
    /// of the current listing.
    pub async fn request_status_change(&self, application_id: i64, status: ApplicationStatus) {
        let role = self.session.role().await;
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        if !role.is_some_and(|r| r.can_process_applications()) {
            state.notifications.error(INSUFFICIENT_PERMISSIONS);
            return;
        }
        let Some(application) = state.applications.iter().find(|a| a.id == application_id) else {
            state.notifications.error(APPLICATION_NOT_FOUND);
            return;
        };
        if !application.status.is_open() || status.is_open() {
            state.notifications.error(APPLICATION_CLOSED);
            return;
        }
        state.modal = Some(Modal::confirm(PendingAction::ChangeStatus {
            application_id,
            status,
        }));
    }

    /// Opens the confirmation dialog for deleting a listed non-admin user.
    pub async fn request_user_delete(&self, user_id: i64) {
        let role = self.session.role().await;
        let mut guard = self.state.lock().await;
        let state = &mut *guard;

        if role != Some(Role::Admin) {
            state.notifications.error(INSUFFICIENT_PERMISSIONS);
            return;
        }
        match state.users.iter().find(|u| u.id == user_id) {
            None => state.notifications.error(USER_NOT_FOUND),
            Some(user) if user.role == Role::Admin => {
                state.notifications.error(INSUFFICIENT_PERMISSIONS)
            }
            Some(_) => {
                state.modal = Some(Modal::confirm(PendingAction::DeleteUser { user_id }));
            }
        }
    }

    /// Shows the details dialog for an application of the current listing.
    pub async fn view_application(&self, application_id: i64) {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        match state
            .applications
            .iter()
            .find(|a| a.id == application_id)
            .cloned()
        {
            Some(application) => state.modal = Some(Modal::ApplicationDetails { application }),
            None => state.notifications.error(APPLICATION_NOT_FOUND),
        }
    }

    /// Closes the open dialog, running its pending action on confirm.
    pub async fn respond_modal(&self, response: ModalResponse) {
        let (modal, page) = {
            let mut state = self.state.lock().await;
            (state.modal.take(), state.page)
        };
        let pending = match (modal.as_ref().and_then(Modal::pending), response) {
            (Some(pending), ModalResponse::Confirm) => pending,
            _ => return,
        };

        let bearer = self.session.token().await;
        let bearer = bearer.as_deref();
        match pending {
            PendingAction::ChangeStatus {
                application_id,
                status,
            } => match self
                .api
                .update_application_status(bearer, application_id, status)
                .await
            {
                Ok(()) => {
                    tracing::info!(application_id, status = %status, "status updated");
                    self.state.lock().await.notifications.success("Status updated");
                    self.navigate(page).await;
                }
                Err(e) => self.fail(e, bearer).await,
            },
            PendingAction::DeleteUser { user_id } => {
                match self.api.delete_user(bearer, user_id).await {
                    Ok(()) => {
                        tracing::info!(user_id, "user deleted");
                        self.state.lock().await.notifications.success("User deleted");
                        self.navigate(Page::Users).await;
                    }
                    Err(e) => self.fail(e, bearer).await,
                }
            }
        }
    }

    /// Runs a button action. Form submissions need input the button does
    /// not carry and are handed back to the caller.
    pub async fn dispatch(&self, action: Action) -> Dispatch {
        match action {
            Action::Navigate { page } => self.navigate(page).await,
            Action::Logout => self.logout().await,
            Action::ViewApplication { application_id } => {
                self.view_application(application_id).await
            }
            Action::ChangeStatus {
                application_id,
                status,
            } => self.request_status_change(application_id, status).await,
            Action::DeleteUser { user_id } => self.request_user_delete(user_id).await,
            Action::Login => return Dispatch::NeedsInput(FormId::Login),
            Action::Register => return Dispatch::NeedsInput(FormId::Register),
            Action::SubmitApplication => return Dispatch::NeedsInput(FormId::NewApplication),
        }
        Dispatch::Handled
    }

    /// Terminal handling of a failed action: 401 logs out silently and
    /// returns home, everything else becomes an error banner.
    async fn fail(&self, err: PortalError, bearer: Option<&str>) {
        if err.is_auth_expired() {
            if self.expire(bearer).await {
                tracing::info!("authentication expired, returning home");
                self.navigate(Page::Home).await;
            }
            return;
        }
        tracing::warn!(error = %err, "action failed");
        self.state.lock().await.report(&err);
    }

    /// Applies a 401 for a request sent with `bearer`. Returns whether the
    /// router should go home.
    ///
    /// Anonymous requests have nothing to clear. An authenticated one clears
    /// the session only while it still carries that bearer; a 401 for a
    /// replaced session is ignored.
    async fn expire(&self, bearer: Option<&str>) -> bool {
        match bearer {
            None => true,
            Some(bearer) => self.session.discard_if(bearer).await,
        }
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
#[path = "router_test.rs"]
mod tests;
