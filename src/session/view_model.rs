//! Session View Model
//!
//! Decides which surface the user sees: login/signup while there is no token,
//! the dashboard once the profile behind the token has been fetched.

use std::cell::Cell;
use std::rc::Rc;

use super::handle::{SessionHandle, SessionState};
use super::store::SessionStore;
use crate::api::TodoApi;
use crate::clock::Clock;
use crate::error::{ClientError, ClientResult};
use crate::forms;
use crate::models::{Credentials, SignupRequest};
use crate::todo_list::TodoListViewModel;

pub struct SessionViewModel {
    api: Rc<dyn TodoApi>,
    session: SessionHandle,
    todos: Rc<TodoListViewModel>,
    submitting: Cell<bool>,
}

impl SessionViewModel {
    pub fn new(api: Rc<dyn TodoApi>, clock: Rc<dyn Clock>, store: Rc<dyn SessionStore>) -> Self {
        let session = SessionHandle::new(store);
        let todos = Rc::new(TodoListViewModel::new(api.clone(), clock, session.clone()));
        Self {
            api,
            session,
            todos,
            submitting: Cell::new(false),
        }
    }

    pub fn handle(&self) -> &SessionHandle {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn todos(&self) -> &Rc<TodoListViewModel> {
        &self.todos
    }

    /// A login or signup request is in flight
    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    /// Check for a stored token; with one, load the profile and then the list.
    /// Without one, no request is made.
    pub async fn activate(&self) -> ClientResult<()> {
        if self.session.state() == SessionState::Authenticating {
            return Ok(());
        }
        if self.session.token().is_none() {
            log::info!("No session token, showing login");
            self.session.set_state(SessionState::Unauthenticated);
            return Ok(());
        }
        self.authenticate().await
    }

    /// Entering the login or signup surface with a token already stored skips
    /// the form. Returns whether the form was skipped.
    pub async fn enter_auth_surface(&self) -> ClientResult<bool> {
        if self.session.token().is_none() {
            return Ok(false);
        }
        self.activate().await?;
        Ok(true)
    }

    pub async fn login(&self, credentials: &Credentials) -> ClientResult<()> {
        forms::require(credentials)?;
        let token = self.submit(self.api.login(credentials)).await?;
        self.establish(&token).await
    }

    pub async fn signup(&self, profile: &SignupRequest) -> ClientResult<()> {
        forms::require(profile)?;
        let token = self.submit(self.api.signup(profile)).await?;
        self.establish(&token).await
    }

    /// Purely local: the server is not told.
    pub fn logout(&self) {
        log::info!("Logging out");
        self.submitting.set(false);
        self.todos.reset();
        self.session.invalidate();
    }

    async fn submit(
        &self,
        request: impl std::future::Future<Output = ClientResult<String>>,
    ) -> ClientResult<String> {
        if self.submitting.replace(true) {
            return Err(ClientError::Busy);
        }
        self.session.changed();

        let result = request.await;

        self.submitting.set(false);
        self.session.changed();
        result
    }

    async fn establish(&self, token: &str) -> ClientResult<()> {
        self.session.store().set(token)?;
        log::info!("Session token stored");
        self.authenticate().await
    }

    async fn authenticate(&self) -> ClientResult<()> {
        self.session.set_state(SessionState::Authenticating);
        let epoch = self.session.epoch();

        let result = self.api.fetch_profile().await;
        if self.session.epoch() != epoch {
            log::debug!("Session ended while fetching profile");
            return Ok(());
        }

        match result {
            Ok(profile) => {
                log::info!("Signed in as {}", profile.full_name());
                self.session.set_state(SessionState::Authenticated(profile));
                self.todos.refresh().await
            }
            Err(err) => {
                // Route back to login rather than leave the screen loading.
                log::warn!("Failed to load profile: {}", err);
                self.todos.reset();
                self.session.invalidate();
                Err(err)
            }
        }
    }
}
