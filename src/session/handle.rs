//! Shared Session State
//!
//! One handle per logical session, cloned into both view models so either can
//! observe or invalidate the session.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::store::SessionStore;
use crate::models::UserProfile;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Not yet activated
    Unknown,
    /// No token; the login surface should be shown
    Unauthenticated,
    /// Token present, profile being fetched
    Authenticating,
    Authenticated(UserProfile),
}

impl SessionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SessionState::Unknown | SessionState::Authenticating)
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        match self {
            SessionState::Authenticated(profile) => Some(profile),
            _ => None,
        }
    }
}

struct Shared {
    store: Rc<dyn SessionStore>,
    state: RefCell<SessionState>,
    /// Bumped on every invalidation; responses issued under an older epoch are dropped
    epoch: Cell<u64>,
    listeners: RefCell<Vec<Rc<dyn Fn()>>>,
}

#[derive(Clone)]
pub struct SessionHandle {
    inner: Rc<Shared>,
}

impl SessionHandle {
    pub fn new(store: Rc<dyn SessionStore>) -> Self {
        Self {
            inner: Rc::new(Shared {
                store,
                state: RefCell::new(SessionState::Unknown),
                epoch: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn store(&self) -> &Rc<dyn SessionStore> {
        &self.inner.store
    }

    pub fn token(&self) -> Option<String> {
        self.inner.store.get()
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn epoch(&self) -> u64 {
        self.inner.epoch.get()
    }

    /// Register a callback run after any session or list change
    pub fn subscribe(&self, listener: impl Fn() + 'static) {
        self.inner.listeners.borrow_mut().push(Rc::new(listener));
    }

    pub(crate) fn set_state(&self, state: SessionState) {
        *self.inner.state.borrow_mut() = state;
        self.changed();
    }

    pub(crate) fn changed(&self) {
        let listeners = self.inner.listeners.borrow().clone();
        for listener in listeners {
            listener();
        }
    }

    /// Drop the token and anything still in flight for it
    pub(crate) fn invalidate(&self) {
        self.inner.store.clear();
        self.inner.epoch.set(self.inner.epoch.get() + 1);
        self.set_state(SessionState::Unauthenticated);
    }
}
