//! Application Context
//!
//! The view models, shared with every component via Leptos context.

use std::rc::Rc;

use leptos::prelude::*;

use crate::session::{SessionState, SessionViewModel};
use crate::todo_list::{ListState, TodoListViewModel};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    session: StoredValue<Rc<SessionViewModel>, LocalStorage>,
    /// Bumped on every session or list change
    pub version: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(session: Rc<SessionViewModel>, version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        let set_version = version.1;
        session
            .handle()
            .subscribe(move || set_version.update(|v| *v += 1));
        Self {
            session: StoredValue::new_local(session),
            version: version.0,
        }
    }

    pub fn session(&self) -> Rc<SessionViewModel> {
        self.session.get_value()
    }

    pub fn todos(&self) -> Rc<TodoListViewModel> {
        self.session().todos().clone()
    }

    // The getters below subscribe the caller to `version`.

    pub fn session_state(&self) -> SessionState {
        self.version.track();
        self.session().state()
    }

    pub fn list_state(&self) -> ListState {
        self.version.track();
        self.todos().state()
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.version.track();
        self.todos().is_busy(id)
    }

    pub fn is_creating(&self) -> bool {
        self.version.track();
        self.todos().is_creating()
    }
}

pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
