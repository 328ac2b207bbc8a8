//! To-Do List View Model
//!
//! Holds the last list fetched from the server. Mutations are never applied
//! locally: each one is followed by a full refresh, so the displayed list is
//! always a server-acknowledged state.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use crate::api::TodoApi;
use crate::clock::{Clock, Stamp};
use crate::error::{ClientError, ClientResult};
use crate::forms;
use crate::models::{Todo, TodoDraft, TodoFields, TodoPatch};
use crate::session::SessionHandle;

#[derive(Debug, Clone, PartialEq)]
pub enum ListState {
    Idle,
    Loading,
    Loaded(Vec<Todo>),
    Error(ClientError),
}

pub struct TodoListViewModel {
    api: Rc<dyn TodoApi>,
    clock: Rc<dyn Clock>,
    session: SessionHandle,
    state: RefCell<ListState>,
    /// Bumped per refresh; only the newest refresh may write the list
    generation: Cell<u64>,
    creating: Cell<bool>,
    /// Ids with an edit, completion or delete in flight
    busy: RefCell<HashSet<String>>,
}

impl TodoListViewModel {
    pub fn new(api: Rc<dyn TodoApi>, clock: Rc<dyn Clock>, session: SessionHandle) -> Self {
        Self {
            api,
            clock,
            session,
            state: RefCell::new(ListState::Idle),
            generation: Cell::new(0),
            creating: Cell::new(false),
            busy: RefCell::new(HashSet::new()),
        }
    }

    pub fn state(&self) -> ListState {
        self.state.borrow().clone()
    }

    /// The loaded list, or nothing while loading or failed
    pub fn todos(&self) -> Vec<Todo> {
        match &*self.state.borrow() {
            ListState::Loaded(todos) => todos.clone(),
            _ => Vec::new(),
        }
    }

    pub fn is_creating(&self) -> bool {
        self.creating.get()
    }

    pub fn is_busy(&self, id: &str) -> bool {
        self.busy.borrow().contains(id)
    }

    /// Replace the list with the server's current one.
    ///
    /// A refresh overtaken by a newer one, or by the session ending, returns
    /// `Ok` without touching the list: its outcome belongs to nobody.
    pub async fn refresh(&self) -> ClientResult<()> {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        let epoch = self.session.epoch();
        self.set_state(ListState::Loading);

        let result = self.api.list_todos().await;
        if self.generation.get() != generation || self.session.epoch() != epoch {
            log::debug!("Dropping superseded to-do list response");
            return Ok(());
        }

        match result {
            Ok(todos) => {
                log::debug!("Loaded {} todos", todos.len());
                self.set_state(ListState::Loaded(todos));
                Ok(())
            }
            Err(err) => {
                log::warn!("Failed to load todos: {}", err);
                if err.is_unauthorized() {
                    self.expire_session();
                } else {
                    self.set_state(ListState::Error(err.clone()));
                }
                Err(err)
            }
        }
    }

    /// Submit a new to-do stamped with the current local time.
    /// `Ok` means the server accepted it and the caller may close the form.
    pub async fn create(&self, fields: &TodoFields) -> ClientResult<()> {
        forms::require(fields)?;
        if self.creating.replace(true) {
            return Err(ClientError::Busy);
        }
        self.session.changed();

        let epoch = self.session.epoch();
        let stamp = Stamp::now(self.clock.as_ref());
        let draft = TodoDraft {
            title: fields.title.clone(),
            description: fields.description.clone(),
            date: stamp.date,
            time: stamp.time,
        };
        let result = self.api.create_todo(&draft).await;
        let outcome = self.after_mutation(epoch, result).await;

        self.creating.set(false);
        self.session.changed();
        outcome
    }

    /// Replace title and description, re-stamping date and time
    pub async fn update(&self, id: &str, fields: &TodoFields) -> ClientResult<()> {
        forms::require(fields)?;
        let stamp = Stamp::now(self.clock.as_ref());
        let patch = TodoPatch {
            title: Some(fields.title.clone()),
            description: Some(fields.description.clone()),
            date: Some(stamp.date),
            time: Some(stamp.time),
            status: None,
        };
        self.mutate_item(id, async { self.api.update_todo(id, &patch).await })
            .await
    }

    /// One-way Pending -> Completed; there is no undo.
    pub async fn mark_complete(&self, id: &str) -> ClientResult<()> {
        let patch = TodoPatch::completed();
        self.mutate_item(id, async { self.api.update_todo(id, &patch).await })
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.mutate_item(id, async { self.api.delete_todo(id).await })
            .await
    }

    /// Forget everything, including responses still in flight
    pub fn reset(&self) {
        self.generation.set(self.generation.get() + 1);
        self.creating.set(false);
        self.busy.borrow_mut().clear();
        self.set_state(ListState::Idle);
    }

    /// Run a mutation for one item, refusing a second one for the same id
    /// until the first has been acknowledged and the list re-fetched.
    async fn mutate_item(
        &self,
        id: &str,
        request: impl std::future::Future<Output = ClientResult<String>>,
    ) -> ClientResult<()> {
        if !self.busy.borrow_mut().insert(id.to_string()) {
            return Err(ClientError::Busy);
        }
        self.session.changed();

        let epoch = self.session.epoch();
        let result = request.await;
        let outcome = self.after_mutation(epoch, result).await;

        self.busy.borrow_mut().remove(id);
        self.session.changed();
        outcome
    }

    async fn after_mutation(&self, epoch: u64, result: ClientResult<String>) -> ClientResult<()> {
        let current = self.session.epoch() == epoch;
        match result {
            Ok(message) => {
                log::info!("Server acknowledged: {}", message);
                // A failed refresh is reported through the list state; the mutation itself stands.
                if current {
                    let _ = self.refresh().await;
                }
                Ok(())
            }
            Err(err) => {
                log::warn!("Mutation rejected: {}", err);
                if current && err.is_unauthorized() {
                    self.expire_session();
                }
                Err(err)
            }
        }
    }

    fn expire_session(&self) {
        self.reset();
        self.session.invalidate();
    }

    fn set_state(&self, state: ListState) {
        *self.state.borrow_mut() = state;
        self.session.changed();
    }
}
