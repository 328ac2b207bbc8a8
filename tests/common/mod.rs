//! In-memory stand-in for the to-do API server.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use async_trait::async_trait;
use chrono::NaiveDate;

use todo_web::api::TodoApi;
use todo_web::clock::FixedClock;
use todo_web::error::{ClientError, ClientResult};
use todo_web::models::{
    Credentials, SignupRequest, Todo, TodoDraft, TodoFields, TodoPatch, TodoStatus, UserProfile,
};
use todo_web::session::{MemorySessionStore, SessionStore, SessionViewModel};

pub const EMAIL: &str = "a@x.com";
pub const PASSWORD: &str = "pw";
pub const TOKEN: &str = "T1";

struct Account {
    password: String,
    token: String,
    profile: UserProfile,
}

/// Behaves like the real server: checks the token the client sends,
/// assigns ids, keeps insertion order. Every call yields once so that
/// concurrent calls interleave.
pub struct FakeServer {
    session: Rc<dyn SessionStore>,
    accounts: RefCell<HashMap<String, Account>>,
    issued: RefCell<HashSet<String>>,
    todos: RefCell<Vec<Todo>>,
    next_id: Cell<u32>,
    failures: RefCell<HashMap<&'static str, ClientError>>,
    pub calls: RefCell<Vec<&'static str>>,
    pub drafts: RefCell<Vec<TodoDraft>>,
    pub patches: RefCell<Vec<(String, TodoPatch)>>,
}

impl FakeServer {
    pub fn new(session: Rc<dyn SessionStore>) -> Self {
        let server = Self {
            session,
            accounts: RefCell::new(HashMap::new()),
            issued: RefCell::new(HashSet::new()),
            todos: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            failures: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            drafts: RefCell::new(Vec::new()),
            patches: RefCell::new(Vec::new()),
        };
        server.accounts.borrow_mut().insert(
            EMAIL.to_string(),
            Account {
                password: PASSWORD.to_string(),
                token: TOKEN.to_string(),
                profile: UserProfile {
                    first_name: "Ada".into(),
                    last_name: "Lovelace".into(),
                    email: Some(EMAIL.into()),
                },
            },
        );
        server.issued.borrow_mut().insert(TOKEN.to_string());
        server
    }

    /// Make the next request to `op` fail with `err`
    pub fn fail_next(&self, op: &'static str, err: ClientError) {
        self.failures.borrow_mut().insert(op, err);
    }

    pub fn seed(&self, title: &str, description: &str) -> String {
        let id = self.assign_id();
        self.todos.borrow_mut().push(Todo {
            id: id.clone(),
            title: title.into(),
            description: description.into(),
            status: TodoStatus::Pending,
            date: "1-1-2026".into(),
            time: "8:0:0".into(),
        });
        id
    }

    pub fn stored(&self) -> Vec<Todo> {
        self.todos.borrow().clone()
    }

    pub fn count(&self, op: &str) -> usize {
        self.calls.borrow().iter().filter(|c| **c == op).count()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn assign_id(&self) -> String {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        format!("todo-{}", id)
    }

    async fn enter(&self, op: &'static str) -> ClientResult<()> {
        self.calls.borrow_mut().push(op);
        // Decided on arrival, so the first request issued is the one that fails
        let failure = self.failures.borrow_mut().remove(op);
        tokio::task::yield_now().await;
        match failure {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn authorize(&self) -> ClientResult<String> {
        match self.session.get() {
            Some(token) if self.issued.borrow().contains(&token) => Ok(token),
            _ => Err(ClientError::Unauthorized("Invalid token".into())),
        }
    }

    fn not_found() -> ClientError {
        ClientError::Server {
            status: 404,
            message: "Todo not found".into(),
        }
    }
}

#[async_trait(?Send)]
impl TodoApi for FakeServer {
    async fn signup(&self, profile: &SignupRequest) -> ClientResult<String> {
        self.enter("signup").await?;
        if self.accounts.borrow().contains_key(&profile.email) {
            return Err(ClientError::Server {
                status: 400,
                message: "User already exists".into(),
            });
        }
        let token = format!("T-{}", profile.email);
        self.issued.borrow_mut().insert(token.clone());
        self.accounts.borrow_mut().insert(
            profile.email.clone(),
            Account {
                password: profile.password.clone(),
                token: token.clone(),
                profile: UserProfile {
                    first_name: profile.first_name.clone(),
                    last_name: profile.last_name.clone(),
                    email: Some(profile.email.clone()),
                },
            },
        );
        Ok(token)
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<String> {
        self.enter("login").await?;
        match self.accounts.borrow().get(&credentials.email) {
            Some(account) if account.password == credentials.password => Ok(account.token.clone()),
            _ => Err(ClientError::Server {
                status: 400,
                message: "Invalid Credentials".into(),
            }),
        }
    }

    async fn fetch_profile(&self) -> ClientResult<UserProfile> {
        self.enter("fetch_profile").await?;
        let token = self.authorize()?;
        self.accounts
            .borrow()
            .values()
            .find(|account| account.token == token)
            .map(|account| account.profile.clone())
            .ok_or_else(|| ClientError::Unauthorized("Invalid token".into()))
    }

    async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        self.enter("list_todos").await?;
        self.authorize()?;
        Ok(self.stored())
    }

    async fn create_todo(&self, draft: &TodoDraft) -> ClientResult<String> {
        self.enter("create_todo").await?;
        self.authorize()?;
        self.drafts.borrow_mut().push(draft.clone());
        let id = self.assign_id();
        self.todos.borrow_mut().push(Todo {
            id,
            title: draft.title.clone(),
            description: draft.description.clone(),
            status: TodoStatus::Pending,
            date: draft.date.clone(),
            time: draft.time.clone(),
        });
        Ok("Todo created".into())
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> ClientResult<String> {
        self.enter("update_todo").await?;
        self.authorize()?;
        self.patches.borrow_mut().push((id.to_string(), patch.clone()));
        let mut todos = self.todos.borrow_mut();
        let todo = todos.iter_mut().find(|t| t.id == id).ok_or_else(Self::not_found)?;
        if let Some(title) = &patch.title {
            todo.title = title.clone();
        }
        if let Some(description) = &patch.description {
            todo.description = description.clone();
        }
        if let Some(date) = &patch.date {
            todo.date = date.clone();
        }
        if let Some(time) = &patch.time {
            todo.time = time.clone();
        }
        if let Some(status) = patch.status {
            todo.status = status;
        }
        Ok("Todo updated".into())
    }

    async fn delete_todo(&self, id: &str) -> ClientResult<String> {
        self.enter("delete_todo").await?;
        self.authorize()?;
        let mut todos = self.todos.borrow_mut();
        let before = todos.len();
        todos.retain(|t| t.id != id);
        if todos.len() == before {
            return Err(Self::not_found());
        }
        Ok("Todo deleted".into())
    }
}

/// 5 March 2024, 09:07:02
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 2)
            .unwrap(),
    )
}

pub struct Harness {
    pub server: Rc<FakeServer>,
    pub store: Rc<MemorySessionStore>,
    pub vm: SessionViewModel,
}

pub fn harness(token: Option<&str>) -> Harness {
    let store = Rc::new(match token {
        Some(token) => MemorySessionStore::with_token(token),
        None => MemorySessionStore::default(),
    });
    let server = Rc::new(FakeServer::new(store.clone()));
    let vm = SessionViewModel::new(server.clone(), Rc::new(fixed_clock()), store.clone());
    Harness { server, store, vm }
}

/// Signed in with the seeded account and the list loaded
pub async fn signed_in() -> Harness {
    let h = harness(Some(TOKEN));
    h.vm.activate().await.expect("activation succeeds");
    h.server.clear_calls();
    h
}

pub fn fields(title: &str, description: &str) -> TodoFields {
    TodoFields {
        title: title.into(),
        description: description.into(),
    }
}
