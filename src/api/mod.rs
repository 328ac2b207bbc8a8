//! Remote To-Do API
//!
//! One method per endpoint. Each call issues exactly one request; nothing is retried.

mod http;

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{Credentials, SignupRequest, Todo, TodoDraft, TodoPatch, UserProfile};

pub use http::{expect_data, expect_message, expect_token, HttpApi, AUTH_HEADER};

/// The endpoints the client talks to.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait TodoApi {
    /// `POST /user/signup`, returns the new session token
    async fn signup(&self, profile: &SignupRequest) -> ClientResult<String>;

    /// `POST /user/login`, returns the session token
    async fn login(&self, credentials: &Credentials) -> ClientResult<String>;

    /// `GET /todo/userDetails`
    async fn fetch_profile(&self) -> ClientResult<UserProfile>;

    /// `GET /todo/all`, in server order
    async fn list_todos(&self) -> ClientResult<Vec<Todo>>;

    /// `POST /todo/new`, returns the server's acknowledgement message
    async fn create_todo(&self, draft: &TodoDraft) -> ClientResult<String>;

    /// `PUT /todo/edit/{id}`
    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> ClientResult<String>;

    /// `DELETE /todo/delete/{id}`
    async fn delete_todo(&self, id: &str) -> ClientResult<String>;
}
