//! HTTP implementation of [`TodoApi`] over reqwest (fetch in the browser).

use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use reqwest::{Method, RequestBuilder};
use serde::de::{DeserializeOwned, IgnoredAny};

use super::TodoApi;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult, NetworkFailure};
use crate::models::{Credentials, Envelope, SignupRequest, Todo, TodoDraft, TodoPatch, UserProfile};
use crate::session::SessionStore;

/// Header carrying the session token on authenticated calls
pub const AUTH_HEADER: &str = "x-auth-token";

pub struct HttpApi {
    client: reqwest::Client,
    base: String,
    timeout: Duration,
    session: Rc<dyn SessionStore>,
}

impl HttpApi {
    pub fn new(config: &ClientConfig, session: Rc<dyn SessionStore>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base: config.api_base.trim_end_matches('/').to_string(),
            timeout: config.request_timeout,
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn public(&self, method: Method, path: &str) -> RequestBuilder {
        self.client.request(method, self.url(path))
    }

    /// Attach the current token verbatim; the server decides whether it is valid.
    fn authed(&self, method: Method, path: &str) -> ClientResult<RequestBuilder> {
        let token = self
            .session
            .get()
            .ok_or_else(|| ClientError::Unauthorized("You are not signed in".to_string()))?;
        Ok(self.public(method, path).header(AUTH_HEADER, token))
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<(u16, Vec<u8>)> {
        let request = request.timeout(self.timeout).build().map_err(network_failure)?;
        log::debug!("{} {}", request.method(), request.url());

        let response = self.client.execute(request).await.map_err(network_failure)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(network_failure)?;
        Ok((status, body.to_vec()))
    }
}

fn id_path(prefix: &str, id: &str) -> String {
    format!("{}/{}", prefix, utf8_percent_encode(id, NON_ALPHANUMERIC))
}

fn network_failure(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        NetworkFailure::Timeout.into()
    } else {
        NetworkFailure::Unreachable(err.to_string()).into()
    }
}

fn parse<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<Envelope<T>> {
    serde_json::from_slice(body).map_err(|e| {
        log::warn!("Unreadable response (status {}): {}", status, e);
        ClientError::from_response(status, None)
    })
}

/// Auth responses succeed iff they carry a non-empty `token`.
pub fn expect_token(status: u16, body: &[u8]) -> ClientResult<String> {
    let envelope = parse::<IgnoredAny>(status, body)?;
    match envelope.token.filter(|t| !t.is_empty()) {
        Some(token) => Ok(token),
        None => Err(ClientError::from_response(status, envelope.error)),
    }
}

/// Mutations succeed iff they carry a non-empty `message`.
pub fn expect_message(status: u16, body: &[u8]) -> ClientResult<String> {
    let envelope = parse::<IgnoredAny>(status, body)?;
    match envelope.message.filter(|m| !m.is_empty()) {
        Some(message) => Ok(message),
        None => Err(ClientError::from_response(status, envelope.error)),
    }
}

/// Reads succeed iff they carry `data`.
pub fn expect_data<T: DeserializeOwned>(status: u16, body: &[u8]) -> ClientResult<T> {
    let envelope = parse::<T>(status, body)?;
    match envelope.data {
        Some(data) => Ok(data),
        None => Err(ClientError::from_response(status, envelope.error)),
    }
}

#[async_trait(?Send)]
impl TodoApi for HttpApi {
    async fn signup(&self, profile: &SignupRequest) -> ClientResult<String> {
        let (status, body) = self
            .send(self.public(Method::POST, "/user/signup").json(profile))
            .await?;
        expect_token(status, &body)
    }

    async fn login(&self, credentials: &Credentials) -> ClientResult<String> {
        let (status, body) = self
            .send(self.public(Method::POST, "/user/login").json(credentials))
            .await?;
        expect_token(status, &body)
    }

    async fn fetch_profile(&self) -> ClientResult<UserProfile> {
        let (status, body) = self.send(self.authed(Method::GET, "/todo/userDetails")?).await?;
        expect_data(status, &body)
    }

    async fn list_todos(&self) -> ClientResult<Vec<Todo>> {
        let (status, body) = self.send(self.authed(Method::GET, "/todo/all")?).await?;
        expect_data(status, &body)
    }

    async fn create_todo(&self, draft: &TodoDraft) -> ClientResult<String> {
        let request = self.authed(Method::POST, "/todo/new")?.json(draft);
        let (status, body) = self.send(request).await?;
        expect_message(status, &body)
    }

    async fn update_todo(&self, id: &str, patch: &TodoPatch) -> ClientResult<String> {
        let request = self.authed(Method::PUT, &id_path("/todo/edit", id))?.json(patch);
        let (status, body) = self.send(request).await?;
        expect_message(status, &body)
    }

    async fn delete_todo(&self, id: &str) -> ClientResult<String> {
        let request = self.authed(Method::DELETE, &id_path("/todo/delete", id))?;
        let (status, body) = self.send(request).await?;
        expect_message(status, &body)
    }
}
