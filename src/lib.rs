//! To-Do Web Client
//!
//! Signup/login and to-do CRUD against a remote HTTP API, rendered with Leptos.
//!
//! Layers, leaf first:
//! - session::SessionStore: persisted auth token
//! - api: one method per remote endpoint
//! - forms: required-field validation
//! - todo_list / session: view models the components drive

pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod forms;
pub mod logging;
pub mod models;
pub mod session;
pub mod todo_list;

mod app;
mod components;
mod context;

pub use app::App;
