//! UI Components
//!
//! Leptos components for the login, signup and dashboard screens.

mod dashboard;
mod login_page;
mod signup_page;
mod spinner;
mod text_field;
mod todo_card;
mod todo_form_modal;

pub use dashboard::Dashboard;
pub use login_page::LoginPage;
pub use signup_page::SignupPage;
pub use spinner::Spinner;
pub use text_field::TextField;
pub use todo_card::TodoCard;
pub use todo_form_modal::TodoFormModal;
