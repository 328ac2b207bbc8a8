//! To-Do Web Entry Point

use leptos::prelude::*;
use todo_web::config::ClientConfig;
use todo_web::{logging, App};

fn main() {
    console_error_panic_hook::set_once();
    logging::init(ClientConfig::from_build_env().log_level);
    mount_to_body(App);
}
