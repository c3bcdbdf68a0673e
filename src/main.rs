//! Catalog Widget Entry Point

mod app;
mod components;
mod controller;
mod error;
mod forms;
mod gateway;
mod listing;
mod models;
mod notify;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
