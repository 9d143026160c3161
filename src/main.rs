//! Sweet Shop Frontend Entry Point

mod api;
mod app;
mod catalog;
mod components;
mod context;
mod error;
mod models;
mod pages;
mod session;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    mount_to_body(App);
}
