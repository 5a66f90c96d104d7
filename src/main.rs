#![allow(warnings)]
//! Finance Tracker Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod controller;
mod dialogs;
mod logging;
mod models;
mod sequence;
mod store;
mod view;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = ClientConfig::from_document();
    logging::init(config.log_level);

    mount_to_body(move || view! { <App config=config /> });
}
