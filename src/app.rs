//! Finance Tracker App
//!
//! Root component: wires config, store and controller, then starts the
//! initial load and the poll timer.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::HttpApi;
use crate::components::{FilterBar, SummaryCards, TransactionForm, TransactionsTable};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::controller::Controller;
use crate::dialogs::BrowserDialogs;
use crate::store::{sync_store, AppState};

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    let store = Store::new(AppState::default());

    let controller = Controller::new(HttpApi::new(config.api_base.clone()), BrowserDialogs, move |state: &AppState| {
        sync_store(store, state)
    });
    let ctx = AppContext::new(store, controller);
    provide_context(ctx);

    spawn_local(async move {
        ctx.controller().bootstrap().await;
    });

    // Runs for the page's lifetime
    log::info!("polling every {} ms", config.poll_interval_ms);
    Interval::new(config.poll_interval_ms, move || {
        spawn_local(async move {
            ctx.controller().refresh().await;
        });
    })
    .forget();

    view! {
        <div class="container">
            <header>
                <h1>"Control de Finanzas"</h1>
            </header>

            <SummaryCards />

            <div class="main-grid">
                <TransactionForm />

                <section class="transactions-section">
                    <h2>"Transacciones"</h2>
                    <FilterBar />
                    <TransactionsTable />
                </section>
            </div>
        </div>
    }
}
