//! Summary Cards Component
//!
//! Income, expenses and balance for the current month.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;
use crate::view::{format_currency, summary_view, SummaryView, DEFAULT_COLOR};

#[component]
pub fn SummaryCards() -> impl IntoView {
    let store = use_app_context().store;
    let summary = Memo::new(move |_| store.summary().get().as_ref().map(summary_view));

    // Cards show $0.00 until the first summary arrives
    let amount = move |pick: fn(SummaryView) -> String| {
        move || summary.get().map(pick).unwrap_or_else(|| format_currency(0.0))
    };

    view! {
        <section class="summary">
            {move || summary.get().and_then(|s| s.period).map(|period| view! {
                <p class="summary-period">"Resumen de " {period}</p>
            })}
            <div class="summary-cards">
                <div class="card income-card">
                    <h3>"Ingresos"</h3>
                    <p id="income" class="amount">{amount(|s| s.income)}</p>
                </div>
                <div class="card expense-card">
                    <h3>"Gastos"</h3>
                    <p id="expenses" class="amount">{amount(|s| s.expenses)}</p>
                </div>
                <div class="card balance-card">
                    <h3>"Balance"</h3>
                    <p
                        id="balance"
                        class="amount"
                        style:color=move || summary.get().map(|s| s.balance_color).unwrap_or(DEFAULT_COLOR)
                    >
                        {amount(|s| s.balance)}
                    </p>
                </div>
            </div>
        </section>
    }
}
