//! Filter Bar Component
//!
//! Exclusive all/income/expense toggle over the cached transactions.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Filter;
use crate::store::AppStateStoreFields;

#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    view! {
        <div class="filter-buttons">
            {Filter::ALL.into_iter().map(|filter| {
                let is_active = move || store.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "filter-btn active" } else { "filter-btn" }
                        data-filter=filter.as_str()
                        on:click=move |_| ctx.controller().set_filter(filter)
                    >
                        {filter.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
