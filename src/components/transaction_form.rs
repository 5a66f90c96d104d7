//! Transaction Form Component
//!
//! Entry form with a category dropdown that follows the selected type.
//! Also used to edit an existing transaction.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;
use crate::models::TransactionType;
use crate::store::AppStateStoreFields;
use crate::view::category_options;

/// Type select options; the empty value is the placeholder
const TYPE_OPTIONS: &[(&str, &str)] = &[
    ("", "-- Selecciona el tipo --"),
    ("income", "Ingreso"),
    ("expense", "Gasto"),
];

#[component]
pub fn TransactionForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let is_editing = move || store.form().get().editing.is_some();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(async move {
            ctx.controller().submit_transaction().await;
        });
    };

    let options = Memo::new(move |_| {
        let form = store.form().get();
        store.categories().with(|categories| category_options(form.kind, categories, &form.category_id))
    });

    view! {
        <form id="transactionForm" class="transaction-form" on:submit=on_submit>
            <h2>{move || if is_editing() { "Editar transacción" } else { "Nueva transacción" }}</h2>

            <div class="form-group">
                <label for="type">"Tipo"</label>
                <select
                    id="type"
                    required=true
                    prop:value=move || store.form().get().kind.map(|k| k.as_str()).unwrap_or("")
                    on:change=move |ev| ctx.controller().select_type(TransactionType::parse(&event_target_value(&ev)))
                >
                    {TYPE_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=*value>{*label}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="category">"Categoría"</label>
                <select
                    id="category"
                    required=true
                    prop:value=move || store.form().get().category_id
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.controller().edit_form(|f| f.category_id = value);
                    }
                >
                    {move || options.get().into_iter().map(|opt| view! {
                        <option value=opt.value selected=opt.selected>{opt.label}</option>
                    }).collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="amount">"Monto"</label>
                <input
                    id="amount"
                    type="number"
                    step="0.01"
                    min="0"
                    required=true
                    prop:value=move || store.form().get().amount
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.controller().edit_form(|f| f.amount = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="description">"Descripción"</label>
                <input
                    id="description"
                    type="text"
                    required=true
                    prop:value=move || store.form().get().description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.controller().edit_form(|f| f.description = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="date">"Fecha"</label>
                <input
                    id="date"
                    type="date"
                    required=true
                    prop:value=move || store.form().get().date
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.controller().edit_form(|f| f.date = value);
                    }
                />
            </div>

            <button type="submit" class="btn-primary">
                {move || if is_editing() { "Guardar cambios" } else { "Agregar transacción" }}
            </button>

            {move || is_editing().then(|| view! {
                <button type="button" class="btn-secondary" on:click=move |_| ctx.controller().cancel_edit()>
                    "Cancelar"
                </button>
            })}
        </form>
    }
}
