//! Transactions Table Component
//!
//! Renders `#transactionsBody` from the filtered cache.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::{use_app_context, AppContext};
use crate::store::AppStateStoreFields;
use crate::view::{transaction_rows, TableBody, TransactionRow, EMPTY_STATE};

#[component]
pub fn TransactionsTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let body = Memo::new(move |_| transaction_rows(&store.transactions().get(), store.filter().get()));

    view! {
        <div class="table-container">
            <table>
                <thead>
                    <tr>
                        <th>"Fecha"</th>
                        <th>"Descripción"</th>
                        <th>"Categoría"</th>
                        <th>"Tipo"</th>
                        <th>"Monto"</th>
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody id="transactionsBody">
                    {move || match body.get() {
                        TableBody::Empty => view! {
                            <tr>
                                <td colspan="6" class="empty-state">{EMPTY_STATE}</td>
                            </tr>
                        }.into_any(),
                        TableBody::Rows(rows) => rows
                            .into_iter()
                            .map(|row| row_view(ctx, row))
                            .collect_view()
                            .into_any(),
                    }}
                </tbody>
            </table>
        </div>
    }
}

fn row_view(ctx: AppContext, row: TransactionRow) -> impl IntoView {
    let id = row.id;
    let delete = move |_| {
        spawn_local(async move {
            ctx.controller().delete_transaction(id).await;
        });
    };

    view! {
        <tr>
            <td>{row.date}</td>
            <td>{row.description}</td>
            <td>{row.category}</td>
            <td>
                <span class=row.tone>{row.kind_label}</span>
            </td>
            <td class=row.tone>{row.amount}</td>
            <td>
                <button class="btn-edit" on:click=move |_| ctx.controller().begin_edit(id)>"Editar"</button>
                <button class="btn-delete" on:click=delete>"Eliminar"</button>
            </td>
        </tr>
    }
}
