//! Application State Store
//!
//! Plain state plus the transitions the controller applies to it.
//! Uses Leptos reactive_stores so components can subscribe per field.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Category, Filter, Summary, Transaction, TransactionPayload, TransactionType};

/// Everything the page renders from
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct AppState {
    /// Cached categories, server order
    pub categories: Vec<Category>,
    /// Cached transactions, server order
    pub transactions: Vec<Transaction>,
    /// Last summary received, if any
    pub summary: Option<Summary>,
    pub filter: Filter,
    pub form: FormState,
}

/// Raw contents of the entry form
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    pub kind: Option<TransactionType>,
    /// `<select>` value; empty means the placeholder is selected
    pub category_id: String,
    pub amount: String,
    pub description: String,
    pub date: String,
    /// Set while the form edits an existing transaction
    pub editing: Option<u32>,
}

impl FormState {
    pub fn blank(today: String) -> Self {
        Self {
            date: today,
            ..Default::default()
        }
    }

    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            kind: Some(tx.kind),
            category_id: tx.category.id.to_string(),
            amount: tx.amount.to_string(),
            description: tx.description.clone(),
            date: tx.date.chars().take(10).collect(),
            editing: Some(tx.id),
        }
    }

    /// Build the request body; numbers that don't parse become `None`
    pub fn payload(&self) -> TransactionPayload {
        TransactionPayload {
            kind: self.kind,
            category_id: self.category_id.trim().parse().ok(),
            amount: self.amount.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
            description: self.description.clone(),
            date: self.date.clone(),
        }
    }
}

impl AppState {
    pub fn replace_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
        self.clear_stale_category();
    }

    pub fn replace_transactions(&mut self, transactions: Vec<Transaction>) {
        self.transactions = transactions;
    }

    pub fn set_summary(&mut self, summary: Summary) {
        self.summary = Some(summary);
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Changing the type rebuilds the category options, so the selection resets
    pub fn select_type(&mut self, kind: Option<TransactionType>) {
        self.form.kind = kind;
        self.form.category_id.clear();
    }

    pub fn reset_form(&mut self, today: String) {
        self.form = FormState::blank(today);
    }

    /// Load a cached transaction into the form. Returns false if it isn't cached.
    pub fn begin_edit(&mut self, id: u32) -> bool {
        match self.transactions.iter().find(|tx| tx.id == id) {
            Some(tx) => {
                self.form = FormState::from_transaction(tx);
                true
            }
            None => false,
        }
    }

    pub fn has_transaction(&self, id: u32) -> bool {
        self.transactions.iter().any(|tx| tx.id == id)
    }

    fn clear_stale_category(&mut self) {
        let selected = self.form.category_id.trim();
        if selected.is_empty() {
            return;
        }
        let still_offered = self
            .categories
            .iter()
            .any(|c| Some(c.kind) == self.form.kind && c.id.to_string() == selected);
        if !still_offered {
            self.form.category_id.clear();
        }
    }
}

/// Which top-level fields differ between two states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StateChanges {
    pub categories: bool,
    pub transactions: bool,
    pub summary: bool,
    pub filter: bool,
    pub form: bool,
}

impl StateChanges {
    pub fn between(previous: &AppState, next: &AppState) -> Self {
        Self {
            categories: previous.categories != next.categories,
            transactions: previous.transactions != next.transactions,
            summary: previous.summary != next.summary,
            filter: previous.filter != next.filter,
            form: previous.form != next.form,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Copy `next` into the store one field at a time, writing only the fields
/// that changed, so a keystroke in the form doesn't notify the table.
pub fn sync_store(store: AppStore, next: &AppState) {
    let changes = store.with_untracked(|current| StateChanges::between(current, next));

    if changes.categories {
        store.categories().set(next.categories.clone());
    }
    if changes.transactions {
        store.transactions().set(next.transactions.clone());
    }
    if changes.summary {
        store.summary().set(next.summary.clone());
    }
    if changes.filter {
        store.filter().set(next.filter);
    }
    if changes.form {
        store.form().set(next.form.clone());
    }
}
