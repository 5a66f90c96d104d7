//! View-Sync Controller
//!
//! Owns the application state, talks to the API and publishes a snapshot
//! after every change. Reads fail quietly (logged, stale cache kept);
//! writes fail loudly through `Dialogs`.

use std::cell::RefCell;

use crate::api::Api;
use crate::dialogs::{self, Dialogs};
use crate::models::{Filter, TransactionType};
use crate::sequence::RequestSeq;
use crate::store::{AppState, FormState};

/// Today's date as `YYYY-MM-DD`, for the date input
pub fn today() -> String {
    chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

pub struct Controller<A, D> {
    api: A,
    dialogs: D,
    state: RefCell<AppState>,
    categories_seq: RequestSeq,
    transactions_seq: RequestSeq,
    summary_seq: RequestSeq,
    listener: Box<dyn Fn(&AppState)>,
}

impl<A: Api, D: Dialogs> Controller<A, D> {
    pub fn new(api: A, dialogs: D, listener: impl Fn(&AppState) + 'static) -> Self {
        Self {
            api,
            dialogs,
            state: RefCell::new(AppState::default()),
            categories_seq: RequestSeq::new(),
            transactions_seq: RequestSeq::new(),
            summary_seq: RequestSeq::new(),
            listener: Box::new(listener),
        }
    }

    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    fn update<R>(&self, f: impl FnOnce(&mut AppState) -> R) -> R {
        let result = f(&mut self.state.borrow_mut());
        self.publish();
        result
    }

    fn publish(&self) {
        (self.listener)(&self.state.borrow());
    }

    /// Initial page load
    pub async fn bootstrap(&self) {
        log::info!("bootstrapping");
        self.update(|s| s.reset_form(today()));
        self.load_categories().await;
        self.load_transactions().await;
        self.update_summary().await;
    }

    /// Re-fetch transactions and summary (poll tick, after mutations)
    pub async fn refresh(&self) {
        self.load_transactions().await;
        self.update_summary().await;
    }

    pub async fn load_categories(&self) {
        let ticket = self.categories_seq.issue();
        match self.api.list_categories().await {
            Ok(categories) if self.categories_seq.accept(ticket) => {
                log::debug!("loaded {} categories", categories.len());
                self.update(|s| s.replace_categories(categories));
            }
            Ok(_) => log::debug!("dropping stale category response #{}", ticket),
            Err(e) => log::error!("Error loading categories: {}", e),
        }
    }

    pub async fn load_transactions(&self) {
        let ticket = self.transactions_seq.issue();
        match self.api.list_transactions().await {
            Ok(transactions) if self.transactions_seq.accept(ticket) => {
                log::debug!("loaded {} transactions", transactions.len());
                self.update(|s| s.replace_transactions(transactions));
            }
            Ok(_) => log::debug!("dropping stale transaction response #{}", ticket),
            Err(e) => log::error!("Error loading transactions: {}", e),
        }
    }

    pub async fn update_summary(&self) {
        let ticket = self.summary_seq.issue();
        match self.api.get_summary().await {
            Ok(summary) if self.summary_seq.accept(ticket) => {
                self.update(|s| s.set_summary(summary));
            }
            Ok(_) => log::debug!("dropping stale summary response #{}", ticket),
            Err(e) => log::error!("Error loading summary: {}", e),
        }
    }

    pub fn select_type(&self, kind: Option<TransactionType>) {
        self.update(|s| s.select_type(kind));
    }

    pub fn edit_form(&self, f: impl FnOnce(&mut FormState)) {
        self.update(|s| f(&mut s.form));
    }

    /// Re-render from cache only
    pub fn set_filter(&self, filter: Filter) {
        self.update(|s| s.set_filter(filter));
    }

    pub fn begin_edit(&self, id: u32) {
        if !self.update(|s| s.begin_edit(id)) {
            log::warn!("transaction {} is not cached, cannot edit", id);
        }
    }

    pub fn cancel_edit(&self) {
        self.update(|s| s.reset_form(today()));
    }

    /// Create, or update while editing. On failure the form is left as is.
    pub async fn submit_transaction(&self) {
        let (payload, editing) = {
            let state = self.state.borrow();
            (state.form.payload(), state.form.editing)
        };

        let (result, failure) = match editing {
            Some(id) => (self.api.update_transaction(id, &payload).await, dialogs::UPDATE_FAILED),
            None => (self.api.create_transaction(&payload).await, dialogs::ADD_FAILED),
        };

        match result {
            Ok(()) => {
                log::info!("saved transaction ({:?})", editing);
                self.update(|s| s.reset_form(today()));
                self.refresh().await;
            }
            Err(e) => {
                log::error!("Error saving transaction: {}", e);
                self.dialogs.alert(failure);
            }
        }
    }

    /// Delete after confirmation. The cache only changes via the re-fetch.
    pub async fn delete_transaction(&self, id: u32) {
        if !self.dialogs.confirm(dialogs::CONFIRM_DELETE) {
            return;
        }

        match self.api.delete_transaction(id).await {
            Ok(()) => {
                log::info!("deleted transaction {}", id);
                if self.state.borrow().form.editing == Some(id) {
                    self.update(|s| s.reset_form(today()));
                }
                self.refresh().await;
            }
            Err(e) => {
                log::error!("Error deleting transaction {}: {}", id, e);
                self.dialogs.alert(dialogs::DELETE_FAILED);
            }
        }
    }
}
