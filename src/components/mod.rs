//! UI Components
//!
//! Leptos components that draw the view models from `crate::view`.

mod filter_bar;
mod summary_cards;
mod transaction_form;
mod transactions_table;

pub use filter_bar::FilterBar;
pub use summary_cards::SummaryCards;
pub use transaction_form::TransactionForm;
pub use transactions_table::TransactionsTable;
