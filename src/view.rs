//! View Models
//!
//! Pure functions from state to what the page shows. Components only draw
//! these, so rendering is deterministic and testable without a DOM.

use chrono::{Datelike, NaiveDate};

use crate::models::{Category, Filter, Summary, Transaction, TransactionType};

pub const CATEGORY_PLACEHOLDER: &str = "-- Selecciona una categoría --";
pub const EMPTY_STATE: &str = "No hay transacciones";
pub const WARNING_COLOR: &str = "#f45c43";
pub const DEFAULT_COLOR: &str = "inherit";

/// One `<option>` of a select input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// Category dropdown: placeholder, then the categories of the selected type
/// in cache order. Always rebuilt from scratch.
///
/// The option whose value equals `selected` carries the selection, so a
/// freshly drawn list already shows the form's category. An unknown value
/// leaves the placeholder selected.
pub fn category_options(kind: Option<TransactionType>, categories: &[Category], selected: &str) -> Vec<SelectOption> {
    let matching: Vec<SelectOption> = categories
        .iter()
        .filter(|c| Some(c.kind) == kind)
        .map(|c| {
            let value = c.id.to_string();
            SelectOption {
                selected: value == selected,
                value,
                label: c.name.clone(),
            }
        })
        .collect();

    let placeholder = SelectOption {
        value: String::new(),
        label: CATEGORY_PLACEHOLDER.to_string(),
        selected: !matching.iter().any(|o| o.selected),
    };

    std::iter::once(placeholder).chain(matching).collect()
}

/// One rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransactionRow {
    pub id: u32,
    pub date: String,
    pub description: String,
    pub category: String,
    pub kind_label: &'static str,
    /// `amount-positive` or `amount-negative`
    pub tone: &'static str,
    pub amount: String,
}

/// Contents of `#transactionsBody`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Single placeholder row
    Empty,
    Rows(Vec<TransactionRow>),
}

impl TableBody {
    /// Number of `<tr>` elements drawn
    pub fn row_count(&self) -> usize {
        match self {
            TableBody::Empty => 1,
            TableBody::Rows(rows) => rows.len(),
        }
    }
}

pub fn transaction_rows(transactions: &[Transaction], filter: Filter) -> TableBody {
    let rows: Vec<TransactionRow> = transactions
        .iter()
        .filter(|tx| filter.matches(tx.kind))
        .map(transaction_row)
        .collect();

    if rows.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Rows(rows)
    }
}

fn transaction_row(tx: &Transaction) -> TransactionRow {
    let (tone, sign) = match tx.kind {
        TransactionType::Income => ("amount-positive", '+'),
        TransactionType::Expense => ("amount-negative", '-'),
    };
    TransactionRow {
        id: tx.id,
        date: format_date(&tx.date),
        description: tx.description.clone(),
        category: tx.category.name.clone(),
        kind_label: tx.kind.label(),
        tone,
        amount: format!("{}{}", sign, format_currency(tx.amount)),
    }
}

/// Text and color of the three summary cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub income: String,
    pub expenses: String,
    pub balance: String,
    pub balance_color: &'static str,
    pub period: Option<String>,
}

pub fn summary_view(summary: &Summary) -> SummaryView {
    SummaryView {
        income: format_currency(summary.income),
        expenses: format_currency(summary.expenses),
        balance: format_currency(summary.balance),
        balance_color: if summary.balance < 0.0 { WARNING_COLOR } else { DEFAULT_COLOR },
        period: summary.period.as_deref().map(format_period),
    }
}

/// `$` followed by two decimals
pub fn format_currency(value: f64) -> String {
    format!("${:.2}", value)
}

/// es-MX short date (`dd/mm/yyyy`). Falls back to the raw string.
pub fn format_date(raw: &str) -> String {
    raw.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

const MONTHS_ES: [&str; 12] = [
    "enero", "febrero", "marzo", "abril", "mayo", "junio",
    "julio", "agosto", "septiembre", "octubre", "noviembre", "diciembre",
];

/// Server periods arrive as English `"%B %Y"` (`"October 2026"`); shown as
/// `"octubre de 2026"`. Anything else is shown raw.
pub fn format_period(raw: &str) -> String {
    NaiveDate::parse_from_str(&format!("1 {}", raw.trim()), "%d %B %Y")
        .map(|d| format!("{} de {}", MONTHS_ES[d.month0() as usize], d.year()))
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryRef;

    fn category(id: u32, name: &str, kind: TransactionType) -> Category {
        Category { id, name: name.to_string(), kind }
    }

    fn tx(id: u32, kind: TransactionType, amount: f64) -> Transaction {
        Transaction {
            id,
            kind,
            category: CategoryRef { id: 1, name: "Food".to_string() },
            amount,
            description: format!("tx {}", id),
            date: "2024-01-01".to_string(),
        }
    }

    fn seeded_categories() -> Vec<Category> {
        vec![
            category(1, "Salario", TransactionType::Income),
            category(4, "Alimentación", TransactionType::Expense),
            category(2, "Freelance", TransactionType::Income),
            category(5, "Transporte", TransactionType::Expense),
            category(3, "Bonos", TransactionType::Income),
        ]
    }

    #[test]
    fn test_category_options_match_type_in_order() {
        let categories = seeded_categories();
        for kind in [TransactionType::Income, TransactionType::Expense] {
            let options = category_options(Some(kind), &categories, "");
            assert_eq!(options[0].value, "");
            assert_eq!(options[0].label, CATEGORY_PLACEHOLDER);

            let expected: Vec<String> = categories
                .iter()
                .filter(|c| c.kind == kind)
                .map(|c| c.id.to_string())
                .collect();
            let got: Vec<String> = options[1..].iter().map(|o| o.value.clone()).collect();
            assert_eq!(got, expected);
        }
    }

    #[test]
    fn test_category_options_without_type_is_placeholder_only() {
        let options = category_options(None, &seeded_categories(), "");
        assert_eq!(options.len(), 1);
        assert!(options[0].selected);
    }

    #[test]
    fn test_category_options_mark_form_selection() {
        let options = category_options(Some(TransactionType::Income), &seeded_categories(), "2");
        let selected: Vec<&str> = options.iter().filter(|o| o.selected).map(|o| o.value.as_str()).collect();
        assert_eq!(selected, vec!["2"]);

        // A category of the other type can't be selected
        let options = category_options(Some(TransactionType::Income), &seeded_categories(), "4");
        assert!(options[0].selected);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }

    #[test]
    fn test_row_count_per_filter() {
        let txs = vec![
            tx(1, TransactionType::Income, 10.0),
            tx(2, TransactionType::Expense, 5.0),
            tx(3, TransactionType::Expense, 7.0),
        ];
        assert_eq!(transaction_rows(&txs, Filter::All).row_count(), 3);
        assert_eq!(transaction_rows(&txs, Filter::Income).row_count(), 1);
        assert_eq!(transaction_rows(&txs, Filter::Expense).row_count(), 2);
        assert_eq!(transaction_rows(&[], Filter::All), TableBody::Empty);
    }

    #[test]
    fn test_expense_only_cache_with_income_filter_is_empty_state() {
        let cache = vec![Transaction {
            id: 1,
            kind: TransactionType::Expense,
            category: CategoryRef { id: 4, name: "Food".to_string() },
            amount: 50.0,
            description: "Lunch".to_string(),
            date: "2024-01-01".to_string(),
        }];
        let body = transaction_rows(&cache, Filter::Income);
        assert_eq!(body, TableBody::Empty);
        assert_eq!(body.row_count(), 1);
    }

    #[test]
    fn test_render_is_idempotent() {
        let txs = vec![tx(1, TransactionType::Income, 10.0), tx(2, TransactionType::Expense, 5.0)];
        assert_eq!(transaction_rows(&txs, Filter::All), transaction_rows(&txs, Filter::All));
    }

    #[test]
    fn test_row_formatting() {
        let body = transaction_rows(&[tx(9, TransactionType::Expense, 50.0)], Filter::All);
        let TableBody::Rows(rows) = body else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].amount, "-$50.00");
        assert_eq!(rows[0].tone, "amount-negative");
        assert_eq!(rows[0].kind_label, "Gasto");
        assert_eq!(rows[0].date, "01/01/2024");
        assert_eq!(rows[0].category, "Food");
    }

    #[test]
    fn test_balance_color() {
        let positive = Summary { income: 1000.0, expenses: 400.0, balance: 600.0, period: None };
        let view = summary_view(&positive);
        assert_eq!(view.balance_color, DEFAULT_COLOR);
        assert_eq!(view.income, "$1000.00");
        assert_eq!(view.balance, "$600.00");

        let negative = Summary { income: 0.0, expenses: 50.0, balance: -50.0, period: None };
        assert_eq!(summary_view(&negative).balance_color, WARNING_COLOR);
    }

    #[test]
    fn test_period_is_shown_in_spanish() {
        assert_eq!(format_period("October 2026"), "octubre de 2026");
        assert_eq!(format_period("January 2024"), "enero de 2024");
        assert_eq!(format_period("2024-01"), "2024-01");

        let summary = Summary { income: 0.0, expenses: 0.0, balance: 0.0, period: Some("March 2025".to_string()) };
        assert_eq!(summary_view(&summary).period.as_deref(), Some("marzo de 2025"));
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-09T14:30:00"), "09/03/2024");
        assert_eq!(format_date("not a date"), "not a date");
        assert_eq!(format_date(""), "");
    }
}
