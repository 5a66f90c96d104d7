//! Frontend Models
//!
//! Data structures matching the finance API payloads.

use serde::{Deserialize, Serialize};

/// Whether a transaction or category is money in or money out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    /// Parse a `<select>` value; the empty placeholder yields `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            _ => None,
        }
    }

    /// Spanish label shown in the table and the type selector
    pub fn label(&self) -> &'static str {
        match self {
            TransactionType::Income => "Ingreso",
            TransactionType::Expense => "Gasto",
        }
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

/// Category as embedded inside a transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: u32,
    pub name: String,
}

/// Transaction data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: CategoryRef,
    pub amount: f64,
    pub description: String,
    /// ISO date or datetime string as sent by the server
    pub date: String,
}

/// Monthly totals computed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
    #[serde(default)]
    pub period: Option<String>,
}

/// Body for `POST /api/transactions` and `PUT /api/transactions/{id}`
///
/// Unparsable numeric fields are sent as `null`; the server rejects them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPayload {
    #[serde(rename = "type")]
    pub kind: Option<TransactionType>,
    pub category_id: Option<u32>,
    pub amount: Option<f64>,
    pub description: String,
    pub date: String,
}

/// Client-side table filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filter {
    #[default]
    All,
    Income,
    Expense,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Income, Filter::Expense];

    /// Value carried in the button's `data-filter` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Income => "income",
            Filter::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "Todas",
            Filter::Income => "Ingresos",
            Filter::Expense => "Gastos",
        }
    }

    pub fn matches(&self, kind: TransactionType) -> bool {
        match self {
            Filter::All => true,
            Filter::Income => kind == TransactionType::Income,
            Filter::Expense => kind == TransactionType::Expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_transaction_with_extra_fields() {
        let json = r#"{
            "id": 7,
            "amount": 50.5,
            "description": "Lunch",
            "type": "expense",
            "category": {"id": 4, "name": "Alimentación", "type": "expense"},
            "date": "2024-01-01T00:00:00",
            "created_at": "2024-01-01T12:00:00",
            "updated_at": "2024-01-01T12:00:00"
        }"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.id, 7);
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.category.name, "Alimentación");
        assert_eq!(tx.amount, 50.5);
    }

    #[test]
    fn test_decode_summary_period_optional() {
        let with: Summary =
            serde_json::from_str(r#"{"income":1000,"expenses":400,"balance":600,"period":"January 2024"}"#).unwrap();
        assert_eq!(with.period.as_deref(), Some("January 2024"));

        let without: Summary = serde_json::from_str(r#"{"income":0,"expenses":0,"balance":0}"#).unwrap();
        assert_eq!(without.period, None);
    }

    #[test]
    fn test_payload_field_names() {
        let payload = TransactionPayload {
            kind: Some(TransactionType::Income),
            category_id: Some(2),
            amount: None,
            description: "Pago".to_string(),
            date: "2024-03-05".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["type"], "income");
        assert_eq!(value["category_id"], 2);
        assert!(value["amount"].is_null());
        assert_eq!(value["date"], "2024-03-05");
    }

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(TransactionType::Expense));
        assert!(Filter::Income.matches(TransactionType::Income));
        assert!(!Filter::Income.matches(TransactionType::Expense));
        assert_eq!(Filter::Expense.as_str(), "expense");
    }
}
