//! Transaction model
//!
//! A recorded income or expense. Transactions are immutable values: an edit
//! replaces the whole record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::month::MonthKey;

/// Direction of a transaction or planned item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A recorded transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: TransactionId,

    /// Calendar date; `None` when the stored value could not be parsed
    #[serde(default, with = "super::date::lenient")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default)]
    pub category: String,

    /// Non-negative amount; the direction comes from `kind`
    pub amount: Money,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date: Some(date),
            kind,
            category: category.into(),
            amount,
        }
    }

    pub fn income(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::new(date, TransactionType::Income, category, amount)
    }

    pub fn expense(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::new(date, TransactionType::Expense, category, amount)
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// The month this transaction counts toward, or `fallback` when the
    /// date is missing or was malformed
    pub fn month_key_or(&self, fallback: MonthKey) -> MonthKey {
        self.date.map(MonthKey::from_date).unwrap_or(fallback)
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "????-??-??".to_string());
        write!(f, "{} {} {} {}", date, self.kind, self.category, self.amount)
    }
}
