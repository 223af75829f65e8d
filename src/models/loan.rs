//! Loan model
//!
//! A loan given to or taken from a person, with its repayment history. A
//! loan carries no status of its own: the status is derived on demand from
//! the payments, the amount, the due date and the day it is asked about, so
//! a stored `status` value is never read. The fields it depends on are
//! private and only change through the loan ledger operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{LoanId, PaymentId};
use super::money::Money;

/// Direction of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanType {
    /// Money lent to someone
    Given,
    /// Money borrowed from someone
    Taken,
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Given => write!(f, "Given"),
            Self::Taken => write!(f, "Taken"),
        }
    }
}

/// Lifecycle stage of a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanStatus {
    #[default]
    Pending,
    PartiallyPaid,
    Completed,
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::PartiallyPaid => "partially_paid",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single repayment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPayment {
    #[serde(default)]
    pub id: PaymentId,

    /// `None` when the stored value could not be parsed
    #[serde(default, with = "super::date::lenient")]
    pub date: Option<NaiveDate>,

    pub amount: Money,
}

impl LoanPayment {
    pub fn new(date: NaiveDate, amount: Money) -> Self {
        Self {
            id: PaymentId::new(),
            date: Some(date),
            amount,
        }
    }
}

/// A loan and its payments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(default)]
    pub id: LoanId,

    #[serde(rename = "type")]
    pub kind: LoanType,

    pub person: String,

    /// Date the loan was made; `None` when the stored value could not be parsed
    #[serde(default, with = "super::date::lenient")]
    pub date: Option<NaiveDate>,

    amount: Money,

    #[serde(default, with = "super::date::lenient")]
    due_date: Option<NaiveDate>,

    /// Newest first
    #[serde(default)]
    payments: Vec<LoanPayment>,
}

impl Loan {
    pub(crate) fn from_parts(
        kind: LoanType,
        person: String,
        amount: Money,
        date: NaiveDate,
        due_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: LoanId::new(),
            kind,
            person,
            date: Some(date),
            amount,
            due_date,
            payments: Vec::new(),
        }
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    pub fn payments(&self) -> &[LoanPayment] {
        &self.payments
    }

    /// Sum of all payments
    pub fn total_paid(&self) -> Money {
        self.payments.iter().map(|p| p.amount).sum()
    }

    pub(crate) fn payments_mut(&mut self) -> &mut Vec<LoanPayment> {
        &mut self.payments
    }

    pub(crate) fn set_due_date(&mut self, due_date: Option<NaiveDate>) {
        self.due_date = due_date;
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} (paid {})",
            self.kind,
            self.person,
            self.amount,
            self.total_paid()
        )
    }
}
