//! Loan status derivation and payment bookkeeping
//!
//! Operations return a new `Loan` and never touch their input. Status is not
//! stored on a loan at all; `derive_status` computes it from the payments,
//! amount and due date each time it is asked, so it cannot fall out of date.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Loan, LoanPayment, LoanStatus, LoanType, Money, PaymentId};

/// Derive the status of a loan as of `today`
///
/// First match wins: fully repaid loans are completed, then loans past
/// their due date are overdue, then loans with any payment are partially
/// paid, and everything else is pending.
pub fn derive_status(loan: &Loan, today: NaiveDate) -> LoanStatus {
    let paid = loan.total_paid();

    if paid >= loan.amount() {
        LoanStatus::Completed
    } else if loan.due_date().is_some_and(|due| due < today) {
        LoanStatus::Overdue
    } else if paid.is_positive() {
        LoanStatus::PartiallyPaid
    } else {
        LoanStatus::Pending
    }
}

/// A loan together with the figures derived from it as of one day
///
/// This is the only serialized form that carries a status.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanView<'a> {
    #[serde(flatten)]
    pub loan: &'a Loan,
    pub status: LoanStatus,
    pub total_paid: Money,
    pub remaining: Money,
    pub progress_percent: f64,
}

/// Derive everything a reader of `loan` needs as of `today`
pub fn view(loan: &Loan, today: NaiveDate) -> LoanView<'_> {
    LoanView {
        loan,
        status: derive_status(loan, today),
        total_paid: loan.total_paid(),
        remaining: remaining(loan),
        progress_percent: progress_percent(loan),
    }
}

/// Record a new loan with no payments
pub fn open(
    kind: LoanType,
    person: impl Into<String>,
    amount: Money,
    date: NaiveDate,
    due_date: Option<NaiveDate>,
) -> Loan {
    Loan::from_parts(kind, person.into(), amount, date, due_date)
}

/// Append a payment, keeping payments newest first (undated ones last)
pub fn add_payment(loan: &Loan, payment: LoanPayment) -> LedgerResult<Loan> {
    if !payment.amount.is_positive() {
        return Err(LedgerError::Validation(format!(
            "Payment amount must be positive, got {}",
            payment.amount
        )));
    }

    let mut updated = loan.clone();
    let payments = updated.payments_mut();
    payments.insert(0, payment);
    payments.sort_by(|a, b| b.date.cmp(&a.date));
    Ok(updated)
}

/// Remove a payment by ID
pub fn remove_payment(loan: &Loan, payment_id: &PaymentId) -> LedgerResult<Loan> {
    let mut updated = loan.clone();
    let payments = updated.payments_mut();
    let index = payments
        .iter()
        .position(|p| &p.id == payment_id)
        .ok_or_else(|| LedgerError::payment_not_found(payment_id.to_string()))?;
    payments.remove(index);
    Ok(updated)
}

/// Change or clear the due date
pub fn set_due_date(loan: &Loan, due_date: Option<NaiveDate>) -> Loan {
    let mut updated = loan.clone();
    updated.set_due_date(due_date);
    updated
}

/// Amount still owed, never below zero
pub fn remaining(loan: &Loan) -> Money {
    (loan.amount() - loan.total_paid()).max(Money::zero())
}

/// Share of the loan repaid, from 0 to 100
pub fn progress_percent(loan: &Loan) -> f64 {
    if !loan.amount().is_positive() {
        return 0.0;
    }
    (loan.total_paid().as_decimal() / loan.amount().as_decimal() * 100.0).min(100.0)
}
