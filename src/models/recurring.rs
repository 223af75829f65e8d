//! Planned (future) transaction model
//!
//! A planned income or expense with a frequency rule. The engine only reads
//! these; they are created and edited elsewhere.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ids::FutureTransactionId;
use super::money::Money;
use super::transaction::TransactionType;

/// How often a planned item repeats
///
/// Values outside the known set are kept as `Unrecognized` so they survive a
/// load/save round trip; such items never apply to any month.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frequency {
    OneTime,
    Monthly,
    Quarterly,
    Yearly,
    Unrecognized(String),
}

impl Frequency {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "one-time" => Self::OneTime,
            "monthly" => Self::Monthly,
            "quarterly" => Self::Quarterly,
            "yearly" => Self::Yearly,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::OneTime => "one-time",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

/// A planned income or expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FutureTransaction {
    #[serde(default)]
    pub id: FutureTransactionId,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    #[serde(default)]
    pub description: String,

    /// Amount per occurrence, always positive
    pub amount: Money,

    pub frequency: Frequency,

    /// `None` when missing or unreadable; such an item never applies
    #[serde(default, with = "super::date::lenient")]
    pub start_date: Option<NaiveDate>,

    /// An unreadable end date reads as "no end"
    #[serde(
        default,
        with = "super::date::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FutureTransaction {
    pub fn new(
        kind: TransactionType,
        description: impl Into<String>,
        amount: Money,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: FutureTransactionId::new(),
            kind,
            description: description.into(),
            amount,
            frequency,
            start_date: Some(start_date),
            end_date: None,
            category: None,
        }
    }

    /// Set the last date this item may apply
    pub fn ending(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

impl fmt::Display for FutureTransaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}",
            self.kind, self.description, self.amount, self.frequency
        )?;
        match self.start_date {
            Some(start) => write!(f, ", from {})", start),
            None => write!(f, ", no start)"),
        }
    }
}
