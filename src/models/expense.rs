//! Expense model
//!
//! An expense is a named amount recorded against one month. Recurring
//! ("fixed") expenses carry a paid flag and only count toward the month's
//! total once paid.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;

/// Ordinary vs recurring expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExpenseKind {
    /// One-off expense, always counted
    Ordinary,
    /// Monthly obligation, counted only when paid
    Recurring { paid: bool },
}

impl fmt::Display for ExpenseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ordinary => f.pad("ordinary"),
            Self::Recurring { .. } => f.pad("recurring"),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    NotRecurring(ExpenseId),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Expense amount cannot be negative: {}", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Expense amount exceeds the maximum of {}: {}",
                Money::MAX_AMOUNT,
                amount
            ),
            Self::NotRecurring(id) => write!(f, "Expense {} is not a recurring expense", id),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// A single expense line
///
/// `Clone` is the copy operation: the duplicate keeps the same id, which is
/// what moving an expense into another collection needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    pub amount: Money,
    pub created_on: NaiveDate,
    pub kind: ExpenseKind,
}

impl Expense {
    /// Create an ordinary expense dated today
    pub fn new(id: ExpenseId, name: impl Into<String>, amount: Money) -> Self {
        Self {
            id,
            name: name.into(),
            amount,
            created_on: Local::now().date_naive(),
            kind: ExpenseKind::Ordinary,
        }
    }

    /// Create a recurring expense dated today
    pub fn recurring(
        id: ExpenseId,
        name: impl Into<String>,
        amount: Money,
        paid_initially: bool,
    ) -> Self {
        Self {
            kind: ExpenseKind::Recurring {
                paid: paid_initially,
            },
            ..Self::new(id, name, amount)
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self.kind, ExpenseKind::Recurring { .. })
    }

    /// Paid flag; `None` for ordinary expenses
    pub fn paid(&self) -> Option<bool> {
        match self.kind {
            ExpenseKind::Ordinary => None,
            ExpenseKind::Recurring { paid } => Some(paid),
        }
    }

    pub fn set_amount(&mut self, amount: Money) {
        self.amount = amount;
    }

    /// Set the paid flag of a recurring expense
    pub fn set_paid(&mut self, paid: bool) -> Result<(), ExpenseValidationError> {
        match &mut self.kind {
            ExpenseKind::Recurring { paid: flag } => {
                *flag = paid;
                Ok(())
            }
            ExpenseKind::Ordinary => Err(ExpenseValidationError::NotRecurring(self.id)),
        }
    }

    /// Whether the expense adds to its month's total
    pub fn is_counted(&self) -> bool {
        match self.kind {
            ExpenseKind::Ordinary => true,
            ExpenseKind::Recurring { paid } => paid,
        }
    }

    /// Amount this expense adds to its month's total
    pub fn contribution(&self) -> Money {
        if self.is_counted() {
            self.amount
        } else {
            Money::zero()
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.amount)?;
        match self.kind {
            ExpenseKind::Ordinary => Ok(()),
            ExpenseKind::Recurring { paid: true } => write!(f, " (recurring, paid)"),
            ExpenseKind::Recurring { paid: false } => write!(f, " (recurring, unpaid)"),
        }
    }
}
