//! Monthly record model
//!
//! One record per calendar month: the declared income plus the expenses
//! entered for that month.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::expense::Expense;
use super::ids::ExpenseId;
use super::money::Money;
use super::month::Month;

/// Income and expenses of a single month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    month: Month,
    income: Money,
    #[serde(default)]
    expenses: BTreeMap<ExpenseId, Expense>,
}

impl MonthlyRecord {
    /// Create an empty record for a month
    pub fn new(month: Month, income: Money) -> Self {
        Self {
            month,
            income,
            expenses: BTreeMap::new(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn income(&self) -> Money {
        self.income
    }

    /// Replace the income figure
    pub fn set_income(&mut self, income: Money) {
        self.income = income;
    }

    /// Insert a copy of an expense keyed by its id
    ///
    /// An expense already stored under the same id is replaced and returned.
    pub fn add_expense(&mut self, expense: &Expense) -> Option<Expense> {
        self.expenses.insert(expense.id, expense.clone())
    }

    /// Remove an expense by id; absent ids are ignored
    pub fn remove_expense(&mut self, id: ExpenseId) -> Option<Expense> {
        self.expenses.remove(&id)
    }

    pub fn get_expense(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.get(&id)
    }

    pub fn get_expense_mut(&mut self, id: ExpenseId) -> Option<&mut Expense> {
        self.expenses.get_mut(&id)
    }

    /// Expenses in id order
    pub fn expenses(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.values()
    }

    pub fn expenses_mut(&mut self) -> impl Iterator<Item = &mut Expense> {
        self.expenses.values_mut()
    }

    pub fn expense_count(&self) -> usize {
        self.expenses.len()
    }

    /// Recurring expenses in id order
    pub fn recurring_expenses(&self) -> impl Iterator<Item = &Expense> {
        self.expenses.values().filter(|e| e.is_recurring())
    }

    /// First recurring expense with exactly this name
    pub fn find_recurring_by_name(&self, name: &str) -> Option<&Expense> {
        self.recurring_expenses().find(|e| e.name == name)
    }

    /// Keep only the expenses for which `keep` returns true, returning how
    /// many were removed
    pub fn retain_expenses<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&Expense) -> bool,
    {
        let before = self.expenses.len();
        self.expenses.retain(|_, e| keep(e));
        before - self.expenses.len()
    }

    /// Sum of ordinary amounts plus paid recurring amounts
    ///
    /// Always recomputed: callers mutate expenses between reads.
    pub fn total_expenses(&self) -> Money {
        self.expenses.values().map(Expense::contribution).sum()
    }

    /// Income minus counted expenses
    pub fn balance(&self) -> Money {
        self.income - self.total_expenses()
    }

    /// Total of recurring expenses still waiting to be paid
    pub fn unpaid_recurring(&self) -> Money {
        self.recurring_expenses()
            .filter(|e| !e.is_counted())
            .map(|e| e.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> Month {
        Month::new(2025, 3).unwrap()
    }

    #[test]
    fn test_totals_skip_unpaid_recurring() {
        let mut record = MonthlyRecord::new(march(), Money::from_units(2000));
        record.add_expense(&Expense::new(ExpenseId::new(0), "Rent", Money::from_units(700)));
        record.add_expense(&Expense::recurring(
            ExpenseId::new(1),
            "Netflix",
            Money::from_units(12),
            false,
        ));
        record.add_expense(&Expense::recurring(
            ExpenseId::new(2),
            "Gym",
            Money::from_units(30),
            true,
        ));

        assert_eq!(record.total_expenses(), Money::from_units(730));
        assert_eq!(record.balance(), Money::from_units(1270));
        assert_eq!(record.unpaid_recurring(), Money::from_units(12));
    }

    #[test]
    fn test_totals_track_live_mutations() {
        let mut record = MonthlyRecord::new(march(), Money::from_units(100));
        record.add_expense(&Expense::recurring(
            ExpenseId::new(0),
            "Phone",
            Money::from_units(20),
            false,
        ));
        assert_eq!(record.total_expenses(), Money::zero());

        record
            .get_expense_mut(ExpenseId::new(0))
            .unwrap()
            .set_paid(true)
            .unwrap();
        assert_eq!(record.total_expenses(), Money::from_units(20));

        record
            .get_expense_mut(ExpenseId::new(0))
            .unwrap()
            .set_amount(Money::from_units(25));
        assert_eq!(record.total_expenses(), Money::from_units(25));
    }

    #[test]
    fn test_add_stores_a_copy_and_overwrites_same_id() {
        let mut record = MonthlyRecord::new(march(), Money::zero());
        let mut original = Expense::new(ExpenseId::new(5), "Books", Money::from_units(15));
        assert!(record.add_expense(&original).is_none());

        // Mutating the caller's value does not reach the stored copy
        original.set_amount(Money::from_units(99));
        assert_eq!(
            record.get_expense(ExpenseId::new(5)).unwrap().amount,
            Money::from_units(15)
        );

        let replaced = record.add_expense(&original);
        assert_eq!(replaced.unwrap().amount, Money::from_units(15));
        assert_eq!(record.expense_count(), 1);
        assert_eq!(record.total_expenses(), Money::from_units(99));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut record = MonthlyRecord::new(march(), Money::zero());
        record.add_expense(&Expense::new(ExpenseId::new(1), "Taxi", Money::from_units(9)));
        assert!(record.remove_expense(ExpenseId::new(2)).is_none());
        assert_eq!(record.expense_count(), 1);
        assert!(record.remove_expense(ExpenseId::new(1)).is_some());
        assert_eq!(record.expense_count(), 0);
    }

    #[test]
    fn test_find_recurring_by_name_ignores_ordinary() {
        let mut record = MonthlyRecord::new(march(), Money::zero());
        record.add_expense(&Expense::new(ExpenseId::new(0), "Water", Money::from_units(10)));
        assert!(record.find_recurring_by_name("Water").is_none());

        record.add_expense(&Expense::recurring(
            ExpenseId::new(1),
            "Water",
            Money::from_units(10),
            false,
        ));
        assert_eq!(
            record.find_recurring_by_name("Water").unwrap().id,
            ExpenseId::new(1)
        );
    }

    #[test]
    fn test_set_income() {
        let mut record = MonthlyRecord::new(march(), Money::from_units(10));
        record.set_income(Money::from_units(2500));
        assert_eq!(record.income(), Money::from_units(2500));
        assert_eq!(record.month(), march());
    }
}
