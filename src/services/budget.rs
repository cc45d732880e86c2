//! Budget service
//!
//! The single entry point that mutates the ledger. Holds the cursor of the
//! month being viewed, creates records on navigation and carries recurring
//! expenses forward from one month to the next.
//!
//! Only moving the cursor propagates. Opening a month to read or edit it
//! creates its record when missing, so an expense removed from a month
//! stays removed.
//!
//! Recurring expenses are matched across months by name. Each propagated
//! month gets its own copy with a fresh id, so the name is the only thing
//! that ties "Netflix" in March to "Netflix" in April. Two distinct
//! recurring expenses sharing a name are treated as one obligation.

use tracing::{debug, info};

use crate::error::{MoneyCountError, MoneyCountResult};
use crate::models::{Expense, ExpenseId, Ledger, Money, Month, MonthlyRecord};
use crate::services::summary::{ChartData, MonthSummary, SavingsBound, SummaryService};

/// What `ensure_record_and_propagate` changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropagationOutcome {
    /// A record was created for the cursor month
    pub created_record: bool,
    /// Names of recurring expenses copied from the previous month
    pub propagated: Vec<String>,
}

impl PropagationOutcome {
    pub fn is_noop(&self) -> bool {
        !self.created_record && self.propagated.is_empty()
    }
}

/// Figures shown for the month under the cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentView {
    pub label: String,
    pub summary: MonthSummary,
    pub accumulated_savings: Money,
}

/// Service for budget management
pub struct BudgetService<'a> {
    ledger: &'a mut Ledger,
    current_month: Month,
}

impl<'a> BudgetService<'a> {
    /// Create a service with the cursor on `month`
    ///
    /// No record is created; reads of a month without one fail with
    /// `RecordNotFound` until a navigation call or
    /// [`ensure_record_and_propagate`](Self::ensure_record_and_propagate).
    pub fn new(ledger: &'a mut Ledger, month: Month) -> Self {
        Self {
            ledger,
            current_month: month,
        }
    }

    /// Create a service with the cursor on `month` and make sure its record exists
    ///
    /// A record created here is seeded like a navigation would seed it. An
    /// existing record is left as it is.
    pub fn open(ledger: &'a mut Ledger, month: Month) -> Self {
        let mut service = Self::new(ledger, month);
        if !service.ledger.contains(month) {
            service.ensure_record_and_propagate();
        }
        service
    }

    pub fn current_month(&self) -> Month {
        self.current_month
    }

    /// Human-readable label of the cursor month
    pub fn current_month_label(&self) -> String {
        self.current_month.label()
    }

    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }

    /// Move the cursor one month forward
    pub fn advance_month(&mut self) -> PropagationOutcome {
        self.current_month = self.current_month.next();
        self.ensure_record_and_propagate()
    }

    /// Move the cursor one month back
    pub fn retreat_month(&mut self) -> PropagationOutcome {
        self.current_month = self.current_month.prev();
        self.ensure_record_and_propagate()
    }

    /// Jump the cursor to an arbitrary month
    pub fn go_to_month(&mut self, month: Month) -> PropagationOutcome {
        self.current_month = month;
        self.ensure_record_and_propagate()
    }

    /// Create the cursor month's record if missing and copy the previous
    /// month's recurring expenses into it
    ///
    /// A new record takes its income from the previous month. Copied
    /// recurring expenses start unpaid. Running this twice in a row changes
    /// nothing the second time.
    pub fn ensure_record_and_propagate(&mut self) -> PropagationOutcome {
        let month = self.current_month;
        let prev_month = month.prev();
        let mut outcome = PropagationOutcome::default();

        let prev = self.ledger.get_record(prev_month).map(|record| {
            let recurring: Vec<(String, Money)> = record
                .recurring_expenses()
                .map(|e| (e.name.clone(), e.amount))
                .collect();
            (record.income(), recurring)
        });

        if !self.ledger.contains(month) {
            let income = prev.as_ref().map_or(Money::zero(), |(income, _)| *income);
            self.ledger.add_record(MonthlyRecord::new(month, income));
            outcome.created_record = true;
            info!(%month, %income, "created monthly record");
        }

        if let Some((_, recurring)) = prev {
            for (name, amount) in recurring {
                let present = self
                    .ledger
                    .get_record(month)
                    .is_some_and(|record| record.find_recurring_by_name(&name).is_some());
                if present {
                    continue;
                }

                let id = self.ledger.next_expense_id();
                let expense = Expense::recurring(id, name.clone(), amount, false);
                if let Some(record) = self.ledger.get_record_mut(month) {
                    record.add_expense(&expense);
                }
                debug!(%month, %id, name = %name, "propagated recurring expense");
                outcome.propagated.push(name);
            }
        }

        outcome
    }

    /// The record under the cursor
    pub fn current_record(&self) -> MoneyCountResult<&MonthlyRecord> {
        self.ledger
            .get_record(self.current_month)
            .ok_or_else(|| MoneyCountError::record_not_found(self.current_month))
    }

    fn current_record_mut(&mut self) -> MoneyCountResult<&mut MonthlyRecord> {
        let month = self.current_month;
        self.ledger
            .get_record_mut(month)
            .ok_or_else(|| MoneyCountError::record_not_found(month))
    }

    /// Add an expense to the cursor month; recurring expenses start unpaid
    pub fn add_expense(
        &mut self,
        name: &str,
        amount: Money,
        recurring: bool,
    ) -> MoneyCountResult<ExpenseId> {
        self.current_record()?;

        let name = name.trim();
        let draft = if recurring {
            Expense::recurring(ExpenseId::new(0), name, amount, false)
        } else {
            Expense::new(ExpenseId::new(0), name, amount)
        };
        draft.validate()?;

        let expense = Expense {
            id: self.ledger.next_expense_id(),
            ..draft
        };
        self.current_record_mut()?.add_expense(&expense);

        info!(month = %self.current_month, id = %expense.id, name = %expense.name, recurring, "added expense");
        Ok(expense.id)
    }

    /// Remove an expense from the cursor month only
    pub fn remove_expense(&mut self, id: ExpenseId) -> MoneyCountResult<Expense> {
        let month = self.current_month;
        let removed = self
            .current_record_mut()?
            .remove_expense(id)
            .ok_or_else(|| MoneyCountError::expense_not_found(id, month))?;

        info!(%month, %id, name = %removed.name, "removed expense");
        Ok(removed)
    }

    /// Change one expense's amount in the cursor month only
    pub fn edit_expense_amount(&mut self, id: ExpenseId, amount: Money) -> MoneyCountResult<()> {
        check_amount("Expense amount", amount)?;

        let month = self.current_month;
        let expense = self
            .current_record_mut()?
            .get_expense_mut(id)
            .ok_or_else(|| MoneyCountError::expense_not_found(id, month))?;
        expense.set_amount(amount);

        debug!(%month, %id, %amount, "edited expense amount");
        Ok(())
    }

    /// Mark a recurring expense of the cursor month as paid or unpaid
    ///
    /// Other months keep their own flags.
    pub fn set_recurring_paid(&mut self, id: ExpenseId, paid: bool) -> MoneyCountResult<()> {
        let month = self.current_month;
        let expense = self
            .current_record_mut()?
            .get_expense_mut(id)
            .ok_or_else(|| MoneyCountError::expense_not_found(id, month))?;
        expense.set_paid(paid)?;

        debug!(%month, %id, paid, "set recurring paid flag");
        Ok(())
    }

    /// Replace the cursor month's income
    pub fn set_income(&mut self, income: Money) -> MoneyCountResult<()> {
        check_amount("Income", income)?;
        self.current_record_mut()?.set_income(income);

        debug!(month = %self.current_month, %income, "set income");
        Ok(())
    }

    /// Look up a recurring expense of the cursor month by id
    fn recurring_in_current(&self, id: ExpenseId) -> MoneyCountResult<String> {
        let expense = self
            .current_record()?
            .get_expense(id)
            .ok_or_else(|| MoneyCountError::expense_not_found(id, self.current_month))?;

        if !expense.is_recurring() {
            return Err(MoneyCountError::Validation(format!(
                "Expense {} is not a recurring expense",
                id
            )));
        }
        Ok(expense.name.clone())
    }

    /// Change a recurring expense's amount in the cursor month and every
    /// later recorded month
    ///
    /// Expenses match by id, or by name among recurring expenses. An
    /// ordinary expense that happens to share the name is not touched.
    /// Earlier months are untouched. Returns how many expenses were updated.
    pub fn edit_recurring_forward(
        &mut self,
        id: ExpenseId,
        amount: Money,
    ) -> MoneyCountResult<usize> {
        check_amount("Expense amount", amount)?;
        let name = self.recurring_in_current(id)?;

        let mut updated = 0;
        for record in self.ledger.records_from_mut(self.current_month) {
            for expense in record.expenses_mut() {
                if matches_recurring(expense, id, &name) {
                    expense.set_amount(amount);
                    updated += 1;
                }
            }
        }

        info!(from = %self.current_month, name = %name, %amount, updated, "edited recurring expense forward");
        Ok(updated)
    }

    /// Remove a recurring expense from the cursor month and every later
    /// recorded month
    ///
    /// Uses the same matching as [`edit_recurring_forward`](Self::edit_recurring_forward).
    /// Returns how many expenses were removed.
    pub fn remove_recurring_forward(&mut self, id: ExpenseId) -> MoneyCountResult<usize> {
        let name = self.recurring_in_current(id)?;

        let removed: usize = self
            .ledger
            .records_from_mut(self.current_month)
            .map(|record| record.retain_expenses(|e| !matches_recurring(e, id, &name)))
            .sum();

        info!(from = %self.current_month, name = %name, removed, "removed recurring expense forward");
        Ok(removed)
    }

    pub fn income(&self) -> MoneyCountResult<Money> {
        Ok(self.current_record()?.income())
    }

    pub fn total_expenses(&self) -> MoneyCountResult<Money> {
        Ok(self.current_record()?.total_expenses())
    }

    pub fn balance(&self) -> MoneyCountResult<Money> {
        Ok(self.current_record()?.balance())
    }

    /// Expenses of the cursor month in id order
    pub fn current_expenses(&self) -> MoneyCountResult<Vec<Expense>> {
        Ok(self.current_record()?.expenses().cloned().collect())
    }

    /// Sum of balances of the months selected by `bound` relative to `as_of`
    pub fn accumulated_savings(&self, as_of: Month, bound: SavingsBound) -> Money {
        SummaryService::new(&*self.ledger).accumulated_savings(as_of, bound)
    }

    /// Chart figures of `month` plus savings across all recorded history
    pub fn chart_data(&self, month: Month) -> MoneyCountResult<ChartData> {
        SummaryService::new(&*self.ledger).chart_data(month)
    }

    /// Everything the summary panel shows for the cursor month
    pub fn current_view(&self, bound: SavingsBound) -> MoneyCountResult<CurrentView> {
        let summary = SummaryService::new(&*self.ledger).month_summary(self.current_month)?;
        Ok(CurrentView {
            label: self.current_month_label(),
            summary,
            accumulated_savings: self.accumulated_savings(self.current_month, bound),
        })
    }
}

fn check_amount(what: &str, amount: Money) -> MoneyCountResult<()> {
    if amount.is_negative() {
        return Err(MoneyCountError::negative_amount(what, amount));
    }
    if amount > Money::MAX_AMOUNT {
        return Err(MoneyCountError::amount_too_large(what, amount));
    }
    Ok(())
}

fn matches_recurring(expense: &Expense, id: ExpenseId, name: &str) -> bool {
    expense.id == id || (expense.is_recurring() && expense.name == name)
}
