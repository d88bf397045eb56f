mod budget;
mod expense;
mod period;

pub(crate) use budget::{BudgetLine, BudgetTable};
pub(crate) use expense::ExpenseRecord;
pub(crate) use period::PeriodKey;

#[cfg(test)]
mod tests;
