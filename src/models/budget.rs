use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetLine {
    pub(crate) category: String,
    pub(crate) amount: Decimal,
}

/// Fixed per-category spending ceilings for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetTable {
    lines: Vec<BudgetLine>,
}

impl BudgetTable {
    pub(crate) fn new(lines: Vec<BudgetLine>) -> Self {
        Self { lines }
    }

    pub(crate) fn lines(&self) -> &[BudgetLine] {
        &self.lines
    }

    pub(crate) fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

impl Default for BudgetTable {
    fn default() -> Self {
        Self::new(vec![
            BudgetLine {
                category: "transportation_budget".into(),
                amount: Decimal::from(2400),
            },
            BudgetLine {
                category: "food_budget".into(),
                amount: Decimal::from(2500),
            },
        ])
    }
}
