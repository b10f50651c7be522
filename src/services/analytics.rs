//! Ledger analytics
//!
//! Aggregations over a [`LedgerSnapshot`]: income and expense totals, savings
//! rate, per-category spending and progress, and month-by-month stats.

use serde::Serialize;
use std::collections::BTreeMap;

use super::progress;
use crate::models::money::{round_div, saturate};
use crate::models::{
    Category, CategoryId, CategoryType, LedgerSnapshot, Money, ProgressStatus,
};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    /// The larger of recorded income and the target income
    pub total_income: Money,
    /// Spending in fixed-cost categories
    pub fixed_costs: Money,
    /// Target income minus fixed costs
    pub disposable_income: Money,
    /// Spending in variable-cost categories
    pub variable_spent: Money,
    /// Disposable income minus variable spending
    pub remaining: Money,
}

/// Spending against target for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryProgress {
    pub category_id: CategoryId,
    pub name: String,
    pub category_type: CategoryType,
    pub spent: Money,
    pub target: Money,
    /// `None` when the category has no positive target
    pub progress: Option<i64>,
    pub status: Option<ProgressStatus>,
}

impl CategoryProgress {
    /// Progress clamped to 0-100 for bar widths
    pub fn bar_percent(&self) -> i64 {
        self.progress.unwrap_or(0).clamp(0, 100)
    }
}

/// A category's share of total spending
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySpending {
    pub category_id: CategoryId,
    pub name: String,
    pub color: String,
    pub spent: Money,
    /// Percentage of total expense, rounded
    pub share: i64,
}

/// Income and expense for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStats {
    /// `YYYY-MM`
    pub month: String,
    pub income: Money,
    pub expense: Money,
    pub surplus: Money,
}

/// Savings rate as a whole percentage
///
/// `round((income - expense) / income * 100)`, or 0 when there is no income.
/// Negative when spending exceeds income.
pub fn savings_rate(income: Money, expense: Money) -> i64 {
    if !income.is_positive() {
        return 0;
    }
    let saved = i128::from(income.units()) - i128::from(expense.units());
    saturate(round_div(saved * 100, i128::from(income.units())))
}

/// Analytics over one ledger snapshot
pub struct LedgerAnalytics<'a> {
    snapshot: &'a LedgerSnapshot,
}

impl<'a> LedgerAnalytics<'a> {
    pub fn new(snapshot: &'a LedgerSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn total_income(&self) -> Money {
        self.snapshot
            .transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_expense(&self) -> Money {
        self.snapshot
            .transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Expense booked against one category
    pub fn category_spent(&self, category_id: CategoryId) -> Money {
        self.snapshot
            .transactions
            .iter()
            .filter(|t| t.is_expense_in(category_id))
            .map(|t| t.amount)
            .sum()
    }

    fn spent_by_type(&self, category_type: CategoryType) -> Money {
        self.snapshot
            .categories
            .iter()
            .filter(|c| c.category_type == category_type)
            .map(|c| self.category_spent(c.id))
            .sum()
    }

    pub fn savings_rate(&self) -> i64 {
        savings_rate(self.total_income(), self.total_expense())
    }

    /// Dashboard summary against the user's target income
    pub fn budget_summary(&self, target_income: Money) -> BudgetSummary {
        let fixed_costs = self.spent_by_type(CategoryType::Fixed);
        let variable_spent = self.spent_by_type(CategoryType::Variable);
        let disposable_income = target_income - fixed_costs;

        BudgetSummary {
            total_income: self.total_income().max(target_income),
            fixed_costs,
            disposable_income,
            variable_spent,
            remaining: disposable_income - variable_spent,
        }
    }

    fn progress_for(&self, category: &Category) -> CategoryProgress {
        let spent = self.category_spent(category.id);
        let target = category.target_or_zero();
        let evaluated = progress::evaluate(spent, target);

        CategoryProgress {
            category_id: category.id,
            name: category.name.clone(),
            category_type: category.category_type,
            spent,
            target,
            progress: evaluated.map(|(pct, _)| pct),
            status: evaluated.map(|(_, status)| status),
        }
    }

    /// Progress for every category, in snapshot order
    pub fn category_progress(&self) -> Vec<CategoryProgress> {
        self.snapshot
            .categories
            .iter()
            .map(|c| self.progress_for(c))
            .collect()
    }

    /// Categories over their target
    pub fn overspent(&self) -> Vec<CategoryProgress> {
        self.category_progress()
            .into_iter()
            .filter(|p| p.status == Some(ProgressStatus::Danger))
            .collect()
    }

    /// Categories with any spending, largest first
    pub fn spending_breakdown(&self) -> Vec<CategorySpending> {
        let total_expense = self.total_expense();
        let mut rows: Vec<CategorySpending> = self
            .snapshot
            .categories
            .iter()
            .map(|c| (c, self.category_spent(c.id)))
            .filter(|(_, spent)| spent.is_positive())
            .map(|(c, spent)| CategorySpending {
                category_id: c.id,
                name: c.name.clone(),
                color: c.color.clone(),
                spent,
                share: spent.ratio_percent(total_expense).unwrap_or(0),
            })
            .collect();

        // stable sort keeps snapshot order among equal amounts
        rows.sort_by(|a, b| b.spent.cmp(&a.spent));
        rows
    }

    /// Category with the most spending, if anything was spent
    pub fn top_spending_category(&self) -> Option<CategorySpending> {
        self.spending_breakdown().into_iter().next()
    }

    /// Income, expense and surplus per month, oldest first
    pub fn monthly_stats(&self) -> Vec<MonthlyStats> {
        let mut months: BTreeMap<String, (Money, Money)> = BTreeMap::new();
        for txn in &self.snapshot.transactions {
            let entry = months.entry(txn.month_key()).or_default();
            if txn.is_income() {
                entry.0 += txn.amount;
            } else {
                entry.1 += txn.amount;
            }
        }

        months
            .into_iter()
            .map(|(month, (income, expense))| MonthlyStats {
                month,
                income,
                expense,
                surplus: income - expense,
            })
            .collect()
    }
}
