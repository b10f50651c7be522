//! Budget planning service
//!
//! Turns a monthly income into a [`BudgetPlan`] by applying an allocation
//! table. Every function here is pure and cannot fail.

use tracing::debug;

use crate::models::{AllocationTable, BudgetPlan, BudgetRecommendation, Classification, Money};

/// Plan calculator bound to an allocation table
#[derive(Debug, Clone, Copy)]
pub struct BudgetPlanner<'a> {
    table: &'a AllocationTable,
}

impl<'a> BudgetPlanner<'a> {
    pub fn new(table: &'a AllocationTable) -> Self {
        Self { table }
    }

    /// Planner over the built-in 50/30/20 table
    pub fn with_default_table() -> BudgetPlanner<'static> {
        BudgetPlanner::new(AllocationTable::default_table())
    }

    pub fn table(&self) -> &'a AllocationTable {
        self.table
    }

    /// Calculate the full plan for `monthly_income`
    ///
    /// Each amount is `round(income * percentage / 100)`, rounding half away
    /// from zero. Negative income is not rejected; it yields negative amounts.
    pub fn calculate_plan(&self, monthly_income: Money) -> BudgetPlan {
        let mut fixed_total = Money::zero();
        let mut variable_total = Money::zero();
        let mut savings_target = Money::zero();

        let recommendations: Vec<BudgetRecommendation> = self
            .table
            .iter()
            .map(|entry| {
                let amount = monthly_income.percent_of(entry.percentage);
                match entry.classification {
                    Classification::Fixed => fixed_total += amount,
                    Classification::Variable => variable_total += amount,
                    Classification::Savings => savings_target += amount,
                }
                BudgetRecommendation {
                    category_name: entry.category_name.clone(),
                    classification: entry.classification,
                    percentage: entry.percentage,
                    amount,
                }
            })
            .collect();

        debug!(
            income = monthly_income.units(),
            fixed = fixed_total.units(),
            variable = variable_total.units(),
            savings = savings_target.units(),
            "calculated budget plan"
        );

        BudgetPlan {
            monthly_income,
            fixed_total,
            variable_total,
            savings_target,
            recommendations,
        }
    }

    /// Recommended amount for a single category
    ///
    /// `None` means the table has no allocation for that name.
    pub fn recommended_budget(&self, category_name: &str, monthly_income: Money) -> Option<Money> {
        self.table
            .lookup(category_name)
            .map(|entry| monthly_income.percent_of(entry.percentage))
    }
}

/// Calculate a plan with the built-in allocation table
pub fn calculate_plan(monthly_income: Money) -> BudgetPlan {
    BudgetPlanner::with_default_table().calculate_plan(monthly_income)
}

/// Recommended amount for one category of the built-in table
pub fn recommended_budget(category_name: &str, monthly_income: Money) -> Option<Money> {
    BudgetPlanner::with_default_table().recommended_budget(category_name, monthly_income)
}
