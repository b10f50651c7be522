//! Budget plan model
//!
//! A `BudgetPlan` is derived fresh from a monthly income on every calculation
//! and never persisted.

use serde::{Deserialize, Serialize};

use super::allocation::Classification;
use super::category::Category;
use super::money::Money;

/// Recommended amount for one allocation category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecommendation {
    pub category_name: String,
    pub classification: Classification,
    pub percentage: u32,
    pub amount: Money,
}

/// Full plan for a monthly income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPlan {
    pub monthly_income: Money,
    pub fixed_total: Money,
    pub variable_total: Money,
    pub savings_target: Money,
    /// In allocation table order
    pub recommendations: Vec<BudgetRecommendation>,
}

impl BudgetPlan {
    /// Sum of the three classification totals
    pub fn allocated_total(&self) -> Money {
        self.fixed_total + self.variable_total + self.savings_target
    }

    /// Total for a classification
    pub fn total_for(&self, classification: Classification) -> Money {
        match classification {
            Classification::Fixed => self.fixed_total,
            Classification::Variable => self.variable_total,
            Classification::Savings => self.savings_target,
        }
    }

    /// Income left over (or overshoot, if negative) after every allocation
    pub fn unallocated(&self) -> Money {
        self.monthly_income - self.allocated_total()
    }

    pub fn recommendation(&self, category_name: &str) -> Option<&BudgetRecommendation> {
        self.recommendations
            .iter()
            .find(|r| r.category_name == category_name)
    }

    /// Spending targets to propose for categories, savings excluded
    pub fn category_targets(&self) -> Vec<(&str, Money)> {
        self.recommendations
            .iter()
            .filter(|r| r.classification != Classification::Savings)
            .map(|r| (r.category_name.as_str(), r.amount))
            .collect()
    }

    /// Set the target on every category that has a spending recommendation
    ///
    /// Both `target_amount` and `target_percentage` are taken from the
    /// recommendation. Returns the number of categories updated.
    pub fn apply_to_categories(&self, categories: &mut [Category]) -> usize {
        let mut updated = 0;
        for category in categories.iter_mut() {
            let recommendation = self.recommendations.iter().find(|r| {
                r.classification != Classification::Savings && r.category_name == category.name
            });
            if let Some(r) = recommendation {
                category.set_target(r.amount, Some(r.percentage));
                updated += 1;
            }
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CategoryType;

    fn sample_plan() -> BudgetPlan {
        BudgetPlan {
            monthly_income: Money::from_units(1000),
            fixed_total: Money::from_units(500),
            variable_total: Money::from_units(300),
            savings_target: Money::from_units(200),
            recommendations: vec![
                BudgetRecommendation {
                    category_name: "Rent".into(),
                    classification: Classification::Fixed,
                    percentage: 50,
                    amount: Money::from_units(500),
                },
                BudgetRecommendation {
                    category_name: "Food".into(),
                    classification: Classification::Variable,
                    percentage: 30,
                    amount: Money::from_units(300),
                },
                BudgetRecommendation {
                    category_name: "Savings".into(),
                    classification: Classification::Savings,
                    percentage: 20,
                    amount: Money::from_units(200),
                },
            ],
        }
    }

    #[test]
    fn test_totals() {
        let plan = sample_plan();
        assert_eq!(plan.allocated_total().units(), 1000);
        assert_eq!(plan.unallocated().units(), 0);
        assert_eq!(plan.total_for(Classification::Variable).units(), 300);
    }

    #[test]
    fn test_category_targets_skip_savings() {
        let plan = sample_plan();
        let targets = plan.category_targets();
        assert_eq!(
            targets,
            vec![("Rent", Money::from_units(500)), ("Food", Money::from_units(300))]
        );
    }

    #[test]
    fn test_apply_to_categories() {
        let plan = sample_plan();
        let mut categories = vec![
            Category::new("Rent", CategoryType::Fixed),
            Category::new("Pets", CategoryType::Variable),
            Category::new("Savings", CategoryType::Variable),
        ];

        let updated = plan.apply_to_categories(&mut categories);

        assert_eq!(updated, 1);
        assert_eq!(categories[0].target_amount, Some(Money::from_units(500)));
        assert_eq!(categories[0].target_percentage, Some(50));
        assert_eq!(categories[1].target_amount, None);
        assert_eq!(categories[2].target_amount, None);
    }
}
