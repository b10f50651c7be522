//! Category model
//!
//! Categories come from the hosted backend. Each one is either a fixed or a
//! variable cost and may carry a monthly target amount.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::allocation::Classification;
use super::ids::CategoryId;
use super::money::Money;

/// Fixed or variable cost category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Fixed,
    #[default]
    Variable,
}

impl From<CategoryType> for Classification {
    fn from(kind: CategoryType) -> Self {
        match kind {
            CategoryType::Fixed => Classification::Fixed,
            CategoryType::Variable => Classification::Variable,
        }
    }
}

impl fmt::Display for CategoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed => write!(f, "fixed"),
            Self::Variable => write!(f, "variable"),
        }
    }
}

/// A spending category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    pub name: String,

    #[serde(rename = "type", default)]
    pub category_type: CategoryType,

    /// Monthly spending target, if one has been set
    #[serde(default)]
    pub target_amount: Option<Money>,

    #[serde(default)]
    pub target_percentage: Option<u32>,

    /// Display color as `#rrggbb`
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#64748b".to_string()
}

impl Category {
    pub fn new(name: impl Into<String>, category_type: CategoryType) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            category_type,
            target_amount: None,
            target_percentage: None,
            color: default_color(),
        }
    }

    /// Set the monthly target, with the share of income it was derived from
    pub fn set_target(&mut self, amount: Money, percentage: Option<u32>) {
        self.target_amount = Some(amount);
        self.target_percentage = percentage;
    }

    /// Target amount, treating a missing target as zero
    pub fn target_or_zero(&self) -> Money {
        self.target_amount.unwrap_or_default()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.chars().count() > 50 {
            return Err(CategoryValidationError::NameTooLong(self.name.chars().count()));
        }

        if let Some(target) = self.target_amount {
            if target.is_negative() {
                return Err(CategoryValidationError::NegativeTarget(target));
            }
        }

        let hex = self.color.strip_prefix('#').unwrap_or("");
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        Ok(())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeTarget(Money),
    InvalidColor(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max 50)", len)
            }
            Self::NegativeTarget(amount) => {
                write!(f, "Category target cannot be negative: {}", amount)
            }
            Self::InvalidColor(color) => write!(f, "Invalid category color: {}", color),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = Category::new("食費", CategoryType::Variable);
        assert_eq!(category.name, "食費");
        assert_eq!(category.category_type, CategoryType::Variable);
        assert_eq!(category.target_or_zero(), Money::zero());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_targets() {
        let mut category = Category::new("家賃", CategoryType::Fixed);
        category.set_target(Money::from_units(90_000), Some(30));
        assert_eq!(category.target_amount, Some(Money::from_units(90_000)));
        assert_eq!(category.target_percentage, Some(30));
        assert_eq!(category.target_or_zero(), Money::from_units(90_000));

        category.set_target(Money::from_units(80_000), None);
        assert_eq!(category.target_percentage, None);
    }

    #[test]
    fn test_validation() {
        let mut category = Category::new("", CategoryType::Fixed);
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "保険".into();
        category.color = "red".into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));

        category.color = "#10b981".into();
        category.target_amount = Some(Money::from_units(-1));
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::NegativeTarget(_))
        ));
    }

    #[test]
    fn test_deserialize_backend_row() {
        let json = r##"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "通信費",
            "type": "fixed",
            "target_amount": 15000,
            "target_percentage": null,
            "color": "#3b82f6"
        }"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.category_type, CategoryType::Fixed);
        assert_eq!(category.target_amount, Some(Money::from_units(15_000)));
        assert_eq!(Classification::from(category.category_type), Classification::Fixed);
    }
}
