//! Cost breakdown model
//!
//! Every budget or spend figure is split over the same six fixed categories.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{VoyageError, VoyageResult};

/// One of the six fixed cost categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostCategory {
    Transport,
    Food,
    Accommodation,
    Entertainment,
    Shopping,
    Other,
}

impl CostCategory {
    /// All categories in display and export order
    pub const ALL: [CostCategory; 6] = [
        Self::Transport,
        Self::Food,
        Self::Accommodation,
        Self::Entertainment,
        Self::Shopping,
        Self::Other,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Food => "Food & Drinks",
            Self::Accommodation => "Accommodation",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Short name used in export headers
    pub fn column_name(&self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Food => "Food",
            Self::Accommodation => "Accommodation",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for CostCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which breakdown of a trip a total refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostVariant {
    /// Planned budget
    #[default]
    Forecast,
    /// Recorded real spend
    Actual,
}

impl fmt::Display for CostVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forecast => write!(f, "Forecast"),
            Self::Actual => write!(f, "Actual"),
        }
    }
}

/// Amounts for the six cost categories
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub transport: f64,
    pub food: f64,
    pub accommodation: f64,
    pub entertainment: f64,
    pub shopping: f64,
    pub other: f64,
}

impl CostBreakdown {
    /// A breakdown with every category at zero
    pub const fn zero() -> Self {
        Self {
            transport: 0.0,
            food: 0.0,
            accommodation: 0.0,
            entertainment: 0.0,
            shopping: 0.0,
            other: 0.0,
        }
    }

    /// Amount for one category
    pub fn get(&self, category: CostCategory) -> f64 {
        match category {
            CostCategory::Transport => self.transport,
            CostCategory::Food => self.food,
            CostCategory::Accommodation => self.accommodation,
            CostCategory::Entertainment => self.entertainment,
            CostCategory::Shopping => self.shopping,
            CostCategory::Other => self.other,
        }
    }

    /// Set the amount for one category
    pub fn set(&mut self, category: CostCategory, amount: f64) {
        let slot = match category {
            CostCategory::Transport => &mut self.transport,
            CostCategory::Food => &mut self.food,
            CostCategory::Accommodation => &mut self.accommodation,
            CostCategory::Entertainment => &mut self.entertainment,
            CostCategory::Shopping => &mut self.shopping,
            CostCategory::Other => &mut self.other,
        };
        *slot = amount;
    }

    /// Iterate categories with their amounts, in export order
    pub fn iter(&self) -> impl Iterator<Item = (CostCategory, f64)> + '_ {
        CostCategory::ALL.iter().map(move |&c| (c, self.get(c)))
    }

    /// Sum of all six categories
    pub fn total(&self) -> f64 {
        self.iter().map(|(_, amount)| amount).sum()
    }

    /// Whether every amount is a finite number
    pub fn is_finite(&self) -> bool {
        self.iter().all(|(_, amount)| amount.is_finite())
    }

    /// Reject negative or non-finite amounts
    pub fn validate(&self) -> VoyageResult<()> {
        for (category, amount) in self.iter() {
            if !amount.is_finite() {
                return Err(VoyageError::Validation(format!(
                    "{} amount must be a number",
                    category
                )));
            }
            if amount < 0.0 {
                return Err(VoyageError::Validation(format!(
                    "{} amount cannot be negative",
                    category
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let costs = CostBreakdown {
            transport: 100.0,
            food: 50.0,
            ..CostBreakdown::zero()
        };
        assert_eq!(costs.total(), 150.0);
        assert_eq!(CostBreakdown::zero().total(), 0.0);
    }

    #[test]
    fn test_get_and_set() {
        let mut costs = CostBreakdown::default();
        for (i, category) in CostCategory::ALL.iter().enumerate() {
            costs.set(*category, i as f64);
        }
        assert_eq!(costs.get(CostCategory::Transport), 0.0);
        assert_eq!(costs.get(CostCategory::Other), 5.0);
        assert_eq!(costs.shopping, 4.0);
        assert_eq!(costs.total(), 15.0);
    }

    #[test]
    fn test_validate() {
        assert!(CostBreakdown::zero().validate().is_ok());

        let mut costs = CostBreakdown::zero();
        costs.food = -1.0;
        let err = costs.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Food & Drinks"));

        costs.food = f64::NAN;
        assert!(costs.validate().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CostCategory::Food.label(), "Food & Drinks");
        assert_eq!(CostCategory::Food.column_name(), "Food");
        assert_eq!(CostCategory::ALL.len(), 6);
    }

    #[test]
    fn test_integer_amounts_deserialize() {
        let costs: CostBreakdown = serde_json::from_str(
            r#"{"transport":100,"food":50,"accommodation":0,"entertainment":0,"shopping":0,"other":0}"#,
        )
        .unwrap();
        assert_eq!(costs.total(), 150.0);
    }
}
