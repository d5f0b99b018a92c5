use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, Result};

/// The six usage categories, in the fixed order used for computation,
/// rendering, and export alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electricity,
    Gas,
    Water,
    Kilometers,
    Flights,
    Food,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electricity,
        Category::Gas,
        Category::Water,
        Category::Kilometers,
        Category::Flights,
        Category::Food,
    ];

    /// Snake-case key used in the persisted snapshot.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Electricity => "electricity",
            Category::Gas => "gas",
            Category::Water => "water",
            Category::Kilometers => "kilometers",
            Category::Flights => "flights",
            Category::Food => "food",
        }
    }

    /// English name used in CSV/PDF exports. The kilometers category has
    /// always been shown as "Driving" in report output.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electricity => "Electricity",
            Category::Gas => "Gas",
            Category::Water => "Water",
            Category::Kilometers => "Driving",
            Category::Flights => "Flights",
            Category::Food => "Food",
        }
    }
}

/// The six raw text fields exactly as the UI shell last delivered them.
/// Save, reset, and history restore all operate on this, not on parsed
/// numbers, so the snapshot file round-trips what the user actually typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub electricity: String,
    pub gas: String,
    pub water: String,
    pub kilometers: String,
    pub flights: String,
    pub food: String,
}

impl FormInput {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Electricity => &self.electricity,
            Category::Gas => &self.gas,
            Category::Water => &self.water,
            Category::Kilometers => &self.kilometers,
            Category::Flights => &self.flights,
            Category::Food => &self.food,
        }
    }

    pub fn set(&mut self, category: Category, text: String) {
        match category {
            Category::Electricity => self.electricity = text,
            Category::Gas => self.gas = text,
            Category::Water => self.water = text,
            Category::Kilometers => self.kilometers = text,
            Category::Flights => self.flights = text,
            Category::Food => self.food = text,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn from_values(values: [f64; 6]) -> Self {
        let mut form = Self::default();
        for (category, value) in Category::ALL.iter().zip(values) {
            form.set(*category, value.to_string());
        }
        form
    }
}

/// One set of parsed usage values. Created fresh on every calculation and
/// never mutated in place.
///
/// Invariant: all fields are finite and >= 0. [`UsageReading::parse`] is the
/// only way values enter from user text and it enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageReading {
    pub electricity: f64,
    pub gas: f64,
    pub water: f64,
    pub kilometers: f64,
    pub flights: f64,
    pub food: f64,
}

impl UsageReading {
    /// Parses the raw form text. Blank fields count as 0; anything
    /// non-numeric or negative rejects the whole reading.
    pub fn parse(form: &FormInput) -> Result<Self> {
        let mut values = [0.0f64; 6];
        for (slot, category) in values.iter_mut().zip(Category::ALL) {
            let text = form.get(category).trim();
            if text.is_empty() {
                continue;
            }
            let value: f64 = text
                .parse()
                .map_err(|_| AppError::InvalidInput("Please enter valid numbers".to_string()))?;
            if !value.is_finite() {
                return Err(AppError::InvalidInput(
                    "Please enter valid numbers".to_string(),
                ));
            }
            if value < 0.0 {
                return Err(AppError::InvalidInput(
                    "Please enter non-negative values".to_string(),
                ));
            }
            *slot = value;
        }
        Ok(Self::from_values(values))
    }

    pub fn from_values(values: [f64; 6]) -> Self {
        Self {
            electricity: values[0],
            gas: values[1],
            water: values[2],
            kilometers: values[3],
            flights: values[4],
            food: values[5],
        }
    }

    pub fn value(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity,
            Category::Gas => self.gas,
            Category::Water => self.water,
            Category::Kilometers => self.kilometers,
            Category::Flights => self.flights,
            Category::Food => self.food,
        }
    }

    /// Values in the fixed category order.
    pub fn values(&self) -> [f64; 6] {
        [
            self.electricity,
            self.gas,
            self.water,
            self.kilometers,
            self.flights,
            self.food,
        ]
    }
}

/// Output of one emission computation. `per_category` preserves the fixed
/// category order; `total` is the exact floating-point sum of the six
/// products with no rounding before display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FootprintResult {
    pub per_category: Vec<(Category, f64)>,
    pub total: f64,
    pub offset_trees: f64,
}

/// One completed calculation. Appended per session, insertion order, never
/// deleted, never persisted across restarts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub total: f64,
    pub raw_values: [f64; 6],
}

impl HistoryEntry {
    pub fn new(total: f64, raw_values: [f64; 6]) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            total,
            raw_values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(values: [&str; 6]) -> FormInput {
        let mut form = FormInput::default();
        for (category, text) in Category::ALL.iter().zip(values) {
            form.set(*category, text.to_string());
        }
        form
    }

    #[test]
    fn test_category_order_is_fixed() {
        let keys: Vec<&str> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(
            keys,
            vec!["electricity", "gas", "water", "kilometers", "flights", "food"]
        );
    }

    #[test]
    fn test_blank_fields_parse_as_zero() {
        let reading = UsageReading::parse(&FormInput::default()).unwrap();
        assert_eq!(reading.values(), [0.0; 6]);

        let reading = UsageReading::parse(&form_with(["900", "", "  ", "1600", "", "7"])).unwrap();
        assert_eq!(reading.values(), [900.0, 0.0, 0.0, 1600.0, 0.0, 7.0]);
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let err = UsageReading::parse(&form_with(["900", "fifty", "", "", "", ""])).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_negative_field_is_rejected() {
        let err = UsageReading::parse(&form_with(["900", "-50", "", "", "", ""])).unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn test_non_finite_field_is_rejected() {
        for text in ["inf", "NaN", "1e999"] {
            let err = UsageReading::parse(&form_with([text, "", "", "", "", ""])).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{}", text);
        }
    }

    #[test]
    fn test_form_round_trips_history_values() {
        let form = FormInput::from_values([900.0, 50.0, 9000.0, 1600.0, 2.0, 7.0]);
        let reading = UsageReading::parse(&form).unwrap();
        assert_eq!(reading.values(), [900.0, 50.0, 9000.0, 1600.0, 2.0, 7.0]);
    }
}
