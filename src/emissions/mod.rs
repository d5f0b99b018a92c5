//! The emission model: a pure mapping from usage values, region, and unit
//! system to a per-category footprint, a total, and a tree-offset
//! suggestion. No state, no I/O.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::models::{Category, FootprintResult, UsageReading};

/// Kilograms per pound. Folded into the food factor under imperial units
/// rather than applied to the input.
pub const KG_PER_LB: f64 = 2.20462;

/// One tree absorbs roughly this much CO2 per month.
pub const KG_CO2_PER_TREE_MONTH: f64 = 25.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Reference monthly footprint used to scale the progress bar, per unit
/// system. The total is clamped to 1.0 of this.
const PROGRESS_BUDGET_METRIC_KG: f64 = 5000.0;
const PROGRESS_BUDGET_IMPERIAL_LBS: f64 = 11000.0;

/// Geographic regions with known emission factor rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    #[default]
    Us,
    Eu,
    In,
}

impl Region {
    pub const ALL: [Region; 3] = [Region::Us, Region::Eu, Region::In];

    pub fn code(self) -> &'static str {
        match self {
            Region::Us => "US",
            Region::Eu => "EU",
            Region::In => "IN",
        }
    }

    /// Selections in the UI are constrained to known codes, so this only
    /// fails for codes arriving from files or the environment.
    pub fn from_code(code: &str) -> Result<Self> {
        Region::ALL
            .into_iter()
            .find(|region| region.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| AppError::UnknownRegion(code.to_string()))
    }

    pub fn factors(self) -> &'static CategoryFactors {
        match self {
            Region::Us => &US_FACTORS,
            Region::Eu => &EU_FACTORS,
            Region::In => &IN_FACTORS,
        }
    }
}

/// Metric vs. imperial display and input convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn code(self) -> &'static str {
        match self {
            UnitSystem::Metric => "metric",
            UnitSystem::Imperial => "imperial",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            c if c.eq_ignore_ascii_case("metric") => Ok(UnitSystem::Metric),
            c if c.eq_ignore_ascii_case("imperial") => Ok(UnitSystem::Imperial),
            _ => Err(AppError::InvalidInput(format!(
                "Unknown unit system: {}",
                code
            ))),
        }
    }

    /// Mass unit shown next to emission values.
    pub fn mass_label(self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    fn food_factor_multiplier(self) -> f64 {
        match self {
            UnitSystem::Metric => 1.0,
            UnitSystem::Imperial => KG_PER_LB,
        }
    }

    fn progress_budget(self) -> f64 {
        match self {
            UnitSystem::Metric => PROGRESS_BUDGET_METRIC_KG,
            UnitSystem::Imperial => PROGRESS_BUDGET_IMPERIAL_LBS,
        }
    }
}

/// Per-category emission factors for one region.
///
/// Units: kg CO2 per kWh (electricity), per therm (gas), per liter (water),
/// per km (driving), per flight, per kg of meat (food).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryFactors {
    pub electricity: f64,
    pub gas: f64,
    pub water: f64,
    pub kilometers: f64,
    pub flights: f64,
    pub food: f64,
}

impl CategoryFactors {
    pub fn factor(&self, category: Category) -> f64 {
        match category {
            Category::Electricity => self.electricity,
            Category::Gas => self.gas,
            Category::Water => self.water,
            Category::Kilometers => self.kilometers,
            Category::Flights => self.flights,
            Category::Food => self.food,
        }
    }
}

pub const US_FACTORS: CategoryFactors = CategoryFactors {
    electricity: 0.92,
    gas: 5.3,
    water: 0.00007,
    kilometers: 0.245,
    flights: 900.0,
    food: 2.5,
};

pub const EU_FACTORS: CategoryFactors = CategoryFactors {
    electricity: 0.60,
    gas: 4.8,
    water: 0.00005,
    kilometers: 0.200,
    flights: 850.0,
    food: 2.0,
};

pub const IN_FACTORS: CategoryFactors = CategoryFactors {
    electricity: 1.20,
    gas: 5.5,
    water: 0.00008,
    kilometers: 0.280,
    flights: 950.0,
    food: 2.8,
};

/// Computes the footprint for one reading.
///
/// Deterministic and side-effect free; safe to call from anywhere. Negative
/// values never reach this function (the caller rejects them at parse time).
///
/// Under imperial units only the food factor is converted (kg -> lb); the
/// other categories keep their metric magnitudes and the shell merely
/// relabels their unit suffixes. That asymmetry matches the shipped
/// calculator and is preserved deliberately rather than fixed.
pub fn compute_footprint(
    reading: &UsageReading,
    region: Region,
    unit_system: UnitSystem,
) -> FootprintResult {
    let factors = region.factors();
    let per_category: Vec<(Category, f64)> = Category::ALL
        .iter()
        .map(|&category| {
            let mut factor = factors.factor(category);
            if category == Category::Food {
                factor *= unit_system.food_factor_multiplier();
            }
            (category, reading.value(category) * factor)
        })
        .collect();

    let total: f64 = per_category.iter().map(|(_, value)| value).sum();
    let offset_trees = total * MONTHS_PER_YEAR / KG_CO2_PER_TREE_MONTH;

    FootprintResult {
        per_category,
        total,
        offset_trees,
    }
}

/// Fraction of the reference monthly budget the total represents, clamped
/// to 1.0. Drives the progress bar.
pub fn progress_fraction(total: f64, unit_system: UnitSystem) -> f64 {
    (total / unit_system.progress_budget()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FormInput;

    const TOLERANCE: f64 = 1e-9;

    fn sample_reading() -> UsageReading {
        UsageReading::from_values([900.0, 50.0, 9000.0, 1600.0, 2.0, 7.0])
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_us_metric_scenario() {
        let result = compute_footprint(&sample_reading(), Region::Us, UnitSystem::Metric);
        let expected = [828.0, 265.0, 0.63, 392.0, 1800.0, 17.5];
        for ((_, value), want) in result.per_category.iter().zip(expected) {
            assert_close(*value, want);
        }
        assert_close(result.total, 3303.13);
        assert!((result.offset_trees - 1585.5024).abs() < 1e-6);
    }

    #[test]
    fn test_eu_metric_scenario() {
        let result = compute_footprint(&sample_reading(), Region::Eu, UnitSystem::Metric);
        let expected = [540.0, 240.0, 0.45, 320.0, 1700.0, 14.0];
        for ((_, value), want) in result.per_category.iter().zip(expected) {
            assert_close(*value, want);
        }
        assert_close(result.total, 2814.45);
    }

    #[test]
    fn test_total_is_sum_of_categories() {
        for region in Region::ALL {
            for unit_system in [UnitSystem::Metric, UnitSystem::Imperial] {
                let result = compute_footprint(&sample_reading(), region, unit_system);
                let sum: f64 = result.per_category.iter().map(|(_, v)| v).sum();
                assert_close(result.total, sum);
                assert_close(
                    result.offset_trees,
                    result.total * MONTHS_PER_YEAR / KG_CO2_PER_TREE_MONTH,
                );
            }
        }
    }

    #[test]
    fn test_deterministic() {
        let a = compute_footprint(&sample_reading(), Region::In, UnitSystem::Imperial);
        let b = compute_footprint(&sample_reading(), Region::In, UnitSystem::Imperial);
        assert_eq!(a, b);
    }

    #[test]
    fn test_imperial_converts_only_food() {
        let metric = compute_footprint(&sample_reading(), Region::Us, UnitSystem::Metric);
        let imperial = compute_footprint(&sample_reading(), Region::Us, UnitSystem::Imperial);
        for ((category, metric_value), (_, imperial_value)) in
            metric.per_category.iter().zip(&imperial.per_category)
        {
            if *category == Category::Food {
                assert_close(*imperial_value, metric_value * KG_PER_LB);
            } else {
                assert_close(*imperial_value, *metric_value);
            }
        }
    }

    #[test]
    fn test_unit_switch_round_trip_restores_total() {
        let before = compute_footprint(&sample_reading(), Region::Eu, UnitSystem::Metric);
        let _ = compute_footprint(&sample_reading(), Region::Eu, UnitSystem::Imperial);
        let after = compute_footprint(&sample_reading(), Region::Eu, UnitSystem::Metric);
        assert_eq!(before, after);
    }

    #[test]
    fn test_all_zero_reading() {
        let reading = UsageReading::parse(&FormInput::default()).unwrap();
        for region in Region::ALL {
            let result = compute_footprint(&reading, region, UnitSystem::Metric);
            assert_eq!(result.total, 0.0);
            assert_eq!(result.offset_trees, 0.0);
            assert_eq!(progress_fraction(result.total, UnitSystem::Metric), 0.0);
            assert!(result.per_category.iter().all(|(_, v)| *v == 0.0));
        }
    }

    #[test]
    fn test_progress_fraction_clamps_at_one() {
        assert_close(progress_fraction(2500.0, UnitSystem::Metric), 0.5);
        assert_close(progress_fraction(5500.0, UnitSystem::Imperial), 0.5);
        assert_eq!(progress_fraction(6000.0, UnitSystem::Metric), 1.0);
        assert_eq!(progress_fraction(12000.0, UnitSystem::Imperial), 1.0);
    }

    #[test]
    fn test_region_codes() {
        assert_eq!(Region::from_code("US").unwrap(), Region::Us);
        assert_eq!(Region::from_code("eu").unwrap(), Region::Eu);
        assert!(matches!(
            Region::from_code("MX").unwrap_err(),
            AppError::UnknownRegion(_)
        ));
    }

    #[test]
    fn test_unit_system_codes() {
        assert_eq!(UnitSystem::from_code("metric").unwrap(), UnitSystem::Metric);
        assert_eq!(
            UnitSystem::from_code("IMPERIAL").unwrap(),
            UnitSystem::Imperial
        );
        assert!(UnitSystem::from_code("nautical").is_err());
    }
}
