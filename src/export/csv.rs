use std::path::Path;

use crate::emissions::UnitSystem;
use crate::error::{AppError, Result};
use crate::models::FootprintResult;

/// Writes the two-column CSV report: a header, one row per category, and a
/// final `Total` row, values to two decimal places. A failed write removes
/// the partial file so it is never mistaken for a finished export.
pub fn export_csv(result: &FootprintResult, unit_system: UnitSystem, path: &Path) -> Result<()> {
    write_report(result, unit_system, path).map_err(|err| {
        let _ = std::fs::remove_file(path);
        err
    })
}

fn write_report(result: &FootprintResult, unit_system: UnitSystem, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("Failed to create CSV file: {}", e)))?;

    let header = format!("CO2 ({})", unit_system.mass_label());
    writer
        .write_record(["Category", header.as_str()])
        .map_err(|e| AppError::Export(format!("Failed to write CSV file: {}", e)))?;

    for (category, value) in &result.per_category {
        let formatted = format!("{:.2}", value);
        writer
            .write_record([category.display_name(), formatted.as_str()])
            .map_err(|e| AppError::Export(format!("Failed to write CSV file: {}", e)))?;
    }

    let total = format!("{:.2}", result.total);
    writer
        .write_record(["Total", total.as_str()])
        .map_err(|e| AppError::Export(format!("Failed to write CSV file: {}", e)))?;

    writer
        .flush()
        .map_err(|e| AppError::Export(format!("Failed to write CSV file: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::{compute_footprint, Region};
    use crate::models::UsageReading;

    #[test]
    fn test_csv_report_layout() {
        let reading = UsageReading::from_values([900.0, 50.0, 9000.0, 1600.0, 2.0, 7.0]);
        let result = compute_footprint(&reading, Region::Us, UnitSystem::Metric);

        let dir = std::env::temp_dir().join(format!("carbonfootprint_csv_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.csv");

        export_csv(&result, UnitSystem::Metric, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();

        assert_eq!(lines[0], "Category,CO2 (kg)");
        assert_eq!(lines[1], "Electricity,828.00");
        assert_eq!(lines[2], "Gas,265.00");
        assert_eq!(lines[3], "Water,0.63");
        assert_eq!(lines[4], "Driving,392.00");
        assert_eq!(lines[5], "Flights,1800.00");
        assert_eq!(lines[6], "Food,17.50");
        assert_eq!(lines[7], "Total,3303.13");
        assert_eq!(lines.len(), 8);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_csv_header_uses_pounds_under_imperial() {
        let reading = UsageReading::from_values([0.0; 6]);
        let result = compute_footprint(&reading, Region::Us, UnitSystem::Imperial);

        let dir = std::env::temp_dir().join(format!("carbonfootprint_csv_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("report.csv");

        export_csv(&result, UnitSystem::Imperial, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("Category,CO2 (lbs)"));

        std::fs::remove_dir_all(&dir).ok();
    }
}
