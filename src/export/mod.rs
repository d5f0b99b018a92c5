use chrono::{DateTime, Utc};

mod csv;
mod pdf;

pub use self::csv::export_csv;
pub use self::pdf::export_pdf;

/// Timestamped export file name, e.g. `carbon_footprint_20250601_103000.csv`.
pub fn export_file_name(extension: &str, now: DateTime<Utc>) -> String {
    format!("carbon_footprint_{}.{}", now.format("%Y%m%d_%H%M%S"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_export_file_name_format() {
        let now = Utc.with_ymd_and_hms(2025, 6, 1, 10, 30, 0).unwrap();
        assert_eq!(
            export_file_name("csv", now),
            "carbon_footprint_20250601_103000.csv"
        );
        assert_eq!(
            export_file_name("pdf", now),
            "carbon_footprint_20250601_103000.pdf"
        );
    }
}
