use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::emissions::{Region, UnitSystem};
use crate::models::{Category, FormInput};

/// The single persisted snapshot (`footprint_data.json`). Form values are
/// stored as the raw field text the user typed; older files that stored
/// plain numbers still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "string_or_number")]
    pub electricity: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub gas: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub water: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub kilometers: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub flights: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub food: String,
    #[serde(default)]
    pub unit_system: UnitSystem,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub region: Region,
}

impl Snapshot {
    pub fn from_form(
        form: &FormInput,
        region: Region,
        unit_system: UnitSystem,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            electricity: form.electricity.clone(),
            gas: form.gas.clone(),
            water: form.water.clone(),
            kilometers: form.kilometers.clone(),
            flights: form.flights.clone(),
            food: form.food.clone(),
            unit_system,
            timestamp: Some(timestamp),
            region,
        }
    }

    pub fn form(&self) -> FormInput {
        let mut form = FormInput::default();
        for category in Category::ALL {
            form.set(category, self.field(category).to_string());
        }
        form
    }

    fn field(&self, category: Category) -> &str {
        match category {
            Category::Electricity => &self.electricity,
            Category::Gas => &self.gas,
            Category::Water => &self.water,
            Category::Kilometers => &self.kilometers,
            Category::Flights => &self.flights,
            Category::Food => &self.food,
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Number(f64),
    }

    Ok(match Field::deserialize(deserializer)? {
        Field::Text(text) => text,
        Field::Number(number) => number.to_string(),
    })
}
