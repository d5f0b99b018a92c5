//! Display string dictionaries for the five supported languages, as
//! fixed-shape records. Every label exists for every language by
//! construction, so a missing translation is a compile-time error rather
//! than a runtime lookup failure.

use serde::{Deserialize, Serialize};

use crate::emissions::UnitSystem;
use crate::error::{AppError, Result};
use crate::models::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Es,
    Te,
    Ta,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::En,
        Language::Hi,
        Language::Es,
        Language::Te,
        Language::Ta,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Es => "es",
            Language::Te => "te",
            Language::Ta => "ta",
        }
    }

    pub fn from_code(code: &str) -> Result<Self> {
        Language::ALL
            .into_iter()
            .find(|language| language.code().eq_ignore_ascii_case(code))
            .ok_or_else(|| AppError::UnknownLanguage(code.to_string()))
    }

    pub fn strings(self) -> &'static LocaleStrings {
        match self {
            Language::En => &EN,
            Language::Hi => &HI,
            Language::Es => &ES,
            Language::Te => &TE,
            Language::Ta => &TA,
        }
    }
}

/// Every UI label the shell needs, for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleStrings {
    pub title: &'static str,
    pub electricity: &'static str,
    pub gas: &'static str,
    pub water: &'static str,
    pub kilometers: &'static str,
    pub flights: &'static str,
    pub food: &'static str,
    pub calculate: &'static str,
    pub reset: &'static str,
    pub save: &'static str,
    pub load: &'static str,
    pub export_csv: &'static str,
    pub export_pdf: &'static str,
    pub total: &'static str,
    pub about: &'static str,
    pub theme: &'static str,
    pub language: &'static str,
    pub region: &'static str,
    pub offset: &'static str,
}

impl LocaleStrings {
    pub fn category_label(&self, category: Category) -> &'static str {
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

/// Unit suffix shown next to an input field. Imperial relabels water,
/// driving, and food only; the magnitudes behind water and driving are not
/// converted (see `emissions::compute_footprint`).
pub fn unit_suffix(category: Category, unit_system: UnitSystem) -> &'static str {
    match (category, unit_system) {
        (Category::Electricity, _) => "kWh",
        (Category::Gas, _) => "therms",
        (Category::Water, UnitSystem::Metric) => "liters",
        (Category::Water, UnitSystem::Imperial) => "gallons",
        (Category::Kilometers, UnitSystem::Metric) => "km",
        (Category::Kilometers, UnitSystem::Imperial) => "miles",
        (Category::Flights, _) => "flights",
        (Category::Food, UnitSystem::Metric) => "kg",
        (Category::Food, UnitSystem::Imperial) => "lbs",
    }
}

static EN: LocaleStrings = LocaleStrings {
    title: "Carbon Footprint Calculator",
    electricity: "Monthly Electricity Usage",
    gas: "Monthly Natural Gas Usage",
    water: "Monthly Water Usage",
    kilometers: "Monthly Kilometers Driven",
    flights: "Number of Flights per Year",
    food: "Monthly Meat Consumption",
    calculate: "Calculate",
    reset: "Reset",
    save: "Save",
    load: "Load",
    export_csv: "Export CSV",
    export_pdf: "Export PDF",
    total: "Total Carbon Footprint",
    about: "About",
    theme: "Switch Theme",
    language: "Language",
    region: "Region",
    offset: "Carbon Offset Suggestion",
};

static HI: LocaleStrings = LocaleStrings {
    title: "कार्बन फुटप्रिंट कैलकुलेटर",
    electricity: "मासिक बिजली उपयोग",
    gas: "मासिक प्राकृतिक गैस उपयोग",
    water: "मासिक पानी उपयोग",
    kilometers: "मासिक किलोमीटर ड्राइव",
    flights: "प्रति वर्ष उड़ानों की संख्या",
    food: "मासिक मांस खपत",
    calculate: "गणना करें",
    reset: "रीसेट करें",
    save: "सहेजें",
    load: "लोड करें",
    export_csv: "CSV निर्यात करें",
    export_pdf: "PDF निर्यात करें",
    total: "कुल कार्बन फुटप्रिंट",
    about: "के बारे में",
    theme: "थीम बदलें",
    language: "भाषा",
    region: "क्षेत्र",
    offset: "कार्बन ऑफसेट सुझाव",
};

static ES: LocaleStrings = LocaleStrings {
    title: "Calculadora de Huella de Carbono",
    electricity: "Uso Mensual de Electricidad",
    gas: "Uso Mensual de Gas Natural",
    water: "Uso Mensual de Agua",
    kilometers: "Kilómetros Conducidos al Mes",
    flights: "Número de Vuelos por Año",
    food: "Consumo Mensual de Carne",
    calculate: "Calcular",
    reset: "Reiniciar",
    save: "Guardar",
    load: "Cargar",
    export_csv: "Exportar CSV",
    export_pdf: "Exportar PDF",
    total: "Huella de Carbono Total",
    about: "Acerca de",
    theme: "Cambiar Tema",
    language: "Idioma",
    region: "Región",
    offset: "Sugerencia de Compensación de Carbono",
};

static TE: LocaleStrings = LocaleStrings {
    title: "కార్బన్ ఫుట్‌ప్రింట్ కాలిక్యులేటర్",
    electricity: "నెలవారీ విద్యుత్ వినియోగం",
    gas: "నెలవారీ సహజ వాయు వినియోగం",
    water: "నెలవారీ నీటి వినియోగం",
    kilometers: "నెలవారీ కిలోమీటర్లు డ్రైవ్ చేయబడ్డాయి",
    flights: "సంవత్సరానికి విమానాల సంఖ్య",
    food: "నెలవారీ మాంసం వినియోగం",
    calculate: "లెక్కించు",
    reset: "రీసెట్",
    save: "సేవ్",
    load: "లోడ్",
    export_csv: "CSV ఎగుమతి",
    export_pdf: "PDF ఎగుమతి",
    total: "మొత్తం కార్బన్ ఫుట్‌ప్రింట్",
    about: "గురించి",
    theme: "థీమ్ మార్చు",
    language: "భాష",
    region: "ప్రాంతం",
    offset: "కార్బన్ ఆఫ్‌సెట్ సూచన",
};

static TA: LocaleStrings = LocaleStrings {
    title: "கார்பன் பாதச்சுவடு கால்குலேட்டர்",
    electricity: "மாதாந்திர மின்சார பயன்பாடு",
    gas: "மாதாந்திர இயற்கை எரிவாயு பயன்பாடு",
    water: "மாதாந்திர நீர் பயன்பாடு",
    kilometers: "மாதாந்திர கிலோமீட்டர் ஓட்டப்பட்டது",
    flights: "ஆண்டுக்கு விமானங்களின் எண்ணிக்கை",
    food: "மாதாந்திர இறைச்சி உட்கொள்ளல்",
    calculate: "கணக்கிடு",
    reset: "மீட்டமை",
    save: "சேமி",
    load: "ஏற்று",
    export_csv: "CSV ஏற்றுமதி",
    export_pdf: "PDF ஏற்றுமதி",
    total: "மொத்த கார்பன் பாதச்சுவடு",
    about: "பற்றி",
    theme: "தீம் மாற்று",
    language: "மொழி",
    region: "பிராந்தியம்",
    offset: "கார்பன் ஆஃப்செட் பரிந்துரை",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
        assert!(matches!(
            Language::from_code("fr").unwrap_err(),
            AppError::UnknownLanguage(_)
        ));
    }

    #[test]
    fn test_dictionaries_are_distinct() {
        let titles: Vec<&str> = Language::ALL.iter().map(|l| l.strings().title).collect();
        for (i, title) in titles.iter().enumerate() {
            assert!(!title.is_empty());
            assert!(titles[i + 1..].iter().all(|other| other != title));
        }
    }

    #[test]
    fn test_category_labels_resolve() {
        for language in Language::ALL {
            let strings = language.strings();
            for category in Category::ALL {
                assert!(!strings.category_label(category).is_empty());
            }
        }
    }

    #[test]
    fn test_imperial_relabels_water_driving_food() {
        assert_eq!(unit_suffix(Category::Water, UnitSystem::Metric), "liters");
        assert_eq!(unit_suffix(Category::Water, UnitSystem::Imperial), "gallons");
        assert_eq!(unit_suffix(Category::Kilometers, UnitSystem::Imperial), "miles");
        assert_eq!(unit_suffix(Category::Food, UnitSystem::Imperial), "lbs");
        assert_eq!(unit_suffix(Category::Electricity, UnitSystem::Imperial), "kWh");
        assert_eq!(unit_suffix(Category::Gas, UnitSystem::Imperial), "therms");
    }
}
