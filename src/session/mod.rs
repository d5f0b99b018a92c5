//! The session controller: owns every piece of mutable state in a running
//! session (current selections, form text, result, history) and drives the
//! emission model in response to UI events. Single-threaded and
//! event-driven; the hosting shell delivers one event at a time.

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::config::{AppConfig, ThemeMode, UserPreferences};
use crate::emissions::{compute_footprint, progress_fraction, Region, UnitSystem};
use crate::error::{AppError, Result};
use crate::export::{export_csv, export_file_name, export_pdf};
use crate::locale::Language;
use crate::models::{
    Category, FootprintResult, FormInput, HistoryEntry, Snapshot, UsageReading,
};
use crate::render::{ChartKind, RenderSink, ResultView};
use crate::storage::SnapshotStore;
use std::path::PathBuf;

/// `Idle` until the first successful calculation, back to `Idle` on reset.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Calculated(FootprintResult),
}

/// Every UI event the shell can deliver, mapped one-to-one onto controller
/// transitions. The shell wires its widgets to these instead of to
/// toolkit-specific callbacks.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    SetField(Category, String),
    Calculate,
    Reset,
    ChangeRegion(Region),
    ChangeUnitSystem(UnitSystem),
    ChangeLanguage(Language),
    ChangeChartKind(ChartKind),
    ChangeTheme(ThemeMode),
    Save,
    Load,
    LoadHistoryEntry(DateTime<Utc>),
    ExportCsv,
    ExportPdf,
}

pub struct SessionController {
    language: Language,
    region: Region,
    unit_system: UnitSystem,
    chart_kind: ChartKind,
    theme: ThemeMode,
    form: FormInput,
    state: SessionState,
    history: Vec<HistoryEntry>,
    store: SnapshotStore,
    export_dir: PathBuf,
    renderer: Option<Box<dyn RenderSink>>,
}

impl SessionController {
    pub fn new(config: &AppConfig, store: SnapshotStore) -> Self {
        Self {
            language: config.default_language,
            region: config.default_region,
            unit_system: config.default_unit_system,
            chart_kind: ChartKind::default(),
            theme: ThemeMode::default(),
            form: FormInput::default(),
            state: SessionState::default(),
            history: Vec::new(),
            store,
            export_dir: config.export_dir.clone(),
            renderer: None,
        }
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn RenderSink>) {
        self.renderer = Some(renderer);
    }

    pub fn apply_preferences(&mut self, preferences: &UserPreferences) {
        self.language = preferences.language;
        self.theme = preferences.theme;
    }

    pub fn preferences(&self) -> UserPreferences {
        UserPreferences {
            theme: self.theme,
            language: self.language,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Handles one event, catching every error at this boundary: failures
    /// are logged and surfaced as a transient notification, never fatal.
    pub fn dispatch(&mut self, event: UiEvent) {
        if let Err(err) = self.handle(event) {
            error!("ui action failed: {}", err);
            let message = err.to_string();
            self.notify(&message);
        }
    }

    /// The raw transition table. Prefer [`SessionController::dispatch`]
    /// from a shell; this variant hands errors back for callers that want
    /// them.
    pub fn handle(&mut self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::SetField(category, text) => {
                self.form.set(category, text);
                Ok(())
            }
            UiEvent::Calculate => self.calculate(),
            UiEvent::Reset => self.reset(),
            UiEvent::ChangeRegion(region) => {
                // the selection sticks even if the recalculation below
                // rejects the current form text
                self.region = region;
                info!("region changed to {}", region.code());
                self.calculate()
            }
            UiEvent::ChangeUnitSystem(unit_system) => {
                self.unit_system = unit_system;
                info!("unit system changed to {}", unit_system.code());
                self.calculate()
            }
            UiEvent::ChangeLanguage(language) => {
                self.language = language;
                self.relabel();
                Ok(())
            }
            UiEvent::ChangeChartKind(chart_kind) => {
                self.chart_kind = chart_kind;
                Ok(())
            }
            UiEvent::ChangeTheme(theme) => {
                self.theme = theme;
                Ok(())
            }
            UiEvent::Save => self.save(),
            UiEvent::Load => self.load(),
            UiEvent::LoadHistoryEntry(timestamp) => self.load_history_entry(timestamp),
            UiEvent::ExportCsv => self.export("csv"),
            UiEvent::ExportPdf => self.export("pdf"),
        }
    }

    fn calculate(&mut self) -> Result<()> {
        let reading = UsageReading::parse(&self.form)?;
        let result = compute_footprint(&reading, self.region, self.unit_system);
        self.history
            .push(HistoryEntry::new(result.total, reading.values()));
        self.present(&result);
        info!(
            "calculation completed: {:.2} {} for region {}",
            result.total,
            self.unit_system.mass_label(),
            self.region.code()
        );
        self.state = SessionState::Calculated(result);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.form.clear();
        self.state = SessionState::Idle;
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.clear();
        }
        info!("form reset");
        Ok(())
    }

    /// Language switches relabel the displayed result; nothing is
    /// recomputed and no history entry is appended.
    fn relabel(&mut self) {
        if let SessionState::Calculated(result) = &self.state {
            let view = self.view_for(result);
            if let Some(renderer) = self.renderer.as_mut() {
                renderer.present(&view);
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        let snapshot = Snapshot::from_form(&self.form, self.region, self.unit_system, Utc::now());
        self.store.save(&snapshot)?;
        info!("snapshot saved to {}", self.store.path().display());
        self.notify("Data saved successfully!");
        Ok(())
    }

    fn load(&mut self) -> Result<()> {
        let snapshot = self.store.load()?;
        self.form = snapshot.form();
        self.region = snapshot.region;
        self.unit_system = snapshot.unit_system;
        let loaded_at = snapshot
            .timestamp
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_else(|| "unknown time".to_string());
        self.calculate()?;
        self.notify(&format!("Data loaded from {}", loaded_at));
        Ok(())
    }

    fn load_history_entry(&mut self, timestamp: DateTime<Utc>) -> Result<()> {
        let raw_values = self
            .history
            .iter()
            .find(|entry| entry.timestamp == timestamp)
            .map(|entry| entry.raw_values)
            .ok_or_else(|| AppError::NotFound(format!("No history entry at {}", timestamp)))?;
        self.form = FormInput::from_values(raw_values);
        self.calculate()
    }

    /// Exports recompute from the current form without touching session
    /// state or history.
    fn export(&mut self, extension: &str) -> Result<()> {
        let reading = UsageReading::parse(&self.form)?;
        let result = compute_footprint(&reading, self.region, self.unit_system);

        std::fs::create_dir_all(&self.export_dir)
            .map_err(|e| AppError::Export(format!("Failed to create export directory: {}", e)))?;
        let file_name = export_file_name(extension, Utc::now());
        let path = self.export_dir.join(&file_name);

        match extension {
            "csv" => export_csv(&result, self.unit_system, &path)?,
            "pdf" => export_pdf(&result, self.unit_system, self.language.strings(), &path)?,
            other => {
                return Err(AppError::Export(format!(
                    "Unsupported export format: {}",
                    other
                )))
            }
        }

        info!("exported {}", path.display());
        self.notify(&format!("Exported to {}", file_name));
        Ok(())
    }

    fn present(&mut self, result: &FootprintResult) {
        let view = self.view_for(result);
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.present(&view);
        }
    }

    fn view_for(&self, result: &FootprintResult) -> ResultView {
        let strings = self.language.strings();
        let mass = self.unit_system.mass_label();
        let category_lines = result
            .per_category
            .iter()
            .map(|(category, value)| {
                format!("{}: {:.2} {} CO2/month", category.display_name(), value, mass)
            })
            .collect();

        ResultView {
            result: result.clone(),
            chart_kind: self.chart_kind,
            unit_system: self.unit_system,
            progress: progress_fraction(result.total, self.unit_system),
            total_line: format!("{}: {:.2} {} CO2/month", strings.total, result.total, mass),
            offset_line: format!(
                "{}: Plant {:.1} trees per year",
                strings.offset, result.offset_trees
            ),
            category_lines,
        }
    }

    fn notify(&mut self, message: &str) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.notify(message);
        }
    }
}
