//! Core of a desktop household carbon footprint calculator: a pure
//! emission model, a single-threaded session controller, snapshot
//! persistence, CSV/PDF export, and display string dictionaries for five
//! languages. The windowed shell that draws the form and charts is out of
//! scope and talks to this crate through [`render::RenderSink`].

pub mod config;
pub mod emissions;
pub mod error;
pub mod export;
pub mod init;
pub mod locale;
pub mod models;
pub mod render;
pub mod session;
pub mod storage;

pub use config::{AppConfig, ThemeMode, UserPreferences};
pub use emissions::{compute_footprint, progress_fraction, Region, UnitSystem};
pub use error::{AppError, Result};
pub use init::{init_logging, AppServices};
pub use locale::{Language, LocaleStrings};
pub use models::{Category, FootprintResult, FormInput, HistoryEntry, Snapshot, UsageReading};
pub use render::{ChartKind, RenderSink, ResultView};
pub use session::{SessionController, SessionState, UiEvent};
pub use storage::SnapshotStore;
