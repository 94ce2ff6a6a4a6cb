pub mod backend;
pub mod controller;
pub mod error;
pub mod event;
pub mod models;
pub mod render;
pub mod surface;
pub mod toast;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use backend::{Backend, HttpBackend};
pub use controller::{Tuning, ViewController};
pub use error::{Result, ViewError};
pub use event::UiEvent;
pub use models::{AnalysisOutcome, AnalysisResult, HistoryEntry, Route, SelectedFile};
pub use surface::Surface;
pub use toast::{TOAST_DWELL, TOAST_EXIT, ToastKind, ToastTray};
