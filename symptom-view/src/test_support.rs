//! Trait doubles shared by the unit tests: a scriptable backend and a
//! surface that records every mutation it receives.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::backend::Backend;
use crate::error::{Result, ViewError};
use crate::models::{AnalysisOutcome, HistoryEntry, SelectedFile};
use crate::surface::Surface;

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    WelcomeVisible(bool),
    LoadingVisible(bool),
    Results(String),
    ResultsHidden,
    AnalyzeEnabled(bool),
    QueryText(String),
    TemperatureLabel(f64),
    TopKLabel(u32),
    UploadLabel(String),
    UploadHover(bool),
    PickerReset,
    IndexEnabled(bool),
    IndexLabel(String),
    History(String),
    SidebarOpen(bool),
    ToastMounted { id: String, markup: String },
    ToastExit(String),
    ToastRemoved(String),
}

#[derive(Default)]
pub struct RecordingSurface {
    events: Mutex<Vec<SurfaceEvent>>,
    pub confirm_reply: AtomicBool,
    pub confirm_calls: AtomicUsize,
}

impl RecordingSurface {
    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&SurfaceEvent) -> bool) -> usize {
        self.events.lock().unwrap().iter().filter(|e| pred(e)).count()
    }

    /// Position of the first event matching the predicate.
    pub fn position(&self, pred: impl Fn(&SurfaceEvent) -> bool) -> Option<usize> {
        self.events.lock().unwrap().iter().position(|e| pred(e))
    }

    /// Markup of every toast mounted so far, in order.
    pub fn mounted_toasts(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::ToastMounted { markup, .. } => Some(markup.clone()),
                _ => None,
            })
            .collect()
    }

    /// Markup of the most recent history render.
    pub fn last_history(&self) -> Option<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find_map(|e| match e {
                SurfaceEvent::History(markup) => Some(markup.clone()),
                _ => None,
            })
    }
}

impl Surface for RecordingSurface {
    fn set_welcome_visible(&self, visible: bool) {
        self.record(SurfaceEvent::WelcomeVisible(visible));
    }

    fn set_loading_visible(&self, visible: bool) {
        self.record(SurfaceEvent::LoadingVisible(visible));
    }

    fn show_results(&self, markup: &str) {
        self.record(SurfaceEvent::Results(markup.to_string()));
    }

    fn hide_results(&self) {
        self.record(SurfaceEvent::ResultsHidden);
    }

    fn set_analyze_enabled(&self, enabled: bool) {
        self.record(SurfaceEvent::AnalyzeEnabled(enabled));
    }

    fn set_query_text(&self, query: &str) {
        self.record(SurfaceEvent::QueryText(query.to_string()));
    }

    fn set_temperature_label(&self, value: f64) {
        self.record(SurfaceEvent::TemperatureLabel(value));
    }

    fn set_top_k_label(&self, value: u32) {
        self.record(SurfaceEvent::TopKLabel(value));
    }

    fn set_upload_label(&self, label: &str) {
        self.record(SurfaceEvent::UploadLabel(label.to_string()));
    }

    fn set_upload_hover(&self, active: bool) {
        self.record(SurfaceEvent::UploadHover(active));
    }

    fn reset_file_picker(&self) {
        self.record(SurfaceEvent::PickerReset);
    }

    fn set_index_enabled(&self, enabled: bool) {
        self.record(SurfaceEvent::IndexEnabled(enabled));
    }

    fn set_index_label(&self, label: &str) {
        self.record(SurfaceEvent::IndexLabel(label.to_string()));
    }

    fn set_history(&self, markup: &str) {
        self.record(SurfaceEvent::History(markup.to_string()));
    }

    fn set_sidebar_open(&self, open: bool) {
        self.record(SurfaceEvent::SidebarOpen(open));
    }

    fn confirm(&self, _prompt: &str) -> bool {
        self.confirm_calls.fetch_add(1, Ordering::SeqCst);
        self.confirm_reply.load(Ordering::SeqCst)
    }

    fn mount_toast(&self, id: &str, markup: &str) {
        self.record(SurfaceEvent::ToastMounted {
            id: id.to_string(),
            markup: markup.to_string(),
        });
    }

    fn begin_toast_exit(&self, id: &str) {
        self.record(SurfaceEvent::ToastExit(id.to_string()));
    }

    fn remove_toast(&self, id: &str) {
        self.record(SurfaceEvent::ToastRemoved(id.to_string()));
    }
}

/// Scriptable [`Backend`] double. Every call is recorded; replies default to
/// the happy path unless a test scripts a failure.
#[derive(Default)]
pub struct StubBackend {
    pub analyze_calls: Mutex<Vec<(String, f64, u32)>>,
    pub analyze_reply: Mutex<Option<AnalysisOutcome>>,
    pub analyze_error: Mutex<Option<String>>,
    pub upload_calls: Mutex<Vec<String>>,
    pub upload_error: Mutex<Option<ViewError>>,
    pub upload_message: Mutex<Option<String>>,
    pub history_entries: Mutex<Vec<HistoryEntry>>,
    pub history_calls: AtomicUsize,
    pub history_fails: AtomicBool,
    pub clear_calls: AtomicUsize,
    pub clear_fails: AtomicBool,
}

#[async_trait]
impl Backend for StubBackend {
    async fn analyze(&self, query: &str, temperature: f64, top_k: u32) -> Result<AnalysisOutcome> {
        self.analyze_calls
            .lock()
            .unwrap()
            .push((query.to_string(), temperature, top_k));

        if let Some(message) = self.analyze_error.lock().unwrap().take() {
            return Err(ViewError::Rejected(message));
        }
        self.analyze_reply
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ViewError::Rejected("Analysis failed".to_string()))
    }

    async fn upload(&self, file: &SelectedFile) -> Result<String> {
        self.upload_calls.lock().unwrap().push(file.name.clone());

        if let Some(err) = self.upload_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self
            .upload_message
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| "PDF indexed successfully".to_string()))
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        if self.history_fails.load(Ordering::SeqCst) {
            return Err(ViewError::Transport("connection refused".to_string()));
        }
        Ok(self.history_entries.lock().unwrap().clone())
    }

    async fn clear_history(&self) -> Result<()> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        if self.clear_fails.load(Ordering::SeqCst) {
            return Err(ViewError::Transport("connection refused".to_string()));
        }
        self.history_entries.lock().unwrap().clear();
        Ok(())
    }
}

/// A PDF as the drop target reports it.
pub fn pdf_file(name: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        content_type: "application/pdf".to_string(),
        bytes: b"%PDF-1.4".to_vec(),
    }
}

pub fn text_file(name: &str) -> SelectedFile {
    SelectedFile {
        name: name.to_string(),
        content_type: "text/plain".to_string(),
        bytes: b"notes".to_vec(),
    }
}
