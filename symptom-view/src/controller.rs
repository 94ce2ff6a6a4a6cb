//! The view controller: one method per user flow, each driving the surface
//! through its loading, success/failure, and finally phases in strict order.
//!
//! Flows are not mutually exclusive. Nothing guards against two analyze
//! requests in flight at once; the surface simply receives whichever response
//! lands last, matching the page behavior this controller models.

use std::sync::{Arc, Mutex};

use tracing::{error, info, warn};

use crate::backend::Backend;
use crate::models::SelectedFile;
use crate::render;
use crate::surface::Surface;
use crate::toast::{ToastKind, ToastTray};

/// Current slider values, read at analyze time.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub temperature: f64,
    pub top_k: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 5,
        }
    }
}

pub struct ViewController {
    backend: Arc<dyn Backend>,
    surface: Arc<dyn Surface>,
    toasts: ToastTray,
    selected_file: Mutex<Option<SelectedFile>>,
    tuning: Mutex<Tuning>,
    sidebar_open: Mutex<bool>,
}

impl ViewController {
    pub fn new(backend: Arc<dyn Backend>, surface: Arc<dyn Surface>) -> Self {
        Self {
            backend,
            surface: Arc::clone(&surface),
            toasts: ToastTray::new(surface),
            selected_file: Mutex::new(None),
            tuning: Mutex::new(Tuning::default()),
            sidebar_open: Mutex::new(false),
        }
    }

    /// Initial work on page load: populate the history sidebar.
    pub async fn start(&self) {
        self.load_history().await;
    }

    pub fn notify(&self, message: &str, kind: ToastKind) {
        self.toasts.push(message, kind);
    }

    pub fn tuning(&self) -> Tuning {
        *self.tuning.lock().unwrap()
    }

    pub fn set_temperature(&self, value: f64) {
        self.tuning.lock().unwrap().temperature = value;
        self.surface.set_temperature_label(value);
    }

    pub fn set_top_k(&self, value: u32) {
        self.tuning.lock().unwrap().top_k = value;
        self.surface.set_top_k_label(value);
    }

    // --- Analysis flow ---

    pub async fn analyze(&self, raw_query: &str) {
        let query = raw_query.trim();
        if query.is_empty() {
            self.notify("Please enter your symptoms", ToastKind::Warning);
            return;
        }

        let Tuning { temperature, top_k } = self.tuning();

        self.surface.set_welcome_visible(false);
        self.surface.hide_results();
        self.surface.set_loading_visible(true);
        self.surface.set_analyze_enabled(false);

        match self.backend.analyze(query, temperature, top_k).await {
            Ok(outcome) => {
                self.surface
                    .show_results(&render::result_markup(&outcome.result, &outcome.query));
                self.load_history().await;
                self.notify("Analysis complete", ToastKind::Success);
            }
            Err(err) => {
                error!("Analysis failed: {}", err);
                self.notify(&err.to_string(), ToastKind::Error);
                self.surface.set_welcome_visible(true);
            }
        }

        self.surface.set_loading_visible(false);
        self.surface.set_analyze_enabled(true);
    }

    // --- Upload / index flow ---

    /// Picker selection: any file is accepted without type checking.
    pub fn select_from_picker(&self, file: SelectedFile) {
        self.accept_file(file);
    }

    /// Drag-drop selection: only PDFs are accepted; anything else leaves the
    /// current selection untouched.
    pub fn select_from_drop(&self, file: SelectedFile) {
        self.surface.set_upload_hover(false);
        if !file.is_pdf() {
            self.notify("Please upload a PDF file", ToastKind::Warning);
            return;
        }
        self.accept_file(file);
    }

    pub fn drag_over(&self) {
        self.surface.set_upload_hover(true);
    }

    pub fn drag_leave(&self) {
        self.surface.set_upload_hover(false);
    }

    fn accept_file(&self, file: SelectedFile) {
        self.surface.set_upload_label(&file.name);
        self.surface.set_index_enabled(true);
        *self.selected_file.lock().unwrap() = Some(file);
    }

    pub async fn index_selected_file(&self) {
        let file = match self.selected_file.lock().unwrap().clone() {
            Some(file) => file,
            None => {
                self.notify("Please select a PDF file", ToastKind::Warning);
                return;
            }
        };

        info!("Starting PDF upload: {}", file.name);

        self.surface.set_index_enabled(false);
        self.surface.set_index_label("Indexing...");

        match self.backend.upload(&file).await {
            Ok(message) => {
                self.notify(&message, ToastKind::Success);
                *self.selected_file.lock().unwrap() = None;
                self.surface.reset_file_picker();
                self.surface.set_upload_label(render::UPLOAD_PLACEHOLDER);
            }
            Err(err) => {
                error!("Upload error: {}", err);
                self.notify(&err.to_string(), ToastKind::Error);
            }
        }

        // Either way the control stays disabled under its idle label; a fresh
        // selection is what re-enables it.
        self.surface.set_index_enabled(false);
        self.surface.set_index_label("Index PDF");
    }

    // --- History flow ---

    pub async fn load_history(&self) {
        match self.backend.history().await {
            Ok(entries) if !entries.is_empty() => {
                self.surface.set_history(&render::history_markup(&entries));
            }
            Ok(_) => self.surface.set_history(render::EMPTY_HISTORY),
            Err(err) => {
                error!("Error loading history: {}", err);
                self.surface.set_history(render::EMPTY_HISTORY);
            }
        }
    }

    /// Re-fetches the history and opens the entry at the given backend index.
    pub async fn open_history_item(&self, index: usize) {
        match self.backend.history().await {
            Ok(entries) => match entries.into_iter().nth(index) {
                Some(entry) => {
                    self.surface.set_query_text(&entry.query);
                    self.surface
                        .show_results(&render::result_markup(&entry.result, &entry.query));
                    self.set_sidebar(false);
                }
                None => warn!("History index {} out of range", index),
            },
            Err(err) => error!("Error loading history item: {}", err),
        }
    }

    pub async fn clear_history(&self) {
        if !self
            .surface
            .confirm("Are you sure you want to clear all history?")
        {
            self.notify("History left unchanged", ToastKind::Warning);
            return;
        }

        match self.backend.clear_history().await {
            Ok(()) => {
                self.surface.set_history(render::EMPTY_HISTORY);
                self.notify("History cleared", ToastKind::Success);
            }
            Err(err) => {
                error!("Error clearing history: {}", err);
                self.notify("Failed to clear history", ToastKind::Error);
            }
        }
    }

    // --- Sidebar ---

    pub fn toggle_sidebar(&self) {
        let mut open = self.sidebar_open.lock().unwrap();
        *open = !*open;
        self.surface.set_sidebar_open(*open);
    }

    pub fn close_sidebar(&self) {
        self.set_sidebar(false);
    }

    fn set_sidebar(&self, open: bool) {
        *self.sidebar_open.lock().unwrap() = open;
        self.surface.set_sidebar_open(open);
    }
}
