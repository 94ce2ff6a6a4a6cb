//! UI events and their dispatch table.
//!
//! The page this controller models wired its behavior through inline DOM
//! handlers; here every trigger is an explicit event handed to
//! [`ViewController::dispatch`], so a front-end only needs to translate its
//! own input notions into `UiEvent`s.

use crate::controller::ViewController;
use crate::models::SelectedFile;

#[derive(Debug, Clone)]
pub enum UiEvent {
    /// The analyze control was activated with the current query field text.
    AnalyzeClicked { query: String },
    /// A keystroke landed while the query field had focus. Only a
    /// modifier-plus-Enter combination triggers analysis.
    QueryKeystroke {
        query: String,
        key: String,
        ctrl: bool,
    },
    TemperatureChanged(f64),
    TopKChanged(u32),
    FileChosen(SelectedFile),
    DragOver,
    DragLeave,
    FileDropped(SelectedFile),
    IndexClicked,
    HistoryToggleClicked,
    SidebarCloseClicked,
    HistoryRowClicked { index: usize },
    ClearHistoryClicked,
}

impl ViewController {
    pub async fn dispatch(&self, event: UiEvent) {
        match event {
            UiEvent::AnalyzeClicked { query } => self.analyze(&query).await,
            UiEvent::QueryKeystroke { query, key, ctrl } => {
                if ctrl && key == "Enter" {
                    self.analyze(&query).await;
                }
            }
            UiEvent::TemperatureChanged(value) => self.set_temperature(value),
            UiEvent::TopKChanged(value) => self.set_top_k(value),
            UiEvent::FileChosen(file) => self.select_from_picker(file),
            UiEvent::DragOver => self.drag_over(),
            UiEvent::DragLeave => self.drag_leave(),
            UiEvent::FileDropped(file) => self.select_from_drop(file),
            UiEvent::IndexClicked => self.index_selected_file().await,
            UiEvent::HistoryToggleClicked => self.toggle_sidebar(),
            UiEvent::SidebarCloseClicked => self.close_sidebar(),
            UiEvent::HistoryRowClicked { index } => self.open_history_item(index).await,
            UiEvent::ClearHistoryClicked => self.clear_history().await,
        }
    }
}
