/// Rendering sink the controller drives.
///
/// Implementations mutate whatever stands in for the page: a DOM bridge, a
/// terminal, or a recording double in tests. All methods are fire-and-forget
/// mutations except [`Surface::confirm`], which blocks for a user decision
/// and exists as a deliberate safeguard in front of destructive actions.
pub trait Surface: Send + Sync {
    // Analysis view
    fn set_welcome_visible(&self, visible: bool);
    fn set_loading_visible(&self, visible: bool);
    fn show_results(&self, markup: &str);
    fn hide_results(&self);
    fn set_analyze_enabled(&self, enabled: bool);
    fn set_query_text(&self, query: &str);

    // Tuning slider value labels
    fn set_temperature_label(&self, value: f64);
    fn set_top_k_label(&self, value: u32);

    // Upload area and index control
    fn set_upload_label(&self, label: &str);
    fn set_upload_hover(&self, active: bool);
    fn reset_file_picker(&self);
    fn set_index_enabled(&self, enabled: bool);
    fn set_index_label(&self, label: &str);

    // History sidebar
    fn set_history(&self, markup: &str);
    fn set_sidebar_open(&self, open: bool);

    /// Asks the user to confirm a destructive action.
    fn confirm(&self, prompt: &str) -> bool;

    // Toast tray
    fn mount_toast(&self, id: &str, markup: &str);
    fn begin_toast_exit(&self, id: &str);
    fn remove_toast(&self, id: &str);
}
