use serde::{Deserialize, Serialize};

/// Backend classification of a query: symptom reasoning, knowledge lookup,
/// or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Knowledge,
    Symptoms,
    Both,
}

impl Route {
    /// Parses a backend route label. Unknown labels return `None`; rendering
    /// falls back to [`Route::Knowledge`] for badge purposes.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "knowledge" => Some(Route::Knowledge),
            "symptoms" => Some(Route::Symptoms),
            "both" => Some(Route::Both),
            _ => None,
        }
    }
}

/// One analysis produced by the backend. The route label is kept as the raw
/// string the server sent so history rows can display it verbatim even when
/// it is not one of the known routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub route: Option<String>,
    #[serde(default)]
    pub symptom_analysis: Option<String>,
    #[serde(default)]
    pub rag_summary: Option<String>,
}

impl AnalysisResult {
    /// Raw route label for display, `"N/A"` when the server omitted it.
    pub fn route_label(&self) -> &str {
        self.route.as_deref().unwrap_or("N/A")
    }

    /// Route used to pick the visual badge, with the knowledge fallback.
    pub fn badge_route(&self) -> Route {
        self.route
            .as_deref()
            .and_then(Route::from_label)
            .unwrap_or(Route::Knowledge)
    }
}

/// One past query-result pair retained by the backend. The backend owns the
/// ordered sequence (oldest first); the view never mutates it except through
/// a full clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub query: String,
    pub result: AnalysisResult,
}

/// A successful analyze round-trip: the result plus the query string as the
/// server echoed it back.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub result: AnalysisResult,
    pub query: String,
}

/// The single file handle held between selection and indexing. At most one
/// exists at a time; selecting a new file replaces it unconditionally.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn is_pdf(&self) -> bool {
        self.content_type == "application/pdf"
    }
}

// --- Wire payloads ---
//
// Every response envelope carries a boolean `success` flag. A missing flag
// deserializes as `false` and is treated as failure, with `error` (when
// present) used as the user-visible message.

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub query: &'a str,
    pub temperature: f64,
    pub top_k: u32,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub result: Option<AnalysisResult>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ClearHistoryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}
