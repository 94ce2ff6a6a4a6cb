use async_trait::async_trait;
use reqwest::multipart;
use tracing::{debug, error};

use crate::error::{Result, ViewError};
use crate::models::{
    AnalysisOutcome, AnalyzeRequest, AnalyzeResponse, ClearHistoryResponse, HistoryEntry,
    HistoryResponse, SelectedFile, UploadResponse,
};

/// Port to the symptom-checker backend. The controller only talks to this
/// trait; tests substitute an in-memory double.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn analyze(&self, query: &str, temperature: f64, top_k: u32) -> Result<AnalysisOutcome>;

    /// Submits the file for indexing and returns the server's success message.
    async fn upload(&self, file: &SelectedFile) -> Result<String>;

    /// Fetches the full history, oldest entry first.
    async fn history(&self) -> Result<Vec<HistoryEntry>>;

    async fn clear_history(&self) -> Result<()>;
}

/// HTTP implementation of [`Backend`] over the JSON API.
///
/// No timeouts beyond the transport defaults, no retries: every failure is
/// terminal for the user action that triggered it.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn analyze(&self, query: &str, temperature: f64, top_k: u32) -> Result<AnalysisOutcome> {
        let payload = AnalyzeRequest {
            query,
            temperature,
            top_k,
        };

        let response: AnalyzeResponse = self
            .client
            .post(self.url("/api/analyze"))
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ViewError::Rejected(
                response.error.unwrap_or_else(|| "Analysis failed".to_string()),
            ));
        }

        let result = response
            .result
            .ok_or_else(|| ViewError::Malformed("analyze response missing result".to_string()))?;
        let query = response.query.unwrap_or_else(|| query.to_string());

        Ok(AnalysisOutcome { result, query })
    }

    async fn upload(&self, file: &SelectedFile) -> Result<String> {
        debug!("Sending upload request for {}", file.name);

        let part = multipart::Part::bytes(file.bytes.clone())
            .file_name(file.name.clone())
            .mime_str(&file.content_type)
            .map_err(|e| ViewError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        debug!("Upload response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Upload rejected with status {}: {}", status, body);
            return Err(ViewError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response: UploadResponse = response.json().await?;
        if !response.success {
            return Err(ViewError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "Failed to index PDF".to_string()),
            ));
        }

        Ok(response
            .message
            .unwrap_or_else(|| "PDF indexed successfully".to_string()))
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>> {
        let response: HistoryResponse = self
            .client
            .get(self.url("/api/history"))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ViewError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "Failed to load history".to_string()),
            ));
        }

        Ok(response.history)
    }

    async fn clear_history(&self) -> Result<()> {
        let response: ClearHistoryResponse = self
            .client
            .post(self.url("/api/clear-history"))
            .send()
            .await?
            .json()
            .await?;

        if !response.success {
            return Err(ViewError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "Failed to clear history".to_string()),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let backend = HttpBackend::new("http://localhost:5000/");
        assert_eq!(backend.url("/api/history"), "http://localhost:5000/api/history");
    }
}
