use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One uploaded document as listed by the service.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct DocumentEntry {
    pub id: String,
    pub filename: String,
}

/// Meet section a result belongs to (date + section number).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Abschnitt {
    #[serde(default)]
    pub datum: Option<String>,
    #[serde(default)]
    pub nummer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Wettkampf {
    #[serde(default)]
    pub nummer: Option<String>,
}

/// Heat numbers arrive as JSON numbers or strings depending on the
/// document parser that produced them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum HeatNumber {
    Int(i64),
    Text(String),
}

impl HeatNumber {
    /// Zero and the empty string count as absent, matching the service's
    /// own result viewer.
    pub fn is_present(&self) -> bool {
        match self {
            HeatNumber::Int(n) => *n != 0,
            HeatNumber::Text(s) => !s.is_empty(),
        }
    }
}

impl std::fmt::Display for HeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HeatNumber::Int(n) => write!(f, "{}", n),
            HeatNumber::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Lauf {
    #[serde(default)]
    pub lauf_nr: Option<HeatNumber>,
    #[serde(default)]
    pub lauf_gesamt: Option<HeatNumber>,
}

impl Lauf {
    /// Composite heat label, `"<nr>/<gesamt>"` only when both parts are
    /// present and non-empty.
    pub fn label(&self) -> Option<String> {
        match (&self.lauf_nr, &self.lauf_gesamt) {
            (Some(nr), Some(gesamt)) if nr.is_present() && gesamt.is_present() => {
                Some(format!("{}/{}", nr, gesamt))
            }
            _ => None,
        }
    }
}

/// One row of search output. Every field is optional; the parsers behind
/// the service omit whatever they could not extract, so all access has to
/// tolerate absent values.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ResultRecord {
    #[serde(default)]
    pub verein: Option<String>,
    #[serde(default)]
    pub nachname: Option<String>,
    #[serde(default)]
    pub vorname: Option<String>,
    #[serde(default)]
    pub abschnitt: Option<Abschnitt>,
    #[serde(default)]
    pub wettkampf: Option<Wettkampf>,
    #[serde(default)]
    pub lauf: Option<Lauf>,
    #[serde(default)]
    pub bahn: Option<String>,
    #[serde(default)]
    pub jahrgang: Option<String>,
    #[serde(default)]
    pub meldezeit: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<ResultRecord>,
}

/// Search filter values entered into the form. Empty strings mean
/// "no filter on this field"; the service expects all three params.
#[derive(Debug, Clone, Default)]
pub struct SearchQuery {
    pub vorname: String,
    pub nachname: String,
    pub verein: String,
}

#[derive(Clone)]
pub struct SearchClient {
    base_url: String,
    client: Client,
}

impl SearchClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_documents(&self) -> Result<Vec<DocumentEntry>> {
        let url = format!("{}/documents", self.base_url);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch document list")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Document list failed: {} - {}", status, body);
        }

        let docs: Vec<DocumentEntry> = response
            .json()
            .await
            .context("Failed to parse document list")?;

        Ok(docs)
    }

    /// Upload a document as a multipart form with a single `file` part.
    pub async fn upload_document(&self, path: &Path) -> Result<()> {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename);
        let form = reqwest::multipart::Form::new().part("file", part);

        let url = format!("{}/upload", self.base_url);
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .context("Failed to upload document")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Upload failed: {} - {}", status, body);
        }

        Ok(())
    }

    pub async fn delete_document(&self, id: &str) -> Result<()> {
        let url = format!("{}/documents/{}", self.base_url, urlencoding::encode(id));
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .context("Failed to delete document")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Delete failed: {} - {}", status, body);
        }

        Ok(())
    }

    pub async fn search(&self, document_id: &str, query: &SearchQuery) -> Result<Vec<ResultRecord>> {
        let url = format!(
            "{}/search/{}?vorname={}&nachname={}&verein={}",
            self.base_url,
            urlencoding::encode(document_id),
            urlencoding::encode(&query.vorname),
            urlencoding::encode(&query.nachname),
            urlencoding::encode(&query.verein),
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to run search")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Search failed: {} - {}", status, body);
        }

        let data: SearchResponse = response
            .json()
            .await
            .context("Failed to parse search response")?;

        Ok(data.results)
    }

    pub async fn autocomplete(&self, document_id: &str, field: &str, q: &str) -> Result<Vec<String>> {
        let url = format!(
            "{}/autocomplete/{}?field={}&q={}",
            self.base_url,
            urlencoding::encode(document_id),
            urlencoding::encode(field),
            urlencoding::encode(q),
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch suggestions")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Autocomplete failed: {} - {}", status, body);
        }

        let suggestions: Vec<String> = response
            .json()
            .await
            .context("Failed to parse suggestions")?;

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_tolerates_missing_nested_objects() {
        let record: ResultRecord = serde_json::from_str(r#"{"nachname":"Muster"}"#).unwrap();
        assert_eq!(record.nachname.as_deref(), Some("Muster"));
        assert!(record.abschnitt.is_none());
        assert!(record.lauf.is_none());
    }

    #[test]
    fn heat_numbers_accept_numbers_and_strings() {
        let lauf: Lauf = serde_json::from_str(r#"{"lauf_nr": 2, "lauf_gesamt": "4"}"#).unwrap();
        assert_eq!(lauf.label().as_deref(), Some("2/4"));
    }

    #[test]
    fn heat_label_requires_both_parts() {
        let lauf: Lauf = serde_json::from_str(r#"{"lauf_nr": 3}"#).unwrap();
        assert_eq!(lauf.label(), None);

        let lauf: Lauf = serde_json::from_str(r#"{"lauf_nr": 0, "lauf_gesamt": 4}"#).unwrap();
        assert_eq!(lauf.label(), None);

        let lauf: Lauf = serde_json::from_str(r#"{"lauf_nr": "", "lauf_gesamt": "4"}"#).unwrap();
        assert_eq!(lauf.label(), None);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = SearchClient::new("http://localhost:8000/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
