//! API service worker
//!
//! Processes requests from the UI loop in the background. Each request
//! becomes one spawned task so a slow search cannot hold up an
//! autocomplete lookup. Responses carry display-ready error strings;
//! the handler side only decides where to show them.

use std::path::PathBuf;
use tokio::sync::mpsc;

use crate::api::{DocumentEntry, ResultRecord, SearchClient, SearchQuery};
use crate::logic::errors::format_error_message;
use crate::model::SearchField;

#[derive(Debug, Clone)]
pub enum ApiRequest {
    ListDocuments,
    UploadDocument {
        path: PathBuf,
    },
    DeleteDocument {
        id: String,
    },
    Search {
        document_id: String,
        query: SearchQuery,
    },
    Autocomplete {
        document_id: String,
        field: SearchField,
        q: String,
    },
}

#[derive(Debug, Clone)]
pub enum ApiResponse {
    Documents(Result<Vec<DocumentEntry>, String>),
    Uploaded(Result<(), String>),
    Deleted(Result<(), String>),
    SearchResults(Result<Vec<ResultRecord>, String>),
    Suggestions {
        field: SearchField,
        /// Query the lookup was issued for; stale responses are dropped
        /// when the input has moved on.
        q: String,
        items: Result<Vec<String>, String>,
    },
}

async fn execute_request(client: &SearchClient, request: ApiRequest) -> ApiResponse {
    match request {
        ApiRequest::ListDocuments => {
            let docs = client
                .list_documents()
                .await
                .map_err(|e| format_error_message(&e));
            ApiResponse::Documents(docs)
        }

        ApiRequest::UploadDocument { path } => {
            let outcome = client
                .upload_document(&path)
                .await
                .map_err(|e| format_error_message(&e));
            ApiResponse::Uploaded(outcome)
        }

        ApiRequest::DeleteDocument { id } => {
            let outcome = client
                .delete_document(&id)
                .await
                .map_err(|e| format_error_message(&e));
            ApiResponse::Deleted(outcome)
        }

        ApiRequest::Search { document_id, query } => {
            let results = client
                .search(&document_id, &query)
                .await
                .map_err(|e| format_error_message(&e));
            ApiResponse::SearchResults(results)
        }

        ApiRequest::Autocomplete {
            document_id,
            field,
            q,
        } => {
            let items = client
                .autocomplete(&document_id, field.as_param(), &q)
                .await
                .map_err(|e| format_error_message(&e));
            ApiResponse::Suggestions { field, q, items }
        }
    }
}

/// Spawn the API service worker.
pub fn spawn_api_service(
    client: SearchClient,
) -> (
    mpsc::UnboundedSender<ApiRequest>,
    mpsc::UnboundedReceiver<ApiResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<ApiRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<ApiResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            let client = client.clone();
            let response_tx = response_tx.clone();

            tokio::spawn(async move {
                let response = execute_request(&client, request).await;
                let _ = response_tx.send(response);
            });
        }
    });

    (request_tx, response_rx)
}
