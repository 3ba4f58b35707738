//! Document list actions
//!
//! Upload, delete and list refresh. Precondition failures (no file path
//! typed, nothing selected) surface as toasts before any request is
//! issued.

use crate::model::library::LibraryFocus;
use crate::services::ApiRequest;
use crate::{log_debug, App};

impl App {
    pub(crate) fn request_document_list(&mut self) {
        self.model.library.loading_documents = true;
        let _ = self.api_tx.send(ApiRequest::ListDocuments);
    }

    /// Open the upload prompt dialog.
    pub(crate) fn open_upload_prompt(&mut self) {
        self.model.library.upload_prompt = Some(String::new());
    }

    /// Submit the typed path. An empty path aborts with a notice and no
    /// request, mirroring the file-picker precondition of the original.
    pub(crate) fn submit_upload(&mut self) {
        let Some(path) = self.model.library.upload_prompt.take() else {
            return;
        };

        let path = path.trim().to_string();
        if path.is_empty() {
            self.model.ui.show_error("no file chosen");
            return;
        }

        log_debug(&format!("upload requested: {}", path));
        let _ = self.api_tx.send(ApiRequest::UploadDocument {
            path: path.into(),
        });
    }

    /// Ask for confirmation before deleting the selected document.
    pub(crate) fn request_delete_selected(&mut self) {
        let Some(id) = self.model.library.selected_document.clone() else {
            self.model.ui.show_error("no document selected");
            return;
        };

        let filename = self
            .model
            .library
            .selected_filename()
            .unwrap_or("document")
            .to_string();
        self.model.library.confirm_delete = Some((id, filename));
    }

    /// User confirmed the delete dialog.
    pub(crate) fn confirm_delete(&mut self) {
        if let Some((id, _)) = self.model.library.confirm_delete.take() {
            log_debug(&format!("delete requested: {}", id));
            let _ = self.api_tx.send(ApiRequest::DeleteDocument { id });
        }
    }

    pub(crate) fn select_highlighted_document(&mut self) {
        self.model.library.select_highlighted();
        if self.model.library.selected_document.is_some() {
            self.model.library.focus = LibraryFocus::Field(crate::model::SearchField::Vorname);
        }
    }

    pub(crate) fn move_document_selection(&mut self, delta: isize) {
        let library = &mut self.model.library;
        if library.documents.is_empty() {
            return;
        }
        let current = library.list_selection.unwrap_or(0) as isize;
        let last = library.documents.len() as isize - 1;
        library.list_selection = Some(current.saturating_add(delta).clamp(0, last) as usize);
    }
}
