//! Bill creation page: receipt upload on file change, metadata on submit.

use std::sync::Arc;

use client_core::{BillUpload, SelectedFile, SessionAccessor, Store};
use shared::{
    domain::{BillId, BillStatus, ExpenseType},
    protocol::{BillDraft, BillUpdate},
};
use tracing::{debug, error, info, warn};

use crate::{
    dom::{Document, Listener},
    router::{OnNavigate, RoutePath},
    ui::new_bill::{AMOUNT, COMMENTARY, DATE, EXPENSE_NAME, EXPENSE_TYPE, PCT, VAT},
};

pub const EXTENSION_REJECTED: &str = "Extensions non permises";
pub const MISSING_RECEIPT: &str = "Veuillez joindre un justificatif";
pub const INVALID_EXPENSE_TYPE: &str = "Type de dépense invalide";

const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
const DEFAULT_PCT: i64 = 20;

/// Receipt already accepted by the store, waiting for the bill submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftUpload {
    pub bill_id: Option<BillId>,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
}

pub struct NewBillController {
    on_navigate: OnNavigate,
    store: Arc<dyn Store>,
    session: Arc<dyn SessionAccessor>,
    draft: DraftUpload,
}

impl NewBillController {
    pub fn new(
        doc: &mut Document,
        on_navigate: OnNavigate,
        store: Arc<dyn Store>,
        session: Arc<dyn SessionAccessor>,
    ) -> Self {
        doc.bind(Listener::FileInput);
        doc.bind(Listener::NewBillForm);
        Self {
            on_navigate,
            store,
            session,
            draft: DraftUpload::default(),
        }
    }

    pub fn draft(&self) -> &DraftUpload {
        &self.draft
    }

    pub async fn handle_change_file(&mut self, doc: &mut Document) {
        let Some(file) = doc.selected_file().cloned() else {
            debug!("file input cleared");
            return;
        };
        // A new selection replaces any receipt accepted earlier.
        self.draft = DraftUpload::default();

        if !is_allowed_receipt(&file) {
            info!(file_name = %file.base_name(), "rejected receipt extension");
            doc.alert(EXTENSION_REJECTED);
            doc.clear_file_input();
            return;
        }

        let file_name = file.base_name().to_string();
        let upload = BillUpload {
            file,
            email: self.session_email(),
        };
        match self.store.bills().create(upload).await {
            Ok(created) => {
                info!(bill_id = %created.key, file_name = %file_name, "receipt uploaded");
                self.draft = DraftUpload {
                    bill_id: Some(created.key),
                    file_url: Some(created.file_url),
                    file_name: Some(file_name),
                };
                doc.clear_banner();
            }
            Err(err) => {
                error!(error = %err, file_name = %file_name, "receipt upload failed");
                doc.set_banner(err.to_string());
            }
        }
    }

    pub async fn handle_submit(&mut self, doc: &mut Document) {
        let Some(bill_id) = self.draft.bill_id.clone() else {
            info!("submission without an uploaded receipt");
            doc.alert(MISSING_RECEIPT);
            return;
        };
        let Some(expense_type) = read_expense_type(doc.field(EXPENSE_TYPE)) else {
            warn!(value = %doc.field(EXPENSE_TYPE), "unknown expense type selected");
            doc.alert(INVALID_EXPENSE_TYPE);
            return;
        };

        let data = BillDraft {
            email: self.session_email(),
            expense_type,
            name: doc.field(EXPENSE_NAME).to_string(),
            amount: parse_int(doc.field(AMOUNT)),
            date: doc.field(DATE).to_string(),
            vat: doc.field(VAT).to_string(),
            pct: parse_int(doc.field(PCT)).unwrap_or(DEFAULT_PCT),
            commentary: doc.field(COMMENTARY).to_string(),
            file_url: self.draft.file_url.clone(),
            file_name: self.draft.file_name.clone(),
            status: BillStatus::Pending,
        };

        match self
            .store
            .bills()
            .update(BillUpdate {
                selector: bill_id,
                data,
            })
            .await
        {
            Ok(record) => {
                info!(bill_id = %record.id, "bill submitted");
                self.on_navigate.call(RoutePath::Bills);
            }
            Err(err) => {
                error!(error = %err, "bill submission failed");
                doc.set_banner(err.to_string());
            }
        }
    }

    fn session_email(&self) -> String {
        match self.session.get_user() {
            Some(user) => user.email,
            None => {
                warn!("no session user, sending an empty email");
                String::new()
            }
        }
    }
}

fn is_allowed_receipt(file: &SelectedFile) -> bool {
    file.extension()
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
}

/// An untouched select holds its first option.
fn read_expense_type(raw: &str) -> Option<ExpenseType> {
    if raw.is_empty() {
        return Some(ExpenseType::ALL[0]);
    }
    raw.parse().ok()
}

/// Leading integer of `raw`: optional whitespace and sign, then digits. Trailing text is ignored.
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let value: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
#[path = "tests/new_bill_tests.rs"]
mod tests;
