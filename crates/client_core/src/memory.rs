//! In-memory bills store, used for offline runs and as the store double in tests.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use shared::{
    domain::{BillId, BillRecord},
    protocol::{BillUpdate, CreatedBill},
};
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::{fixtures, BillUpload, BillsResource, Store, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    List,
    Create,
    Update,
}

struct PendingReceipt {
    file_url: String,
    file_name: String,
    email: String,
}

#[derive(Default)]
struct MemoryState {
    bills: Vec<BillRecord>,
    receipts: HashMap<BillId, PendingReceipt>,
    scripted_failures: HashMap<StoreOperation, VecDeque<StoreError>>,
    uploads: Vec<BillUpload>,
    updates: Vec<BillUpdate>,
    calls: Vec<StoreOperation>,
    next_key: u64,
}

impl MemoryState {
    fn begin(&mut self, op: StoreOperation) -> Result<(), StoreError> {
        self.calls.push(op);
        match self
            .scripted_failures
            .get_mut(&op)
            .and_then(VecDeque::pop_front)
        {
            Some(err) => {
                debug!(operation = ?op, error = %err, "returning scripted store failure");
                Err(err)
            }
            None => Ok(()),
        }
    }
}

pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

impl MemoryStore {
    pub fn new(bills: Vec<BillRecord>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                bills,
                next_key: 1,
                ..MemoryState::default()
            }),
        }
    }

    pub fn with_fixtures() -> Self {
        Self::new(fixtures::bills())
    }

    /// Makes the next call of `op` fail with `err`. Failures queue up per operation.
    pub async fn fail_next(&self, op: StoreOperation, err: StoreError) {
        self.state
            .lock()
            .await
            .scripted_failures
            .entry(op)
            .or_default()
            .push_back(err);
    }

    pub async fn bills_snapshot(&self) -> Vec<BillRecord> {
        self.state.lock().await.bills.clone()
    }

    pub async fn uploads(&self) -> Vec<BillUpload> {
        self.state.lock().await.uploads.clone()
    }

    pub async fn updates(&self) -> Vec<BillUpdate> {
        self.state.lock().await.updates.clone()
    }

    /// Every operation attempted so far, failed ones included.
    pub async fn calls(&self) -> Vec<StoreOperation> {
        self.state.lock().await.calls.clone()
    }
}

impl Store for MemoryStore {
    fn bills(&self) -> &dyn BillsResource {
        self
    }
}

#[async_trait]
impl BillsResource for MemoryStore {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError> {
        let mut state = self.state.lock().await;
        state.begin(StoreOperation::List)?;
        Ok(state.bills.clone())
    }

    async fn create(&self, upload: BillUpload) -> Result<CreatedBill, StoreError> {
        let mut state = self.state.lock().await;
        state.begin(StoreOperation::Create)?;

        let key = BillId::new(format!("memory-{}", state.next_key));
        state.next_key += 1;
        let file_name = upload.file.base_name().to_string();
        let file_url = format!("memory://receipts/{key}/{file_name}");
        state.receipts.insert(
            key.clone(),
            PendingReceipt {
                file_url: file_url.clone(),
                file_name,
                email: upload.email.clone(),
            },
        );
        state.uploads.push(upload);
        info!(bill_id = %key, "stored receipt");

        Ok(CreatedBill { key, file_url })
    }

    async fn update(&self, update: BillUpdate) -> Result<BillRecord, StoreError> {
        let mut state = self.state.lock().await;
        state.begin(StoreOperation::Update)?;

        let receipt = state.receipts.remove(&update.selector);
        let existing = state.bills.iter().position(|b| b.id == update.selector);
        if receipt.is_none() && existing.is_none() {
            return Err(StoreError::status(404));
        }

        let draft = update.data.clone();
        let (file_url, file_name, email) = match receipt {
            Some(receipt) => (
                Some(receipt.file_url),
                Some(receipt.file_name),
                if draft.email.is_empty() {
                    receipt.email
                } else {
                    draft.email
                },
            ),
            None => (draft.file_url, draft.file_name, draft.email),
        };
        let record = BillRecord {
            id: update.selector.clone(),
            email,
            expense_type: draft.expense_type,
            name: draft.name,
            amount: draft.amount.unwrap_or_default() as f64,
            date: draft.date,
            vat: draft.vat,
            pct: draft.pct,
            commentary: draft.commentary,
            file_url,
            file_name,
            status: draft.status,
            comment_admin: None,
        };

        match existing {
            Some(index) => state.bills[index] = record.clone(),
            None => state.bills.push(record.clone()),
        }
        state.updates.push(update);
        info!(bill_id = %record.id, "stored bill");

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use shared::{
        domain::{BillStatus, ExpenseType},
        protocol::BillDraft,
    };

    use super::*;
    use crate::SelectedFile;

    fn upload(name: &str) -> BillUpload {
        BillUpload {
            file: SelectedFile::new(name, Some("image/jpeg".into()), vec![1, 2, 3]),
            email: "a@a".into(),
        }
    }

    fn draft() -> BillDraft {
        BillDraft {
            email: "a@a".into(),
            expense_type: ExpenseType::HotelEtLogement,
            name: "Séminaire billed".into(),
            amount: Some(400),
            date: "2004-04-04".into(),
            vat: "80".into(),
            pct: 20,
            commentary: "séminaire billed".into(),
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        }
    }

    #[tokio::test]
    async fn lists_fixture_bills() {
        let store = MemoryStore::with_fixtures();
        let bills = store.bills().list().await.expect("list");
        assert_eq!(bills.len(), 4);
    }

    #[tokio::test]
    async fn scripted_failure_applies_once() {
        let store = MemoryStore::with_fixtures();
        store
            .fail_next(StoreOperation::List, StoreError::status(500))
            .await;

        let err = store.bills().list().await.expect_err("scripted");
        assert_eq!(err.to_string(), "Erreur 500");
        store.bills().list().await.expect("second call succeeds");
        assert_eq!(
            store.calls().await,
            vec![StoreOperation::List, StoreOperation::List]
        );
    }

    #[tokio::test]
    async fn create_then_update_adds_bill_with_receipt() {
        let store = MemoryStore::new(Vec::new());
        let created = store
            .bills()
            .create(upload("C:\\fakepath\\test.jpg"))
            .await
            .expect("create");
        assert_eq!(created.key, BillId::new("memory-1"));
        assert!(created.file_url.ends_with("/test.jpg"));

        let record = store
            .bills()
            .update(BillUpdate {
                selector: created.key.clone(),
                data: draft(),
            })
            .await
            .expect("update");
        assert_eq!(record.id, created.key);
        assert_eq!(record.file_url.as_deref(), Some(created.file_url.as_str()));
        assert_eq!(record.file_name.as_deref(), Some("test.jpg"));
        assert_eq!(record.amount, 400.0);
        assert_eq!(store.bills_snapshot().await, vec![record]);
    }

    #[tokio::test]
    async fn update_of_unknown_bill_is_not_found() {
        let store = MemoryStore::new(Vec::new());
        let err = store
            .bills()
            .update(BillUpdate {
                selector: BillId::new("missing"),
                data: draft(),
            })
            .await
            .expect_err("unknown selector");
        assert_eq!(err, StoreError::status(404));
        assert!(store.updates().await.is_empty());
    }
}
