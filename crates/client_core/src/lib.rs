//! Store and session collaborators consumed by the Billed page controllers.

use async_trait::async_trait;
use shared::{
    domain::BillRecord,
    protocol::{BillUpdate, CreatedBill},
};
use thiserror::Error;

pub mod fixtures;
pub mod http;
pub mod memory;
pub mod session;
pub mod types;

pub use http::HttpStore;
pub use memory::{MemoryStore, StoreOperation};
pub use session::{LocalStorage, SessionAccessor, SessionError};
pub use types::{BillUpload, SelectedFile};

/// Failure of a store call. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Erreur {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("{0}")]
    Transport(String),
    #[error("invalid response from bills API: {0}")]
    Decode(String),
    #[error("invalid bills API url: {0}")]
    InvalidUrl(String),
    #[error("{0}")]
    Rejected(String),
}

impl StoreError {
    pub fn status(status: u16) -> Self {
        Self::Status {
            status,
            detail: None,
        }
    }
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::status(status.as_u16())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// The `bills` resource of the remote store.
#[async_trait]
pub trait BillsResource: Send + Sync {
    async fn list(&self) -> Result<Vec<BillRecord>, StoreError>;
    async fn create(&self, upload: BillUpload) -> Result<CreatedBill, StoreError>;
    async fn update(&self, update: BillUpdate) -> Result<BillRecord, StoreError>;
}

pub trait Store: Send + Sync {
    fn bills(&self) -> &dyn BillsResource;
}

#[cfg(test)]
#[path = "tests/http_tests.rs"]
mod http_tests;
