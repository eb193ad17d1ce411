use serde::{Deserialize, Serialize};

use crate::domain::{BillId, BillStatus, ExpenseType};

/// Response of the receipt upload (`POST bills`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBill {
    #[serde(alias = "id")]
    pub key: BillId,
    pub file_url: String,
}

/// Bill metadata persisted on submission. The receipt itself was already
/// uploaded, only its URL and name travel here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillDraft {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: ExpenseType,
    pub name: String,
    pub amount: Option<i64>,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillUpdate {
    pub selector: BillId,
    pub data: BillDraft,
}
