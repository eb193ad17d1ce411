use shared::domain::BillRecord;
use tracing::warn;

use super::{
    format::{escape_html, format_date},
    layout::vertical_layout,
};

pub const NO_RECEIPT_PLACEHOLDER: &str = "Aucun justificatif disponible";

/// A bill as displayed in the table. The raw record is kept for ordering and
/// for the receipt preview.
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    pub record: BillRecord,
    pub display_date: String,
    pub display_status: &'static str,
}

impl BillRow {
    pub fn from_record(record: BillRecord) -> Self {
        let display_date = match format_date(&record.date) {
            Ok(formatted) => formatted,
            Err(err) => {
                warn!(bill_id = %record.id, date = %record.date, error = %err, "keeping unformatted bill date");
                record.date.clone()
            }
        };
        Self {
            display_status: record.status.display_label(),
            display_date,
            record,
        }
    }
}

/// Orders rows latest first on the raw ISO date; equal dates keep store order.
pub fn sort_latest_first(rows: &mut [BillRow]) {
    rows.sort_by(|a, b| b.record.date.cmp(&a.record.date));
}

#[derive(Debug, Clone, Copy)]
pub enum BillsView<'a> {
    Loading,
    Loaded(&'a [BillRow]),
    Failed(&'a str),
}

pub fn bills_ui(rows: &[BillRow]) -> String {
    let body: String = rows.iter().map(row).collect();
    format!(
        r#"<div class="layout">
    {layout}
    <div class="content">
      <div class="content-header">
        <div class="content-title" data-testid="content-title"> Mes notes de frais </div>
        <button type="button" data-testid="btn-new-bill" class="btn btn-primary">Nouvelle note de frais</button>
      </div>
      <div id="data-table">
        <table id="example" class="table table-striped" style="width:100%">
          <thead>
            <tr>
              <th>Type</th>
              <th>Nom</th>
              <th>Date</th>
              <th>Montant</th>
              <th>Statut</th>
              <th>Actions</th>
            </tr>
          </thead>
          <tbody data-testid="tbody">{body}</tbody>
        </table>
      </div>
    </div>
    <div class="modal fade" id="modaleFile" tabindex="-1" role="dialog" aria-hidden="true">
      <div class="modal-dialog modal-dialog-centered modal-lg" role="document">
        <div class="modal-content">
          <div class="modal-header">
            <h5 class="modal-title">Justificatif</h5>
          </div>
          <div class="modal-body"></div>
        </div>
      </div>
    </div>
  </div>"#,
        layout = vertical_layout(120),
    )
}

fn row(bill: &BillRow) -> String {
    let record = &bill.record;
    format!(
        r#"
            <tr data-bill-id="{id}" data-date="{raw_date}">
              <td>{kind}</td>
              <td>{name}</td>
              <td>{date}</td>
              <td>{amount} €</td>
              <td>{status}</td>
              <td>{actions}</td>
            </tr>"#,
        id = escape_html(record.id.as_str()),
        raw_date = escape_html(&record.date),
        kind = escape_html(record.expense_type.label()),
        name = escape_html(&record.name),
        date = escape_html(&bill.display_date),
        amount = record.amount,
        status = bill.display_status,
        actions = actions(record.file_url.as_deref()),
    )
}

fn actions(file_url: Option<&str>) -> String {
    format!(
        r#"<div class="icon-actions"><div id="eye" data-testid="icon-eye" data-bill-url="{url}"></div></div>"#,
        url = escape_html(file_url.unwrap_or_default()),
    )
}

pub fn receipt_modal_body(file_url: Option<&str>, image_width: u32) -> String {
    match file_url.filter(|url| !url.trim().is_empty()) {
        Some(url) => format!(
            r#"<div style="text-align: center;" class="bill-proof-container"><img width="{image_width}" src="{src}" alt="Bill" /></div>"#,
            src = escape_html(url),
        ),
        None => format!(
            r#"<div class="bill-proof-container"><p data-testid="no-receipt">{NO_RECEIPT_PLACEHOLDER}</p></div>"#
        ),
    }
}
