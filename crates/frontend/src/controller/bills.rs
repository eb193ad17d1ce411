//! Bills list page.

use std::sync::Arc;

use client_core::{SessionAccessor, Store, StoreError};
use shared::domain::BillId;
use tracing::{debug, error, info};

use crate::{
    dom::{Document, Listener},
    router::{OnNavigate, RoutePath},
    ui::{
        bills::{sort_latest_first, BillRow, BillsView},
        ViewRenderer,
    },
};

pub struct BillsController {
    renderer: Arc<dyn ViewRenderer>,
    on_navigate: OnNavigate,
    store: Arc<dyn Store>,
    session: Arc<dyn SessionAccessor>,
    rows: Vec<BillRow>,
}

impl BillsController {
    pub fn new(
        renderer: Arc<dyn ViewRenderer>,
        on_navigate: OnNavigate,
        store: Arc<dyn Store>,
        session: Arc<dyn SessionAccessor>,
    ) -> Self {
        Self {
            renderer,
            on_navigate,
            store,
            session,
            rows: Vec::new(),
        }
    }

    /// Fetches the bills, latest first.
    pub async fn get_bills(&self) -> Result<Vec<BillRow>, StoreError> {
        let records = self.store.bills().list().await?;
        let mut rows: Vec<BillRow> = records.into_iter().map(BillRow::from_record).collect();
        sort_latest_first(&mut rows);
        Ok(rows)
    }

    /// Renders the loading page, then the table or the error page.
    pub async fn activate(&mut self, doc: &mut Document) {
        doc.render(self.renderer.list_view(BillsView::Loading));

        match self.get_bills().await {
            Ok(rows) => {
                let user = self.session.get_user().map(|u| u.email).unwrap_or_default();
                info!(user = %user, count = rows.len(), "bills loaded");
                doc.render(self.renderer.list_view(BillsView::Loaded(&rows)));
                doc.bind(Listener::NewBillButton);
                if !rows.is_empty() {
                    doc.bind(Listener::IconEye);
                }
                self.rows = rows;
            }
            Err(err) => {
                error!(error = %err, "failed to load bills");
                let message = err.to_string();
                doc.render(self.renderer.list_view(BillsView::Failed(&message)));
            }
        }
    }

    pub fn rows(&self) -> &[BillRow] {
        &self.rows
    }

    pub fn handle_click_new_bill(&self) {
        self.on_navigate.call(RoutePath::NewBill);
    }

    pub fn handle_click_icon_eye(&self, doc: &mut Document, bill_id: &BillId) {
        let Some(row) = self.rows.iter().find(|row| &row.record.id == bill_id) else {
            debug!(%bill_id, "eye clicked for a bill that is not displayed");
            return;
        };
        let image_width = doc.modal_width() / 2;
        let body = self
            .renderer
            .receipt_view(row.record.file_url.as_deref(), image_width);
        doc.show_modal(body);
    }
}

#[cfg(test)]
#[path = "tests/bills_tests.rs"]
mod tests;
