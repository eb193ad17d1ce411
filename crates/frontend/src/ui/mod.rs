//! View renderer: pure markup builders for every page of the employee space.

pub mod bills;
pub mod error_page;
pub mod format;
pub mod layout;
pub mod loading_page;
pub mod new_bill;

pub use bills::{BillRow, BillsView};

pub trait ViewRenderer: Send + Sync {
    fn bills_table(&self, rows: &[BillRow]) -> String;
    fn form_view(&self) -> String;
    fn error_view(&self, message: &str) -> String;
    fn loading_view(&self) -> String;
    /// Body of the receipt modal. `None` renders the missing-receipt placeholder.
    fn receipt_view(&self, file_url: Option<&str>, image_width: u32) -> String;

    /// Markup of the bills page for each load state.
    fn list_view(&self, view: BillsView<'_>) -> String {
        match view {
            BillsView::Loading => self.loading_view(),
            BillsView::Failed(message) => self.error_view(message),
            BillsView::Loaded(rows) => self.bills_table(rows),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ViewRenderer for HtmlRenderer {
    fn bills_table(&self, rows: &[BillRow]) -> String {
        bills::bills_ui(rows)
    }

    fn form_view(&self) -> String {
        new_bill::new_bill_ui()
    }

    fn error_view(&self, message: &str) -> String {
        error_page::error_page(message)
    }

    fn loading_view(&self) -> String {
        loading_page::loading_page()
    }

    fn receipt_view(&self, file_url: Option<&str>, image_width: u32) -> String {
        bills::receipt_modal_body(file_url, image_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PlainRenderer;

    impl ViewRenderer for PlainRenderer {
        fn bills_table(&self, rows: &[BillRow]) -> String {
            format!("table:{}", rows.len())
        }

        fn form_view(&self) -> String {
            "form".into()
        }

        fn error_view(&self, message: &str) -> String {
            format!("error:{message}")
        }

        fn loading_view(&self) -> String {
            "loading".into()
        }

        fn receipt_view(&self, _file_url: Option<&str>, image_width: u32) -> String {
            format!("receipt:{image_width}")
        }
    }

    #[test]
    fn list_view_renders_each_state_with_its_page() {
        let renderer = PlainRenderer;
        assert_eq!(renderer.list_view(BillsView::Loading), "loading");
        assert_eq!(renderer.list_view(BillsView::Failed("Erreur 500")), "error:Erreur 500");
        assert_eq!(renderer.list_view(BillsView::Loaded(&[])), "table:0");
    }

    #[test]
    fn html_renderer_uses_shared_pages() {
        assert!(HtmlRenderer.list_view(BillsView::Failed("Erreur 500")).contains("Erreur 500"));
        assert!(HtmlRenderer.list_view(BillsView::Loading).contains("Loading..."));
    }
}
