use std::sync::Arc;

use client_core::{MemoryStore, SelectedFile, StoreError, StoreOperation};
use shared::domain::BillId;

use crate::{
    test_support::{employee_session, rendered_dates},
    ui::new_bill::{AMOUNT, DATE, EXPENSE_NAME, PCT, VAT},
    DomEvent, Document, HtmlRenderer, Listener, NavIcon, RouteError, RoutePath, Router,
};

fn router(store: Arc<MemoryStore>) -> Router {
    Router::new(store, employee_session(), Arc::new(HtmlRenderer))
}

#[tokio::test]
async fn bills_route_highlights_window_icon_and_lists_bills() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();

    router.navigate(&mut doc, RoutePath::Bills).await;

    assert_eq!(router.current_path(), Some(RoutePath::Bills));
    assert_eq!(doc.active_icon(), Some(NavIcon::Window));
    assert!(doc.contains_text(" Mes notes de frais "));
    assert_eq!(rendered_dates(&doc).len(), 4);
    assert!(doc.is_bound(Listener::NavIcons));
    assert!(doc.is_bound(Listener::NewBillButton));
    assert!(doc.is_bound(Listener::IconEye));
}

#[tokio::test]
async fn new_bill_route_highlights_mail_icon_and_renders_form() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();

    router
        .navigate_hash(&mut doc, "#employee/bill/new")
        .await
        .expect("registered route");

    assert_eq!(router.current_path(), Some(RoutePath::NewBill));
    assert_eq!(doc.active_icon(), Some(NavIcon::Mail));
    assert!(doc.contains_text(" Envoyer une note de frais "));
    assert!(doc.contains_text(r#"data-testid="form-new-bill""#));
    assert!(doc.is_bound(Listener::FileInput));
    assert!(doc.is_bound(Listener::NewBillForm));
}

#[tokio::test]
async fn unknown_hash_is_rejected() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();

    let err = router
        .navigate_hash(&mut doc, "#admin/dashboard")
        .await
        .expect_err("unregistered");

    assert_eq!(err, RouteError::Unregistered("#admin/dashboard".into()));
    assert_eq!(router.current_path(), None);
    assert_eq!(doc.root_html(), "");
}

#[tokio::test]
async fn new_bill_button_opens_the_form() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();
    router.navigate(&mut doc, RoutePath::Bills).await;

    router.dispatch(&mut doc, DomEvent::ClickNewBill).await;

    assert_eq!(router.current_path(), Some(RoutePath::NewBill));
    assert!(doc.contains_text(r#"data-testid="form-new-bill""#));
    assert!(!doc.is_bound(Listener::NewBillButton));
}

#[tokio::test]
async fn nav_icons_switch_pages() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();
    router.navigate(&mut doc, RoutePath::NewBill).await;

    router
        .dispatch(&mut doc, DomEvent::ClickNavIcon(NavIcon::Window))
        .await;
    assert_eq!(router.current_path(), Some(RoutePath::Bills));
    assert_eq!(doc.active_icon(), Some(NavIcon::Window));

    router
        .dispatch(&mut doc, DomEvent::ClickNavIcon(NavIcon::Mail))
        .await;
    assert_eq!(router.current_path(), Some(RoutePath::NewBill));
    assert_eq!(doc.active_icon(), Some(NavIcon::Mail));
}

#[tokio::test]
async fn events_without_bound_listener_are_dropped() {
    let store = Arc::new(MemoryStore::with_fixtures());
    let mut router = router(store.clone());
    let mut doc = Document::new();
    router.navigate(&mut doc, RoutePath::Bills).await;

    router.dispatch(&mut doc, DomEvent::Submit).await;
    router.dispatch(&mut doc, DomEvent::FileChange).await;

    assert_eq!(router.current_path(), Some(RoutePath::Bills));
    assert_eq!(store.calls().await, vec![StoreOperation::List]);
}

#[tokio::test]
async fn eye_click_opens_receipt_modal() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();
    router.navigate(&mut doc, RoutePath::Bills).await;

    router
        .dispatch(
            &mut doc,
            DomEvent::ClickIconEye(BillId::new("47qAXb6fIm2zOKkLzMro")),
        )
        .await;

    let body = doc.modal_body().expect("modal shown");
    assert!(body.contains(r#"width="400""#));
    assert_eq!(router.current_path(), Some(RoutePath::Bills));
}

#[tokio::test]
async fn list_failure_renders_error_page() {
    let store = Arc::new(MemoryStore::with_fixtures());
    store
        .fail_next(StoreOperation::List, StoreError::status(404))
        .await;
    let mut router = router(store);
    let mut doc = Document::new();

    router.navigate(&mut doc, RoutePath::Bills).await;

    assert!(doc.contains_text("Erreur 404"));
    assert!(!doc.is_bound(Listener::NewBillButton));
    assert!(doc.is_bound(Listener::NavIcons));
}

#[tokio::test]
async fn submitted_bill_appears_on_the_list() {
    let store = Arc::new(MemoryStore::with_fixtures());
    let mut router = router(store.clone());
    let mut doc = Document::new();
    router.navigate(&mut doc, RoutePath::NewBill).await;

    doc.select_file(SelectedFile::new(
        "test.jpg",
        Some("image/jpeg".into()),
        b"receipt".to_vec(),
    ));
    router.dispatch(&mut doc, DomEvent::FileChange).await;
    doc.set_field(EXPENSE_NAME, "Vol Paris Londres");
    doc.set_field(DATE, "2024-05-02");
    doc.set_field(AMOUNT, "348");
    doc.set_field(VAT, "70");
    doc.set_field(PCT, "20");
    router.dispatch(&mut doc, DomEvent::Submit).await;

    assert_eq!(router.current_path(), Some(RoutePath::Bills));
    assert_eq!(rendered_dates(&doc).first().map(String::as_str), Some("2024-05-02"));
    assert!(doc.contains_text("Vol Paris Londres"));
    assert_eq!(
        store.calls().await,
        vec![
            StoreOperation::Create,
            StoreOperation::Update,
            StoreOperation::List
        ]
    );
}

#[tokio::test]
async fn form_view_renders_identically() {
    let mut router = router(Arc::new(MemoryStore::with_fixtures()));
    let mut doc = Document::new();

    router.navigate(&mut doc, RoutePath::NewBill).await;
    let first = doc.root_html().to_string();
    router.navigate(&mut doc, RoutePath::NewBill).await;

    assert_eq!(doc.root_html(), first);
}
