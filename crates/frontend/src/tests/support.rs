use std::sync::{Arc, Mutex};

use client_core::{fixtures, LocalStorage, SessionAccessor};
use shared::domain::{BillId, BillRecord, SessionUser, UserType};

use crate::{dom::Document, router::OnNavigate, RoutePath};

pub fn employee_session() -> Arc<dyn SessionAccessor> {
    let mut storage = LocalStorage::in_memory();
    storage
        .set_user(&SessionUser {
            user_type: UserType::Employee,
            email: "a@a".into(),
        })
        .expect("set user");
    Arc::new(storage)
}

#[derive(Clone, Default)]
pub struct NavigationLog {
    calls: Arc<Mutex<Vec<RoutePath>>>,
}

impl NavigationLog {
    pub fn on_navigate(&self) -> OnNavigate {
        let calls = self.calls.clone();
        OnNavigate::new(move |path| calls.lock().expect("nav log").push(path))
    }

    pub fn calls(&self) -> Vec<RoutePath> {
        self.calls.lock().expect("nav log").clone()
    }
}

pub fn bill_dated(id: &str, date: &str) -> BillRecord {
    let mut bill = fixtures::bills().remove(0);
    bill.id = BillId::new(id);
    bill.date = date.to_string();
    bill
}

/// Raw ISO dates of the rendered table rows, in document order.
pub fn rendered_dates(doc: &Document) -> Vec<String> {
    doc.root_html()
        .split(r#"data-date=""#)
        .skip(1)
        .filter_map(|chunk| chunk.split('"').next())
        .map(str::to_string)
        .collect()
}
