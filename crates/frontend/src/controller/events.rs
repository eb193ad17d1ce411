//! DOM events the host feeds into the router.

use shared::domain::BillId;

use crate::dom::{Listener, NavIcon};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    ClickNavIcon(NavIcon),
    ClickNewBill,
    ClickIconEye(BillId),
    /// The file input's selection changed; the new file is read from the document.
    FileChange,
    Submit,
}

impl DomEvent {
    pub fn listener(&self) -> Listener {
        match self {
            DomEvent::ClickNavIcon(_) => Listener::NavIcons,
            DomEvent::ClickNewBill => Listener::NewBillButton,
            DomEvent::ClickIconEye(_) => Listener::IconEye,
            DomEvent::FileChange => Listener::FileInput,
            DomEvent::Submit => Listener::NewBillForm,
        }
    }
}
