//! Navigation and page controllers of the Billed employee application.
//!
//! The [`router::Router`] renders pages into a [`dom::Document`] and forwards
//! DOM events to the active page controller. Controllers never see the router;
//! they request view transitions through the injected [`router::OnNavigate`].

pub mod controller;
pub mod dom;
pub mod router;
pub mod ui;

pub use controller::{
    bills::BillsController,
    events::DomEvent,
    new_bill::{DraftUpload, NewBillController},
};
pub use dom::{Document, Listener, NavIcon};
pub use router::{OnNavigate, RouteError, RoutePath, Router};
pub use ui::{HtmlRenderer, ViewRenderer};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "tests/router_tests.rs"]
mod router_tests;
