use std::{fmt, str::FromStr, sync::Arc};

use client_core::{SessionAccessor, Store};
use crossbeam_channel::{unbounded, Receiver, Sender};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    controller::{bills::BillsController, events::DomEvent, new_bill::NewBillController},
    dom::{Document, Listener, NavIcon},
    ui::ViewRenderer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutePath {
    Bills,
    NewBill,
}

impl RoutePath {
    pub fn as_hash(self) -> &'static str {
        match self {
            RoutePath::Bills => "#employee/bills",
            RoutePath::NewBill => "#employee/bill/new",
        }
    }

    fn icon(self) -> NavIcon {
        match self {
            RoutePath::Bills => NavIcon::Window,
            RoutePath::NewBill => NavIcon::Mail,
        }
    }
}

impl fmt::Display for RoutePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_hash())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route registered for '{0}'")]
    Unregistered(String),
}

impl FromStr for RoutePath {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "#employee/bills" => Ok(RoutePath::Bills),
            "#employee/bill/new" => Ok(RoutePath::NewBill),
            other => Err(RouteError::Unregistered(other.to_string())),
        }
    }
}

/// Navigation capability handed to controllers.
#[derive(Clone)]
pub struct OnNavigate(Arc<dyn Fn(RoutePath) + Send + Sync>);

impl OnNavigate {
    pub fn new(f: impl Fn(RoutePath) + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, path: RoutePath) {
        (self.0)(path)
    }
}

impl fmt::Debug for OnNavigate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OnNavigate")
    }
}

enum ActivePage {
    Bills(BillsController),
    NewBill(NewBillController),
}

pub struct Router {
    store: Arc<dyn Store>,
    session: Arc<dyn SessionAccessor>,
    renderer: Arc<dyn ViewRenderer>,
    nav_tx: Sender<RoutePath>,
    nav_rx: Receiver<RoutePath>,
    page: Option<ActivePage>,
    current: Option<RoutePath>,
}

impl Router {
    pub fn new(
        store: Arc<dyn Store>,
        session: Arc<dyn SessionAccessor>,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Self {
        let (nav_tx, nav_rx) = unbounded();
        Self {
            store,
            session,
            renderer,
            nav_tx,
            nav_rx,
            page: None,
            current: None,
        }
    }

    /// Navigation requests are queued and served once the running handler returns.
    pub fn on_navigate(&self) -> OnNavigate {
        let tx = self.nav_tx.clone();
        OnNavigate::new(move |path| {
            if tx.send(path).is_err() {
                warn!(path = path.as_hash(), "router gone, navigation request dropped");
            }
        })
    }

    pub fn current_path(&self) -> Option<RoutePath> {
        self.current
    }

    pub async fn navigate(&mut self, doc: &mut Document, path: RoutePath) {
        self.enter(doc, path).await;
        self.drain_navigation(doc).await;
    }

    pub async fn navigate_hash(&mut self, doc: &mut Document, hash: &str) -> Result<(), RouteError> {
        let path = hash.parse()?;
        self.navigate(doc, path).await;
        Ok(())
    }

    /// Forwards an event to the active page if its listener is currently bound.
    pub async fn dispatch(&mut self, doc: &mut Document, event: DomEvent) {
        if !doc.is_bound(event.listener()) {
            debug!(?event, "no listener bound, event dropped");
            return;
        }

        match (&mut self.page, event) {
            (_, DomEvent::ClickNavIcon(icon)) => {
                if self.nav_tx.send(icon.route()).is_err() {
                    warn!(icon = icon.test_id(), "navigation queue closed");
                }
            }
            (Some(ActivePage::Bills(page)), DomEvent::ClickNewBill) => {
                page.handle_click_new_bill()
            }
            (Some(ActivePage::Bills(page)), DomEvent::ClickIconEye(bill_id)) => {
                page.handle_click_icon_eye(doc, &bill_id)
            }
            (Some(ActivePage::NewBill(page)), DomEvent::FileChange) => {
                page.handle_change_file(doc).await
            }
            (Some(ActivePage::NewBill(page)), DomEvent::Submit) => page.handle_submit(doc).await,
            (_, event) => debug!(?event, "event not handled by the active page"),
        }

        self.drain_navigation(doc).await;
    }

    async fn drain_navigation(&mut self, doc: &mut Document) {
        while let Ok(path) = self.nav_rx.try_recv() {
            self.enter(doc, path).await;
        }
    }

    async fn enter(&mut self, doc: &mut Document, path: RoutePath) {
        info!(path = path.as_hash(), "navigating");
        self.page = None;
        self.current = Some(path);

        let page = match path {
            RoutePath::Bills => {
                let mut page = BillsController::new(
                    self.renderer.clone(),
                    self.on_navigate(),
                    self.store.clone(),
                    self.session.clone(),
                );
                page.activate(doc).await;
                ActivePage::Bills(page)
            }
            RoutePath::NewBill => {
                doc.render(self.renderer.form_view());
                ActivePage::NewBill(NewBillController::new(
                    doc,
                    self.on_navigate(),
                    self.store.clone(),
                    self.session.clone(),
                ))
            }
        };

        doc.bind(Listener::NavIcons);
        doc.highlight(path.icon());
        self.page = Some(page);
    }
}
