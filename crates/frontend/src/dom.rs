//! In-memory document the router renders into.
//!
//! Rendering replaces the root subtree, which also drops the form state, the
//! file input, the modal and every bound listener. Only the highlighted layout
//! icon and the pending alerts survive a render.

use std::collections::{HashMap, HashSet};

use client_core::SelectedFile;

use crate::router::RoutePath;

const DEFAULT_MODAL_WIDTH: u32 = 800;

/// Element groups a controller can attach a listener to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    NavIcons,
    NewBillButton,
    IconEye,
    FileInput,
    NewBillForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Window,
    Mail,
}

impl NavIcon {
    pub fn test_id(self) -> &'static str {
        match self {
            NavIcon::Window => "icon-window",
            NavIcon::Mail => "icon-mail",
        }
    }

    pub fn route(self) -> RoutePath {
        match self {
            NavIcon::Window => RoutePath::Bills,
            NavIcon::Mail => RoutePath::NewBill,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    root: String,
    fields: HashMap<String, String>,
    file_input: Option<SelectedFile>,
    alerts: Vec<String>,
    modal: Option<String>,
    modal_width: u32,
    banner: Option<String>,
    listeners: HashSet<Listener>,
    active_icon: Option<NavIcon>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            root: String::new(),
            fields: HashMap::new(),
            file_input: None,
            alerts: Vec::new(),
            modal: None,
            modal_width: DEFAULT_MODAL_WIDTH,
            banner: None,
            listeners: HashSet::new(),
            active_icon: None,
        }
    }

    pub fn with_modal_width(mut self, width: u32) -> Self {
        self.modal_width = width;
        self
    }

    pub fn render(&mut self, markup: impl Into<String>) {
        self.root = markup.into();
        self.fields.clear();
        self.file_input = None;
        self.modal = None;
        self.banner = None;
        self.listeners.clear();
    }

    pub fn root_html(&self) -> &str {
        &self.root
    }

    pub fn contains_text(&self, text: &str) -> bool {
        self.root.contains(text)
    }

    /// Current value of a form field, empty when the user never touched it.
    pub fn field(&self, test_id: &str) -> &str {
        self.fields.get(test_id).map(String::as_str).unwrap_or_default()
    }

    pub fn set_field(&mut self, test_id: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(test_id.into(), value.into());
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.file_input = Some(file);
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file_input.as_ref()
    }

    pub fn clear_file_input(&mut self) {
        self.file_input = None;
    }

    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn show_modal(&mut self, body: impl Into<String>) {
        self.modal = Some(body.into());
    }

    pub fn modal_body(&self) -> Option<&str> {
        self.modal.as_deref()
    }

    pub fn modal_width(&self) -> u32 {
        self.modal_width
    }

    pub fn set_banner(&mut self, message: impl Into<String>) {
        self.banner = Some(message.into());
    }

    pub fn clear_banner(&mut self) {
        self.banner = None;
    }

    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    pub fn bind(&mut self, listener: Listener) {
        self.listeners.insert(listener);
    }

    pub fn is_bound(&self, listener: Listener) -> bool {
        self.listeners.contains(&listener)
    }

    pub fn highlight(&mut self, icon: NavIcon) {
        self.active_icon = Some(icon);
    }

    pub fn active_icon(&self) -> Option<NavIcon> {
        self.active_icon
    }
}
