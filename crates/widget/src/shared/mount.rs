//! Mounting the widget into the host page

use crate::shared::dom::{BrowserDocument, HostDocument};
use contracts::shared::widget_config::WidgetConfig;
use leptos::prelude::*;
use std::rc::Rc;

/// Id of the element the widget renders into. Created once, never removed.
pub const CONTAINER_ID: &str = "clicki-referral-widget";

#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("widget component not found")]
    ComponentMissing,
    #[error("document has no <body>")]
    NoDocumentBody,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// Anything that can render itself from a resolved configuration
pub trait WidgetComponent {
    fn render(&self, config: WidgetConfig) -> AnyView;
}

#[derive(Clone, Default)]
pub struct ComponentRegistry {
    component: Option<Rc<dyn WidgetComponent>>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, component: Rc<dyn WidgetComponent>) {
        self.component = Some(component);
    }

    pub fn resolve(&self) -> Option<Rc<dyn WidgetComponent>> {
        self.component.clone()
    }
}

/// Reuse the container if the page already has it, otherwise append one to `<body>`
pub fn ensure_container<D: HostDocument>(doc: &D) -> Result<D::Container, MountError> {
    if let Some(container) = doc.find_container(CONTAINER_ID) {
        return Ok(container);
    }
    doc.create_container(CONTAINER_ID)
}

/// Capability check first: without a component nothing is touched on the page
pub fn prepare_mount<D: HostDocument>(
    doc: &D,
    registry: &ComponentRegistry,
) -> Result<(D::Container, Rc<dyn WidgetComponent>), MountError> {
    let component = registry.resolve().ok_or(MountError::ComponentMissing)?;
    let container = ensure_container(doc)?;
    Ok((container, component))
}

pub fn mount_widget(
    doc: &BrowserDocument,
    registry: &ComponentRegistry,
    config: WidgetConfig,
) -> Result<(), MountError> {
    let (container, component) = prepare_mount(doc, registry)?;
    leptos::mount::mount_to(container, move || component.render(config)).forget();
    Ok(())
}
