//! Referral widget UI Module
//!
//! MVVM, same split as the other details screens:
//! - view_model.rs: session state and commands
//! - view.rs: Leptos components (pure UI)

mod view;
mod view_model;

pub use view::ReferralWidget;
pub use view_model::ReferralWidgetViewModel;

use crate::shared::mount::WidgetComponent;
use contracts::shared::widget_config::WidgetConfig;
use leptos::prelude::*;

/// Registered with the mount step at boot
pub struct ReferralWidgetComponent;

impl WidgetComponent for ReferralWidgetComponent {
    fn render(&self, config: WidgetConfig) -> AnyView {
        view! { <ReferralWidget config=config /> }.into_any()
    }
}
