pub mod domain;
pub mod shared;
pub mod usecases;

use crate::domain::a001_referral::ui::widget::ReferralWidgetComponent;
use crate::shared::asset_loader::{load_assets, SETTLE_DELAY_MS};
use crate::shared::dom::BrowserDocument;
use crate::shared::host_config::{read_host_options, BootOptions};
use crate::shared::mount::{mount_widget, ComponentRegistry};
use contracts::shared::widget_config::WidgetConfig;
use gloo_timers::future::TimeoutFuture;
use std::rc::Rc;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;

/// Resolve configuration, load assets, then mount.
///
/// Any failure is logged and leaves the host page untouched.
pub fn boot(options: BootOptions) {
    let config = WidgetConfig::resolve(Some(&options.widget));
    let manifest = options.manifest();

    let mut registry = ComponentRegistry::new();
    registry.register(Rc::new(ReferralWidgetComponent));

    spawn_local(async move {
        let Some(document) = BrowserDocument::current() else {
            log::error!("Clicki Referral widget: no document available");
            return;
        };

        if let Err(e) = load_assets(&document, &manifest).await {
            log::error!("Error loading Clicki Referral widget: {}", e);
            return;
        }
        TimeoutFuture::new(SETTLE_DELAY_MS).await;

        match mount_widget(&document, &registry, config) {
            Ok(()) => log::info!("Clicki Referral widget mounted"),
            Err(e) => log::error!("Error mounting Clicki Referral widget: {}", e),
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    boot(read_host_options());
}
