//! Reading the host page's configuration object
//!
//! The host sets `window.ClickiReferralConfig` before including the widget.
//! It is read exactly once at boot and turned into plain values. Fields are
//! parsed one by one, so a wrongly typed key only falls back for itself.

use crate::shared::asset_loader::AssetManifest;
use contracts::shared::widget_config::{lenient_string_list, ConfigError, WidgetConfigOverrides};
use serde::Deserialize;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "ClickiReferralConfig";

/// Everything the host may set: widget fields plus extra assets
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootOptions {
    #[serde(flatten)]
    pub widget: WidgetConfigOverrides,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub stylesheets: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient_string_list")]
    pub scripts: Option<Vec<String>>,
}

impl BootOptions {
    pub fn manifest(&self) -> AssetManifest {
        AssetManifest {
            stylesheets: self.stylesheets.clone().unwrap_or_default(),
            scripts: self.scripts.clone().unwrap_or_default(),
        }
    }
}

fn parse_host_value(value: JsValue) -> Result<BootOptions, ConfigError> {
    if value.is_undefined() || value.is_null() {
        return Ok(BootOptions::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Host(e.to_string()))
}

/// Read `window.ClickiReferralConfig`; a missing object means "all defaults".
///
/// Only a value that is not an object at all is rejected as a whole.
pub fn read_host_options() -> BootOptions {
    let Some(window) = web_sys::window() else {
        return BootOptions::default();
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .unwrap_or(JsValue::UNDEFINED);

    match parse_host_value(value) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            BootOptions::default()
        }
    }
}
