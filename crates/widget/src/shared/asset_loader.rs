//! Stylesheet and script loading before the widget mounts
//!
//! The widget's own stylesheet is compiled in and injected as a `<style>`.
//! Extra host stylesheets are attached eagerly. Scripts are an ordered fold:
//! script N+1 is not requested until script N has fired `load`, and the first
//! failure stops the chain. URLs already present in the document are skipped.

use crate::shared::dom::HostDocument;

/// Id of the injected `<style>` element
pub const WIDGET_STYLE_ID: &str = "clicki-referral-widget-style";

/// Positioning and look of every `crw-*` class
pub const WIDGET_CSS: &str = include_str!("../../style/widget.css");

/// Pause after the last script so late globals can finish registering
pub const SETTLE_DELAY_MS: u32 = 100;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to attach stylesheet {href}: {reason}")]
    Stylesheet { href: String, reason: String },
    #[error("failed to load script {src}")]
    Script { src: String },
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

/// External assets on top of the built-in stylesheet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetManifest {
    pub stylesheets: Vec<String>,
    /// Loaded strictly in this order
    pub scripts: Vec<String>,
}

/// Inject the built-in stylesheet once per page. Returns whether it was added.
pub fn attach_widget_style<D: HostDocument>(doc: &D) -> bool {
    if doc.has_element(WIDGET_STYLE_ID) {
        return false;
    }
    match doc.inject_style(WIDGET_STYLE_ID, WIDGET_CSS) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    }
}

/// Attach every stylesheet that is not on the page yet.
///
/// A stylesheet that cannot be attached is logged and skipped; the widget still
/// works unstyled. Returns how many links were added.
pub fn attach_stylesheets<D: HostDocument>(doc: &D, hrefs: &[String]) -> usize {
    let mut added = 0;
    for href in hrefs {
        if doc.has_stylesheet(href) {
            continue;
        }
        match doc.append_stylesheet(href) {
            Ok(()) => added += 1,
            Err(e) => log::warn!("{}", e),
        }
    }
    added
}

/// Load scripts one after another. Returns how many were actually requested.
pub async fn load_scripts_in_order<D: HostDocument>(
    doc: &D,
    srcs: &[String],
) -> Result<usize, LoadError> {
    let mut requested = 0;
    for src in srcs {
        if doc.has_script(src) {
            log::debug!("script already present: {}", src);
            continue;
        }
        doc.load_script(src).await?;
        requested += 1;
    }
    Ok(requested)
}

pub async fn load_assets<D: HostDocument>(
    doc: &D,
    manifest: &AssetManifest,
) -> Result<(), LoadError> {
    attach_widget_style(doc);
    let styles = attach_stylesheets(doc, &manifest.stylesheets);
    let scripts = load_scripts_in_order(doc, &manifest.scripts).await?;
    log::debug!("assets ready: {} stylesheet(s), {} script(s)", styles, scripts);
    Ok(())
}
