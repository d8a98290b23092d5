//! Host document access
//!
//! The loader and mount steps only talk to the page through [`HostDocument`],
//! so their sequencing can be exercised without a browser.

use crate::shared::asset_loader::LoadError;
use crate::shared::mount::MountError;
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, HtmlLinkElement, HtmlScriptElement};

#[async_trait(?Send)]
pub trait HostDocument {
    type Container;

    /// Is there already a `<link>` with exactly this `href`
    fn has_stylesheet(&self, href: &str) -> bool;

    fn append_stylesheet(&self, href: &str) -> Result<(), LoadError>;

    fn has_element(&self, id: &str) -> bool;

    /// Add a `<style id=..>` with the given text to `<head>`
    fn inject_style(&self, id: &str, css: &str) -> Result<(), LoadError>;

    /// Is there already a `<script>` with exactly this `src`
    fn has_script(&self, src: &str) -> bool;

    /// Inject a script and resolve once its `load` event fires
    async fn load_script(&self, src: &str) -> Result<(), LoadError>;

    fn find_container(&self, id: &str) -> Option<Self::Container>;

    fn create_container(&self, id: &str) -> Result<Self::Container, MountError>;
}

/// The real page, via `web-sys`
pub struct BrowserDocument {
    document: Document,
}

impl BrowserDocument {
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }

    fn exists(&self, selector: &str) -> bool {
        matches!(self.document.query_selector(selector), Ok(Some(_)))
    }

    fn body(&self) -> Option<HtmlElement> {
        self.document.body()
    }
}

/// Escape a value for use inside a double-quoted attribute selector
fn attr_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[async_trait(?Send)]
impl HostDocument for BrowserDocument {
    type Container = HtmlElement;

    fn has_stylesheet(&self, href: &str) -> bool {
        self.exists(&format!("link[href=\"{}\"]", attr_value(href)))
    }

    fn append_stylesheet(&self, href: &str) -> Result<(), LoadError> {
        let stylesheet_error = |reason: String| LoadError::Stylesheet {
            href: href.to_string(),
            reason,
        };

        let link: HtmlLinkElement = self
            .document
            .create_element("link")
            .map_err(|e| stylesheet_error(js_error(e)))?
            .dyn_into()
            .map_err(|_| stylesheet_error("not a <link> element".into()))?;
        link.set_rel("stylesheet");
        link.set_href(href);

        let head = self
            .document
            .head()
            .ok_or_else(|| stylesheet_error("document has no <head>".into()))?;
        head.append_child(&link)
            .map_err(|e| stylesheet_error(js_error(e)))?;
        Ok(())
    }

    fn has_element(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn inject_style(&self, id: &str, css: &str) -> Result<(), LoadError> {
        let style = self
            .document
            .create_element("style")
            .map_err(|e| LoadError::Dom(js_error(e)))?;
        style.set_id(id);
        style.set_text_content(Some(css));

        let head = self
            .document
            .head()
            .ok_or_else(|| LoadError::Dom("document has no <head>".into()))?;
        head.append_child(&style)
            .map_err(|e| LoadError::Dom(js_error(e)))?;
        Ok(())
    }

    fn has_script(&self, src: &str) -> bool {
        self.exists(&format!("script[src=\"{}\"]", attr_value(src)))
    }

    async fn load_script(&self, src: &str) -> Result<(), LoadError> {
        let script: HtmlScriptElement = self
            .document
            .create_element("script")
            .map_err(|e| LoadError::Dom(js_error(e)))?
            .dyn_into()
            .map_err(|_| LoadError::Dom("not a <script> element".into()))?;
        script.set_src(src);
        script.set_async(true);

        let loaded = js_sys::Promise::new(&mut |resolve, reject| {
            script.set_onload(Some(&resolve));
            script.set_onerror(Some(&reject));
        });

        let body = self
            .body()
            .ok_or_else(|| LoadError::Dom("document has no <body>".into()))?;
        body.append_child(&script)
            .map_err(|e| LoadError::Dom(js_error(e)))?;

        JsFuture::from(loaded)
            .await
            .map(|_| ())
            .map_err(|_| LoadError::Script {
                src: src.to_string(),
            })
    }

    fn find_container(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id)?.dyn_into().ok()
    }

    fn create_container(&self, id: &str) -> Result<HtmlElement, MountError> {
        let container: HtmlElement = self
            .document
            .create_element("div")
            .map_err(|e| MountError::Dom(js_error(e)))?
            .dyn_into()
            .map_err(|_| MountError::Dom("not an html element".into()))?;
        container.set_id(id);

        let body = self.body().ok_or(MountError::NoDocumentBody)?;
        body.append_child(&container)
            .map_err(|e| MountError::Dom(js_error(e)))?;
        Ok(container)
    }
}
