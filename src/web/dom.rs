// dom.rs - Thin wrappers over web-sys lookups and page side effects

use gloo::console;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{Document, Element, HtmlElement, Window};

use crate::controls::Fullscreen;
use crate::error::{Error, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(Error::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(Error::NoDocument)
}

/// Required element of a concrete type.
pub fn element<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Result<T> {
    doc.get_element_by_id(id)
        .ok_or_else(|| Error::MissingElement(id.to_string()))?
        .dyn_into::<T>()
        .map_err(|_| Error::WrongElement { id: id.to_string(), expected })
}

/// Optional control: a missing or mistyped element is warned about and skipped.
pub fn optional<T: JsCast>(doc: &Document, id: &str, expected: &'static str) -> Option<T> {
    match element(doc, id, expected) {
        Ok(el) => Some(el),
        Err(err) => {
            console::warn!("control skipped:", err.to_string());
            None
        }
    }
}

pub fn window_size(win: &Window) -> Result<(u32, u32)> {
    let w = win.inner_width()?.as_f64().unwrap_or(0.0);
    let h = win.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((w.max(0.0) as u32, h.max(0.0) as u32))
}

pub fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_display(el: &HtmlElement, value: &str) -> Result<()> {
    el.style().set_property("display", value)?;
    Ok(())
}

pub fn set_background(doc: &Document, color: &str) -> Result<()> {
    let body = doc.body().ok_or_else(|| Error::MissingElement("body".into()))?;
    body.style().set_property("background-color", color)?;
    Ok(())
}

pub fn toggle_fullscreen(doc: &Document) -> Result<()> {
    match Fullscreen::toggle(doc.fullscreen_element().is_some()) {
        Fullscreen::Enter => {
            let root = doc
                .document_element()
                .ok_or_else(|| Error::MissingElement("html".into()))?;
            request_fullscreen(&root)
        }
        Fullscreen::Exit => {
            doc.exit_fullscreen();
            Ok(())
        }
    }
}

// The typed binding drops the returned promise, so call through Reflect to
// catch async rejections too.
fn request_fullscreen(el: &Element) -> Result<()> {
    let request = Reflect::get(el, &JsValue::from_str("requestFullscreen"))?
        .dyn_into::<Function>()
        .map_err(|_| Error::Js("requestFullscreen unsupported".into()))?;
    let ret = request.call0(el)?;
    if let Ok(promise) = ret.dyn_into::<Promise>() {
        spawn_local(async move {
            if let Err(err) = JsFuture::from(promise).await {
                console::log!("Error attempting full-screen:", err);
            }
        });
    }
    Ok(())
}
