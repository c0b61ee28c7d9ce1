use shared::{SectionBounds, anchor_scroll_top};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollRestoration, ScrollToOptions,
};

pub const SHAKE_STYLE_ID: &str = "shake-keyframes";

const SHAKE_KEYFRAMES: &str = "
@keyframes shake {
  0%, 100% { transform: translateX(0); }
  10%, 30%, 50%, 70%, 90% { transform: translateX(-5px); }
  20%, 40%, 60%, 80% { transform: translateX(5px); }
}
";

/// Adds the shake keyframes to `<head>` unless they are already there.
pub fn inject_keyframes() -> Result<(), JsValue> {
    let doc = gloo_utils::document();

    if doc.get_element_by_id(SHAKE_STYLE_ID).is_some() {
        return Ok(());
    }

    let Some(head) = doc.head() else {
        log::warn!("no <head>, shake animation unavailable");
        return Ok(());
    };

    let style = doc.create_element("style")?;
    style.set_id(SHAKE_STYLE_ID);
    style.set_text_content(Some(SHAKE_KEYFRAMES));
    head.append_child(&style)?;

    Ok(())
}

pub fn disable_scroll_restoration() {
    match gloo_utils::window().history() {
        Ok(history) => {
            if let Err(e) = history.set_scroll_restoration(ScrollRestoration::Manual) {
                log::warn!("scroll restoration: {e:?}");
            }
        }
        Err(e) => log::warn!("no history: {e:?}"),
    }
}

pub fn document_loaded() -> bool {
    gloo_utils::document().ready_state() == "complete"
}

pub fn mark_body_loaded() {
    let Some(body) = gloo_utils::document().body() else {
        log::warn!("no <body> to mark loaded");
        return;
    };

    if let Err(e) = body.class_list().add_1("loaded") {
        log::warn!("mark loaded: {e:?}");
    }
}

pub fn scroll_y() -> f64 {
    gloo_utils::window().scroll_y().unwrap_or_default()
}

pub fn viewport_height() -> f64 {
    gloo_utils::window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default()
}

pub fn smooth_scroll_to(top: f64) {
    let opts = ScrollToOptions::new();
    opts.set_top(top);
    opts.set_behavior(ScrollBehavior::Smooth);
    gloo_utils::window().scroll_to_with_scroll_to_options(&opts);
}

/// Scrolls to the element with `id`, leaving room for the navbar.
///
/// Returns `false` if there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(target) = gloo_utils::document()
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
    else {
        log::debug!("anchor target missing: {id}");
        return false;
    };

    smooth_scroll_to(f64::from(anchor_scroll_top(target.offset_top())));
    true
}

pub fn scroll_into_view_nearest(elem: &Element) {
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    opts.set_block(ScrollLogicalPosition::Nearest);
    elem.scroll_into_view_with_scroll_into_view_options(&opts);
}

/// every `section[id]` currently in the document, in document order
pub fn section_bounds() -> Vec<SectionBounds> {
    let Ok(nodes) = gloo_utils::document().query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|idx| nodes.item(idx))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| SectionBounds {
            id: section.id(),
            offset_top: section.offset_top(),
            offset_height: section.offset_height(),
        })
        .collect()
}

pub fn set_styles(elem: &HtmlElement, props: &[(&str, &str)]) {
    let style = elem.style();
    for (name, value) in props {
        if let Err(e) = style.set_property(name, value) {
            log::warn!("style {name}: {e:?}");
        }
    }
}
