use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    js_sys::Array,
};

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Calls `on_visible` whenever one of the observed elements intersects the
/// viewport. Disconnects on drop.
pub struct VisibilityObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl VisibilityObserver {
    pub fn new<F>(threshold: f64, root_margin: Option<&str>, on_visible: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let callback = ObserverCallback::new(move |entries: Array, _: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());

            if visible {
                on_visible();
            }
        });

        let opts = IntersectionObserverInit::new();
        opts.set_threshold(&JsValue::from_f64(threshold));
        if let Some(root_margin) = root_margin {
            opts.set_root_margin(root_margin);
        }

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, elem: &Element) {
        self.observer.observe(elem);
    }
}

impl Drop for VisibilityObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
