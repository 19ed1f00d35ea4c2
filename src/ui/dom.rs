/// DOM helpers: geometry measurement, drop targets, debounced timers

use crate::drag::DropTarget;
use crate::layout::WidthCache;
use crate::tab_data::TabModel;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

fn tab_selector(id: &str) -> String {
    format!("[data-tab-id=\"{}\"]", id)
}

/// Record the rendered width of every tab currently in the DOM. Tabs not
/// rendered (overflowed) keep their cached width.
pub fn measure_tab_widths<'a>(
    container: &HtmlElement,
    tabs: impl Iterator<Item = &'a TabModel>,
    cache: &mut WidthCache,
) {
    for tab in tabs {
        if let Ok(Some(el)) = container.query_selector(&tab_selector(&tab.id)) {
            cache.set(&tab.id, el.get_bounding_client_rect().width());
        }
    }
}

/// Centers of the rendered tabs, for closest-center drop resolution
pub fn collect_drop_targets<'a>(
    container: &HtmlElement,
    tabs: impl Iterator<Item = &'a TabModel>,
) -> Vec<DropTarget> {
    let mut targets = Vec::new();
    for tab in tabs {
        if let Ok(Some(el)) = container.query_selector(&tab_selector(&tab.id)) {
            let rect = el.get_bounding_client_rect();
            targets.push(DropTarget {
                id: tab.id.clone(),
                center_x: rect.x() + rect.width() / 2.0,
                center_y: rect.y() + rect.height() / 2.0,
            });
        }
    }
    targets
}

/// Trailing-edge debounce over `window.setTimeout`. Scheduling again
/// within the window restarts the timer, so only the last call runs.
///
/// The `Closure` is retained next to its timeout handle; clearing the
/// timer drops both, so a cancelled callback is freed instead of staying
/// owned by JS forever.
pub struct Debouncer {
    delay_ms: i32,
    pending: RefCell<Option<(i32, Closure<dyn FnMut()>)>>,
}

impl Debouncer {
    pub fn new(delay_ms: i32) -> Debouncer {
        Debouncer {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Some((handle, _callback)) = self.pending.borrow_mut().take() {
            window.clear_timeout_with_handle(handle);
        }
        let mut f = Some(f);
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Some(f) = f.take() {
                f();
            }
        });
        if let Ok(handle) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.delay_ms,
        ) {
            // A fired closure lingers here until the next schedule or
            // teardown; clearing an elapsed handle is a no-op.
            *self.pending.borrow_mut() = Some((handle, callback));
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some((handle, _callback)) = self.pending.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
        }
    }
}
