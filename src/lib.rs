/// Tab Strip - closeable, pinnable, drag-reorderable tabs with overflow
/// Built with Rust + WASM + Yew

mod drag;
mod layout;
mod ordering;
mod storage;
mod tab_data;
pub mod ui;

pub use drag::{DRAG_ACTIVATION_DISTANCE, DragController, DropTarget, Reorder, closest_center};
pub use layout::{OverflowLayout, TabWidths, WidthCache, compute_overflow};
pub use ordering::TabOrdering;
pub use storage::{LocalStorageStore, MemoryStore, STORAGE_KEY, SharedStore, TabStore};
pub use tab_data::{TabModel, default_tabs};

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Mount the demo app with the stock tab set
#[wasm_bindgen]
pub fn start_tab_strip() {
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps {
        initial_tabs: default_tabs(),
    })
    .render();
}

// Mount with a caller-supplied initial tab list (array of tab records)
#[wasm_bindgen]
pub fn start_tab_strip_with(initial_tabs: JsValue) -> Result<(), JsValue> {
    let tabs: Vec<TabModel> = serde_wasm_bindgen::from_value(initial_tabs)
        .map_err(|e| JsValue::from_str(&format!("invalid tab list: {e}")))?;
    yew::Renderer::<ui::app::App>::with_props(ui::app::AppProps { initial_tabs: tabs }).render();
    Ok(())
}
