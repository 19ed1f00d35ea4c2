/// One inline tab in the visible strip

use crate::tab_data::TabModel;
use web_sys::{MouseEvent, PointerEvent};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabViewProps {
    pub tab: TabModel,
    #[prop_or(false)]
    pub active: bool,
    #[prop_or(false)]
    pub dragging: bool,
    pub on_select: Callback<String>,
    pub on_pin_toggle: Callback<String>,
    pub on_close: Callback<String>,
    pub on_pointer_down: Callback<(String, PointerEvent)>,
}

#[function_component(TabView)]
pub fn tab_view(props: &TabViewProps) -> Html {
    let id = props.tab.id.clone();

    let onclick = {
        let on_select = props.on_select.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
    };

    let onpointerdown = {
        let on_pointer_down = props.on_pointer_down.clone();
        let id = id.clone();
        Callback::from(move |e: PointerEvent| {
            // Capture so move/up keep arriving even once the pointer
            // leaves the tab mid-drag.
            if let Some(el) = e.target_dyn_into::<web_sys::Element>() {
                let _ = el.set_pointer_capture(e.pointer_id());
            }
            on_pointer_down.emit((id.clone(), e));
        })
    };

    // Pin/close must never start a drag
    let stop_pointer = Callback::from(|e: PointerEvent| e.stop_propagation());

    let on_pin_click = {
        let on_pin_toggle = props.on_pin_toggle.clone();
        let id = id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_pin_toggle.emit(id.clone());
        })
    };

    let on_close_click = {
        let on_close = props.on_close.clone();
        let id = id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(id.clone());
        })
    };

    html! {
        <div
            class={classes!(
                "tab",
                props.active.then_some("tab--active"),
                props.dragging.then_some("tab--dragging"),
            )}
            data-tab-id={props.tab.id.clone()}
            onclick={onclick}
            onpointerdown={onpointerdown}
        >
            <span class="tab__title">{ &props.tab.title }</span>
            <button
                class="tab__pin"
                onpointerdown={stop_pointer.clone()}
                onclick={on_pin_click}
                aria-label={if props.tab.pinned { "Unpin tab" } else { "Pin tab" }}
            >
                { if props.tab.pinned { "📌" } else { "📍" } }
            </button>
            <button
                class="tab__close"
                onpointerdown={stop_pointer}
                onclick={on_close_click}
                aria-label="Close tab"
            >
                {"✕"}
            </button>
        </div>
    }
}
