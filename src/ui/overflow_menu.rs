/// Dropdown presenting the overflowed tabs

use crate::tab_data::TabModel;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverflowMenuProps {
    pub tabs: Vec<TabModel>,
    pub on_select: Callback<String>,
    pub on_pin_toggle: Callback<String>,
    pub on_close: Callback<String>,
}

/// Entries delegate straight to the ordering callbacks, same semantics as
/// the inline tabs. Open/closed is local state, reset on select.
#[function_component(OverflowMenu)]
pub fn overflow_menu(props: &OverflowMenuProps) -> Html {
    let is_open = use_state(|| false);

    let on_toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let entry = |tab: &TabModel| {
        let id = tab.id.clone();

        let on_entry_select = {
            let on_select = props.on_select.clone();
            let is_open = is_open.clone();
            let id = id.clone();
            Callback::from(move |_: MouseEvent| {
                on_select.emit(id.clone());
                is_open.set(false);
            })
        };

        let on_entry_pin = {
            let on_pin_toggle = props.on_pin_toggle.clone();
            let id = id.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_pin_toggle.emit(id.clone());
            })
        };

        let on_entry_close = {
            let on_close = props.on_close.clone();
            let id = id.clone();
            Callback::from(move |e: MouseEvent| {
                e.stop_propagation();
                on_close.emit(id.clone());
            })
        };

        html! {
            <div class="overflow-menu__entry" key={tab.id.clone()}>
                <button class="overflow-menu__select" onclick={on_entry_select}>
                    { &tab.title }
                </button>
                <button
                    class="overflow-menu__pin"
                    onclick={on_entry_pin}
                    aria-label={if tab.pinned { "Unpin tab" } else { "Pin tab" }}
                >
                    { if tab.pinned { "📌" } else { "📍" } }
                </button>
                <button class="overflow-menu__close" onclick={on_entry_close} aria-label="Close tab">
                    {"✕"}
                </button>
            </div>
        }
    };

    html! {
        <div class="overflow-menu">
            <button class="overflow-menu__trigger" onclick={on_toggle} aria-label="More tabs">
                {"⋯"}
            </button>
            if *is_open {
                <div class="overflow-menu__list">
                    { for props.tabs.iter().map(entry) }
                </div>
            }
        </div>
    }
}
