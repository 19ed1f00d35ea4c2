/// Tab strip container: owns the ordering and drives layout, drag, and
/// persistence

use crate::drag::DragController;
use crate::layout::{OverflowLayout, WidthCache, compute_overflow};
use crate::ordering::TabOrdering;
use crate::storage::SharedStore;
use crate::tab_data::TabModel;
use crate::ui::dom::{Debouncer, collect_drop_targets, measure_tab_widths};
use crate::ui::overflow_menu::OverflowMenu;
use crate::ui::tab::TabView;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, PointerEvent};
use yew::prelude::*;

/// Trailing-edge delay coalescing resize bursts
const RESIZE_DEBOUNCE_MS: i32 = 100;

#[derive(Properties, PartialEq)]
pub struct TabStripProps {
    /// Used when the store holds no snapshot
    pub initial_tabs: Vec<TabModel>,
    /// Current navigation location; the tab whose url matches is active
    pub current_location: AttrValue,
    /// Navigation collaborator
    pub on_navigate: Callback<String>,
    /// Injected persistence adapter
    #[prop_or_else(SharedStore::local)]
    pub store: SharedStore,
}

#[function_component(TabStrip)]
pub fn tab_strip(props: &TabStripProps) -> Html {
    let tabs = use_state({
        let store = props.store.clone();
        let initial = props.initial_tabs.clone();
        move || store.load().unwrap_or_else(|| TabOrdering::new(initial))
    });
    // Everything starts visible so the first measurement pass sees every tab
    let layout = use_state({
        let tabs = tabs.clone();
        move || OverflowLayout::all_visible(&tabs)
    });
    let widths = use_mut_ref(WidthCache::new);
    let drag = use_mut_ref(DragController::new);
    let drag_active = use_state_eq(|| None::<String>);
    let just_dragged = use_mut_ref(|| false);
    let container_ref = use_node_ref();
    let relayout_epoch = use_state(|| 0u32);

    // Persist the full ordering on every change (best-effort)
    {
        let store = props.store.clone();
        use_effect_with((*tabs).clone(), move |tabs| {
            store.save(tabs);
            || ()
        });
    }

    // After every render: refresh measured widths, recompute the partition,
    // publish it only when it actually changed. The equality guard is what
    // terminates the render->measure->render loop.
    {
        let tabs = tabs.clone();
        let layout = layout.clone();
        let widths = widths.clone();
        let container_ref = container_ref.clone();
        use_effect(move || {
            if let Some(container) = container_ref.cast::<HtmlElement>() {
                let mut cache = widths.borrow_mut();
                measure_tab_widths(&container, tabs.iter(), &mut cache);
                cache.retain(|id| tabs.contains(id));

                let next = compute_overflow(&tabs, &*cache, f64::from(container.client_width()));
                if *layout != next {
                    log::debug!(
                        "overflow layout: {} visible, {} overflowed",
                        next.visible.len(),
                        next.overflow.len()
                    );
                    layout.set(next);
                }
            }
            || ()
        });
    }

    // Debounced window-resize subscription; each signal restarts the timer
    // and the trailing edge forces a re-render (and thus a re-measure).
    {
        let relayout_epoch = relayout_epoch.clone();
        use_effect_with((), move |_| {
            let debouncer = Debouncer::new(RESIZE_DEBOUNCE_MS);
            let ticks = Rc::new(Cell::new(0u32));
            let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
                let relayout_epoch = relayout_epoch.clone();
                let ticks = Rc::clone(&ticks);
                debouncer.schedule(move || {
                    ticks.set(ticks.get().wrapping_add(1));
                    relayout_epoch.set(ticks.get());
                });
            });
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref());
            }
            move || {
                if let Some(window) = web_sys::window() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        listener.as_ref().unchecked_ref(),
                    );
                }
                drop(listener);
            }
        });
    }

    let on_pin_toggle = {
        let tabs = tabs.clone();
        Callback::from(move |id: String| {
            let mut next = (*tabs).clone();
            if next.toggle_pin(&id) {
                tabs.set(next);
            }
        })
    };

    let on_close = {
        let tabs = tabs.clone();
        Callback::from(move |id: String| {
            let mut next = (*tabs).clone();
            if next.close(&id) {
                tabs.set(next);
            }
        })
    };

    let on_select = {
        let tabs = tabs.clone();
        let on_navigate = props.on_navigate.clone();
        let just_dragged = just_dragged.clone();
        Callback::from(move |id: String| {
            // The click that ends a drag is not a selection
            if just_dragged.replace(false) {
                return;
            }
            if let Some(tab) = tabs.get(&id) {
                on_navigate.emit(tab.url.clone());
            }
        })
    };

    let on_tab_pointer_down = {
        let drag = drag.clone();
        Callback::from(move |(id, e): (String, PointerEvent)| {
            drag.borrow_mut()
                .pointer_down(&id, f64::from(e.client_x()), f64::from(e.client_y()));
        })
    };

    let onpointermove = {
        let drag = drag.clone();
        let drag_active = drag_active.clone();
        Callback::from(move |e: PointerEvent| {
            let activated = drag
                .borrow_mut()
                .pointer_move(f64::from(e.client_x()), f64::from(e.client_y()));
            if activated.is_some() {
                drag_active.set(activated);
            }
        })
    };

    let onpointerup = {
        let drag = drag.clone();
        let drag_active = drag_active.clone();
        let just_dragged = just_dragged.clone();
        let tabs = tabs.clone();
        let container_ref = container_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let was_dragging = drag.borrow().is_dragging();
            let targets = container_ref
                .cast::<HtmlElement>()
                .map(|container| collect_drop_targets(&container, tabs.iter()))
                .unwrap_or_default();
            let outcome = drag
                .borrow_mut()
                .release(f64::from(e.client_x()), f64::from(e.client_y()), &targets);
            drag_active.set(None);
            if was_dragging {
                *just_dragged.borrow_mut() = true;
            }
            if let Some(request) = outcome {
                let mut next = (*tabs).clone();
                if next.reorder(&request.from_id, &request.to_id) {
                    tabs.set(next);
                }
            }
        })
    };

    let onpointercancel = {
        let drag = drag.clone();
        let drag_active = drag_active.clone();
        Callback::from(move |_: PointerEvent| {
            drag.borrow_mut().cancel();
            drag_active.set(None);
        })
    };

    let active_id = tabs.active_tab(&props.current_location).map(|t| t.id.clone());

    html! {
        <div class="tab-strip">
            <div
                ref={container_ref}
                class="tab-strip__row"
                onpointermove={onpointermove}
                onpointerup={onpointerup}
                onpointercancel={onpointercancel}
            >
                { for layout.visible.iter().map(|tab| html! {
                    <TabView
                        key={tab.id.clone()}
                        tab={tab.clone()}
                        active={Some(&tab.id) == active_id.as_ref()}
                        dragging={(*drag_active).as_deref() == Some(tab.id.as_str())}
                        on_select={on_select.clone()}
                        on_pin_toggle={on_pin_toggle.clone()}
                        on_close={on_close.clone()}
                        on_pointer_down={on_tab_pointer_down.clone()}
                    />
                }) }
            </div>
            if !layout.overflow.is_empty() {
                <OverflowMenu
                    tabs={layout.overflow.clone()}
                    on_select={on_select.clone()}
                    on_pin_toggle={on_pin_toggle.clone()}
                    on_close={on_close.clone()}
                />
            }
        </div>
    }
}
