/// Demo shell hosting the tab strip with a local navigation state

use crate::tab_data::{TabModel, default_tabs};
use crate::ui::tab_strip::TabStrip;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    #[prop_or_else(default_tabs)]
    pub initial_tabs: Vec<TabModel>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let location = use_state(|| {
        props
            .initial_tabs
            .first()
            .map(|t| t.url.clone())
            .unwrap_or_else(|| "/".to_string())
    });

    let on_navigate = {
        let location = location.clone();
        Callback::from(move |url: String| location.set(url))
    };

    // Content titles come from the initial list; the live ordering stays
    // inside the strip, so a closed tab's location falls through to 404.
    let content = props
        .initial_tabs
        .iter()
        .find(|t| t.url == *location)
        .map(|t| format!("{} Content", t.title))
        .unwrap_or_else(|| "404 Not Found".to_string());

    html! {
        <div class="app">
            <TabStrip
                initial_tabs={props.initial_tabs.clone()}
                current_location={(*location).clone()}
                on_navigate={on_navigate}
            />
            <main class="app__content">{ content }</main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_mount_props_carry_stock_tabs() {
        // Props shape used by the exported mount functions
        let props = AppProps {
            initial_tabs: default_tabs(),
        };

        assert_eq!(props.initial_tabs.len(), 9);
        assert_eq!(props.initial_tabs[0].url, "/dashboard");
        assert_eq!(props.initial_tabs[0].title, "Dashboard");
    }
}
