use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

const MAP_EMBED_URL: &str = "https://www.google.com/maps?q=Bethal%2C+South+Africa&output=embed";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapState {
    Placeholder,
    Loading,
    Loaded,
}

impl MapState {
    /// A click only matters while the placeholder is showing.
    pub fn requested(self) -> MapState {
        match self {
            MapState::Placeholder => MapState::Loading,
            other => other,
        }
    }
}

/// Office map that is only embedded once the visitor asks for it.
#[function_component(LazyMap)]
pub fn lazy_map() -> Html {
    let state = use_state_eq(|| MapState::Placeholder);

    {
        let handle = state.clone();
        use_effect_with_deps(
            move |state| {
                let timeout = (*state == MapState::Loading).then(|| {
                    Timeout::new(config::MAP_LOAD_DELAY_MS, move || {
                        log::debug!("Embedding office map");
                        handle.set(MapState::Loaded)
                    })
                });
                move || drop(timeout)
            },
            *state,
        );
    }

    let onclick = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.set(state.requested()))
    };

    html! {
        <div id="google-map" class="map-container">
            {
                match *state {
                    MapState::Placeholder => html! {
                        <div class="map-placeholder" {onclick}>
                            <i class="fas fa-map-marked-alt"></i>
                            <p>{"Click to load the interactive map"}</p>
                        </div>
                    },
                    MapState::Loading => html! {
                        <div class="map-placeholder loading">
                            <i class="fas fa-spinner fa-spin"></i>
                            <p>{"Loading interactive map..."}</p>
                        </div>
                    },
                    MapState::Loaded => html! {
                        <iframe src={MAP_EMBED_URL} width="100%" height="100%"
                            style="border:0; border-radius: 12px;"
                            title="PEG Security office" loading="lazy"></iframe>
                    },
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_placeholder_starts_loading() {
        assert_eq!(MapState::Placeholder.requested(), MapState::Loading);
        assert_eq!(MapState::Loading.requested(), MapState::Loading);
        assert_eq!(MapState::Loaded.requested(), MapState::Loaded);
    }
}
