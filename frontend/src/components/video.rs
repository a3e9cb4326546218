use yew::prelude::*;

pub fn youtube_embed_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/embed/{}?autoplay=1&rel=0&modestbranding=1",
        video_id
    )
}

#[derive(Properties, PartialEq)]
pub struct VideoModalProps {
    pub video_id: AttrValue,
    pub on_close: Callback<()>,
}

/// Mounted only while open. Unmounting removes the iframe, which stops
/// playback.
#[function_component(VideoModal)]
pub fn video_modal(props: &VideoModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    html! {
        <div id="video-modal" class="video-modal show">
            <div id="modal-overlay" class="modal-overlay" onclick={close.clone()}></div>
            <div class="video-container">
                <button id="modal-close" class="modal-close" onclick={close}>{"×"}</button>
                <iframe id="video-iframe" src={youtube_embed_url(&props.video_id)}
                    title="PEG Security" allow="autoplay; encrypted-media" allowfullscreen=true>
                </iframe>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_autoplays_without_related_videos() {
        assert_eq!(
            youtube_embed_url("N-HAIC6YVSo"),
            "https://www.youtube.com/embed/N-HAIC6YVSo?autoplay=1&rel=0&modestbranding=1"
        );
    }
}
