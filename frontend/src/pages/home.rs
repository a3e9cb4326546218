use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::carousel::{HeroCarousel, Slide};
use crate::components::counter::StatCounter;
use crate::components::dialog::use_dialog;
use crate::components::emergency::EmergencyButton;
use crate::components::ripple::RippleButton;
use crate::components::scroll::{BackToTop, Reveal};
use crate::components::video::VideoModal;
use crate::config;
use crate::Route;

fn slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "/assets/hero-response.jpg".into(),
            title: "Armed Response, Around The Clock".into(),
            subtitle: "Rapid reaction teams across Mpumalanga.".into(),
        },
        Slide {
            image: "/assets/hero-control-room.jpg".into(),
            title: "Monitored From Our Control Room".into(),
            subtitle: "CCTV and alarm signals watched live, every hour of the day.".into(),
        },
        Slide {
            image: "/assets/hero-guarding.jpg".into(),
            title: "Trained, Vetted Guarding".into(),
            subtitle: "PSIRA registered officers for sites of every size.".into(),
        },
    ]
}

const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("fa-shield-alt", "Armed Response", "Dedicated vehicles on patrol and dispatched on every alarm."),
    ("fa-video", "Remote Monitoring", "Cameras and sensors watched from a manned control room."),
    ("fa-user-shield", "Guarding", "Static and patrol officers for commercial and residential sites."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let to_contact = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Contact);
        }
    });

    let video_open = use_state_eq(|| false);
    let close_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: ()| video_open.set(false))
    };
    use_dialog(*video_open, close_video.clone());
    let open_video = {
        let video_open = video_open.clone();
        Callback::from(move |_: MouseEvent| video_open.set(true))
    };

    html! {
        <div class="home">
            <HeroCarousel slides={slides()} />
            <EmergencyButton />

            <section class="stats-section">
                <StatCounter value="24/7" label="Control room" />
                <StatCounter value="150+" label="Officers" />
                <StatCounter value="98%" label="Client retention" />
            </section>

            <section class="highlights">
                { for HIGHLIGHTS.iter().map(|(icon, title, text)| html! {
                    <Reveal class={classes!("highlight-card")}>
                        <i class={classes!("fas", *icon)}></i>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </section>

            <section class="cta-section">
                <h2>{"Not sure what your site needs?"}</h2>
                <p>{"Book a free security consultation and we'll walk the property with you."}</p>
                <RippleButton class={classes!("btn-primary")} onclick={to_contact}>
                    {"Book a Consultation"}
                </RippleButton>
                <button id="video-play-btn" class="video-play-btn" onclick={open_video}>
                    <i class="fas fa-play"></i>{" Watch our story"}
                </button>
            </section>

            if *video_open {
                <VideoModal video_id={config::PROMO_VIDEO_ID} on_close={close_video} />
            }

            <BackToTop />
        </div>
    }
}
