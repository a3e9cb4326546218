use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::scroll::{BackToTop, ParallaxBackground, Reveal};

const MILESTONES: [(&str, &str); 4] = [
    ("2009", "Founded in Secunda with a single response vehicle."),
    ("2014", "Opened the 24 hour control room."),
    ("2019", "Extended guarding to industrial and mining sites."),
    ("2024", "Rolled out AI assisted CCTV monitoring."),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about">
            <section class="page-hero about-hero">
                <ParallaxBackground image="/assets/about-hero.jpg" />
                <div class="hero-content">
                    <h1>{"About PEG Security"}</h1>
                    <p>{"Local people protecting local communities."}</p>
                </div>
            </section>

            <section class="stats-section">
                <StatCounter value="15+" label="Years operating" />
                <StatCounter value="4.9" label="Client rating" />
                <StatCounter value="1200" label="Sites protected" />
            </section>

            <section class="timeline">
                { for MILESTONES.iter().map(|(year, text)| html! {
                    <Reveal class={classes!("timeline-item")}>
                        <span class="timeline-year">{*year}</span>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </section>

            <BackToTop />
        </div>
    }
}
