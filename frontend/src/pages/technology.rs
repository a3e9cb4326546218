use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::scroll::{BackToTop, ParallaxBackground, Reveal};

const SYSTEMS: [(&str, &str, &str); 4] = [
    ("fa-video", "Smart CCTV", "Cameras with motion analytics that flag activity before an operator has to look."),
    ("fa-satellite-dish", "Vehicle Tracking", "Every response vehicle located live from the control room."),
    ("fa-bell", "Alarm Monitoring", "Signals from panels on site routed straight to a dispatcher."),
    ("fa-mobile-alt", "Guard Patrol App", "Checkpoints scanned on patrol and reported as they happen."),
];

#[function_component(Technology)]
pub fn technology() -> Html {
    html! {
        <div class="technology">
            <section class="page-hero technology-hero">
                <ParallaxBackground image="/assets/technology-hero.jpg" rate={0.5} />
                <div class="hero-content">
                    <h1>{"Security Technology"}</h1>
                    <p>{"The systems behind every response."}</p>
                </div>
            </section>

            <section class="stats-section">
                <StatCounter value="99.9%" label="Monitoring uptime" />
                <StatCounter value="500+" label="Cameras monitored" />
                <StatCounter value="24/7" label="Live operators" />
            </section>

            <section class="tech-grid">
                { for SYSTEMS.iter().map(|(icon, title, text)| html! {
                    <Reveal class={classes!("tech-card")}>
                        <i class={classes!("fas", *icon)}></i>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </section>

            <BackToTop />
        </div>
    }
}
