use yew::prelude::*;
use yew_router::prelude::*;

use crate::booking::state::BookingService;
use crate::components::counter::StatCounter;
use crate::components::ripple::RippleButton;
use crate::components::scroll::{BackToTop, Reveal};
use crate::Route;

const CATEGORIES: [(&str, &str, &str); 4] = [
    ("fa-car", "Armed Response", "Alarm activated dispatch with vehicles stationed across the area."),
    ("fa-user-shield", "Guarding", "Static guards, patrols and access control for any site."),
    ("fa-video", "CCTV Monitoring", "Off-site monitoring with escalation to response teams."),
    ("fa-search", "Risk Assessment", "A structured review of vulnerabilities and a plan to close them."),
];

#[function_component(Services)]
pub fn services() -> Html {
    let navigator = use_navigator();
    let to_contact = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Contact);
        }
    });

    html! {
        <div class="services">
            <section class="page-hero services-hero">
                <div class="hero-content">
                    <h1>{"Our Services"}</h1>
                    <p>{"Protection tailored to homes, businesses and industry."}</p>
                </div>
            </section>

            <section class="category-grid">
                { for CATEGORIES.iter().map(|(icon, title, text)| html! {
                    <Reveal class={classes!("category-card")}>
                        <i class={classes!("fas", "card-icon", *icon)}></i>
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </Reveal>
                }) }
            </section>

            <section class="consultations">
                <h2>{"Consultations we offer"}</h2>
                { for BookingService::ALL.iter().map(|service| html! {
                    <Reveal class={classes!("package-card")}>
                        <h3>{service.label()}</h3>
                        <span class="duration">{service.duration()}</span>
                        <p>{service.description()}</p>
                    </Reveal>
                }) }
            </section>

            <section class="service-stats">
                <StatCounter value="3" label="Minute average response" />
                <StatCounter value="150+" label="Trained officers" />
            </section>

            <section class="services-cta">
                <RippleButton class={classes!("btn", "btn-primary")} onclick={to_contact}>
                    {"Book a Consultation"}
                </RippleButton>
            </section>

            <BackToTop />
        </div>
    }
}
