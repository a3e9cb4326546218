use yew::prelude::*;

use crate::components::counter::StatCounter;
use crate::components::scroll::{BackToTop, Reveal};

struct Leader {
    name: &'static str,
    role: &'static str,
    icon: &'static str,
    skills: &'static [&'static str],
}

const TEAM: [Leader; 3] = [
    Leader {
        name: "Vusi Zulu",
        role: "Managing Director",
        icon: "fa-user-tie",
        skills: &["Strategy", "Client relations", "Risk management"],
    },
    Leader {
        name: "Operations Manager",
        role: "Head of Operations",
        icon: "fa-cogs",
        skills: &["Armed response", "Dispatch", "Training"],
    },
    Leader {
        name: "Technical Manager",
        role: "Head of Technology",
        icon: "fa-microchip",
        skills: &["CCTV", "Access control", "Control room systems"],
    },
];

#[function_component(Leadership)]
pub fn leadership() -> Html {
    html! {
        <div class="leadership">
            <section class="page-hero leadership-hero">
                <div class="hero-content">
                    <h1>{"Our Leadership"}</h1>
                    <p>{"Experience on the ground and in the control room."}</p>
                </div>
            </section>

            <section class="team">
                { for TEAM.iter().map(|leader| html! {
                    <Reveal class={classes!("team-member")}>
                        <i class={classes!("fas", "role-icon", leader.icon)}></i>
                        <h3>{leader.name}</h3>
                        <p class="role">{leader.role}</p>
                        <div class="skills">
                            { for leader.skills.iter().map(|skill| html! {
                                <span class="skill-tag">{*skill}</span>
                            }) }
                        </div>
                    </Reveal>
                }) }
            </section>

            <section class="stats-section">
                <StatCounter value="60+" label="Years combined experience" />
                <StatCounter value="100%" label="PSIRA registered" />
            </section>

            <BackToTop />
        </div>
    }
}
