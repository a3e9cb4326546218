use yew::prelude::*;

use crate::booking::modal::{BookingModal, SuccessModal};
use crate::booking::submission::BookingPayload;
use crate::components::counter::StatCounter;
use crate::components::dialog::use_dialog;
use crate::components::emergency::tel_href;
use crate::components::map::LazyMap;
use crate::components::notification::use_notifier;
use crate::components::ripple::RippleButton;
use crate::components::scroll::{BackToTop, Reveal};
use crate::config;
use crate::contact_form::ContactForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Dialog {
    Closed,
    Booking,
    Success,
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let dialog = use_state_eq(|| Dialog::Closed);
    let on_notify = use_notifier();

    let close = {
        let dialog = dialog.clone();
        Callback::from(move |_: ()| dialog.set(Dialog::Closed))
    };
    use_dialog(*dialog != Dialog::Closed, close.clone());

    let open_booking = {
        let dialog = dialog.clone();
        Callback::from(move |_: MouseEvent| dialog.set(Dialog::Booking))
    };
    let on_booked = {
        let dialog = dialog.clone();
        Callback::from(move |payload: BookingPayload| {
            log::info!("Booking handed to mail client for {}", payload.email);
            dialog.set(Dialog::Success);
        })
    };

    html! {
        <div class="contact">
            <section class="page-hero contact-hero">
                <div class="hero-content">
                    <h1>{"Contact Us"}</h1>
                    <p>{"Speak to a security consultant today."}</p>
                </div>
            </section>

            <section class="contact-grid">
                <Reveal class={classes!("contact-info")}>
                    <div class="contact-item">
                        <i class="fas fa-phone"></i>
                        <a href={tel_href(config::CONTACT_PHONE)}>
                            {config::CONTACT_PHONE}
                        </a>
                    </div>
                    <div class="contact-item">
                        <i class="fas fa-envelope"></i>
                        <a href={format!("mailto:{}", config::BOOKING_RECIPIENT)}>
                            {config::BOOKING_RECIPIENT}
                        </a>
                    </div>
                    <div class="stats-section">
                        <StatCounter value="24/7" label="Emergency line" />
                        <StatCounter value="08:00" label="Office opens" />
                    </div>
                </Reveal>
                <Reveal class={classes!("contact-form-wrapper")}>
                    <ContactForm />
                </Reveal>
            </section>

            <section class="map-section">
                <LazyMap />
            </section>

            <section class="booking-cta">
                <h2>{"Prefer to meet?"}</h2>
                <p>{"Pick a service and a time slot and we'll come to you."}</p>
                <RippleButton class={classes!("btn-primary", "booking-btn")} onclick={open_booking}>
                    <i class="fas fa-calendar-check"></i>{" Book a Consultation"}
                </RippleButton>
            </section>

            {
                match *dialog {
                    Dialog::Booking => html! {
                        <BookingModal on_close={close.clone()} {on_booked} {on_notify} />
                    },
                    Dialog::Success => html! { <SuccessModal on_close={close} /> },
                    Dialog::Closed => html! {},
                }
            }

            <BackToTop />
        </div>
    }
}
