use log::info;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

mod config;
mod contact_form;
mod mail;
mod booking {
    pub mod modal;
    pub mod state;
    pub mod submission;
    pub mod summary;
    pub mod validation;
    pub mod wizard;
}
mod components {
    pub mod carousel;
    pub mod counter;
    pub mod dialog;
    pub mod emergency;
    pub mod map;
    pub mod notification;
    pub mod ripple;
    pub mod scroll;
    pub mod video;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod home;
    pub mod leadership;
    pub mod services;
    pub mod technology;
}

use components::notification::NotificationHost;
use pages::{
    about::About, contact::Contact, home::Home, leadership::Leadership, services::Services,
    technology::Technology,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/technology")]
    Technology,
    #[at("/leadership")]
    Leadership,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        Route::Technology => {
            info!("Rendering Technology page");
            html! { <Technology /> }
        }
        Route::Leadership => {
            info!("Rendering Leadership page");
            html! { <Leadership /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        }
        Route::NotFound => {
            info!("Unknown route, showing Home page");
            html! { <Home /> }
        }
    }
}

const NAV_LINKS: [(Route, &str); 6] = [
    (Route::Home, "Home"),
    (Route::About, "About"),
    (Route::Services, "Services"),
    (Route::Technology, "Technology"),
    (Route::Leadership, "Leadership"),
    (Route::Contact, "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state_eq(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > config::NAV_SCROLLED_AT;
    let current = use_route::<Route>();
    let node = use_node_ref();

    {
        let menu_open = menu_open.clone();
        use_click_away(node.clone(), move |_: Event| menu_open.set(false));
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <nav id="navbar" ref={node} class={classes!("navbar", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-container">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"PEG Security"}
                </Link<Route>>

                <button class={classes!("hamburger", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={classes!("nav-menu", (*menu_open).then(|| "active"))}>
                    { for NAV_LINKS.iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(route);
                        html! {
                            <li onclick={close_menu.clone()}>
                                <Link<Route> to={route.clone()}
                                    classes={classes!("nav-link", active.then(|| "active"))}>
                                    {*label}
                                </Link<Route>>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <NotificationHost>
            <BrowserRouter>
                <Nav />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </NotificationHost>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
