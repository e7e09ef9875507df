use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod cms {
    pub mod client;
    pub mod image_url;
    pub mod models;
    pub mod portable_text;
}
mod media {
    pub mod albums;
    pub mod carousel;
    pub mod pagination;
    pub mod requests;
    pub mod state;
    pub mod tabs;
    pub mod video;
}
mod components {
    pub mod donate_modal;
    pub mod lightbox;
    pub mod loading;
    pub mod pagination;
}
mod pages {
    pub mod article;
    pub mod home;
    pub mod media;
    pub mod tool;
    pub mod tools;
}

use components::donate_modal::DonateModal;
use pages::{
    article::ArticlePage,
    home::{Home, NotFound},
    media::Media,
    tool::ToolPage,
    tools::Tools,
};

/// Scroll offset after which the navigation bar gets a solid background.
const SCROLL_THRESHOLD: i32 = 80;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/media")]
    Media,
    #[at("/media/:slug")]
    Article { slug: String },
    #[at("/tools")]
    Tools,
    #[at("/tools/:slug")]
    Tool { slug: String },
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
        Route::Media => {
            info!("Rendering Media page");
            html! { <Media /> }
        }
        Route::Article { slug } => {
            info!("Rendering Article page for {}", slug);
            html! { <ArticlePage {slug} /> }
        }
        Route::Tools => {
            info!("Rendering Tools page");
            html! { <Tools /> }
        }
        Route::Tool { slug } => {
            info!("Rendering Tool page for {}", slug);
            html! { <ToolPage {slug} /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let donate_open = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = web_sys::window()
                        .and_then(|w| w.document())
                        .and_then(|d| d.document_element())
                        .map_or(0, |e| e.scroll_top());
                    is_scrolled.set(scroll_top > SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                if let Some(window) = &window {
                    let _ = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
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

    let open_donate = {
        let donate_open = donate_open.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            donate_open.set(true);
        })
    };
    let close_donate = {
        let donate_open = donate_open.clone();
        Callback::from(move |_: ()| donate_open.set(false))
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <>
            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        {"Famkris"}
                    </Link<Route>>

                    <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={menu_class}>
                        <div onclick={close_menu.clone()}>
                            <Link<Route> to={Route::Media} classes="nav-link">{"Media"}</Link<Route>>
                        </div>
                        <div onclick={close_menu}>
                            <Link<Route> to={Route::Tools} classes="nav-link">{"Tools"}</Link<Route>>
                        </div>
                        <button class="nav-donate-button" onclick={open_donate}>{"Donate"}</button>
                    </div>
                </div>
            </nav>
            <DonateModal is_open={*donate_open} on_close={close_donate} />
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 40;
                    padding: 1rem 0;
                    transition: background 0.3s ease, box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 2px 10px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: bold;
                    color: #16a34a;
                    text-decoration: none;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: #1f2937;
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link:hover {
                    color: #16a34a;
                }
                .nav-donate-button {
                    background: #16a34a;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1.25rem;
                    font-weight: 600;
                    cursor: pointer;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #1f2937;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #fff;
                        padding: 1.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
