use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod counter;
mod components {
    pub mod animated_counter;
    pub mod nav_button;
    pub mod timeline;
}
mod pages {
    pub mod landing;
    pub mod termsprivacy;
}

use components::nav_button::NavButton;
use pages::landing::{scroll_to, Landing};
use pages::termsprivacy::{PrivacyPolicy, TermsOfService};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsOfService /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().unwrap();
            let window_clone = window.clone();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                is_scrolled.set(scroll_y > 50.0);
            }) as Box<dyn FnMut()>);

            window
                .add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                )
                .unwrap();

            move || {
                window
                    .remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Section links close the mobile menu before scrolling
    let section_link = {
        let menu_open = menu_open.clone();
        move |id: &'static str| -> Callback<()> {
            let menu_open = menu_open.clone();
            let scroll = scroll_to(id);
            Callback::from(move |_| {
                menu_open.set(false);
                scroll.emit(());
            })
        }
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-glass">
                <div class="nav-inner">
                    <Link<Route> to={Route::Home} classes="nav-brand">
                        <span class="logo-mark"></span>
                        <span class="nav-wordmark">{"CapitalNodes"}</span>
                    </Link<Route>>

                    <div class="nav-links">
                        <NavButton onclick={section_link("how-it-works")}>{"How it Works"}</NavButton>
                        <NavButton onclick={section_link("testimonials")}>{"Testimonials"}</NavButton>
                        <NavButton onclick={section_link("faq")}>{"FAQ"}</NavButton>
                        <NavButton special={true}>{"Get Early Access"}</NavButton>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>

                <div class={classes!("mobile-menu", (*menu_open).then(|| "open"))}>
                    <NavButton mobile={true} onclick={section_link("how-it-works")}>{"How it Works"}</NavButton>
                    <NavButton mobile={true} onclick={section_link("testimonials")}>{"Testimonials"}</NavButton>
                    <NavButton mobile={true} onclick={section_link("faq")}>{"FAQ"}</NavButton>
                    <NavButton mobile={true} special={true}>{"🚀 Get Early Access"}</NavButton>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 1.5rem;
                    transition: padding 0.3s ease;
                }

                .top-nav.scrolled {
                    padding: 0.5rem 1.5rem;
                }

                .nav-glass {
                    max-width: 1280px;
                    margin: 0 auto;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(229, 231, 235, 0.5);
                    border-radius: 16px;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.05);
                }

                .top-nav.scrolled .nav-glass {
                    background: rgba(255, 255, 255, 0.95);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .nav-inner {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1.5rem;
                }

                .nav-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    text-decoration: none;
                }

                .nav-brand .logo-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 8px;
                    background: linear-gradient(to right, #6366f1, #9333ea);
                    position: relative;
                }

                .nav-brand .logo-mark::after {
                    content: '';
                    position: absolute;
                    inset: 0.5rem;
                    background: #fff;
                    border-radius: 2px;
                    transform: rotate(45deg);
                }

                .nav-wordmark {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .nav-button {
                    position: relative;
                    overflow: hidden;
                    border: none;
                    background: none;
                    color: #374151;
                    font-size: 1rem;
                    font-weight: 500;
                    padding: 0.5rem 1rem;
                    border-radius: 12px;
                    cursor: pointer;
                    transition: color 0.3s ease;
                }

                .nav-button:hover {
                    color: #4f46e5;
                }

                .nav-button-special {
                    background: linear-gradient(to right, #6366f1, #9333ea);
                    color: #fff;
                    padding: 0.5rem 1.5rem;
                    font-weight: 600;
                }

                .nav-button-special:hover {
                    color: #fff;
                    filter: brightness(1.1);
                }

                .nav-button-mobile {
                    width: 100%;
                    text-align: left;
                }

                .nav-ripple {
                    position: absolute;
                    border-radius: 50%;
                    background: rgba(99, 102, 241, 0.3);
                    transform: scale(0);
                    animation: ripple 0.6s ease-out;
                    pointer-events: none;
                }

                @keyframes ripple {
                    to {
                        transform: scale(2);
                        opacity: 0;
                    }
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .burger-menu span {
                    width: 24px;
                    height: 2px;
                    background: #374151;
                    border-radius: 1px;
                }

                .mobile-menu {
                    display: none;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }

                    .mobile-menu {
                        display: block;
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.3s ease;
                        padding: 0 1.5rem;
                    }

                    .mobile-menu.open {
                        max-height: 300px;
                        padding: 0 1.5rem 1rem;
                        border-top: 1px solid rgba(229, 231, 235, 0.5);
                    }

                    .mobile-menu .nav-button {
                        display: block;
                        width: 100%;
                        text-align: left;
                        margin: 0.25rem 0;
                    }
                }
                "#}
            </style>
        </nav>
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
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
