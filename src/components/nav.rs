use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SITE_NAME;
use crate::content::Icon;
use crate::state::view::{is_scrolled, Section};

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub items: &'static [Section],
    pub active: Section,
    pub scrolled: bool,
    pub menu_open: bool,
    pub on_navigate: Callback<Section>,
    pub on_toggle_menu: Callback<()>,
    pub on_scroll: Callback<bool>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps {
        items,
        active,
        scrolled,
        menu_open,
        on_navigate,
        on_toggle_menu,
        on_scroll,
    } = props;

    {
        let on_scroll = on_scroll.clone();
        use_effect_with_deps(
            move |_| {
                let listener = web_sys::window().map(|window| {
                    let scroll_callback = Closure::<dyn Fn()>::new({
                        let on_scroll = on_scroll.clone();
                        move || {
                            if let Some(win) = web_sys::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    on_scroll.emit(is_scrolled(scroll_y));
                                }
                            }
                        }
                    });
                    if window
                        .add_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .is_err()
                    {
                        warn!("Could not attach scroll listener");
                    }
                    // A reload can restore a mid-page position before any scroll event.
                    if let Ok(scroll_y) = window.scroll_y() {
                        on_scroll.emit(is_scrolled(scroll_y));
                    }
                    (window, scroll_callback)
                });

                move || {
                    if let Some((window, scroll_callback)) = listener {
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
        let on_toggle_menu = on_toggle_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Toggling mobile menu");
            on_toggle_menu.emit(());
        })
    };

    let links_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }
                .top-nav.scrolled {
                    background: #ffffff;
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .nav-logo-icon {
                    color: #2563eb;
                    -webkit-text-fill-color: #2563eb;
                    font-size: 2rem;
                }
                .nav-links {
                    display: flex;
                    gap: 1.5rem;
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }
                .nav-link {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 1rem;
                    color: #374151;
                    transition: color 0.2s ease;
                }
                .nav-link:hover,
                .nav-link.active {
                    color: #2563eb;
                }
                .nav-link.active {
                    font-weight: 600;
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
                    height: 3px;
                    background: #2563eb;
                    border-radius: 2px;
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        background: #ffffff;
                        padding: 1rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .nav-links.mobile-menu-open {
                        display: flex;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <div class="nav-logo">
                    <span class="nav-logo-icon">{Icon::Heart.glyph()}</span>
                    <span>{SITE_NAME}</span>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <ul class={links_class}>
                    {
                        for items.iter().map(|section| {
                            let section = *section;
                            let onclick = {
                                let on_navigate = on_navigate.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    debug!("Nav click: {}", section);
                                    on_navigate.emit(section);
                                })
                            };
                            html! {
                                <li key={section.id()}>
                                    <button
                                        class={classes!("nav-link", (section == *active).then(|| "active"))}
                                        {onclick}
                                    >
                                        {section.label()}
                                    </button>
                                </li>
                            }
                        })
                    }
                </ul>
            </div>
        </nav>
    }
}
