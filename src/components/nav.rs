use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::Section;
use crate::state::MenuFlag;

/// Smooth-scrolls the landmark with the given id into view. Missing
/// landmarks are ignored; the caller still closes the drawer.
pub fn scroll_to_section(id: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        if let Some(element) = document.get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(MenuFlag::default);

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu.set((*menu).toggled());
        })
    };

    let navigate = |section: Section| {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(section.id());
            // Collapses even when the landmark was not found.
            menu.set((*menu).closed());
        })
    };

    let menu_class = if menu.is_open() {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class="top-nav">
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 50;
                    background: rgba(0, 0, 0, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(239, 68, 68, 0.2);
                }
                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .nav-logo {
                    color: #f87171;
                    font-weight: 700;
                    font-size: 1.25rem;
                }
                .nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .nav-links button {
                    background: none;
                    border: none;
                    color: rgba(255, 255, 255, 0.8);
                    cursor: pointer;
                    transition: color 0.3s ease;
                }
                .nav-links button:hover {
                    color: #f87171;
                }
                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                    font-size: 1.5rem;
                }
                @media (max-width: 768px) {
                    .burger-menu { display: block; }
                    .nav-links {
                        display: none;
                        position: absolute;
                        top: 4rem;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        gap: 0;
                        background: rgba(0, 0, 0, 0.9);
                        border-top: 1px solid rgba(239, 68, 68, 0.2);
                        padding: 0.5rem 1rem 1rem;
                    }
                    .nav-links.mobile-menu-open { display: flex; }
                    .nav-links button {
                        text-align: left;
                        padding: 0.75rem 0;
                    }
                }
                "#}
            </style>
            <div class="nav-content">
                <span class="nav-logo">{"KYLE"}</span>
                <button class="burger-menu" onclick={toggle_menu}>
                    { if menu.is_open() { "✕" } else { "☰" } }
                </button>
                <div class={menu_class}>
                    { for Section::ALL.iter().map(|section| html! {
                        <button onclick={navigate(*section)}>
                            { section.label() }
                        </button>
                    }) }
                </div>
            </div>
        </nav>
    }
}
