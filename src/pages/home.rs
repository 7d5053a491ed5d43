use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::components::contact::ContactFormCard;
use crate::components::nav::{scroll_to_section, Nav};
use crate::content::{
    Accent, DegreeProject, Project, Section, Service, CONTACT_CHANNELS, DEGREE_PROJECTS,
    PERSONAL_PROJECTS, SERVICES,
};
use crate::state::{CursorPosition, VisibleSections, BOUNCE_STOP_MS, PARALLAX_FACTOR};

#[function_component(Home)]
pub fn home() -> Html {
    let cursor = use_state(CursorPosition::default);
    let scroll_offset = use_state(|| 0.0_f64);
    let visible = use_reducer(VisibleSections::default);
    let bouncing = use_state(|| true);

    // Hero badge bounces for the first few seconds only. The handle is
    // moved into the destructor so unmount cancels it.
    {
        let bouncing = bouncing.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(BOUNCE_STOP_MS, move || bouncing.set(false));
                move || drop(timer)
            },
            (),
        );
    }

    // Pointer tracking for the background gradient.
    {
        let cursor = cursor.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback =
                        Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |e: web_sys::MouseEvent| {
                            cursor.set(CursorPosition {
                                x: e.client_x(),
                                y: e.client_y(),
                            });
                        });
                    window
                        .add_event_listener_with_callback(
                            "mousemove",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        window
                            .remove_event_listener_with_callback(
                                "mousemove",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    // Scroll tracking for the hero parallax layer.
    {
        let scroll_offset = scroll_offset.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let window_clone = window.clone();
                    let callback = Closure::<dyn FnMut()>::new(move || {
                        scroll_offset.set(window_clone.scroll_y().unwrap_or(0.0));
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    Box::new(move || {
                        window
                            .remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            )
                            .unwrap();
                    })
                } else {
                    Box::new(|| ())
                };
                destructor
            },
            (),
        );
    }

    // Entrance animations: each landmark joins the visible set the first
    // time 10% of it enters the viewport, and never leaves it.
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> =
                    match web_sys::window().and_then(|w| w.document()) {
                        Some(document) => {
                            let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
                                move |entries: js_sys::Array, _: IntersectionObserver| {
                                    for entry in entries.iter() {
                                        let entry: IntersectionObserverEntry =
                                            entry.unchecked_into();
                                        if entry.is_intersecting() {
                                            visible.dispatch(entry.target().id());
                                        }
                                    }
                                },
                            );
                            let options = IntersectionObserverInit::new();
                            options.set_threshold(&JsValue::from_f64(0.1));
                            match IntersectionObserver::new_with_options(
                                callback.as_ref().unchecked_ref(),
                                &options,
                            ) {
                                Ok(observer) => {
                                    if let Ok(sections) =
                                        document.query_selector_all("section[id]")
                                    {
                                        for i in 0..sections.length() {
                                            if let Some(node) = sections.item(i) {
                                                if let Ok(element) =
                                                    node.dyn_into::<web_sys::Element>()
                                                {
                                                    observer.observe(&element);
                                                }
                                            }
                                        }
                                    }
                                    Box::new(move || {
                                        observer.disconnect();
                                        drop(callback);
                                    })
                                }
                                Err(_) => Box::new(move || drop(callback)),
                            }
                        }
                        None => Box::new(|| ()),
                    };
                destructor
            },
            (),
        );
    }

    let reveal = |section: Section| {
        if visible.contains(section.id()) {
            "reveal"
        } else {
            "reveal-hidden"
        }
    };

    let gradient_style = format!(
        "background: radial-gradient(circle at {}px {}px, rgba(220, 38, 38, 0.3) 0%, transparent 50%);",
        cursor.x, cursor.y
    );
    let parallax_style = format!(
        "transform: translateY({}px);",
        *scroll_offset * PARALLAX_FACTOR
    );
    let badge_class = if *bouncing {
        "hero-badge bouncing"
    } else {
        "hero-badge"
    };

    let go_contact =
        Callback::from(|_: web_sys::MouseEvent| scroll_to_section(Section::Contact.id()));
    let go_degree =
        Callback::from(|_: web_sys::MouseEvent| scroll_to_section(Section::Degree.id()));

    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <div class="portfolio-page">
            { page_styles() }
            <div class="gradient-backdrop" style={gradient_style}></div>
            <Nav />

            <section id={Section::Home.id()} class="hero">
                <div class="parallax-layer" style={parallax_style}>
                    <div class="blob blob-1"></div>
                    <div class="blob blob-2"></div>
                    <div class="blob blob-3"></div>
                </div>
                <div class={classes!("hero-content", reveal(Section::Home))}>
                    <span class={badge_class}>{"✨ Freelance Web Developer"}</span>
                    <h1>
                        {"Web Developer, Video Editor & Technician in Malta — Kyle's Digital Services. "}
                        <span class="gradient-text">{"No Limits."}</span>
                    </h1>
                    <p>
                        {"I build responsive, SEO-friendly websites — plus video editing, \
                          PC repairs, and custom software solutions for businesses and \
                          individuals."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="cta-primary" onclick={go_contact}>
                            {"Let's Build Your Site →"}
                        </button>
                        <button class="cta-secondary" onclick={go_degree}>
                            {"View My Work"}
                        </button>
                    </div>
                </div>
            </section>

            <section id={Section::Services.id()} class="page-section">
                <div class={classes!("section-header", reveal(Section::Services))}>
                    <h2>{"Services"}</h2>
                    <p>
                        {"Comprehensive web development services tailored for \
                          entrepreneurs, professionals, and businesses"}
                    </p>
                </div>
                <div class="card-grid three-wide">
                    { for SERVICES.iter().enumerate().map(|(i, service)| {
                        service_card(service, reveal(Section::Services), i)
                    }) }
                </div>
            </section>

            <section id={Section::Projects.id()} class="page-section">
                <div class={classes!("section-header", reveal(Section::Projects))}>
                    <h2>{"Personal Projects"}</h2>
                    <p>
                        {"Projects I'm currently building to push my skills further, \
                          created to gain experience with popular technologies."}
                    </p>
                </div>
                <div class="card-grid two-wide">
                    { for PERSONAL_PROJECTS.iter().enumerate().map(|(i, project)| {
                        project_card(project, reveal(Section::Projects), i)
                    }) }
                </div>
                <p class="more-to-come">{"More to come..."}</p>
            </section>

            <section id={Section::Degree.id()} class="page-section">
                <div class={classes!("section-header", reveal(Section::Degree))}>
                    <h2>{"Bachelor's Projects"}</h2>
                    <p>
                        {"Take a look at some of the projects I've built for my \
                          Bachelor's degree in software development"}
                    </p>
                </div>
                <div class="card-grid two-wide">
                    { for DEGREE_PROJECTS.iter().enumerate().map(|(i, project)| {
                        degree_card(project, reveal(Section::Degree), i)
                    }) }
                </div>
            </section>

            <section id={Section::Contact.id()} class="page-section">
                <div class={classes!("section-header", reveal(Section::Contact))}>
                    <h2>{"Let's Create Something Great Together"}</h2>
                    <p>
                        {"Ready to take your business online? Get in touch and let's \
                          discuss your project."}
                    </p>
                </div>
                <div class={classes!("contact-grid", reveal(Section::Contact))}>
                    <div class="channel-list">
                        { for CONTACT_CHANNELS.iter().map(contact_channel) }
                    </div>
                    <ContactFormCard />
                </div>
            </section>

            <footer class="page-footer">
                <p>
                    {"Freelance Web Developer specializing in custom websites for \
                      entrepreneurs, professionals, and businesses"}
                </p>
                <div class="footer-social">
                    { for CONTACT_CHANNELS
                        .iter()
                        .filter(|c| matches!(c.title, "Messenger" | "WhatsApp" | "LinkedIn"))
                        .map(|c| html! {
                            <a href={c.href} target="_blank" rel="noopener noreferrer"
                               title={c.title} class={c.accent.class()}>
                                { c.icon }
                            </a>
                        }) }
                </div>
                <p class="copyright">{ format!("© {} Kyle. All rights reserved.", year) }</p>
            </footer>
        </div>
    }
}

fn stagger(index: usize) -> String {
    format!("animation-delay: {}ms;", index * 200)
}

fn service_card(service: &Service, reveal_class: &'static str, index: usize) -> Html {
    html! {
        <div class={classes!("card", "service-card", reveal_class)} style={stagger(index)}>
            <div class={classes!("icon-badge", service.accent.class())}>{ service.icon }</div>
            <h3>{ service.title }</h3>
            <p>{ service.desc }</p>
        </div>
    }
}

fn tag_list(tags: &'static [&'static str]) -> Html {
    html! {
        <div class="tag-list">
            { for tags.iter().map(|tag| html! { <span class="tag">{ *tag }</span> }) }
        </div>
    }
}

fn action_button(link: Option<&'static str>) -> Html {
    match link {
        Some(href) => html! {
            <a href={href} target="_blank" rel="noopener noreferrer">
                <button class="card-button">{"View Project ↗"}</button>
            </a>
        },
        None => html! {
            <button class="card-button" disabled=true>{"In Development"}</button>
        },
    }
}

fn project_card(project: &Project, reveal_class: &'static str, index: usize) -> Html {
    html! {
        <div class={classes!("card", "project-card", reveal_class)} style={stagger(index)}>
            <div class={classes!("card-media", project.accent.class())}></div>
            <h3>{ project.title }</h3>
            <p>{ project.desc }</p>
            { tag_list(project.tags) }
            { action_button(project.link) }
        </div>
    }
}

fn degree_card(project: &DegreeProject, reveal_class: &'static str, index: usize) -> Html {
    html! {
        <div class={classes!("card", "project-card", reveal_class)} style={stagger(index)}>
            <div class={classes!("card-media", project.accent.class())}></div>
            <h3>{ project.title }</h3>
            <p>{ project.desc }</p>
            <p class="project-result">{"✔ "}{ project.result }</p>
            <p class="project-grade">{"Project Grade: "}{ project.grade }</p>
            <p class="module-grade">{"Module Grade: "}{ project.module_grade }</p>
            { tag_list(project.tags) }
            { action_button(project.link) }
        </div>
    }
}

fn contact_channel(channel: &crate::content::ContactChannel) -> Html {
    html! {
        <div class="channel-row">
            <div class={classes!("icon-badge", channel.accent.class())}>{ channel.icon }</div>
            <div>
                <p class="channel-title">{ channel.title }</p>
                <a href={channel.href} target="_blank" rel="noopener noreferrer">
                    { channel.value }
                </a>
            </div>
        </div>
    }
}

fn accent_rules() -> String {
    // One fixed rule per supported accent; nothing is derived from
    // runtime strings.
    [
        (Accent::Red, "239, 68, 68"),
        (Accent::Orange, "249, 115, 22"),
        (Accent::Yellow, "234, 179, 8"),
        (Accent::Green, "34, 197, 94"),
        (Accent::Blue, "59, 130, 246"),
        (Accent::Gray, "156, 163, 175"),
    ]
    .iter()
    .map(|(accent, rgb)| {
        format!(
            ".icon-badge.{class}, .card-media.{class} {{ background: rgba({rgb}, 0.2); }}\n\
             .footer-social a.{class} {{ background: rgba({rgb}, 0.2); }}\n",
            class = accent.class(),
            rgb = rgb
        )
    })
    .collect()
}

fn page_styles() -> Html {
    let base = r#"
    .portfolio-page {
        min-height: 100vh;
        background: linear-gradient(to bottom right, #000, #111827, #000);
        color: #fff;
        overflow-x: hidden;
        font-family: 'Segoe UI', system-ui, sans-serif;
    }
    .gradient-backdrop {
        position: fixed;
        inset: 0;
        opacity: 0.3;
        pointer-events: none;
        transition: background 0.3s ease;
    }
    .reveal { animation: rise-in 1s ease both; }
    .reveal-hidden { opacity: 0; }
    @keyframes rise-in {
        from { opacity: 0; transform: translateY(2rem); }
        to { opacity: 1; transform: translateY(0); }
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        padding: 4rem 1rem 0;
        position: relative;
    }
    .parallax-layer { position: absolute; inset: 0; opacity: 0.2; }
    .blob {
        position: absolute;
        width: 18rem;
        height: 18rem;
        border-radius: 50%;
        filter: blur(24px);
    }
    .blob-1 { top: 5rem; left: 2.5rem; background: #ef4444; }
    .blob-2 { top: 10rem; right: 2.5rem; background: #dc2626; }
    .blob-3 { bottom: 5rem; left: 5rem; background: #f87171; }
    .hero-content { max-width: 48rem; margin: 0 auto; position: relative; z-index: 10; }
    .hero-badge {
        display: inline-block;
        background: rgba(239, 68, 68, 0.2);
        color: #fca5a5;
        border: 1px solid rgba(248, 113, 113, 0.3);
        border-radius: 9999px;
        padding: 0.25rem 1rem;
    }
    .hero-badge.bouncing { animation: badge-bounce 1s infinite; }
    @keyframes badge-bounce {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-25%); }
    }
    .hero-content h1 { font-size: 3rem; line-height: 1.15; margin: 1.5rem 0; }
    .gradient-text {
        background: linear-gradient(to right, #f87171, #ef4444, #dc2626);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .hero-content > p { font-size: 1.25rem; color: #d1d5db; }
    .hero-cta-group { display: flex; gap: 1rem; margin-top: 2rem; flex-wrap: wrap; }
    .cta-primary {
        background: linear-gradient(to right, #ef4444, #dc2626);
        color: #fff;
        border: none;
        border-radius: 0.5rem;
        padding: 1rem 2rem;
        font-size: 1.125rem;
        cursor: pointer;
        transition: transform 0.3s ease;
    }
    .cta-primary:hover { transform: scale(1.05); }
    .cta-secondary {
        background: transparent;
        color: #fff;
        border: 1px solid rgba(255, 255, 255, 0.3);
        border-radius: 0.5rem;
        padding: 1rem 2rem;
        font-size: 1.125rem;
        cursor: pointer;
        transition: border-color 0.3s ease;
    }
    .cta-secondary:hover { border-color: #f87171; }
    .page-section { padding: 5rem 1rem; max-width: 80rem; margin: 0 auto; position: relative; }
    .section-header { text-align: center; margin-bottom: 4rem; }
    .section-header h2 { font-size: 2.5rem; }
    .section-header p { font-size: 1.25rem; color: #d1d5db; max-width: 42rem; margin: 0 auto; }
    .card-grid { display: grid; gap: 2rem; }
    @media (min-width: 768px) {
        .card-grid.two-wide { grid-template-columns: repeat(2, 1fr); }
        .card-grid.three-wide { grid-template-columns: repeat(3, 1fr); }
    }
    .card {
        background: rgba(0, 0, 0, 0.4);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1rem;
        padding: 2rem;
        backdrop-filter: blur(12px);
        transition: transform 0.5s ease, background 0.5s ease;
    }
    .card:hover { transform: translateY(-1rem) rotate(1deg); background: rgba(0, 0, 0, 0.6); }
    .service-card { text-align: center; }
    .icon-badge {
        width: 4rem;
        height: 4rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 1.75rem;
        margin: 0 auto 1rem;
    }
    .card h3 { color: #fff; font-size: 1.25rem; }
    .card p { color: #d1d5db; }
    .card-media { height: 6rem; border-radius: 0.5rem; margin-bottom: 1rem; }
    .project-result { color: #f87171; font-size: 0.875rem; }
    .project-grade { color: #4ade80; font-weight: 500; }
    .module-grade { color: #9ca3af; font-size: 0.875rem; }
    .tag-list { display: flex; flex-wrap: wrap; gap: 0.5rem; margin: 1rem 0; }
    .tag {
        background: rgba(255, 255, 255, 0.1);
        color: #d1d5db;
        border-radius: 9999px;
        padding: 0.125rem 0.75rem;
        font-size: 0.875rem;
    }
    .card-button {
        width: 100%;
        background: transparent;
        color: #fff;
        border: 1px solid rgba(255, 255, 255, 0.3);
        border-radius: 0.5rem;
        padding: 0.5rem;
        cursor: pointer;
    }
    .card-button:disabled { color: #9ca3af; cursor: not-allowed; }
    .more-to-come { text-align: center; color: #9ca3af; font-style: italic; margin-top: 2rem; }
    .contact-grid { display: grid; gap: 3rem; }
    @media (min-width: 1024px) { .contact-grid { grid-template-columns: 1fr 1fr; } }
    .channel-list { display: flex; flex-direction: column; gap: 1.5rem; }
    .channel-row { display: flex; align-items: center; gap: 1rem; }
    .channel-row .icon-badge { width: 3rem; height: 3rem; font-size: 1.25rem; margin: 0; }
    .channel-title { color: #fff; font-weight: 600; margin: 0; }
    .channel-row a { color: #d1d5db; }
    .page-footer {
        background: rgba(0, 0, 0, 0.8);
        border-top: 1px solid rgba(239, 68, 68, 0.2);
        text-align: center;
        padding: 3rem 1rem;
        color: #9ca3af;
    }
    .footer-social { display: flex; justify-content: center; gap: 1.5rem; margin: 1.5rem 0; }
    .footer-social a {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 50%;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 0.3s ease;
    }
    .footer-social a:hover { transform: scale(1.1); }
    .copyright { border-top: 1px solid rgba(239, 68, 68, 0.2); padding-top: 2rem; }
    "#;

    html! {
        <style>{ format!("{base}\n{}", accent_rules()) }</style>
    }
}
