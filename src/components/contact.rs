use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, SubmitEvent};
use yew::prelude::*;

use crate::config;
use crate::state::{ContactAction, ContactDraft, ContactForm, SubmissionState, SUBMITTED_RESET_MS};

async fn send_message(draft: &ContactDraft) -> Result<(), gloo_net::Error> {
    let response = Request::post(&format!("{}/api/contact", config::get_backend_url()))
        .json(draft)?
        .send()
        .await?;
    if response.ok() {
        Ok(())
    } else {
        Err(gloo_net::Error::GlooError(format!(
            "contact endpoint returned status {}",
            response.status()
        )))
    }
}

#[function_component(ContactFormCard)]
pub fn contact_form_card() -> Html {
    let form = use_reducer(ContactForm::default);
    // Holding the handle here lets unmount cancel a pending reset instead
    // of letting it fire into a dead view.
    let reset_timer = use_mut_ref(|| None::<Timeout>);

    {
        let reset_timer = reset_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    reset_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetName(input.value()));
        })
    };

    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetEmail(input.value()));
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.dispatch(ContactAction::SetMessage(input.value()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let reset_timer = reset_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let draft = form.draft.clone();
            let form = form.clone();
            let reset_timer = reset_timer.clone();
            spawn_local(async move {
                match send_message(&draft).await {
                    Ok(()) => {
                        form.dispatch(ContactAction::Accepted);
                        let timer = Timeout::new(SUBMITTED_RESET_MS, {
                            let form = form.clone();
                            move || form.dispatch(ContactAction::Expired)
                        });
                        *reset_timer.borrow_mut() = Some(timer);
                    }
                    Err(e) => {
                        gloo_console::error!("contact submission failed:", e.to_string());
                        form.dispatch(ContactAction::Failed);
                        if let Some(window) = web_sys::window() {
                            let _ = window.alert_with_message(
                                "Failed to send message. Please try again later.",
                            );
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="contact-card">
            <style>
                {r#"
                .contact-card {
                    background: rgba(0, 0, 0, 0.4);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 1rem;
                    padding: 2rem;
                    backdrop-filter: blur(12px);
                }
                .contact-card label {
                    display: block;
                    color: #d1d5db;
                    font-size: 0.875rem;
                    margin-bottom: 0.5rem;
                }
                .contact-card input,
                .contact-card textarea {
                    width: 100%;
                    background: rgba(0, 0, 0, 0.2);
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    border-radius: 0.5rem;
                    color: #fff;
                    padding: 0.75rem;
                    margin-bottom: 1.5rem;
                    transition: border-color 0.3s ease;
                }
                .contact-card input:focus,
                .contact-card textarea:focus {
                    outline: none;
                    border-color: #f87171;
                }
                .contact-card .send-button {
                    width: 100%;
                    background: linear-gradient(to right, #ef4444, #dc2626);
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: transform 0.3s ease;
                }
                .contact-card .send-button:hover {
                    transform: scale(1.03);
                }
                .contact-confirmation {
                    text-align: center;
                    padding: 2rem 0;
                }
                .contact-confirmation .check {
                    font-size: 3rem;
                }
                .contact-confirmation h3 {
                    color: #fff;
                    font-size: 1.5rem;
                }
                .contact-confirmation p {
                    color: #d1d5db;
                }
                "#}
            </style>
            {
                if form.submission == SubmissionState::Submitted {
                    html! {
                        <div class="contact-confirmation">
                            <div class="check">{"✅"}</div>
                            <h3>{"Thanks, I'll be in touch soon!"}</h3>
                            <p>{"Your message has been sent successfully."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <form onsubmit={onsubmit}>
                            <label for="name">{"Name"}</label>
                            <input
                                id="name"
                                type="text"
                                placeholder="Your name"
                                required=true
                                value={form.draft.name.clone()}
                                oninput={on_name}
                            />
                            <label for="email">{"Email"}</label>
                            <input
                                id="email"
                                type="email"
                                placeholder="your@email.com"
                                required=true
                                value={form.draft.email.clone()}
                                oninput={on_email}
                            />
                            <label for="message">{"Message"}</label>
                            <textarea
                                id="message"
                                rows="4"
                                placeholder="Tell me about your project..."
                                required=true
                                value={form.draft.message.clone()}
                                oninput={on_message}
                            />
                            <button type="submit" class="send-button">
                                {"Send Message"}
                            </button>
                        </form>
                    }
                }
            }
        </div>
    }
}
