use log::warn;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::state::form::{ContactFormDraft, ContactMessage, FormField};
use crate::state::view::Section;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub draft: ContactFormDraft,
    /// Newest first.
    pub messages: Vec<ContactMessage>,
    pub on_field: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

fn emit_field(on_field: &Callback<(FormField, String)>, name: String, value: String) {
    match name.parse::<FormField>() {
        Ok(field) => on_field.emit((field, value)),
        Err(e) => warn!("Ignoring input: {}", e),
    }
}

#[function_component(ContactSection)]
pub fn contact_section(props: &ContactProps) -> Html {
    let ContactProps {
        draft,
        messages,
        on_field,
        on_submit,
    } = props;

    let on_input = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            emit_field(&on_field, input.name(), input.value());
        })
    };

    let on_textarea_input = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let textarea: HtmlTextAreaElement = e.target_unchecked_into();
            emit_field(&on_field, textarea.name(), textarea.value());
        })
    };

    let onclick = {
        let on_submit = on_submit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <section class="section contact" id={Section::Contact.id()}>
            <style>
                {r#"
                .contact-container {
                    max-width: 896px;
                    margin: 0 auto;
                }
                .contact-form {
                    background: #ffffff;
                    border-radius: 1rem;
                    padding: 2rem;
                    box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    margin-bottom: 3rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-group label {
                    display: block;
                    color: #374151;
                    font-weight: 600;
                    margin-bottom: 0.5rem;
                }
                .form-group input,
                .form-group textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                    box-sizing: border-box;
                }
                .form-group input:focus,
                .form-group textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #3b82f6;
                }
                .submit-button {
                    width: 100%;
                    padding: 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-weight: 600;
                    color: #ffffff;
                    cursor: pointer;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    transition: all 0.3s ease;
                }
                .submit-button:hover {
                    background: linear-gradient(90deg, #1d4ed8, #7e22ce);
                }
                .messages-container h3 {
                    text-align: center;
                    font-size: 1.5rem;
                    margin-bottom: 1.5rem;
                }
                .message-item {
                    background: linear-gradient(90deg, #eff6ff, #faf5ff);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    margin-bottom: 1rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                }
                .message-header {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 0.5rem;
                }
                .message-author {
                    font-weight: 600;
                    color: #2563eb;
                }
                .message-date {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .message-text {
                    color: #374151;
                    font-style: italic;
                }
                "#}
            </style>
            <h2 class="section-title">{"Share Your Peace Message"}</h2>
            <div class="contact-container">
                <div class="contact-form">
                    <div class="form-group">
                        <label for="name">{"Your Name"}</label>
                        <input
                            type="text"
                            id="name"
                            name={FormField::Name.as_str()}
                            value={draft.name.clone()}
                            oninput={on_input.clone()}
                            placeholder="Enter your name"
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            name={FormField::Email.as_str()}
                            value={draft.email.clone()}
                            oninput={on_input}
                            placeholder="your.email@example.com"
                        />
                    </div>
                    <div class="form-group">
                        <label for="message">{"Your Peace Message"}</label>
                        <textarea
                            id="message"
                            name={FormField::Message.as_str()}
                            value={draft.message.clone()}
                            oninput={on_textarea_input}
                            rows="5"
                            placeholder="Share your vision for a peaceful world..."
                        />
                    </div>
                    <button type="button" class="submit-button" {onclick}>
                        {"Send Message of Peace"}
                    </button>
                </div>

                if !messages.is_empty() {
                    <div class="messages-container">
                        <h3>{"Peace Messages from Our Community"}</h3>
                        {
                            for messages.iter().map(|msg| html! {
                                <div class="message-item" key={msg.id}>
                                    <div class="message-header">
                                        <span class="message-author">{msg.name.clone()}</span>
                                        <span class="message-date">{msg.date.clone()}</span>
                                    </div>
                                    <p class="message-text">{format!("\"{}\"", msg.message)}</p>
                                </div>
                            })
                        }
                    </div>
                }
            </div>
        </section>
    }
}
