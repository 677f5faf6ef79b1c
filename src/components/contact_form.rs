use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// The named fields the embedding site's webhook expects. Posting them is
/// the embedder's job; this form only composes and hands off the payload.
#[derive(Serialize, Clone, PartialEq, Debug)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_submit: Callback<ContactPayload>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(ContactPayload {
                name: (*name).clone(),
                email: (*email).clone(),
                message: (*message).clone(),
            });
            name.set(String::new());
            email.set(String::new());
            message.set(String::new());
            on_close.emit(());
        })
    };

    let onclick_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let panel_class = if props.show {
        "contact-panel contact-panel-open"
    } else {
        "contact-panel"
    };

    html! {
        <div class={panel_class}>
            <style>
                {r#"
                    .contact-panel {
                        position: absolute;
                        right: 40px;
                        bottom: 80px;
                        width: 384px;
                        background: rgba(17, 24, 39, 0.9);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(235, 203, 76, 0.3);
                        box-shadow: 0 0 15px rgba(235, 203, 76, 0.3);
                        border-radius: 8px;
                        padding: 32px;
                        z-index: 20;
                        transition: all 0.5s ease-in-out;
                        opacity: 0;
                        transform: translateX(80px) scale(0.95);
                        pointer-events: none;
                    }
                    .contact-panel-open {
                        opacity: 1;
                        transform: translateX(0) scale(1);
                        pointer-events: auto;
                    }
                    .contact-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 24px;
                    }
                    .contact-heading {
                        color: #ebcb4c;
                        font-style: italic;
                        letter-spacing: 0.1em;
                        font-size: 1.5rem;
                        font-weight: bold;
                    }
                    .contact-close {
                        background: none;
                        border: none;
                        color: #ebcb4c;
                        font-size: 1.2rem;
                        cursor: pointer;
                        transition: transform 0.3s, color 0.3s;
                    }
                    .contact-close:hover {
                        color: #fff;
                        transform: rotate(90deg);
                    }
                    .contact-field { margin-bottom: 20px; }
                    .contact-field label {
                        display: block;
                        color: #ebcb4c;
                        font-size: 0.85rem;
                        font-weight: bold;
                        letter-spacing: 0.1em;
                        margin-bottom: 8px;
                    }
                    .contact-field input,
                    .contact-field textarea {
                        width: 100%;
                        background: #1f2937;
                        border: 2px solid #374151;
                        border-radius: 6px;
                        color: #fff;
                        padding: 12px 16px;
                        transition: border-color 0.3s, box-shadow 0.3s;
                    }
                    .contact-field input:focus,
                    .contact-field textarea:focus {
                        outline: none;
                        border-color: #ebcb4c;
                        box-shadow: 0 0 8px rgba(235, 203, 76, 0.5);
                    }
                    .contact-field textarea { min-height: 120px; }
                    .contact-send {
                        width: 100%;
                        background: #ebcb4c;
                        color: #111827;
                        font-weight: bold;
                        border: none;
                        border-radius: 6px;
                        padding: 12px 24px;
                        cursor: pointer;
                        transition: transform 0.3s, background 0.3s;
                    }
                    .contact-send:hover {
                        background: #f6da6a;
                        transform: scale(1.05);
                    }
                    .contact-send:active { transform: scale(0.95); }
                "#}
            </style>
            <div class="contact-header">
                <h2 class="contact-heading">{"CONTACT US"}</h2>
                <button class="contact-close" onclick={onclick_close} aria-label="Close contact form">
                    {"✕"}
                </button>
            </div>
            <form onsubmit={onsubmit}>
                <div class="contact-field">
                    <label for="name">{"NAME"}</label>
                    <input
                        id="name"
                        type="text"
                        required={true}
                        placeholder="Your name"
                        value={(*name).clone()}
                        onchange={let name = name.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            name.set(input.value());
                        }}
                    />
                </div>
                <div class="contact-field">
                    <label for="email">{"EMAIL"}</label>
                    <input
                        id="email"
                        type="email"
                        required={true}
                        placeholder="your.email@example.com"
                        value={(*email).clone()}
                        onchange={let email = email.clone(); move |e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            email.set(input.value());
                        }}
                    />
                </div>
                <div class="contact-field">
                    <label for="message">{"MESSAGE"}</label>
                    <textarea
                        id="message"
                        rows="4"
                        required={true}
                        placeholder="Your message here..."
                        value={(*message).clone()}
                        onchange={let message = message.clone(); move |e: Event| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            message.set(input.value());
                        }}
                    />
                </div>
                <div>
                    <button class="contact-send" type="submit">{"SEND MESSAGE"}</button>
                </div>
            </form>
        </div>
    }
}
