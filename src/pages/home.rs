use log::{info, warn};
use yew::prelude::*;

use crate::components::contact_form::{ContactForm, ContactPayload};
use crate::components::product_card::{ProductCard, ProductDetail, ProductSection};
use crate::config;

fn detail(label: &str, text: &str) -> ProductDetail {
    ProductDetail {
        label: label.to_string(),
        text: text.to_string(),
    }
}

// The five showcase sections. Each carries its own start delay; sections
// type concurrently and do not wait on each other.
fn product_sections() -> Vec<ProductSection> {
    vec![
        ProductSection {
            title: "Closer Agent (Sales & Revenue)".to_string(),
            start_delay_ms: 300,
            details: vec![
                detail("Lead Intelligence", "Auto-qualifies and researches potential customers."),
                detail("Closing Support", "Summarizes past conversations for better sales outcomes."),
                detail("Qualifying Bot", "Manages initial customer interactions and schedules appointments."),
            ],
        },
        ProductSection {
            title: "Assistant Agent (Executive Support)".to_string(),
            start_delay_ms: 1500,
            details: vec![
                detail("Email Sorting", "Automatically manages and categorizes incoming emails."),
                detail("Calendar Management", "Optimizes schedules and handles appointment changes efficiently."),
                detail("Booking Management", "Automates travel and reservation tasks."),
            ],
        },
        ProductSection {
            title: "Workflow Agent (Operations & Productivity)".to_string(),
            start_delay_ms: 2700,
            details: vec![
                detail("System Creator Bot", "Creates and maintains standard procedures and checklists."),
                detail("Office Manager Bot", "Manages daily tasks such as scheduling and expense tracking."),
                detail("Customer Support Bot", "Handles routine support inquiries, allowing teams to focus on complex issues."),
            ],
        },
        ProductSection {
            title: "Amplifier Agent (Marketing & Content Creation)".to_string(),
            start_delay_ms: 3900,
            details: vec![
                detail("Content Analysis", "Reviews content to identify successful strategies."),
                detail("Content Checker", "Ensures consistency with brand voice and style."),
                detail("Content Creation", "Generates engaging multi-format content to reach wider audiences."),
            ],
        },
        ProductSection {
            title: "Money Agent (Financial Management)".to_string(),
            start_delay_ms: 5100,
            details: vec![
                detail("Cash Flow Bot", "Real-time cash monitoring and forecasting."),
                detail("Payment Bot", "Streamlines invoice processing and financial entries."),
                detail("Fraud Detection Bot", "Identifies and prevents unusual financial activities."),
            ],
        },
    ]
}

#[function_component(Home)]
pub fn home() -> Html {
    let show_products = use_state(|| false);
    let show_contact = use_state(|| false);

    let toggle_products = {
        let show_products = show_products.clone();
        Callback::from(move |_: MouseEvent| show_products.set(!*show_products))
    };
    let toggle_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_: MouseEvent| show_contact.set(!*show_contact))
    };
    let close_products = {
        let show_products = show_products.clone();
        Callback::from(move |_| show_products.set(false))
    };
    let close_contact = {
        let show_contact = show_contact.clone();
        Callback::from(move |_| show_contact.set(false))
    };

    // The webhook POST itself belongs to the embedding automation; until
    // that is wired up, log what would be sent where.
    let handle_submit = Callback::from(move |payload: ContactPayload| {
        match serde_json::to_string(&payload) {
            Ok(body) => info!("contact form submitted to {}: {}", config::get_webhook_url(), body),
            Err(e) => warn!("failed to serialize contact payload: {}", e),
        }
    });

    html! {
        <div class="home">
            <style>
                {r#"
                    .home {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100vh;
                        width: 100vw;
                        color: #fff;
                        background: linear-gradient(to bottom, #000, #1f2937);
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .home-brand {
                        position: absolute;
                        left: 20px;
                        top: 20px;
                        z-index: 10;
                        color: #ebcb4c;
                        font-size: 1.5rem;
                        font-weight: bold;
                        font-style: italic;
                        letter-spacing: 0.1em;
                    }
                    .home-footer {
                        position: absolute;
                        left: 20px;
                        bottom: 20px;
                        z-index: 10;
                    }
                    .home-footer h1 { font-size: 1.5rem; font-weight: bold; margin: 0; }
                    .home-footer p { font-size: 0.85rem; margin: 4px 0 0; }
                    .home-actions { display: flex; gap: 16px; }
                    .home-action {
                        background: rgba(17, 24, 39, 0.9);
                        border: 1px solid rgba(235, 203, 76, 0.3);
                        box-shadow: 0 0 15px rgba(235, 203, 76, 0.3);
                        border-radius: 8px;
                        color: #ebcb4c;
                        font-weight: bold;
                        letter-spacing: 0.1em;
                        padding: 16px 32px;
                        cursor: pointer;
                        transition: transform 0.3s, color 0.3s;
                    }
                    .home-action:hover { color: #fff; transform: scale(1.05); }
                "#}
            </style>
            <div class="home-brand">{"TEXAS AI CONSULTING"}</div>
            <div class="home-actions">
                <button class="home-action" onclick={toggle_products}>{"OUR PRODUCTS"}</button>
                <button class="home-action" onclick={toggle_contact}>{"CONTACT US"}</button>
            </div>
            <div class="home-footer">
                <h1>{"AI agents for the businesses that run Texas"}</h1>
                <p>{"Custom automation, from first lead to final invoice"}</p>
            </div>
            <ProductCard
                show={*show_products}
                on_close={close_products}
                title={"OUR PRODUCTS".to_string()}
                sections={product_sections()}
                summary_text={"Contact us today to learn how our AI products can transform your business!".to_string()}
            />
            <ContactForm
                show={*show_contact}
                on_close={close_contact}
                on_submit={handle_submit}
            />
        </div>
    }
}
