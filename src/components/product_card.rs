use yew::prelude::*;

use crate::config;
use crate::typewriter::hook::{use_typewriter, use_typewriter_after};

#[derive(Clone, PartialEq)]
pub struct ProductDetail {
    pub label: String,
    pub text: String,
}

#[derive(Clone, PartialEq)]
pub struct ProductSection {
    pub title: String,
    pub start_delay_ms: u32,
    pub details: Vec<ProductDetail>,
}

#[derive(Properties, PartialEq)]
struct DetailRowProps {
    pub detail: ProductDetail,
    pub index: u32,
    pub base_delay_ms: u32,
    pub visible: bool,
}

// One "label: body" row. The label session is chained on the section title
// finishing, staggered per row; the body session is chained on the label.
#[function_component(DetailRow)]
fn detail_row(props: &DetailRowProps) -> Html {
    let label = use_typewriter_after(
        props.visible,
        props.detail.label.clone(),
        config::DETAIL_CADENCE_MS,
        props.base_delay_ms + config::DETAIL_STAGGER_MS * props.index,
    );
    let body = use_typewriter_after(
        props.visible && label.is_done,
        props.detail.text.clone(),
        config::DETAIL_CADENCE_MS,
        0,
    );

    if !props.visible {
        return html! {};
    }

    let caret_class = if label.is_done && body.is_done {
        "caret caret-hidden"
    } else {
        "caret caret-blink"
    };

    html! {
        <div class="detail-row">
            <div class="detail-text">
                <span class="detail-label">{ label.text.clone() }</span>
                { if label.is_done { html! { <span>{": "}</span> } } else { html! {} } }
                <span class="detail-body">{ body.text.clone() }</span>
            </div>
            <span class={caret_class}></span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TypedSectionProps {
    pub section: ProductSection,
}

#[function_component(TypedSection)]
fn typed_section(props: &TypedSectionProps) -> Html {
    let title = use_typewriter(
        props.section.title.clone(),
        config::TITLE_CADENCE_MS,
        props.section.start_delay_ms,
    );

    let caret_class = if title.is_done {
        "caret caret-blink"
    } else {
        "caret caret-hidden"
    };

    html! {
        <div class="typed-section">
            <h2 class="section-title">
                { title.text.clone() }
                <span class={caret_class}></span>
            </h2>
            <div class="section-details">
                { for props.section.details.iter().enumerate().map(|(index, detail)| html! {
                    <DetailRow
                        detail={detail.clone()}
                        index={index as u32}
                        base_delay_ms={props.section.start_delay_ms}
                        visible={title.is_done}
                    />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProductsContentProps {
    pub sections: Vec<ProductSection>,
    pub summary_text: String,
}

#[function_component(ProductsContent)]
fn products_content(props: &ProductsContentProps) -> Html {
    // The summary runs on a fixed clock, independent of the sections; see
    // config::SUMMARY_START_DELAY_MS.
    let summary = use_typewriter(
        props.summary_text.clone(),
        config::TITLE_CADENCE_MS,
        config::SUMMARY_START_DELAY_MS,
    );

    let caret_class = if summary.is_done {
        "caret caret-blink"
    } else {
        "caret caret-hidden"
    };

    html! {
        <>
            { for props.sections.iter().map(|section| html! {
                <TypedSection section={section.clone()} />
            }) }
            <p class="summary-line">
                { summary.text.clone() }
                <span class={caret_class}></span>
            </p>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProductCardProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub title: String,
    pub sections: Vec<ProductSection>,
    pub summary_text: String,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let onclick_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let overlay_class = if props.show {
        "card-overlay card-overlay-open"
    } else {
        "card-overlay"
    };

    let heading: Html = props
        .title
        .chars()
        .enumerate()
        .map(|(index, ch)| {
            let class = match (index, ch) {
                (0, _) => "heading-char pulse",
                (_, ' ') => "heading-char heading-gap",
                _ => "heading-char",
            };
            html! { <span class={class}>{ ch.to_string() }</span> }
        })
        .collect();

    html! {
        <div class={overlay_class}>
            <style>
                {r#"
                    .card-overlay {
                        position: fixed;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 30;
                        pointer-events: none;
                    }
                    .card-overlay-open {
                        pointer-events: auto;
                    }
                    .product-card {
                        background: rgba(17, 24, 39, 0.95);
                        backdrop-filter: blur(12px);
                        border: 1px solid rgba(235, 203, 76, 0.3);
                        box-shadow: 0 0 15px rgba(235, 203, 76, 0.3);
                        border-radius: 8px;
                        padding: 40px;
                        width: 75%;
                        max-width: 720px;
                        color: #fff;
                        transform: scale(0.95);
                        opacity: 0;
                        transition: all 0.5s ease-in-out;
                    }
                    .card-overlay-open .product-card {
                        transform: scale(1);
                        opacity: 1;
                    }
                    .card-header {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 24px;
                    }
                    .card-heading {
                        color: #ebcb4c;
                        font-style: italic;
                        letter-spacing: 0.1em;
                        font-size: 1.5rem;
                        font-weight: bold;
                    }
                    .heading-char { display: inline-block; }
                    .heading-gap { margin-left: 8px; }
                    .card-close {
                        background: none;
                        border: none;
                        color: #ebcb4c;
                        font-size: 1.2rem;
                        cursor: pointer;
                        transition: transform 0.3s, color 0.3s;
                    }
                    .card-close:hover {
                        color: #fff;
                        transform: rotate(90deg);
                    }
                    .card-body {
                        overflow-y: auto;
                        max-height: 70vh;
                        font-family: monospace;
                    }
                    .typed-section { margin-bottom: 32px; }
                    .section-title {
                        color: #ebcb4c;
                        font-size: 1.25rem;
                        text-align: center;
                        margin-bottom: 12px;
                    }
                    .detail-row {
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 16px;
                    }
                    .detail-text { flex: 1; }
                    .detail-label { color: #6c97a5; font-weight: 500; }
                    .summary-line {
                        margin-top: 32px;
                        color: #ebcb4c;
                        font-weight: bold;
                        font-size: 1.1rem;
                        text-align: center;
                    }
                    .caret {
                        display: inline-block;
                        width: 8px;
                        height: 1em;
                        margin-left: 4px;
                        vertical-align: text-bottom;
                        background: #ebcb4c;
                    }
                    .caret-hidden { opacity: 0; }
                    .caret-blink { animation: caret-blink 1s step-end infinite; }
                    @keyframes caret-blink { 50% { opacity: 0; } }
                    @keyframes heading-pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }
                    .pulse { animation: heading-pulse 3s ease-in-out infinite; }
                "#}
            </style>
            <div class="product-card">
                <div class="card-header">
                    <h2 class="card-heading">{ heading }</h2>
                    <button class="card-close" onclick={onclick_close} aria-label="Close products card">
                        {"✕"}
                    </button>
                </div>
                <div class="card-body">
                    // Mounted only while shown: reopening restarts every
                    // reveal, closing tears the sessions down.
                    { if props.show {
                        html! {
                            <ProductsContent
                                sections={props.sections.clone()}
                                summary_text={props.summary_text.clone()}
                            />
                        }
                    } else { html! {} } }
                </div>
            </div>
        </div>
    }
}
