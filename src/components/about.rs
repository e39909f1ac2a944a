use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::image_block::ImageBlock;
use crate::components::reveal::Reveal;
use crate::motion::reveal::{Easing, RevealPreset};
use crate::Route;

const WHO_WE_ARE_IMAGE: &str = "/images/newimg2.png";
const PARTNERSHIP_IMAGE: &str = "/images/business66.png";
const GROWTH_IMAGE: &str = "/images/newimg3.png";

fn line() -> RevealPreset {
    RevealPreset::fade_up(20.0).easing(Easing::Spring)
}

fn list_item() -> RevealPreset {
    RevealPreset::slide_from_left(20.0).duration(450).easing(Easing::Spring)
}

#[derive(Properties, PartialEq)]
struct ContentBlockProps {
    children: Children,
}

/// Text column whose children rise in one after another.
#[function_component(ContentBlock)]
fn content_block(props: &ContentBlockProps) -> Html {
    html! {
        <Reveal class="content-block" threshold={0.2} stagger_ms={Some(150)}
            preset={RevealPreset::fade()} child_preset={Some(line())}>
            { for props.children.iter() }
        </Reveal>
    }
}

fn core_identity() -> Html {
    html! {
        <ContentBlock>
            <h2>{ "Who We Are" }</h2>
            <p class="lead">
                { "Our team is more than just a group of accountants; we are a strategic unit. We combine expert minds with the power of cutting-edge AI Tools to ensure accuracy and drive measurable results." }
            </p>
            <div class="identity-note">
                <span class="icon">{ "◈" }</span>
                <p>{ "Client-first mindset, local insight, and lasting relationships based on trust." }</p>
            </div>
        </ContentBlock>
    }
}

fn mission_vision() -> Html {
    html! {
        <ContentBlock>
            <p class="eyebrow">{ "Our Mission & Vision" }</p>
            <h3>{ "Our Mission" }</h3>
            <p>{ "To deliver brilliance through expert financial insights, maintain perfect balance (compliance), and build strong foundations for confident, sustainable growth." }</p>
            <h3>{ "Our Vision" }</h3>
            <p>{ "To become the most trusted and forward-thinking financial partner, empowering businesses through expert accounting, strategic advisory, and AI-driven innovation." }</p>
        </ContentBlock>
    }
}

fn selling_points() -> Html {
    let points = [
        ("↗", "Specialized UAE Focus:", "We are purpose-built to serve privately owned companies and entrepreneurs in the UAE, focusing on profitability and strategic tax planning."),
        ("◎", "Proven Local Expertise:", "Offering deep local knowledge and a comprehensive understanding of business regulations and compliance throughout the UAE."),
        ("✦", "Customized Solutions:", "We implement tailored accounting, bookkeeping, and tax strategies designed specifically for your business needs."),
    ];

    html! {
        <ContentBlock>
            <p class="eyebrow">{ "Why Partner with Us" }</p>
            <Reveal class="selling-points" threshold={0.2} stagger_ms={Some(150)} delay_ms={100}
                preset={RevealPreset::fade()} child_preset={Some(list_item())}>
                { for points.iter().map(|(icon, heading, body)| html! {
                    <div class="selling-point">
                        <span class="icon">{ *icon }</span>
                        <div>
                            <strong>{ *heading }</strong>
                            <p>{ *body }</p>
                        </div>
                    </div>
                }) }
            </Reveal>
        </ContentBlock>
    }
}

#[function_component(AboutUs)]
pub fn about_us() -> Html {
    html! {
        <section class="about">
            <style>
                {r#"
                    .about {
                        background: #f5f5f0;
                        padding: 5rem 2rem;
                    }
                    .about-header {
                        max-width: 80rem;
                        margin: 0 auto 5rem;
                        text-align: center;
                    }
                    .about-header h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 300;
                        color: #111827;
                        margin-bottom: 1rem;
                    }
                    .about-header h1 strong {
                        font-weight: 600;
                    }
                    .about-header .brand-mark {
                        color: #1c5e6a;
                    }
                    .about-header p {
                        max-width: 56rem;
                        margin: 0 auto;
                        font-size: clamp(1.25rem, 2vw, 1.5rem);
                        color: #374151;
                    }
                    .about-rows {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        gap: 5rem;
                    }
                    .about-row {
                        display: flex;
                        gap: 2rem;
                        align-items: stretch;
                    }
                    .about-row.reverse {
                        flex-direction: row-reverse;
                    }
                    .about-row > * {
                        flex: 1;
                    }
                    .content-block {
                        padding: 3rem;
                        min-height: 400px;
                        color: #111827;
                    }
                    .content-block h2, .content-block h3 {
                        font-size: clamp(2.25rem, 4vw, 3rem);
                    }
                    .content-block h2 {
                        font-weight: 300;
                        margin-bottom: 1rem;
                    }
                    .content-block h3 {
                        font-weight: 600;
                        margin: 1.5rem 0 0.5rem;
                    }
                    .content-block .lead {
                        font-size: 1.125rem;
                        line-height: 1.7;
                        margin-bottom: 1.5rem;
                    }
                    .eyebrow {
                        font-size: 0.875rem;
                        font-weight: 600;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                        color: #0d9488;
                        margin-bottom: 0.75rem;
                    }
                    .identity-note, .selling-point {
                        display: flex;
                        align-items: flex-start;
                        gap: 0.75rem;
                    }
                    .identity-note {
                        margin-top: 2rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        color: #374151;
                    }
                    .icon {
                        font-size: 1.75rem;
                        color: #0891b2;
                    }
                    .selling-points {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .selling-point strong {
                        font-size: clamp(1.5rem, 2.5vw, 1.875rem);
                    }
                    .selling-point p {
                        color: #374151;
                    }
                    .image-block {
                        position: relative;
                        overflow: hidden;
                    }
                    .image-block img {
                        width: 100%;
                        height: 100%;
                        min-height: 400px;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .about-cta {
                        max-width: 80rem;
                        margin: 5rem auto 0;
                        text-align: center;
                    }
                    .about-cta a {
                        display: inline-block;
                        padding: 1rem 3rem;
                        border: 2px solid #fff;
                        border-radius: 9999px 9999px 9999px 0;
                        background: #1c5e6a;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 300;
                        text-decoration: none;
                        transition: opacity 0.3s;
                    }
                    .about-cta a:hover {
                        opacity: 0.9;
                    }
                    @media (max-width: 1024px) {
                        .about-row, .about-row.reverse {
                            flex-direction: column;
                        }
                        .content-block {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>

            <Reveal class="about-header" threshold={0.0} preset={RevealPreset::fade_down(20.0)}>
                <h1>{ "The " }<strong><span class="brand-mark">{ "BAC" }</span>{ " Difference" }</strong></h1>
                <p>{ "A Strategic Force Behind Your Numbers: Driven by expertise. Focused on strategy. Committed to your growth." }</p>
            </Reveal>

            <div class="about-rows">
                <div class="about-row">
                    { core_identity() }
                    <ImageBlock src={WHO_WE_ARE_IMAGE} alt="Abstract image representing AI and strategic thinking" />
                </div>
                <div class="about-row reverse">
                    { mission_vision() }
                    <ImageBlock src={PARTNERSHIP_IMAGE} alt="Professionals collaborating on a financial partnership" />
                </div>
                <div class="about-row">
                    { selling_points() }
                    <ImageBlock src={GROWTH_IMAGE} alt="Chart representing business growth and success in a modern city (UAE)" />
                </div>
            </div>

            <Reveal class="about-cta" threshold={0.5} preset={RevealPreset::scale_in(0.9).duration(500)}>
                <Link<Route> to={Route::Contact}>{ "Schedule Your Strategic Consultation" }</Link<Route>>
            </Reveal>
        </section>
    }
}
