use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::image_block::fallback_to_placeholder;
use crate::components::reveal::Reveal;
use crate::config::HERO_IMAGE;
use crate::dom::in_view::RevealTrigger;
use crate::dom::scroll::use_exit_progress;
use crate::motion::parallax::HeroParallax;
use crate::motion::reveal::RevealPreset;
use crate::Route;

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    let section = use_node_ref();
    let parallax = HeroParallax::at(use_exit_progress(section.clone()));

    let section_style = format!(
        "border-bottom-left-radius: {r}px; border-bottom-right-radius: {r}px;",
        r = parallax.corner_radius_px
    );
    let content_style = format!("transform: translateY({}%);", parallax.content_offset_pct);

    html! {
        <section id="home" ref={section} class="hero" style={section_style}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        color: #fff;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        animation: heroZoom 10s ease-in-out infinite alternate;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: center;
                    }
                    @keyframes heroZoom {
                        0% { transform: scale(1); }
                        50% { transform: scale(1.1); }
                        100% { transform: scale(1); }
                    }
                    .hero-dim {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.6);
                    }
                    .hero-gradient {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        background: linear-gradient(to right, rgba(7, 40, 48, 0.9), rgba(7, 40, 48, 0.7), transparent);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 20;
                        width: 100%;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        padding: 5rem 2rem;
                        text-align: center;
                        will-change: transform;
                    }
                    .hero-copy {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .hero h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 900;
                        line-height: 1.1;
                        letter-spacing: -0.025em;
                        margin-bottom: 2rem;
                    }
                    .hero-accent {
                        background: linear-gradient(90deg, #22d3ee, #06b6d4, #1c5e6a, #22d3ee);
                        background-size: 200% auto;
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                        animation: heroGradient 6s linear infinite;
                    }
                    @keyframes heroGradient {
                        to { background-position: 200% center; }
                    }
                    .hero-subtext {
                        max-width: 42rem;
                        margin: 0 auto 2.5rem;
                        font-size: clamp(1.125rem, 2vw, 1.5rem);
                        line-height: 1.6;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 0.75rem 2rem;
                        border: 2px solid #fff;
                        border-radius: 9999px 9999px 9999px 0;
                        color: #fff;
                        font-size: 1.125rem;
                        font-weight: 600;
                        text-decoration: none;
                        transition: transform 0.2s, box-shadow 0.3s;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.25);
                    }
                    .hero-cta:active {
                        transform: scale(0.97);
                    }
                "#}
            </style>
            <div class="hero-background">
                <img src={HERO_IMAGE} alt="Accounting Team" onerror={fallback_to_placeholder()} />
            </div>
            <div class="hero-dim" />
            <div class="hero-gradient" />

            <div class="hero-content" style={content_style}>
                <Reveal class="hero-copy" trigger={RevealTrigger::Mount}
                    preset={RevealPreset::fade_up(40.0).duration(1200)}>
                    <h1>
                        <Reveal trigger={RevealTrigger::Mount} delay_ms={400}
                            preset={RevealPreset::fade_up(20.0).duration(800)}>
                            { "Strategic Expertise From" }
                        </Reveal>
                        <Reveal trigger={RevealTrigger::Mount} delay_ms={800}
                            preset={RevealPreset::fade_up(20.0).duration(800)}>
                            <span class="hero-accent">{ "Dedicated Advisors" }</span>
                        </Reveal>
                    </h1>
                    <Reveal class="hero-subtext" trigger={RevealTrigger::Mount} delay_ms={1200}
                        preset={RevealPreset::fade_up(20.0).duration(800)}>
                        { "At Booker Accounting, we deliver tailored, technology-driven solutions to drive your success in the UAE's dynamic financial landscape." }
                    </Reveal>
                    <Reveal trigger={RevealTrigger::Mount} delay_ms={1500}
                        preset={RevealPreset::fade_up(20.0).duration(800)}>
                        <Link<Route> to={Route::Contact} classes="hero-cta">{ "Get Started" }</Link<Route>>
                    </Reveal>
                </Reveal>
            </div>
        </section>
    }
}
