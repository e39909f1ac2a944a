use yew::prelude::*;

use crate::components::counter::AnimatedCounter;
use crate::components::reveal::Reveal;
use crate::content::{Achievement, BadgeArt, ACHIEVEMENTS};
use crate::motion::reveal::{Easing, RevealPreset, Stagger};

/// Per-card start times: the card, then its number, title and underline.
const CARD: Stagger = Stagger::new(0, 200);
const NUMBER_OFFSET_MS: u32 = 300;
const TITLE_OFFSET_MS: u32 = 500;
const UNDERLINE_OFFSET_MS: u32 = 700;

fn badge(art: BadgeArt) -> Html {
    let body = match art {
        BadgeArt::Certificate => html! {
            <g class="badge-pop">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#1c5e6a" stroke-width="2" />
                <path class="badge-draw" d="M35,50 L45,60 L65,40" fill="none" stroke="#1c5e6a"
                    stroke-width="3" stroke-linecap="round" pathLength="1" />
            </g>
        },
        BadgeArt::Clock => html! {
            <g class="badge-pop">
                <circle cx="50" cy="50" r="40" fill="none" stroke="#0d1a20" stroke-width="2" />
                <line class="spin-fast" x1="50" y1="50" x2="50" y2="25" stroke="#0d1a20"
                    stroke-width="3" stroke-linecap="round" />
                <line class="spin-slow" x1="50" y1="50" x2="50" y2="15" stroke="#1c5e6a"
                    stroke-width="2" stroke-linecap="round" />
            </g>
        },
        BadgeArt::Smile => html! {
            <g class="badge-pop">
                <path class="badge-draw" d="M30,50 Q50,30 70,50 Q50,70 30,50" fill="none"
                    stroke="#1c5e6a" stroke-width="2" pathLength="1" />
                <circle class="pulse" cx="40" cy="45" r="4" fill="#1c5e6a" />
                <circle class="pulse delayed" cx="60" cy="45" r="4" fill="#1c5e6a" />
                <path d="M40,55 Q50,62 60,55" fill="none" stroke="#1c5e6a" stroke-width="2"
                    stroke-linecap="round" />
            </g>
        },
    };
    html! {
        <svg class="badge-art" viewBox="0 0 200 100">{ body }</svg>
    }
}

fn card(index: usize, achievement: &Achievement) -> Html {
    let start = CARD.delay_for_index(index);
    html! {
        <Reveal class="achievement" delay_ms={start} threshold={0.0}
            preset={RevealPreset::fade_up(50.0).duration(800)}>
            <div class="badge-holder">{ badge(achievement.art) }</div>
            <Reveal class="achievement-number" delay_ms={start + NUMBER_OFFSET_MS} threshold={0.0}
                preset={RevealPreset::scale_in(0.5).easing(Easing::Spring)}>
                <AnimatedCounter value={achievement.number} suffix={achievement.suffix} />
            </Reveal>
            <Reveal delay_ms={start + TITLE_OFFSET_MS} threshold={0.0}
                preset={RevealPreset::fade_up(20.0)}>
                <h3>{ achievement.title }</h3>
            </Reveal>
            <Reveal class="underline" delay_ms={start + UNDERLINE_OFFSET_MS} threshold={0.0}
                preset={RevealPreset::fade().duration(1000)} />
        </Reveal>
    }
}

#[function_component(MainAchievements)]
pub fn main_achievements() -> Html {
    html! {
        <section class="achievements">
            <style>
                {r#"
                    .achievements {
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 0;
                    }
                    .achievements-backdrop {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        opacity: 0.05;
                    }
                    .achievements-inner {
                        position: relative;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .achievements-headline {
                        position: relative;
                        z-index: 10;
                        margin-bottom: 5rem;
                        padding: 0 1.5rem;
                        font-size: clamp(1.875rem, 4vw, 3rem);
                        font-weight: 300;
                        line-height: 1.6;
                        color: #000;
                    }
                    .achievements-headline span {
                        color: #4dc2d1;
                        font-weight: 600;
                    }
                    .achievement-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 4rem;
                    }
                    .achievement {
                        position: relative;
                        text-align: center;
                    }
                    .badge-holder {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        pointer-events: none;
                    }
                    .badge-art {
                        width: 100%;
                        height: 6rem;
                        opacity: 0.1;
                    }
                    .badge-pop {
                        transform-origin: 50px 50px;
                        animation: badgePop 1s ease-out both;
                    }
                    @keyframes badgePop {
                        from { transform: scale(0); }
                        to { transform: scale(1); }
                    }
                    .badge-draw {
                        stroke-dasharray: 1;
                        stroke-dashoffset: 1;
                        animation: badgeDraw 2s 0.5s ease-out forwards;
                    }
                    @keyframes badgeDraw {
                        to { stroke-dashoffset: 0; }
                    }
                    .spin-fast, .spin-slow {
                        transform-origin: 50px 50px;
                        animation: spin 10s linear infinite;
                    }
                    .spin-slow {
                        animation-duration: 60s;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .pulse {
                        transform-box: fill-box;
                        transform-origin: center;
                        animation: pulse 2s infinite;
                    }
                    .pulse.delayed {
                        animation-delay: 0.5s;
                    }
                    @keyframes pulse {
                        50% { transform: scale(1.2); }
                    }
                    .achievement-number {
                        position: relative;
                        z-index: 10;
                        margin-bottom: 1rem;
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 700;
                        color: #0d1a20;
                    }
                    .achievement h3 {
                        position: relative;
                        z-index: 10;
                        font-size: clamp(1.5rem, 2.5vw, 1.875rem);
                        font-weight: 300;
                        text-transform: uppercase;
                        letter-spacing: 0.025em;
                        color: #0d1a20;
                    }
                    .underline {
                        width: 8rem;
                        height: 4px;
                        margin: 1.5rem auto 0;
                        background: linear-gradient(to right, transparent, #4dc2d1, transparent);
                    }
                    .achievements-flourish {
                        display: flex;
                        justify-content: center;
                        margin-top: 5rem;
                    }
                    .achievements-flourish svg {
                        width: 16rem;
                        height: 1.25rem;
                    }
                    .float-dot {
                        position: absolute;
                        border-radius: 9999px;
                        animation: floatDot 4s ease-in-out infinite;
                    }
                    .float-dot.one {
                        top: 25%;
                        left: 2.5rem;
                        width: 1rem;
                        height: 1rem;
                        background: #4dc2d1;
                    }
                    .float-dot.two {
                        bottom: 25%;
                        right: 4rem;
                        width: 0.75rem;
                        height: 0.75rem;
                        background: #0d1a20;
                        animation-duration: 5s;
                        animation-delay: 1s;
                    }
                    .float-dot.three {
                        top: 33%;
                        right: 5rem;
                        width: 0.5rem;
                        height: 0.5rem;
                        background: #4dc2d1;
                        animation-duration: 3s;
                        animation-delay: 2s;
                    }
                    @keyframes floatDot {
                        0%, 100% { transform: translateY(0); opacity: 0.3; }
                        50% { transform: translateY(-20px); opacity: 0.7; }
                    }
                    .slow-spin {
                        transform-origin: 200px 150px;
                        animation: spin 120s linear infinite;
                    }
                    @media (max-width: 768px) {
                        .achievement-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>

            <svg class="achievements-backdrop" viewBox="0 0 1000 600">
                <g class="slow-spin">
                    <circle cx="200" cy="150" r="80" fill="none" stroke="#1c5e6a" stroke-width="1" />
                    <circle cx="200" cy="150" r="120" fill="none" stroke="#1c5e6a" stroke-width="1"
                        stroke-dasharray="4 4" />
                </g>
                <rect x="700" y="400" width="100" height="100" fill="none" stroke="#0d1a20"
                    stroke-width="1" rx="10" />
            </svg>

            <div class="achievements-inner">
                <Reveal class="achievements-headline" threshold={0.2} stagger_ms={Some(200)}
                    preset={RevealPreset::fade_up(30.0).duration(800)}
                    child_preset={Some(RevealPreset::fade_up(20.0).duration(500))}>
                    <div>{ "Booker, driven by " }<span>{ "expertise." }</span></div>
                    <div>{ "Focused on " }<span>{ "strategy." }</span></div>
                    <div>{ "Committed to your " }<span>{ "growth." }</span></div>
                </Reveal>

                <div class="achievement-grid">
                    { for ACHIEVEMENTS.iter().enumerate().map(|(index, achievement)| card(index, achievement)) }
                </div>

                <Reveal class="achievements-flourish" delay_ms={800} threshold={0.0}
                    preset={RevealPreset::fade().duration(1000)}>
                    <svg viewBox="0 0 400 20">
                        <path class="badge-draw" d="M0,10 Q100,0 200,10 Q300,20 400,10" fill="none"
                            stroke="#1c5e6a" stroke-width="2" stroke-linecap="round" pathLength="1" />
                    </svg>
                </Reveal>

                <div class="float-dot one" />
                <div class="float-dot two" />
                <div class="float-dot three" />
            </div>
        </section>
    }
}
