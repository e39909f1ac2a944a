use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::image_block::fallback_to_placeholder;
use crate::components::reveal::Reveal;
use crate::config::{HOVER_CLOSE_DELAY_MS, LOGO_LIGHT};
use crate::content::{FOOTER_LINKS, SERVICES, SOCIAL_LINKS};
use crate::motion::menu::{DropdownMenu, HoverRegion, MenuAction, MenuState};
use crate::motion::reveal::{RevealPreset, Stagger};
use crate::Route;

const BLOCKS: Stagger = Stagger::new(0, 200);

fn fade_in_up() -> RevealPreset {
    RevealPreset::fade_up(20.0)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    // Independent of the navbar; scrolling does not close it.
    let services = use_reducer(DropdownMenu::default);

    {
        let dispatcher = services.dispatcher();
        use_effect_with_deps(
            move |state: &MenuState| {
                let timeout = match *state {
                    MenuState::PendingClose { epoch } => Some(Timeout::new(HOVER_CLOSE_DELAY_MS, move || {
                        dispatcher.dispatch(MenuAction::Settle(epoch))
                    })),
                    _ => None,
                };
                move || drop(timeout)
            },
            services.state(),
        );
    }

    let dispatch = |action: MenuAction| {
        let dispatcher = services.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: linear-gradient(to bottom right, #111827, #134e4a);
                        color: #fff;
                        border-top: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 4rem 4rem 0 0;
                    }
                    .footer-top, .footer-bottom {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        justify-content: space-between;
                        gap: 2.5rem;
                    }
                    .footer-top {
                        align-items: center;
                        padding: 3rem 1.5rem;
                    }
                    .footer-brand {
                        max-width: 28rem;
                    }
                    .footer-brand img {
                        width: 120px;
                        height: auto;
                        margin-bottom: 0.75rem;
                    }
                    .footer-brand p, .footer-bottom p {
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: #f9fafb;
                    }
                    .footer-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .footer-links a, .footer-services > button {
                        color: #f9fafb;
                        background: none;
                        border: none;
                        font: inherit;
                        cursor: pointer;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-links a:hover, .footer-services > button:hover {
                        color: #e5e7eb;
                        text-decoration: underline;
                    }
                    .footer-services {
                        position: relative;
                    }
                    .footer-services-panel {
                        position: absolute;
                        right: 0;
                        bottom: 100%;
                        z-index: 50;
                        min-width: 220px;
                        padding: 1rem 1.5rem;
                        border-radius: 0.5rem;
                        background: #fff;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        animation: footerPanelIn 0.25s ease-out;
                    }
                    @keyframes footerPanelIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: none; }
                    }
                    .footer-services-panel a {
                        display: block;
                        padding: 0.5rem 0;
                        color: #374151;
                    }
                    .footer-services-panel a:hover {
                        color: #0d9488;
                        text-decoration: none;
                    }
                    .footer-bottom {
                        align-items: center;
                        padding: 1.5rem 1.5rem 2.5rem;
                        border-top: 1px solid #d1d5db;
                    }
                    .socials {
                        display: flex;
                        gap: 0.75rem;
                        margin-top: 2rem;
                    }
                    .socials a {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border: 1px solid rgba(255, 255, 255, 0.2);
                        border-radius: 0.75rem;
                        background: rgba(255, 255, 255, 0.1);
                        color: #fff;
                        text-decoration: none;
                        backdrop-filter: blur(4px);
                        transition: transform 0.2s, background 0.3s;
                    }
                    .socials a:hover {
                        background: rgba(255, 255, 255, 0.2);
                        transform: translateY(-2px) scale(1.1);
                    }
                    .socials a:active {
                        transform: scale(0.95);
                    }
                    @media (max-width: 768px) {
                        .footer-top, .footer-bottom, .footer-links {
                            flex-direction: column;
                            align-items: flex-start;
                        }
                        .footer-bottom {
                            align-items: center;
                            text-align: center;
                        }
                    }
                "#}
            </style>

            <div class="footer-top">
                <Reveal class="footer-brand" threshold={0.3} delay_ms={BLOCKS.delay_for_index(0)}
                    preset={fade_in_up()}>
                    <img src={LOGO_LIGHT} alt="Booker Accounting Company Logo" onerror={fallback_to_placeholder()} />
                    <p>{ "Booker refers to the global organization of accounting and consultancy firms, providing trusted financial services with integrity and innovation." }</p>
                </Reveal>

                <Reveal class="footer-links" threshold={0.3} delay_ms={BLOCKS.delay_for_index(1)}
                    preset={fade_in_up()}>
                    <div class="footer-services" onmouseenter={dispatch(MenuAction::Enter(HoverRegion::Trigger))}
                        onmouseleave={dispatch(MenuAction::Leave(HoverRegion::Trigger))}>
                        <button>{ "Services ▾" }</button>
                        {
                            if services.is_open() {
                                html! {
                                    <div class="footer-services-panel" onclick={dispatch(MenuAction::Close)}>
                                        { for SERVICES.iter().map(|service| html! {
                                            <Link<Route> to={service.route}>{ service.title }</Link<Route>>
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                    { for FOOTER_LINKS.iter().map(|link| html! {
                        <Link<Route> to={link.route}>{ link.label }</Link<Route>>
                    }) }
                </Reveal>
            </div>

            <Reveal class="footer-bottom" threshold={0.3} delay_ms={BLOCKS.delay_for_index(2)}
                preset={fade_in_up()}>
                <p>{ "Booker Global Limited, each of which is a separate legal entity." }</p>
                <Reveal class="socials" threshold={0.0} delay_ms={600} preset={RevealPreset::fade()}>
                    { for SOCIAL_LINKS.iter().map(|social| html! {
                        <a href={social.href} aria-label={social.label}>{ social.glyph }</a>
                    }) }
                </Reveal>
            </Reveal>
        </footer>
    }
}
