use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{HOVER_CLOSE_DELAY_MS, LOGO_DARK, LOGO_LIGHT};
use crate::content::{NAV_LINKS, SERVICES};
use crate::dom::in_view::RevealTrigger;
use crate::dom::scroll::use_scroll_subscription;
use crate::components::image_block::fallback_to_placeholder;
use crate::components::reveal::Reveal;
use crate::motion::menu::{HoverRegion, MenuState};
use crate::motion::navbar::{NavAction, NavbarMachine};
use crate::motion::reveal::{Easing, RevealPreset};
use crate::Route;

const CHEVRON: &str = "M19 9l-7 7-7-7";
const BURGER: &str = "M4 6h16M4 12h16M4 18h16";
const CROSS: &str = "M6 18L18 6M6 6l12 12";

fn chevron(open: bool) -> Html {
    html! {
        <svg class={classes!("chevron", open.then_some("open"))} fill="none" stroke="currentColor"
            stroke-width="2" stroke-linecap="round" stroke-linejoin="round" viewBox="0 0 24 24">
            <path d={CHEVRON} />
        </svg>
    }
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let machine = use_reducer(NavbarMachine::default);

    {
        let dispatcher = machine.dispatcher();
        use_scroll_subscription(Callback::from(move |offset: f64| {
            dispatcher.dispatch(NavAction::Scrolled(offset))
        }));
    }

    // A pending close is committed unless the pointer reaches the other region first.
    {
        let dispatcher = machine.dispatcher();
        use_effect_with_deps(
            move |state: &MenuState| {
                let timeout = match *state {
                    MenuState::PendingClose { epoch } => Some(Timeout::new(HOVER_CLOSE_DELAY_MS, move || {
                        dispatcher.dispatch(NavAction::ServicesSettle(epoch))
                    })),
                    _ => None,
                };
                move || drop(timeout)
            },
            machine.services.state(),
        );
    }

    let dispatch = |action: NavAction| {
        let dispatcher = machine.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
    };
    let select_link = dispatch(NavAction::SelectLink);

    let scrolled = machine.scrolled;
    let services_open = machine.services.is_open();
    let logo = if scrolled { LOGO_DARK } else { LOGO_LIGHT };

    let desktop_links = NAV_LINKS.iter().map(|link| {
        if link.route == Route::Services {
            html! {
                <div class="nav-item"
                    onmouseenter={dispatch(NavAction::ServicesEnter(HoverRegion::Trigger))}
                    onmouseleave={dispatch(NavAction::ServicesLeave(HoverRegion::Trigger))}>
                    <button class={classes!("nav-link", services_open.then_some("active"))}>
                        { link.label }
                        { chevron(services_open) }
                    </button>
                </div>
            }
        } else {
            html! {
                <div class="nav-item">
                    <Link<Route> to={link.route} classes="nav-link">{ link.label }</Link<Route>>
                </div>
            }
        }
    });

    let mobile_menu = if machine.mobile_open {
        let mobile_services_open = machine.mobile_services.is_open();
        let items = NAV_LINKS.iter().map(|link| {
            if link.route == Route::Services {
                html! {
                    <div class="mobile-services">
                        <button class="mobile-link" onclick={dispatch(NavAction::ToggleMobileServices)}>
                            { "Services" }
                            { chevron(mobile_services_open) }
                        </button>
                        {
                            if mobile_services_open {
                                html! {
                                    <div class="mobile-services-list">
                                        { for SERVICES.iter().map(|service| html! {
                                            <div onclick={select_link.clone()}>
                                                <Link<Route> to={service.route} classes="mobile-service-link">
                                                    { service.title }
                                                </Link<Route>>
                                            </div>
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            } else {
                html! {
                    <div onclick={select_link.clone()}>
                        <Link<Route> to={link.route} classes="mobile-link">{ link.label }</Link<Route>>
                    </div>
                }
            }
        });
        html! {
            <div class="mobile-menu">
                <Reveal trigger={RevealTrigger::Mount} stagger_ms={Some(100)}
                    preset={RevealPreset::fade().duration(300).easing(Easing::EaseInOut)}
                    child_preset={Some(RevealPreset::slide_from_left(20.0).duration(300))}>
                    { for items }
                </Reveal>
            </div>
        }
    } else {
        html! {}
    };

    let mega_menu = if services_open {
        html! {
            <div class={classes!("mega-menu", scrolled.then_some("scrolled"))}
                onmouseenter={dispatch(NavAction::ServicesEnter(HoverRegion::Panel))}
                onmouseleave={dispatch(NavAction::ServicesLeave(HoverRegion::Panel))}>
                <div class="mega-menu-inner">
                    <div class="mega-menu-intro">
                        <h3>{ "Our Services" }</h3>
                        <p>{ "No matter your role or goal " }<span class="brand">{ "BAC" }</span>{ " adapts to your needs" }</p>
                    </div>
                    <Reveal class="mega-menu-grid" trigger={RevealTrigger::Mount} stagger_ms={Some(50)}
                        preset={RevealPreset::fade()}
                        child_preset={Some(RevealPreset::fade_up(10.0).duration(300))}>
                        { for SERVICES.iter().map(|service| html! {
                            <div class="mega-menu-service">
                                <div onclick={select_link.clone()}>
                                    <Link<Route> to={service.route} classes="mega-menu-title">
                                        { service.title }
                                    </Link<Route>>
                                </div>
                                <ul>
                                    { for service.points().into_iter().map(|point| html! { <li>{ point }</li> }) }
                                </ul>
                            </div>
                        }) }
                    </Reveal>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <>
            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        padding: 1rem 0;
                        transition: transform 0.4s ease-in-out, background 0.3s;
                    }
                    .site-nav.hidden {
                        transform: translateY(-100px);
                    }
                    .site-nav.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    }
                    .nav-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        height: 5rem;
                        padding: 0 2rem;
                    }
                    .nav-logo img {
                        width: 120px;
                        height: auto;
                        object-fit: contain;
                        animation: navLogoIn 0.5s ease-out;
                    }
                    @keyframes navLogoIn {
                        from { opacity: 0; transform: translateX(-20px); }
                        to { opacity: 1; transform: none; }
                    }
                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                    }
                    .nav-links > div {
                        display: flex;
                    }
                    .nav-item {
                        position: relative;
                    }
                    .nav-link {
                        position: relative;
                        display: flex;
                        align-items: center;
                        gap: 0.25rem;
                        padding: 0.5rem 1rem;
                        font-size: 1.25rem;
                        font-weight: 500;
                        color: #fff;
                        background: none;
                        border: none;
                        cursor: pointer;
                        text-decoration: none;
                        transition: color 0.3s;
                    }
                    .site-nav.scrolled .nav-link {
                        color: #1f2937;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: 0;
                        width: 100%;
                        height: 2px;
                        background: #0f766e;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.3s;
                    }
                    .nav-link:hover, .nav-link.active {
                        color: #0f766e;
                    }
                    .nav-link:hover::after, .nav-link.active::after {
                        transform: scaleX(1);
                    }
                    .chevron {
                        width: 1rem;
                        height: 1rem;
                        transition: transform 0.3s;
                    }
                    .chevron.open {
                        transform: rotate(180deg);
                    }
                    .get-started {
                        margin-left: 1rem;
                        padding: 0.75rem 2rem;
                        border: 2px solid #fff;
                        border-radius: 9999px 9999px 9999px 0;
                        color: #fff;
                        background: none;
                        font-weight: 500;
                        cursor: pointer;
                        transition: background 0.3s, transform 0.2s;
                    }
                    .site-nav.scrolled .get-started {
                        border-color: #1f2937;
                        color: #1f2937;
                    }
                    .get-started:hover {
                        background: #115e59;
                        color: #fff;
                        transform: scale(1.05);
                    }
                    .get-started:active {
                        transform: scale(0.95);
                    }
                    .burger {
                        display: none;
                        padding: 0.5rem;
                        background: none;
                        border: none;
                        color: #fff;
                        cursor: pointer;
                    }
                    .site-nav.scrolled .burger {
                        color: #0f766e;
                    }
                    .burger svg {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .mobile-menu {
                        display: none;
                        margin: 0 1rem;
                        padding: 1rem 0;
                        background: #fff;
                        border-radius: 0.5rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.15);
                        text-align: center;
                        transform: translateZ(0);
                        animation: mobileMenuOpen 0.3s ease-in-out;
                    }
                    @keyframes mobileMenuOpen {
                        from { opacity: 0; max-height: 0; }
                        to { opacity: 1; max-height: 80vh; }
                    }
                    .mobile-link {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 0.25rem;
                        width: 100%;
                        padding: 0.75rem 1rem;
                        color: #1f2937;
                        font-weight: 500;
                        text-decoration: none;
                        background: none;
                        border: none;
                        border-radius: 0.5rem;
                    }
                    .mobile-link:hover {
                        background: #ccfbf1;
                        color: #0f766e;
                    }
                    .mobile-services-list {
                        padding: 0 1rem 0 1.5rem;
                        text-align: start;
                        animation: mobileMenuOpen 0.3s ease-in-out;
                    }
                    .mobile-service-link {
                        display: block;
                        padding: 0.5rem 0;
                        font-size: 0.875rem;
                        color: #374151;
                        text-decoration: none;
                    }
                    .mega-menu {
                        position: fixed;
                        left: 0;
                        right: 0;
                        top: 4rem;
                        z-index: 40;
                        margin: 1rem;
                        padding: 1rem;
                        border-radius: 1rem;
                        background: rgba(17, 24, 39, 0.95);
                        color: #fff;
                        transform: translateZ(0);
                        animation: megaMenuOpen 0.3s ease-in-out;
                    }
                    .mega-menu.scrolled {
                        background: #fff;
                        color: #111827;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                    }
                    @keyframes megaMenuOpen {
                        from { opacity: 0; transform: translateY(-20px); }
                        to { opacity: 1; transform: none; }
                    }
                    .mega-menu-inner {
                        display: grid;
                        grid-template-columns: 1fr 4fr;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1.5rem 0.5rem;
                    }
                    .mega-menu-intro {
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        padding-right: 1.5rem;
                    }
                    .mega-menu-intro h3 {
                        font-size: 1.875rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }
                    .mega-menu-intro p, .mega-menu-service ul {
                        color: #d1d5db;
                    }
                    .mega-menu.scrolled .mega-menu-intro p, .mega-menu.scrolled .mega-menu-service ul {
                        color: #4b5563;
                    }
                    .brand {
                        color: #0f766e;
                        font-weight: 700;
                    }
                    .mega-menu-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem 1.5rem;
                        padding-top: 3rem;
                    }
                    .mega-menu-title {
                        display: block;
                        margin-bottom: 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: inherit;
                        text-decoration: none;
                    }
                    .mega-menu-title:hover {
                        color: #0f766e;
                    }
                    .mega-menu-service ul {
                        padding-left: 1.25rem;
                        font-size: 0.875rem;
                        line-height: 1.6;
                        list-style: disc;
                    }
                    @media (max-width: 1024px) {
                        .nav-links, .get-started {
                            display: none;
                        }
                        .burger, .mobile-menu {
                            display: block;
                        }
                        .mega-menu {
                            top: 5rem;
                        }
                        .mega-menu-inner {
                            grid-template-columns: 1fr;
                        }
                        .mega-menu-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                "#}
            </style>
            <nav class={classes!("site-nav", (!machine.visible).then_some("hidden"), scrolled.then_some("scrolled"))}>
                <div class="nav-content">
                    <Link<Route> to={Route::Home} classes="nav-logo">
                        <img src={logo} alt="Booker Accounting Company Logo" onerror={fallback_to_placeholder()} />
                    </Link<Route>>

                    <Reveal class="nav-links" trigger={RevealTrigger::Mount} stagger_ms={Some(100)}
                        preset={RevealPreset::fade()}
                        child_preset={Some(RevealPreset::fade_down(10.0).duration(300))}>
                        { for desktop_links }
                    </Reveal>

                    <Reveal trigger={RevealTrigger::Mount} delay_ms={600}
                        preset={RevealPreset::scale_in(0.8).duration(300)}>
                        <Link<Route> to={Route::Contact} classes="get-started">{ "Get started" }</Link<Route>>
                    </Reveal>

                    <button class="burger" onclick={dispatch(NavAction::ToggleMobileMenu)}>
                        <svg fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round"
                            stroke-linejoin="round" viewBox="0 0 24 24">
                            <path d={if machine.mobile_open { CROSS } else { BURGER }} />
                        </svg>
                    </button>
                </div>
                { mobile_menu }
            </nav>
            { mega_menu }
        </>
    }
}
