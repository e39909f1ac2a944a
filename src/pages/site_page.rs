use yew::prelude::*;
use yew::AttrValue;
use yew_router::prelude::*;

use crate::components::about::AboutUs;
use crate::components::reveal::Reveal;
use crate::config::SITE_NAME;
use crate::content::{Service, SERVICES};
use crate::dom::document::use_page_title;
use crate::dom::in_view::RevealTrigger;
use crate::motion::reveal::RevealPreset;
use crate::Route;

pub fn page_title(page: &str) -> String {
    format!("{page} | {SITE_NAME}")
}

#[derive(Properties, PartialEq)]
pub struct SitePageProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Banner plus body used by every route except the landing page.
#[function_component(SitePage)]
pub fn site_page(props: &SitePageProps) -> Html {
    use_page_title(page_title(&props.title));

    html! {
        <main class="site-page">
            <style>
                {r#"
                    .site-page-banner {
                        padding: 10rem 2rem 5rem;
                        background: linear-gradient(to right, #072830, #1c5e6a);
                        color: #fff;
                        text-align: center;
                        border-radius: 0 0 4rem 4rem;
                    }
                    .site-page-banner h1 {
                        font-size: clamp(2.25rem, 5vw, 3.75rem);
                        font-weight: 300;
                    }
                    .site-page-body {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 4rem 2rem;
                        color: #111827;
                    }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(18rem, 1fr));
                        gap: 2rem;
                    }
                    .service-card h2 a {
                        color: #1c5e6a;
                        text-decoration: none;
                    }
                    .service-card ul, .service-detail ul {
                        padding-left: 1.25rem;
                        line-height: 1.8;
                        list-style: disc;
                        color: #374151;
                    }
                "#}
            </style>
            <section class="site-page-banner">
                <Reveal trigger={RevealTrigger::Mount} preset={RevealPreset::fade_up(30.0).duration(800)}>
                    <h1>{ props.title.clone() }</h1>
                </Reveal>
            </section>
            <section class="site-page-body">
                { for props.children.iter() }
            </section>
        </main>
    }
}

fn points(service: &Service) -> Html {
    html! {
        <ul>
            { for service.points().into_iter().map(|point| html! { <li>{ point }</li> }) }
        </ul>
    }
}

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <SitePage title="About">
            <AboutUs />
        </SitePage>
    }
}

#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    html! {
        <SitePage title="Services">
            <Reveal class="service-grid" stagger_ms={Some(100)} preset={RevealPreset::fade()}
                child_preset={Some(RevealPreset::fade_up(20.0))}>
                { for SERVICES.iter().map(|service| html! {
                    <div class="service-card">
                        <h2><Link<Route> to={service.route}>{ service.title }</Link<Route>></h2>
                        { points(service) }
                    </div>
                }) }
            </Reveal>
        </SitePage>
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceDetailProps {
    pub service: &'static Service,
}

#[function_component(ServiceDetail)]
pub fn service_detail(props: &ServiceDetailProps) -> Html {
    html! {
        <SitePage title={props.service.title}>
            <Reveal class="service-detail" preset={RevealPreset::fade_up(20.0)}>
                <p>{ "What we cover:" }</p>
                { points(props.service) }
                <Link<Route> to={Route::Contact}>{ "Talk to an advisor" }</Link<Route>>
            </Reveal>
        </SitePage>
    }
}

#[function_component(BlogPage)]
pub fn blog_page() -> Html {
    html! {
        <SitePage title="Blog">
            <p>{ "Insights on tax, compliance and growth in the UAE are on their way." }</p>
        </SitePage>
    }
}

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    html! {
        <SitePage title="Contact">
            <p>{ "Schedule your strategic consultation with a Booker advisor." }</p>
        </SitePage>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <SitePage title="Page Not Found">
            <Link<Route> to={Route::Home}>{ "Back to home" }</Link<Route>>
        </SitePage>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_page_titles_carry_site_name() {
        assert_eq!(page_title("Taxation"), "Taxation | Booker Accounting and Consulting");
    }
}
