use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod motion {
    pub mod counter;
    pub mod latch;
    pub mod menu;
    pub mod navbar;
    pub mod parallax;
    pub mod reveal;
    pub mod scroll;
}
mod dom {
    pub mod document;
    pub mod error;
    pub mod in_view;
    pub mod scroll;
}
mod components {
    pub mod about;
    pub mod achievements;
    pub mod counter;
    pub mod footer;
    pub mod hero;
    pub mod image_block;
    pub mod navbar;
    pub mod reveal;
}
mod pages {
    pub mod home;
    pub mod site_page;
}

use components::{footer::Footer, navbar::Navbar};
use pages::{
    home::Home,
    site_page::{AboutPage, BlogPage, ContactPage, NotFound, ServiceDetail, ServicesPage},
};

#[derive(Clone, Copy, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/services")]
    Services,
    #[at("/audit-assurance")]
    AuditAssurance,
    #[at("/taxation")]
    Taxation,
    #[at("/accounting-bookkeeping")]
    AccountingBookkeeping,
    #[at("/business-advisory")]
    BusinessAdvisory,
    #[at("/business-support")]
    BusinessSupport,
    #[at("/aml")]
    Aml,
    #[at("/blog")]
    Blog,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::About => {
            info!("Rendering About page");
            html! { <AboutPage /> }
        }
        Route::Services => {
            info!("Rendering Services page");
            html! { <ServicesPage /> }
        }
        Route::Blog => {
            info!("Rendering Blog page");
            html! { <BlogPage /> }
        }
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <ContactPage /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
        service_route => match content::service_for(&service_route) {
            Some(service) => {
                info!("Rendering service page {}", service.title);
                html! { <ServiceDetail service={service} /> }
            }
            None => html! { <NotFound /> },
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
