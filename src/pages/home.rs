use yew::prelude::*;

use crate::components::about::AboutUs;
use crate::components::achievements::MainAchievements;
use crate::components::hero::HeroSection;
use crate::config::HOME_TITLE;
use crate::dom::document::use_page_title;

#[function_component(Home)]
pub fn home() -> Html {
    use_page_title(HOME_TITLE.to_string());

    html! {
        <main class="home">
            <HeroSection />
            <AboutUs />
            <MainAchievements />
        </main>
    }
}
