use log::warn;
use yew::prelude::*;

use super::error::DomError;

pub fn set_title(title: &str) -> Result<(), DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    document.set_title(title);
    Ok(())
}

/// Sets the document title and scrolls to the top when a page mounts.
#[hook]
pub fn use_page_title(title: String) {
    use_effect_with_deps(
        move |title: &String| {
            if let Err(err) = set_title(title) {
                warn!("could not set page title: {err}");
            }
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        title,
    );
}
