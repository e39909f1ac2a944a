use log::warn;
use web_sys::HtmlImageElement;
use yew::prelude::*;
use yew::AttrValue;

use crate::config::PLACEHOLDER_IMAGE;

#[derive(Properties, PartialEq)]
pub struct ImageBlockProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Swaps a broken image for the placeholder. The handler is removed first
/// so a failing placeholder cannot loop.
pub fn fallback_to_placeholder() -> Callback<Event> {
    Callback::from(|e: Event| {
        if let Some(img) = e.target_dyn_into::<HtmlImageElement>() {
            warn!("image {} failed to load, using placeholder", img.src());
            img.set_onerror(None);
            img.set_src(PLACEHOLDER_IMAGE);
        }
    })
}

#[function_component(ImageBlock)]
pub fn image_block(props: &ImageBlockProps) -> Html {
    html! {
        <div class={classes!("image-block", props.class.clone())}>
            <img
                src={props.src.clone()}
                alt={props.alt.clone()}
                loading="lazy"
                onerror={fallback_to_placeholder()}
            />
        </div>
    }
}
