use yew::prelude::*;

use crate::dom::in_view::{use_revealed, RevealTrigger};
use crate::motion::reveal::{RevealPreset, Stagger};

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub preset: RevealPreset,
    /// Fraction of the block that must be visible.
    #[prop_or(0.2)]
    pub threshold: f64,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub trigger: RevealTrigger,
    /// Animate each child separately, this far apart.
    #[prop_or_default]
    pub stagger_ms: Option<u32>,
    #[prop_or_default]
    pub child_preset: Option<RevealPreset>,
}

/// A block that animates from its preset offset to rest the first time it
/// is triggered and then stays put.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_revealed(node.clone(), props.threshold, props.trigger);

    let style = props.preset.style(visible, props.delay_ms);

    let children = match props.stagger_ms {
        Some(interval_ms) => {
            let stagger = Stagger::new(props.delay_ms, interval_ms);
            let child_preset = props.child_preset.unwrap_or_default();
            props
                .children
                .iter()
                .enumerate()
                .map(|(index, child)| {
                    let style = child_preset.style(visible, stagger.delay_for_index(index));
                    html! { <div class="reveal-item" style={style}>{child}</div> }
                })
                .collect::<Html>()
        }
        None => props.children.iter().collect::<Html>(),
    };

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { children }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_literal_becomes_classes() {
        let props = yew::props!(RevealProps { class: "hero-copy" });
        assert_eq!(props.class, classes!("hero-copy"));
        assert_eq!(props.threshold, 0.2);
        assert_eq!(props.stagger_ms, None);
    }
}
