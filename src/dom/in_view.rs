use gloo_timers::callback::Timeout;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::error::{js_message, DomError};
use crate::config::MOUNT_REVEAL_DELAY_MS;
use crate::motion::latch::OnceLatch;

/// Reported ratios can land a hair under the threshold that fired them.
const RATIO_TOLERANCE: f64 = 0.01;

/// Keeps an observer alive together with the closure it calls back into.
pub struct ObserverGuard {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for ObserverGuard {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observes `node` until `threshold` of its area is visible, then calls
/// `on_enter` once and stops observing.
pub fn observe_entry(
    node: &NodeRef,
    threshold: f64,
    on_enter: Callback<()>,
) -> Result<ObserverGuard, DomError> {
    let element = node.cast::<Element>().ok_or(DomError::NotMounted)?;

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let entered = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| {
                    entry.is_intersecting() && entry.intersection_ratio() + RATIO_TOLERANCE >= threshold
                });
            if entered {
                observer.disconnect();
                on_enter.emit(());
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| DomError::Observer(js_message(&err)))?;
    observer.observe(&element);

    Ok(ObserverGuard { observer, _callback: callback })
}

/// How a reveal is started.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealTrigger {
    /// First time the block crosses its visibility threshold.
    #[default]
    InView,
    /// Right after the block is first painted.
    Mount,
}

/// Held by the reveal effect; dropping it cancels the pending trigger.
enum RevealGuard {
    Observer { _guard: ObserverGuard },
    Timer { _timeout: Timeout },
}

/// `true` from the moment the block is triggered until the component
/// unmounts. Blocks that cannot be observed are revealed at once.
#[hook]
pub fn use_revealed(node: NodeRef, threshold: f64, trigger: RevealTrigger) -> bool {
    let latch = use_mut_ref(OnceLatch::default);
    let revealed = use_state_eq(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(node, threshold, trigger): &(NodeRef, f64, RevealTrigger)| {
                let already_revealed = latch.borrow().is_set();
                let fire = Callback::from(move |_: ()| {
                    if latch.borrow_mut().trigger() {
                        debug!("block revealed");
                        revealed.set(true);
                    }
                });

                let guard = match trigger {
                    _ if already_revealed => None,
                    RevealTrigger::Mount => {
                        let fire = fire.clone();
                        let timeout = Timeout::new(MOUNT_REVEAL_DELAY_MS, move || fire.emit(()));
                        Some(RevealGuard::Timer { _timeout: timeout })
                    }
                    RevealTrigger::InView => match observe_entry(node, *threshold, fire.clone()) {
                        Ok(guard) => Some(RevealGuard::Observer { _guard: guard }),
                        Err(err) => {
                            warn!("revealing without observer: {err}");
                            fire.emit(());
                            None
                        }
                    },
                };
                move || drop(guard)
            },
            (node, threshold, trigger),
        );
    }

    *revealed
}
