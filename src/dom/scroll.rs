//! One window `scroll` listener shared by every component that needs the
//! page offset. The listener is attached with the first subscription and
//! removed with the last.

use std::cell::RefCell;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use super::error::{js_message, DomError};
use crate::motion::parallax::exit_progress;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Debug)]
pub struct SubscriberRegistry<T> {
    next_id: u64,
    entries: Vec<(SubscriptionId, T)>,
}

impl<T> Default for SubscriberRegistry<T> {
    fn default() -> Self {
        Self { next_id: 0, entries: Vec::new() }
    }
}

impl<T: Clone> SubscriberRegistry<T> {
    pub fn insert(&mut self, subscriber: T) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, subscriber));
        id
    }

    pub fn remove(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Subscribers are emitted from a copy so they may unsubscribe while
    /// being notified.
    pub fn snapshot(&self) -> Vec<T> {
        self.entries.iter().map(|(_, subscriber)| subscriber.clone()).collect()
    }
}

#[derive(Default)]
struct ScrollPublisher {
    subscribers: SubscriberRegistry<Callback<f64>>,
    listener: Option<Closure<dyn Fn()>>,
}

thread_local! {
    static PUBLISHER: RefCell<ScrollPublisher> = RefCell::new(ScrollPublisher::default());
}

pub fn current_offset() -> Result<f64, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    window
        .scroll_y()
        .map_err(|err| DomError::ScrollOffset(js_message(&err)))
}

fn publish() {
    let offset = match current_offset() {
        Ok(offset) => offset,
        Err(err) => {
            warn!("dropping scroll event: {err}");
            return;
        }
    };
    let subscribers = PUBLISHER.with(|publisher| publisher.borrow().subscribers.snapshot());
    for subscriber in subscribers {
        subscriber.emit(offset);
    }
}

pub fn subscribe(on_scroll: Callback<f64>) -> Result<SubscriptionId, DomError> {
    PUBLISHER.with(|publisher| {
        let mut publisher = publisher.borrow_mut();
        if publisher.listener.is_none() {
            let window = web_sys::window().ok_or(DomError::NoWindow)?;
            let listener = Closure::<dyn Fn()>::new(publish);
            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .map_err(|err| DomError::Listener {
                    event: "scroll",
                    message: js_message(&err),
                })?;
            debug!("scroll publisher attached");
            publisher.listener = Some(listener);
        }
        let id = publisher.subscribers.insert(on_scroll);
        debug!("{} scroll subscribers", publisher.subscribers.len());
        Ok(id)
    })
}

pub fn unsubscribe(id: SubscriptionId) {
    PUBLISHER.with(|publisher| {
        let mut publisher = publisher.borrow_mut();
        publisher.subscribers.remove(id);
        if !publisher.subscribers.is_empty() {
            return;
        }
        if let (Some(listener), Some(window)) = (publisher.listener.take(), web_sys::window()) {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
            {
                warn!("could not detach scroll publisher: {}", js_message(&err));
            }
            debug!("scroll publisher detached");
        }
    });
}

/// Calls `on_scroll` with the page offset on every scroll event while the
/// component is mounted. The latest callback passed in is always used.
#[hook]
pub fn use_scroll_subscription(on_scroll: Callback<f64>) {
    let latest = use_mut_ref(|| on_scroll.clone());
    *latest.borrow_mut() = on_scroll;

    use_effect_with_deps(
        move |_| {
            let forward = Callback::from(move |offset: f64| {
                let on_scroll = latest.borrow().clone();
                on_scroll.emit(offset);
            });
            let subscription = match subscribe(forward) {
                Ok(id) => Some(id),
                Err(err) => {
                    warn!("scroll subscription failed: {err}");
                    None
                }
            };
            move || {
                if let Some(id) = subscription {
                    unsubscribe(id);
                }
            }
        },
        (),
    );
}

/// Scroll progress of `node` from "top at viewport top" (0) to "bottom at
/// viewport top" (1), kept current while mounted.
#[hook]
pub fn use_exit_progress(node: NodeRef) -> f64 {
    let progress = use_state_eq(|| 0.0_f64);

    let measure = {
        let progress = progress.clone();
        Callback::from(move |_offset: f64| {
            if let Some(element) = node.cast::<Element>() {
                let rect = element.get_bounding_client_rect();
                progress.set(exit_progress(rect.top(), rect.height()));
            }
        })
    };

    use_scroll_subscription(measure.clone());

    use_effect_with_deps(
        move |_| {
            measure.emit(current_offset().unwrap_or_default());
            || ()
        },
        (),
    );

    *progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_removal_is_exact() {
        let mut registry = SubscriberRegistry::default();
        let a = registry.insert("a");
        let b = registry.insert("b");
        assert_ne!(a, b);
        assert!(registry.remove(a));
        assert!(!registry.remove(a));
        assert_eq!(registry.snapshot(), vec!["b"]);
        assert!(registry.remove(b));
        assert!(registry.is_empty());
    }

    #[test]
    fn ids_are_not_reused_after_removal() {
        let mut registry = SubscriberRegistry::default();
        let a = registry.insert(1);
        registry.remove(a);
        let b = registry.insert(2);
        assert_ne!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn snapshot_is_detached_from_later_changes() {
        let mut registry = SubscriberRegistry::default();
        let a = registry.insert(1);
        registry.insert(2);
        let snapshot = registry.snapshot();
        registry.remove(a);
        assert_eq!(snapshot, vec![1, 2]);
        assert_eq!(registry.snapshot(), vec![2]);
    }
}
