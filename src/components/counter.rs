use gloo_timers::callback::Interval;
use yew::prelude::*;
use yew::AttrValue;

use crate::config::COUNTER_THRESHOLD;
use crate::dom::in_view::{use_revealed, RevealTrigger};
use crate::motion::counter::{CounterAnimation, CounterTick};

/// Displayed value of a count-up that starts once `active` becomes true.
#[hook]
pub fn use_count_up(target: u32, active: bool) -> u32 {
    let animation = use_mut_ref(|| CounterAnimation::new(target));
    let displayed = use_state_eq(|| 0_u32);
    let finished = use_state_eq(|| false);

    // A new target restarts the count; the interval effect below picks it up.
    {
        let animation = animation.clone();
        let displayed = displayed.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |target: &u32| {
                if animation.borrow_mut().retarget(*target) {
                    displayed.set(0);
                    finished.set(false);
                }
                || ()
            },
            target,
        );
    }

    {
        let done = *finished;
        let displayed = displayed.clone();
        let finished = finished.clone();
        use_effect_with_deps(
            move |(active, done): &(bool, bool)| {
                let running = *active && !*done && !animation.borrow().is_finished();
                let interval = running.then(|| {
                    let period = animation.borrow().interval_ms();
                    Interval::new(period, move || {
                        let tick = animation.borrow_mut().tick();
                        match tick {
                            Some(CounterTick::Value(value)) => displayed.set(value),
                            Some(CounterTick::Finished(value)) => {
                                displayed.set(value);
                                finished.set(true);
                            }
                            None => {}
                        }
                    })
                });
                // Changing `done` re-runs this effect, which drops the interval.
                move || drop(interval)
            },
            (active, done),
        );
    }

    *displayed
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub value: u32,
    #[prop_or(AttrValue::Static(""))]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_revealed(node.clone(), COUNTER_THRESHOLD, RevealTrigger::InView);
    let count = use_count_up(props.value, in_view);

    html! {
        <span ref={node} class="counter-value">
            { count }{ props.suffix.clone() }
        </span>
    }
}
