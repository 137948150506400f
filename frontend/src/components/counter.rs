use std::cell::RefCell;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

use super::visibility::use_in_view;
use crate::config::COUNTER_DURATION_MS;

/// Value shown `elapsed_ms` into a count from 0 to `target` lasting
/// `duration_ms`. Elapsed time is clamped to the duration, so the last value
/// is always exactly `target`.
pub fn count_at(elapsed_ms: f64, duration_ms: f64, target: u32) -> u32 {
    let progress = if duration_ms <= 0.0 {
        1.0
    } else {
        (elapsed_ms / duration_ms).clamp(0.0, 1.0)
    };
    (progress * target as f64).floor() as u32
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub value: u32,
    pub done: bool,
}

/// Frame-by-frame driver for [`count_at`]. The first timestamp it sees is
/// taken as the start of the count.
#[derive(Clone, Debug)]
pub struct CountUp {
    target: u32,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl CountUp {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms,
            started_at: None,
        }
    }

    pub fn advance(&mut self, timestamp: f64) -> Step {
        let start = *self.started_at.get_or_insert(timestamp);
        let elapsed = timestamp - start;
        Step {
            value: count_at(elapsed, self.duration_ms, self.target),
            done: elapsed >= self.duration_ms,
        }
    }
}

/// Pending frames of one count. The frame whose callback is running is kept
/// in `retired` until the next one fires, since its closure must outlive its
/// own invocation.
#[derive(Default)]
struct FrameSlot {
    current: Option<AnimationFrame>,
    retired: Option<AnimationFrame>,
}

fn schedule_frame(slot: Rc<RefCell<FrameSlot>>, mut count: CountUp, setter: UseStateSetter<u32>) {
    let next = slot.clone();
    let handle = request_animation_frame(move |timestamp| {
        let step = count.advance(timestamp);
        setter.set(step.value);
        if !step.done {
            schedule_frame(next, count, setter);
        }
    });
    let mut frames = slot.borrow_mut();
    frames.retired = frames.current.replace(handle);
}

/// Counts from 0 to `target` over `duration_ms` once `active` turns true.
/// Pending frames are cancelled when the component goes away.
#[hook]
pub fn use_count_up(target: u32, duration_ms: u32, active: bool) -> u32 {
    let value = use_state(|| 0u32);

    {
        let setter = value.setter();
        use_effect_with_deps(
            move |&(target, duration_ms, active)| {
                let slot = Rc::new(RefCell::new(FrameSlot::default()));
                if active {
                    schedule_frame(slot.clone(), CountUp::new(target, duration_ms as f64), setter);
                }
                move || {
                    let mut frames = slot.borrow_mut();
                    frames.current.take();
                    frames.retired.take();
                }
            },
            (target, duration_ms, active),
        );
    }

    *value
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or(COUNTER_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or("")]
    pub suffix: &'static str,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "0px");
    let count = use_count_up(props.end, props.duration_ms, in_view);

    html! {
        <span ref={node}>{count}{props.suffix}</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_reaches_target_exactly_at_duration() {
        for &(duration, target) in &[(2000.0, 500), (1000.0, 12), (333.0, 7), (1.0, 1_000_000)] {
            assert_eq!(count_at(duration, duration, target), target);
        }
    }

    #[test]
    fn count_is_clamped_past_duration() {
        assert_eq!(count_at(10_000.0, 2000.0, 50), 50);
    }

    #[test]
    fn count_is_monotonic_in_elapsed_time() {
        let duration = 2000.0;
        let target = 97;
        let mut previous = 0;
        for ms in 0..=2000 {
            let value = count_at(ms as f64, duration, target);
            assert!(value >= previous, "dropped from {} to {} at {}ms", previous, value, ms);
            previous = value;
        }
        assert_eq!(previous, target);
    }

    #[test]
    fn count_uses_floor() {
        // 1/3 of 10 is 3.33..
        assert_eq!(count_at(1000.0, 3000.0, 10), 3);
        assert_eq!(count_at(0.0, 3000.0, 10), 0);
    }

    #[test]
    fn zero_duration_completes_immediately() {
        assert_eq!(count_at(0.0, 0.0, 42), 42);
        let mut count = CountUp::new(42, 0.0);
        assert_eq!(count.advance(5.0), Step { value: 42, done: true });
    }

    #[test]
    fn stepper_measures_from_first_frame() {
        let mut count = CountUp::new(100, 1000.0);
        assert_eq!(count.advance(5000.0), Step { value: 0, done: false });
        assert_eq!(count.advance(5500.0), Step { value: 50, done: false });
        assert_eq!(count.advance(6000.0), Step { value: 100, done: true });
    }

    #[test]
    fn stepper_finishes_on_late_frame() {
        let mut count = CountUp::new(12, 2000.0);
        count.advance(0.0);
        assert_eq!(count.advance(2016.7), Step { value: 12, done: true });
    }
}
