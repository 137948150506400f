use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config::COUNTDOWN_PERIOD_MS;

const MS_PER_SECOND: i64 = 1000;
const SECONDS_PER_DAY: i64 = 86_400;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeLeft {
    /// Floors a positive remaining duration into whole days, hours-of-day,
    /// minutes-of-hour and seconds-of-minute.
    pub fn from_millis(delta_ms: i64) -> Self {
        let total = delta_ms.max(0) / MS_PER_SECOND;
        Self {
            days: total / SECONDS_PER_DAY,
            hours: (total / 3600) % 24,
            minutes: (total / 60) % 60,
            seconds: total % 60,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        self.days * SECONDS_PER_DAY + self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// `(label, value)` in display order.
    pub fn units(&self) -> [(&'static str, i64); 4] {
        [
            ("Days", self.days),
            ("Hours", self.hours),
            ("Minutes", self.minutes),
            ("Seconds", self.seconds),
        ]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Counting,
    Elapsed,
}

/// Remaining time to a fixed instant, recomputed on every tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target_ms: i64,
    left: TimeLeft,
    phase: Phase,
}

impl Countdown {
    pub fn new(target_ms: i64) -> Self {
        Self {
            target_ms,
            left: TimeLeft::default(),
            phase: Phase::Counting,
        }
    }

    pub fn left(&self) -> TimeLeft {
        self.left
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Recomputes the breakdown for `now_ms`. Once the target has been
    /// reached the breakdown reads zero and later ticks change nothing.
    /// Returns whether anything changed.
    pub fn tick(&mut self, now_ms: i64) -> bool {
        if self.phase == Phase::Elapsed {
            return false;
        }
        let delta = self.target_ms - now_ms;
        let before = *self;
        if delta > 0 {
            self.left = TimeLeft::from_millis(delta);
        } else {
            self.left = TimeLeft::default();
            self.phase = Phase::Elapsed;
        }
        *self != before
    }
}

/// A source of recurring callbacks. The returned guard owns the registration:
/// dropping it cancels the timer.
pub trait Repeat {
    type Guard;

    fn every(&self, period_ms: u32, f: Box<dyn FnMut()>) -> Self::Guard;
}

pub struct BrowserTimers;

impl Repeat for BrowserTimers {
    type Guard = Interval;

    fn every(&self, period_ms: u32, f: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, f)
    }
}

/// Computes the countdown immediately and then once per period, reporting
/// every change through `on_update`.
pub fn start_countdown<R: Repeat>(
    timers: &R,
    mut countdown: Countdown,
    clock: Rc<dyn Fn() -> i64>,
    on_update: Rc<dyn Fn(Countdown)>,
) -> R::Guard {
    if countdown.tick(clock()) {
        on_update(countdown);
    }
    timers.every(
        COUNTDOWN_PERIOD_MS,
        Box::new(move || {
            if countdown.tick(clock()) {
                on_update(countdown);
            }
        }),
    )
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Properties, PartialEq)]
pub struct CountdownTimerProps {
    pub event_name: AttrValue,
    pub target_ms: i64,
}

#[function_component(CountdownTimer)]
pub fn countdown_timer(props: &CountdownTimerProps) -> Html {
    let target_ms = props.target_ms;
    let countdown = use_state(move || Countdown::new(target_ms));

    {
        let setter = countdown.setter();
        use_effect_with_deps(
            move |&target_ms| {
                let interval = start_countdown(
                    &BrowserTimers,
                    Countdown::new(target_ms),
                    Rc::new(now_millis),
                    Rc::new(move |next: Countdown| setter.set(next)),
                );
                move || drop(interval)
            },
            props.target_ms,
        );
    }

    let units = countdown.left().units();
    let last = units.len() - 1;

    html! {
        <div class="countdown">
            <h3 class="countdown-title font-display">{&props.event_name}</h3>
            {
                if countdown.phase() == Phase::Elapsed {
                    html! { <p class="countdown-live">{"Happening now"}</p> }
                } else {
                    html! {}
                }
            }
            <div class="countdown-units">
                { for units.iter().enumerate().map(|(index, (label, value))| html! {
                    <div class="countdown-unit" key={*label} style={format!("animation-delay: {}s;", index as f64 * 0.1)}>
                        <div class="glass-card neon-border countdown-cell">
                            <span class="countdown-value text-gradient font-display" key={value.to_string()}>
                                {format!("{:02}", value)}
                            </span>
                            <span class="countdown-label">{*label}</span>
                        </div>
                        {
                            if index < last {
                                html! { <span class="countdown-sep">{":"}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }) }
            </div>
            <style>
                {r#"
                    .countdown {
                        text-align: center;
                    }
                    .countdown-title {
                        color: var(--primary);
                        font-size: 1.25rem;
                        margin: 0 0 0.5rem 0;
                    }
                    .countdown-live {
                        color: var(--accent);
                        margin: 0 0 0.75rem 0;
                    }
                    .countdown-units {
                        display: flex;
                        justify-content: center;
                        gap: 1rem;
                    }
                    .countdown-unit {
                        position: relative;
                        animation: countdown-pop 0.4s ease-out both;
                    }
                    .countdown-cell {
                        min-width: 80px;
                        padding: 0.75rem 1rem;
                        border-radius: 12px;
                    }
                    .countdown-value {
                        display: block;
                        font-size: 2.25rem;
                        font-weight: 700;
                        animation: countdown-drop 0.3s ease-out;
                    }
                    .countdown-label {
                        font-size: 0.75rem;
                        color: var(--muted);
                        text-transform: uppercase;
                        letter-spacing: 0.08em;
                    }
                    .countdown-sep {
                        position: absolute;
                        right: -0.75rem;
                        top: 50%;
                        transform: translateY(-50%);
                        font-size: 1.5rem;
                        color: var(--primary);
                        animation: pulse-glow 1s ease-in-out infinite;
                    }
                    @keyframes countdown-pop {
                        from { transform: scale(0.8); opacity: 0; }
                        to { transform: scale(1); opacity: 1; }
                    }
                    @keyframes countdown-drop {
                        from { transform: translateY(-10px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @media (max-width: 768px) {
                        .countdown-cell {
                            min-width: 60px;
                            padding: 0.5rem 0.75rem;
                        }
                        .countdown-value {
                            font-size: 1.5rem;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Weak;

    /// Timer double that fires registered callbacks on demand. Callbacks are
    /// held weakly so a dropped guard really unregisters them.
    #[derive(Default)]
    struct ManualTimers {
        callbacks: RefCell<Vec<Weak<RefCell<Box<dyn FnMut()>>>>>,
    }

    struct ManualGuard {
        _callback: Rc<RefCell<Box<dyn FnMut()>>>,
    }

    impl Repeat for ManualTimers {
        type Guard = ManualGuard;

        fn every(&self, _period_ms: u32, f: Box<dyn FnMut()>) -> ManualGuard {
            let callback = Rc::new(RefCell::new(f));
            self.callbacks.borrow_mut().push(Rc::downgrade(&callback));
            ManualGuard { _callback: callback }
        }
    }

    impl ManualTimers {
        fn fire(&self) -> usize {
            let live: Vec<_> = self
                .callbacks
                .borrow()
                .iter()
                .filter_map(Weak::upgrade)
                .collect();
            for callback in &live {
                (&mut *callback.borrow_mut())();
            }
            live.len()
        }
    }

    fn check_bounds(delta_ms: i64) {
        let left = TimeLeft::from_millis(delta_ms);
        let whole = delta_ms / 1000;
        assert!(left.total_seconds() <= whole, "delta {}", delta_ms);
        assert!(whole < left.total_seconds() + 1, "delta {}", delta_ms);
        assert!((0..24).contains(&left.hours));
        assert!((0..60).contains(&left.minutes));
        assert!((0..60).contains(&left.seconds));
    }

    #[test]
    fn breakdown_stays_within_one_second_of_delta() {
        for delta in [
            1,
            999,
            1000,
            59_999,
            3_600_000,
            86_399_999,
            86_400_000,
            90_061_001,
            1_234_567_890,
            i64::MAX / 2,
        ] {
            check_bounds(delta);
        }
    }

    #[test]
    fn breakdown_floors_each_unit() {
        // 1d 1h 1m 1s and 999ms
        let left = TimeLeft::from_millis(90_061_999);
        assert_eq!(
            left,
            TimeLeft {
                days: 1,
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
    }

    #[test]
    fn tick_before_target_counts_down() {
        let mut countdown = Countdown::new(10_000);
        assert!(countdown.tick(0));
        assert_eq!(countdown.left().seconds, 10);
        assert_eq!(countdown.phase(), Phase::Counting);
    }

    #[test]
    fn reaching_target_freezes_at_zero() {
        let mut countdown = Countdown::new(10_000);
        countdown.tick(9_000);
        assert_eq!(countdown.left().seconds, 1);
        assert!(countdown.tick(10_000));
        assert_eq!(countdown.phase(), Phase::Elapsed);
        assert_eq!(countdown.left(), TimeLeft::default());
        assert!(!countdown.tick(20_000));
        assert_eq!(countdown.left(), TimeLeft::default());
    }

    #[test]
    fn target_already_past_starts_elapsed() {
        let mut countdown = Countdown::new(0);
        countdown.tick(5_000);
        assert_eq!(countdown.phase(), Phase::Elapsed);
        assert_eq!(countdown.left(), TimeLeft::default());
    }

    #[test]
    fn ten_second_countdown_reaches_zero_and_stops_after_teardown() {
        let timers = ManualTimers::default();
        let now = Rc::new(Cell::new(0i64));
        let seen: Rc<RefCell<Vec<Countdown>>> = Rc::default();

        let clock = {
            let now = now.clone();
            Rc::new(move || now.get()) as Rc<dyn Fn() -> i64>
        };
        let on_update = {
            let seen = seen.clone();
            Rc::new(move |c: Countdown| seen.borrow_mut().push(c)) as Rc<dyn Fn(Countdown)>
        };

        let guard = start_countdown(&timers, Countdown::new(10_000), clock, on_update);
        assert_eq!(seen.borrow().last().map(|c| c.left().seconds), Some(10));

        for tick in 1..=10 {
            now.set(tick * 1000);
            assert_eq!(timers.fire(), 1);
        }
        let last = *seen.borrow().last().expect("updates recorded");
        assert_eq!(last.phase(), Phase::Elapsed);
        assert_eq!(last.left(), TimeLeft::default());

        drop(guard);
        let updates = seen.borrow().len();
        now.set(-50_000);
        assert_eq!(timers.fire(), 0);
        assert_eq!(seen.borrow().len(), updates);
    }

    #[test]
    fn teardown_mid_count_stops_updates() {
        let timers = ManualTimers::default();
        let now = Rc::new(Cell::new(0i64));
        let updates = Rc::new(Cell::new(0usize));

        let clock = {
            let now = now.clone();
            Rc::new(move || now.get()) as Rc<dyn Fn() -> i64>
        };
        let on_update = {
            let updates = updates.clone();
            Rc::new(move |_: Countdown| updates.set(updates.get() + 1)) as Rc<dyn Fn(Countdown)>
        };

        let guard = start_countdown(&timers, Countdown::new(60_000), clock, on_update);
        now.set(1000);
        timers.fire();
        assert_eq!(updates.get(), 2);

        drop(guard);
        now.set(2000);
        assert_eq!(timers.fire(), 0);
        assert_eq!(updates.get(), 2);
    }

    #[test]
    fn units_are_in_display_order() {
        let labels: Vec<_> = TimeLeft::default().units().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, ["Days", "Hours", "Minutes", "Seconds"]);
    }
}
