// =============================================================================
// CornerInch Web - Recurring Ticker
// =============================================================================
// Table of Contents:
// 1. Timer Sources
// 2. Ticker
// 3. Countdown Hook
// =============================================================================

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::countdown::{CountdownTarget, RemainingTime};

// -----------------------------------------------------------------------------
// 1. Timer Sources
// -----------------------------------------------------------------------------

/// Something that can run a callback on a fixed period.
///
/// The returned handle owns the timer: dropping it must cancel the timer.
pub trait TimerSource {
    type Handle;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Self::Handle;
}

/// Browser timers via `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimerSource;

impl TimerSource for GlooTimerSource {
    type Handle = Interval;

    fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> Interval {
        Interval::new(period_ms, tick)
    }
}

// -----------------------------------------------------------------------------
// 2. Ticker
// -----------------------------------------------------------------------------

/// A running repeating timer. Cancelled on `stop()` or when dropped.
pub struct Ticker<H> {
    handle: Option<H>,
    period_ms: u32,
}

impl<H> Ticker<H> {
    /// Start calling `tick` every `period_ms` milliseconds.
    pub fn start<S>(source: &S, period_ms: u32, tick: impl FnMut() + 'static) -> Self
    where
        S: TimerSource<Handle = H>,
    {
        log::debug!("Ticker started ({}ms)", period_ms);
        Self {
            handle: Some(source.every(period_ms, Box::new(tick))),
            period_ms,
        }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Cancel the timer. Calling this more than once is harmless.
    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            log::debug!("Ticker stopped");
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Countdown Hook
// -----------------------------------------------------------------------------

/// Recompute the time left until `target` every `period_ms` for as long as
/// the calling component is mounted.
///
/// The first value is computed immediately so the display is never blank.
pub fn use_countdown(target: CountdownTarget, period_ms: u32) -> ReadSignal<RemainingTime> {
    use_countdown_with(&GlooTimerSource, target, period_ms, Utc::now)
}

/// `use_countdown` over any timer source and clock. The ticker is stopped
/// when the current owner is cleaned up.
pub fn use_countdown_with<S>(
    source: &S,
    target: CountdownTarget,
    period_ms: u32,
    clock: impl Fn() -> DateTime<Utc> + 'static,
) -> ReadSignal<RemainingTime>
where
    S: TimerSource,
    S::Handle: 'static,
{
    let initial = target.remaining_at(&clock());
    let (remaining, set_remaining) = signal(initial);

    let mut announced = initial.expired;
    let ticker = Ticker::start(source, period_ms, move || {
        let next = target.remaining_at(&clock());
        if next.expired && !announced {
            announced = true;
            log::info!("Launch instant {} reached", target.at());
        }
        set_remaining.set(next);
    });

    // Timer handles may be !Send, so the ticker lives in local arena storage
    let ticker = StoredValue::new_local(ticker);
    on_cleanup(move || {
        ticker.try_update_value(Ticker::stop);
    });

    remaining
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    struct Slot {
        period_ms: u32,
        elapsed_ms: u32,
        tick: Option<Box<dyn FnMut()>>,
    }

    /// Timers driven by hand: `advance` plays back elapsed time.
    #[derive(Clone, Default)]
    struct ManualTimers {
        slots: Rc<RefCell<Vec<Slot>>>,
    }

    struct ManualHandle {
        slots: Rc<RefCell<Vec<Slot>>>,
        index: usize,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.slots.borrow_mut()[self.index].tick = None;
        }
    }

    impl TimerSource for ManualTimers {
        type Handle = ManualHandle;

        fn every(&self, period_ms: u32, tick: Box<dyn FnMut()>) -> ManualHandle {
            let mut slots = self.slots.borrow_mut();
            slots.push(Slot {
                period_ms,
                elapsed_ms: 0,
                tick: Some(tick),
            });
            ManualHandle {
                slots: self.slots.clone(),
                index: slots.len() - 1,
            }
        }
    }

    impl ManualTimers {
        fn advance(&self, ms: u32) {
            for _ in 0..ms {
                let count = self.slots.borrow().len();
                for index in 0..count {
                    let due = {
                        let mut slots = self.slots.borrow_mut();
                        let slot = &mut slots[index];
                        if slot.tick.is_none() {
                            continue;
                        }
                        slot.elapsed_ms += 1;
                        if slot.elapsed_ms == slot.period_ms {
                            slot.elapsed_ms = 0;
                            slot.tick.take()
                        } else {
                            None
                        }
                    };
                    if let Some(mut tick) = due {
                        tick();
                        self.slots.borrow_mut()[index].tick = Some(tick);
                    }
                }
            }
        }

        fn live(&self) -> usize {
            self.slots.borrow().iter().filter(|s| s.tick.is_some()).count()
        }
    }

    fn counting_ticker(timers: &ManualTimers, period_ms: u32) -> (Ticker<ManualHandle>, Rc<Cell<u32>>) {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let ticker = Ticker::start(timers, period_ms, move || counter.set(counter.get() + 1));
        (ticker, calls)
    }

    #[test]
    fn test_ticks_once_per_period() {
        let timers = ManualTimers::default();
        let (ticker, calls) = counting_ticker(&timers, 1_000);

        timers.advance(999);
        assert_eq!(calls.get(), 0);
        timers.advance(1);
        assert_eq!(calls.get(), 1);
        timers.advance(2_500);
        assert_eq!(calls.get(), 3);
        assert!(ticker.is_running());
        assert_eq!(ticker.period_ms(), 1_000);
    }

    #[test]
    fn test_no_ticks_after_stop() {
        let timers = ManualTimers::default();
        let (mut ticker, calls) = counting_ticker(&timers, 1_000);

        timers.advance(2_000);
        ticker.stop();
        timers.advance(10_000);

        assert_eq!(calls.get(), 2);
        assert!(!ticker.is_running());
        assert_eq!(timers.live(), 0);

        // Idempotent
        ticker.stop();
        assert!(!ticker.is_running());
    }

    #[test]
    fn test_drop_releases_timer() {
        let timers = ManualTimers::default();
        let (ticker, calls) = counting_ticker(&timers, 1_000);
        assert_eq!(timers.live(), 1);

        drop(ticker);
        timers.advance(5_000);

        assert_eq!(calls.get(), 0);
        assert_eq!(timers.live(), 0);
    }

    #[test]
    fn test_repeated_activation_does_not_leak() {
        let timers = ManualTimers::default();
        for _ in 0..5 {
            let (mut ticker, _) = counting_ticker(&timers, 1_000);
            timers.advance(1_000);
            ticker.stop();
        }
        assert_eq!(timers.live(), 0);
    }

    #[test]
    fn test_ticker_feeds_countdown() {
        let timers = ManualTimers::default();
        let target = CountdownTarget::new(
            chrono::DateTime::parse_from_rfc3339("2026-02-19T11:11:00+05:30").unwrap(),
        );
        let latest = Rc::new(Cell::new(RemainingTime::default()));
        let sink = latest.clone();
        let _ticker = Ticker::start(&timers, 1_000, move || {
            let now = chrono::DateTime::parse_from_rfc3339("2026-02-19T11:10:00+05:30").unwrap();
            sink.set(target.remaining_at(&now));
        });

        timers.advance(1_000);
        assert_eq!(latest.get().minutes, 1);
        assert!(!latest.get().expired);
    }

    #[test]
    fn test_countdown_hook_stops_on_cleanup() {
        let timers = ManualTimers::default();
        let launch = chrono::DateTime::parse_from_rfc3339("2026-02-19T11:11:00+05:30")
            .unwrap()
            .with_timezone(&Utc);
        let target = CountdownTarget::new(launch.fixed_offset());

        // Clock starts 3s out and moves one second per reading
        let reads = Rc::new(Cell::new(0i64));
        let counter = reads.clone();
        let clock = move || {
            let n = counter.get();
            counter.set(n + 1);
            launch - chrono::TimeDelta::seconds(3 - n)
        };

        let owner = Owner::new();
        let remaining = owner.with(|| use_countdown_with(&timers, target, 1_000, clock));

        assert_eq!(remaining.get_untracked().seconds, 3);
        assert_eq!(timers.live(), 1);

        timers.advance(2_000);
        assert_eq!(remaining.get_untracked().seconds, 1);
        timers.advance(1_000);
        assert_eq!(remaining.get_untracked(), RemainingTime::EXPIRED);
        assert_eq!(reads.get(), 4);

        owner.cleanup();
        assert_eq!(timers.live(), 0);

        timers.advance(10_000);
        assert_eq!(reads.get(), 4);
    }
}
