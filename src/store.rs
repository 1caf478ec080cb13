//! Serialized event queue
//!
//! Holds the one shared wheel state and folds events into it one at a time.
//! A dispatched event runs first; events deferred since the last dispatch
//! and events raised while draining follow it in FIFO order, all within the
//! same step.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::error::{InputError, SettingsError};
use crate::settings::Settings;
use crate::sim::{Event, FrameClock, Screen, WheelState, reduce};

pub struct Store {
    state: WheelState,
    screen: Screen,
    queue: VecDeque<Event>,
    clock: FrameClock,
    rng: Pcg32,
}

/// Collects events raised while the queue is draining
#[derive(Debug, Default)]
pub struct Raised {
    events: Vec<Event>,
}

impl Raised {
    /// Queue `event` behind everything already waiting in this step
    pub fn raise(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl Store {
    /// Validate settings, build the store and run `Start`
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let screen = settings.screen();
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let state = reduce(None, &Event::Start, &screen, &mut rng);
        log::info!(
            "Wheel started on {}x{} screen: dim={:.1} avel={}",
            screen.width,
            screen.height,
            state.w,
            state.avel
        );

        Ok(Self {
            state,
            screen,
            queue: VecDeque::new(),
            clock: FrameClock::new(settings.max_frame_dt),
            rng,
        })
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    /// Number of deferred events waiting for the next dispatch
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Queue an event to run after the next dispatched one
    pub fn defer(&mut self, event: Event) -> Result<(), InputError> {
        self.accept(event)?;
        self.queue.push_back(event);
        Ok(())
    }

    /// Run `event`, then drain the queue, oldest first
    pub fn dispatch(&mut self, event: Event) -> Result<&WheelState, InputError> {
        self.dispatch_with(event, |_, _, _| {})
    }

    /// Like [`Store::dispatch`], calling `react` after every event drained.
    ///
    /// Events `react` raises join the back of the queue and run in the same
    /// step. Raised events that fail validation are dropped with a warning.
    pub fn dispatch_with<F>(
        &mut self,
        event: Event,
        mut react: F,
    ) -> Result<&WheelState, InputError>
    where
        F: FnMut(&Event, &WheelState, &mut Raised),
    {
        self.accept(event)?;
        self.queue.push_front(event);

        let mut raised = Raised::default();
        while let Some(event) = self.queue.pop_front() {
            self.state = reduce(Some(&self.state), &event, &self.screen, &mut self.rng);
            log::trace!(
                "{} -> rot={:.3} avel={:.3}",
                event.kind(),
                self.state.rot,
                self.state.avel
            );

            react(&event, &self.state, &mut raised);
            for next in raised.events.drain(..) {
                if self.accept(next).is_ok() {
                    self.queue.push_back(next);
                }
            }
        }
        Ok(&self.state)
    }

    /// Dispatch a `Tick` for the animation frame at `now_ms`
    pub fn frame(&mut self, now_ms: f64) -> Result<&WheelState, InputError> {
        let dt = self.clock.advance(now_ms);
        self.dispatch(Event::Tick { dt })
    }

    /// Like [`Store::frame`], with a reactor as in [`Store::dispatch_with`]
    pub fn frame_with<F>(&mut self, now_ms: f64, react: F) -> Result<&WheelState, InputError>
    where
        F: FnMut(&Event, &WheelState, &mut Raised),
    {
        let dt = self.clock.advance(now_ms);
        self.dispatch_with(Event::Tick { dt }, react)
    }

    fn accept(&self, event: Event) -> Result<(), InputError> {
        event.validate().inspect_err(|e| {
            log::warn!("Rejected {} event: {}", event.kind(), e);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_settings() -> Settings {
        Settings {
            screen_width: 300.0,
            screen_height: 300.0,
            ..Default::default()
        }
    }

    fn square_store() -> Store {
        Store::new(&square_settings()).unwrap()
    }

    #[test]
    fn test_new_runs_start() {
        let store = square_store();
        assert_eq!(store.state().avel, 150.0);
        assert_eq!(store.state().rot, 0.0);
        assert!((store.state().w - 240.0).abs() < 1e-9);
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn test_new_rejects_bad_screen() {
        let settings = Settings {
            screen_width: 0.0,
            ..square_settings()
        };
        assert!(matches!(
            Store::new(&settings),
            Err(SettingsError::InvalidScreen { .. })
        ));
    }

    #[test]
    fn test_dispatch_tick() {
        let mut store = square_store();
        let state = *store.dispatch(Event::Tick { dt: 1.0 }).unwrap();
        assert_eq!(state.avel, 75.0);
        assert_eq!(state.rot, 150.0);
    }

    #[test]
    fn test_deferred_spin_runs_after_the_tick() {
        let mut store = square_store();
        store.defer(Event::Spin).unwrap();
        assert_eq!(store.pending(), 1);
        assert_eq!(store.state().avel, 150.0);

        let state = *store.dispatch(Event::Tick { dt: 0.01 }).unwrap();
        assert_eq!(store.pending(), 0);
        // The tick integrated the starting velocity, then the spin replaced it
        assert!((state.rot - 150.0 * 0.01).abs() < 1e-12);
        assert!(state.avel >= 1000.0 && state.avel < 1100.0);
    }

    #[test]
    fn test_deferred_events_drain_in_order() {
        let mut store = square_store();
        store.defer(Event::Spin).unwrap();
        // A still touch after the spin wipes its velocity
        store
            .defer(Event::Touch {
                move_x: 10.0,
                move_y: 10.0,
                vx: 0.0,
                vy: 0.0,
            })
            .unwrap();
        let state = *store.dispatch(Event::Other).unwrap();
        assert_eq!(state.avel, 0.0);
    }

    #[test]
    fn test_raised_event_joins_same_step() {
        let mut store = square_store();
        store.defer(Event::Tick { dt: 0.5 }).unwrap();

        let mut seen = Vec::new();
        let state = *store
            .dispatch_with(Event::Tick { dt: 1.0 }, |event, _, raised| {
                seen.push(event.kind());
                if seen.len() == 1 {
                    raised.raise(Event::Spin);
                }
            })
            .unwrap();

        // Incoming tick, then the deferred tick, then the raised spin
        assert_eq!(seen, ["TICK", "TICK", "SPIN"]);
        assert_eq!(store.pending(), 0);
        assert!((state.rot - (150.0 + 75.0 * 0.5)).abs() < 1e-12);
        assert!(state.avel >= 1000.0 && state.avel < 1100.0);
    }

    #[test]
    fn test_invalid_raised_event_is_dropped() {
        let mut store = square_store();
        let mut drained = 0;
        let state = *store
            .dispatch_with(Event::Other, |_, _, raised| {
                drained += 1;
                raised.raise(Event::Tick { dt: -1.0 });
            })
            .unwrap();
        assert_eq!(drained, 1);
        assert_eq!(state.rot, 0.0);
    }

    #[test]
    fn test_rejected_event_leaves_store_untouched() {
        let mut store = square_store();
        store.defer(Event::Spin).unwrap();
        let before = *store.state();

        let err = store.dispatch(Event::Tick { dt: f64::NAN }).unwrap_err();
        assert!(matches!(err, InputError::InvalidElapsed(_)));
        assert_eq!(*store.state(), before);
        assert_eq!(store.pending(), 1);
    }

    #[test]
    fn test_frame_uses_clamped_clock() {
        let mut store = square_store();
        store.frame(0.0).unwrap();
        assert_eq!(store.state().rot, 0.0);

        // One second late, clamped to 50 ms
        let state = *store.frame(1000.0).unwrap();
        assert!((state.rot - 150.0 * 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_frame_with_respins_at_rest() {
        let mut store = square_store();
        store
            .dispatch(Event::Touch {
                move_x: 10.0,
                move_y: 10.0,
                vx: 0.0,
                vy: 0.0,
            })
            .unwrap();
        assert!(store.state().is_at_rest());

        let state = *store
            .frame_with(0.0, |event, state, raised| {
                if matches!(event, Event::Tick { .. }) && state.is_at_rest() {
                    raised.raise(Event::Spin);
                }
            })
            .unwrap();
        assert!(state.avel >= 1000.0 && state.avel < 1100.0);
    }

    #[test]
    fn test_same_seed_same_spins() {
        let run = || {
            let mut store = Store::new(&Settings { seed: 99, ..square_settings() }).unwrap();
            store.dispatch(Event::Spin).unwrap();
            let first = store.state().avel;
            store.dispatch(Event::Spin).unwrap();
            (first, store.state().avel)
        };
        let (a1, a2) = run();
        let (b1, b2) = run();
        assert_eq!(a1, b1);
        assert_eq!(a2, b2);
        assert!((1000.0..1100.0).contains(&a1));
    }
}
