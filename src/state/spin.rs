//! Spin controller.
//!
//! Owns the wheel state and is the only place it changes. A spin has a
//! synchronous half (`spin`) and a deferred half (`complete`), the latter
//! delivered by the timer once `SPIN_DURATION` has elapsed.

use super::random::SpinSource;
use crate::wheel::{geometry, Animation};
use log::*;
use std::time::{Duration, Instant};

/// Time between the start of a spin and the reveal of its result.
///
pub const SPIN_DURATION: Duration = Duration::from_millis(3000);

/// The two states of the spin state machine.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Spinning,
}

/// Everything computed by the synchronous half of a spin.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinOutcome {
    pub spin_id: u64,
    pub selected_number: u8,
    pub revolutions: f64,
    pub target_angle: f64,
    pub final_angle: f64,
    pub rotation_angle: f64,
}

/// Transient wheel state consumed by the renderer.
///
#[derive(Debug, Clone, PartialEq)]
pub struct WheelState {
    pub rotation_angle: f64,
    pub is_spinning: bool,
    pub selected_number: u8,
    pub show_result: bool,
    pub final_angle: f64,
    /// Rotation the wheel face is drawn at when no spin is animating.
    pub resting_angle: f64,
    pub animation: Option<Animation>,
}

impl Default for WheelState {
    fn default() -> Self {
        WheelState {
            rotation_angle: 0.0,
            is_spinning: false,
            selected_number: 0,
            show_result: false,
            final_angle: 0.0,
            resting_angle: 0.0,
            animation: None,
        }
    }
}

impl WheelState {
    pub fn phase(&self) -> Phase {
        if self.is_spinning {
            Phase::Spinning
        } else {
            Phase::Idle
        }
    }

    /// Visual rotation of the wheel face at `now`: eased while a spin is in
    /// flight, the resting angle otherwise.
    ///
    pub fn display_angle(&self, now: Instant) -> f64 {
        match (&self.animation, self.is_spinning) {
            (Some(animation), true) => animation.angle_at(now),
            _ => self.resting_angle,
        }
    }
}

/// Drives the Idle -> Spinning -> Idle cycle.
///
pub struct SpinController {
    state: WheelState,
    source: Box<dyn SpinSource>,
    spin_id: u64,
}

impl SpinController {
    /// Return a new idle controller drawing from `source`.
    ///
    pub fn new(source: Box<dyn SpinSource>) -> Self {
        SpinController {
            state: WheelState::default(),
            source,
            spin_id: 0,
        }
    }

    pub fn state(&self) -> &WheelState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Id of the most recently started spin.
    ///
    pub fn current_spin_id(&self) -> u64 {
        self.spin_id
    }

    /// Start a spin at `now`. Returns `None` without touching any state when
    /// a spin is already in progress.
    ///
    pub fn spin(&mut self, now: Instant) -> Option<SpinOutcome> {
        if self.state.is_spinning {
            debug!("Ignoring spin request while spinning...");
            return None;
        }

        self.state.show_result = false;
        self.state.is_spinning = true;

        let selected_number = self.source.draw_number();
        let revolutions = self.source.draw_revolutions();
        let target_angle = geometry::target_angle(selected_number);
        let final_angle = revolutions * 360.0 + (360.0 - target_angle);

        self.state.selected_number = selected_number;
        self.state.final_angle = final_angle;
        self.state.rotation_angle += final_angle;

        let from = self.state.resting_angle;
        let to = geometry::settle_angle(from, final_angle, selected_number);
        self.state.animation = Some(Animation::new(from, to, now, SPIN_DURATION));
        self.state.resting_angle = to;

        self.spin_id += 1;
        info!(
            "Spin #{} started: number {}, {:.2} revolutions, final angle {:.1}°",
            self.spin_id, selected_number, revolutions, final_angle
        );

        Some(SpinOutcome {
            spin_id: self.spin_id,
            selected_number,
            revolutions,
            target_angle,
            final_angle,
            rotation_angle: self.state.rotation_angle,
        })
    }

    /// Deferred half of a spin: unlock and reveal. Completions for any spin
    /// other than the current one are ignored.
    ///
    pub fn complete(&mut self, spin_id: u64) -> bool {
        if spin_id != self.spin_id || !self.state.is_spinning {
            warn!("Ignoring stale completion for spin #{}", spin_id);
            return false;
        }
        self.state.is_spinning = false;
        self.state.show_result = true;
        self.state.animation = None;
        info!(
            "Spin #{} finished on {}",
            spin_id, self.state.selected_number
        );
        true
    }

    /// Abort the in-flight spin without revealing a result. The wheel snaps
    /// to where the spin would have landed.
    ///
    pub fn cancel(&mut self) -> bool {
        if !self.state.is_spinning {
            return false;
        }
        self.state.is_spinning = false;
        self.state.animation = None;
        info!("Spin #{} cancelled", self.spin_id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::super::random::{FixedSource, RngSource};
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn fixed(number: u8, revolutions: f64) -> SpinController {
        SpinController::new(Box::new(FixedSource::new(number, revolutions)))
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = fixed(0, 5.0);
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(*controller.state(), WheelState::default());
    }

    #[test]
    fn test_spin_with_fixed_source() {
        let mut controller = fixed(42, 6.0);
        let outcome = controller.spin(Instant::now()).unwrap();

        assert_eq!(outcome.selected_number, 42);
        assert!((outcome.target_angle - 151.2).abs() < EPSILON);
        assert!((outcome.final_angle - (6.0 * 360.0 + 208.8)).abs() < EPSILON);

        let state = controller.state();
        assert_eq!(controller.phase(), Phase::Spinning);
        assert!(state.is_spinning);
        assert!(!state.show_result);
        assert_eq!(state.selected_number, 42);
        assert!((state.rotation_angle - outcome.final_angle).abs() < EPSILON);
    }

    #[test]
    fn test_spin_is_ignored_while_spinning() {
        let mut controller = SpinController::new(Box::new(RngSource::seeded(3)));
        let now = Instant::now();
        let first = controller.spin(now).unwrap();
        let before = controller.state().clone();

        assert!(controller.spin(now).is_none());
        assert_eq!(*controller.state(), before);
        assert_eq!(controller.state().selected_number, first.selected_number);
        assert_eq!(controller.current_spin_id(), first.spin_id);
    }

    #[test]
    fn test_complete_reveals_result() {
        let mut controller = fixed(42, 5.5);
        let outcome = controller.spin(Instant::now()).unwrap();
        assert!(controller.complete(outcome.spin_id));

        let state = controller.state();
        assert!(!state.is_spinning);
        assert!(state.show_result);
        assert_eq!(state.selected_number, 42);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut controller = fixed(1, 5.0);
        let first = controller.spin(Instant::now()).unwrap();
        assert!(controller.complete(first.spin_id));
        let second = controller.spin(Instant::now()).unwrap();

        assert!(!controller.complete(first.spin_id));
        assert!(controller.state().is_spinning);
        assert!(controller.complete(second.spin_id));
        assert!(!controller.complete(second.spin_id));
    }

    #[test]
    fn test_spin_clears_previous_result() {
        let mut controller = fixed(9, 7.0);
        let first = controller.spin(Instant::now()).unwrap();
        controller.complete(first.spin_id);
        assert!(controller.state().show_result);

        controller.spin(Instant::now()).unwrap();
        assert!(!controller.state().show_result);
    }

    #[test]
    fn test_final_angle_bounds() {
        let lower = 5.0 * 360.0 + (360.0 - 99.0 * 3.6);
        let upper = 8.0 * 360.0 + 360.0;
        let mut controller = SpinController::new(Box::new(RngSource::seeded(99)));
        let mut previous_rotation = 0.0;
        for _ in 0..500 {
            let outcome = controller.spin(Instant::now()).unwrap();
            assert!(outcome.selected_number <= 99);
            assert!(outcome.final_angle >= lower - EPSILON);
            assert!(outcome.final_angle <= upper + EPSILON);
            assert!(outcome.rotation_angle > previous_rotation);
            previous_rotation = outcome.rotation_angle;
            controller.complete(outcome.spin_id);
        }
    }

    #[test]
    fn test_extreme_draws_hit_bounds() {
        let mut controller = fixed(99, 5.0);
        let low = controller.spin(Instant::now()).unwrap();
        assert!((low.final_angle - 1803.6).abs() < EPSILON);

        let mut controller = fixed(0, 8.0);
        let high = controller.spin(Instant::now()).unwrap();
        assert!((high.final_angle - 3240.0).abs() < EPSILON);
    }

    #[test]
    fn test_wheel_settles_on_selected_number() {
        let mut controller = SpinController::new(Box::new(RngSource::seeded(11)));
        for _ in 0..200 {
            let outcome = controller.spin(Instant::now()).unwrap();
            controller.complete(outcome.spin_id);
            let resting = controller.state().display_angle(Instant::now());
            assert_eq!(
                geometry::segment_at_pointer(resting),
                controller.state().selected_number
            );
        }
    }

    #[test]
    fn test_display_angle_animates_while_spinning() {
        let mut controller = fixed(42, 6.0);
        let start = Instant::now();
        controller.spin(start).unwrap();

        let state = controller.state();
        assert_eq!(state.display_angle(start), 0.0);
        let midway = state.display_angle(start + Duration::from_millis(1500));
        assert!(midway > 0.0 && midway < state.resting_angle);
        assert!((state.display_angle(start + SPIN_DURATION) - state.resting_angle).abs() < EPSILON);
    }

    #[test]
    fn test_cancel_aborts_without_reveal() {
        let mut controller = fixed(42, 6.0);
        let outcome = controller.spin(Instant::now()).unwrap();
        assert!(controller.cancel());
        assert!(!controller.state().is_spinning);
        assert!(!controller.state().show_result);
        assert!(!controller.complete(outcome.spin_id));
        assert!(!controller.cancel());
    }
}
