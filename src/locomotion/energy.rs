//! Tactical sprint energy.
//!
//! A single timer holds the remaining sprint time. It drains while sprinting
//! and recharges otherwise. Running it dry locks sprint out until the bar is
//! completely full again.

/// Edge events reported by [`SprintEnergy::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SprintEvent {
    Started,
    Stopped,
    /// Energy hit zero; sprint is locked out until fully recharged.
    Drained,
    /// Energy refilled after a drain.
    Recharged,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SprintEnergy {
    timer: f32,
    max_duration: f32,
    recharge_rate: f32,
    sprinting: bool,
    drained: bool,
}

impl SprintEnergy {
    /// Full energy bar, not sprinting.
    pub fn new(max_duration: f32, recharge_rate: f32) -> Self {
        Self {
            timer: max_duration,
            max_duration,
            recharge_rate,
            sprinting: false,
            drained: false,
        }
    }

    /// Advance the energy model by one frame.
    ///
    /// `requested` is the already-gated sprint request: key held or auto
    /// sprint, character in `Normal`, and moving.
    pub fn update(&mut self, dt: f32, requested: bool) -> Option<SprintEvent> {
        if self.drained {
            self.recharge(dt);
            if self.timer >= self.max_duration {
                self.drained = false;
                self.sprinting = requested;
                return Some(SprintEvent::Recharged);
            }
            return None;
        }

        if self.sprinting {
            if !requested {
                self.sprinting = false;
                return Some(SprintEvent::Stopped);
            }
            return self.drain(dt);
        }

        if requested && self.timer > 0.0 {
            self.sprinting = true;
            return self.drain(dt).or(Some(SprintEvent::Started));
        }

        self.recharge(dt);
        None
    }

    fn drain(&mut self, dt: f32) -> Option<SprintEvent> {
        self.timer -= dt;
        if self.timer <= 0.0 {
            self.timer = 0.0;
            self.sprinting = false;
            self.drained = true;
            return Some(SprintEvent::Drained);
        }
        None
    }

    fn recharge(&mut self, dt: f32) {
        self.timer = (self.timer + self.recharge_rate * dt).min(self.max_duration);
    }

    pub fn is_sprinting(&self) -> bool {
        self.sprinting
    }

    pub fn is_drained(&self) -> bool {
        self.drained
    }

    /// Remaining sprint time in seconds.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn max_duration(&self) -> f32 {
        self.max_duration
    }

    /// Remaining energy in [0, 1].
    pub fn fraction(&self) -> f32 {
        self.timer / self.max_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_full_and_idle() {
        let energy = SprintEnergy::new(3.0, 1.0);
        assert_eq!(energy.timer(), 3.0);
        assert!(!energy.is_sprinting());
        assert!(!energy.is_drained());
    }

    #[test]
    fn test_start_drains_same_frame() {
        let mut energy = SprintEnergy::new(3.0, 1.0);
        assert_eq!(energy.update(0.5, true), Some(SprintEvent::Started));
        assert!(energy.is_sprinting());
        assert_eq!(energy.timer(), 2.5);
    }

    #[test]
    fn test_withdrawn_request_stops_without_drain() {
        let mut energy = SprintEnergy::new(3.0, 1.0);
        energy.update(0.5, true);
        assert_eq!(energy.update(0.5, false), Some(SprintEvent::Stopped));
        assert!(!energy.is_sprinting());
        assert_eq!(energy.timer(), 2.5);

        // Idle frames recharge
        energy.update(0.25, false);
        assert_eq!(energy.timer(), 2.75);
    }

    #[test]
    fn test_recharge_clamped_to_max() {
        let mut energy = SprintEnergy::new(3.0, 1.0);
        energy.update(0.5, true);
        energy.update(0.5, false);
        for _ in 0..10 {
            energy.update(0.5, false);
        }
        assert_eq!(energy.timer(), 3.0);
    }

    #[test]
    fn test_drained_locks_until_full() {
        let mut energy = SprintEnergy::new(1.0, 2.0);
        energy.update(0.5, true);
        assert_eq!(energy.update(0.5, true), Some(SprintEvent::Drained));
        assert!(energy.is_drained());
        assert!(!energy.is_sprinting());
        assert_eq!(energy.timer(), 0.0);

        // Still requested, but drained: recharge only
        assert_eq!(energy.update(0.25, true), None);
        assert!(!energy.is_sprinting());
        assert_eq!(energy.timer(), 0.5);

        // Full again with the request still held: sprint resumes
        assert_eq!(energy.update(0.25, true), Some(SprintEvent::Recharged));
        assert!(!energy.is_drained());
        assert!(energy.is_sprinting());
        assert_eq!(energy.timer(), 1.0);
    }

    #[test]
    fn test_recharged_without_request_stays_idle() {
        let mut energy = SprintEnergy::new(0.5, 1.0);
        energy.update(0.5, true);
        assert!(energy.is_drained());
        assert_eq!(energy.update(0.5, false), Some(SprintEvent::Recharged));
        assert!(!energy.is_sprinting());
    }
}
