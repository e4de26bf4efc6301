//! Ground detection.

use bevy::prelude::*;

/// Answers whether the character is currently supported.
pub trait GroundSensor {
    fn is_grounded(&self) -> bool;
}

/// A physics-world query for support below a point.
pub trait SpatialProbe {
    /// True if something solid lies straight below `origin` within `max_distance`.
    fn probe_down(&self, origin: Vec3, max_distance: f32) -> bool;
}

/// Ground sensor that probes straight down from the collider's center.
///
/// The probe reaches half the resting height plus a small margin, so it
/// touches the floor whenever the collider is standing on it.
pub struct ProbeGroundSensor<'a, P: SpatialProbe + ?Sized> {
    probe: &'a P,
    origin: Vec3,
    distance: f32,
}

impl<'a, P: SpatialProbe + ?Sized> ProbeGroundSensor<'a, P> {
    pub fn new(probe: &'a P, origin: Vec3, resting_height: f32, margin: f32) -> Self {
        Self {
            probe,
            origin,
            distance: resting_height * 0.5 + margin,
        }
    }

    #[cfg(test)]
    pub(crate) fn distance(&self) -> f32 {
        self.distance
    }
}

impl<P: SpatialProbe + ?Sized> GroundSensor for ProbeGroundSensor<'_, P> {
    fn is_grounded(&self) -> bool {
        self.probe.probe_down(self.origin, self.distance)
    }
}
