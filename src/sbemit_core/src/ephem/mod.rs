//! # Ephemeris
//! Positions of targets and observers, and the observing geometry between them.
//!
//! Precise ephemerides are outside of the scope of this crate. Anything which can
//! report a heliocentric [`State`] at a requested [`Time`] implements
//! [`SolarSysObject`], and from there the observing [`Geometry`] of any target follows.
//! [`State`] itself is a [`SolarSysObject`] which moves linearly away from its epoch,
//! which is sufficient for fixed test geometries and short extrapolations.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

mod geometry;
mod time;

pub use geometry::Geometry;
pub use time::{JD_TO_MJD, Time};

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;

use crate::constants::C_AU_PER_DAY;
use crate::prelude::SbResult;

/// Number of iterations used when correcting for light travel time.
const LIGHT_TIME_ITERATIONS: usize = 3;

/// Heliocentric position and velocity of an object at an epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Designation (name) of the object.
    pub desig: String,

    /// Epoch of the state.
    pub epoch: Time,

    /// Heliocentric position in AU.
    pub pos: Vector3<f64>,

    /// Heliocentric velocity in AU / day.
    pub vel: Vector3<f64>,
}

impl State {
    /// Construct a new [`State`].
    #[must_use]
    pub fn new(desig: String, epoch: Time, pos: Vector3<f64>, vel: Vector3<f64>) -> Self {
        Self {
            desig,
            epoch,
            pos,
            vel,
        }
    }

    /// A state which does not move.
    #[must_use]
    pub fn new_fixed(desig: String, pos: Vector3<f64>) -> Self {
        Self::new(desig, Time::j2000(), pos, Vector3::zeros())
    }
}

/// A [`SolarSysObject`] shared between several models, such as the nucleus and the
/// coma of one comet.
pub type SharedObject = Arc<dyn SolarSysObject + Send + Sync>;

/// Something with a position in the Solar System.
///
/// Observers and targets are both [`SolarSysObject`]s.
pub trait SolarSysObject: Debug {
    /// Heliocentric state of the object at the specified time.
    ///
    /// # Errors
    /// Implementations fail when no state is available at the requested time.
    fn state_at(&self, time: Time) -> SbResult<State>;

    /// Observing geometry of a target as seen from this object.
    ///
    /// When `ltt` is true the position of the target is corrected for the light
    /// travel time between the target and the observer.
    ///
    /// # Arguments
    ///
    /// * `target` - The object being observed.
    /// * `time` - Time of the observation.
    /// * `ltt` - Correct for light travel time.
    ///
    /// # Errors
    /// Fails if either state is unavailable, or the geometry is degenerate.
    fn observe(&self, target: &dyn SolarSysObject, time: Time, ltt: bool) -> SbResult<Geometry> {
        let obs = self.state_at(time)?;
        let mut obj = target.state_at(time)?;
        if ltt {
            for _ in 0..LIGHT_TIME_ITERATIONS {
                let light_time = (obj.pos - obs.pos).norm() / C_AU_PER_DAY;
                obj = target.state_at(time - light_time)?;
            }
        }
        Geometry::from_vectors(&obj.pos, &obs.pos)
    }
}

impl SolarSysObject for State {
    fn state_at(&self, time: Time) -> SbResult<Self> {
        let dt = time - self.epoch;
        Ok(Self::new(
            self.desig.clone(),
            time,
            self.pos + self.vel * dt,
            self.vel,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_state() {
        let state = State::new(
            "test".into(),
            Time::new(2_451_545.0),
            [1.0, 0.0, 0.0].into(),
            [0.0, 0.01, 0.0].into(),
        );
        let later = state.state_at(Time::new(2_451_555.0)).unwrap();
        assert!((later.pos - Vector3::new(1.0, 0.1, 0.0)).norm() < 1e-12);
        assert_eq!(later.epoch.jd, 2_451_555.0);
    }

    #[test]
    fn test_observe() {
        let earth = State::new_fixed("earth".into(), [1.0, 0.0, 0.0].into());
        let target = State::new_fixed("target".into(), [2.0, 0.0, 0.0].into());
        let geom = earth.observe(&target, Time::j2000(), false).unwrap();
        assert!((geom.rh() - 2.0).abs() < 1e-12);
        assert!((geom.delta() - 1.0).abs() < 1e-12);
        assert!(geom.phase().abs() < 1e-12);

        // stationary target, light time changes nothing
        let geom_ltt = earth.observe(&target, Time::j2000(), true).unwrap();
        assert_eq!(geom, geom_ltt);
    }

    #[test]
    fn test_observe_light_time() {
        let sun_observer = State::new_fixed("sun".into(), Vector3::zeros());
        // target moving radially away from the observer at 0.1 AU / day
        let target = State::new(
            "target".into(),
            Time::j2000(),
            [2.0, 0.0, 0.0].into(),
            [0.1, 0.0, 0.0].into(),
        );
        let geom = sun_observer.observe(&target, Time::j2000(), true).unwrap();
        // light left the target when it was closer, 2 = (c + 0.1) * light_time
        let light_time = 2.0 / (C_AU_PER_DAY + 0.1);
        assert!((geom.rh() - (2.0 - 0.1 * light_time)).abs() < 1e-8);
    }
}
