//! Observing geometry of a target.
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

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::prelude::{Error, SbResult};

/// Observing geometry of a target at one instant.
///
/// Invariants: `rh > 0`, `delta > 0` and `0 <= phase <= pi`, enforced by every
/// constructor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeometry")]
pub struct Geometry {
    rh: f64,
    delta: f64,
    phase: f64,
}

/// Unvalidated form of [`Geometry`], used for deserialization.
#[derive(Deserialize)]
struct RawGeometry {
    rh: f64,
    delta: f64,
    phase: f64,
}

impl TryFrom<RawGeometry> for Geometry {
    type Error = Error;
    fn try_from(value: RawGeometry) -> Result<Self, Self::Error> {
        Self::new(value.rh, value.delta, value.phase)
    }
}

impl Geometry {
    /// Construct a new [`Geometry`].
    ///
    /// # Arguments
    ///
    /// * `rh` - Heliocentric distance of the target in AU.
    /// * `delta` - Distance from the observer to the target in AU.
    /// * `phase` - Sun-target-observer angle in radians.
    ///
    /// # Errors
    /// [`Error::ValueError`] if any of the values are non-finite or out of range.
    pub fn new(rh: f64, delta: f64, phase: f64) -> SbResult<Self> {
        if !rh.is_finite() || rh <= 0.0 {
            Err(Error::ValueError(format!(
                "Heliocentric distance must be positive, found {rh}."
            )))?;
        }
        if !delta.is_finite() || delta <= 0.0 {
            Err(Error::ValueError(format!(
                "Observer distance must be positive, found {delta}."
            )))?;
        }
        if !phase.is_finite() || !(0.0..=PI).contains(&phase) {
            Err(Error::ValueError(format!(
                "Phase angle must be between 0 and pi radians, found {phase}."
            )))?;
        }
        Ok(Self { rh, delta, phase })
    }

    /// Construct a new [`Geometry`] with the phase angle in degrees.
    ///
    /// # Errors
    /// See [`Geometry::new`].
    pub fn from_degrees(rh: f64, delta: f64, phase: f64) -> SbResult<Self> {
        Self::new(rh, delta, phase.to_radians())
    }

    /// Compute the observing geometry from heliocentric positions.
    ///
    /// # Arguments
    ///
    /// * `sun2obj` - Position of the object with respect to the Sun in AU.
    /// * `sun2obs` - Position of the Observer with respect to the Sun in AU.
    ///
    /// # Errors
    /// [`Error::ValueError`] if the target is at the Sun or at the observer.
    pub fn from_vectors(sun2obj: &Vector3<f64>, sun2obs: &Vector3<f64>) -> SbResult<Self> {
        let obj2obs = sun2obs - sun2obj;
        let obj2sun = -sun2obj;
        // rounding may push the angle past pi
        let phase = obj2sun.angle(&obj2obs).clamp(0.0, PI);
        Self::new(sun2obj.norm(), obj2obs.norm(), phase)
    }

    /// Heliocentric distance in AU.
    #[must_use]
    pub fn rh(&self) -> f64 {
        self.rh
    }

    /// Observer-target distance in AU.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Phase angle in radians.
    #[must_use]
    pub fn phase(&self) -> f64 {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(Geometry::new(1.0, 1.0, 0.0).is_ok());
        assert!(Geometry::new(1.0, 1.0, PI).is_ok());
        assert!(Geometry::new(0.0, 1.0, 0.0).is_err());
        assert!(Geometry::new(1.0, -1.0, 0.0).is_err());
        assert!(Geometry::new(1.0, 1.0, -0.1).is_err());
        assert!(Geometry::new(1.0, 1.0, 4.0).is_err());
        assert!(Geometry::new(f64::NAN, 1.0, 0.0).is_err());

        let geom = Geometry::from_degrees(1.5, 0.5, 90.0).unwrap();
        assert!((geom.phase() - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_vectors() {
        let geom = Geometry::from_vectors(&[1.0, 0.0, 0.0].into(), &[0.0, 1.0, 0.0].into())
            .unwrap();
        assert!((geom.rh() - 1.0).abs() < 1e-12);
        assert!((geom.delta() - 2.0_f64.sqrt()).abs() < 1e-12);
        assert!((geom.phase() - PI / 4.0).abs() < 1e-12);

        // opposition
        let geom = Geometry::from_vectors(&[2.0, 0.0, 0.0].into(), &[1.0, 0.0, 0.0].into())
            .unwrap();
        assert!(geom.phase().abs() < 1e-12);

        assert!(
            Geometry::from_vectors(&[1.0, 0.0, 0.0].into(), &[1.0, 0.0, 0.0].into()).is_err()
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let geom: Geometry = serde_json::from_str(r#"{"rh": 2.0, "delta": 1.0, "phase": 0.1}"#)
            .unwrap();
        assert_eq!(geom.rh(), 2.0);
        assert!(
            serde_json::from_str::<Geometry>(r#"{"rh": -2.0, "delta": 1.0, "phase": 0.1}"#)
                .is_err()
        );
    }
}
