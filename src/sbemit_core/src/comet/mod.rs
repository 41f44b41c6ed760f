//! # Comets
//! Composite objects built from the flux models: bare nuclei ([`Asteroid`]), dust
//! comae ([`Coma`]) and comets made of both ([`Comet`]).
//!
//! Composite objects have a location, so their flux densities are computed for an
//! observer and a time rather than a fixed geometry.
//!
//! ```
//!     use std::sync::Arc;
//!     use sbemit_core::prelude::*;
//!
//!     let earth = State::new_fixed("earth".into(), [1.0, 0.0, 0.0].into());
//!     let state: SharedObject = Arc::new(
//!         State::new_fixed("comet".into(), [1.5, 0.5, 0.0].into())
//!     );
//!     let comet = Comet::new(state, m2afrho1(12.0), 0.6, 0.04).unwrap();
//!     let fluxd = comet.fluxd(
//!         &earth,
//!         Time::j2000(),
//!         &[0.6, 10.0],
//!         &(5.0 * Unit::Arcsec),
//!         &FluxdOptions::default(),
//!     ).unwrap();
//!     assert_eq!(fluxd.len(), 2);
//! ```
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

mod asteroid;
mod coma;
mod conversions;

pub use self::asteroid::Asteroid;
pub use self::coma::{Coma, DEFAULT_AFRHO_SLOPE};
pub use self::conversions::{flux2q, fluxd2afrho, fluxd2efrho, m2afrho1};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::flux::validate_waves;
use crate::prelude::{
    FluxDensityUnit, Quantity, SbResult, SharedObject, SolarSysObject, State, Time,
};

/// Components to include when computing the flux density of a composite object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FluxdOptions {
    /// Include reflected or scattered sunlight.
    pub reflected: bool,

    /// Include thermal emission.
    pub thermal: bool,

    /// Include the nucleus of a comet.
    pub nucleus: bool,

    /// Include the coma of a comet.
    pub coma: bool,

    /// Correct the position of the target for light travel time.
    pub ltt: bool,

    /// Unit of the returned flux densities.
    pub unit: FluxDensityUnit,
}

impl Default for FluxdOptions {
    fn default() -> Self {
        Self {
            reflected: true,
            thermal: true,
            nucleus: true,
            coma: true,
            ltt: false,
            unit: FluxDensityUnit::WattPerM2Um,
        }
    }
}

/// Add `scale * values` to `total`, element by element.
fn accumulate(total: &mut [f64], values: &[f64], scale: f64) {
    total
        .iter_mut()
        .zip_eq(values)
        .for_each(|(total, value)| *total += scale * value);
}

/// A comet, a nucleus surrounded by a dust coma.
///
/// The nucleus and the coma share one location.
#[derive(Debug, Clone)]
pub struct Comet {
    nucleus: Asteroid,
    coma: Coma,
}

impl Comet {
    /// New comet with default nucleus and coma models.
    ///
    /// # Arguments
    ///
    /// * `state` - Location of the comet.
    /// * `afrho1` - Afrho at 1 AU, a length.
    /// * `radius` - Radius of the nucleus in km, zero for a bare coma.
    /// * `ap` - Geometric albedo of the nucleus.
    ///
    /// # Errors
    /// Fails if `afrho1` is not a length, the radius is negative, or the albedo is not
    /// positive.
    pub fn new(state: SharedObject, afrho1: Quantity, radius: f64, ap: f64) -> SbResult<Self> {
        let nucleus = Asteroid::new(state.clone(), 2.0 * radius, ap)?;
        let coma = Coma::new(state, afrho1)?;
        Ok(Self { nucleus, coma })
    }

    /// Comet from a separately built nucleus and coma.
    #[must_use]
    pub fn from_parts(nucleus: Asteroid, coma: Coma) -> Self {
        Self { nucleus, coma }
    }

    /// The nucleus.
    #[must_use]
    pub fn nucleus(&self) -> &Asteroid {
        &self.nucleus
    }

    /// The coma.
    #[must_use]
    pub fn coma(&self) -> &Coma {
        &self.coma
    }

    /// Radius of the nucleus in km.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.nucleus.diameter() / 2.0
    }

    /// Change the radius of the nucleus in km.
    ///
    /// # Errors
    /// See [`Asteroid::set_diameter`].
    pub fn set_radius(&mut self, radius: f64) -> SbResult<()> {
        self.nucleus.set_diameter(2.0 * radius)
    }

    /// Geometric albedo of the nucleus.
    #[must_use]
    pub fn ap(&self) -> f64 {
        self.nucleus.ap()
    }

    /// Change the geometric albedo of the nucleus.
    ///
    /// # Errors
    /// See [`Asteroid::set_ap`].
    pub fn set_ap(&mut self, ap: f64) -> SbResult<()> {
        self.nucleus.set_ap(ap)
    }

    /// Afrho of the coma at 1 AU.
    #[must_use]
    pub fn afrho1(&self) -> Quantity {
        self.coma.afrho1()
    }

    /// Change the Afrho of the coma at 1 AU.
    ///
    /// # Errors
    /// See [`Coma::set_afrho1`].
    pub fn set_afrho1(&mut self, afrho1: Quantity) -> SbResult<()> {
        self.coma.set_afrho1(afrho1)
    }

    /// Total flux density within an aperture as seen by an observer.
    ///
    /// # Arguments
    ///
    /// * `observer` - The observer.
    /// * `time` - Time of the observation.
    /// * `waves` - Wavelengths in um.
    /// * `rap` - Aperture radius of the coma, an angle or a projected length.
    /// * `opts` - Which components to include, and the output unit.
    ///
    /// # Errors
    /// See [`Asteroid::fluxd`] and [`Coma::fluxd`].
    pub fn fluxd(
        &self,
        observer: &dyn SolarSysObject,
        time: Time,
        waves: &[f64],
        rap: &Quantity,
        opts: &FluxdOptions,
    ) -> SbResult<Vec<f64>> {
        validate_waves(waves)?;
        let mut total = vec![0.0; waves.len()];
        if opts.nucleus {
            let fluxd = self.nucleus.fluxd(observer, time, waves, opts)?;
            accumulate(&mut total, &fluxd, 1.0);
        }
        if opts.coma {
            let fluxd = self.coma.fluxd(observer, time, waves, rap, opts)?;
            accumulate(&mut total, &fluxd, 1.0);
        }
        Ok(total)
    }
}

impl SolarSysObject for Comet {
    fn state_at(&self, time: Time) -> SbResult<State> {
        self.nucleus.state_at(time)
    }
}
