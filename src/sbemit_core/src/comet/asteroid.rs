//! Bare nucleus, reflected light plus thermal emission.
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

use tracing::debug;

use super::{FluxdOptions, accumulate};
use crate::constants::{DEFAULT_EMISSIVITY, DEFAULT_ETA, DEFAULT_G};
use crate::flux::validate_waves;
use crate::prelude::{
    HG, Neatm, SbResult, SharedObject, SolarSysObject, State, SurfaceEmission, Time,
};

/// An asteroid, or the nucleus of a comet.
///
/// The reflected light is given by [`HG`] and the thermal emission by [`Neatm`],
/// both built from the same diameter and geometric albedo.
#[derive(Debug, Clone)]
pub struct Asteroid {
    state: SharedObject,
    diameter: f64,
    ap: f64,
    reflected: HG,
    thermal: Neatm,
}

impl Asteroid {
    /// New asteroid with the default slope parameter, beaming parameter and
    /// emissivity.
    ///
    /// # Arguments
    ///
    /// * `state` - Location of the asteroid.
    /// * `diameter` - Diameter in km.
    /// * `ap` - Geometric albedo.
    ///
    /// # Errors
    /// [`crate::errors::Error::ValueError`] for a negative diameter or non-positive
    /// albedo.
    pub fn new(state: SharedObject, diameter: f64, ap: f64) -> SbResult<Self> {
        Self::with_params(state, diameter, ap, DEFAULT_G, DEFAULT_ETA, DEFAULT_EMISSIVITY)
    }

    /// New asteroid with all model parameters.
    ///
    /// # Arguments
    ///
    /// * `state` - Location of the asteroid.
    /// * `diameter` - Diameter in km.
    /// * `ap` - Geometric albedo.
    /// * `g` - Slope parameter.
    /// * `eta` - Beaming parameter.
    /// * `epsilon` - Emissivity.
    ///
    /// # Errors
    /// See [`Asteroid::new`].
    pub fn with_params(
        state: SharedObject,
        diameter: f64,
        ap: f64,
        g: f64,
        eta: f64,
        epsilon: f64,
    ) -> SbResult<Self> {
        let reflected = HG::from_diameter(diameter, ap, g)?;
        let thermal = Neatm {
            epsilon,
            g,
            ..Neatm::new(diameter / 2.0, ap, eta)
        };
        Ok(Self {
            state,
            diameter,
            ap,
            reflected,
            thermal,
        })
    }

    /// Diameter in km.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Geometric albedo.
    #[must_use]
    pub fn ap(&self) -> f64 {
        self.ap
    }

    /// Reflected light model.
    #[must_use]
    pub fn reflected(&self) -> &HG {
        &self.reflected
    }

    /// Thermal emission model.
    #[must_use]
    pub fn thermal(&self) -> &Neatm {
        &self.thermal
    }

    /// Change the diameter, updating both models.
    ///
    /// # Errors
    /// [`crate::errors::Error::ValueError`] for a negative diameter, the asteroid is
    /// unchanged.
    pub fn set_diameter(&mut self, diameter: f64) -> SbResult<()> {
        self.rebuild(diameter, self.ap)
    }

    /// Change the geometric albedo, updating both models.
    ///
    /// # Errors
    /// [`crate::errors::Error::ValueError`] for a non-positive albedo, the asteroid is
    /// unchanged.
    pub fn set_ap(&mut self, ap: f64) -> SbResult<()> {
        self.rebuild(self.diameter, ap)
    }

    fn rebuild(&mut self, diameter: f64, ap: f64) -> SbResult<()> {
        let h = HG::from_diameter(diameter, ap, self.reflected.g)?.h;
        self.reflected.h = h;
        self.thermal.radius = diameter / 2.0;
        self.thermal.pv = ap;
        self.diameter = diameter;
        self.ap = ap;
        Ok(())
    }

    /// Total flux density as seen by an observer.
    ///
    /// Only the `reflected`, `thermal`, `ltt` and `unit` options apply.
    ///
    /// # Arguments
    ///
    /// * `observer` - The observer.
    /// * `time` - Time of the observation.
    /// * `waves` - Wavelengths in um.
    /// * `opts` - Which components to include, and the output unit.
    ///
    /// # Errors
    /// Fails for invalid wavelengths, when either state is unavailable, or when a
    /// model fails.
    pub fn fluxd(
        &self,
        observer: &dyn SolarSysObject,
        time: Time,
        waves: &[f64],
        opts: &FluxdOptions,
    ) -> SbResult<Vec<f64>> {
        validate_waves(waves)?;
        let mut total = vec![0.0; waves.len()];
        if !opts.reflected && !opts.thermal {
            return Ok(total);
        }

        let geom = observer.observe(self, time, opts.ltt)?;
        debug!(
            diameter = self.diameter,
            ap = self.ap,
            rh = geom.rh(),
            delta = geom.delta(),
            "Evaluating asteroid."
        );
        if opts.reflected {
            accumulate(&mut total, &self.reflected.fluxd(&geom, waves, opts.unit)?, 1.0);
        }
        if opts.thermal {
            accumulate(&mut total, &self.thermal.fluxd(&geom, waves, opts.unit)?, 1.0);
        }
        Ok(total)
    }
}

impl SolarSysObject for Asteroid {
    fn state_at(&self, time: Time) -> SbResult<State> {
        self.state.state_at(time)
    }
}
