//! Dust coma of a comet.
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
use crate::flux::validate_waves;
use crate::prelude::{
    AfrhoRadiation, AfrhoScattered, AfrhoThermal, Error, Quantity, SbResult,
    SharedObject, SolarSysObject, State, Time, Unit,
};

/// Default power law index of Afrho with heliocentric distance.
pub const DEFAULT_AFRHO_SLOPE: f64 = -2.0;

/// Dust coma described by its Afrho at 1 AU from the Sun.
///
/// At a heliocentric distance `rh` in AU the coma has an Afrho of
/// `afrho1 * rh^k`. The scattered light and thermal emission models are evaluated
/// for an Afrho of 1 m, and then scaled.
#[derive(Debug, Clone)]
pub struct Coma {
    state: SharedObject,
    afrho1: Quantity,

    /// Power law index of Afrho with heliocentric distance.
    pub k: f64,

    reflected: AfrhoScattered,
    thermal: AfrhoThermal,
}

impl Coma {
    /// New coma with default scattering and thermal models.
    ///
    /// # Arguments
    ///
    /// * `state` - Location of the coma.
    /// * `afrho1` - Afrho at 1 AU, a length.
    ///
    /// # Errors
    /// See [`Coma::set_afrho1`].
    pub fn new(state: SharedObject, afrho1: Quantity) -> SbResult<Self> {
        let basis = 1.0 * Unit::Meter;
        Self::with_models(
            state,
            afrho1,
            DEFAULT_AFRHO_SLOPE,
            AfrhoScattered::new(basis)?,
            AfrhoThermal::new(basis)?,
        )
    }

    /// New coma with the provided dust models.
    ///
    /// The Afrho of both models is replaced by 1 m.
    ///
    /// # Errors
    /// See [`Coma::set_afrho1`].
    pub fn with_models(
        state: SharedObject,
        afrho1: Quantity,
        k: f64,
        reflected: AfrhoScattered,
        thermal: AfrhoThermal,
    ) -> SbResult<Self> {
        let mut coma = Self {
            state,
            afrho1,
            k,
            reflected,
            thermal,
        };
        coma.set_afrho1(afrho1)?;
        Ok(coma)
    }

    /// Afrho at 1 AU.
    #[must_use]
    pub fn afrho1(&self) -> Quantity {
        self.afrho1
    }

    /// Change the Afrho at 1 AU. Zero or negative values describe a coma with no
    /// dust.
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] unless `afrho1` is a length, and [`Error::ValueError`]
    /// if it is not finite. The coma is unchanged on failure.
    pub fn set_afrho1(&mut self, afrho1: Quantity) -> SbResult<()> {
        let value = afrho1.to(Unit::Meter)?;
        if !value.is_finite() {
            Err(Error::ValueError(format!(
                "Afrho must be finite, found {value} m."
            )))?;
        }
        let basis = 1.0 * Unit::Meter;
        self.reflected.set_afrho(basis)?;
        self.thermal.set_afrho(basis)?;
        self.afrho1 = afrho1;
        Ok(())
    }

    /// Scattered light model.
    #[must_use]
    pub fn reflected(&self) -> &AfrhoScattered {
        &self.reflected
    }

    /// Thermal emission model.
    #[must_use]
    pub fn thermal(&self) -> &AfrhoThermal {
        &self.thermal
    }

    /// Total flux density within an aperture as seen by an observer.
    ///
    /// Only the `reflected`, `thermal`, `ltt` and `unit` options apply. A coma with
    /// no dust, `afrho1 <= 0`, is not observed and has zero flux density.
    ///
    /// # Arguments
    ///
    /// * `observer` - The observer.
    /// * `time` - Time of the observation.
    /// * `waves` - Wavelengths in um.
    /// * `rap` - Aperture radius, an angle or a projected length at the coma.
    /// * `opts` - Which components to include, and the output unit.
    ///
    /// # Errors
    /// Fails for invalid wavelengths or apertures, or when either state is
    /// unavailable.
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
        let afrho1 = self.afrho1.to(Unit::Meter)?;
        if afrho1 <= 0.0 || (!opts.reflected && !opts.thermal) {
            return Ok(total);
        }

        let geom = observer.observe(self, time, opts.ltt)?;
        let scale = afrho1 * geom.rh().powf(self.k);
        debug!(
            afrho1,
            scale,
            rh = geom.rh(),
            delta = geom.delta(),
            "Evaluating coma."
        );
        if opts.reflected {
            let fluxd = self.reflected.fluxd(&geom, waves, rap, opts.unit)?;
            accumulate(&mut total, &fluxd, scale);
        }
        if opts.thermal {
            let fluxd = self.thermal.fluxd(&geom, waves, rap, opts.unit)?;
            accumulate(&mut total, &fluxd, scale);
        }
        Ok(total)
    }
}

impl SolarSysObject for Coma {
    fn state_at(&self, time: Time) -> SbResult<State> {
        self.state.state_at(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::Geometry;
    use std::sync::Arc;

    /// Observer which can not report a state.
    #[derive(Debug)]
    struct Unavailable;

    impl SolarSysObject for Unavailable {
        fn state_at(&self, _time: Time) -> SbResult<State> {
            Err(Error::ValueError("No ephemeris.".into()))
        }
    }

    fn target() -> SharedObject {
        Arc::new(State::new_fixed("comet".into(), [2.0, 0.0, 0.0].into()))
    }

    #[test]
    fn test_no_dust() {
        let coma = Coma::new(target(), 0.0 * Unit::Centimeter).unwrap();
        let fluxd = coma
            .fluxd(
                &Unavailable,
                Time::j2000(),
                &[0.5, 1.0, 10.0],
                &(5.0 * Unit::Arcsec),
                &FluxdOptions::default(),
            )
            .unwrap();
        assert_eq!(fluxd, vec![0.0; 3]);

        let coma = Coma::new(target(), -20.0 * Unit::Centimeter).unwrap();
        let fluxd = coma
            .fluxd(
                &Unavailable,
                Time::j2000(),
                &[0.5, 10.0],
                &(5.0 * Unit::Arcsec),
                &FluxdOptions::default(),
            )
            .unwrap();
        assert_eq!(fluxd, vec![0.0; 2]);

        // a dusty coma does query the observer
        let coma = Coma::new(target(), 100.0 * Unit::Centimeter).unwrap();
        assert!(
            coma.fluxd(
                &Unavailable,
                Time::j2000(),
                &[0.5],
                &(5.0 * Unit::Arcsec),
                &FluxdOptions::default(),
            )
            .is_err()
        );
    }

    #[test]
    fn test_scaling() {
        let earth = State::new_fixed("earth".into(), [1.0, 0.0, 0.0].into());
        let coma = Coma::new(target(), 300.0 * Unit::Centimeter).unwrap();
        assert_eq!(coma.reflected().afrho, 1.0 * Unit::Meter);
        assert_eq!(coma.thermal().afrho, 1.0 * Unit::Meter);

        let waves = [0.6, 10.0];
        let rap = 5.0 * Unit::Arcsec;
        let opts = FluxdOptions::default();
        let fluxd = coma
            .fluxd(&earth, Time::j2000(), &waves, &rap, &opts)
            .unwrap();
        assert!(fluxd.iter().all(|f| f.is_finite() && *f > 0.0));

        // Afrho of 300 cm at 1 AU is 75 cm at 2 AU
        let geom = Geometry::new(2.0, 1.0, 0.0).unwrap();
        let scattered = AfrhoScattered::new(75.0 * Unit::Centimeter).unwrap();
        let thermal = AfrhoThermal::new(75.0 * Unit::Centimeter).unwrap();
        let s = scattered
            .fluxd(&geom, &waves, &rap, opts.unit)
            .unwrap();
        let t = thermal.fluxd(&geom, &waves, &rap, opts.unit).unwrap();
        for idx in 0..2 {
            assert!((fluxd[idx] / (s[idx] + t[idx]) - 1.0).abs() < 1e-12);
        }

        let mut steep = coma.clone();
        steep.k = -3.0;
        let fluxd_steep = steep
            .fluxd(&earth, Time::j2000(), &waves, &rap, &opts)
            .unwrap();
        assert!((fluxd_steep[0] / fluxd[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_set_afrho1() {
        let mut coma = Coma::new(target(), 300.0 * Unit::Centimeter).unwrap();
        coma.set_afrho1(2.0 * Unit::Meter).unwrap();
        assert_eq!(coma.afrho1(), 2.0 * Unit::Meter);
        assert_eq!(coma.reflected().afrho, 1.0 * Unit::Meter);
        assert_eq!(coma.thermal().afrho, 1.0 * Unit::Meter);

        assert!(matches!(
            coma.set_afrho1(2.0 * Unit::Arcsec),
            Err(Error::UnitMismatch { .. })
        ));
        assert_eq!(coma.afrho1(), 2.0 * Unit::Meter);
        assert!(Coma::new(target(), 1.0 * Unit::Second).is_err());

        assert!(matches!(
            coma.set_afrho1(f64::NAN * Unit::Centimeter),
            Err(Error::ValueError(_))
        ));
        assert!(coma.set_afrho1(f64::INFINITY * Unit::Centimeter).is_err());
        assert!(Coma::new(target(), f64::NAN * Unit::Centimeter).is_err());
        assert_eq!(coma.afrho1(), 2.0 * Unit::Meter);
    }
}
