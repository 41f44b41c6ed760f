//! Near Earth Asteroid Thermal Model (NEATM)
//!
//! Harris (1998) Icarus 131, 291-301. The surface is a smooth sphere in instantaneous
//! equilibrium with sunlight, with no emission from the night side. The temperature
//! distribution is
//!
//! ```text
//!     T(phi, theta) = T0 * cos(phi)^(1/4) * cos(theta)^(1/4)
//!     T0 = [(1 - A) * S / (rh^2 * |eta| * epsilon * sigma)]^(1/4)
//! ```
//!
//! where `theta` is the latitude within the Sun-target-observer plane and `phi` the
//! angle out of that plane, both measured from the sub-solar point. The
//! observed flux density is a double integral of the Planck function over the
//! illuminated and visible part of the surface, evaluated with adaptive quadrature.
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

use rayon::prelude::*;
use sbemit_stats::integrate::integrate;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::{debug, trace, warn};

use super::common::{SurfaceEmission, planck, validate_waves};
use crate::constants::{
    AU_M, DEFAULT_EMISSIVITY, DEFAULT_G, DEFAULT_NEATM_TOL, SOLAR_FLUX, STEFAN_BOLTZMANN,
};
use crate::prelude::{Error, FluxDensityUnit, Geometry, SbResult};

fn default_epsilon() -> f64 {
    DEFAULT_EMISSIVITY
}

fn default_g() -> f64 {
    DEFAULT_G
}

fn default_tol() -> f64 {
    DEFAULT_NEATM_TOL
}

/// NEATM thermal emission of a spherical body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neatm {
    /// Radius of the body in km.
    pub radius: f64,

    /// Geometric albedo in the V band.
    pub pv: f64,

    /// Beaming parameter, the sign is ignored.
    pub eta: f64,

    /// Bolometric emissivity.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,

    /// Slope parameter of the HG system, sets the phase integral.
    #[serde(default = "default_g")]
    pub g: f64,

    /// Relative tolerance of the outer integral, the inner integral uses a tenth of
    /// this.
    #[serde(default = "default_tol")]
    pub tol: f64,
}

impl Neatm {
    /// Construct a new [`Neatm`] with default emissivity, slope parameter and
    /// tolerance.
    ///
    /// # Arguments
    ///
    /// * `radius` - Radius in km.
    /// * `pv` - Geometric albedo.
    /// * `eta` - Beaming parameter.
    #[must_use]
    pub fn new(radius: f64, pv: f64, eta: f64) -> Self {
        Self {
            radius,
            pv,
            eta,
            epsilon: DEFAULT_EMISSIVITY,
            g: DEFAULT_G,
            tol: DEFAULT_NEATM_TOL,
        }
    }

    /// Diameter in km.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Bond albedo, `pv * q` with the phase integral `q = 0.290 + 0.684 G`.
    #[must_use]
    pub fn bond_albedo(&self) -> f64 {
        self.pv * (0.290 + 0.684 * self.g)
    }

    /// Temperature of the sub-solar point in kelvin, 0 K if no sunlight is absorbed.
    ///
    /// # Arguments
    ///
    /// * `rh` - Heliocentric distance in AU.
    #[must_use]
    pub fn sub_solar_temperature(&self, rh: f64) -> f64 {
        ((1.0 - self.bond_albedo()).max(0.0) * SOLAR_FLUX
            / (rh.powi(2) * self.eta.abs() * self.epsilon * STEFAN_BOLTZMANN))
            .sqrt()
            .sqrt()
    }

    /// Projected emission of a single surface point, in W / (m^2 sr Hz) scaled by
    /// `pi cos(phi)^2`.
    ///
    /// Points with negative cosines are not illuminated and are at 0 K.
    ///
    /// # Arguments
    ///
    /// * `phi` - Angle out of the Sun-target-observer plane in radians.
    /// * `theta` - Latitude within that plane from the sub-solar point in radians.
    /// * `wavelength` - Wavelength in um.
    /// * `t0` - Sub-solar temperature in K.
    #[must_use]
    pub fn point_emission(phi: f64, theta: f64, wavelength: f64, t0: f64) -> f64 {
        let cos_phi = phi.cos();
        let mu = cos_phi.max(0.0) * theta.cos().max(0.0);
        planck(wavelength, t0 * mu.sqrt().sqrt()) * PI * cos_phi.powi(2)
    }

    /// Emission of each latitude band integrated over `phi`, projected toward the
    /// observer.
    ///
    /// Non-finite integrals are clamped to zero.
    ///
    /// # Arguments
    ///
    /// * `thetas` - Latitudes from the sub-solar point in radians.
    /// * `wavelength` - Wavelength in um.
    /// * `t0` - Sub-solar temperature in K.
    /// * `phase` - Phase angle in radians.
    ///
    /// # Errors
    /// [`Error::ValueError`] if the tolerance is invalid.
    pub fn latitude_emission(
        &self,
        thetas: &[f64],
        wavelength: f64,
        t0: f64,
        phase: f64,
    ) -> SbResult<Vec<f64>> {
        self.validate()?;
        Ok(thetas
            .iter()
            .map(|&theta| self.latitude_point(theta, wavelength, t0, phase))
            .collect())
    }

    fn latitude_point(&self, theta: f64, wavelength: f64, t0: f64, phase: f64) -> f64 {
        let inner = integrate(
            |phi| Self::point_emission(phi, theta, wavelength, t0),
            0.0,
            FRAC_PI_2,
            self.tol / 10.0,
        );
        let value = match inner {
            Ok(res) => {
                if !res.converged {
                    trace!(theta, wavelength, "Latitude band integral did not converge.");
                }
                res.value * (theta - phase).cos()
            }
            Err(err) => {
                trace!(theta, wavelength, error = %err, "Latitude band integral failed.");
                0.0
            }
        };
        if value.is_finite() { value } else { 0.0 }
    }

    fn validate(&self) -> SbResult<()> {
        if !self.tol.is_finite() || self.tol <= 0.0 {
            Err(Error::ValueError(format!(
                "NEATM tolerance must be positive, found {}.",
                self.tol
            )))?;
        }
        if !self.eta.is_finite() || self.eta == 0.0 {
            Err(Error::ValueError(format!(
                "Beaming parameter must be non-zero, found {}.",
                self.eta
            )))?;
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            Err(Error::ValueError(format!(
                "Emissivity must be positive, found {}.",
                self.epsilon
            )))?;
        }
        if !self.radius.is_finite() || self.radius < 0.0 {
            Err(Error::ValueError(format!(
                "Radius must not be negative, found {}.",
                self.radius
            )))?;
        }
        Ok(())
    }
}

impl SurfaceEmission for Neatm {
    /// Thermal emission at each wavelength, wavelengths are evaluated in parallel.
    fn fluxd(
        &self,
        geom: &Geometry,
        waves: &[f64],
        unit: FluxDensityUnit,
    ) -> SbResult<Vec<f64>> {
        validate_waves(waves)?;
        self.validate()?;

        let phase = geom.phase().abs();
        let t0 = self.sub_solar_temperature(geom.rh());
        let delta_m = geom.delta() * AU_M;
        let scale = self.epsilon * (self.diameter() * 1000.0 / delta_m).powi(2) / (2.0 * PI);
        debug!(
            t0,
            rh = geom.rh(),
            delta = geom.delta(),
            phase,
            n_waves = waves.len(),
            "Evaluating NEATM."
        );

        waves
            .par_iter()
            .map(|&wavelength| -> SbResult<f64> {
                let res = integrate(
                    |theta| self.latitude_point(theta, wavelength, t0, phase),
                    -FRAC_PI_2 + phase,
                    FRAC_PI_2,
                    self.tol,
                )?;
                if !res.converged {
                    warn!(
                        wavelength,
                        error = res.error,
                        "NEATM integral did not reach the requested tolerance."
                    );
                }
                Ok(FluxDensityUnit::WattPerM2Hz.convert(scale * res.value, unit, wavelength))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flux::Fluxd;

    #[test]
    fn test_sub_solar_temperature() {
        let model = Neatm::new(1.0, 0.04, 1.0);
        let t0 = model.sub_solar_temperature(1.0);
        assert!((t0 - 397.589).abs() < 0.01, "{t0}");

        // T0 scales as rh^-1/2
        assert!((model.sub_solar_temperature(4.0) / t0 - 0.5).abs() < 1e-12);

        // sign of eta is ignored
        let negative = Neatm::new(1.0, 0.04, -1.0);
        assert_eq!(negative.sub_solar_temperature(1.0), t0);

        let mirror = Neatm::new(1.0, 4.0, 1.0);
        assert_eq!(mirror.sub_solar_temperature(1.0), 0.0);
    }

    #[test]
    fn test_point_emission() {
        let t0 = 400.0;
        let center = Neatm::point_emission(0.0, 0.0, 10.0, t0);
        assert!((center - planck(10.0, t0) * PI).abs() < 1e-30);

        // terminator and night side are cold
        assert!(Neatm::point_emission(0.0, FRAC_PI_2 + 0.1, 10.0, t0).abs() < 1e-300);
        assert!(Neatm::point_emission(FRAC_PI_2, 0.0, 10.0, t0).abs() < 1e-300);
    }

    #[test]
    fn test_latitude_emission() {
        let model = Neatm::new(1.0, 0.04, 1.0);
        let t0 = model.sub_solar_temperature(1.0);
        let values = model
            .latitude_emission(&[0.0, 0.5, FRAC_PI_2], 10.0, t0, 0.0)
            .unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[0] > values[1]);
        assert!(values[1] > 0.0);
        assert!(values[2].abs() < 1e-30);

        let mut bad = model.clone();
        bad.tol = 0.0;
        assert!(bad.latitude_emission(&[0.0], 10.0, t0, 0.0).is_err());
    }

    #[test]
    fn test_fluxd_reference() {
        let model = Neatm::new(1.0, 0.04, 1.0);

        let geom = Geometry::new(1.0, 1.0, 0.0).unwrap();
        let fluxd = model
            .fluxd(&geom, &[10.0], FluxDensityUnit::Jansky)
            .unwrap();
        assert!((fluxd[0] / 0.097_184 - 1.0).abs() < 1e-2, "{fluxd:?}");
        let per_wave = model
            .fluxd(&geom, &[10.0], FluxDensityUnit::WattPerM2Um)
            .unwrap();
        assert!(per_wave[0].is_finite() && per_wave[0] > 0.0);
        assert!((per_wave[0] / 2.913_5e-15 - 1.0).abs() < 1e-2, "{per_wave:?}");

        let geom = Geometry::from_degrees(1.0, 1.0, 60.0).unwrap();
        let fluxd = model
            .fluxd(&geom, &[10.0], FluxDensityUnit::Jansky)
            .unwrap();
        assert!((fluxd[0] / 0.058_408 - 1.0).abs() < 1e-2, "{fluxd:?}");

        let model = Neatm {
            radius: 5.0,
            pv: 0.1,
            eta: 1.2,
            epsilon: 0.9,
            g: 0.2,
            tol: 1e-3,
        };
        let geom = Geometry::from_degrees(2.0, 1.5, 30.0).unwrap();
        let fluxd = model
            .fluxd(&geom, &[12.0], FluxDensityUnit::Jansky)
            .unwrap();
        assert!((fluxd[0] / 0.211_196 - 1.0).abs() < 1e-2, "{fluxd:?}");
    }

    #[test]
    fn test_fluxd_geometry() {
        let model = Neatm::new(1.0, 0.04, 1.0);
        let waves = [10.0];
        let unit = FluxDensityUnit::WattPerM2Hz;
        let near = model
            .fluxd(&Geometry::new(1.0, 0.5, 0.3).unwrap(), &waves, unit)
            .unwrap()[0];
        let far = model
            .fluxd(&Geometry::new(1.0, 1.0, 0.3).unwrap(), &waves, unit)
            .unwrap()[0];
        assert!((near / far - 4.0).abs() < 1e-9);

        let hot = model
            .fluxd(&Geometry::new(1.0, 1.0, 0.3).unwrap(), &waves, unit)
            .unwrap()[0];
        let cold = model
            .fluxd(&Geometry::new(3.0, 1.0, 0.3).unwrap(), &waves, unit)
            .unwrap()[0];
        assert!(hot > cold);

        let dark = model
            .fluxd(&Geometry::new(1.0, 1.0, PI).unwrap(), &waves, unit)
            .unwrap()[0];
        assert_eq!(dark, 0.0);
    }

    #[test]
    fn test_fluxd_near_back_lit() {
        let model = Neatm::new(1.0, 0.04, 1.0);
        let waves = [10.0];
        let unit = FluxDensityUnit::Jansky;
        let full = model
            .fluxd(&Geometry::new(1.0, 1.0, 0.0).unwrap(), &waves, unit)
            .unwrap()[0];
        for phase in [PI - 1e-3, 3.0] {
            let fluxd = model.fluxd(&Geometry::new(1.0, 1.0, phase).unwrap(), &waves, unit);
            assert!(fluxd.is_ok(), "{phase}: {fluxd:?}");
            let value = fluxd.unwrap()[0];
            assert!(value.is_finite() && value >= 0.0, "{phase}: {value}");
            assert!(value < full * 1e-2, "{phase}: {value} vs {full}");
        }
    }

    #[test]
    fn test_fluxd_falls_with_delta() {
        let model = Neatm::new(1.0, 0.04, 1.0);
        let values: Vec<f64> = [0.5, 1.0, 2.0, 4.0]
            .iter()
            .map(|delta| {
                model
                    .fluxd(
                        &Geometry::new(1.0, *delta, 0.0).unwrap(),
                        &[10.0],
                        FluxDensityUnit::Jansky,
                    )
                    .unwrap()[0]
            })
            .collect();
        for pair in values.windows(2) {
            assert!(pair[0] > pair[1], "{values:?}");
        }
    }

    #[test]
    fn test_fluxd_spectrum() {
        let model = Neatm::new(1.0, 0.04, 1.0);
        let geom = Geometry::new(1.2, 0.4, 0.5).unwrap();
        let waves = [3.0, 5.0, 10.0, 20.0];
        let spectrum = model
            .fluxd(&geom, &waves, FluxDensityUnit::MilliJansky)
            .unwrap();
        assert_eq!(spectrum.len(), waves.len());
        for (wave, value) in waves.iter().zip(&spectrum) {
            let single = model
                .fluxd(&geom, &[*wave], FluxDensityUnit::MilliJansky)
                .unwrap()[0];
            assert_eq!(*value, single);
        }

        let per_wave = model
            .fluxd(&geom, &waves, FluxDensityUnit::WattPerM2Um)
            .unwrap();
        for ((wave, mjy), w) in waves.iter().zip(&spectrum).zip(&per_wave) {
            let expected =
                FluxDensityUnit::MilliJansky.convert(*mjy, FluxDensityUnit::WattPerM2Um, *wave);
            assert!((w / expected - 1.0).abs() < 1e-12);
        }

        let auto = model
            .fluxd_auto(&geom, &[10.0], FluxDensityUnit::Jansky)
            .unwrap();
        assert!(auto.as_scalar().is_some());

        let waves = [3.0, 10.0, 20.0];
        let auto = model
            .fluxd_auto(&geom, &waves, FluxDensityUnit::Jansky)
            .unwrap();
        let expected = model
            .fluxd(&geom, &waves, FluxDensityUnit::Jansky)
            .unwrap();
        match auto {
            Fluxd::Spectrum(values) => {
                assert_eq!(values.len(), waves.len());
                assert_eq!(values, expected);
            }
            Fluxd::Scalar(_) => panic!("expected a spectrum"),
        }
    }

    #[test]
    fn test_invalid_inputs() {
        let geom = Geometry::new(1.0, 1.0, 0.0).unwrap();
        let model = Neatm::new(1.0, 0.04, 1.0);
        assert!(model.fluxd(&geom, &[], FluxDensityUnit::Jansky).is_err());
        assert!(model.fluxd(&geom, &[-1.0], FluxDensityUnit::Jansky).is_err());

        let mut bad = model.clone();
        bad.eta = 0.0;
        assert!(bad.fluxd(&geom, &[10.0], FluxDensityUnit::Jansky).is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let model: Neatm =
            serde_json::from_str(r#"{"radius": 1.0, "pv": 0.04, "eta": 1.0}"#).unwrap();
        assert_eq!(model, Neatm::new(1.0, 0.04, 1.0));
    }
}
