//! Reflected light from the IAU HG magnitude system.
//!
//! Bowell et al. (1989), Application of photometric models to asteroids.
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

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::{SurfaceEmission, validate_waves};
use super::sun::Sun;
use crate::constants::{AU_KM, DEFAULT_G, SUN_V_MAG, V_MAG_ZERO_FLUXD};
use crate::prelude::{Error, FluxDensityUnit, Geometry, SbResult};

/// Coefficients of the two basis functions of the HG phase function.
const PHASE_A: [f64; 2] = [3.332, 1.862];
const PHASE_B: [f64; 2] = [0.631, 1.218];
const PHASE_C: [f64; 2] = [0.986, 0.238];

/// Phase function of the HG system, 1 at opposition.
///
/// ```
///     use sbemit_core::flux::hg_phase_function;
///     assert_eq!(hg_phase_function(0.15, 0.0), 1.0);
///     assert!(hg_phase_function(0.15, 0.5) < 1.0);
/// ```
///
/// # Arguments
///
/// * `g` - Slope parameter.
/// * `phase` - Phase angle in radians, the sign is ignored.
#[must_use]
pub fn hg_phase_function(g: f64, phase: f64) -> f64 {
    let phase = phase.abs();
    let tan_half = (phase / 2.0).tan();
    let sin_phase = phase.sin();
    let weight = (-90.56 * tan_half.powi(2)).exp();
    let smooth_denom = 0.119 + 1.341 * sin_phase - 0.754 * sin_phase.powi(2);

    let basis = [0, 1].map(|idx| {
        let large = (-PHASE_A[idx] * tan_half.powf(PHASE_B[idx])).exp();
        let small = 1.0 - PHASE_C[idx] * sin_phase / smooth_denom;
        weight * small + (1.0 - weight) * large
    });
    (1.0 - g) * basis[0] + g * basis[1]
}

/// Reflected light of a body described by its absolute magnitude and slope
/// parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HG {
    /// Absolute V magnitude.
    pub h: f64,

    /// Slope parameter.
    pub g: f64,

    /// Flux density of V = 0 in W / (m^2 um).
    #[serde(default = "default_mzp")]
    pub mzp: f64,

    /// Solar spectrum which sets the color of the reflected light.
    #[serde(default)]
    pub sun: Sun,
}

fn default_mzp() -> f64 {
    V_MAG_ZERO_FLUXD
}

impl HG {
    /// New model with the default V zero point and solar spectrum.
    #[must_use]
    pub fn new(h: f64, g: f64) -> Self {
        Self {
            h,
            g,
            mzp: V_MAG_ZERO_FLUXD,
            sun: Sun::default(),
        }
    }

    /// New model from the diameter of a body.
    ///
    /// Inverse of [`HG::diameter`].
    ///
    /// # Arguments
    ///
    /// * `diameter` - Diameter in km.
    /// * `pv` - Geometric albedo.
    /// * `g` - Slope parameter.
    ///
    /// # Errors
    /// [`Error::ValueError`] if the diameter is negative or the albedo is not positive.
    pub fn from_diameter(diameter: f64, pv: f64, g: f64) -> SbResult<Self> {
        Ok(Self::new(absolute_mag(diameter, pv, None)?, g))
    }

    /// Value of the phase function at a phase angle in radians.
    #[must_use]
    pub fn phase_function(&self, phase: f64) -> f64 {
        hg_phase_function(self.g, phase)
    }

    /// Apparent V magnitude at the given geometry.
    ///
    /// Returns infinity where the phase function vanishes, at a phase of 180 degrees.
    #[must_use]
    pub fn apparent_mag(&self, geom: &Geometry) -> f64 {
        self.h + 5.0 * (geom.rh() * geom.delta()).log10()
            - 2.5 * self.phase_function(geom.phase()).log10()
    }

    /// Diameter in km for a geometric albedo.
    ///
    /// # Arguments
    ///
    /// * `pv` - Geometric albedo.
    /// * `m_sun` - Magnitude of the Sun, defaults to the V band.
    ///
    /// # Errors
    /// [`Error::ValueError`] if the albedo is not positive.
    pub fn diameter(&self, pv: f64, m_sun: Option<f64>) -> SbResult<f64> {
        if !pv.is_finite() || pv <= 0.0 {
            Err(Error::ValueError(format!(
                "Geometric albedo must be positive, found {pv}."
            )))?;
        }
        let m_sun = m_sun.unwrap_or(SUN_V_MAG);
        Ok(2.0 * AU_KM / pv.sqrt() * 10_f64.powf(0.2 * (m_sun - self.h)))
    }

    /// Radius in km for a geometric albedo.
    ///
    /// # Errors
    /// See [`HG::diameter`].
    pub fn radius(&self, pv: f64, m_sun: Option<f64>) -> SbResult<f64> {
        Ok(self.diameter(pv, m_sun)? / 2.0)
    }
}

/// Absolute magnitude of a body with given diameter in km and geometric albedo.
///
/// A diameter of zero is infinitely faint.
pub(crate) fn absolute_mag(diameter: f64, pv: f64, m_sun: Option<f64>) -> SbResult<f64> {
    if !diameter.is_finite() || diameter < 0.0 {
        Err(Error::ValueError(format!(
            "Diameter must not be negative, found {diameter}."
        )))?;
    }
    if !pv.is_finite() || pv <= 0.0 {
        Err(Error::ValueError(format!(
            "Geometric albedo must be positive, found {pv}."
        )))?;
    }
    let m_sun = m_sun.unwrap_or(SUN_V_MAG);
    Ok(m_sun - 5.0 * (diameter * pv.sqrt() / (2.0 * AU_KM)).log10())
}

impl Default for HG {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_G)
    }
}

impl SurfaceEmission for HG {
    /// Reflected sunlight, the V band flux density scaled by the color of the Sun.
    fn fluxd(
        &self,
        geom: &Geometry,
        waves: &[f64],
        unit: FluxDensityUnit,
    ) -> SbResult<Vec<f64>> {
        validate_waves(waves)?;
        let mag = self.apparent_mag(geom);
        let fluxd_v = self.mzp * 10_f64.powf(-0.4 * mag);
        let sun_v = self.sun.v_band_mean()?;
        debug!(mag, fluxd_v, "Evaluating HG.");

        waves
            .iter()
            .map(|&wave| -> SbResult<f64> {
                let fluxd = fluxd_v * self.sun.fluxd_at_1au(wave)? / sun_v;
                Ok(FluxDensityUnit::WattPerM2Um.convert(fluxd, unit, wave))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_phase_function() {
        assert_eq!(hg_phase_function(0.15, 0.0), 1.0);
        assert_eq!(hg_phase_function(0.5, 0.0), 1.0);

        let phi = hg_phase_function(0.15, 30_f64.to_radians());
        assert!((phi - 0.302_203_6).abs() < 1e-6, "{phi}");

        // symmetric in phase
        assert_eq!(
            hg_phase_function(0.15, -0.4),
            hg_phase_function(0.15, 0.4)
        );

        // monotonic decrease with phase
        let mut last = 1.0;
        for deg in 1..170 {
            let phi = hg_phase_function(0.15, f64::from(deg).to_radians());
            assert!(phi < last);
            last = phi;
        }
        assert!(hg_phase_function(0.15, PI).abs() < 1e-12);
    }

    #[test]
    fn test_apparent_mag() {
        let model = HG::new(15.0, 0.15);
        let geom = Geometry::new(1.0, 1.0, 0.0).unwrap();
        assert!((model.apparent_mag(&geom) - 15.0).abs() < 1e-12);

        let geom = Geometry::new(2.0, 1.0, 0.0).unwrap();
        assert!((model.apparent_mag(&geom) - 15.0 - 5.0 * 2_f64.log10()).abs() < 1e-12);

        let geom = Geometry::new(1.0, 1.0, PI).unwrap();
        let fluxd = model.fluxd(&geom, &[0.55], FluxDensityUnit::Jansky).unwrap();
        assert_eq!(fluxd[0], 0.0);
    }

    #[test]
    fn test_diameter() {
        let model = HG::new(15.0, 0.15);
        let diam = model.diameter(0.1, None).unwrap();
        assert!((diam - 4.226_252).abs() < 1e-5, "{diam}");
        assert!((model.radius(0.1, None).unwrap() - diam / 2.0).abs() < 1e-12);
        assert!(model.diameter(0.0, None).is_err());

        let back = HG::from_diameter(diam, 0.1, 0.15).unwrap();
        assert!((back.h - 15.0).abs() < 1e-10);
        assert!(HG::from_diameter(-1.0, 0.1, 0.15).is_err());
    }

    #[test]
    fn test_fluxd() {
        let model = HG::new(15.0, 0.15);
        let geom = Geometry::new(1.0, 1.0, 0.0).unwrap();

        // V band mean of the solar spectrum maps to V zero point scaled by 10^(-0.4 H)
        let sun = Sun::Constant(1800.0);
        let flat = HG {
            sun,
            ..model.clone()
        };
        let fluxd = flat
            .fluxd(&geom, &[0.55, 1.0], FluxDensityUnit::WattPerM2Um)
            .unwrap();
        let expected = V_MAG_ZERO_FLUXD * 10_f64.powf(-0.4 * 15.0);
        assert!((fluxd[0] / expected - 1.0).abs() < 1e-12);
        assert!((fluxd[1] / expected - 1.0).abs() < 1e-12);

        // Reflected light follows the color of the Sun
        let fluxd = model
            .fluxd(&geom, &[0.55, 2.0], FluxDensityUnit::WattPerM2Um)
            .unwrap();
        let sun = Sun::default();
        let ratio = sun.fluxd_at_1au(2.0).unwrap() / sun.fluxd_at_1au(0.55).unwrap();
        assert!((fluxd[1] / fluxd[0] / ratio - 1.0).abs() < 1e-12);
        assert!((fluxd[0] / expected - 1.0).abs() < 0.02);

        // Per frequency units are converted at each wavelength
        let jy = model
            .fluxd(&geom, &[0.55, 2.0], FluxDensityUnit::Jansky)
            .unwrap();
        for ((wave, w), j) in [0.55, 2.0].iter().zip(&fluxd).zip(&jy) {
            let expected = FluxDensityUnit::WattPerM2Um.convert(*w, FluxDensityUnit::Jansky, *wave);
            assert!((j / expected - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_serde() {
        let model: HG = serde_json::from_str(r#"{"h": 12.0, "g": 0.2}"#).unwrap();
        assert_eq!(model, HG::new(12.0, 0.2));
    }
}
