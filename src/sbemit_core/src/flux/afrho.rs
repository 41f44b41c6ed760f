//! Dust continuum of a coma parameterized by Afrho.
//!
//! A'Hearn et al. (1984) AJ 89, 579 define Afrho as the product of the dust albedo
//! A, the filling factor f within the aperture and the aperture radius rho. For a
//! coma with a steady state 1 / rho column density profile it is independent of the
//! aperture. The thermal analogue is epsilon-f-rho, Kelley et al. (2013) Icarus 225,
//! 475-494.
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
use std::f64::consts::PI;

use super::common::{planck_wavelength, validate_waves};
use super::sun::Sun;
use crate::constants::{AU_M, DUST_TEMP_1AU};
use crate::prelude::{Dimension, Error, FluxDensityUnit, Geometry, Quantity, SbResult, Unit};

/// Default ratio of efrho to Afrho.
pub const DEFAULT_EF2AF: f64 = 3.5;

/// Default dust temperature relative to a rapidly rotating black body.
pub const DEFAULT_TSCALE: f64 = 1.1;

/// Flux density of a dusty coma, parameterized by Afrho.
pub trait AfrhoRadiation {
    /// Afrho of the model.
    fn afrho(&self) -> Quantity;

    /// Change the Afrho of the model.
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] unless `afrho` is a length.
    fn set_afrho(&mut self, afrho: Quantity) -> SbResult<()>;

    /// Flux density within an aperture at each wavelength.
    ///
    /// # Arguments
    ///
    /// * `geom` - Observing geometry.
    /// * `waves` - Wavelengths in um.
    /// * `rap` - Aperture radius, an angle or a projected length at the target.
    /// * `unit` - Unit of the returned flux densities.
    ///
    /// # Errors
    /// [`Error::UnsupportedUnit`] if the aperture is neither an angle nor a length,
    /// [`Error::ValueError`] if it is not finite and positive.
    fn fluxd(
        &self,
        geom: &Geometry,
        waves: &[f64],
        rap: &Quantity,
        unit: FluxDensityUnit,
    ) -> SbResult<Vec<f64>>;
}

/// Aperture radius at the target as `(projected radius in m, angular radius in rad)`.
pub(crate) fn aperture(rap: &Quantity, delta: f64) -> SbResult<(f64, f64)> {
    let delta_m = delta * AU_M;
    let res = match rap.dimension() {
        Dimension::Angle => {
            let angle = rap.to(Unit::Radian)?;
            Ok((angle * delta_m, angle))
        }
        Dimension::Length => {
            let rho = rap.to(Unit::Meter)?;
            Ok((rho, rho / delta_m))
        }
        other => Err(Error::UnsupportedUnit(format!(
            "Aperture must be an angle or a length, found {other}."
        ))),
    }?;
    rap.require_positive("Aperture radius")?;
    Ok(res)
}

fn require_length(afrho: &Quantity) -> SbResult<()> {
    afrho.require(Dimension::Length)
}

/// Sunlight scattered by dust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfrhoScattered {
    /// Afrho, a length.
    pub afrho: Quantity,

    /// Linear phase coefficient in mag / deg, zero applies no phase correction.
    #[serde(default)]
    pub phase_coef: f64,

    /// Solar spectrum.
    #[serde(default)]
    pub sun: Sun,
}

impl AfrhoScattered {
    /// New model with no phase correction and the default solar spectrum.
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] unless `afrho` is a length.
    pub fn new(afrho: Quantity) -> SbResult<Self> {
        require_length(&afrho)?;
        Ok(Self {
            afrho,
            phase_coef: 0.0,
            sun: Sun::default(),
        })
    }
}

impl AfrhoRadiation for AfrhoScattered {
    fn afrho(&self) -> Quantity {
        self.afrho
    }

    fn set_afrho(&mut self, afrho: Quantity) -> SbResult<()> {
        require_length(&afrho)?;
        self.afrho = afrho;
        Ok(())
    }

    fn fluxd(
        &self,
        geom: &Geometry,
        waves: &[f64],
        rap: &Quantity,
        unit: FluxDensityUnit,
    ) -> SbResult<Vec<f64>> {
        validate_waves(waves)?;
        let afrho = self.afrho.to(Unit::Meter)?;
        let (rho, _) = aperture(rap, geom.delta())?;
        let delta_m = geom.delta() * AU_M;
        let phase_cor = 10_f64.powf(-0.4 * self.phase_coef * geom.phase().to_degrees());
        let scale = afrho * rho / (4.0 * delta_m.powi(2) * geom.rh().powi(2)) * phase_cor;

        waves
            .iter()
            .map(|&wave| -> SbResult<f64> {
                let fluxd = scale * self.sun.fluxd_at_1au(wave)?;
                Ok(FluxDensityUnit::WattPerM2Um.convert(fluxd, unit, wave))
            })
            .collect()
    }
}

/// Thermal emission from dust.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AfrhoThermal {
    /// Afrho, a length.
    pub afrho: Quantity,

    /// Ratio of efrho to Afrho.
    #[serde(default = "default_ef2af")]
    pub ef2af: f64,

    /// Dust temperature relative to `278 / sqrt(rh)` K.
    #[serde(default = "default_tscale")]
    pub tscale: f64,
}

fn default_ef2af() -> f64 {
    DEFAULT_EF2AF
}

fn default_tscale() -> f64 {
    DEFAULT_TSCALE
}

impl AfrhoThermal {
    /// New model with the default efrho to Afrho ratio and temperature scale.
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] unless `afrho` is a length.
    pub fn new(afrho: Quantity) -> SbResult<Self> {
        require_length(&afrho)?;
        Ok(Self {
            afrho,
            ef2af: DEFAULT_EF2AF,
            tscale: DEFAULT_TSCALE,
        })
    }

    /// Dust temperature in K at a heliocentric distance in AU.
    #[must_use]
    pub fn temperature(&self, rh: f64) -> f64 {
        self.tscale * DUST_TEMP_1AU / rh.sqrt()
    }
}

impl AfrhoRadiation for AfrhoThermal {
    fn afrho(&self) -> Quantity {
        self.afrho
    }

    fn set_afrho(&mut self, afrho: Quantity) -> SbResult<()> {
        require_length(&afrho)?;
        self.afrho = afrho;
        Ok(())
    }

    fn fluxd(
        &self,
        geom: &Geometry,
        waves: &[f64],
        rap: &Quantity,
        unit: FluxDensityUnit,
    ) -> SbResult<Vec<f64>> {
        validate_waves(waves)?;
        let efrho = self.ef2af * self.afrho.to(Unit::Meter)?;
        let (rho, angle) = aperture(rap, geom.delta())?;
        let temp = self.temperature(geom.rh());
        let solid_angle = PI * angle.powi(2);

        Ok(waves
            .iter()
            .map(|&wave| {
                let fluxd = efrho / rho * planck_wavelength(wave, temp) * solid_angle;
                FluxDensityUnit::WattPerM2Um.convert(fluxd, unit, wave)
            })
            .collect())
    }
}
