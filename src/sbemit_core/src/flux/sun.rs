//! Solar spectrum used by the reflected light models.
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

use super::common::{planck_wavelength, v_band_grid};
use crate::constants::{AU_KM, SUN_RADIUS_KM, SUN_TEMP};
use crate::prelude::{Error, FluxDensityUnit, SbResult};

/// Solar flux density at 1 AU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Sun {
    /// Black body of the given temperature in K with the radius of the Sun.
    BlackBody {
        /// Effective temperature in K.
        temperature: f64,
    },

    /// Tabulated spectrum, linearly interpolated.
    Table(SolarTable),

    /// Constant flux density in W / (m^2 um), such as a value already averaged over a
    /// filter bandpass.
    Constant(f64),
}

impl Default for Sun {
    fn default() -> Self {
        Self::BlackBody {
            temperature: SUN_TEMP,
        }
    }
}

impl Sun {
    /// Solar flux density at 1 AU in W / (m^2 um).
    ///
    /// # Arguments
    ///
    /// * `wavelength` - Wavelength in um.
    ///
    /// # Errors
    /// [`Error::ValueError`] if a table does not cover the wavelength.
    pub fn fluxd_at_1au(&self, wavelength: f64) -> SbResult<f64> {
        match self {
            Self::BlackBody { temperature } => {
                let solid_angle_scale = (SUN_RADIUS_KM / AU_KM).powi(2);
                Ok(std::f64::consts::PI
                    * planck_wavelength(wavelength, *temperature)
                    * solid_angle_scale)
            }
            Self::Table(table) => table.interp(wavelength),
            Self::Constant(fluxd) => Ok(*fluxd),
        }
    }

    /// Solar flux density at 1 AU for each wavelength in the requested unit.
    ///
    /// # Errors
    /// See [`Sun::fluxd_at_1au`].
    pub fn fluxd(&self, waves: &[f64], unit: FluxDensityUnit) -> SbResult<Vec<f64>> {
        waves
            .iter()
            .map(|&wave| -> SbResult<f64> {
                let fluxd = self.fluxd_at_1au(wave)?;
                Ok(FluxDensityUnit::WattPerM2Um.convert(fluxd, unit, wave))
            })
            .collect()
    }

    /// Mean solar flux density over the V band in W / (m^2 um).
    ///
    /// # Errors
    /// See [`Sun::fluxd_at_1au`]. Fails if the mean is not positive.
    pub fn v_band_mean(&self) -> SbResult<f64> {
        let mut total = 0.0;
        let mut count = 0_usize;
        for wave in v_band_grid() {
            total += self.fluxd_at_1au(wave)?;
            count += 1;
        }
        let mean = total / count as f64;
        if !mean.is_finite() || mean <= 0.0 {
            Err(Error::ValueError(format!(
                "Solar flux density in the V band must be positive, found {mean}."
            )))?;
        }
        Ok(mean)
    }
}

/// Tabulated solar spectrum at 1 AU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSolarTable")]
pub struct SolarTable {
    waves: Vec<f64>,
    fluxd: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSolarTable {
    waves: Vec<f64>,
    fluxd: Vec<f64>,
}

impl TryFrom<RawSolarTable> for SolarTable {
    type Error = Error;
    fn try_from(value: RawSolarTable) -> Result<Self, Self::Error> {
        Self::new(value.waves, value.fluxd)
    }
}

impl SolarTable {
    /// Construct a new table.
    ///
    /// # Arguments
    ///
    /// * `waves` - Strictly increasing wavelengths in um.
    /// * `fluxd` - Flux densities at 1 AU in W / (m^2 um).
    ///
    /// # Errors
    /// [`Error::ValueError`] if the columns differ in length, have fewer than two rows,
    /// or contain non-finite, negative or unsorted values.
    pub fn new(waves: Vec<f64>, fluxd: Vec<f64>) -> SbResult<Self> {
        if waves.len() != fluxd.len() || waves.len() < 2 {
            Err(Error::ValueError(
                "Solar table needs at least two rows of wavelength and flux density.".into(),
            ))?;
        }
        if !waves.windows(2).all(|w| w[0] < w[1]) || !waves.iter().all(|w| w.is_finite()) {
            Err(Error::ValueError(
                "Solar table wavelengths must be finite and strictly increasing.".into(),
            ))?;
        }
        if !fluxd.iter().all(|f| f.is_finite() && *f >= 0.0) {
            Err(Error::ValueError(
                "Solar table flux densities must be finite and non-negative.".into(),
            ))?;
        }
        Ok(Self { waves, fluxd })
    }

    /// Wavelengths of the table in um.
    #[must_use]
    pub fn waves(&self) -> &[f64] {
        &self.waves
    }

    /// Flux densities of the table in W / (m^2 um).
    #[must_use]
    pub fn fluxd(&self) -> &[f64] {
        &self.fluxd
    }

    fn interp(&self, wavelength: f64) -> SbResult<f64> {
        let idx = self.waves.partition_point(|w| *w < wavelength);
        if idx == self.waves.len() || (idx == 0 && self.waves[0] != wavelength) {
            Err(Error::ValueError(format!(
                "Wavelength {wavelength} um is outside of the solar table."
            )))?;
        }
        if self.waves[idx] == wavelength {
            return Ok(self.fluxd[idx]);
        }
        let (w0, w1) = (self.waves[idx - 1], self.waves[idx]);
        let (f0, f1) = (self.fluxd[idx - 1], self.fluxd[idx]);
        Ok(f0 + (f1 - f0) * (wavelength - w0) / (w1 - w0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_body_sun() {
        // Near 1800 W / m^2 / um in the V band for a 5778 K black body
        let sun = Sun::default();
        let fluxd = sun.fluxd_at_1au(0.55).unwrap();
        assert!((1700.0..1900.0).contains(&fluxd), "{fluxd}");

        let mean = sun.v_band_mean().unwrap();
        assert!((mean / fluxd - 1.0).abs() < 0.05);
    }

    #[test]
    fn test_table() {
        let table = SolarTable::new(vec![0.4, 0.6, 0.8], vec![1000.0, 2000.0, 1000.0]).unwrap();
        let sun = Sun::Table(table);
        assert_eq!(sun.fluxd_at_1au(0.4).unwrap(), 1000.0);
        assert_eq!(sun.fluxd_at_1au(0.8).unwrap(), 1000.0);
        assert!((sun.fluxd_at_1au(0.5).unwrap() - 1500.0).abs() < 1e-9);
        assert!((sun.fluxd_at_1au(0.7).unwrap() - 1500.0).abs() < 1e-9);
        assert!(sun.fluxd_at_1au(0.3).is_err());
        assert!(sun.fluxd_at_1au(0.9).is_err());

        // Mean of the 0.5-0.6 ramp
        assert!((sun.v_band_mean().unwrap() - 1750.0).abs() < 1e-9);
    }

    #[test]
    fn test_table_validation() {
        assert!(SolarTable::new(vec![0.4], vec![1.0]).is_err());
        assert!(SolarTable::new(vec![0.4, 0.5], vec![1.0]).is_err());
        assert!(SolarTable::new(vec![0.5, 0.4], vec![1.0, 1.0]).is_err());
        assert!(SolarTable::new(vec![0.4, 0.5], vec![1.0, -1.0]).is_err());

        let res: Result<SolarTable, _> =
            serde_json::from_str(r#"{"waves": [0.5, 0.4], "fluxd": [1.0, 1.0]}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_constant_and_units() {
        let sun = Sun::Constant(1800.0);
        assert_eq!(sun.v_band_mean().unwrap(), 1800.0);
        let fluxd = sun.fluxd(&[0.5, 1.0], FluxDensityUnit::ErgPerSCm2A).unwrap();
        assert_eq!(fluxd.len(), 2);
        assert!((fluxd[0] - 180.0).abs() < 1e-9);

        assert!(Sun::Constant(0.0).v_band_mean().is_err());
    }
}
