//! Black body emission and the interface shared by surface flux models.
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

use super::{HG, Neatm};
use crate::constants::{BOLTZMANN_K, C_M_PER_S, HC, PLANCK_H, V_BAND_SAMPLES, V_BAND_UM};
use crate::prelude::{Error, FluxDensityUnit, Geometry, SbResult};

/// Spectral radiance of a black body per unit frequency.
///
/// Returns W / (m^2 sr Hz), zero for non-positive temperatures.
///
/// ```
///     use sbemit_core::flux::planck;
///     assert_eq!(planck(10.0, 0.0), 0.0);
///     assert!(planck(10.0, 300.0) > planck(10.0, 200.0));
/// ```
///
/// # Arguments
///
/// * `wavelength` - Wavelength in um.
/// * `temp` - Temperature in kelvin.
#[inline(always)]
#[must_use]
pub fn planck(wavelength: f64, temp: f64) -> f64 {
    if temp <= 0.0 {
        return 0.0;
    }
    let nu = C_M_PER_S / (wavelength * 1e-6);
    let x = PLANCK_H * nu / (BOLTZMANN_K * temp);
    2.0 * PLANCK_H * nu.powi(3) / C_M_PER_S.powi(2) / x.exp_m1()
}

/// Spectral radiance of a black body per unit wavelength.
///
/// Returns W / (m^2 sr um), zero for non-positive temperatures.
///
/// # Arguments
///
/// * `wavelength` - Wavelength in um.
/// * `temp` - Temperature in kelvin.
#[inline(always)]
#[must_use]
pub fn planck_wavelength(wavelength: f64, temp: f64) -> f64 {
    if temp <= 0.0 {
        return 0.0;
    }
    let wave_m = wavelength * 1e-6;
    let x = HC / (wave_m * BOLTZMANN_K * temp);
    2.0 * HC * C_M_PER_S / wave_m.powi(5) / x.exp_m1() * 1e-6
}

/// Evenly spaced wavelengths in um covering the V band.
pub(crate) fn v_band_grid() -> impl Iterator<Item = f64> {
    let (lower, upper) = V_BAND_UM;
    let step = (upper - lower) / (V_BAND_SAMPLES - 1) as f64;
    (0..V_BAND_SAMPLES).map(move |idx| lower + step * idx as f64)
}

/// Fail unless there is at least one wavelength, and all are finite and positive.
pub(crate) fn validate_waves(waves: &[f64]) -> SbResult<()> {
    if waves.is_empty() {
        Err(Error::ValueError("At least one wavelength is required.".into()))?;
    }
    if let Some(bad) = waves.iter().find(|w| !w.is_finite() || **w <= 0.0) {
        Err(Error::ValueError(format!(
            "Wavelengths must be positive, found {bad}."
        )))?;
    }
    Ok(())
}

/// Flux density evaluated at one or more wavelengths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fluxd {
    /// Value at a single wavelength.
    Scalar(f64),

    /// Values at each of several wavelengths, in the order they were requested.
    Spectrum(Vec<f64>),
}

impl Fluxd {
    /// Scalar for a single value, otherwise a spectrum.
    #[must_use]
    pub fn from_vec(values: Vec<f64>) -> Self {
        if let [value] = values.as_slice() {
            return Self::Scalar(*value);
        }
        Self::Spectrum(values)
    }

    /// All values as a vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        match self {
            Self::Scalar(value) => vec![value],
            Self::Spectrum(values) => values,
        }
    }

    /// The value if this is a scalar.
    #[must_use]
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(value) => Some(*value),
            Self::Spectrum(_) => None,
        }
    }
}

/// Flux density from the surface of a body at a fixed observing geometry.
///
/// Implemented by the reflected light [`super::HG`] and thermal [`super::Neatm`]
/// models, and usable as a trait object for mixing models.
pub trait SurfaceEmission {
    /// Flux density at each of the requested wavelengths.
    ///
    /// # Arguments
    ///
    /// * `geom` - Observing geometry of the body.
    /// * `waves` - Wavelengths in um, output has one value per wavelength.
    /// * `unit` - Unit of the returned flux densities.
    ///
    /// # Errors
    /// [`Error::ValueError`] for empty or non-positive wavelengths. Models may fail
    /// with their own errors.
    fn fluxd(&self, geom: &Geometry, waves: &[f64], unit: FluxDensityUnit)
    -> SbResult<Vec<f64>>;

    /// Same as [`SurfaceEmission::fluxd`], but a single wavelength produces a
    /// [`Fluxd::Scalar`].
    ///
    /// # Errors
    /// See [`SurfaceEmission::fluxd`].
    fn fluxd_auto(
        &self,
        geom: &Geometry,
        waves: &[f64],
        unit: FluxDensityUnit,
    ) -> SbResult<Fluxd> {
        Ok(Fluxd::from_vec(self.fluxd(geom, waves, unit)?))
    }
}

/// Either of the surface models, for collections of mixed models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SurfaceModel {
    /// Reflected light.
    HG(HG),

    /// Thermal emission.
    Neatm(Neatm),
}

impl SurfaceEmission for SurfaceModel {
    fn fluxd(
        &self,
        geom: &Geometry,
        waves: &[f64],
        unit: FluxDensityUnit,
    ) -> SbResult<Vec<f64>> {
        match self {
            Self::HG(model) => model.fluxd(geom, waves, unit),
            Self::Neatm(model) => model.fluxd(geom, waves, unit),
        }
    }
}

impl From<HG> for SurfaceModel {
    fn from(value: HG) -> Self {
        Self::HG(value)
    }
}

impl From<Neatm> for SurfaceModel {
    fn from(value: Neatm) -> Self {
        Self::Neatm(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_planck_units_agree() {
        // B_lambda = B_nu * c / lambda^2
        for (wave, temp) in [(0.55, 5778.0), (10.0, 300.0), (100.0, 40.0)] {
            let b_nu = planck(wave, temp);
            let b_lambda = planck_wavelength(wave, temp);
            let expected = FluxDensityUnit::WattPerM2Hz.convert(
                b_nu,
                FluxDensityUnit::WattPerM2Um,
                wave,
            );
            assert!((b_lambda / expected - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_planck_limits() {
        assert_eq!(planck(10.0, -5.0), 0.0);
        assert_eq!(planck_wavelength(10.0, 0.0), 0.0);

        // Deep Wien tail underflows to zero rather than NaN
        assert_eq!(planck(0.1, 1.0), 0.0);
        assert_eq!(planck_wavelength(0.1, 1.0), 0.0);

        // Peak of B_lambda from Wien's law, 2897.77 / T um
        let peak = 2897.771_955 / 300.0;
        assert!(planck_wavelength(peak, 300.0) > planck_wavelength(peak * 0.98, 300.0));
        assert!(planck_wavelength(peak, 300.0) > planck_wavelength(peak * 1.02, 300.0));
    }

    #[test]
    fn test_v_band_grid() {
        let grid: Vec<_> = v_band_grid().collect();
        assert_eq!(grid.len(), V_BAND_SAMPLES);
        assert!((grid[0] - 0.5).abs() < 1e-12);
        assert!((grid[V_BAND_SAMPLES - 1] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_validate_waves() {
        assert!(validate_waves(&[1.0, 2.0]).is_ok());
        assert!(validate_waves(&[]).is_err());
        assert!(validate_waves(&[1.0, -2.0]).is_err());
        assert!(validate_waves(&[f64::NAN]).is_err());
    }

    #[test]
    fn test_surface_model() {
        let geom = Geometry::new(1.1, 0.3, 0.4).unwrap();
        let waves = [0.55, 10.0];
        let hg = HG::new(17.0, 0.15);
        let neatm = Neatm::new(0.5, 0.1, 1.2);
        let models: Vec<SurfaceModel> = vec![hg.clone().into(), neatm.clone().into()];
        let total: Vec<f64> = models
            .iter()
            .map(|model| model.fluxd(&geom, &waves, FluxDensityUnit::Jansky).unwrap())
            .fold(vec![0.0; 2], |acc, f| {
                acc.iter().zip(&f).map(|(a, b)| a + b).collect()
            });
        let expected_hg = hg.fluxd(&geom, &waves, FluxDensityUnit::Jansky).unwrap();
        let expected_th = neatm.fluxd(&geom, &waves, FluxDensityUnit::Jansky).unwrap();
        for idx in 0..2 {
            assert_eq!(total[idx], expected_hg[idx] + expected_th[idx]);
        }

        let json = serde_json::to_string(&models[1]).unwrap();
        let back: SurfaceModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, models[1]);
    }

    #[test]
    fn test_fluxd_shape() {
        assert_eq!(Fluxd::from_vec(vec![2.0]), Fluxd::Scalar(2.0));
        assert_eq!(Fluxd::from_vec(vec![2.0]).as_scalar(), Some(2.0));
        let spectrum = Fluxd::from_vec(vec![1.0, 2.0]);
        assert!(spectrum.as_scalar().is_none());
        assert_eq!(spectrum.into_vec(), vec![1.0, 2.0]);
    }
}
