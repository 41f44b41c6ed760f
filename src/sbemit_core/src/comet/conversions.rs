//! Conversions between photometry and the activity of comets.
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

use std::f64::consts::PI;

use crate::constants::{
    ARCSEC_PER_RAD, AU_CM, AU_M, DUST_TEMP_1AU, HC, KM_PER_ARCSEC_AT_AU,
};
use crate::flux::planck_wavelength;
use crate::prelude::{
    Dimension, Error, FluxDensityUnit, Geometry, Quantity, SbResult, Sun, Unit,
};

/// Gas production rate from the total emission of a line or band.
///
/// Valid when the aperture is much smaller than the photo-dissociation scale length
/// of the molecule, `Q = 2 N v / (pi rho)` with `N` the number of molecules within
/// the aperture.
///
/// # Arguments
///
/// * `fgas` - Total line or band emission, an irradiance such as W / m^2.
/// * `wave` - Wavelength of the line or band.
/// * `geom` - Observing geometry.
/// * `g` - Fluorescence efficiency (g-factor) at 1 AU, a rate.
/// * `rap` - Aperture radius, an angle or a projected length at the comet.
/// * `v` - Expansion speed of the gas.
///
/// Returns the production rate in molecules per second.
///
/// # Errors
/// [`Error::UnitMismatch`] if any input has the wrong dimension,
/// [`Error::UnsupportedUnit`] if the aperture is neither an angle nor a length, and
/// [`Error::ValueError`] if the aperture is not finite and positive.
pub fn flux2q(
    fgas: &Quantity,
    wave: &Quantity,
    geom: &Geometry,
    g: &Quantity,
    rap: &Quantity,
    v: &Quantity,
) -> SbResult<Quantity> {
    let fgas = fgas.to(Unit::WattPerM2)?;
    let wave = wave.to(Unit::Meter)?;
    let g = g.to(Unit::PerSecond)?;
    let v = v.to(Unit::MeterPerSecond)?;
    let rho = match rap.dimension() {
        Dimension::Angle => rap.to(Unit::Arcsec)? * geom.delta() * KM_PER_ARCSEC_AT_AU * 1e3,
        Dimension::Length => rap.to(Unit::Meter)?,
        other => Err(Error::UnsupportedUnit(format!(
            "Aperture must be an angle or a length, found {other}."
        )))?,
    };
    rap.require_positive("Aperture radius")?;

    let delta = geom.delta() * AU_M;
    let n = 4.0 * PI * delta.powi(2) * fgas * wave / HC * geom.rh().powi(2) / g;
    Ok(2.0 * n * v / PI / rho * Unit::PerSecond)
}

/// Afrho of a comet from its flux density, A'Hearn et al. (1984).
///
/// ```
///     use sbemit_core::prelude::*;
///     let geom = Geometry::new(1.0, 1.0, 0.0).unwrap();
///     let fluxd = 1e-14 * Unit::FluxDensity(FluxDensityUnit::WattPerM2Um);
///     let afrho = fluxd2afrho(
///         &(0.55 * Unit::Micron),
///         &fluxd,
///         &(5.0 * Unit::Arcsec),
///         &geom,
///         &Sun::Constant(1800.0),
///     ).unwrap();
///     assert!(afrho.to(Unit::Centimeter).unwrap() > 0.0);
/// ```
///
/// # Arguments
///
/// * `wave` - Wavelength.
/// * `fluxd` - Flux density of the comet.
/// * `rho` - Angular radius of the aperture.
/// * `geom` - Observing geometry.
/// * `sun` - Solar flux density at 1 AU. Use [`Sun::Constant`] for a value already
///   averaged over a filter.
///
/// # Errors
/// [`Error::UnitMismatch`] if any input has the wrong dimension.
/// [`Error::ValueError`] if the aperture is not finite and positive, or if the solar
/// spectrum does not cover the wavelength.
pub fn fluxd2afrho(
    wave: &Quantity,
    fluxd: &Quantity,
    rho: &Quantity,
    geom: &Geometry,
    sun: &Sun,
) -> SbResult<Quantity> {
    let wave = wave.to(Unit::Micron)?;
    let fluxd = fluxd.to_flux_density(FluxDensityUnit::WattPerM2Um, wave)?;
    let rho = rho.to(Unit::Arcsec)?;
    rho_positive(rho)?;
    let sun = sun.fluxd_at_1au(wave)?;

    let delta = geom.delta() * AU_CM;
    let afrho = 4.0 * delta * ARCSEC_PER_RAD / rho * fluxd * geom.rh().powi(2) / sun;
    Ok(afrho * Unit::Centimeter)
}

/// Epsilon-f-rho of a comet from its thermal flux density, Kelley et al. (2013).
///
/// # Arguments
///
/// * `wave` - Wavelength.
/// * `fluxd` - Flux density of the comet.
/// * `rho` - Angular radius of the aperture.
/// * `geom` - Observing geometry.
/// * `tscale` - Continuum temperature relative to `278 / sqrt(rh)` K, 1.1 is
///   typical.
///
/// # Errors
/// [`Error::UnitMismatch`] if any input has the wrong dimension, and
/// [`Error::ValueError`] if the aperture is not finite and positive.
pub fn fluxd2efrho(
    wave: &Quantity,
    fluxd: &Quantity,
    rho: &Quantity,
    geom: &Geometry,
    tscale: f64,
) -> SbResult<Quantity> {
    let wave = wave.to(Unit::Micron)?;
    let fluxd = fluxd.to_flux_density(FluxDensityUnit::WattPerM2Um, wave)?;
    let rho = rho.to(Unit::Arcsec)?;
    rho_positive(rho)?;
    let rho = rho / ARCSEC_PER_RAD;

    let radiance = planck_wavelength(wave, tscale * DUST_TEMP_1AU / geom.rh().sqrt());
    let rho_cm = rho * geom.delta() * AU_CM;
    let solid_angle = PI * rho.powi(2);
    Ok(fluxd / solid_angle * rho_cm / radiance * Unit::Centimeter)
}

fn rho_positive(rho: f64) -> SbResult<()> {
    if !rho.is_finite() || rho <= 0.0 {
        Err(Error::ValueError(format!(
            "Aperture radius must be finite and positive, found {rho} arcsec."
        )))?;
    }
    Ok(())
}

/// Afrho at 1 AU from the total absolute magnitude M1 of a comet.
///
/// Empirical trend with the Afrho of A'Hearn et al. (1995), the scatter about the
/// trend is up to a factor of 4.
#[must_use]
pub fn m2afrho1(m1: f64) -> Quantity {
    10_f64.powf(-0.208 * m1 + 4.687) * Unit::Centimeter
}
