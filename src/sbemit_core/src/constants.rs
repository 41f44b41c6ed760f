//! # Constants
//! Physical constants and model defaults used throughout the crate.
//!
//! Values which appear in published thermal models are kept at the precision those
//! models were defined with, so that results are reproducible against the literature.
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

/// Solar flux at 1 AU in W / m^2, as used by NEATM.
pub const SOLAR_FLUX: f64 = 1367.567;

/// Stefan Boltzmann constant in W / (m^2 * K^4), as used by NEATM.
pub const STEFAN_BOLTZMANN: f64 = 5.670373e-8;

/// Speed of light in meters / second (Definition)
pub const C_M_PER_S: f64 = 299_792_458.0;

/// Speed of light in AU / Day
pub const C_AU_PER_DAY: f64 = 173.144_632_674_240_34;

/// Planck constant in J s (Definition)
pub const PLANCK_H: f64 = 6.626_070_15e-34;

/// Boltzmann constant in J / K (Definition)
pub const BOLTZMANN_K: f64 = 1.380_649e-23;

/// Product of the Planck constant and the speed of light in J m.
pub const HC: f64 = PLANCK_H * C_M_PER_S;

/// Km per AU (Definition)
pub const AU_KM: f64 = 149_597_870.7;

/// Meters per AU (Definition)
pub const AU_M: f64 = AU_KM * 1000.0;

/// Centimeters per AU (Definition)
pub const AU_CM: f64 = AU_KM * 1e5;

/// Arcseconds per radian.
pub const ARCSEC_PER_RAD: f64 = 206_265.0;

/// Projected distance in km of one arcsecond at 1 AU, as used for comet apertures.
pub const KM_PER_ARCSEC_AT_AU: f64 = 725.0;

/// One erg / (s cm^2) in W / m^2.
pub const ERG_PER_S_CM2: f64 = 1e-3;

/// One Jansky in W / (m^2 Hz)
pub const JANSKY: f64 = 1e-26;

/// Absolute V magnitude of the Sun.
pub const SUN_V_MAG: f64 = -26.75;

/// Effective surface temperature of the sun in K.
pub const SUN_TEMP: f64 = 5778.0;

/// Radius of the sun in km.
pub const SUN_RADIUS_KM: f64 = 695_700.0;

/// Flux density of magnitude 0 in the V band, W / (m^2 um).
pub const V_MAG_ZERO_FLUXD: f64 = 3.51e-8;

/// Reference temperature of a rapidly rotating black body at 1 AU in K, used to set
/// the dust continuum temperature.
pub const DUST_TEMP_1AU: f64 = 278.0;

/// Wavelength range of the V band in um, used to normalize solar spectra.
pub const V_BAND_UM: (f64, f64) = (0.5, 0.6);

/// Number of points sampled over [`V_BAND_UM`].
pub const V_BAND_SAMPLES: usize = 50;

/// Default emissivity of asteroid surfaces.
pub const DEFAULT_EMISSIVITY: f64 = 0.95;

/// Default slope parameter of the HG magnitude system.
pub const DEFAULT_G: f64 = 0.15;

/// Default NEATM beaming parameter.
pub const DEFAULT_ETA: f64 = 1.0;

/// Default relative tolerance of the NEATM surface integral.
pub const DEFAULT_NEATM_TOL: f64 = 1e-3;
