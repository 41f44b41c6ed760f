//! # Flux
//! Flux density models of asteroid surfaces and cometary dust.
//!
//! Surface models implement [`SurfaceEmission`]:
//!
//! - [`Neatm`] Thermal emission from the Near Earth Asteroid Thermal Model.
//! - [`HG`] Sunlight reflected according to the IAU HG magnitude system.
//!
//! Dust models implement [`AfrhoRadiation`], and additionally depend on the size of
//! the photometric aperture:
//!
//! - [`AfrhoScattered`] Sunlight scattered by dust.
//! - [`AfrhoThermal`] Thermal emission from dust.
//!
//! The color of reflected light is set by a [`Sun`].
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

mod afrho;
mod common;
mod neatm;
mod reflected;
mod sun;

pub use self::afrho::{
    AfrhoRadiation, AfrhoScattered, AfrhoThermal, DEFAULT_EF2AF, DEFAULT_TSCALE,
};
pub use self::common::{Fluxd, SurfaceEmission, SurfaceModel, planck, planck_wavelength};
pub(crate) use self::common::validate_waves;
pub use self::neatm::Neatm;
pub use self::reflected::{HG, hg_phase_function};
pub use self::sun::{SolarTable, Sun};
