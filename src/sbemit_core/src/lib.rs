//! # sbemit Core
//! Flux density models of small Solar System bodies: thermal emission of asteroids,
//! sunlight reflected by their surfaces, and the dust comae of comets.
//!
//! All models share the same observing [`ephem::Geometry`] and return spectral flux
//! densities in a caller selected [`units::FluxDensityUnit`]. Composite objects such
//! as [`comet::Comet`] query the geometry from any [`ephem::SolarSysObject`], so that
//! an external ephemeris source may be plugged in.
//!
//! Numerical integration is provided by the `sbemit_stats` crate.
//!
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

pub mod comet;
pub mod constants;
pub mod ephem;
pub mod errors;
pub mod flux;
pub mod units;

/// Common useful imports
pub mod prelude {
    pub use crate::comet::{
        Asteroid, Coma, Comet, FluxdOptions, flux2q, fluxd2afrho, fluxd2efrho, m2afrho1,
    };
    pub use crate::ephem::{Geometry, SharedObject, SolarSysObject, State, Time};
    pub use crate::errors::{Error, SbResult};
    pub use crate::flux::{
        AfrhoRadiation, AfrhoScattered, AfrhoThermal, Fluxd, HG, Neatm, SolarTable, Sun,
        SurfaceEmission, SurfaceModel, planck, planck_wavelength,
    };
    pub use crate::units::{Dimension, FluxDensityUnit, Quantity, Unit};
}
