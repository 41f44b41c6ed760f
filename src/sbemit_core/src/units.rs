//! # Units
//! Dimensioned quantities and spectral flux density conversions.
//!
//! Models work internally in a fixed set of units (AU, km, um, radians, W / m^2 / Hz),
//! values supplied from the outside are coerced into those units through
//! [`Quantity::to`], which refuses to convert between different physical dimensions.
//! Quantities are held as `uom` SI types, [`Unit`] selects the unit at run time.
//!
//! Flux densities per unit frequency and per unit wavelength are only convertible at a
//! specified wavelength, see [`FluxDensityUnit::convert`].
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

use std::{fmt, ops::Mul};

use serde::{Deserialize, Serialize};
use uom::si::angle::{degree, radian, second as arcsecond};
use uom::si::f64::{Angle, Frequency, HeatFluxDensity, Length, Ratio, Time, Velocity};
use uom::si::frequency::hertz;
use uom::si::heat_flux_density::watt_per_square_meter;
use uom::si::length::{centimeter, kilometer, meter, micrometer, nanometer};
use uom::si::ratio::ratio;
use uom::si::time::{day, second};
use uom::si::velocity::{kilometer_per_second, meter_per_second};

use crate::constants::{AU_M, C_M_PER_S, ERG_PER_S_CM2, JANSKY};
use crate::prelude::{Error, SbResult};

/// Physical dimension of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dimension {
    /// No dimension, plain numbers.
    Dimensionless,

    /// Distance.
    Length,

    /// Plane angle.
    Angle,

    /// Elapsed time.
    Time,

    /// Length per time.
    Velocity,

    /// Events per time, such as the g-factor of a molecule.
    Rate,

    /// Power per area.
    Irradiance,

    /// Power per area per unit frequency or wavelength.
    SpectralFluxDensity,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dimensionless => "dimensionless",
            Self::Length => "length",
            Self::Angle => "angle",
            Self::Time => "time",
            Self::Velocity => "velocity",
            Self::Rate => "rate",
            Self::Irradiance => "irradiance",
            Self::SpectralFluxDensity => "spectral flux density",
        };
        write!(f, "{name}")
    }
}

/// Units of spectral flux density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluxDensityUnit {
    /// W / (m^2 Hz)
    WattPerM2Hz,

    /// Jansky, 1e-26 W / (m^2 Hz)
    Jansky,

    /// Milli-Jansky, 1e-29 W / (m^2 Hz)
    MilliJansky,

    /// W / (m^2 um)
    WattPerM2Um,

    /// W / (m^2 nm)
    WattPerM2Nm,

    /// erg / (s cm^2 Angstrom)
    ErgPerSCm2A,
}

impl FluxDensityUnit {
    /// If this unit is per unit frequency, otherwise it is per unit wavelength.
    #[must_use]
    pub fn is_per_frequency(&self) -> bool {
        matches!(self, Self::WattPerM2Hz | Self::Jansky | Self::MilliJansky)
    }

    /// Scale factor to W / (m^2 Hz) for frequency units, or W / (m^2 m) for
    /// wavelength units.
    fn si_scale(self) -> f64 {
        match self {
            Self::WattPerM2Hz => 1.0,
            Self::Jansky => JANSKY,
            Self::MilliJansky => JANSKY * 1e-3,
            Self::WattPerM2Um => 1e6,
            Self::WattPerM2Nm => 1e9,
            Self::ErgPerSCm2A => 1e7,
        }
    }

    /// Convert a flux density from this unit into another at the specified
    /// wavelength.
    ///
    /// The wavelength is only used when converting between per frequency and per
    /// wavelength units, where `F_lambda = F_nu * c / lambda^2`.
    ///
    /// ```
    ///     use sbemit_core::units::FluxDensityUnit;
    ///     let jy = FluxDensityUnit::WattPerM2Hz.convert(1e-26, FluxDensityUnit::Jansky, 10.0);
    ///     assert!((jy - 1.0).abs() < 1e-12);
    /// ```
    ///
    /// # Arguments
    ///
    /// * `value` - Flux density in units of `self`.
    /// * `target` - Desired unit.
    /// * `wavelength` - Wavelength in um at which the flux density is defined.
    #[must_use]
    pub fn convert(self, value: f64, target: Self, wavelength: f64) -> f64 {
        let si = value * self.si_scale();
        let wave_m = wavelength * 1e-6;
        let converted = match (self.is_per_frequency(), target.is_per_frequency()) {
            (true, false) => si * C_M_PER_S / wave_m.powi(2),
            (false, true) => si * wave_m.powi(2) / C_M_PER_S,
            _ => si,
        };
        converted / target.si_scale()
    }
}

impl fmt::Display for FluxDensityUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::WattPerM2Hz => "W / (m2 Hz)",
            Self::Jansky => "Jy",
            Self::MilliJansky => "mJy",
            Self::WattPerM2Um => "W / (m2 um)",
            Self::WattPerM2Nm => "W / (m2 nm)",
            Self::ErgPerSCm2A => "erg / (s cm2 A)",
        };
        write!(f, "{name}")
    }
}

/// Physical units understood by [`Quantity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Unit {
    /// Plain number.
    Dimensionless,

    /// Meter.
    Meter,

    /// Centimeter.
    Centimeter,

    /// Kilometer.
    Kilometer,

    /// Micron.
    Micron,

    /// Nanometer.
    Nanometer,

    /// Astronomical unit, IAU 2012 definition.
    AU,

    /// Radian.
    Radian,

    /// Degree.
    Degree,

    /// Arcsecond.
    Arcsec,

    /// Second.
    Second,

    /// Day of 86400 seconds.
    Day,

    /// Meter per second.
    MeterPerSecond,

    /// Kilometer per second.
    KmPerSecond,

    /// Events per second.
    PerSecond,

    /// W / m^2
    WattPerM2,

    /// erg / (s cm^2)
    ErgPerSCm2,

    /// Spectral flux density.
    FluxDensity(FluxDensityUnit),
}

impl Unit {
    /// Physical dimension of the unit.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Dimensionless => Dimension::Dimensionless,
            Self::Meter | Self::Centimeter | Self::Kilometer | Self::Micron => Dimension::Length,
            Self::Nanometer | Self::AU => Dimension::Length,
            Self::Radian | Self::Degree | Self::Arcsec => Dimension::Angle,
            Self::Second | Self::Day => Dimension::Time,
            Self::MeterPerSecond | Self::KmPerSecond => Dimension::Velocity,
            Self::PerSecond => Dimension::Rate,
            Self::WattPerM2 | Self::ErgPerSCm2 => Dimension::Irradiance,
            Self::FluxDensity(_) => Dimension::SpectralFluxDensity,
        }
    }
}

/// A physical quantity, stored as the matching `uom` SI type.
///
/// Spectral flux densities keep their own unit, converting between per frequency and
/// per wavelength forms needs a wavelength, see [`FluxDensityUnit::convert`].
///
/// Quantities are usually built by multiplying a number by a [`Unit`]:
///
/// ```
///     use sbemit_core::units::{Dimension, Unit};
///     let rap = 5.0 * Unit::Arcsec;
///     assert_eq!(rap.dimension(), Dimension::Angle);
///     assert!((rap.to(Unit::Degree).unwrap() * 3600.0 - 5.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "RawQuantity", from = "RawQuantity")]
pub enum Quantity {
    /// Plain number.
    Dimensionless(Ratio),

    /// Distance.
    Length(Length),

    /// Plane angle.
    Angle(Angle),

    /// Elapsed time.
    Time(Time),

    /// Speed.
    Velocity(Velocity),

    /// Events per time.
    Rate(Frequency),

    /// Power per area.
    Irradiance(HeatFluxDensity),

    /// Spectral flux density.
    FluxDensity {
        /// Numerical value in units of `unit`.
        value: f64,

        /// Unit of the value.
        unit: FluxDensityUnit,
    },
}

/// Serialized form of a [`Quantity`], a value in the SI unit of its dimension.
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawQuantity {
    value: f64,
    unit: Unit,
}

impl From<Quantity> for RawQuantity {
    fn from(quantity: Quantity) -> Self {
        let (value, unit) = match quantity {
            Quantity::Dimensionless(q) => (q.get::<ratio>(), Unit::Dimensionless),
            Quantity::Length(q) => (q.get::<meter>(), Unit::Meter),
            Quantity::Angle(q) => (q.get::<radian>(), Unit::Radian),
            Quantity::Time(q) => (q.get::<second>(), Unit::Second),
            Quantity::Velocity(q) => (q.get::<meter_per_second>(), Unit::MeterPerSecond),
            Quantity::Rate(q) => (q.get::<hertz>(), Unit::PerSecond),
            Quantity::Irradiance(q) => (q.get::<watt_per_square_meter>(), Unit::WattPerM2),
            Quantity::FluxDensity { value, unit } => (value, Unit::FluxDensity(unit)),
        };
        Self { value, unit }
    }
}

impl From<RawQuantity> for Quantity {
    fn from(raw: RawQuantity) -> Self {
        Self::new(raw.value, raw.unit)
    }
}

impl Quantity {
    /// Construct a new [`Quantity`] from a value in the given unit.
    #[must_use]
    pub fn new(value: f64, unit: Unit) -> Self {
        match unit {
            Unit::Dimensionless => Self::Dimensionless(Ratio::new::<ratio>(value)),
            Unit::Meter => Self::Length(Length::new::<meter>(value)),
            Unit::Centimeter => Self::Length(Length::new::<centimeter>(value)),
            Unit::Kilometer => Self::Length(Length::new::<kilometer>(value)),
            Unit::Micron => Self::Length(Length::new::<micrometer>(value)),
            Unit::Nanometer => Self::Length(Length::new::<nanometer>(value)),
            // uom's astronomical unit predates the IAU 2012 definition
            Unit::AU => Self::Length(Length::new::<meter>(value * AU_M)),
            Unit::Radian => Self::Angle(Angle::new::<radian>(value)),
            Unit::Degree => Self::Angle(Angle::new::<degree>(value)),
            Unit::Arcsec => Self::Angle(Angle::new::<arcsecond>(value)),
            Unit::Second => Self::Time(Time::new::<second>(value)),
            Unit::Day => Self::Time(Time::new::<day>(value)),
            Unit::MeterPerSecond => Self::Velocity(Velocity::new::<meter_per_second>(value)),
            Unit::KmPerSecond => Self::Velocity(Velocity::new::<kilometer_per_second>(value)),
            Unit::PerSecond => Self::Rate(Frequency::new::<hertz>(value)),
            Unit::WattPerM2 => {
                Self::Irradiance(HeatFluxDensity::new::<watt_per_square_meter>(value))
            }
            Unit::ErgPerSCm2 => Self::Irradiance(HeatFluxDensity::new::<watt_per_square_meter>(
                value * ERG_PER_S_CM2,
            )),
            Unit::FluxDensity(unit) => Self::FluxDensity { value, unit },
        }
    }

    /// Physical dimension of the quantity.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Dimensionless(_) => Dimension::Dimensionless,
            Self::Length(_) => Dimension::Length,
            Self::Angle(_) => Dimension::Angle,
            Self::Time(_) => Dimension::Time,
            Self::Velocity(_) => Dimension::Velocity,
            Self::Rate(_) => Dimension::Rate,
            Self::Irradiance(_) => Dimension::Irradiance,
            Self::FluxDensity { .. } => Dimension::SpectralFluxDensity,
        }
    }

    fn mismatch(&self, expected: Dimension) -> Error {
        Error::UnitMismatch {
            expected: expected.to_string(),
            found: self.dimension().to_string(),
        }
    }

    /// Fail if the quantity does not have the specified dimension.
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] if the dimensions differ.
    pub fn require(&self, dimension: Dimension) -> SbResult<()> {
        if self.dimension() != dimension {
            Err(self.mismatch(dimension))?;
        }
        Ok(())
    }

    /// Value of the quantity in the target unit.
    ///
    /// ```
    ///     use sbemit_core::units::{Quantity, Unit};
    ///     let d = Quantity::new(1.0, Unit::AU).to(Unit::Kilometer).unwrap();
    ///     assert!((d - 149597870.7).abs() < 1e-6);
    ///     assert!(Quantity::new(1.0, Unit::AU).to(Unit::Second).is_err());
    /// ```
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] if the dimensions differ, and [`Error::ValueError`] when
    /// converting between per frequency and per wavelength flux densities, which
    /// requires [`Quantity::to_flux_density`].
    pub fn to(&self, unit: Unit) -> SbResult<f64> {
        let value = match (*self, unit) {
            (Self::Dimensionless(q), Unit::Dimensionless) => q.get::<ratio>(),
            (Self::Length(q), Unit::Meter) => q.get::<meter>(),
            (Self::Length(q), Unit::Centimeter) => q.get::<centimeter>(),
            (Self::Length(q), Unit::Kilometer) => q.get::<kilometer>(),
            (Self::Length(q), Unit::Micron) => q.get::<micrometer>(),
            (Self::Length(q), Unit::Nanometer) => q.get::<nanometer>(),
            (Self::Length(q), Unit::AU) => q.get::<meter>() / AU_M,
            (Self::Angle(q), Unit::Radian) => q.get::<radian>(),
            (Self::Angle(q), Unit::Degree) => q.get::<degree>(),
            (Self::Angle(q), Unit::Arcsec) => q.get::<arcsecond>(),
            (Self::Time(q), Unit::Second) => q.get::<second>(),
            (Self::Time(q), Unit::Day) => q.get::<day>(),
            (Self::Velocity(q), Unit::MeterPerSecond) => q.get::<meter_per_second>(),
            (Self::Velocity(q), Unit::KmPerSecond) => q.get::<kilometer_per_second>(),
            (Self::Rate(q), Unit::PerSecond) => q.get::<hertz>(),
            (Self::Irradiance(q), Unit::WattPerM2) => q.get::<watt_per_square_meter>(),
            (Self::Irradiance(q), Unit::ErgPerSCm2) => {
                q.get::<watt_per_square_meter>() / ERG_PER_S_CM2
            }
            (Self::FluxDensity { value, unit: from }, Unit::FluxDensity(to)) => {
                if from.is_per_frequency() != to.is_per_frequency() {
                    Err(Error::ValueError(format!(
                        "Converting {from} to {to} requires a wavelength."
                    )))?;
                }
                // same kind of unit, the wavelength is unused
                from.convert(value, to, 1.0)
            }
            _ => Err(self.mismatch(unit.dimension()))?,
        };
        Ok(value)
    }

    /// Value of a spectral flux density in the target unit at the given wavelength.
    ///
    /// # Arguments
    ///
    /// * `unit` - Target flux density unit.
    /// * `wavelength` - Wavelength in um.
    ///
    /// # Errors
    /// [`Error::UnitMismatch`] if this is not a spectral flux density.
    pub fn to_flux_density(&self, unit: FluxDensityUnit, wavelength: f64) -> SbResult<f64> {
        match *self {
            Self::FluxDensity { value, unit: from } => Ok(from.convert(value, unit, wavelength)),
            _ => Err(self.mismatch(Dimension::SpectralFluxDensity)),
        }
    }

    /// Fail unless the quantity is finite and positive, as for a radius.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the quantity used in the error message.
    ///
    /// # Errors
    /// [`Error::ValueError`] for zero, negative or non-finite values.
    pub fn require_positive(&self, name: &str) -> SbResult<()> {
        let value = RawQuantity::from(*self).value;
        if !value.is_finite() || value <= 0.0 {
            Err(Error::ValueError(format!(
                "{name} must be finite and positive, found {value}."
            )))?;
        }
        Ok(())
    }
}

impl Mul<Unit> for f64 {
    type Output = Quantity;

    /// Attach a unit to a number, `2.0 * Unit::AU`.
    fn mul(self, unit: Unit) -> Self::Output {
        Quantity::new(self, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let q = 1.0 * Unit::AU;
        assert_eq!(q.dimension(), Dimension::Length);
        assert!((q.to(Unit::Kilometer).unwrap() - 149_597_870.7).abs() < 1e-6);
        assert!((q.to(Unit::Centimeter).unwrap() - 1.495_978_707e13).abs() < 1.0);
        assert!((q.to(Unit::AU).unwrap() - 1.0).abs() < 1e-15);
        assert!(((2.0 * Unit::Micron).to(Unit::Nanometer).unwrap() - 2000.0).abs() < 1e-9);
        assert_eq!(
            1.5 * Unit::Kilometer,
            Quantity::Length(Length::new::<meter>(1500.0))
        );
    }

    #[test]
    fn test_angle_conversions() {
        let q = 3600.0 * Unit::Arcsec;
        assert!((q.to(Unit::Degree).unwrap() - 1.0).abs() < 1e-12);
        let q = 180.0 * Unit::Degree;
        assert!((q.to(Unit::Radian).unwrap() - std::f64::consts::PI).abs() < 1e-12);
    }

    #[test]
    fn test_other_conversions() {
        assert!(((2.0 * Unit::Day).to(Unit::Second).unwrap() - 172_800.0).abs() < 1e-9);
        assert!(((1.0 * Unit::KmPerSecond).to(Unit::MeterPerSecond).unwrap() - 1e3).abs() < 1e-9);
        assert!(((0.5 * Unit::PerSecond).to(Unit::PerSecond).unwrap() - 0.5).abs() < 1e-15);
        assert!(((1.0 * Unit::ErgPerSCm2).to(Unit::WattPerM2).unwrap() - 1e-3).abs() < 1e-15);
        assert!(((2.0 * Unit::WattPerM2).to(Unit::ErgPerSCm2).unwrap() - 2e3).abs() < 1e-9);
    }

    #[test]
    fn test_dimension_mismatch() {
        let q = 1.0 * Unit::Second;
        assert_eq!(
            q.to(Unit::Meter),
            Err(Error::UnitMismatch {
                expected: "length".into(),
                found: "time".into()
            })
        );
        assert!(q.require(Dimension::Time).is_ok());
        assert!(q.require(Dimension::Angle).is_err());

        // per frequency to per wavelength needs a wavelength
        let q = 1.0 * Unit::FluxDensity(FluxDensityUnit::Jansky);
        assert!(
            q.to(Unit::FluxDensity(FluxDensityUnit::WattPerM2Um))
                .is_err()
        );
        assert!(
            (q.to(Unit::FluxDensity(FluxDensityUnit::MilliJansky)).unwrap() - 1000.0).abs()
                < 1e-9
        );
    }

    #[test]
    fn test_require_positive() {
        assert!((2.0 * Unit::Arcsec).require_positive("Aperture").is_ok());
        assert!((0.0 * Unit::Arcsec).require_positive("Aperture").is_err());
        assert!((-1.0 * Unit::Kilometer).require_positive("Aperture").is_err());
        assert!((f64::NAN * Unit::Meter).require_positive("Aperture").is_err());
        assert!((f64::INFINITY * Unit::Meter).require_positive("Aperture").is_err());
    }

    #[test]
    fn test_serde() {
        let q: Quantity = serde_json::from_str(r#"{"value": 250.0, "unit": "Centimeter"}"#)
            .unwrap();
        assert!((q.to(Unit::Meter).unwrap() - 2.5).abs() < 1e-12);
        let json = serde_json::to_string(&q).unwrap();
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert!((back.to(Unit::Centimeter).unwrap() - 250.0).abs() < 1e-9);

        let fluxd = 3.0 * Unit::FluxDensity(FluxDensityUnit::MilliJansky);
        let back: Quantity = serde_json::from_str(&serde_json::to_string(&fluxd).unwrap())
            .unwrap();
        assert_eq!(back, fluxd);
    }

    #[test]
    fn test_spectral_equivalence() {
        // 1 Jy at 10 um = 1e-26 * c / (1e-5)^2 W/m2/m = 2.998e-14 W/m2/um
        let q = 1.0 * Unit::FluxDensity(FluxDensityUnit::Jansky);
        let f = q
            .to_flux_density(FluxDensityUnit::WattPerM2Um, 10.0)
            .unwrap();
        assert!((f - 2.997_924_58e-14).abs() < 1e-20);

        // and back again
        let back = FluxDensityUnit::WattPerM2Um.convert(f, FluxDensityUnit::Jansky, 10.0);
        assert!((back - 1.0).abs() < 1e-12);

        // W/m2/um to erg/s/cm2/A is a factor of 10
        let f = FluxDensityUnit::WattPerM2Um.convert(1.0, FluxDensityUnit::ErgPerSCm2A, 0.5);
        assert!((f - 0.1).abs() < 1e-12);

        assert!((1.0 * Unit::AU).to_flux_density(FluxDensityUnit::Jansky, 1.0).is_err());
    }
}
