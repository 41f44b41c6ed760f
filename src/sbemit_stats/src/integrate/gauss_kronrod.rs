//! # Gauss-Kronrod quadrature
//!
//! Globally adaptive 15 point Kronrod rule with the embedded 7 point Gauss rule used
//! as the error estimate.
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

use crate::integrate::{Integral, IntegrateError, IntegrateResult};

/// Default maximum number of sub-intervals before integration gives up.
pub const DEFAULT_LIMIT: usize = 100;

/// Kronrod abscissae on [0, 1], the odd indices are shared with the Gauss rule.
const XGK: [f64; 8] = [
    0.991_455_371_120_812_6,
    0.949_107_912_342_758_5,
    0.864_864_423_359_769_1,
    0.741_531_185_599_394_4,
    0.586_087_235_467_691_1,
    0.405_845_151_377_397_2,
    0.207_784_955_007_898_5,
    0.0,
];

/// Kronrod weights.
const WGK: [f64; 8] = [
    0.022_935_322_010_529_22,
    0.063_092_092_629_978_55,
    0.104_790_010_322_250_18,
    0.140_653_259_715_525_92,
    0.169_004_726_639_267_9,
    0.190_350_578_064_785_4,
    0.204_432_940_075_298_9,
    0.209_482_141_084_727_83,
];

/// Gauss weights.
const WG: [f64; 4] = [
    0.129_484_966_168_869_7,
    0.279_705_391_489_276_7,
    0.381_830_050_505_118_94,
    0.417_959_183_673_469_4,
];

/// Convert a literal into the float type, all supported floats can hold these.
#[inline(always)]
fn lit<T: num_traits::Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// A sub-interval along with its integral estimate.
#[derive(Debug, Clone, Copy)]
struct Segment<T> {
    lower: T,
    upper: T,
    value: T,
    error: T,
}

/// Apply the 15 point Kronrod rule to a single interval.
fn kronrod_15<T>(func: &impl Fn(T) -> T, lower: T, upper: T) -> IntegrateResult<Segment<T>>
where
    T: num_traits::Float + num_traits::NumAssignOps,
{
    let half = lit::<T>(0.5);
    let center = half * (lower + upper);
    let half_len = half * (upper - lower);

    let f_center = func(center);
    if !f_center.is_finite() {
        Err(IntegrateError::NonFinite)?;
    }
    let mut res_kronrod = f_center * lit(WGK[7]);
    let mut res_gauss = f_center * lit(WG[3]);

    for (idx, (node, weight)) in XGK.iter().zip(WGK).take(7).enumerate() {
        let dx = half_len * lit(*node);
        let f_low = func(center - dx);
        let f_high = func(center + dx);
        if !f_low.is_finite() || !f_high.is_finite() {
            Err(IntegrateError::NonFinite)?;
        }
        let sum = f_low + f_high;
        res_kronrod += lit::<T>(weight) * sum;
        if idx % 2 == 1 {
            res_gauss += lit::<T>(WG[idx / 2]) * sum;
        }
    }

    Ok(Segment {
        lower,
        upper,
        value: res_kronrod * half_len,
        error: ((res_kronrod - res_gauss) * half_len).abs(),
    })
}

/// Integrate a function over a finite interval to a relative tolerance.
///
/// This is [`integrate_with`] with no absolute tolerance and the [`DEFAULT_LIMIT`]
/// number of sub-intervals.
///
/// ```
///     use sbemit_stats::integrate::integrate;
///     let res = integrate(|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1e-10).unwrap();
///     assert!((res.value - 2.0).abs() < 1e-10);
///     assert!(res.converged);
/// ```
///
/// # Errors
///
/// See [`integrate_with`].
pub fn integrate<T>(
    func: impl Fn(T) -> T,
    lower: T,
    upper: T,
    rtol: T,
) -> IntegrateResult<Integral<T>>
where
    T: num_traits::Float + num_traits::NumAssignOps,
{
    integrate_with(func, lower, upper, rtol, T::zero(), DEFAULT_LIMIT)
}

/// Integrate a function over a finite interval.
///
/// The interval with the largest error estimate is bisected until the total error
/// estimate is below `max(atol, rtol * |integral|)`, or until `limit` sub-intervals
/// exist. Reaching the limit is not an error, the best estimate is returned with
/// [`Integral::converged`] set to false.
///
/// If `upper < lower` the integral is computed with the reversed sign.
///
/// # Arguments
/// * `func` - Function to integrate.
/// * `lower` - Lower bound of the integral.
/// * `upper` - Upper bound of the integral.
/// * `rtol` - Relative tolerance, must be positive.
/// * `atol` - Absolute tolerance, must not be negative.
/// * `limit` - Maximum number of sub-intervals.
///
/// # Errors
///
/// [`IntegrateError`] may be returned in the following cases:
///     - Any function evaluation returns a non-finite value.
///     - Bounds are not finite.
///     - Tolerances are out of range.
pub fn integrate_with<T>(
    func: impl Fn(T) -> T,
    lower: T,
    upper: T,
    rtol: T,
    atol: T,
    limit: usize,
) -> IntegrateResult<Integral<T>>
where
    T: num_traits::Float + num_traits::NumAssignOps,
{
    if !rtol.is_finite() || rtol <= T::zero() || !atol.is_finite() || atol < T::zero() {
        Err(IntegrateError::Tolerance)?;
    }
    if !lower.is_finite() || !upper.is_finite() {
        Err(IntegrateError::Bounds)?;
    }
    if lower == upper {
        return Ok(Integral {
            value: T::zero(),
            error: T::zero(),
            evaluations: 0,
            converged: true,
        });
    }

    let half = lit::<T>(0.5);
    let mut segments = vec![kronrod_15(&func, lower, upper)?];
    let mut evaluations = 15;

    loop {
        let (value, error) = segments
            .iter()
            .fold((T::zero(), T::zero()), |(v, e), seg| (v + seg.value, e + seg.error));

        if error <= atol.max(rtol * value.abs()) {
            return Ok(Integral {
                value,
                error,
                evaluations,
                converged: true,
            });
        }

        // bisect the worst interval
        let worst = (1..segments.len()).fold(0, |worst, idx| {
            if segments[idx].error > segments[worst].error {
                idx
            } else {
                worst
            }
        });
        let seg = segments[worst];
        let mid = half * (seg.lower + seg.upper);

        // Interval can no longer be split at this precision.
        if segments.len() >= limit || mid == seg.lower || mid == seg.upper {
            return Ok(Integral {
                value,
                error,
                evaluations,
                converged: false,
            });
        }

        let left = kronrod_15(&func, seg.lower, mid)?;
        let right = kronrod_15(&func, mid, seg.upper)?;
        evaluations += 30;
        segments[worst] = left;
        segments.push(right);
    }
}

#[cfg(test)]
mod tests {
    use crate::integrate::{IntegrateError, integrate, integrate_with};
    use std::f64::consts::PI;

    #[test]
    fn test_polynomial_exact() {
        // 15 point Kronrod is exact for polynomials below degree 23
        let res = integrate(|x: f64| x.powi(5) - 3.0 * x, 0.0, 2.0, 1e-12).unwrap();
        assert!((res.value - (64.0 / 6.0 - 6.0)).abs() < 1e-12);
        assert!(res.converged);
        assert_eq!(res.evaluations, 15);
    }

    #[test]
    fn test_known_integrals() {
        let res = integrate(f64::sin, 0.0, PI, 1e-10).unwrap();
        assert!((res.value - 2.0).abs() < 1e-10);

        // derivative singularity at 0 forces subdivision
        let res = integrate(f64::sqrt, 0.0, 1.0, 1e-8).unwrap();
        assert!((res.value - 2.0 / 3.0).abs() < 1e-8);
        assert!(res.evaluations > 15);

        let res = integrate(|x: f64| (-x * x).exp(), -10.0, 10.0, 1e-10).unwrap();
        assert!((res.value - PI.sqrt()).abs() < 1e-9);

        let res = integrate(|x: f32| x * x, 0.0, 3.0, 1e-5).unwrap();
        assert!((res.value - 9.0).abs() < 1e-4);
    }

    #[test]
    fn test_reversed_and_empty() {
        let res = integrate(f64::cos, PI / 2.0, 0.0, 1e-10).unwrap();
        assert!((res.value + 1.0).abs() < 1e-10);

        let res = integrate(f64::cos, 1.0, 1.0, 1e-10).unwrap();
        assert_eq!(res.value, 0.0);
        assert_eq!(res.evaluations, 0);

        // all zero integrand converges on the first pass
        let res = integrate(|_: f64| 0.0, 0.0, 1.0, 1e-10).unwrap();
        assert_eq!(res.value, 0.0);
        assert!(res.converged);
    }

    #[test]
    fn test_limit() {
        let res = integrate_with(f64::sqrt, 0.0, 1.0, 1e-14, 0.0, 1).unwrap();
        assert!(!res.converged);
        assert!((res.value - 2.0 / 3.0).abs() < 1e-3);

        // the best estimate after the last bisection is returned, not zero
        let res = integrate_with(f64::sqrt, 0.0, 1.0, 1e-14, 0.0, 3).unwrap();
        assert!(!res.converged);
        assert_eq!(res.evaluations, 75);
        assert!(res.error > 0.0);
        assert!((res.value - 2.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            integrate(|x: f64| 1.0 / x, -1.0, 1.0, 1e-6),
            Err(IntegrateError::NonFinite)
        );
        assert_eq!(
            integrate(|x: f64| x, 0.0, 1.0, 0.0),
            Err(IntegrateError::Tolerance)
        );
        assert_eq!(
            integrate_with(|x: f64| x, 0.0, 1.0, 1e-3, -1.0, 10),
            Err(IntegrateError::Tolerance)
        );
        assert_eq!(
            integrate(|x: f64| x, 0.0, f64::INFINITY, 1e-3),
            Err(IntegrateError::Bounds)
        );
    }
}
