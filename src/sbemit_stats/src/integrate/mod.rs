//! # Integrate
//! Adaptive quadrature over finite intervals.
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

mod gauss_kronrod;

pub use self::gauss_kronrod::{DEFAULT_LIMIT, integrate, integrate_with};

/// Error type for integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntegrateError {
    /// Non-finite value encountered during evaluation of the integrand.
    #[error("Non-finite value encountered during evaluation")]
    NonFinite,

    /// Integration bounds were not finite.
    #[error("Integration bounds must be finite")]
    Bounds,

    /// Requested tolerances were negative, zero or non-finite.
    #[error("Relative tolerance must be positive and absolute tolerance non-negative")]
    Tolerance,
}

/// Result type for integration.
pub type IntegrateResult<T> = Result<T, IntegrateError>;

/// Outcome of a numerical integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integral<T> {
    /// Best estimate of the integral.
    pub value: T,

    /// Estimated absolute error of `value`.
    pub error: T,

    /// Number of integrand evaluations used.
    pub evaluations: usize,

    /// If the requested tolerance was met before the subdivision limit.
    pub converged: bool,
}
