/*
 * // Copyright (c) Radzivon Bartoshyk 5/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// Mantissa width outside the supported 4..=60 window.
    UnsupportedPrecision(u32),
    /// Threshold must be a finite value in (0, 0.5].
    InvalidThreshold,
    /// A continued fraction outgrew the configured coefficient limit.
    CoefficientLimit(usize),
    /// The continued fraction ran out of coefficients before reaching
    /// the configured threshold; more partial quotients of pi are needed.
    FractionExhausted(usize),
    /// Coefficients must be non-negative with a single trailing sentinel.
    MalformedFraction,
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanError::UnsupportedPrecision(bits) => {
                f.write_fmt(format_args!("Mantissa width {bits} is not supported"))
            }
            ScanError::InvalidThreshold => f.write_str("Threshold must lie in (0, 0.5]"),
            ScanError::CoefficientLimit(limit) => f.write_fmt(format_args!(
                "Continued fraction exceeded the coefficient limit {limit}"
            )),
            ScanError::FractionExhausted(len) => f.write_fmt(format_args!(
                "Continued fraction of {len} coefficients is too short for the requested threshold"
            )),
            ScanError::MalformedFraction => {
                f.write_str("Continued fraction coefficients are malformed")
            }
        }
    }
}

impl Error for ScanError {}
