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
use crate::common::pow2i;
use crate::err::ScanError;

/// Immutable precision parameters for a whole scan.
///
/// All four values are fixed up front; every derived quantity is computed
/// from them on demand so no mutable state outlives a call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    mantissa_bits: u32,
    max_exp: i32,
    threshold: f64,
    coeff_limit: usize,
}

impl SearchConfig {
    /// Validates and builds a configuration.
    ///
    /// `mantissa_bits` is the significand width D, `max_exp` the highest
    /// binade to examine, `threshold` the largest reduced argument of
    /// interest (as a fraction of pi/2), `coeff_limit` the cap on continued
    /// fraction growth.
    pub fn new(
        mantissa_bits: u32,
        max_exp: i32,
        threshold: f64,
        coeff_limit: usize,
    ) -> Result<Self, ScanError> {
        // j[k]*mk products stay exact in f64 only up to D = 53; the window
        // up to 60 mirrors historic machines with wider significands and
        // degrades gracefully.
        if !(4..=60).contains(&mantissa_bits) {
            return Err(ScanError::UnsupportedPrecision(mantissa_bits));
        }
        if !(threshold.is_finite() && threshold > 0. && threshold <= 0.5) {
            return Err(ScanError::InvalidThreshold);
        }
        Ok(SearchConfig {
            mantissa_bits,
            max_exp,
            threshold,
            coeff_limit,
        })
    }

    /// IEEE double precision: D = 53, binades up to 1024.
    ///
    /// The threshold sits a few binary orders above machine epsilon so
    /// that the j[k] sequence stops while its products with candidate
    /// pairs still fit exact integer range, mirroring the margin the
    /// historical D = 56 runs used.
    pub const fn ieee_double() -> Self {
        SearchConfig {
            mantissa_bits: 53,
            max_exp: 1024,
            threshold: 8.0 * f64::EPSILON,
            coeff_limit: 20_000,
        }
    }

    #[inline]
    pub const fn mantissa_bits(&self) -> u32 {
        self.mantissa_bits
    }

    #[inline]
    pub const fn max_exp(&self) -> i32 {
        self.max_exp
    }

    #[inline]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub const fn coeff_limit(&self) -> usize {
        self.coeff_limit
    }

    /// Smallest legal mantissa, the D-bit pattern 10...0 = 2^(D-1).
    #[inline]
    pub const fn mantissa_low(&self) -> f64 {
        pow2i(self.mantissa_bits as i32 - 1)
    }

    /// Largest legal mantissa, the D-bit pattern 11...1 = 2^D - 1.
    #[inline]
    pub const fn mantissa_high(&self) -> f64 {
        2. * self.mantissa_low() - 1.
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig::ieee_double()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mantissa_range() {
        let config = SearchConfig::new(10, 20, 1e-3, 4096).unwrap();
        assert_eq!(config.mantissa_low(), 512.0);
        assert_eq!(config.mantissa_high(), 1023.0);
        let ieee = SearchConfig::ieee_double();
        assert_eq!(ieee.mantissa_low(), 4503599627370496.0);
        assert_eq!(ieee.mantissa_high(), 9007199254740991.0);
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(
            SearchConfig::new(3, 20, 1e-3, 4096),
            Err(ScanError::UnsupportedPrecision(3))
        );
        assert_eq!(
            SearchConfig::new(10, 20, 0.75, 4096),
            Err(ScanError::InvalidThreshold)
        );
        assert_eq!(
            SearchConfig::new(10, 20, f64::NAN, 4096),
            Err(ScanError::InvalidThreshold)
        );
    }
}
