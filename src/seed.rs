/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
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
use crate::cf::ContinuedFraction;
use crate::config::SearchConfig;
use crate::err::ScanError;

/// Turns the fraction for pi into the fraction for `(2/e)/(pi/2)` with
/// `e = 2^(D-1)`, the starting `q` of the first binade.
///
/// Doubles the fraction `D - 3` times and prepends a zero coefficient
/// (the standard reciprocal-by-prepend step). The caller must supply
/// enough partial quotients of pi to resolve magnitudes down to the
/// configured threshold; a rule of thumb is 0.97 quotients per decimal
/// digit of pi. Too short an input surfaces later as
/// [`ScanError::FractionExhausted`].
pub fn seed_from_pi(
    pi: &ContinuedFraction,
    config: &SearchConfig,
) -> Result<ContinuedFraction, ScanError> {
    let limit = config.coeff_limit();
    let mut cf = pi.doubled(limit)?;
    for _ in 1..config.mantissa_bits() - 3 {
        cf = cf.doubled(limit)?;
    }
    Ok(cf.reciprocal())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pi::PI_CF;

    #[test]
    fn seed_matches_closed_form() {
        // For D = 10, (2/e)/(pi/2) = (2/512)/(pi/2) = 1/(128 pi).
        let pi = ContinuedFraction::from_coefficients(PI_CF).unwrap();
        let config = SearchConfig::new(10, 20, 1e-3, 4096).unwrap();
        let seed = seed_from_pi(&pi, &config).unwrap();
        let expect = 1.0 / (128.0 * std::f64::consts::PI);
        assert!((seed.value() - expect).abs() < 1e-12);
        assert_eq!(seed.coefficients()[0], 0.0);
    }

    #[test]
    fn seed_halves_with_precision() {
        // D = 11 halves the D = 10 seed value: e doubles.
        let pi = ContinuedFraction::from_coefficients(PI_CF).unwrap();
        let narrow = seed_from_pi(&pi, &SearchConfig::new(10, 20, 1e-3, 4096).unwrap()).unwrap();
        let wide = seed_from_pi(&pi, &SearchConfig::new(11, 20, 1e-3, 4096).unwrap()).unwrap();
        assert!((wide.value() - narrow.value() / 2.0).abs() < 1e-14);
    }
}
