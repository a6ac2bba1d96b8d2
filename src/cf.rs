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
use crate::err::ScanError;

/// Terminates the coefficient sequence; any negative value reads as
/// "no more input", never as a numeric coefficient.
pub(crate) const SENTINEL: f64 = -99_999.;

/// Tail seed standing in for the infinite remainder of a truncated
/// continued fraction.
pub(crate) const TAIL_SEED: f64 = 1.0e30;

/// A simple continued fraction `i0 + 1/(i1 + 1/(i2 + ...))` with
/// integer-valued coefficients and a single trailing sentinel.
///
/// Coefficients are doubles holding non-negative integers. The leading
/// coefficient doubles with every binade and eventually outgrows exact
/// integer range; rounding it perturbs the value by a whole integer,
/// which the search never observes. Zeros may appear in the interior
/// (the doubling operator both consumes and produces them) but never in
/// the last position.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuedFraction {
    coeffs: Vec<f64>,
}

impl ContinuedFraction {
    /// Builds a fraction from its coefficients, appending the sentinel.
    pub fn from_coefficients(coefficients: &[f64]) -> Result<Self, ScanError> {
        if coefficients.is_empty() {
            return Err(ScanError::MalformedFraction);
        }
        if coefficients
            .iter()
            .any(|&c| !c.is_finite() || c < 0. || c.fract() != 0.)
        {
            return Err(ScanError::MalformedFraction);
        }
        if coefficients.len() > 1 && *coefficients.last().unwrap() == 0. {
            return Err(ScanError::MalformedFraction);
        }
        let mut coeffs = Vec::with_capacity(coefficients.len() + 1);
        coeffs.extend_from_slice(coefficients);
        coeffs.push(SENTINEL);
        Ok(ContinuedFraction { coeffs })
    }

    /// Count of valid coefficients, not counting the sentinel.
    #[inline]
    pub fn len(&self) -> usize {
        self.coeffs.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The valid coefficients, sentinel excluded.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs[..self.coeffs.len() - 1]
    }

    /// Evaluates the fraction bottom-up in double precision.
    pub fn value(&self) -> f64 {
        let mut tail = TAIL_SEED;
        for &c in self.coefficients().iter().rev() {
            tail = c + 1. / tail;
        }
        tail
    }

    /// The fraction for `1/q`, obtained by prepending a zero coefficient.
    pub(crate) fn reciprocal(&self) -> Self {
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(0.);
        coeffs.extend_from_slice(&self.coeffs);
        ContinuedFraction { coeffs }
    }

    /// Computes the fraction for `2q` from the fraction for `q` by
    /// Hurwitz's method, without any multi-precision arithmetic.
    ///
    /// Source coefficients are consumed in pairs around a pending output
    /// coefficient `j0`. Halving the current coefficient `l` leaves an even
    /// half `l0` (flushed together with `j0` when non-zero) and a remainder
    /// steering the even/odd cases below. The output length follows no
    /// fixed relation to the input length; exceeding `coeff_limit` is a
    /// configuration error.
    pub fn doubled(&self, coeff_limit: usize) -> Result<Self, ScanError> {
        let i = &self.coeffs;
        let mut out: Vec<f64> = Vec::with_capacity(i.len() + 2);

        let mut n = 1usize;
        let mut j0 = i[0] + i[0];
        let mut l = i[n];
        loop {
            if l < 0. {
                out.push(j0);
                break;
            }
            let l0 = (l / 2.).floor();
            l -= l0 + l0;
            let k = i[n + 1];
            if l0 > 0. {
                out.push(j0);
                out.push(l0);
                j0 = 0.;
            }
            if l == 0. {
                // Even case: fold the doubled next coefficient into the
                // pending one; the sentinel closes out with the pending
                // zero dropped.
                if k < 0. {
                    break;
                }
                j0 += k + k;
                n += 2;
                l = i[n];
                continue;
            }
            // Odd case.
            if k < 0. {
                out.push(j0 + 2.);
                break;
            }
            if k == 0. {
                // Zero coefficient: skip ahead, accumulating into l.
                n += 2;
                l += i[n];
                continue;
            }
            out.push(j0 + 1.);
            j0 = 1.;
            l = k - 1.;
            n += 1;
        }

        if out.len() > coeff_limit {
            return Err(ScanError::CoefficientLimit(coeff_limit));
        }
        out.push(SENTINEL);
        Ok(ContinuedFraction { coeffs: out })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn double_of_unit() {
        let one = ContinuedFraction::from_coefficients(&[1.]).unwrap();
        let two = one.doubled(64).unwrap();
        assert_eq!(two.coefficients(), &[2.]);
        assert!((two.value() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn double_of_reciprocal() {
        // 0 + 1/1 = 1 doubles to 2.
        let cf = ContinuedFraction::from_coefficients(&[0., 1.]).unwrap();
        let doubled = cf.doubled(64).unwrap();
        assert_eq!(doubled.coefficients(), &[2.]);
    }

    #[test]
    fn double_folds_interior_zero() {
        // 2 + 1/(0 + 1/3) = 5 doubles to 10.
        let cf = ContinuedFraction::from_coefficients(&[2., 0., 3.]).unwrap();
        let doubled = cf.doubled(64).unwrap();
        assert_eq!(doubled.coefficients(), &[10.]);
    }

    #[test]
    fn double_odd_tail() {
        // 1 + 1/(3 + 1/(0 + 1/2)) = 1.2 doubles to 2.4.
        let cf = ContinuedFraction::from_coefficients(&[1., 3., 0., 2.]).unwrap();
        let doubled = cf.doubled(64).unwrap();
        assert!((doubled.value() - 2.4).abs() < 1e-12);
    }

    #[test]
    fn double_even_close_out() {
        // 3 + 1/4 doubles to 6.5 = [6; 2].
        let cf = ContinuedFraction::from_coefficients(&[3., 4.]).unwrap();
        let doubled = cf.doubled(64).unwrap();
        assert_eq!(doubled.coefficients(), &[6., 2.]);
        // 3 + 1/5 doubles to 6.4 = [6; 2, 2].
        let cf = ContinuedFraction::from_coefficients(&[3., 5.]).unwrap();
        let doubled = cf.doubled(64).unwrap();
        assert_eq!(doubled.coefficients(), &[6., 2., 2.]);
    }

    #[test]
    fn double_random_fractions() {
        let mut rng = rand::rng();
        for _ in 0..250 {
            let len = rng.random_range(1..12usize);
            let mut coeffs: Vec<f64> = (0..len)
                .map(|_| rng.random_range(1..=20i64) as f64)
                .collect();
            coeffs[0] = rng.random_range(0..=20i64) as f64;
            let cf = ContinuedFraction::from_coefficients(&coeffs).unwrap();
            let doubled = cf.doubled(256).unwrap();
            let q = cf.value();
            assert!(
                (doubled.value() - 2.0 * q).abs() < 1e-9 * (1.0 + q.abs()),
                "doubling {coeffs:?} drifted: {} vs {}",
                doubled.value(),
                2.0 * q
            );
        }
    }

    #[test]
    fn reciprocal_prepends_zero() {
        let cf = ContinuedFraction::from_coefficients(&[3., 7.]).unwrap();
        let inv = cf.reciprocal();
        assert_eq!(inv.coefficients(), &[0., 3., 7.]);
        assert!((inv.value() - 1.0 / cf.value()).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_coefficients() {
        assert_eq!(
            ContinuedFraction::from_coefficients(&[]),
            Err(ScanError::MalformedFraction)
        );
        assert_eq!(
            ContinuedFraction::from_coefficients(&[3., -7.]),
            Err(ScanError::MalformedFraction)
        );
        assert_eq!(
            ContinuedFraction::from_coefficients(&[3., 0.]),
            Err(ScanError::MalformedFraction)
        );
        assert_eq!(
            ContinuedFraction::from_coefficients(&[3., 7.5]),
            Err(ScanError::MalformedFraction)
        );
    }

    #[test]
    fn coefficient_limit_is_fatal() {
        let coeffs = [7.0f64; 32];
        let cf = ContinuedFraction::from_coefficients(&coeffs).unwrap();
        assert_eq!(cf.doubled(4), Err(ScanError::CoefficientLimit(4)));
    }
}
