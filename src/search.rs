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
use crate::common::{pow2i, sgn};
use crate::config::SearchConfig;
use crate::err::ScanError;
use crate::recurrence::Recurrences;

/// One machine number found near an integer multiple of pi/2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// The D-bit mantissa m0.
    pub mantissa: u64,
    /// The value itself, `z = m0 * 2^exponent`.
    pub value: f64,
    /// Residual after removing the nearest multiple of pi/2, as a
    /// fraction of pi/2 in [-1/2, 1/2].
    pub reduced: f64,
    /// Binade scale, `L + 1 - D`.
    pub exponent: i32,
}

/// Finds every legal mantissa in binade `binade` whose value lies within
/// the threshold of an integer multiple of pi/2.
///
/// `cf` must be the fraction for this binade's `q`; an empty result is a
/// normal outcome for binades containing no close approach.
pub fn scan_binade(
    cf: &ContinuedFraction,
    config: &SearchConfig,
    binade: i32,
) -> Result<Vec<Hit>, ScanError> {
    let mut rec = Recurrences::evaluate(cf, config.threshold())?;
    let scale_exp = binade + 1 - config.mantissa_bits() as i32;
    let scale = pow2i(scale_exp);
    let raw = enumerate(
        cf.coefficients(),
        &mut rec,
        config.mantissa_low(),
        config.mantissa_high(),
        config.threshold(),
    );
    Ok(raw
        .into_iter()
        .map(|(m0, x)| Hit {
            mantissa: m0 as u64,
            value: m0 * scale,
            reduced: x,
            exponent: scale_exp,
        })
        .collect())
}

/// Candidate enumeration at the working depth k.
///
/// mk runs over the few integers with `e/|p[k]| <= |mk| <= f/|p[k]|`
/// (divergence of p is what keeps this set small), sign-matched to p[k];
/// mk0 over the integers within `|p[k]|*threshold` of `mk*q[k]`. Both
/// windows take inclusive floor/ceil bounds. Each surviving pair yields
/// the mantissa `(-1)^k (j[k-1]*mk - j[k]*mk0)`, kept when it is a legal
/// D-bit magnitude.
fn enumerate(
    coeffs: &[f64],
    rec: &mut Recurrences,
    e: f64,
    f: f64,
    threshold: f64,
) -> Vec<(f64, f64)> {
    let k = rec.depth;
    let pk = rec.p[k];
    let qk = rec.q[k];
    let parity = if k & 1 == 1 { -1. } else { 1. };
    let window = pk.abs() * threshold;

    let mut out = Vec::new();
    let mut mk_abs = (e / pk.abs()).floor();
    let mk_top = (f / pk.abs()).ceil();
    while mk_abs <= mk_top {
        let mk = mk_abs * sgn(pk);
        let center = mk * qk;
        let mut mk0 = (center - window).floor();
        let mk0_top = (center + window).ceil();
        while mk0 <= mk0_top {
            let m0 = parity * (rec.j[k - 1] * mk - rec.j[k] * mk0);
            if e <= m0.abs() && m0.abs() <= f {
                let (x, _, _) = refine(coeffs, rec, mk, mk0);
                out.push((m0.abs(), x * sgn(m0)));
            }
            mk0 += 1.;
        }
        mk_abs += 1.;
    }
    out
}

/// Cancellation elimination.
///
/// `(mk*q[k] - mk0)/p[k]` is depth-invariant but the subtraction cancels
/// badly near the working depth. Walking the pair forward drives |mk|
/// toward zero, where the formula is best conditioned; the walk halts the
/// moment a step stops shrinking (`|tmp| > |mk0|`), when mk reaches zero,
/// or when the tail evaluations run out. Returns the residual together
/// with the depth and mk it settled on.
fn refine(coeffs: &[f64], rec: &mut Recurrences, mk: f64, mk0: f64) -> (f64, usize, f64) {
    let mut k = rec.depth;
    let mut mk = mk;
    let mut mk0 = mk0;
    while mk.abs() > 0. {
        if k + 1 >= rec.q.len() {
            break;
        }
        let pk1 = -rec.q[k + 1] * rec.p[k];
        if k + 1 < rec.p.len() {
            rec.p[k + 1] = pk1;
        } else {
            rec.p.push(pk1);
        }
        let tmp = mk0 - coeffs[k] * mk;
        if tmp.abs() > mk0.abs() {
            break;
        }
        mk0 = mk;
        mk = tmp;
        k += 1;
    }
    ((mk * rec.q[k] - mk0) / rec.p[k], k, mk)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The decimal-radix walkthrough from Kahan's handout: B = 10, d = 4,
    /// q0 = 200/pi, legal mantissas 1000..9999. The table below is the
    /// handout's k = 0..4 recurrence state.
    fn handout_recurrences() -> Recurrences {
        Recurrences {
            q: vec![
                63.66197723,
                -2.958380585,
                24.02724786,
                36.70012985,
                -3.334776736,
            ],
            p: vec![1.0, 2.958380585, -71.08174358, -2608.709219, 8699.462815],
            j: vec![0.0, 1.0, 3.0, -71.0, 2630.0],
            depth: 4,
        }
    }

    #[test]
    fn handout_candidates() {
        let coeffs: [f64; 5] = [64., -3., 24., 37., -3.];
        let mut rec = handout_recurrences();
        let found = enumerate(&coeffs, &mut rec, 1000.0, 9999.0, 1e-4);
        let mantissas: Vec<f64> = found.iter().map(|h| h.0).collect();
        assert_eq!(mantissas, vec![2630.0, 2630.0, 7819.0, 5189.0]);
        // 10449 falls just past the mantissa range and must be discarded.
        assert!(!mantissas.contains(&10449.0));
        // 7819 * 200/pi = 497772.99996..., residual about -3.85e-5.
        let x_7819 = found[2].1;
        assert!((x_7819 - (-3.848e-5)).abs() < 1e-8);
        // 2630 * 200/pi = 167431.0001..., residual about +1.15e-4.
        let x_2630 = found[0].1;
        assert!((x_2630 - 1.1495e-4).abs() < 1e-8);
    }

    #[test]
    fn handout_mantissa_formula() {
        // mk = 1, mk0 = -3 reproduces the handout's m0 = j3*1 - j4*(-3).
        let rec = handout_recurrences();
        let m0 = (rec.j[3] * 1.0 - rec.j[4] * -3.0).abs();
        assert_eq!(m0, 7819.0);
    }

    #[test]
    fn refinement_reaches_zero_tail() {
        // For the all-ones fraction the pair walk descends the Fibonacci
        // numbers: (89, 55) -> (55, 34) -> ... -> (1, 0), ten steps from
        // depth 10 to depth 20, where the residual is exactly -1/p[20]
        // and p[20] = F(40)/F(20) = 15127.
        let cf = ContinuedFraction::from_coefficients(&[1.0; 40]).unwrap();
        let mut rec = Recurrences::evaluate(&cf, 0.01).unwrap();
        let naive = (55.0 * rec.q[10] - 89.0) / rec.p[10];
        let (x, depth, tail) = refine(cf.coefficients(), &mut rec, 55.0, 89.0);
        assert_eq!(tail, 0.0);
        assert_eq!(depth, 20);
        assert!((rec.p[20] - 15127.0).abs() < 1e-6);

        // Exact value of the invariant form: -F(20)/F(40).
        let exact = -6765.0 / 102334155.0;
        assert!((x - exact).abs() <= (naive - exact).abs());
        assert!((x - exact).abs() < 1e-12);
    }

    #[test]
    fn refinement_stops_when_not_improving() {
        // A pair that immediately grows again must be left untouched.
        let cf = ContinuedFraction::from_coefficients(&[1.0; 40]).unwrap();
        let mut rec = Recurrences::evaluate(&cf, 0.01).unwrap();
        // tmp = 3 - 55 = -52, |tmp| > |3|: no step taken.
        let (_, depth, tail) = refine(cf.coefficients(), &mut rec, 55.0, 3.0);
        assert_eq!(depth, 10);
        assert_eq!(tail, 55.0);
    }
}
