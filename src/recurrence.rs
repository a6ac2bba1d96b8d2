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
use crate::cf::{ContinuedFraction, TAIL_SEED};
use crate::err::ScanError;

/// The three recurrence sequences of a continued fraction, evaluated to
/// the working depth for one binade.
///
/// `q[k]` are the successive tail evaluations (bottom-up from the tail
/// seed), `p[k]` the signed products `q[k]*q[k-1]*...*q[1]*(-1)^k` and
/// `j[k]` the convergent-numerator analogues. `p` and `j` both diverge,
/// `|p[k]| > 2^(k/2)`, which is what bounds the candidate window in the
/// search. All three are plain doubles; at the depths involved their
/// relative error is far below the threshold being resolved.
#[derive(Debug, Clone)]
pub struct Recurrences {
    pub(crate) q: Vec<f64>,
    pub(crate) p: Vec<f64>,
    pub(crate) j: Vec<f64>,
    /// Working depth: the first k with `1/(2*|j[k]|)` below the threshold.
    pub(crate) depth: usize,
}

impl Recurrences {
    /// Evaluates q bottom-up and p, j top-down, stopping as soon as j is
    /// large enough that granularity finer than `threshold` cannot be
    /// resolved.
    ///
    /// Errors with [`ScanError::FractionExhausted`] if the fraction runs
    /// out of coefficients first; supplying more partial quotients of pi
    /// is the only remedy.
    pub fn evaluate(cf: &ContinuedFraction, threshold: f64) -> Result<Self, ScanError> {
        let coeffs = cf.coefficients();
        let n = coeffs.len();

        let mut q = vec![0f64; n + 1];
        q[n] = TAIL_SEED;
        for k in (0..n).rev() {
            q[k] = coeffs[k] + 1. / q[k + 1];
        }

        let mut p: Vec<f64> = Vec::with_capacity(64);
        let mut j: Vec<f64> = Vec::with_capacity(64);
        p.push(1.);
        j.push(0.);
        j.push(1.);
        let mut k = 0usize;
        loop {
            if k + 1 > n {
                return Err(ScanError::FractionExhausted(n));
            }
            p.push(-q[k + 1] * p[k]);
            if k > 0 {
                j.push(j[k - 1] - coeffs[k] * j[k]);
            }
            k += 1;
            if 1. / (2. * j[k].abs()) < threshold {
                break;
            }
        }

        Ok(Recurrences { q, p, j, depth: k })
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }
}
