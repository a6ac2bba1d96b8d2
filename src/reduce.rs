/*
 * // Copyright (c) Radzivon Bartoshyk 7/2025. All rights reserved.
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
use crate::common::f_fmla;

// pi/2 split into three parts with trailing zero bits, so that n times
// the leading part stays exact for n below 2^20.
const PI_OVER_2: [u64; 3] = [0x3ff921fb54400000, 0x3dd0b4611a600000, 0x3ba3198a2e037073];

/// Removes the nearest integer multiple of pi/2 from `x` by a
/// three-constant split reduction, returning the multiple and the
/// residual in radians.
///
/// Accurate while `n` times the leading split stays exact, i.e. for
/// |x| below roughly 2^20; past that the leading product rounds and the
/// residual degrades to about ulp(x). Intended as an independent check
/// on reported reduced arguments, not as a general-purpose reduction.
#[inline]
pub fn rem_pio2(x: f64) -> (f64, f64) {
    let n = (x * std::f64::consts::FRAC_2_PI).round();
    let mut r = f_fmla(n, -f64::from_bits(PI_OVER_2[0]), x);
    r = f_fmla(n, -f64::from_bits(PI_OVER_2[1]), r);
    r = f_fmla(n, -f64::from_bits(PI_OVER_2[2]), r);
    (n, r)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn splits_sum_to_pi_over_2() {
        let sum = f64::from_bits(PI_OVER_2[0])
            + (f64::from_bits(PI_OVER_2[1]) + f64::from_bits(PI_OVER_2[2]));
        assert!((sum - FRAC_PI_2).abs() <= f64::EPSILON);
    }

    #[test]
    fn reduces_small_arguments() {
        let (n, r) = rem_pio2(1.0);
        assert_eq!(n, 1.0);
        assert!((r - (1.0 - FRAC_PI_2)).abs() < 1e-15);

        let (n, r) = rem_pio2(PI);
        assert_eq!(n, 2.0);
        assert!(r.abs() < 1e-15);
    }

    #[test]
    fn reduces_milu_neighbourhood() {
        // 355 = 113 pi + 3.0144e-5.
        let (n, r) = rem_pio2(355.0);
        assert_eq!(n, 226.0);
        assert!((r - (355.0 - 113.0 * PI)).abs() < 1e-13);
    }
}
