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
use crate::search::{Hit, scan_binade};
use crate::seed::seed_from_pi;

/// Walks every binade from 1 to `max_exp - 1`, handing each hit to the
/// sink as it is found.
///
/// Binades are strictly sequential: each doubling consumes the previous
/// binade's fraction, so there is nothing to parallelize across the loop.
/// The doubling returns a fresh buffer, so source and destination are
/// never aliased.
pub fn search<F>(
    pi: &ContinuedFraction,
    config: &SearchConfig,
    mut sink: F,
) -> Result<(), ScanError>
where
    F: FnMut(&Hit),
{
    let mut cf = seed_from_pi(pi, config)?;
    let mut binade = 1i32;
    while binade < config.max_exp() {
        for hit in scan_binade(&cf, config, binade)? {
            sink(&hit);
        }
        cf = cf.doubled(config.coeff_limit())?;
        binade += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pi::PI_CF;
    use crate::reduce::rem_pio2;
    use std::f64::consts::FRAC_PI_2;

    fn collect_hits(config: &SearchConfig) -> Vec<Hit> {
        let pi = ContinuedFraction::from_coefficients(PI_CF).unwrap();
        let mut hits = Vec::new();
        search(&pi, config, |h| hits.push(*h)).unwrap();
        hits
    }

    #[test]
    fn ten_bit_scan_obeys_bounds() {
        let config = SearchConfig::new(10, 20, 1e-3, 4096).unwrap();
        let hits = collect_hits(&config);
        assert!(!hits.is_empty());
        for hit in &hits {
            // Every mantissa is a legal 10-bit magnitude.
            assert!(512 <= hit.mantissa && hit.mantissa <= 1023, "{hit:?}");
            // The inclusive windows overshoot the threshold by up to
            // 1/|p[K0]|, so near-misses can be emitted alongside the
            // sub-threshold hits.
            assert!(hit.reduced.abs() < 5e-3, "{hit:?}");
            assert_eq!(hit.value, hit.mantissa as f64 * (hit.exponent as f64).exp2());
        }
        // The interesting hits land inside the threshold proper.
        assert!(hits.iter().any(|h| h.reduced.abs() <= 1e-3));
        // Natural emission order never steps back a binade.
        for pair in hits.windows(2) {
            assert!(pair[0].exponent <= pair[1].exponent);
        }
    }

    #[test]
    fn ten_bit_scan_agrees_with_direct_reduction() {
        let config = SearchConfig::new(10, 20, 1e-3, 4096).unwrap();
        for hit in collect_hits(&config) {
            let (_, r) = rem_pio2(hit.value);
            assert!(
                (hit.reduced - r / FRAC_PI_2).abs() < 1e-10,
                "{hit:?} disagrees with direct reduction {r}"
            );
        }
    }

    #[test]
    fn finds_milu_fraction() {
        // 177.5 = 710 * 2^-2 sits 1.507e-5 above 113 pi/2, the scaled
        // shadow of 355 over 113.
        let config = SearchConfig::new(10, 20, 1e-3, 4096).unwrap();
        let hits = collect_hits(&config);
        let milu = hits
            .iter()
            .find(|h| h.mantissa == 710 && h.exponent == -2)
            .expect("177.5 missing");
        assert_eq!(milu.value, 177.5);
        let expect = (355.0 - 113.0 * std::f64::consts::PI) / std::f64::consts::PI;
        assert!((milu.reduced - expect).abs() < 1e-12);
    }
}
