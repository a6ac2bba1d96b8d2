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
use nearpi::{ContinuedFraction, PI_CF, SearchConfig, search};
use std::env;
use std::fs;

/// Reads whitespace-separated partial quotients of pi, stopping at the
/// first negative value.
fn read_quotients(path: &str) -> Vec<f64> {
    let raw = fs::read_to_string(path).expect("Failed to read the coefficient file");
    let mut quotients = Vec::new();
    for token in raw.split_whitespace() {
        let v: f64 = token.parse().expect("Failed to parse a coefficient");
        if v < 0. {
            break;
        }
        quotients.push(v);
    }
    quotients
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let (quotients, config) = match args.get(1) {
        Some(path) => (read_quotients(path), SearchConfig::ieee_double()),
        None => {
            eprintln!(
                "No coefficient file given; using the built-in {}-quotient table of pi with binades capped at 40.",
                PI_CF.len()
            );
            (
                PI_CF.to_vec(),
                SearchConfig::new(53, 40, 8.0 * f64::EPSILON, 20_000).unwrap(),
            )
        }
    };

    let pi = ContinuedFraction::from_coefficients(&quotients).unwrap();
    let d = config.mantissa_bits();

    let outcome = search(&pi, &config, |hit| {
        let zb = hit.value.to_bits();
        let xb = hit.reduced.to_bits();
        println!(
            "{:08x} {:08x}    Z={:.16E}    M={:17}    L+1-{}={:4}    {:08x} {:08x}    x={:.16E}",
            (zb >> 32) as u32,
            zb as u32,
            hit.value,
            hit.mantissa,
            d,
            hit.exponent,
            (xb >> 32) as u32,
            xb as u32,
            hit.reduced
        );
    });
    if let Err(err) = outcome {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
