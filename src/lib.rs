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
//! Exhibits floating-point numbers `Z = m * 2^L` lying extremely close to
//! integer multiples of pi/2, the inputs hardest to argument-reduce in a
//! trigonometric library. A continued fraction related to pi is repeatedly
//! evaluated and doubled; each evaluation yields every close approach in
//! the current binade, found by the recurrence search of Kahan's
//! "Minimizing q*m - n" together with a cancellation-eliminating
//! refinement of the residual.
#![deny(unreachable_pub)]
mod cf;
mod common;
mod config;
mod driver;
mod err;
mod pi;
mod recurrence;
mod reduce;
mod search;
mod seed;

pub use cf::ContinuedFraction;
pub use config::SearchConfig;
pub use driver::search;
pub use err::ScanError;
pub use pi::PI_CF;
pub use recurrence::Recurrences;
pub use reduce::rem_pio2;
pub use search::{Hit, scan_binade};
pub use seed::seed_from_pi;
