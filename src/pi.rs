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

/// The first 95 partial quotients of pi.
///
/// Enough for tests and shallow scans; each quotient resolves roughly
/// two more decimal digits, so deep scans at full precision should feed
/// a longer precomputed stream through the reader instead.
pub const PI_CF: &[f64] = &[
    3., 7., 15., 1., 292., 1., 1., 1., 2., 1., //
    3., 1., 14., 2., 1., 1., 2., 2., 2., 2., //
    1., 84., 2., 1., 1., 15., 3., 13., 1., 4., //
    2., 6., 6., 99., 1., 2., 4., 1., 1., 6., //
    8., 1., 7., 1., 2., 3., 7., 1., 2., 1., //
    1., 12., 1., 1., 1., 3., 1., 1., 8., 1., //
    1., 2., 1., 6., 1., 1., 5., 2., 2., 3., //
    1., 2., 4., 4., 16., 1., 161., 45., 1., 22., //
    1., 2., 2., 1., 4., 1., 2., 24., 1., 2., //
    1., 3., 1., 2., 1., //
];
