#![no_main]

use libfuzzer_sys::fuzz_target;
use nearpi::{ContinuedFraction, SearchConfig, scan_binade};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let coeffs: Vec<f64> = data.iter().take(48).map(|&b| (b & 0x3f) as f64).collect();

    if let Ok(cf) = ContinuedFraction::from_coefficients(&coeffs) {
        let doubled = cf.doubled(4096).unwrap();
        let q = cf.value();
        assert!(
            (doubled.value() - 2.0 * q).abs() <= 1e-9 * (1.0 + q.abs()),
            "doubling drifted for {coeffs:?}"
        );

        let config = SearchConfig::new(10, 20, 1e-3, 4096).unwrap();
        if let Ok(hits) = scan_binade(&cf, &config, 1) {
            for hit in hits {
                assert!(512 <= hit.mantissa && hit.mantissa <= 1023);
            }
        }
    }
});
