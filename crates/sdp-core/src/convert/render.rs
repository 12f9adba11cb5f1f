//! Rendering of the derived tab-separated `.dat` tables.

use super::SParameterSample;

/// One row per sample: frequency rounded to the nearest hertz, dB value with
/// exactly two decimals. Row order follows the sample order.
pub(super) fn render_table(
    label: &str,
    samples: &[SParameterSample],
    value: impl Fn(&SParameterSample) -> f64,
) -> String {
    let mut out = String::with_capacity(32 + samples.len() * 24);
    out.push_str(&format!("# Frequency(Hz)\t{}\n", label));
    for s in samples {
        out.push_str(&format!("{:.0}\t{:.2}\n", s.frequency_hz, value(s)));
    }
    out
}
