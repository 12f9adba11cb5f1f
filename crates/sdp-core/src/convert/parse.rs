//! Line-oriented parse of two-port S-parameter text into dB samples.

use super::SParameterSample;

/// Converts a complex pair to magnitude in dB, with `floor` substituted for
/// zero magnitude so the logarithm never sees a non-positive input.
pub(super) fn magnitude_db(re: f64, im: f64, floor: f64) -> f64 {
    let mag = re.hypot(im);
    if mag > 0.0 {
        20.0 * mag.log10()
    } else {
        floor
    }
}

/// Parses `.s2p`-style text into samples, in input order.
///
/// Empty lines and lines starting with `#` or `!` are skipped. A data line
/// needs at least five whitespace-separated numeric fields (frequency, S11
/// real/imag, S21 real/imag); anything short or non-numeric is skipped
/// silently, never counted and never an error.
pub fn parse_s2p(text: &str, floor: f64) -> Vec<SParameterSample> {
    let mut samples = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
            continue;
        }

        let fields: Vec<f64> = line
            .split_whitespace()
            .take(5)
            .filter_map(|tok| tok.parse::<f64>().ok())
            .collect();
        if fields.len() < 5 {
            continue;
        }

        samples.push(SParameterSample {
            frequency_hz: fields[0],
            s11_db: magnitude_db(fields[1], fields[2], floor),
            s21_db: magnitude_db(fields[3], fields[4], floor),
        });
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_DB_FLOOR;

    fn parse(text: &str) -> Vec<SParameterSample> {
        parse_s2p(text, DEFAULT_DB_FLOOR)
    }

    #[test]
    fn parses_a_valid_line() {
        let samples = parse("1000000 1 0 0.5 0.5\n");
        assert_eq!(samples.len(), 1);
        let s = &samples[0];
        assert!((s.frequency_hz - 1_000_000.0).abs() < 1e-9);
        assert!((s.s11_db - 0.0).abs() < 1e-9);
        // 20*log10(hypot(0.5, 0.5)) = 20*log10(0.70710678...) ≈ -3.0103
        assert!((s.s21_db - (-3.0103)).abs() < 1e-3);
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let text = "! Touchstone comment\n# HZ S RI R 50\n\n   \n1e6 1 0 1 0\n";
        assert_eq!(parse(text).len(), 1);
    }

    #[test]
    fn short_line_contributes_nothing() {
        assert!(parse("1e6 1 0 0.5\n").is_empty());
        assert!(parse("1e6\n").is_empty());
    }

    #[test]
    fn non_numeric_line_contributes_nothing() {
        assert!(parse("1e6 one 0 0.5 0.5\n").is_empty());
        assert!(parse("freq re im re im\n").is_empty());
    }

    #[test]
    fn malformed_lines_do_not_abort_the_rest() {
        let text = "1e6 1 0 1 0\nbogus line\n2e6 0.5 0 0.5 0\n";
        let samples = parse(text);
        assert_eq!(samples.len(), 2);
        assert!((samples[1].frequency_hz - 2e6).abs() < 1e-9);
    }

    #[test]
    fn extra_trailing_fields_are_ignored() {
        // Full two-port lines carry S12/S22 too; only the first five matter.
        let samples = parse("1e6 1 0 0.5 0.5 0.1 0.1 0.9 0.0\n");
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn zero_magnitude_uses_the_floor() {
        let samples = parse("1e6 0 0 1 0\n");
        assert_eq!(samples.len(), 1);
        assert!((samples[0].s11_db - DEFAULT_DB_FLOOR).abs() < 1e-12);
        assert!((samples[0].s21_db - 0.0).abs() < 1e-12);
    }

    #[test]
    fn input_order_is_preserved_not_sorted() {
        let text = "2e6 1 0 1 0\n1e6 1 0 1 0\n";
        let samples = parse(text);
        assert!((samples[0].frequency_hz - 2e6).abs() < 1e-9);
        assert!((samples[1].frequency_hz - 1e6).abs() < 1e-9);
    }
}
