use crate::domain::Manifest;

const BYTES_PER_MEGABYTE: f64 = 1_048_576.0;

/// Rendered in place of a rate when no positive CPU time is available.
pub const UNAVAILABLE_RATE: &str = "N/A";

pub struct ReportFormatter;

impl ReportFormatter {
    /// Megabytes per CPU second, or `None` when the rate is undefined.
    pub fn throughput(total_bytes: u64, cpu_seconds: Option<f64>) -> Option<f64> {
        let seconds = cpu_seconds.filter(|s| s.is_finite() && *s > 0.0)?;
        Some(total_bytes as f64 / BYTES_PER_MEGABYTE / seconds)
    }

    pub fn footer(total_bytes: u64, cpu_seconds: Option<f64>) -> String {
        let rate = match Self::throughput(total_bytes, cpu_seconds) {
            Some(rate) => format!("{rate:.2}"),
            None => UNAVAILABLE_RATE.to_string(),
        };
        format!("Performance: {rate} MB/s (by CPU time) ")
    }

    pub fn manifest_footer(manifest: &Manifest, cpu_seconds: Option<f64>) -> String {
        Self::footer(manifest.total_bytes, cpu_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_two_decimals() {
        assert_eq!(
            ReportFormatter::footer(60 * 1_048_576, Some(1.0)),
            "Performance: 60.00 MB/s (by CPU time) "
        );
        assert_eq!(
            ReportFormatter::footer(1_048_576, Some(3.0)),
            "Performance: 0.33 MB/s (by CPU time) "
        );
    }

    #[test]
    fn zero_bytes_is_a_zero_rate() {
        assert_eq!(
            ReportFormatter::footer(0, Some(0.5)),
            "Performance: 0.00 MB/s (by CPU time) "
        );
    }

    #[test]
    fn missing_or_zero_cpu_time_uses_sentinel() {
        let expected = "Performance: N/A MB/s (by CPU time) ";
        assert_eq!(ReportFormatter::footer(1024, Some(0.0)), expected);
        assert_eq!(ReportFormatter::footer(1024, None), expected);
        assert_eq!(ReportFormatter::footer(1024, Some(f64::NAN)), expected);
        assert_eq!(ReportFormatter::footer(1024, Some(-1.0)), expected);
    }
}
