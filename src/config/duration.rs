//! Duration parsing utilities.

use anyhow::Context;
use std::time::Duration;

/// Parse a duration string like "1h", "30m", "300s", "300" or "2.5".
/// Supports:
/// - Plain numbers (interpreted as seconds): "300", "0.5"
/// - Seconds suffix: "300s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    // Check for suffix
    if let Some(num_str) = s.strip_suffix('h') {
        let hours = parse_number(num_str).with_context(|| format!("Invalid hours value: {num_str}"))?;
        return to_duration(hours * 3600.0, s);
    }
    if let Some(num_str) = s.strip_suffix('m') {
        let minutes =
            parse_number(num_str).with_context(|| format!("Invalid minutes value: {num_str}"))?;
        return to_duration(minutes * 60.0, s);
    }
    if let Some(num_str) = s.strip_suffix('s') {
        let secs = parse_number(num_str).with_context(|| format!("Invalid seconds value: {num_str}"))?;
        return to_duration(secs, s);
    }

    // No suffix - treat as seconds
    parse_seconds(s)
}

/// Parse a plain number of seconds such as "1.0" or "0.01".
pub fn parse_seconds(s: &str) -> anyhow::Result<Duration> {
    let secs = parse_number(s.trim()).with_context(|| format!("Invalid duration value: {s}"))?;
    to_duration(secs, s)
}

fn parse_number(s: &str) -> anyhow::Result<f64> {
    Ok(s.parse::<f64>()?)
}

fn to_duration(secs: f64, original: &str) -> anyhow::Result<Duration> {
    Duration::try_from_secs_f64(secs)
        .with_context(|| format!("Duration must be finite and non-negative: {original}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_seconds() {
        assert_eq!(parse_duration("300").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration(" 5 ").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_duration("2.5").unwrap(), Duration::from_millis(2500));
    }

    #[test]
    fn test_parse_suffixes() {
        assert_eq!(parse_duration("300s").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("30m").unwrap(), Duration::from_secs(1800));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("5x").is_err());
        assert!(parse_duration("-1").is_err());
        assert!(parse_duration("NaNs").is_err());
        assert!(parse_duration("inf").is_err());
    }

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("1.0").unwrap(), Duration::from_secs(1));
        assert_eq!(parse_seconds("0.01").unwrap(), Duration::from_millis(10));
        assert_eq!(parse_seconds("0").unwrap(), Duration::ZERO);
        assert!(parse_seconds("-0.5").is_err());
        assert!(parse_seconds("1m").is_err());
    }
}
