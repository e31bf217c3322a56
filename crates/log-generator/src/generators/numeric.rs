//! Numeric and timing value generators.

use rand::Rng;

/// Generate a random integer in the given range (inclusive).
pub fn int_range<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    rng.random_range(min..=max)
}

/// Generate a request duration in seconds, rounded to milliseconds.
pub fn request_time<R: Rng>(rng: &mut R) -> f64 {
    let secs: f64 = rng.random_range(0.001..=2.5);
    (secs * 1000.0).round() / 1000.0
}

/// Generate an nginx `$gzip_ratio` such as `72.4`, or `-` when the response
/// was not compressed.
pub fn gzip_ratio<R: Rng>(rng: &mut R, probability: f64) -> String {
    if rng.random_bool(probability) {
        format!("{}.{}", rng.random_range(60..=85), rng.random_range(0..=9))
    } else {
        "-".to_string()
    }
}

/// Generate an upstream timing value: `{secs}.{millis:03}`, or `-` when the
/// request was not proxied.
pub fn upstream_time<R: Rng>(
    rng: &mut R,
    probability: f64,
    secs: std::ops::RangeInclusive<u32>,
    millis: std::ops::RangeInclusive<u32>,
) -> String {
    if rng.random_bool(probability) {
        format!("{}.{:03}", rng.random_range(secs), rng.random_range(millis))
    } else {
        "-".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_int_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let v = int_range(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
    }

    #[test]
    fn test_request_time_rounded() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..1000 {
            let t = request_time(&mut rng);
            assert!((0.001..=2.5).contains(&t));
            let millis = t * 1000.0;
            assert!((millis - millis.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_gzip_ratio() {
        let mut rng = StdRng::seed_from_u64(42);

        assert_eq!(gzip_ratio(&mut rng, 0.0), "-");
        let ratio = gzip_ratio(&mut rng, 1.0);
        let parsed: f64 = ratio.parse().unwrap();
        assert!((60.0..=85.9).contains(&parsed));
    }

    #[test]
    fn test_upstream_time_format() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            let value = upstream_time(&mut rng, 1.0, 0..=0, 0..=99);
            assert_eq!(value.len(), 5);
            assert!(value.starts_with("0.0"));
        }
        assert_eq!(upstream_time(&mut rng, 0.0, 0..=1, 1..=999), "-");
    }
}
