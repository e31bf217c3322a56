//! Record builders.

use crate::generators::numeric::{gzip_ratio, int_range, request_time, upstream_time};
use crate::generators::request_id::generate_request_id;
use crate::generators::timestamp::{error_timestamp, iso8601, now, time_local};
use crate::generators::{pick, pick_or};
use crate::tables::*;
use chrono::{DateTime, FixedOffset};
use log_core::{AccessRecord, Coverage, ErrorLevel, ErrorRecord, LegacyAccessLine};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Status codes at or above this value get a smaller response body.
const ERROR_STATUS: u16 = 400;

/// Fabricates access and error log records.
///
/// Every field is sampled independently from the reference tables. The only
/// couplings are the ones a real server would show: error responses are
/// smaller, correlation data only exists on API calls, and TLS protocol and
/// cipher appear together.
pub struct LogGenerator {
    /// Random number generator, seeded for reproducible runs
    rng: StdRng,
    /// Probabilities for optional fields
    coverage: Coverage,
}

impl LogGenerator {
    /// Create a generator with a fixed seed.
    pub fn new(coverage: Coverage, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            coverage,
        }
    }

    /// Create a generator seeded from operating system entropy.
    pub fn from_entropy(coverage: Coverage) -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            coverage,
        }
    }

    /// Create a generator, seeded when a seed is given.
    pub fn with_seed(coverage: Coverage, seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(coverage, seed),
            None => Self::from_entropy(coverage),
        }
    }

    /// Get the sampling probabilities.
    pub fn coverage(&self) -> &Coverage {
        &self.coverage
    }

    /// Generate a request id (`req_` + 16 hex characters).
    pub fn request_id(&mut self) -> String {
        generate_request_id(&mut self.rng)
    }

    /// Decide whether the current iteration also emits an error entry.
    pub fn should_emit_error(&mut self) -> bool {
        self.rng.random_bool(self.coverage.error_rate)
    }

    /// Generate an enhanced access record stamped with the current time.
    pub fn access_record(&mut self) -> AccessRecord {
        self.access_record_at(now())
    }

    /// Generate an enhanced access record stamped with `at`.
    pub fn access_record_at(&mut self, at: DateTime<FixedOffset>) -> AccessRecord {
        let coverage = &self.coverage;
        let rng = &mut self.rng;

        let remote_addr = pick(rng, REMOTE_ADDRS).to_string();
        let remote_user = if rng.random_bool(coverage.remote_user) {
            "admin"
        } else {
            "-"
        };

        let method = *pick(rng, HTTP_METHODS);
        let uri = *pick(rng, ENDPOINTS);

        let status = *pick(rng, STATUS_CODES);
        let body_bytes_sent = if status < ERROR_STATUS {
            int_range(rng, 100, 50_000)
        } else {
            int_range(rng, 100, 5_000)
        };

        let http_referer = pick(rng, REFERERS).to_string();
        let http_user_agent = pick(rng, USER_AGENTS).to_string();
        let request_length = int_range(rng, 200, 1_500);
        let request_time = request_time(rng);

        let server_name = pick(rng, SERVER_NAMES).to_string();
        let connection_requests = int_range(rng, 1, 50);
        let pipe = pick(rng, PIPES).to_string();
        let gzip_ratio = gzip_ratio(rng, coverage.gzip);

        let (ssl_protocol, ssl_cipher) = if rng.random_bool(coverage.tls) {
            (
                pick(rng, SSL_PROTOCOLS).to_string(),
                pick(rng, SSL_CIPHERS).to_string(),
            )
        } else {
            ("-".to_string(), "-".to_string())
        };

        let sent_http_content_type = pick(rng, CONTENT_TYPES).to_string();

        let upstream_connect_time = upstream_time(rng, coverage.upstream, 0..=0, 0..=99);
        let upstream_header_time = upstream_time(rng, coverage.upstream, 0..=0, 1..=299);
        let upstream_response_time = upstream_time(rng, coverage.upstream, 0..=1, 1..=999);

        let mut broker_id = String::new();
        let mut developer_id = String::new();
        let mut api_key = String::new();
        let mut request_id = String::new();
        let mut geo_country = String::new();
        let mut geo_city = String::new();

        if uri.starts_with(API_PREFIX) {
            if rng.random_bool(coverage.correlation) {
                broker_id = pick_or(rng, coverage.broker_id, BROKER_IDS, "");
                developer_id = pick_or(rng, coverage.developer_id, DEVELOPER_IDS, "");
                api_key = pick_or(rng, coverage.api_key, API_KEYS, "");
            }
            if rng.random_bool(coverage.request_id) {
                request_id = generate_request_id(rng);
            }
            if rng.random_bool(coverage.geo) {
                let (country, city) = *pick(rng, GEO_LOCATIONS);
                geo_country = country.to_string();
                geo_city = city.to_string();
            }
        }

        AccessRecord {
            time_local: time_local(&at),
            time_iso8601: iso8601(&at),
            remote_addr,
            remote_user: remote_user.to_string(),
            request: format!("{method} {uri} {PROTOCOL}"),
            request_method: method.to_string(),
            request_uri: uri.to_string(),
            request_length,
            status,
            body_bytes_sent,
            http_referer,
            http_user_agent,
            request_time,
            server_name,
            connection_requests,
            pipe,
            gzip_ratio,
            ssl_protocol,
            ssl_cipher,
            sent_http_content_type,
            sent_http_content_length: body_bytes_sent.to_string(),
            upstream_connect_time,
            upstream_header_time,
            upstream_response_time,
            broker_id,
            developer_id,
            api_key,
            request_id,
            geo_country,
            geo_city,
        }
    }

    /// Generate a combined log format access line stamped with the current time.
    pub fn legacy_access_line(&mut self) -> LegacyAccessLine {
        self.legacy_access_line_at(now())
    }

    /// Generate a combined log format access line stamped with `at`.
    pub fn legacy_access_line_at(&mut self, at: DateTime<FixedOffset>) -> LegacyAccessLine {
        let rng = &mut self.rng;

        let remote_addr = pick(rng, REMOTE_ADDRS).to_string();
        let method = *pick(rng, HTTP_METHODS);
        let uri = *pick(rng, ENDPOINTS);
        let status = *pick(rng, STATUS_CODES);

        LegacyAccessLine {
            remote_addr,
            remote_user: "-".to_string(),
            time_local: time_local(&at),
            request: format!("{method} {uri} {PROTOCOL}"),
            status,
            body_bytes_sent: int_range(rng, 100, 50_000),
            http_referer: pick(rng, REFERERS).to_string(),
            http_user_agent: pick(rng, USER_AGENTS).to_string(),
            request_length: int_range(rng, 200, 1_500),
            request_time: request_time(rng),
        }
    }

    /// Generate an error record stamped with the current time.
    pub fn error_record(&mut self) -> ErrorRecord {
        self.error_record_at(now())
    }

    /// Generate an error record stamped with `at`.
    pub fn error_record_at(&mut self, at: DateTime<FixedOffset>) -> ErrorRecord {
        let coverage = &self.coverage;
        let rng = &mut self.rng;

        let level = *pick(rng, &ErrorLevel::ALL);
        let pid = int_range(rng, 1000, 9999);
        let tid = int_range(rng, 0, 99);
        let cid = rng
            .random_bool(coverage.connection_id)
            .then(|| int_range(rng, 100, 999));
        let message = pick(rng, ERROR_MESSAGES).to_string();

        ErrorRecord {
            time: iso8601(&at),
            timestamp: error_timestamp(&at),
            level,
            pid,
            tid,
            cid,
            message,
            remote_addr: pick(rng, REMOTE_ADDRS).to_string(),
        }
    }
}
