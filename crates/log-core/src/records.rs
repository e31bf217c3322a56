//! Log record types.
//!
//! Records are immutable once built: the generator fills every field, the
//! populator serializes the record and drops it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Field names of the structured access record, in serialization order.
///
/// Consumers ingesting `access.json.log` depend on this exact set.
pub const ACCESS_FIELDS: [&str; 30] = [
    "time_local",
    "time_iso8601",
    "remote_addr",
    "remote_user",
    "request",
    "request_method",
    "request_uri",
    "request_length",
    "status",
    "body_bytes_sent",
    "http_referer",
    "http_user_agent",
    "request_time",
    "server_name",
    "connection_requests",
    "pipe",
    "gzip_ratio",
    "ssl_protocol",
    "ssl_cipher",
    "sent_http_content_type",
    "sent_http_content_length",
    "upstream_connect_time",
    "upstream_header_time",
    "upstream_response_time",
    "broker_id",
    "developer_id",
    "api_key",
    "request_id",
    "geo_country",
    "geo_city",
];

/// Field names of the structured error record, in serialization order.
pub const ERROR_FIELDS: [&str; 8] = [
    "time",
    "timestamp",
    "level",
    "pid",
    "tid",
    "cid",
    "message",
    "remote_addr",
];

// ============================================================================
// Access Records
// ============================================================================

/// Enhanced access log entry.
///
/// Every field is always present. Fields that do not apply to a request hold
/// an empty string, or `-` where nginx itself would log a dash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRecord {
    pub time_local: String,
    pub time_iso8601: String,
    pub remote_addr: String,
    pub remote_user: String,
    pub request: String,
    pub request_method: String,
    pub request_uri: String,
    pub request_length: u32,
    pub status: u16,
    pub body_bytes_sent: u32,
    pub http_referer: String,
    pub http_user_agent: String,
    pub request_time: f64,
    pub server_name: String,
    pub connection_requests: u32,
    pub pipe: String,
    pub gzip_ratio: String,
    pub ssl_protocol: String,
    pub ssl_cipher: String,
    pub sent_http_content_type: String,
    pub sent_http_content_length: String,
    pub upstream_connect_time: String,
    pub upstream_header_time: String,
    pub upstream_response_time: String,
    pub broker_id: String,
    pub developer_id: String,
    pub api_key: String,
    pub request_id: String,
    pub geo_country: String,
    pub geo_city: String,
}

impl AccessRecord {
    /// Whether the request targeted the API surface.
    pub fn is_api(&self) -> bool {
        self.request_uri.starts_with("/api")
    }

    /// Serialize to a single JSON line (without the trailing newline).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Access log entry in nginx combined log format, extended with request
/// length and request time.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyAccessLine {
    pub remote_addr: String,
    pub remote_user: String,
    pub time_local: String,
    pub request: String,
    pub status: u16,
    pub body_bytes_sent: u32,
    pub http_referer: String,
    pub http_user_agent: String,
    pub request_length: u32,
    pub request_time: f64,
}

impl fmt::Display for LegacyAccessLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] \"{}\" {} {} \"{}\" \"{}\" {} ",
            self.remote_addr,
            self.remote_user,
            self.time_local,
            self.request,
            self.status,
            self.body_bytes_sent,
            self.http_referer,
            self.http_user_agent,
            self.request_length,
        )?;
        // Whole seconds keep one decimal so the column always parses as a float
        if self.request_time.fract() == 0.0 {
            write!(f, "{:.1}", self.request_time)
        } else {
            write!(f, "{}", self.request_time)
        }
    }
}

// ============================================================================
// Error Records
// ============================================================================

/// Severity of an error log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    Error,
    Warn,
    Notice,
    Info,
    Crit,
    Alert,
}

impl ErrorLevel {
    /// All levels, each equally likely when sampled.
    pub const ALL: [ErrorLevel; 6] = [
        ErrorLevel::Error,
        ErrorLevel::Warn,
        ErrorLevel::Notice,
        ErrorLevel::Info,
        ErrorLevel::Crit,
        ErrorLevel::Alert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorLevel::Error => "error",
            ErrorLevel::Warn => "warn",
            ErrorLevel::Notice => "notice",
            ErrorLevel::Info => "info",
            ErrorLevel::Crit => "crit",
            ErrorLevel::Alert => "alert",
        }
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error log entry.
///
/// The same record renders as a flat nginx error line ([`ErrorRecord::to_line`])
/// and as a JSON object ([`ErrorRecord::to_json`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    /// ISO-8601 timestamp
    pub time: String,
    /// nginx error log timestamp (`%Y/%m/%d %H:%M:%S`)
    pub timestamp: String,
    pub level: ErrorLevel,
    pub pid: u32,
    pub tid: u32,
    /// Connection id; written as `0` in JSON when absent
    #[serde(serialize_with = "cid_or_zero", deserialize_with = "zero_as_none")]
    pub cid: Option<u32>,
    pub message: String,
    pub remote_addr: String,
}

impl ErrorRecord {
    /// Render as a flat nginx error log line (without the trailing newline).
    pub fn to_line(&self) -> String {
        match self.cid {
            Some(cid) => format!(
                "{} [{}] {}#{}: *{} {}",
                self.timestamp, self.level, self.pid, self.tid, cid, self.message
            ),
            None => format!(
                "{} [{}] {}#{}: {}",
                self.timestamp, self.level, self.pid, self.tid, self.message
            ),
        }
    }

    /// Serialize to a single JSON line (without the trailing newline).
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

fn cid_or_zero<S: Serializer>(cid: &Option<u32>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u32(cid.unwrap_or(0))
}

fn zero_as_none<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let cid = u32::deserialize(deserializer)?;
    Ok((cid != 0).then_some(cid))
}
