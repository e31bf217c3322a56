//! Static reference data sampled by the record builders.
//!
//! Pools with repeated entries are weighted: a value listed three times is
//! drawn three times as often as a value listed once.

/// URIs starting with this prefix are API requests.
pub const API_PREFIX: &str = "/api";

/// Protocol of every generated request line.
pub const PROTOCOL: &str = "HTTP/1.1";

/// Prefix of generated trace ids.
pub const REQUEST_ID_PREFIX: &str = "req_";

pub const REMOTE_ADDRS: &[&str] = &[
    "192.168.1.100",
    "10.0.0.50",
    "172.16.0.25",
    "203.0.113.45",
    "198.51.100.10",
    "192.0.2.100",
    "8.8.8.8",
    "1.1.1.1",
    "45.33.32.156",
    "104.16.249.249",
    "185.199.108.153",
    "140.82.121.3",
];

pub const ENDPOINTS: &[&str] = &[
    "/",
    "/index.html",
    "/health",
    "/metrics",
    "/api/users",
    "/api/users/1",
    "/api/users/list",
    "/api/users/search",
    "/api/products",
    "/api/products/1",
    "/api/products/search",
    "/api/products/categories",
    "/api/orders",
    "/api/orders/1",
    "/api/orders/create",
    "/api/orders/status",
    "/api/v1/search",
    "/api/v1/checkout",
    "/api/v1/cart",
    "/api/v1/checkout/payment",
    "/api/v2/auth/login",
    "/api/v2/auth/logout",
    "/api/v2/auth/refresh",
    "/api/v2/brokers",
    "/api/v2/brokers/list",
    "/api/v2/brokers/status",
    "/api/v2/developers",
    "/api/v2/developers/profile",
    "/api/v2/developers/keys",
    "/admin/dashboard",
    "/admin/users",
    "/admin/settings",
    "/static/css/style.css",
    "/static/js/app.js",
    "/static/images/logo.png",
    "/static/fonts/roboto.woff2",
    "/static/img/banner.jpg",
    "/webhook/stripe",
    "/webhook/paypal",
    "/webhook/slack",
    "/docs/api",
    "/docs/getting-started",
    "/docs/reference",
];

/// Weighted: GET 3/10, POST 2/10, the rest 1/10 each.
pub const HTTP_METHODS: &[&str] = &[
    "GET", "GET", "GET", "POST", "POST", "PUT", "DELETE", "PATCH", "HEAD", "OPTIONS",
];

pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:121.0) Gecko/20100101 Firefox/121.0",
    "curl/7.68.0",
    "curl/7.81.0",
    "Python-urllib/3.9",
    "Python-urllib/3.11",
    "Go-http-client/1.1",
    "Go-http-client/2.0",
    "PostmanRuntime/7.32.3",
    "Insomnia/2023.5.0",
    "Shopify-Webhook/3.0",
    "Stripe/1.0 (https://stripe.com/docs/webhooks)",
    "Slackbot 1.0 (+https://api.slack.com/robots)",
];

pub const REFERERS: &[&str] = &[
    "-",
    "https://google.com",
    "https://github.com",
    "https://stackoverflow.com",
    "https://example.com",
    "https://localhost:3000",
    "https://app.example.com",
    "https://docs.example.com",
    "https://dashboard.example.com",
    "https://example.com/api/users",
    "https://example.com/products",
];

/// Weighted status pool (28 entries): 200 is 5/28, 2xx as a whole 8/28.
pub const STATUS_CODES: &[u16] = &[
    200, 200, 200, 200, 200, // ok
    201, 201, 204, // created / no content
    301, 302, 304, // redirects
    400, 400, 400, // bad request
    401, 401, // unauthorized
    403, 403, // forbidden
    404, 404, 404, // not found
    422, // unprocessable
    429, // too many requests
    500, 500, // server error
    502, 503, 504, // gateway
];

pub const ERROR_MESSAGES: &[&str] = &[
    "connect() failed (111: Connection refused) while connecting to upstream",
    "upstream timed out (110: Connection timed out) while reading response header from upstream",
    "client intended to send too large body",
    "SSL_do_handshake() failed",
    "no live upstreams while connecting to upstream",
    "recv() failed (104: Connection reset by peer)",
    "open() \"/var/www/html/favicon.ico\" failed (2: No such file or directory)",
    "access forbidden by rule",
    "upstream prematurely closed connection while reading response header from upstream",
    "client timed out (110: Connection timed out) while waiting for request",
    "limiting connections by zone \"conn_limit\"",
    "lua tcp socket read timed out",
    "upstream sent too big header while reading response header from upstream",
];

pub const BROKER_IDS: &[&str] = &["1", "2", "3", "4", "5"];

pub const DEVELOPER_IDS: &[&str] = &["1", "2", "3", "4", "5"];

pub const API_KEYS: &[&str] = &[
    "sk_live_abc123def456",
    "sk_live_xyz789uvw012",
    "sk_test_abc123xyz789",
    "sk_live_prod_001",
    "sk_live_prod_002",
    "sk_test_mode_key",
];

/// (country code, city)
pub const GEO_LOCATIONS: &[(&str, &str)] = &[
    ("US", "New York"),
    ("US", "Los Angeles"),
    ("US", "Chicago"),
    ("US", "Houston"),
    ("US", "San Francisco"),
    ("US", "Seattle"),
    ("US", "Boston"),
    ("US", "Denver"),
    ("GB", "London"),
    ("GB", "Manchester"),
    ("GB", "Edinburgh"),
    ("DE", "Berlin"),
    ("DE", "Frankfurt"),
    ("DE", "Munich"),
    ("FR", "Paris"),
    ("FR", "Lyon"),
    ("FR", "Marseille"),
    ("CA", "Toronto"),
    ("CA", "Vancouver"),
    ("CA", "Montreal"),
    ("JP", "Tokyo"),
    ("JP", "Osaka"),
    ("JP", "Kyoto"),
    ("AU", "Sydney"),
    ("AU", "Melbourne"),
    ("AU", "Brisbane"),
    ("BR", "Sao Paulo"),
    ("BR", "Rio de Janeiro"),
    ("IN", "Mumbai"),
    ("IN", "Delhi"),
    ("IN", "Bangalore"),
    ("NL", "Amsterdam"),
    ("NL", "Rotterdam"),
];

pub const SERVER_NAMES: &[&str] = &[
    "example.com",
    "api.example.com",
    "app.example.com",
    "www.example.com",
    "cdn.example.com",
    "admin.example.com",
];

/// Only sampled for encrypted requests; plain requests log `-`.
pub const SSL_PROTOCOLS: &[&str] = &["TLSv1.2", "TLSv1.3"];

pub const SSL_CIPHERS: &[&str] = &[
    "ECDHE-RSA-AES128-GCM-SHA256",
    "ECDHE-RSA-AES256-GCM-SHA384",
    "ECDHE-RSA-CHACHA20-POLY1305",
    "TLS_AES_256_GCM_SHA384",
    "TLS_CHACHA20_POLY1305_SHA256",
    "TLS_AES_128_GCM_SHA256",
];

pub const CONTENT_TYPES: &[&str] = &[
    "text/html",
    "application/json",
    "application/javascript",
    "text/css",
    "image/png",
    "image/jpeg",
    "image/svg+xml",
    "font/woff2",
    "application/octet-stream",
];

/// Values of nginx `$pipe`.
pub const PIPES: &[&str] = &[".", "p", "p."];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pool_weights() {
        assert_eq!(STATUS_CODES.len(), 28);
        assert_eq!(STATUS_CODES.iter().filter(|s| **s == 200).count(), 5);
        assert_eq!(STATUS_CODES.iter().filter(|s| **s == 404).count(), 3);
        assert_eq!(
            STATUS_CODES.iter().filter(|s| (200..300).contains(*s)).count(),
            8
        );
    }

    #[test]
    fn test_method_pool_weights() {
        assert_eq!(HTTP_METHODS.iter().filter(|m| **m == "GET").count(), 3);
        assert_eq!(HTTP_METHODS.iter().filter(|m| **m == "POST").count(), 2);
    }

    #[test]
    fn test_endpoints_mix_api_and_non_api() {
        let api = ENDPOINTS.iter().filter(|e| e.starts_with(API_PREFIX)).count();
        assert!(api > 0);
        assert!(api < ENDPOINTS.len());
    }
}
