//! inkwell/crates/iw-api/src/middleware.rs Middleware
//!
//! Request logging and response hardening.

use actix_web::middleware::{DefaultHeaders, Logger};

// Returns the access logger used by the binary.
pub fn standard_middleware() -> Logger {
    // remote-ip "request-line" status-code response-size "referrer" "user-agent" time
    Logger::default()
}

// Headers added to every response unless a handler already set them.
pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"))
}
