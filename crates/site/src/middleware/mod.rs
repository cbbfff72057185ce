//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, HTTP transaction)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers
//! 4. Admin gate (session cookie check on `/admin` paths)
//! 5. Rate limiting on form and login routes (binary only)

pub mod admin_gate;
pub mod rate_limit;
pub mod security_headers;
pub mod session;

pub use admin_gate::{ADMIN_PATH, GateDecision, LOGIN_PATH, admin_gate_middleware, gate};
pub use rate_limit::{form_rate_limiter, login_rate_limiter};
pub use security_headers::security_headers_middleware;
pub use session::{SESSION_COOKIE_NAME, SessionGuard};
