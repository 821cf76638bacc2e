//! Telemetry metric name constants.
//!
//! Centralised metric names for nexus-ai operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `nexus_ai_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `operation` — client operation ("spoilers" | "recommend")
//! - `status` — outcome: "ok" or "fallback" (operations never error)
//! - `endpoint` — endpoint URL of a failed attempt
//! - `reason` — why fallback content was produced ("no_credential" | "exhausted")

/// Total content requests handled by the client.
///
/// Labels: `operation`, `status` ("ok" | "fallback").
pub const REQUESTS_TOTAL: &str = "nexus_ai_requests_total";

/// Content request duration in seconds, cache hits included.
///
/// Labels: `operation`.
pub const REQUEST_DURATION_SECONDS: &str = "nexus_ai_request_duration_seconds";

/// Failed attempts against a single endpoint (each failure moves the
/// executor to the next endpoint in the list).
///
/// Labels: `endpoint`.
pub const ENDPOINT_FAILURES_TOTAL: &str = "nexus_ai_endpoint_failures_total";

/// Total spoiler cache hits.
///
/// Labels: `operation`.
pub const CACHE_HITS_TOTAL: &str = "nexus_ai_cache_hits_total";

/// Total spoiler cache misses (includes expired entries).
///
/// Labels: `operation`.
pub const CACHE_MISSES_TOTAL: &str = "nexus_ai_cache_misses_total";

/// Requests answered with offline template content.
///
/// Labels: `operation`, `reason` ("no_credential" | "exhausted").
pub const FALLBACKS_TOTAL: &str = "nexus_ai_fallbacks_total";
