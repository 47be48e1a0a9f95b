//! Plain-text rendering of supply results.
//!
//! Fresh and stale values share status 200; only the absence of any value
//! produces a 500. Provider errors are never echoed to the client.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::observability::metrics;
use crate::supply::CirculatingSupply;

/// Body returned when computation fails and no value was ever cached.
pub const UNAVAILABLE_MESSAGE: &str =
    "Error calculating circulating supply and no previous value available";

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// Outcome of one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyResponse {
    /// Computed for this request.
    Fresh(CirculatingSupply),
    /// Computation failed; last known good value.
    Stale(CirculatingSupply),
    /// Computation failed and nothing is cached.
    Unavailable,
}

impl SupplyResponse {
    pub fn status(&self) -> StatusCode {
        match self {
            SupplyResponse::Fresh(_) | SupplyResponse::Stale(_) => StatusCode::OK,
            SupplyResponse::Unavailable => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> String {
        match self {
            SupplyResponse::Fresh(value) | SupplyResponse::Stale(value) => value.to_string(),
            SupplyResponse::Unavailable => UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    fn source(&self) -> &'static str {
        match self {
            SupplyResponse::Fresh(_) => "fresh",
            SupplyResponse::Stale(_) => "stale",
            SupplyResponse::Unavailable => "error",
        }
    }
}

impl IntoResponse for SupplyResponse {
    fn into_response(self) -> Response {
        metrics::record_response(self.source());
        (self.status(), [(header::CONTENT_TYPE, TEXT_PLAIN)], self.body()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{U256, U512};
    use metrics_exporter_prometheus::PrometheusBuilder;

    fn supply(total: u64, locked: u64) -> CirculatingSupply {
        CirculatingSupply::from_parts(U256::from(total), U512::from(locked))
    }

    #[test]
    fn test_fresh_and_stale_are_indistinguishable() {
        let fresh = SupplyResponse::Fresh(supply(700, 0));
        let stale = SupplyResponse::Stale(supply(700, 0));
        assert_eq!(fresh.status(), stale.status());
        assert_eq!(fresh.body(), stale.body());
        assert_eq!(fresh.body(), "700");
    }

    #[test]
    fn test_unavailable() {
        let res = SupplyResponse::Unavailable.into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.headers()[header::CONTENT_TYPE], TEXT_PLAIN);
    }

    #[test]
    fn test_negative_body() {
        let res = SupplyResponse::Fresh(supply(8, 50));
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.body(), "-42");
    }

    #[test]
    fn test_responses_counted_by_source() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        ::metrics::with_local_recorder(&recorder, || {
            let _ = SupplyResponse::Fresh(supply(1, 0)).into_response();
            let _ = SupplyResponse::Stale(supply(1, 0)).into_response();
            let _ = SupplyResponse::Stale(supply(1, 0)).into_response();
            let _ = SupplyResponse::Unavailable.into_response();
        });

        let rendered = handle.render();
        assert!(rendered.contains(r#"supply_responses_total{source="fresh"} 1"#));
        assert!(rendered.contains(r#"supply_responses_total{source="stale"} 2"#));
        assert!(rendered.contains(r#"supply_responses_total{source="error"} 1"#));
    }
}
