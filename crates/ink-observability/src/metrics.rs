//! Request-level timing metrics.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::context::RequestId;

/// Metrics for a single request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestMetrics {
    /// Request ID for correlation.
    pub request_id: String,
    /// Workload name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<String>,
    /// Route path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Dependency timings, keyed by `tag:url`.
    pub dependencies: HashMap<String, DependencyMetrics>,
    /// Total request duration (microseconds).
    pub total_duration_us: u64,
    /// HTTP status code of the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

/// Metrics for a dependency fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DependencyMetrics {
    /// Dependency tag (e.g. "storefront-api").
    pub tag: String,
    /// URL fetched.
    pub url: String,
    /// Fetch duration (microseconds).
    pub duration_us: u64,
    /// HTTP status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Response size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_bytes: Option<usize>,
    /// Whether the fetch succeeded.
    pub success: bool,
    /// Error message if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Collector for request metrics.
#[derive(Debug)]
pub struct MetricsCollector {
    request_id: RequestId,
    workload: Option<String>,
    route: Option<String>,
    start: Instant,
    dependencies: HashMap<String, DependencyMetrics>,
}

impl MetricsCollector {
    /// Create a new metrics collector.
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            workload: None,
            route: None,
            start: Instant::now(),
            dependencies: HashMap::new(),
        }
    }

    /// Set workload name.
    pub fn set_workload(&mut self, workload: impl Into<String>) {
        self.workload = Some(workload.into());
    }

    /// Set route path.
    pub fn set_route(&mut self, route: impl Into<String>) {
        self.route = Some(route.into());
    }

    /// Record a dependency fetch.
    pub fn record_dependency(
        &mut self,
        tag: &str,
        url: &str,
        duration: Duration,
        status_code: Option<u16>,
        response_bytes: Option<usize>,
        success: bool,
        error: Option<String>,
    ) {
        let key = format!("{}:{}", tag, url);
        self.dependencies.insert(
            key,
            DependencyMetrics {
                tag: tag.to_string(),
                url: url.to_string(),
                duration_us: duration.as_micros() as u64,
                status_code,
                response_bytes,
                success,
                error,
            },
        );
    }

    /// Finalize and return the metrics.
    pub fn finalize(self, status_code: Option<u16>) -> RequestMetrics {
        RequestMetrics {
            request_id: self.request_id.to_string(),
            workload: self.workload,
            route: self.route,
            dependencies: self.dependencies,
            total_duration_us: self.start.elapsed().as_micros() as u64,
            status_code,
        }
    }

    /// Get total elapsed time.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl RequestMetrics {
    /// Format as JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Format as human-readable summary.
    pub fn to_summary(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Request: {}", self.request_id));
        if let Some(route) = &self.route {
            lines.push(format!("  Route: {}", route));
        }
        if let Some(status) = self.status_code {
            lines.push(format!("  Status: {}", status));
        }
        lines.push(format!("  Total: {}us", self.total_duration_us));

        if !self.dependencies.is_empty() {
            lines.push("  Dependencies:".to_string());
            for dep in self.dependencies.values() {
                let status = match (dep.success, dep.status_code) {
                    (true, Some(code)) => code.to_string(),
                    (true, None) => "OK".to_string(),
                    (false, _) => "FAILED".to_string(),
                };
                lines.push(format!(
                    "    {} [{}]: {}us - {}",
                    dep.tag, status, dep.duration_us, dep.url
                ));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_collects_dependencies() {
        let mut collector = MetricsCollector::new(RequestId::from_string("req-1"));
        collector.set_workload("storefront");
        collector.set_route("/marques/panthera");

        collector.record_dependency(
            "storefront-api",
            "https://inkorner.myshopify.com/api/graphql",
            Duration::from_micros(1500),
            Some(200),
            Some(2048),
            true,
            None,
        );

        let metrics = collector.finalize(Some(200));
        assert_eq!(metrics.request_id, "req-1");
        assert_eq!(metrics.workload.as_deref(), Some("storefront"));
        assert_eq!(metrics.status_code, Some(200));
        assert_eq!(metrics.dependencies.len(), 1);

        let dep = metrics.dependencies.values().next().unwrap();
        assert_eq!(dep.duration_us, 1500);
        assert!(dep.success);
    }

    #[test]
    fn test_failed_dependency_carries_error() {
        let mut collector = MetricsCollector::new(RequestId::from_string("req-2"));
        collector.record_dependency(
            "storefront-api",
            "https://inkorner.myshopify.com/api/graphql",
            Duration::from_micros(900),
            None,
            None,
            false,
            Some("connection refused".to_string()),
        );

        let metrics = collector.finalize(Some(500));
        let dep = metrics.dependencies.values().next().unwrap();
        assert!(!dep.success);
        assert_eq!(dep.error.as_deref(), Some("connection refused"));

        let summary = metrics.to_summary();
        assert!(summary.contains("FAILED"));
        assert!(summary.contains("Status: 500"));
    }

    #[test]
    fn test_json_round_trip() {
        let collector = MetricsCollector::new(RequestId::from_string("req-3"));
        let metrics = collector.finalize(Some(404));
        let json = metrics.to_json();

        let back: RequestMetrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back.request_id, "req-3");
        assert_eq!(back.status_code, Some(404));
    }
}
