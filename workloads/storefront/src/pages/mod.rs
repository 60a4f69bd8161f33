//! Page orchestrators: one module per route family.
//!
//! A page receives the request-scoped context, fetches what it needs
//! from the Storefront API (timing every call into the metrics
//! collector), renders its sections and returns a [`Page`]. The
//! component turns that into the HTTP response.

use std::future::Future;
use std::time::Instant;

use ink_commerce::CartStore;
use ink_observability::{MetricsCollector, StructuredLogger};
use ink_storefront_api::{ApiError, StorefrontClient};

pub mod brands;
pub mod cart;
pub mod category;
pub mod home;
pub mod product;
pub mod search;

/// What a page handler produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// HTTP status code.
    pub status: u16,
    /// Document title (without the site suffix).
    pub title: String,
    /// Rendered body sections; empty for redirects.
    pub body: String,
    /// Redirect target; set for the cart actions.
    pub redirect: Option<String>,
}

impl Page {
    /// An HTML page with the given status.
    pub fn html(status: u16, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            title: title.into(),
            body: body.into(),
            redirect: None,
        }
    }

    /// A 200 HTML page.
    pub fn ok(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self::html(200, title, body)
    }

    /// A 303 redirect, as the cart actions answer form posts.
    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            status: 303,
            title: String::new(),
            body: String::new(),
            redirect: Some(location.into()),
        }
    }
}

/// Request-scoped dependencies handed to every page.
pub struct PageContext<'a> {
    pub client: &'a StorefrontClient,
    pub cart: &'a CartStore,
    pub logger: &'a StructuredLogger,
    pub metrics: &'a mut MetricsCollector,
}

/// Await one API call, recording its timing and outcome.
pub(crate) async fn timed<T>(
    ctx: &mut PageContext<'_>,
    operation: &str,
    call: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    let endpoint = ctx.client.endpoint();
    let started = Instant::now();
    let result = call.await;
    let elapsed = started.elapsed();

    match &result {
        Ok(_) => {
            ctx.metrics.record_dependency(
                "storefront-api",
                &endpoint,
                elapsed,
                Some(200),
                None,
                true,
                None,
            );
        }
        Err(e) => {
            let status = match e {
                ApiError::Http { status, .. } => Some(*status),
                _ => None,
            };
            ctx.metrics.record_dependency(
                "storefront-api",
                &endpoint,
                elapsed,
                status,
                None,
                false,
                Some(e.to_string()),
            );
            ctx.logger
                .warn_builder("storefront api call failed")
                .field("operation", operation)
                .field("error", e.to_string())
                .duration_ms("duration", elapsed)
                .emit();
        }
    }

    result
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use ink_observability::RequestId;
    use ink_storefront_api::StorefrontConfig;

    /// Bundle of owned parts a test builds a `PageContext` from.
    pub struct TestParts {
        pub client: StorefrontClient,
        pub cart: CartStore,
        pub logger: StructuredLogger,
        pub metrics: MetricsCollector,
    }

    pub fn parts() -> TestParts {
        TestParts {
            client: StorefrontClient::new(StorefrontConfig::new(
                "https://inkorner.myshopify.com",
                "test-token",
            )),
            cart: CartStore::default(),
            logger: StructuredLogger::new(RequestId::from_string("req-test")),
            metrics: MetricsCollector::new(RequestId::from_string("req-test")),
        }
    }

    impl TestParts {
        pub fn ctx(&mut self) -> PageContext<'_> {
            PageContext {
                client: &self.client,
                cart: &self.cart,
                logger: &self.logger,
                metrics: &mut self.metrics,
            }
        }
    }
}
