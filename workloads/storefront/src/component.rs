//! Spin HTTP entry point: context setup, routing, dispatch, response.

use spin_sdk::http::{IntoResponse, Request, Response};
use spin_sdk::http_component;

use ink_cache::SessionId;
use ink_observability::{
    LogLevel, Method, MetricsCollector, RequestContext, StructuredLogger,
};
use ink_storefront_api::StorefrontClient;

use crate::data::{bootstrap_cart, parse_urlencoded, session_cookie_header, session_from_cookie};
use crate::pages::{self, Page, PageContext};
use crate::routes::Route;
use crate::sections::{errors, shell};

const WORKLOAD: &str = "storefront";

#[http_component]
async fn handle(req: Request) -> anyhow::Result<impl IntoResponse> {
    let ctx = request_context(&req);
    let route = Route::parse(&ctx.path);

    let logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD)
        .with_route(route.name())
        .with_min_level(LogLevel::Info);
    let mut metrics = MetricsCollector::new(ctx.request_id.clone());
    metrics.set_workload(WORKLOAD);
    metrics.set_route(&ctx.path);

    logger
        .info_builder("request started")
        .field("method", ctx.method.as_str())
        .field("path", ctx.path.clone())
        .emit();

    // Page routes answer GET, cart actions answer POST; everything else
    // is 405 with the right Allow header.
    let expected = if route.is_cart_action() {
        Method::Post
    } else {
        Method::Get
    };
    if ctx.method != expected {
        let page = Page::html(
            405,
            "Méthode non autorisée",
            errors::render_error_notice("Cette méthode n'est pas autorisée sur cette page."),
        );
        let cart = ink_commerce::CartStore::default();
        let response = html_response(
            &page,
            &cart,
            &[
                ("allow", expected.as_str().to_string()),
                ("x-request-id", ctx.request_id.to_string()),
            ],
        );
        finish(metrics, &logger, page.status);
        return Ok(response);
    }

    // Every visitor gets a session; the cookie is set on the first
    // response and the cart snapshot rides in the session store.
    let (session_id, new_session) = match session_from_cookie(&ctx) {
        Some(id) => (id, false),
        None => (SessionId::generate(), true),
    };
    let cart = bootstrap_cart(&session_id, &logger);
    let client = StorefrontClient::from_env();

    let mut page_ctx = PageContext {
        client: &client,
        cart: &cart,
        logger: &logger,
        metrics: &mut metrics,
    };

    let page = match &route {
        Route::Home => pages::home::render(&mut page_ctx).await,
        Route::Product { handle } => pages::product::render(&mut page_ctx, &ctx, handle).await,
        Route::CartPage => pages::cart::render(&page_ctx),
        Route::CartAdd => pages::cart::add(&page_ctx, req.body()),
        Route::CartSetQuantity => pages::cart::set_quantity(&page_ctx, req.body()),
        Route::CartRemove => pages::cart::remove(&page_ctx, req.body()),
        Route::CartClear => pages::cart::clear(&page_ctx),
        Route::Search => pages::search::render(&mut page_ctx, &ctx).await,
        Route::BrandIndex => pages::brands::index(&mut page_ctx).await,
        Route::Brand { slug } => pages::brands::show(&mut page_ctx, slug).await,
        Route::Category { name } => pages::category::render(&mut page_ctx, name).await,
        Route::NotFound => Page::html(404, "Page introuvable", errors::render_not_found()),
    };

    let mut extra_headers = vec![("x-request-id", ctx.request_id.to_string())];
    if new_session {
        extra_headers.push(("set-cookie", session_cookie_header(&session_id)));
    }

    let response = match &page.redirect {
        Some(location) => {
            let mut builder = Response::builder();
            builder
                .status(page.status)
                .header("location", location.as_str());
            for (name, value) in &extra_headers {
                builder.header(*name, value.as_str());
            }
            builder.body(Vec::new()).build()
        }
        None => html_response(&page, &cart, &extra_headers),
    };

    finish(metrics, &logger, page.status);
    Ok(response)
}

fn request_context(req: &Request) -> RequestContext {
    let method = match req.method() {
        spin_sdk::http::Method::Get => Method::Get,
        spin_sdk::http::Method::Post => Method::Post,
        spin_sdk::http::Method::Put => Method::Put,
        spin_sdk::http::Method::Delete => Method::Delete,
        spin_sdk::http::Method::Patch => Method::Patch,
        spin_sdk::http::Method::Head => Method::Head,
        _ => Method::Options,
    };
    let headers = req
        .headers()
        .filter_map(|(name, value)| {
            value
                .as_str()
                .map(|v| (name.to_string(), v.to_string()))
        })
        .collect();

    RequestContext::new(method, req.path())
        .with_query(parse_urlencoded(req.query()))
        .with_headers(headers)
}

fn html_response(
    page: &Page,
    cart: &ink_commerce::CartStore,
    extra_headers: &[(&str, String)],
) -> Response {
    let document = shell::render_document(&page.title, cart, &page.body);
    let mut builder = Response::builder();
    builder
        .status(page.status)
        .header("content-type", "text/html; charset=utf-8");
    for (name, value) in extra_headers {
        builder.header(*name, value.as_str());
    }
    builder.body(document).build()
}

fn finish(metrics: MetricsCollector, logger: &StructuredLogger, status: u16) {
    let report = metrics.finalize(Some(status));
    eprintln!("{}", report.to_json());
    logger
        .info_builder("request completed")
        .field_i64("status", status as i64)
        .emit();
}
