//! Product detail page.

use ink_commerce::ids::VariantId;
use ink_observability::RequestContext;

use crate::pages::{timed, Page, PageContext};
use crate::sections::{errors, product_detail};

pub async fn render(ctx: &mut PageContext<'_>, request: &RequestContext, handle: &str) -> Page {
    let client = ctx.client;
    let product = match timed(ctx, "product", client.product_by_handle(handle)).await {
        Ok(Some(product)) => product,
        Ok(None) => {
            return Page::html(404, "Page introuvable", errors::render_not_found());
        }
        Err(_) => {
            return Page::html(
                502,
                "Service indisponible",
                errors::render_error_notice(
                    "Le produit est momentanément indisponible. Veuillez réessayer.",
                ),
            );
        }
    };

    // ?variant= picks an explicit variant; unknown ids fall back to the
    // default selection.
    let selected = request
        .query_param("variant")
        .map(VariantId::new)
        .and_then(|id| product.variant_by_id(&id))
        .or_else(|| product.default_variant());

    let title = product.title.clone();
    Page::ok(title, product_detail::render_product_detail(&product, selected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testutil;
    use futures::executor::block_on;
    use ink_observability::Method;

    #[test]
    fn test_api_failure_degrades_to_notice() {
        let mut parts = testutil::parts();
        let mut ctx = parts.ctx();
        let request = RequestContext::new(Method::Get, "/product/encre-panthera");
        let page = block_on(render(&mut ctx, &request, "encre-panthera"));

        assert_eq!(page.status, 502);
        assert!(page.body.contains("momentanément indisponible"));
    }
}
