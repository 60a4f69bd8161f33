//! Cart page and the four cart actions.
//!
//! Actions answer form posts with a 303 back to `/panier`, so a reload
//! never replays a mutation. Malformed bodies get a 400; cart rules
//! rejecting an input are logged and the shopper just sees the
//! unchanged cart.

use crate::data::{AddToCartForm, QuantityForm, VariantIdForm};
use crate::pages::{Page, PageContext};
use crate::sections::{cart as cart_section, errors};

const CART_PATH: &str = "/panier";

/// `GET /panier`
pub fn render(ctx: &PageContext<'_>) -> Page {
    Page::ok("Votre panier", cart_section::render_cart(ctx.cart))
}

/// `POST /panier/ajouter`
pub fn add(ctx: &PageContext<'_>, body: &[u8]) -> Page {
    let Some(form) = AddToCartForm::from_body(body) else {
        return bad_request(ctx);
    };

    match ctx.cart.add_item(form.input, form.quantity) {
        Ok(()) => {
            ctx.logger
                .info_builder("item added to cart")
                .field_i64("quantity", form.quantity)
                .field_i64("cart_items", ctx.cart.item_count())
                .emit();
        }
        Err(e) => {
            ctx.logger
                .warn_builder("add to cart rejected")
                .field("error", e.to_string())
                .emit();
        }
    }
    Page::see_other(CART_PATH)
}

/// `POST /panier/quantite`
pub fn set_quantity(ctx: &PageContext<'_>, body: &[u8]) -> Page {
    let Some(form) = QuantityForm::from_body(body) else {
        return bad_request(ctx);
    };

    // Below 1 removes the line; unknown ids are a no-op.
    ctx.cart.update_quantity(&form.id, form.quantity);
    Page::see_other(CART_PATH)
}

/// `POST /panier/retirer`
pub fn remove(ctx: &PageContext<'_>, body: &[u8]) -> Page {
    let Some(form) = VariantIdForm::from_body(body) else {
        return bad_request(ctx);
    };

    ctx.cart.remove_item(&form.id);
    Page::see_other(CART_PATH)
}

/// `POST /panier/vider`
pub fn clear(ctx: &PageContext<'_>) -> Page {
    ctx.cart.clear();
    ctx.logger.info("cart cleared");
    Page::see_other(CART_PATH)
}

fn bad_request(ctx: &PageContext<'_>) -> Page {
    ctx.logger.warn("malformed cart form body");
    Page::html(
        400,
        "Requête invalide",
        errors::render_error_notice("La requête est invalide."),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testutil;

    #[test]
    fn test_add_then_render() {
        let mut parts = testutil::parts();
        let ctx = parts.ctx();

        let page = add(
            &ctx,
            b"variant_id=var-1&title=Encre+Panthera&price=35.00&currency=CHF&quantity=2",
        );
        assert_eq!(page.status, 303);
        assert_eq!(page.redirect.as_deref(), Some("/panier"));
        assert_eq!(ctx.cart.item_count(), 2);

        let page = render(&ctx);
        assert_eq!(page.status, 200);
        assert!(page.body.contains("Encre Panthera"));
        assert!(page.body.contains("70.00 CHF"));
    }

    #[test]
    fn test_malformed_add_is_bad_request() {
        let mut parts = testutil::parts();
        let ctx = parts.ctx();
        let page = add(&ctx, b"title=Sans+variant");
        assert_eq!(page.status, 400);
        assert!(ctx.cart.is_empty());
    }

    #[test]
    fn test_rejected_add_still_redirects() {
        let mut parts = testutil::parts();
        let ctx = parts.ctx();
        // Quantity zero violates the cart rules but the shopper is sent
        // back to the unchanged cart rather than an error page.
        let page = add(&ctx, b"variant_id=var-1&title=Encre&price=35.00&quantity=0");
        assert_eq!(page.status, 303);
        assert!(ctx.cart.is_empty());
    }

    #[test]
    fn test_quantity_update_and_removal() {
        let mut parts = testutil::parts();
        let ctx = parts.ctx();
        add(&ctx, b"variant_id=var-1&title=Encre&price=35.00&quantity=2");

        set_quantity(&ctx, b"variant_id=var-1&quantity=5");
        assert_eq!(ctx.cart.item_count(), 5);

        // Zero removes the line.
        set_quantity(&ctx, b"variant_id=var-1&quantity=0");
        assert!(ctx.cart.is_empty());
    }

    #[test]
    fn test_remove_and_clear() {
        let mut parts = testutil::parts();
        let ctx = parts.ctx();
        add(&ctx, b"variant_id=var-1&title=Encre&price=35.00");
        add(&ctx, b"variant_id=var-2&title=Savon&price=12.50");

        let page = remove(&ctx, b"variant_id=var-1");
        assert_eq!(page.status, 303);
        assert_eq!(ctx.cart.unique_item_count(), 1);

        let page = clear(&ctx);
        assert_eq!(page.status, 303);
        assert!(ctx.cart.is_empty());
    }
}
