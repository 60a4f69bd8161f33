//! Brand index and per-brand listing pages.

use ink_commerce::catalog::{brand_display_name, brand_for_slug, FEATURED_BRANDS};

use crate::pages::{timed, Page, PageContext};
use crate::sections::{brands as brands_section, products};

/// `GET /marques`
pub async fn index(ctx: &mut PageContext<'_>) -> Page {
    let client = ctx.client;
    let brands = match timed(ctx, "brands", client.brands()).await {
        Ok(brands) if !brands.is_empty() => brands,
        // The featured list stands in when the backend has nothing to
        // say, mirroring the home page fallback.
        _ => FEATURED_BRANDS.iter().map(|b| b.to_string()).collect(),
    };

    Page::ok("Nos Marques", brands_section::render_brand_index(&brands))
}

/// `GET /marques/{slug}`
pub async fn show(ctx: &mut PageContext<'_>, slug: &str) -> Page {
    // Known brands resolve to their exact vendor spelling; anything else
    // gets the lossy reconstruction so deep links to new vendors work.
    let vendor = brand_for_slug(slug)
        .map(str::to_string)
        .unwrap_or_else(|| brand_display_name(slug));

    let client = ctx.client;
    let (listing, empty_message) =
        match timed(ctx, "brand products", client.products_by_brand(&vendor)).await {
            Ok(listing) => (
                listing,
                format!("Aucun produit {vendor} disponible pour le moment."),
            ),
            Err(_) => (
                Vec::new(),
                "Une erreur est survenue lors du chargement des produits.".to_string(),
            ),
        };

    Page::ok(
        vendor.clone(),
        products::render_product_grid(&vendor, &listing, &empty_message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testutil;
    use futures::executor::block_on;

    #[test]
    fn test_index_falls_back_to_featured_brands() {
        let mut parts = testutil::parts();
        let mut ctx = parts.ctx();
        let page = block_on(index(&mut ctx));

        assert_eq!(page.status, 200);
        assert!(page.body.contains(r#"href="/marques/panthera""#));
        assert!(page.body.contains(r#"href="/marques/world-famous""#));
    }

    #[test]
    fn test_known_slug_uses_exact_vendor_name() {
        let mut parts = testutil::parts();
        let mut ctx = parts.ctx();
        let page = block_on(show(&mut ctx, "inkoncious"));
        // "inKoncious" keeps its internal capitals.
        assert_eq!(page.title, "inKoncious");
    }

    #[test]
    fn test_unknown_slug_reconstructs_a_display_name() {
        let mut parts = testutil::parts();
        let mut ctx = parts.ctx();
        let page = block_on(show(&mut ctx, "solid-ink"));
        assert_eq!(page.title, "Solid Ink");
        assert!(page.body.contains("Une erreur est survenue"));
    }
}
