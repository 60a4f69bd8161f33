//! Category listing pages, one per header navigation entry.

use crate::pages::{timed, Page, PageContext};
use crate::sections::products;

pub async fn render(ctx: &mut PageContext<'_>, category: &str) -> Page {
    let client = ctx.client;
    let (listing, empty_message) = match timed(
        ctx,
        "category products",
        client.products_by_category(category),
    )
    .await
    {
        Ok(listing) => (
            listing,
            format!("Aucun produit dans la catégorie {category} pour le moment."),
        ),
        Err(_) => (
            Vec::new(),
            "Une erreur est survenue lors du chargement des produits.".to_string(),
        ),
    };

    Page::ok(
        category,
        products::render_product_grid(category, &listing, &empty_message),
    )
}
