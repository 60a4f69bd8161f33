//! Search results page.

use ink_observability::RequestContext;

use crate::pages::{timed, Page, PageContext};
use crate::sections::products;

pub async fn render(ctx: &mut PageContext<'_>, request: &RequestContext) -> Page {
    let term = request.query_param("q").map(str::trim).unwrap_or("");
    if term.is_empty() {
        return Page::ok(
            "Recherche",
            products::render_product_grid(
                "Recherche",
                &[],
                "Saisissez un terme de recherche pour trouver vos produits.",
            ),
        );
    }

    let client = ctx.client;
    let (results, empty_message) = match timed(ctx, "search", client.search_products(term)).await {
        Ok(results) => (results, format!("Aucun résultat pour « {term} ».")),
        Err(_) => (
            Vec::new(),
            "Une erreur est survenue lors de la recherche. Veuillez réessayer.".to_string(),
        ),
    };

    let title = format!("Résultats pour \"{term}\"");
    Page::ok(
        title.clone(),
        products::render_product_grid(&title, &results, &empty_message),
    )
}
