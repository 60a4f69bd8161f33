//! Home page: carousel, category tiles, featured products, brands.

use crate::pages::{timed, Page, PageContext};
use crate::sections::{brands, carousel, categories, products};

pub async fn render(ctx: &mut PageContext<'_>) -> Page {
    let client = ctx.client;
    let featured = match timed(ctx, "featured products", client.featured_products()).await {
        Ok(list) if !list.is_empty() => list,
        // An unreachable backend or an empty shelf both fall back to the
        // curated list; the home page never renders without products.
        _ => products::fallback_featured_products(),
    };

    let body = format!(
        "{carousel}\n{tiles}\n{brands}\n{featured}",
        carousel = carousel::render_carousel(),
        tiles = categories::render_category_tiles(),
        brands = brands::render_featured_brands(),
        featured = products::render_product_grid(
            "Produits en vedette",
            &featured,
            "Aucun produit disponible pour le moment.",
        ),
    );

    Page::ok("Accueil", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::testutil;
    use futures::executor::block_on;

    #[test]
    fn test_home_falls_back_when_api_unreachable() {
        let mut parts = testutil::parts();
        let mut ctx = parts.ctx();
        let page = block_on(render(&mut ctx));

        assert_eq!(page.status, 200);
        assert_eq!(page.title, "Accueil");
        assert!(page.body.contains("hero-carousel"));
        assert!(page.body.contains("Nos catégories"));
        assert!(page.body.contains("Produits en vedette"));
        assert!(page.body.contains("CMD Panthera Encre Noir Or 150ml"));
        assert!(page.body.contains("Voir toutes nos marques"));
        // Fallback cards are informational only.
        assert!(!page.body.contains("card-link"));
    }
}
