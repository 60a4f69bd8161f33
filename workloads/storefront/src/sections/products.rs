//! Product grids and cards, shared by the home, search, brand and
//! category pages.

use super::escape_html;
use ink_commerce::catalog::{ProductImage, ProductSummary};
use ink_commerce::ids::ProductId;
use ink_commerce::money::{Currency, Money};

/// Render a titled product grid, with an empty-state message when there
/// is nothing to show.
pub fn render_product_grid(title: &str, products: &[ProductSummary], empty_message: &str) -> String {
    if products.is_empty() {
        return format!(
            r#"    <section class="product-listing">
        <h1 class="section-title">{title}</h1>
        <div class="empty-state">
            <p>{empty}</p>
            <a href="/">Retour à l&#39;accueil</a>
        </div>
    </section>"#,
            title = escape_html(title),
            empty = escape_html(empty_message),
        );
    }

    let cards: String = products.iter().map(render_product_card).collect();
    format!(
        r#"    <section class="product-listing">
        <h1 class="section-title">{title}</h1>
        <div class="product-grid">
{cards}        </div>
    </section>"#,
        title = escape_html(title),
        cards = cards,
    )
}

/// One product card: image, promo badge, title, price with compare-at
/// strikethrough, and the detail link when the product has a handle.
pub fn render_product_card(product: &ProductSummary) -> String {
    let badge = if product.is_on_sale() {
        r#"<span class="promo-badge">Promo</span>"#
    } else {
        ""
    };

    let image = match &product.image {
        Some(img) => format!(
            r#"<img src="{url}" alt="{alt}" loading="lazy">"#,
            url = escape_html(&img.url),
            alt = escape_html(img.alt_text.as_deref().unwrap_or(&product.title)),
        ),
        None => String::new(),
    };

    let compare_at = match product.compare_at_price {
        Some(cap) if product.is_on_sale() => {
            format!(r#"<span class="compare-at">{}</span>"#, cap.display())
        }
        _ => String::new(),
    };

    // Fallback products have no handle; their cards are not clickable.
    let link = if product.handle.is_empty() {
        String::new()
    } else {
        format!(
            r#"                <a class="card-link" href="/product/{handle}">Voir le produit</a>
"#,
            handle = escape_html(&product.handle),
        )
    };

    format!(
        r#"            <article class="product-card">
                <div class="card-image">{badge}{image}</div>
                <div class="card-body">
                    <h3 class="card-title">{title}</h3>
                    <p class="card-price">{price}{compare_at}</p>
                </div>
{link}            </article>
"#,
        badge = badge,
        image = image,
        title = escape_html(&product.title),
        price = product.price.display(),
        compare_at = compare_at,
        link = link,
    )
}

/// The hardcoded featured list served when the commerce API is
/// unreachable, so the home page never renders an empty shelf.
pub fn fallback_featured_products() -> Vec<ProductSummary> {
    fn item(id: &str, title: &str, cents: i64, image: &str) -> ProductSummary {
        ProductSummary {
            id: ProductId::new(id),
            title: title.to_string(),
            handle: String::new(),
            price: Money::new(cents, Currency::CHF),
            compare_at_price: None,
            image: Some(ProductImage {
                url: image.to_string(),
                alt_text: Some(title.to_string()),
                width: None,
                height: None,
            }),
        }
    }

    vec![
        item(
            "fallback-1",
            "CMD 1L Flacon de Savon Vert Cyber",
            1250,
            "/images/products/cyber-green-soap.jpg",
        ),
        item(
            "fallback-2",
            "CMD Panthera Encre Noir Or 150ml",
            3500,
            "/images/products/panthera-ink.jpg",
        ),
        item(
            "fallback-3",
            "CMD Boîte x 100 Original ReproFX Spirit Classic Papier Thermique Violet 8.5\" x 14\"",
            5500,
            "/images/products/reprofx-paper.jpg",
        ),
        item(
            "fallback-4",
            "Hustle Butter Deluxe - Soin Bio pour Tatouage - 150 ml / 5 oz",
            2500,
            "/images/products/hustle-butter.jpg",
        ),
        item(
            "fallback-5",
            "inKoncious Cart. 05 RL 30 boîte de 20",
            2800,
            "/images/products/inkoncious-cartridges.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(handle: &str, cents: i64, compare_at: Option<i64>) -> ProductSummary {
        ProductSummary {
            id: ProductId::new("prod-1"),
            title: "Encre Panthera".to_string(),
            handle: handle.to_string(),
            price: Money::new(cents, Currency::CHF),
            compare_at_price: compare_at.map(|c| Money::new(c, Currency::CHF)),
            image: None,
        }
    }

    #[test]
    fn test_card_links_to_detail_page() {
        let html = render_product_card(&summary("encre-panthera", 3500, None));
        assert!(html.contains(r#"href="/product/encre-panthera""#));
        assert!(html.contains("35.00 CHF"));
        assert!(!html.contains("promo-badge"));
    }

    #[test]
    fn test_card_without_handle_has_no_link() {
        let html = render_product_card(&summary("", 3500, None));
        assert!(!html.contains("card-link"));
    }

    #[test]
    fn test_card_shows_promo_badge_and_compare_at() {
        let html = render_product_card(&summary("encre", 3500, Some(4500)));
        assert!(html.contains(r#"<span class="promo-badge">Promo</span>"#));
        assert!(html.contains(r#"<span class="compare-at">45.00 CHF</span>"#));
    }

    #[test]
    fn test_equal_compare_at_is_not_a_promo() {
        let html = render_product_card(&summary("encre", 3500, Some(3500)));
        assert!(!html.contains("promo-badge"));
        assert!(!html.contains("compare-at"));
    }

    #[test]
    fn test_grid_empty_state() {
        let html = render_product_grid("Recherche", &[], "Aucun produit trouvé.");
        assert!(html.contains("Aucun produit trouvé."));
        assert!(!html.contains("product-grid"));
    }

    #[test]
    fn test_grid_escapes_title() {
        let html = render_product_grid("<Promo>", &[summary("a", 100, None)], "vide");
        assert!(html.contains("&lt;Promo&gt;"));
    }

    #[test]
    fn test_fallback_catalog() {
        let products = fallback_featured_products();
        assert_eq!(products.len(), 5);
        assert!(products.iter().all(|p| p.handle.is_empty()));
        assert!(products.iter().all(|p| p.price.currency == Currency::CHF));
        assert_eq!(products[1].price.amount_cents, 3500);
    }
}
