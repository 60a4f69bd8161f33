//! Brand sections: the home-page featured grid and the brand index.

use super::escape_html;
use ink_commerce::catalog::{brand_slug, FEATURED_BRANDS};

/// Render the home page's featured brand grid with the link to the
/// full index.
pub fn render_featured_brands() -> String {
    format!(
        r#"    <section class="home-brands">
        <h2 class="section-title">Nos Marques</h2>
        <div class="brand-grid">
{cards}        </div>
        <a class="all-brands-link" href="/marques">Voir toutes nos marques</a>
    </section>"#,
        cards = brand_cards(&FEATURED_BRANDS),
    )
}

/// Render the `/marques` index page body.
pub fn render_brand_index(brands: &[String]) -> String {
    if brands.is_empty() {
        return r#"    <section class="brand-index">
        <h1 class="section-title">Nos Marques</h1>
        <div class="empty-state">
            <p>Aucune marque disponible pour le moment.</p>
            <a href="/">Retour à l&#39;accueil</a>
        </div>
    </section>"#
            .to_string();
    }

    let names: Vec<&str> = brands.iter().map(String::as_str).collect();
    format!(
        r#"    <section class="brand-index">
        <h1 class="section-title">Nos Marques</h1>
        <div class="brand-grid">
{cards}        </div>
    </section>"#,
        cards = brand_cards(&names),
    )
}

fn brand_cards(names: &[&str]) -> String {
    names
        .iter()
        .map(|name| {
            format!(
                r#"            <a class="brand-card" href="/marques/{slug}">{name}</a>
"#,
                slug = brand_slug(name),
                name = escape_html(name),
            )
        })
        .collect()
}
