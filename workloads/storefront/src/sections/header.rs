//! Header: category navigation, search form, cart link with item count.

use super::escape_html;
use ink_commerce::catalog::{category_slug, NAV_CATEGORIES};
use ink_commerce::CartStore;

/// Render the site header.
pub fn render_header(cart: &CartStore) -> String {
    let nav_links: String = NAV_CATEGORIES
        .iter()
        .map(|name| {
            format!(
                r#"        <a href="/{slug}">{name}</a>
"#,
                slug = category_slug(name),
                name = escape_html(name)
            )
        })
        .collect();

    let count = cart.item_count();
    let badge = if count > 0 {
        format!(r#"<span class="cart-count">{count}</span>"#)
    } else {
        String::new()
    };

    format!(
        r#"    <header class="site-header">
        <div class="header-tools">
            <form class="search-form" action="/recherche" method="get">
                <input type="search" name="q" placeholder="Rechercher..." aria-label="Rechercher">
                <button type="submit">Rechercher</button>
            </form>
            <a class="cart-link" href="/panier">Panier{badge}</a>
        </div>
        <nav class="site-nav">
{nav_links}        </nav>
    </header>"#,
        badge = badge,
        nav_links = nav_links,
    )
}
