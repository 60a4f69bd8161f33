//! Home-page category tiles.

use super::escape_html;
use ink_commerce::catalog::{category_slug, CategoryTile, CATEGORY_TILES, NAV_CATEGORIES};

/// Render the six category tiles.
pub fn render_category_tiles() -> String {
    let tiles: String = CATEGORY_TILES.iter().map(render_tile).collect();
    format!(
        r#"    <section class="home-categories">
        <h2 class="section-title">Nos catégories</h2>
        <div class="tile-grid">
{tiles}        </div>
    </section>"#,
    )
}

fn render_tile(tile: &CategoryTile) -> String {
    format!(
        r#"            <a class="category-tile" href="{href}">
                <img src="{image}" alt="{title}">
                <span>{title}</span>
            </a>
"#,
        href = tile_href(tile),
        image = tile.image,
        title = escape_html(tile.title),
    )
}

// Tiles are broader than single nav categories; each maps onto the
// closest category page, new arrivals go through search.
fn tile_href(tile: &CategoryTile) -> String {
    let category = match tile.id {
        "machines" => Some("Machines"),
        "needles" => Some("Aiguilles & Tubes"),
        "ink" => Some("Encres"),
        "hygiene" => Some("Hygiène"),
        "supplies" => Some("Mobilier"),
        _ => None,
    };
    match category {
        Some(name) if NAV_CATEGORIES.contains(&name) => format!("/{}", category_slug(name)),
        _ => "/recherche?q=nouveau".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_all_six_tiles() {
        let html = render_category_tiles();
        assert_eq!(html.matches(r#"class="category-tile""#).count(), 6);
    }

    #[test]
    fn test_tile_targets() {
        let html = render_category_tiles();
        assert!(html.contains(r#"href="/machines""#));
        assert!(html.contains(r#"href="/aiguilles-tubes""#));
        assert!(html.contains(r#"href="/encres""#));
        assert!(html.contains(r#"href="/hygiène""#));
        assert!(html.contains(r#"href="/recherche?q=nouveau""#));
        assert!(html.contains("NOUVEAUTÉS"));
        assert!(html.contains("ENCRES DE TATOUAGE"));
    }
}
