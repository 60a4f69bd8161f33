//! Fixed navigation data: header categories, home-page tiles, featured
//! brands, and the slug rules that turn their names into URL paths.

/// Header navigation categories, in display order.
pub const NAV_CATEGORIES: [&str; 11] = [
    "Accessoires",
    "Aiguilles & Tubes",
    "Cartouches",
    "Encres",
    "Hygiène",
    "InKoncious",
    "Machines",
    "Mobilier",
    "Soins",
    "Solde",
    "Stencils",
];

/// A category tile on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTile {
    pub id: &'static str,
    pub title: &'static str,
    pub image: &'static str,
}

/// The six home-page category tiles.
pub const CATEGORY_TILES: [CategoryTile; 6] = [
    CategoryTile {
        id: "new",
        title: "NOUVEAUTÉS",
        image: "/images/categories/new.jpg",
    },
    CategoryTile {
        id: "machines",
        title: "MACHINES & ALIMENTATIONS",
        image: "/images/categories/machines.jpg",
    },
    CategoryTile {
        id: "needles",
        title: "AIGUILLES, GRIPS & TUBES",
        image: "/images/categories/needles.jpg",
    },
    CategoryTile {
        id: "ink",
        title: "ENCRES DE TATOUAGE",
        image: "/images/categories/ink.jpg",
    },
    CategoryTile {
        id: "hygiene",
        title: "HYGIÈNE & SOINS",
        image: "/images/categories/hygiene.jpg",
    },
    CategoryTile {
        id: "supplies",
        title: "ÉQUIPEMENT DE STUDIO",
        image: "/images/categories/supplies.jpg",
    },
];

/// Brands featured on the home page.
pub const FEATURED_BRANDS: [&str; 6] = [
    "Dynamic",
    "Eclipse",
    "inKoncious",
    "Panthera",
    "Dermalize Pro",
    "World Famous",
];

/// URL slug for a nav category: lowercase with " & " collapsed to "-"
/// ("Aiguilles & Tubes" -> "aiguilles-tubes").
pub fn category_slug(name: &str) -> String {
    name.to_lowercase().replace(" & ", "-")
}

/// URL slug for a brand: lowercase with whitespace runs collapsed to "-"
/// ("Dermalize Pro" -> "dermalize-pro").
pub fn brand_slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Resolve a path segment back to the nav category it slugs from.
pub fn nav_category_for_slug(slug: &str) -> Option<&'static str> {
    NAV_CATEGORIES
        .iter()
        .find(|name| category_slug(name) == slug)
        .copied()
}

/// Resolve a brand slug back to its exact vendor name, for brands we
/// feature. Unknown slugs fall back to [`brand_display_name`].
pub fn brand_for_slug(slug: &str) -> Option<&'static str> {
    FEATURED_BRANDS
        .iter()
        .find(|name| brand_slug(name) == slug)
        .copied()
}

/// Display name reconstructed from a brand slug: each dash-separated
/// word capitalized ("world-famous" -> "World Famous"). Lossy for
/// brands with internal capitals, so [`brand_for_slug`] is tried first.
pub fn brand_display_name(slug: &str) -> String {
    slug.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slugs() {
        assert_eq!(category_slug("Aiguilles & Tubes"), "aiguilles-tubes");
        assert_eq!(category_slug("InKoncious"), "inkoncious");
        assert_eq!(category_slug("Hygiène"), "hygiène");
        assert_eq!(category_slug("Solde"), "solde");
    }

    #[test]
    fn test_brand_slugs() {
        assert_eq!(brand_slug("Dermalize Pro"), "dermalize-pro");
        assert_eq!(brand_slug("World Famous"), "world-famous");
        assert_eq!(brand_slug("Panthera"), "panthera");
    }

    #[test]
    fn test_nav_category_round_trip() {
        for name in NAV_CATEGORIES {
            assert_eq!(nav_category_for_slug(&category_slug(name)), Some(name));
        }
        assert_eq!(nav_category_for_slug("panier"), None);
        assert_eq!(nav_category_for_slug("marques"), None);
    }

    #[test]
    fn test_brand_for_slug() {
        assert_eq!(brand_for_slug("world-famous"), Some("World Famous"));
        assert_eq!(brand_for_slug("inkoncious"), Some("inKoncious"));
        assert_eq!(brand_for_slug("intenze"), None);
    }

    #[test]
    fn test_brand_display_name() {
        assert_eq!(brand_display_name("world-famous"), "World Famous");
        assert_eq!(brand_display_name("dynamic"), "Dynamic");
        // Internal capitals are lost, which is why known brands resolve
        // through brand_for_slug.
        assert_eq!(brand_display_name("inkoncious"), "Inkoncious");
    }

    #[test]
    fn test_fixed_lists_are_complete() {
        assert_eq!(CATEGORY_TILES.len(), 6);
        assert_eq!(CATEGORY_TILES[0].title, "NOUVEAUTÉS");
        assert_eq!(FEATURED_BRANDS.len(), 6);
    }
}
