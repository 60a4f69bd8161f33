//! The storefront route table.
//!
//! Paths follow the original site: French slugs for the cart and brand
//! pages, `/product/{handle}` for product detail, and one top-level
//! slug per header nav category.

use ink_commerce::catalog::nav_category_for_slug;

use crate::data::encoding::url_decode;

/// A resolved route. Page routes answer GET; cart actions answer POST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `GET /`
    Home,
    /// `GET /product/{handle}`
    Product { handle: String },
    /// `GET /panier`
    CartPage,
    /// `POST /panier/ajouter`
    CartAdd,
    /// `POST /panier/quantite`
    CartSetQuantity,
    /// `POST /panier/retirer`
    CartRemove,
    /// `POST /panier/vider`
    CartClear,
    /// `GET /recherche?q=`
    Search,
    /// `GET /marques`
    BrandIndex,
    /// `GET /marques/{slug}`
    Brand { slug: String },
    /// `GET /{category-slug}` for the known nav categories
    Category { name: &'static str },
    /// Anything else
    NotFound,
}

impl Route {
    /// Resolve a request path (without the query string).
    pub fn parse(path: &str) -> Route {
        let path = path.trim_end_matches('/');
        if path.is_empty() {
            return Route::Home;
        }

        match path {
            "/panier" => return Route::CartPage,
            "/panier/ajouter" => return Route::CartAdd,
            "/panier/quantite" => return Route::CartSetQuantity,
            "/panier/retirer" => return Route::CartRemove,
            "/panier/vider" => return Route::CartClear,
            "/recherche" => return Route::Search,
            "/marques" => return Route::BrandIndex,
            _ => {}
        }

        if let Some(handle) = path.strip_prefix("/product/") {
            if !handle.is_empty() && !handle.contains('/') {
                return Route::Product {
                    handle: url_decode(handle),
                };
            }
            return Route::NotFound;
        }

        if let Some(slug) = path.strip_prefix("/marques/") {
            if !slug.is_empty() && !slug.contains('/') {
                return Route::Brand {
                    slug: url_decode(slug),
                };
            }
            return Route::NotFound;
        }

        if let Some(slug) = path.strip_prefix("/") {
            if !slug.contains('/') {
                if let Some(name) = nav_category_for_slug(&url_decode(slug)) {
                    return Route::Category { name };
                }
            }
        }

        Route::NotFound
    }

    /// Whether this route mutates the cart (and therefore expects POST).
    pub fn is_cart_action(&self) -> bool {
        matches!(
            self,
            Route::CartAdd | Route::CartSetQuantity | Route::CartRemove | Route::CartClear
        )
    }

    /// Stable route name for logs and metrics.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Product { .. } => "product",
            Route::CartPage => "cart",
            Route::CartAdd => "cart-add",
            Route::CartSetQuantity => "cart-quantity",
            Route::CartRemove => "cart-remove",
            Route::CartClear => "cart-clear",
            Route::Search => "search",
            Route::BrandIndex => "brands",
            Route::Brand { .. } => "brand",
            Route::Category { .. } => "category",
            Route::NotFound => "not-found",
        }
    }
}
