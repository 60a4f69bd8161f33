//! GraphQL query documents for the Storefront API.
//!
//! Grid queries fetch card-sized nodes (minimum price, first image);
//! only the product page query pulls the full record with variants and
//! options.

/// Home-page featured products: the first twelve products.
pub const FEATURED_PRODUCTS_QUERY: &str = r#"
{
  products(first: 12) {
    edges {
      node {
        id
        title
        handle
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
      }
    }
  }
}
"#;

/// Full product record for the product detail page.
pub const PRODUCT_BY_HANDLE_QUERY: &str = r#"
query getProduct($handle: String!) {
  product(handle: $handle) {
    id
    title
    handle
    description
    descriptionHtml
    vendor
    availableForSale
    images(first: 10) {
      edges {
        node {
          url
          altText
          width
          height
        }
      }
    }
    variants(first: 10) {
      edges {
        node {
          id
          title
          availableForSale
          price {
            amount
            currencyCode
          }
          compareAtPrice {
            amount
            currencyCode
          }
          selectedOptions {
            name
            value
          }
        }
      }
    }
    options {
      name
      values
    }
  }
}
"#;

/// Products of one brand, filtered with a `vendor:` search query. The
/// first variant rides along for the compare-at price badge.
pub const PRODUCTS_BY_BRAND_QUERY: &str = r#"
query getProductsByBrand($vendor: String!) {
  products(first: 50, query: $vendor) {
    edges {
      node {
        id
        title
        handle
        vendor
        availableForSale
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        variants(first: 1) {
          edges {
            node {
              id
              price {
                amount
                currencyCode
              }
              compareAtPrice {
                amount
                currencyCode
              }
            }
          }
        }
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
      }
    }
  }
}
"#;

/// All vendor names known to the shop.
pub const BRANDS_QUERY: &str = r#"
{
  shop {
    vendors(first: 250) {
      edges {
        node
      }
    }
  }
}
"#;

/// Free-text product search.
pub const SEARCH_PRODUCTS_QUERY: &str = r#"
query searchProducts($query: String!) {
  products(first: 50, query: $query) {
    edges {
      node {
        id
        title
        handle
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
      }
    }
  }
}
"#;

/// Products of one category, filtered with a `product_type:` search
/// query.
pub const PRODUCTS_BY_CATEGORY_QUERY: &str = r#"
query getProductsByCategory($query: String!) {
  products(first: 50, query: $query) {
    edges {
      node {
        id
        title
        handle
        priceRange {
          minVariantPrice {
            amount
            currencyCode
          }
        }
        images(first: 1) {
          edges {
            node {
              url
              altText
            }
          }
        }
      }
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_query_shape() {
        assert!(FEATURED_PRODUCTS_QUERY.contains("products(first: 12)"));
        assert!(FEATURED_PRODUCTS_QUERY.contains("minVariantPrice"));
        assert!(FEATURED_PRODUCTS_QUERY.contains("images(first: 1)"));
    }

    #[test]
    fn test_product_query_declares_handle_variable() {
        assert!(PRODUCT_BY_HANDLE_QUERY.contains("$handle: String!"));
        assert!(PRODUCT_BY_HANDLE_QUERY.contains("product(handle: $handle)"));
        assert!(PRODUCT_BY_HANDLE_QUERY.contains("variants(first: 10)"));
        assert!(PRODUCT_BY_HANDLE_QUERY.contains("selectedOptions"));
    }

    #[test]
    fn test_filter_queries_take_a_query_variable() {
        assert!(PRODUCTS_BY_BRAND_QUERY.contains("products(first: 50, query: $vendor)"));
        assert!(SEARCH_PRODUCTS_QUERY.contains("products(first: 50, query: $query)"));
        assert!(PRODUCTS_BY_CATEGORY_QUERY.contains("products(first: 50, query: $query)"));
    }

    #[test]
    fn test_brands_query_reads_shop_vendors() {
        assert!(BRANDS_QUERY.contains("vendors(first: 250)"));
    }
}
