//! Wire-format shapes of Storefront API responses.
//!
//! The API nests everything in connection envelopes (`edges` / `node`)
//! and ships money as decimal strings. These types deserialize that
//! shape and convert it into the domain types the pages render.

use serde::Deserialize;

use ink_commerce::catalog::{
    Product, ProductImage, ProductOption, ProductSummary, ProductVariant, SelectedOption,
};
use ink_commerce::ids::{ProductId, VariantId};
use ink_commerce::money::{Currency, Money};

use crate::ApiError;

/// A GraphQL connection: a list of edges wrapping nodes.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Edges<T> {
    #[serde(default)]
    pub edges: Vec<Edge<T>>,
}

/// One edge of a connection.
#[derive(Debug, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

impl<T> Edges<T> {
    /// Unwrap the connection into its nodes.
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }

    fn into_first(self) -> Option<T> {
        self.edges.into_iter().next().map(|edge| edge.node)
    }
}

impl<T> Default for Edges<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// A money value on the wire: decimal string plus currency code.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: String,
    pub currency_code: String,
}

impl MoneyV2 {
    /// Convert into fixed-point money.
    pub fn into_money(self) -> Result<Money, ApiError> {
        let currency = Currency::from_code(&self.currency_code).ok_or_else(|| {
            ApiError::Decode(format!("unknown currency code: {}", self.currency_code))
        })?;
        Money::parse(&self.amount, currency)
            .map_err(|e| ApiError::Decode(format!("bad amount {:?}: {}", self.amount, e)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeNode {
    pub min_variant_price: MoneyV2,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageNode {
    pub url: String,
    pub alt_text: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
}

impl ImageNode {
    fn into_image(self) -> ProductImage {
        ProductImage {
            url: self.url,
            alt_text: self.alt_text,
            width: self.width,
            height: self.height,
        }
    }
}

/// Card-sized product node, as the grid queries fetch it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCardNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub price_range: PriceRangeNode,
    #[serde(default)]
    pub images: Edges<ImageNode>,
    #[serde(default)]
    pub variants: Edges<CardVariantNode>,
}

/// The one variant grid queries pull along, for the compare-at badge.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardVariantNode {
    pub compare_at_price: Option<MoneyV2>,
}

impl ProductCardNode {
    /// Convert into the domain summary the grids render.
    pub fn into_summary(self) -> Result<ProductSummary, ApiError> {
        let price = self.price_range.min_variant_price.into_money()?;
        let compare_at_price = self
            .variants
            .into_first()
            .and_then(|variant| variant.compare_at_price)
            .map(MoneyV2::into_money)
            .transpose()?;
        let image = self.images.into_first().map(ImageNode::into_image);

        Ok(ProductSummary {
            id: ProductId::new(self.id),
            title: self.title,
            handle: self.handle,
            price,
            compare_at_price,
            image,
        })
    }
}

/// Full product node, as the product page query fetches it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default)]
    pub images: Edges<ImageNode>,
    #[serde(default)]
    pub variants: Edges<VariantNode>,
    #[serde(default)]
    pub options: Vec<OptionNode>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    pub id: String,
    pub title: String,
    pub available_for_sale: bool,
    pub price: MoneyV2,
    pub compare_at_price: Option<MoneyV2>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOptionNode>,
}

#[derive(Debug, Deserialize)]
pub struct OptionNode {
    pub name: String,
    pub values: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectedOptionNode {
    pub name: String,
    pub value: String,
}

impl VariantNode {
    fn into_variant(self) -> Result<ProductVariant, ApiError> {
        Ok(ProductVariant {
            id: VariantId::new(self.id),
            title: self.title,
            available_for_sale: self.available_for_sale,
            price: self.price.into_money()?,
            compare_at_price: self
                .compare_at_price
                .map(MoneyV2::into_money)
                .transpose()?,
            selected_options: self
                .selected_options
                .into_iter()
                .map(|o| SelectedOption {
                    name: o.name,
                    value: o.value,
                })
                .collect(),
        })
    }
}

impl ProductNode {
    /// Convert into the domain product the detail page renders.
    pub fn into_product(self) -> Result<Product, ApiError> {
        let images = self
            .images
            .into_nodes()
            .into_iter()
            .map(ImageNode::into_image)
            .collect();
        let variants = self
            .variants
            .into_nodes()
            .into_iter()
            .map(VariantNode::into_variant)
            .collect::<Result<Vec<_>, _>>()?;
        let options = self
            .options
            .into_iter()
            .map(|o| ProductOption {
                name: o.name,
                values: o.values,
            })
            .collect();

        Ok(Product {
            id: ProductId::new(self.id),
            title: self.title,
            handle: self.handle,
            description: self.description,
            description_html: self.description_html,
            vendor: self.vendor,
            available_for_sale: self.available_for_sale,
            images,
            variants,
            options,
        })
    }
}

/// `data` payload of the grid queries.
#[derive(Debug, Deserialize)]
pub struct ProductsData {
    pub products: Edges<ProductCardNode>,
}

/// `data` payload of the product page query.
#[derive(Debug, Deserialize)]
pub struct ProductData {
    pub product: Option<ProductNode>,
}

/// `data` payload of the brands query.
#[derive(Debug, Deserialize)]
pub struct BrandsData {
    pub shop: ShopNode,
}

#[derive(Debug, Deserialize)]
pub struct ShopNode {
    pub vendors: Edges<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_node_into_summary() {
        let body = r#"{
            "products": {
                "edges": [
                    {
                        "node": {
                            "id": "gid://shopify/Product/1",
                            "title": "CMD Panthera Encre Noir Or 150ml",
                            "handle": "panthera-encre-noir-or",
                            "priceRange": {
                                "minVariantPrice": {"amount": "35.0", "currencyCode": "CHF"}
                            },
                            "images": {
                                "edges": [
                                    {"node": {"url": "https://cdn.example/panthera.jpg", "altText": "Encre Panthera"}}
                                ]
                            }
                        }
                    }
                ]
            }
        }"#;

        let data: ProductsData = serde_json::from_str(body).unwrap();
        let summaries: Vec<_> = data
            .products
            .into_nodes()
            .into_iter()
            .map(|node| node.into_summary().unwrap())
            .collect();

        assert_eq!(summaries.len(), 1);
        let summary = &summaries[0];
        assert_eq!(summary.id.as_str(), "gid://shopify/Product/1");
        assert_eq!(summary.price.amount_cents, 3500);
        assert_eq!(summary.price.display(), "35.00 CHF");
        assert_eq!(summary.compare_at_price, None);
        assert_eq!(
            summary.image.as_ref().map(|i| i.url.as_str()),
            Some("https://cdn.example/panthera.jpg")
        );
    }

    #[test]
    fn test_card_node_compare_at_price_marks_promo() {
        let body = r#"{
            "id": "gid://shopify/Product/2",
            "title": "Savon Vert",
            "handle": "savon-vert",
            "priceRange": {"minVariantPrice": {"amount": "12.50", "currencyCode": "CHF"}},
            "variants": {
                "edges": [
                    {"node": {"compareAtPrice": {"amount": "15.00", "currencyCode": "CHF"}}}
                ]
            }
        }"#;

        let node: ProductCardNode = serde_json::from_str(body).unwrap();
        let summary = node.into_summary().unwrap();

        assert_eq!(summary.price.amount_cents, 1250);
        assert_eq!(summary.compare_at_price.map(|m| m.amount_cents), Some(1500));
        assert!(summary.is_on_sale());
    }

    #[test]
    fn test_unknown_currency_is_a_decode_error() {
        let money = MoneyV2 {
            amount: "10.00".to_string(),
            currency_code: "XAU".to_string(),
        };
        assert!(matches!(money.into_money(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_product_node_into_product() {
        let body = r#"{
            "id": "gid://shopify/Product/3",
            "title": "Machine Rotative",
            "handle": "machine-rotative",
            "description": "Machine rotative pour lignes et remplissage.",
            "descriptionHtml": "<p>Machine rotative pour lignes et remplissage.</p>",
            "vendor": "Dynamic",
            "availableForSale": true,
            "images": {
                "edges": [
                    {"node": {"url": "https://cdn.example/machine.jpg", "altText": null, "width": 800, "height": 800}}
                ]
            },
            "variants": {
                "edges": [
                    {
                        "node": {
                            "id": "gid://shopify/ProductVariant/31",
                            "title": "Noir",
                            "availableForSale": true,
                            "price": {"amount": "249.00", "currencyCode": "CHF"},
                            "compareAtPrice": null,
                            "selectedOptions": [{"name": "Couleur", "value": "Noir"}]
                        }
                    }
                ]
            },
            "options": [{"name": "Couleur", "values": ["Noir", "Argent"]}]
        }"#;

        let node: ProductNode = serde_json::from_str(body).unwrap();
        let product = node.into_product().unwrap();

        assert_eq!(product.vendor, "Dynamic");
        assert_eq!(product.variants.len(), 1);
        assert_eq!(product.variants[0].price.amount_cents, 24900);
        assert_eq!(
            product.variants[0].selected_options[0].value,
            "Noir"
        );
        assert_eq!(product.options[0].values.len(), 2);
        assert_eq!(product.images[0].width, Some(800));
    }

    #[test]
    fn test_brands_data_nodes_are_bare_strings() {
        let body = r#"{
            "shop": {
                "vendors": {
                    "edges": [
                        {"node": "Dynamic"},
                        {"node": "World Famous"}
                    ]
                }
            }
        }"#;

        let data: BrandsData = serde_json::from_str(body).unwrap();
        assert_eq!(
            data.shop.vendors.into_nodes(),
            vec!["Dynamic".to_string(), "World Famous".to_string()]
        );
    }

    #[test]
    fn test_missing_connections_default_to_empty() {
        let body = r#"{
            "id": "gid://shopify/Product/4",
            "title": "Stencil Primer",
            "handle": "stencil-primer",
            "priceRange": {"minVariantPrice": {"amount": "18.90", "currencyCode": "CHF"}}
        }"#;

        let node: ProductCardNode = serde_json::from_str(body).unwrap();
        let summary = node.into_summary().unwrap();
        assert_eq!(summary.image, None);
        assert_eq!(summary.compare_at_price, None);
    }
}
