//! Product catalog types, shaped after what the Storefront API returns.

use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// Shopify's placeholder variant title for single-variant products.
const DEFAULT_VARIANT_TITLE: &str = "Default Title";

/// A full product record, as fetched for the product detail page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL handle (slug).
    pub handle: String,
    /// Plain-text description.
    pub description: String,
    /// Rich description markup from the backend.
    pub description_html: String,
    /// Vendor (brand) name.
    pub vendor: String,
    /// Whether any variant is purchasable.
    pub available_for_sale: bool,
    /// Product images, in display order.
    pub images: Vec<ProductImage>,
    /// Purchasable variants.
    pub variants: Vec<ProductVariant>,
    /// Option axes (e.g., Taille, Couleur) with their values.
    pub options: Vec<ProductOption>,
}

impl Product {
    /// The variant to preselect: the first available one, else the first.
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants
            .iter()
            .find(|v| v.available_for_sale)
            .or_else(|| self.variants.first())
    }

    /// Look up a variant by id.
    pub fn variant_by_id(&self, id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == id)
    }

    /// Find the variant whose option values all match the given
    /// name/value selection (how the option buttons resolve a variant).
    pub fn variant_matching(&self, selections: &[(String, String)]) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| {
            v.selected_options.iter().all(|opt| {
                selections
                    .iter()
                    .any(|(name, value)| name == &opt.name && value == &opt.value)
            })
        })
    }

    /// The main image for cards and carts.
    pub fn primary_image(&self) -> Option<&ProductImage> {
        self.images.first()
    }

    /// Options worth rendering as choices — axes with more than one value.
    pub fn selectable_options(&self) -> Vec<&ProductOption> {
        self.options.iter().filter(|o| o.values.len() > 1).collect()
    }
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Unique variant identifier.
    pub id: VariantId,
    /// Variant title (e.g., "13.00 / Rouge"; "Default Title" when the
    /// product has a single implicit variant).
    pub title: String,
    /// Whether this variant is purchasable.
    pub available_for_sale: bool,
    /// Price of this variant.
    pub price: Money,
    /// Compare-at price (original price for showing discounts).
    pub compare_at_price: Option<Money>,
    /// The option values that define this variant.
    pub selected_options: Vec<SelectedOption>,
}

impl ProductVariant {
    /// Check if this variant is on sale (compare-at above price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount percentage when on sale, rounded to whole percent.
    pub fn discount_percentage(&self) -> Option<i64> {
        self.compare_at_price.and_then(|cap| {
            if cap.amount_cents > self.price.amount_cents && cap.amount_cents > 0 {
                let savings = cap.amount_cents - self.price.amount_cents;
                Some((savings * 100 + cap.amount_cents / 2) / cap.amount_cents)
            } else {
                None
            }
        })
    }

    /// The variant label shown in the cart; `None` for the implicit
    /// single-variant placeholder.
    pub fn cart_label(&self) -> Option<String> {
        if self.title == DEFAULT_VARIANT_TITLE || self.title.is_empty() {
            None
        } else {
            Some(self.title.clone())
        }
    }

    /// Whether the given selection picks this variant.
    pub fn matches(&self, selections: &[(String, String)]) -> bool {
        self.selected_options.iter().all(|opt| {
            selections
                .iter()
                .any(|(name, value)| name == &opt.name && value == &opt.value)
        })
    }
}

/// A product image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Alt text, if set in the backend.
    pub alt_text: Option<String>,
    /// Pixel width, if known.
    pub width: Option<i64>,
    /// Pixel height, if known.
    pub height: Option<i64>,
}

/// An option axis on a product (e.g., "Couleur" with its values).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductOption {
    pub name: String,
    pub values: Vec<String>,
}

/// One chosen option value on a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

/// The card-sized product shape used by grids (featured, search, brand
/// and category listings): minimum price plus first image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductSummary {
    pub id: ProductId,
    pub title: String,
    pub handle: String,
    /// Minimum variant price.
    pub price: Money,
    /// Compare-at price of the first variant, for the "Promo" badge and
    /// strikethrough price on brand cards.
    pub compare_at_price: Option<Money>,
    /// First image, if any.
    pub image: Option<ProductImage>,
}

impl ProductSummary {
    /// Check if the card should show a discount (compare-at above price).
    pub fn is_on_sale(&self) -> bool {
        self.compare_at_price
            .map(|cap| cap.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn chf(cents: i64) -> Money {
        Money::new(cents, Currency::CHF)
    }

    fn variant(id: &str, available: bool, price: i64) -> ProductVariant {
        ProductVariant {
            id: VariantId::new(id),
            title: format!("variant {id}"),
            available_for_sale: available,
            price: chf(price),
            compare_at_price: None,
            selected_options: Vec::new(),
        }
    }

    fn product(variants: Vec<ProductVariant>) -> Product {
        Product {
            id: ProductId::new("prod-1"),
            title: "Encre Panthera".to_string(),
            handle: "encre-panthera".to_string(),
            description: String::new(),
            description_html: String::new(),
            vendor: "Panthera".to_string(),
            available_for_sale: true,
            images: Vec::new(),
            variants,
            options: Vec::new(),
        }
    }

    #[test]
    fn test_default_variant_prefers_available() {
        let p = product(vec![
            variant("var-1", false, 1000),
            variant("var-2", true, 1200),
        ]);
        assert_eq!(p.default_variant().map(|v| v.id.as_str()), Some("var-2"));
    }

    #[test]
    fn test_default_variant_falls_back_to_first() {
        let p = product(vec![
            variant("var-1", false, 1000),
            variant("var-2", false, 1200),
        ]);
        assert_eq!(p.default_variant().map(|v| v.id.as_str()), Some("var-1"));
        assert!(product(Vec::new()).default_variant().is_none());
    }

    #[test]
    fn test_variant_matching() {
        let mut red = variant("var-red", true, 1000);
        red.selected_options = vec![
            SelectedOption {
                name: "Couleur".to_string(),
                value: "Rouge".to_string(),
            },
            SelectedOption {
                name: "Taille".to_string(),
                value: "30ml".to_string(),
            },
        ];
        let mut black = variant("var-black", true, 1000);
        black.selected_options = vec![
            SelectedOption {
                name: "Couleur".to_string(),
                value: "Noir".to_string(),
            },
            SelectedOption {
                name: "Taille".to_string(),
                value: "30ml".to_string(),
            },
        ];
        let p = product(vec![red, black]);

        let selection = vec![
            ("Couleur".to_string(), "Noir".to_string()),
            ("Taille".to_string(), "30ml".to_string()),
        ];
        assert_eq!(
            p.variant_matching(&selection).map(|v| v.id.as_str()),
            Some("var-black")
        );

        let missing = vec![
            ("Couleur".to_string(), "Vert".to_string()),
            ("Taille".to_string(), "30ml".to_string()),
        ];
        assert!(p.variant_matching(&missing).is_none());
    }

    #[test]
    fn test_is_on_sale_and_discount() {
        let mut v = variant("var-1", true, 7500);
        assert!(!v.is_on_sale());
        assert_eq!(v.discount_percentage(), None);

        v.compare_at_price = Some(chf(10000));
        assert!(v.is_on_sale());
        assert_eq!(v.discount_percentage(), Some(25));
    }

    #[test]
    fn test_discount_rounds_to_whole_percent() {
        let mut v = variant("var-1", true, 6666);
        v.compare_at_price = Some(chf(10000));
        // 33.34% rounds to 33.
        assert_eq!(v.discount_percentage(), Some(33));
    }

    #[test]
    fn test_cart_label_hides_default_title() {
        let mut v = variant("var-1", true, 1000);
        v.title = "Default Title".to_string();
        assert_eq!(v.cart_label(), None);

        v.title = "13.00 / Rouge".to_string();
        assert_eq!(v.cart_label(), Some("13.00 / Rouge".to_string()));
    }

    #[test]
    fn test_summary_on_sale() {
        let mut s = ProductSummary {
            id: ProductId::new("prod-1"),
            title: "Encre".to_string(),
            handle: "encre".to_string(),
            price: chf(2500),
            compare_at_price: None,
            image: None,
        };
        assert!(!s.is_on_sale());

        s.compare_at_price = Some(chf(3000));
        assert!(s.is_on_sale());

        // Equal compare-at is not a discount.
        s.compare_at_price = Some(chf(2500));
        assert!(!s.is_on_sale());
    }

    #[test]
    fn test_selectable_options_need_two_values() {
        let mut p = product(Vec::new());
        p.options = vec![
            ProductOption {
                name: "Title".to_string(),
                values: vec!["Default Title".to_string()],
            },
            ProductOption {
                name: "Couleur".to_string(),
                values: vec!["Rouge".to_string(), "Noir".to_string()],
            },
        ];
        let selectable = p.selectable_options();
        assert_eq!(selectable.len(), 1);
        assert_eq!(selectable[0].name, "Couleur");
    }
}
