//! Typed views over the cart action form posts.
//!
//! The product page posts the full line-item record (variant id, title,
//! price, display fields) along with the quantity; the cart page posts
//! just a variant id, or a variant id plus the new quantity. Field
//! validation beyond shape stays in the cart itself - the forms only
//! decode.

use std::collections::HashMap;

use ink_commerce::ids::VariantId;
use ink_commerce::money::{Currency, Money};
use ink_commerce::LineItemInput;

use crate::data::encoding::parse_urlencoded;

/// `POST /panier/ajouter`: the add-to-cart form from the product page.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartForm {
    pub input: LineItemInput,
    pub quantity: i64,
}

impl AddToCartForm {
    /// Decode an urlencoded body. `None` when the required fields
    /// (variant id, title, parsable price) are missing - the shopper
    /// never produces that through the rendered form, so it is treated
    /// as a bad request rather than a cart error.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let fields = parse_urlencoded(std::str::from_utf8(body).ok()?);

        let id = VariantId::new(fields.get("variant_id")?.as_str());
        let title = fields.get("title")?.clone();
        let currency = fields
            .get("currency")
            .and_then(|code| Currency::from_code(code))
            .unwrap_or_default();
        let price = Money::parse(fields.get("price")?, currency).ok()?;

        let mut input = LineItemInput::new(id, title, price);
        if let Some(image) = non_empty(&fields, "image") {
            input = input.with_image(image);
        }
        if let Some(handle) = non_empty(&fields, "handle") {
            input = input.with_handle(handle);
        }
        if let Some(variant) = non_empty(&fields, "variant") {
            input = input.with_variant_name(variant);
        }

        Some(Self {
            input,
            quantity: parse_quantity(&fields),
        })
    }
}

/// `POST /panier/quantite`: set a line's quantity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityForm {
    pub id: VariantId,
    pub quantity: i64,
}

impl QuantityForm {
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let fields = parse_urlencoded(std::str::from_utf8(body).ok()?);
        Some(Self {
            id: VariantId::new(fields.get("variant_id")?.as_str()),
            quantity: fields.get("quantity")?.trim().parse().ok()?,
        })
    }
}

/// `POST /panier/retirer`: remove a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantIdForm {
    pub id: VariantId,
}

impl VariantIdForm {
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let fields = parse_urlencoded(std::str::from_utf8(body).ok()?);
        Some(Self {
            id: VariantId::new(fields.get("variant_id")?.as_str()),
        })
    }
}

// A missing or blank quantity field means 1; "0" and negatives pass
// through so the cart can reject them.
fn parse_quantity(fields: &HashMap<String, String>) -> i64 {
    match fields.get("quantity").map(|q| q.trim()) {
        None | Some("") => 1,
        Some(raw) => raw.parse().unwrap_or(1),
    }
}

fn non_empty(fields: &HashMap<String, String>, key: &str) -> Option<String> {
    fields.get(key).filter(|v| !v.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_form_full() {
        let body = b"variant_id=gid%3A%2F%2Fshopify%2FProductVariant%2F42\
            &title=Encre+Panthera+Noir&price=35.00&currency=CHF\
            &image=https%3A%2F%2Fcdn.example%2Fink.jpg&handle=encre-panthera\
            &variant=150ml&quantity=2";
        let form = AddToCartForm::from_body(body).unwrap();

        assert_eq!(form.input.id.as_str(), "gid://shopify/ProductVariant/42");
        assert_eq!(form.input.title, "Encre Panthera Noir");
        assert_eq!(form.input.unit_price.amount_cents, 3500);
        assert_eq!(form.input.unit_price.currency, Currency::CHF);
        assert_eq!(form.input.handle.as_deref(), Some("encre-panthera"));
        assert_eq!(form.input.variant_name.as_deref(), Some("150ml"));
        assert_eq!(form.quantity, 2);
    }

    #[test]
    fn test_add_form_minimal_defaults_quantity_to_one() {
        let form =
            AddToCartForm::from_body(b"variant_id=var-1&title=Savon&price=12.50").unwrap();
        assert_eq!(form.quantity, 1);
        assert_eq!(form.input.unit_price.currency, Currency::CHF);
        assert_eq!(form.input.image, None);
        assert_eq!(form.input.handle, None);
    }

    #[test]
    fn test_add_form_blank_quantity_defaults_to_one() {
        let form =
            AddToCartForm::from_body(b"variant_id=var-1&title=Savon&price=12.50&quantity=")
                .unwrap();
        assert_eq!(form.quantity, 1);
    }

    #[test]
    fn test_add_form_zero_quantity_passes_through() {
        // The cart rejects it; the form does not second-guess.
        let form =
            AddToCartForm::from_body(b"variant_id=var-1&title=Savon&price=12.50&quantity=0")
                .unwrap();
        assert_eq!(form.quantity, 0);
    }

    #[test]
    fn test_add_form_missing_required_fields() {
        assert!(AddToCartForm::from_body(b"title=Savon&price=12.50").is_none());
        assert!(AddToCartForm::from_body(b"variant_id=var-1&price=12.50").is_none());
        assert!(AddToCartForm::from_body(b"variant_id=var-1&title=Savon").is_none());
        assert!(
            AddToCartForm::from_body(b"variant_id=var-1&title=Savon&price=douze").is_none()
        );
    }

    #[test]
    fn test_quantity_form() {
        let form = QuantityForm::from_body(b"variant_id=var-1&quantity=3").unwrap();
        assert_eq!(form.id.as_str(), "var-1");
        assert_eq!(form.quantity, 3);

        // Zero and negatives decode; the cart treats them as removal.
        let form = QuantityForm::from_body(b"variant_id=var-1&quantity=0").unwrap();
        assert_eq!(form.quantity, 0);

        assert!(QuantityForm::from_body(b"variant_id=var-1").is_none());
        assert!(QuantityForm::from_body(b"variant_id=var-1&quantity=abc").is_none());
    }

    #[test]
    fn test_variant_id_form() {
        let form = VariantIdForm::from_body(b"variant_id=var-9").unwrap();
        assert_eq!(form.id.as_str(), "var-9");
        assert!(VariantIdForm::from_body(b"other=x").is_none());
    }
}
