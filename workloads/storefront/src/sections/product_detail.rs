//! Product detail page: gallery, pricing, option selection, add form.

use super::escape_html;
use ink_commerce::catalog::{Product, ProductVariant};

use crate::data::url_encode;

/// How many gallery images to render at most.
const MAX_GALLERY_IMAGES: usize = 10;

/// Render the full product detail section for the selected variant.
pub fn render_product_detail(product: &Product, selected: Option<&ProductVariant>) -> String {
    format!(
        r#"    <section class="product-page">
        <div class="product-gallery">
{gallery}        </div>
        <div class="product-info">
            <p class="vendor">{vendor}</p>
            <h1>{title}</h1>
{pricing}{options}{add_form}        </div>
    </section>
    <div class="product-description">{description}</div>"#,
        gallery = render_gallery(product),
        vendor = escape_html(&product.vendor),
        title = escape_html(&product.title),
        pricing = render_pricing(selected),
        options = render_options(product, selected),
        add_form = render_add_form(product, selected),
        description = product.description_html,
    )
}

fn render_gallery(product: &Product) -> String {
    let main = match product.primary_image() {
        Some(img) => format!(
            r#"            <div class="gallery-main"><img src="{url}" alt="{alt}"></div>
"#,
            url = escape_html(&img.url),
            alt = escape_html(img.alt_text.as_deref().unwrap_or(&product.title)),
        ),
        None => r#"            <div class="gallery-main"></div>
"#
        .to_string(),
    };

    if product.images.len() < 2 {
        return main;
    }

    let thumbs: String = product
        .images
        .iter()
        .take(MAX_GALLERY_IMAGES)
        .map(|img| {
            format!(
                r#"                <img src="{url}" alt="{alt}">
"#,
                url = escape_html(&img.url),
                alt = escape_html(img.alt_text.as_deref().unwrap_or(&product.title)),
            )
        })
        .collect();
    format!(
        "{main}            <div class=\"gallery-thumbs\">\n{thumbs}            </div>\n"
    )
}

fn render_pricing(selected: Option<&ProductVariant>) -> String {
    let Some(variant) = selected else {
        return r#"            <p class="unavailable">Produit non disponible</p>
"#
        .to_string();
    };

    let compare_at = match variant.compare_at_price {
        Some(cap) if variant.is_on_sale() => {
            format!(r#"<span class="compare-at">{}</span>"#, cap.display())
        }
        _ => String::new(),
    };
    let mut html = format!(
        r#"            <p class="product-price">{price}{compare_at}</p>
"#,
        price = variant.price.display(),
        compare_at = compare_at,
    );
    if !variant.available_for_sale {
        html.push_str(
            r#"            <p class="unavailable">Produit non disponible</p>
"#,
        );
    }
    html
}

// Each option value is a link that reselects the variant matching the
// current selection with that one axis changed.
fn render_options(product: &Product, selected: Option<&ProductVariant>) -> String {
    let selectable = product.selectable_options();
    if selectable.is_empty() {
        return String::new();
    }
    let Some(current) = selected else {
        return String::new();
    };

    selectable
        .iter()
        .map(|option| {
            let values: String = option
                .values
                .iter()
                .map(|value| {
                    let mut selection: Vec<(String, String)> = current
                        .selected_options
                        .iter()
                        .map(|o| (o.name.clone(), o.value.clone()))
                        .collect();
                    for entry in &mut selection {
                        if entry.0 == option.name {
                            entry.1 = value.clone();
                        }
                    }

                    let is_current = current
                        .selected_options
                        .iter()
                        .any(|o| o.name == option.name && &o.value == value);
                    let class = if is_current { r#" class="selected""# } else { "" };

                    match product.variant_matching(&selection) {
                        Some(variant) => format!(
                            r#"                    <a{class} href="/product/{handle}?variant={id}">{value}</a>
"#,
                            class = class,
                            handle = escape_html(&product.handle),
                            id = url_encode(variant.id.as_str()),
                            value = escape_html(value),
                        ),
                        // No variant carries this combination; show the
                        // value without a target.
                        None => format!(
                            r#"                    <a{class}>{value}</a>
"#,
                            class = class,
                            value = escape_html(value),
                        ),
                    }
                })
                .collect();

            format!(
                r#"            <div class="option-group">
                <p class="option-name">{name}</p>
                <div class="option-values">
{values}                </div>
            </div>
"#,
                name = escape_html(&option.name),
                values = values,
            )
        })
        .collect()
}

// The add form carries the full line-item record so the cart needs no
// follow-up catalog fetch.
fn render_add_form(product: &Product, selected: Option<&ProductVariant>) -> String {
    let Some(variant) = selected else {
        return String::new();
    };
    if !variant.available_for_sale {
        return String::new();
    }

    let image = product
        .primary_image()
        .map(|img| img.url.as_str())
        .unwrap_or("");
    let variant_label = variant.cart_label().unwrap_or_default();

    format!(
        r#"            <form class="add-form" action="/panier/ajouter" method="post">
                <input type="hidden" name="variant_id" value="{id}">
                <input type="hidden" name="title" value="{title}">
                <input type="hidden" name="price" value="{price}">
                <input type="hidden" name="currency" value="{currency}">
                <input type="hidden" name="image" value="{image}">
                <input type="hidden" name="handle" value="{handle}">
                <input type="hidden" name="variant" value="{variant}">
                <input type="number" name="quantity" value="1" min="1" aria-label="Quantité">
                <button class="add-button" type="submit">Ajouter au panier</button>
            </form>
"#,
        id = escape_html(variant.id.as_str()),
        title = escape_html(&product.title),
        price = variant.price.display_amount(),
        currency = variant.price.currency.code(),
        image = escape_html(image),
        handle = escape_html(&product.handle),
        variant = escape_html(&variant_label),
    )
}
