//! Document shell: head, logo band, header, main, footer.

use super::{escape_html, footer, header};
use ink_commerce::CartStore;

/// Site-wide stylesheet, inlined so every page is a single response.
const STOREFRONT_STYLES: &str = r#"
:root { --gold: #9f7833; --dark: #221804; --paper: #faf7f2; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: 'Helvetica Neue', Arial, sans-serif; background: var(--paper); color: var(--dark); }
a { color: inherit; text-decoration: none; }
img { max-width: 100%; display: block; }
.logo-band { background: var(--dark); text-align: center; padding: 18px 0; }
.logo-band img { height: 56px; margin: 0 auto; }
.site-header { background: var(--gold); color: #fff; }
.site-nav { display: flex; flex-wrap: wrap; justify-content: center; gap: 4px; padding: 8px 16px; }
.site-nav a { padding: 8px 12px; font-size: 14px; letter-spacing: 0.04em; text-transform: uppercase; }
.site-nav a:hover { background: var(--dark); }
.header-tools { display: flex; justify-content: flex-end; align-items: center; gap: 16px; padding: 8px 24px; background: var(--dark); }
.search-form input { padding: 6px 10px; border: none; min-width: 220px; }
.search-form button { padding: 6px 12px; border: none; background: var(--gold); color: #fff; cursor: pointer; }
.cart-link { color: #fff; font-size: 14px; }
.cart-link .cart-count { background: var(--gold); border-radius: 50%; padding: 2px 7px; margin-left: 4px; font-size: 12px; }
main { max-width: 1200px; margin: 0 auto; padding: 24px 16px 64px; }
.section-title { font-size: 22px; text-transform: uppercase; letter-spacing: 0.08em; margin: 32px 0 16px; border-bottom: 2px solid var(--gold); padding-bottom: 8px; }
.carousel { position: relative; overflow: hidden; background: var(--dark); color: #fff; }
.carousel-slide { display: none; padding: 64px 32px; text-align: center; min-height: 260px; }
.carousel-slide.active { display: block; }
.carousel-slide h2 { font-size: 32px; margin-bottom: 12px; text-transform: uppercase; }
.carousel-slide p { color: #d8cdb8; margin-bottom: 20px; }
.carousel-slide .cta { display: inline-block; background: var(--gold); color: #fff; padding: 10px 28px; text-transform: uppercase; font-size: 14px; }
.carousel-dots { position: absolute; bottom: 14px; width: 100%; text-align: center; }
.carousel-dots button { width: 10px; height: 10px; border-radius: 50%; border: none; background: #6b5a3e; margin: 0 4px; cursor: pointer; }
.carousel-dots button.active { background: var(--gold); }
.tile-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 16px; }
.category-tile { position: relative; display: block; aspect-ratio: 4 / 3; background: var(--dark); overflow: hidden; }
.category-tile img { width: 100%; height: 100%; object-fit: cover; opacity: 0.75; }
.category-tile span { position: absolute; left: 0; right: 0; bottom: 0; padding: 12px; background: rgba(34, 24, 4, 0.85); color: #fff; text-align: center; letter-spacing: 0.08em; }
.product-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px; }
.product-card { background: #fff; border: 1px solid #e3dccd; display: flex; flex-direction: column; }
.product-card .card-image { position: relative; aspect-ratio: 1; background: #f1ece2; }
.product-card .card-image img { width: 100%; height: 100%; object-fit: contain; }
.promo-badge { position: absolute; top: 8px; left: 8px; background: var(--gold); color: #fff; font-size: 12px; padding: 3px 8px; text-transform: uppercase; }
.card-body { padding: 12px; display: flex; flex-direction: column; gap: 8px; flex: 1; }
.card-title { font-size: 15px; line-height: 1.3; flex: 1; }
.card-price { font-weight: bold; }
.card-price .compare-at { text-decoration: line-through; color: #9a8c72; font-weight: normal; margin-left: 8px; }
.card-link { display: block; text-align: center; background: var(--dark); color: #fff; padding: 8px; font-size: 13px; text-transform: uppercase; }
.card-link:hover { background: var(--gold); }
.brand-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 16px; }
.brand-card { display: flex; align-items: center; justify-content: center; background: #fff; border: 1px solid #e3dccd; min-height: 90px; font-size: 17px; letter-spacing: 0.04em; }
.brand-card:hover { border-color: var(--gold); color: var(--gold); }
.all-brands-link { display: inline-block; margin-top: 16px; color: var(--gold); text-transform: uppercase; font-size: 14px; border-bottom: 1px solid var(--gold); }
.product-page { display: grid; grid-template-columns: minmax(280px, 1fr) minmax(280px, 1fr); gap: 40px; }
@media (max-width: 760px) { .product-page { grid-template-columns: 1fr; } }
.product-gallery .gallery-main { background: #fff; border: 1px solid #e3dccd; aspect-ratio: 1; }
.product-gallery .gallery-main img { width: 100%; height: 100%; object-fit: contain; }
.gallery-thumbs { display: flex; gap: 8px; margin-top: 8px; flex-wrap: wrap; }
.gallery-thumbs img { width: 64px; height: 64px; object-fit: cover; border: 1px solid #e3dccd; }
.product-info .vendor { color: var(--gold); text-transform: uppercase; font-size: 13px; letter-spacing: 0.08em; }
.product-info h1 { font-size: 26px; margin: 8px 0 16px; }
.product-price { font-size: 22px; font-weight: bold; margin-bottom: 16px; }
.product-price .compare-at { text-decoration: line-through; color: #9a8c72; font-weight: normal; font-size: 17px; margin-left: 10px; }
.unavailable { color: #a33; font-weight: bold; margin-bottom: 16px; }
.option-group { margin-bottom: 16px; }
.option-group .option-name { font-size: 13px; text-transform: uppercase; margin-bottom: 6px; }
.option-values { display: flex; flex-wrap: wrap; gap: 8px; }
.option-values a { border: 1px solid #c9bfa8; padding: 6px 14px; font-size: 14px; }
.option-values a.selected { border-color: var(--dark); background: var(--dark); color: #fff; }
.add-form { display: flex; gap: 12px; align-items: center; margin: 20px 0; }
.add-form input[type=number] { width: 70px; padding: 9px; border: 1px solid #c9bfa8; }
.add-button { background: var(--gold); color: #fff; border: none; padding: 12px 32px; text-transform: uppercase; cursor: pointer; font-size: 14px; }
.add-button:hover { background: var(--dark); }
.product-description { margin-top: 24px; line-height: 1.6; }
.cart-table { width: 100%; border-collapse: collapse; background: #fff; }
.cart-table th { text-align: left; border-bottom: 2px solid var(--dark); padding: 10px; font-size: 13px; text-transform: uppercase; }
.cart-table td { border-bottom: 1px solid #e3dccd; padding: 10px; vertical-align: middle; }
.cart-item-image { width: 64px; height: 64px; object-fit: contain; background: #f1ece2; }
.cart-item-variant { color: #8a7b60; font-size: 13px; }
.qty-controls { display: flex; align-items: center; gap: 8px; }
.qty-controls button { width: 28px; height: 28px; border: 1px solid #c9bfa8; background: #fff; cursor: pointer; }
.remove-button { border: none; background: none; color: #a33; cursor: pointer; font-size: 13px; text-decoration: underline; }
.cart-summary { margin-top: 24px; max-width: 360px; margin-left: auto; background: #fff; border: 1px solid #e3dccd; padding: 20px; }
.cart-summary h2 { font-size: 18px; text-transform: uppercase; margin-bottom: 12px; }
.summary-row { display: flex; justify-content: space-between; padding: 6px 0; }
.summary-row.total { border-top: 1px solid var(--dark); margin-top: 8px; padding-top: 12px; font-weight: bold; font-size: 18px; }
.clear-cart { margin-top: 16px; }
.clear-cart button { border: none; background: none; color: #8a7b60; cursor: pointer; text-decoration: underline; font-size: 13px; }
.empty-state { text-align: center; padding: 64px 16px; }
.empty-state p { margin-bottom: 20px; color: #8a7b60; }
.empty-state a { color: var(--gold); border-bottom: 1px solid var(--gold); }
.continue-shopping { display: inline-block; margin-top: 12px; color: var(--gold); border-bottom: 1px solid var(--gold); }
.site-footer { background: var(--dark); color: #d8cdb8; margin-top: 48px; }
.footer-columns { max-width: 1200px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 32px; padding: 40px 16px; }
.footer-columns h3 { color: #fff; font-size: 15px; text-transform: uppercase; margin-bottom: 12px; }
.footer-columns li { list-style: none; padding: 3px 0; font-size: 14px; }
.newsletter-form { display: flex; margin-top: 8px; }
.newsletter-form input { flex: 1; padding: 8px; border: none; }
.newsletter-form button { background: var(--gold); color: #fff; border: none; padding: 8px 14px; cursor: pointer; }
.footer-bottom { text-align: center; padding: 16px; border-top: 1px solid #3a2d12; font-size: 13px; }
"#;

/// Wrap rendered sections into the full HTML document.
pub fn render_document(title: &str, cart: &CartStore, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} | Inkorner</title>
    <style>{styles}</style>
</head>
<body>
    <div class="logo-band"><a href="/"><img src="/logo.svg" alt="Inkorner"></a></div>
{header}
    <main>
{body}
    </main>
{footer}
</body>
</html>"#,
        title = escape_html(title),
        styles = STOREFRONT_STYLES,
        header = header::render_header(cart),
        body = body,
        footer = footer::render_footer(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_commerce::CartStore;

    #[test]
    fn test_document_wraps_body() {
        let cart = CartStore::default();
        let doc = render_document("Accueil", &cart, "<p>bienvenue</p>");
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(r#"<html lang="fr">"#));
        assert!(doc.contains("<title>Accueil | Inkorner</title>"));
        assert!(doc.contains("<p>bienvenue</p>"));
        assert!(doc.contains("--gold: #9f7833"));
        assert!(doc.contains("--dark: #221804"));
    }

    #[test]
    fn test_document_escapes_title() {
        let cart = CartStore::default();
        let doc = render_document("Recherche : <script>", &cart, "");
        assert!(doc.contains("Recherche : &lt;script&gt; | Inkorner"));
    }
}
