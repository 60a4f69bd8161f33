//! Cart page: line table with quantity controls, summary, clear action.

use super::escape_html;
use ink_commerce::{CartStore, LineItem};

/// Render the cart page body.
pub fn render_cart(cart: &CartStore) -> String {
    let items = cart.items();
    if items.is_empty() {
        return r#"    <section class="cart-page">
        <h1 class="section-title">Votre panier</h1>
        <div class="empty-state">
            <p>Votre panier est vide.</p>
            <a href="/">Continuer vos achats</a>
        </div>
    </section>"#
            .to_string();
    }

    let rows: String = items.iter().map(render_cart_row).collect();
    format!(
        r#"    <section class="cart-page">
        <h1 class="section-title">Votre panier</h1>
        <table class="cart-table">
            <thead>
                <tr>
                    <th></th>
                    <th>Produit</th>
                    <th>Prix</th>
                    <th>Quantité</th>
                    <th>Total</th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
{rows}            </tbody>
        </table>
{summary}        <form class="clear-cart" action="/panier/vider" method="post">
            <button type="submit">Vider le panier</button>
        </form>
        <a class="continue-shopping" href="/">Continuer vos achats</a>
    </section>"#,
        rows = rows,
        summary = render_summary(cart),
    )
}

fn render_cart_row(item: &LineItem) -> String {
    let image = match &item.image {
        Some(url) => format!(
            r#"<img class="cart-item-image" src="{url}" alt="{alt}">"#,
            url = escape_html(url),
            alt = escape_html(&item.title),
        ),
        None => String::new(),
    };

    let title = match &item.handle {
        Some(handle) => format!(
            r#"<a href="/product/{handle}">{title}</a>"#,
            handle = escape_html(handle),
            title = escape_html(&item.title),
        ),
        None => escape_html(&item.title),
    };
    let variant = match &item.variant_name {
        Some(name) => format!(
            r#"<p class="cart-item-variant">{}</p>"#,
            escape_html(name)
        ),
        None => String::new(),
    };

    // Each +/- is its own form posting the target quantity; quantity 0
    // on the minus of a single unit removes the line.
    let line_total = item
        .unit_price
        .checked_mul(item.quantity)
        .unwrap_or(item.unit_price);
    format!(
        r#"                <tr>
                    <td>{image}</td>
                    <td>{title}{variant}</td>
                    <td>{price}</td>
                    <td>
                        <div class="qty-controls">
                            <form action="/panier/quantite" method="post">
                                <input type="hidden" name="variant_id" value="{id}">
                                <input type="hidden" name="quantity" value="{minus}">
                                <button type="submit" aria-label="Réduire">-</button>
                            </form>
                            <span>{quantity}</span>
                            <form action="/panier/quantite" method="post">
                                <input type="hidden" name="variant_id" value="{id}">
                                <input type="hidden" name="quantity" value="{plus}">
                                <button type="submit" aria-label="Augmenter">+</button>
                            </form>
                        </div>
                    </td>
                    <td>{total}</td>
                    <td>
                        <form action="/panier/retirer" method="post">
                            <input type="hidden" name="variant_id" value="{id}">
                            <button class="remove-button" type="submit">Retirer</button>
                        </form>
                    </td>
                </tr>
"#,
        image = image,
        title = title,
        variant = variant,
        price = item.unit_price.display(),
        id = escape_html(item.id.as_str()),
        minus = item.quantity - 1,
        plus = item.quantity + 1,
        quantity = item.quantity,
        total = line_total.display(),
    )
}

fn render_summary(cart: &CartStore) -> String {
    // No shipping or tax lines yet, so the subtotal equals the total.
    let total = cart.total().display();
    format!(
        r#"        <div class="cart-summary">
            <h2>Récapitulatif</h2>
            <div class="summary-row"><span>Articles</span><span>{count}</span></div>
            <div class="summary-row"><span>Sous-total</span><span>{subtotal}</span></div>
            <div class="summary-row total"><span>Total</span><span>{total}</span></div>
        </div>
"#,
        count = cart.item_count(),
        subtotal = total,
        total = total,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink_commerce::money::{Currency, Money};
    use ink_commerce::LineItemInput;

    fn chf(cents: i64) -> Money {
        Money::new(cents, Currency::CHF)
    }

    fn store_with_ink() -> CartStore {
        let store = CartStore::default();
        store
            .add_item(
                LineItemInput::new("var-1".into(), "Encre Panthera", chf(3500))
                    .with_handle("encre-panthera")
                    .with_variant_name("150ml")
                    .with_image("https://cdn.example/ink.jpg"),
                2,
            )
            .unwrap();
        store
    }

    #[test]
    fn test_empty_cart_state() {
        let html = render_cart(&CartStore::default());
        assert!(html.contains("Votre panier est vide."));
        assert!(!html.contains("cart-table"));
        assert!(!html.contains("Vider le panier"));
    }

    #[test]
    fn test_cart_rows_and_summary() {
        let html = render_cart(&store_with_ink());
        assert!(html.contains(r#"<a href="/product/encre-panthera">Encre Panthera</a>"#));
        assert!(html.contains(r#"<p class="cart-item-variant">150ml</p>"#));
        assert!(html.contains("35.00 CHF"));
        assert!(html.contains("70.00 CHF"));
        assert!(html.contains("<h2>Récapitulatif</h2>"));
        assert!(html.contains("Sous-total"));
        assert!(html.contains(r#"action="/panier/vider""#));
        assert!(html.contains(r#"class="continue-shopping""#));
    }

    #[test]
    fn test_quantity_forms_post_adjacent_values() {
        let html = render_cart(&store_with_ink());
        assert!(html.contains(r#"name="quantity" value="1""#));
        assert!(html.contains(r#"name="quantity" value="3""#));
        assert!(html.contains(r#"action="/panier/retirer""#));
    }

    #[test]
    fn test_item_without_handle_is_plain_text() {
        let store = CartStore::default();
        store
            .add_item(LineItemInput::new("var-2".into(), "Savon", chf(1250)), 1)
            .unwrap();
        let html = render_cart(&store);
        assert!(html.contains("<td>Savon</td>"));
        assert!(!html.contains(r#"href="/product/"#));
    }
}
