//! Site footer: contact details, social links, newsletter signup.

/// Render the site footer.
pub fn render_footer() -> String {
    r#"    <footer class="site-footer">
        <div class="footer-columns">
            <div>
                <h3>Contact</h3>
                <ul>
                    <li>Inkorner Sàrl</li>
                    <li>Rue du Commerce 12</li>
                    <li>1003 Lausanne</li>
                    <li>info@inkorner.ch</li>
                </ul>
            </div>
            <div>
                <h3>Suivez-nous</h3>
                <ul>
                    <li><a href="https://www.instagram.com/inkorner" rel="noopener">Instagram @inkorner</a></li>
                    <li><a href="https://www.facebook.com/inkorner" rel="noopener">Facebook</a></li>
                </ul>
            </div>
            <div>
                <h3>Newsletter</h3>
                <p>Recevez nos nouveautés et promotions.</p>
                <form class="newsletter-form" action="/newsletter" method="post">
                    <input type="email" name="email" placeholder="Votre e-mail" required>
                    <button type="submit">S&#39;inscrire</button>
                </form>
            </div>
        </div>
        <div class="footer-bottom">&copy; Inkorner - Fournitures professionnelles pour tatoueurs</div>
    </footer>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footer_columns() {
        let html = render_footer();
        assert!(html.contains("<h3>Contact</h3>"));
        assert!(html.contains("Instagram @inkorner"));
        assert!(html.contains("<h3>Newsletter</h3>"));
    }
}
