//! Not-found and failure states.

use super::escape_html;

/// Render the 404 body.
pub fn render_not_found() -> String {
    r#"    <section class="not-found">
        <div class="empty-state">
            <h1 class="section-title">Page introuvable</h1>
            <p>La page que vous cherchez n&#39;existe pas ou a été déplacée.</p>
            <a href="/">Retour à l&#39;accueil</a>
        </div>
    </section>"#
        .to_string()
}

/// Render a recoverable failure notice inside an otherwise working page.
pub fn render_error_notice(message: &str) -> String {
    format!(
        r#"    <section class="error-notice">
        <div class="empty-state">
            <p>{message}</p>
            <a href="/">Retour à l&#39;accueil</a>
        </div>
    </section>"#,
        message = escape_html(message),
    )
}
