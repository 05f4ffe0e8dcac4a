//! Trust badges.

use storefront_streaming::html::escape;

use crate::context::PageContext;

/// Render the four trust items from the translation table.
pub fn render_trust(ctx: PageContext) -> String {
    let trust = &ctx.t.trust;
    let items = [
        ("shield", trust.warranty, trust.warranty_desc),
        ("truck", trust.delivery, trust.delivery_desc),
        ("banknote", trust.cod, trust.cod_desc),
        ("headphones", trust.support, trust.support_desc),
    ];

    let body: String = items
        .iter()
        .map(|(icon, title, desc)| {
            format!(
                r#"<div class="trust-item">
    <span class="trust-icon icon-{icon}"></span>
    <div><h3>{title}</h3><p>{desc}</p></div>
</div>"#,
                icon = icon,
                title = escape(title),
                desc = escape(desc),
            )
        })
        .collect();

    format!(
        r#"<section class="trust" data-section="trust">
    <div class="trust-grid">{body}</div>
</section>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::{Locale, Translations};

    #[test]
    fn test_four_items_per_locale() {
        for locale in Locale::ALL {
            let html = render_trust(PageContext::new(locale));
            let t = Translations::for_locale(locale);
            assert_eq!(html.matches("trust-item").count(), 4);
            assert!(html.contains(&escape(t.trust.cod)));
            assert!(html.contains(&escape(t.trust.support_desc)));
        }
    }
}
