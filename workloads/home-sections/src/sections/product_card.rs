//! Product card and dinar price formatting.

use storefront_core::Locale;
use storefront_streaming::html::{encode_query_value, escape};

use crate::context::PageContext;
use crate::data::ProductView;

/// Format a dinar amount with space-grouped thousands: `4 000 DA` / `4 000 دج`.
pub fn format_dzd(amount: i64, locale: Locale) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}{grouped} {}", locale.pick("DA", "دج"))
}

/// Render one product card.
pub fn render_product_card(product: &ProductView, ctx: PageContext) -> String {
    let locale = ctx.locale;
    let name = escape(product.name.text(locale));

    let media = match product.images.first() {
        Some(url) => format!(r#"<img src="{}" alt="{}" loading="lazy">"#, escape(url), name),
        None => r#"<div class="image-placeholder"></div>"#.to_string(),
    };

    let mut badges = String::new();
    if let Some(pct) = product.discount_percent() {
        badges.push_str(&format!(r#"<span class="badge badge-deal">-{pct}%</span>"#));
    }
    if product.is_best_seller {
        badges.push_str(&format!(
            r#"<span class="badge badge-best">{}</span>"#,
            escape(ctx.t.sections.best_sellers)
        ));
    }
    if !product.in_stock {
        badges.push_str(&format!(
            r#"<span class="badge badge-stock">{}</span>"#,
            ctx.pick("Rupture de stock", "نفد من المخزون")
        ));
    }

    let compare = match product.compare_at_price.filter(|_| product.is_deal) {
        Some(c) => format!(r#" <s class="compare-at">{}</s>"#, format_dzd(c, locale)),
        None => String::new(),
    };

    let brand = if product.brand.is_empty() {
        String::new()
    } else {
        format!(r#"<p class="brand">{}</p>"#, escape(&product.brand))
    };

    format!(
        r#"<a class="product-card{oos}" href="/product/{slug}" data-product="{id}">
    <div class="product-media">{media}<div class="badges">{badges}</div></div>
    <div class="product-body">
        {brand}<h3>{name}</h3>
        <p class="price"><strong>{price}</strong>{compare}</p>
    </div>
</a>"#,
        oos = if product.in_stock { "" } else { " out-of-stock" },
        slug = encode_query_value(&product.slug),
        id = escape(product.id.as_str()),
        media = media,
        badges = badges,
        brand = brand,
        name = name,
        price = format_dzd(product.price, locale),
        compare = compare,
    )
}
