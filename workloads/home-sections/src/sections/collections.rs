//! Curated collections.

use storefront_streaming::html::{encode_query_value, escape};

use crate::context::PageContext;
use crate::data::Collection;

/// Render one tile per collection.
pub fn render_collections(collections: &[Collection], ctx: PageContext) -> String {
    let tiles: String = collections
        .iter()
        .map(|col| {
            format!(
                r#"<a class="collection-tile" href="/shop?collection={slug}">
    <span class="collection-icon" style="background: linear-gradient(135deg, {from}, {to})"></span>
    <h3>{name}</h3>
    <p>{description}</p>
    <span class="collection-count">{count} {unit}</span>
</a>"#,
                slug = encode_query_value(col.slug),
                from = col.gradient.0,
                to = col.gradient.1,
                name = escape(col.name.text(ctx.locale)),
                description = escape(col.description.text(ctx.locale)),
                count = col.product_count,
                unit = ctx.pick("produits", "منتج"),
            )
        })
        .collect();

    format!(
        r#"<section class="collections muted" data-section="collections">
    <div class="section-header">
        <h2>{title}</h2>
        <p>{subtitle}</p>
    </div>
    <div class="collection-grid">{tiles}</div>
</section>"#,
        title = escape(ctx.t.sections.collections),
        subtitle = ctx.pick("Des packs pensés pour chaque besoin", "حزم مصممة لكل حاجة"),
        tiles = tiles,
    )
}
