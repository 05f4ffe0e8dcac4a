//! Tabbed featured products.

use storefront_core::LoadState;
use storefront_data::{CatalogSource, ProductQuery};
use storefront_streaming::html::escape;

use crate::context::PageContext;
use crate::data::{FeaturedTab, ProductBuckets, ProductView};
use crate::sections::product_card::render_product_card;

/// Placeholder cards shown while products load.
pub const PRODUCT_SKELETONS: usize = 4;

/// Default product request size.
pub const FEATURED_LIMIT: u32 = 12;

/// Featured products state: loaded buckets and the selected tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeaturedProducts {
    pub state: LoadState<ProductBuckets>,
    pub tab: FeaturedTab,
}

impl FeaturedProducts {
    pub fn loaded(products: Vec<ProductView>) -> Self {
        Self {
            state: LoadState::Loaded(ProductBuckets::from_products(products)),
            tab: FeaturedTab::default(),
        }
    }

    /// Select a tab by key. Unknown keys leave the selection unchanged.
    pub fn select_tab(&mut self, key: &str) -> bool {
        match FeaturedTab::from_key(key) {
            Some(tab) => {
                self.tab = tab;
                true
            }
            None => false,
        }
    }

    /// Products of the selected tab; empty while loading.
    pub fn visible(&self) -> &[ProductView] {
        self.state.loaded().map(|b| b.get(self.tab)).unwrap_or_default()
    }

    pub fn render(&self, ctx: PageContext) -> String {
        render_featured(self, ctx)
    }
}

/// Fetch and normalize products once. Failures yield no products.
pub async fn load_products<C>(source: &C, limit: u32) -> Vec<ProductView>
where
    C: CatalogSource + ?Sized,
{
    match source.products(&ProductQuery { limit }).await {
        Ok(page) => page.products.into_iter().map(ProductView::from_raw).collect(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load featured products");
            Vec::new()
        }
    }
}

fn tab_label(tab: FeaturedTab, ctx: PageContext) -> &'static str {
    let s = &ctx.t.sections;
    match tab {
        FeaturedTab::BestSellers => s.best_sellers,
        FeaturedTab::New => s.new_arrivals,
        FeaturedTab::Deals => s.deals,
    }
}

fn render_panel_body(products: &[ProductView], ctx: PageContext) -> String {
    if products.is_empty() {
        return format!(
            r#"<div class="empty-state">{}</div>"#,
            ctx.pick("Aucun produit pour le moment", "لا توجد منتجات حاليا")
        );
    }
    let cards: String = products.iter().map(|p| render_product_card(p, ctx)).collect();
    format!(r#"<div class="product-grid">{cards}</div>"#)
}

/// Render the tab list and panels. While loading only the active panel is
/// rendered, with skeleton cards.
pub fn render_featured(featured: &FeaturedProducts, ctx: PageContext) -> String {
    let tabs: String = FeaturedTab::ALL
        .iter()
        .map(|tab| {
            let selected = *tab == featured.tab;
            format!(
                r#"<button role="tab" class="tab{active}" data-tab="{key}" aria-selected="{selected}">{label}</button>"#,
                active = if selected { " active" } else { "" },
                key = tab.key(),
                selected = selected,
                label = escape(tab_label(*tab, ctx)),
            )
        })
        .collect();

    let (state, panels) = match &featured.state {
        LoadState::Loading => (
            "loading",
            format!(
                r#"<div role="tabpanel" class="tab-panel" data-panel="{}">{}</div>"#,
                featured.tab.key(),
                render_featured_skeleton()
            ),
        ),
        LoadState::Loaded(buckets) => (
            "loaded",
            FeaturedTab::ALL
                .iter()
                .map(|tab| {
                    format!(
                        r#"<div role="tabpanel" class="tab-panel" data-panel="{key}"{hidden}>{body}</div>"#,
                        key = tab.key(),
                        hidden = if *tab == featured.tab { "" } else { " hidden" },
                        body = render_panel_body(buckets.get(*tab), ctx),
                    )
                })
                .collect(),
        ),
    };

    format!(
        r#"<section class="featured" data-section="featured" data-state="{state}">
    <div class="section-header split">
        <div>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
        <a href="/shop" class="view-all">{view_all}</a>
    </div>
    <div role="tablist" class="tabs">{tabs}</div>
    {panels}
</section>"#,
        state = state,
        title = escape(ctx.t.sections.featured),
        subtitle = ctx.pick("Notre sélection pour vous", "اختيارنا لك"),
        view_all = escape(ctx.t.sections.view_all),
        tabs = tabs,
        panels = panels,
    )
}

/// Placeholder product cards.
pub fn render_featured_skeleton() -> String {
    format!(
        r#"<div class="product-grid">{}</div>"#,
        r#"<div class="product-card skeleton"></div>"#.repeat(PRODUCT_SKELETONS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Locale;
    use storefront_data::RawProduct;

    fn products(json: &str) -> Vec<ProductView> {
        serde_json::from_str::<Vec<RawProduct>>(json)
            .unwrap()
            .into_iter()
            .map(ProductView::from_raw)
            .collect()
    }

    #[test]
    fn test_loading_shows_four_skeletons() {
        let html = FeaturedProducts::default().render(PageContext::new(Locale::Fr));
        assert_eq!(html.matches("product-card skeleton").count(), PRODUCT_SKELETONS);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 1);
        assert!(html.contains(r#"data-state="loading""#));
    }

    #[test]
    fn test_tab_selection() {
        let mut featured = FeaturedProducts::loaded(products(
            r#"[{"id": 1, "is_featured": true}, {"id": 2, "price_dzd": 10, "compare_at_price_dzd": 20}]"#,
        ));
        assert_eq!(featured.tab, FeaturedTab::BestSellers);
        assert_eq!(featured.visible().len(), 1);

        assert!(featured.select_tab("deals"));
        assert_eq!(featured.visible()[0].id.as_str(), "2");

        assert!(!featured.select_tab("trending"));
        assert_eq!(featured.tab, FeaturedTab::Deals);

        assert!(featured.select_tab("new"));
        assert_eq!(featured.visible().len(), 2);
    }

    #[test]
    fn test_empty_bucket_message() {
        let featured = FeaturedProducts::loaded(products(r#"[{"id": 1}]"#));
        let html = featured.render(PageContext::new(Locale::Fr));
        // best sellers and deals are empty, new has the product
        assert_eq!(html.matches("Aucun produit pour le moment").count(), 2);
        assert_eq!(html.matches(r#"role="tabpanel""#).count(), 3);
        assert_eq!(html.matches(" hidden>").count(), 2);

        let ar = FeaturedProducts::loaded(Vec::new()).render(PageContext::new(Locale::Ar));
        assert_eq!(ar.matches("لا توجد منتجات حاليا").count(), 3);
    }

    #[test]
    fn test_active_tab_marked() {
        let mut featured = FeaturedProducts::loaded(Vec::new());
        featured.select_tab("new");
        let html = featured.render(PageContext::new(Locale::Fr));
        assert!(html.contains(r#"data-tab="new" aria-selected="true""#));
        assert!(html.contains(r#"data-tab="bestSellers" aria-selected="false""#));
    }
}
