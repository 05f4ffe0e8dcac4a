//! Product view model and the featured-product buckets.

use storefront_core::Localized;
use storefront_data::{RawProduct, RecordId};

/// A catalog product shaped for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductView {
    pub id: RecordId,
    pub slug: String,
    pub name: Localized<String>,
    pub description: Localized<String>,
    /// Price in dinars.
    pub price: i64,
    pub compare_at_price: Option<i64>,
    pub images: Vec<String>,
    pub category: String,
    pub department: String,
    pub brand: String,
    pub rating: u8,
    pub review_count: u32,
    pub in_stock: bool,
    pub stock_count: i64,
    pub is_new: bool,
    pub is_best_seller: bool,
    pub is_deal: bool,
    pub created_at: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// French text, or `""`; Arabic text, or the French text.
fn bilingual(fr: Option<String>, ar: Option<String>) -> Localized<String> {
    let fr = non_empty(fr).unwrap_or_default();
    let ar = non_empty(ar).unwrap_or_else(|| fr.clone());
    Localized::new(fr, ar)
}

fn dinars(amount: f64) -> i64 {
    amount.round() as i64
}

impl ProductView {
    pub fn from_raw(raw: RawProduct) -> Self {
        let compare_at = raw.compare_at_price_dzd.filter(|v| *v != 0.0);
        let is_deal = matches!((compare_at, raw.price_dzd), (Some(c), Some(p)) if c > p);
        let stock_count = raw.stock.unwrap_or(0);

        Self {
            id: raw.id,
            slug: raw.slug.unwrap_or_default(),
            name: bilingual(raw.title_fr, raw.title_ar),
            description: bilingual(raw.description_fr, raw.description_ar),
            price: raw.price_dzd.map(dinars).unwrap_or(0),
            compare_at_price: compare_at.map(dinars),
            images: raw.product_images.into_iter().filter_map(|i| i.url).collect(),
            category: raw.categories.and_then(|c| c.slug).unwrap_or_default(),
            department: raw.departments.and_then(|d| d.slug).unwrap_or_default(),
            brand: raw.brands.and_then(|b| b.name).unwrap_or_default(),
            rating: 5,
            review_count: 0,
            in_stock: stock_count > 0,
            stock_count,
            is_new: false,
            is_best_seller: raw.is_featured.unwrap_or(false),
            is_deal,
            created_at: raw.created_at,
        }
    }

    /// Whole-percent discount off the compare-at price, for deals.
    pub fn discount_percent(&self) -> Option<u32> {
        let compare = self.compare_at_price.filter(|_| self.is_deal)?;
        if compare <= 0 {
            return None;
        }
        let off = (compare - self.price) as f64 / compare as f64 * 100.0;
        Some(off.round() as u32)
    }

    fn recency_key(&self) -> &str {
        self.created_at.as_deref().unwrap_or("")
    }
}

/// The three featured-product tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeaturedTab {
    #[default]
    BestSellers,
    New,
    Deals,
}

impl FeaturedTab {
    pub const ALL: [FeaturedTab; 3] = [FeaturedTab::BestSellers, FeaturedTab::New, FeaturedTab::Deals];

    /// Tab key used in markup and for selection.
    pub fn key(&self) -> &'static str {
        match self {
            FeaturedTab::BestSellers => "bestSellers",
            FeaturedTab::New => "new",
            FeaturedTab::Deals => "deals",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }
}

/// Products grouped by tab.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductBuckets {
    /// Flagged products, in source order.
    pub best_sellers: Vec<ProductView>,
    /// Every product, most recent first.
    pub new_arrivals: Vec<ProductView>,
    pub deals: Vec<ProductView>,
}

impl ProductBuckets {
    pub fn from_products(products: Vec<ProductView>) -> Self {
        let best_sellers = products.iter().filter(|p| p.is_best_seller).cloned().collect();
        let deals = products.iter().filter(|p| p.is_deal).cloned().collect();

        let mut new_arrivals = products;
        new_arrivals.sort_by(|a, b| b.recency_key().cmp(a.recency_key()));

        Self {
            best_sellers,
            new_arrivals,
            deals,
        }
    }

    pub fn get(&self, tab: FeaturedTab) -> &[ProductView] {
        match tab {
            FeaturedTab::BestSellers => &self.best_sellers,
            FeaturedTab::New => &self.new_arrivals,
            FeaturedTab::Deals => &self.deals,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new_arrivals.is_empty()
    }
}
