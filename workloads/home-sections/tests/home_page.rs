use std::convert::Infallible;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use home_sections::mount::{MountedDepartments, MountedFeatured, MountedHomePage, MountedSlider};
use home_sections::sections::{DEPARTMENT_SKELETONS, PRODUCT_SKELETONS};
use home_sections::{HomePage, PageContext, SectionId};
use storefront_core::{Locale, StorefrontConfig, TimingContext};
use storefront_data::{
    CatalogSource, Department, FetchError, FixtureCatalog, ProductPage, ProductQuery, TaxonomyPayload,
};
use storefront_runtime::{Commit, Lifecycle};
use storefront_streaming::StreamingSink;
use tokio::sync::Notify;

fn fixtures() -> FixtureCatalog {
    FixtureCatalog::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"))
}

/// Every call fails.
struct FailingCatalog;

#[async_trait]
impl CatalogSource for FailingCatalog {
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError> {
        Err(FetchError::Request("connection refused".into()))
    }

    async fn products(&self, _query: &ProductQuery) -> Result<ProductPage, FetchError> {
        Err(FetchError::Http {
            status: 503,
            url: "http://catalog/products".into(),
        })
    }
}

/// Responds only once the gate opens.
struct GatedCatalog {
    gate: Arc<Notify>,
}

#[async_trait]
impl CatalogSource for GatedCatalog {
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError> {
        self.gate.notified().await;
        Ok(TaxonomyPayload::Departments(vec![Department {
            slug: "audio".into(),
            ..Department::default()
        }]))
    }

    async fn products(&self, _query: &ProductQuery) -> Result<ProductPage, FetchError> {
        self.gate.notified().await;
        Ok(ProductPage::default())
    }
}

/// Returns an object instead of a list.
struct ObjectTaxonomy;

#[async_trait]
impl CatalogSource for ObjectTaxonomy {
    async fn mega_menu_taxonomy(&self) -> Result<TaxonomyPayload, FetchError> {
        Ok(TaxonomyPayload::Other(serde_json::json!({ "departments": [] })))
    }

    async fn products(&self, _query: &ProductQuery) -> Result<ProductPage, FetchError> {
        Ok(ProductPage::default())
    }
}

#[tokio::test(start_paused = true)]
async fn test_slider_auto_advances_until_unmount() {
    let root = Lifecycle::new();
    let slider = MountedSlider::mount(&root, Duration::from_secs(5));
    let view = slider.view();

    tokio::time::sleep(Duration::from_millis(4_900)).await;
    assert_eq!(view.get().current(), 0);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(view.get().current(), 1);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(view.get().current(), 2);

    slider.unmount();
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(view.get().current(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_slider_wraps_and_accepts_selection() {
    let root = Lifecycle::new();
    let slider = MountedSlider::mount(&root, Duration::from_secs(5));

    slider.select(3);
    assert_eq!(slider.current().current(), 3);
    slider.select(9);
    assert_eq!(slider.current().current(), 3);

    tokio::time::sleep(Duration::from_millis(5_100)).await;
    assert_eq!(slider.current().current(), 0);
}

#[tokio::test]
async fn test_taxonomy_failure_renders_empty_grid() {
    let root = Lifecycle::new();
    let grid = MountedDepartments::mount(&root, Arc::new(FailingCatalog));

    let loaded = grid.loaded().await;
    assert!(!loaded.state.is_loading());
    assert!(loaded.departments().is_empty());

    let html = loaded.render(PageContext::new(Locale::Fr));
    assert_eq!(html.matches("dept-card").count(), 0);
}

#[tokio::test]
async fn test_product_failure_empties_every_tab() {
    let root = Lifecycle::new();
    let featured = MountedFeatured::mount(&root, Arc::new(FailingCatalog), 12);

    let loaded = featured.loaded().await;
    let html = loaded.render(PageContext::new(Locale::Fr));
    assert_eq!(html.matches("Aucun produit pour le moment").count(), 3);
}

#[tokio::test]
async fn test_non_list_taxonomy_is_empty() {
    let root = Lifecycle::new();
    let grid = MountedDepartments::mount(&root, Arc::new(ObjectTaxonomy));
    assert!(grid.loaded().await.departments().is_empty());
}

#[tokio::test]
async fn test_unmount_before_fetch_resolves_discards_result() {
    let gate = Arc::new(Notify::new());
    let root = Lifecycle::new();
    let grid = MountedDepartments::mount(&root, Arc::new(GatedCatalog { gate: gate.clone() }));
    let view = grid.view();

    let pending = grid.unmount();
    gate.notify_one();

    assert_eq!(pending.await.unwrap(), Commit::Discarded);
    assert!(view.get().state.is_loading());
}

#[tokio::test]
async fn test_fetch_after_gate_commits_while_mounted() {
    let gate = Arc::new(Notify::new());
    let root = Lifecycle::new();
    let grid = MountedDepartments::mount(&root, Arc::new(GatedCatalog { gate: gate.clone() }));

    assert!(grid.current().state.is_loading());
    let html = grid.current().render(PageContext::new(Locale::Fr));
    assert_eq!(html.matches("dept-card skeleton").count(), DEPARTMENT_SKELETONS);

    gate.notify_one();
    let loaded = grid.loaded().await;
    assert_eq!(loaded.departments()[0].slug, "audio");
    assert_eq!(grid.unmount().await.unwrap(), Commit::Applied);
}

#[tokio::test]
async fn test_tab_selection_survives_load() {
    let gate = Arc::new(Notify::new());
    let root = Lifecycle::new();
    let featured = MountedFeatured::mount(&root, Arc::new(GatedCatalog { gate: gate.clone() }), 12);

    featured.select_tab("deals");
    let html = featured.current().render(PageContext::new(Locale::Fr));
    assert_eq!(html.matches("product-card skeleton").count(), PRODUCT_SKELETONS);

    gate.notify_one();
    let loaded = featured.loaded().await;
    assert_eq!(loaded.tab.key(), "deals");
}

#[tokio::test]
async fn test_mounted_page_from_fixtures() {
    let config = StorefrontConfig::default();
    let page = MountedHomePage::mount(Arc::new(fixtures()), &config);

    let snapshot = page.snapshot().await;
    assert!(!page.is_loading());
    assert_eq!(snapshot.departments.departments().len(), 2);

    let buckets = snapshot.featured.state.loaded().unwrap();
    let ids = |items: &[home_sections::data::ProductView]| -> Vec<String> {
        items.iter().map(|p| p.id.to_string()).collect()
    };
    assert_eq!(ids(&buckets.best_sellers), ["101", "103"]);
    assert_eq!(ids(&buckets.new_arrivals), ["102", "101", "103"]);
    assert_eq!(ids(&buckets.deals), ["101"]);

    page.unmount();
}

#[tokio::test]
async fn test_streamed_page_order_and_content() {
    let config = StorefrontConfig::default();
    let page = HomePage::load(&fixtures(), &config).await;

    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> = StreamingSink::new(Vec::new(), TimingContext::new());
    page.stream(&mut sink, PageContext::new(Locale::Ar), "Computer House")
        .await
        .unwrap();

    let expected: Vec<String> = SectionId::ALL.iter().map(|id| id.name().to_string()).collect();
    assert_eq!(sink.sections_sent(), expected.as_slice());

    let html = String::from_utf8(sink.into_inner().concat()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
    assert!(html.contains("إعلام آلي"));
    assert!(html.contains("منتجات أبل"));
    assert_eq!(html.matches("<div class=\"hero-slide").count(), 4);
    assert!(html.contains("/shop?department=son%20%26%20image"));
    assert!(html.contains("4 000 دج"));
    assert!(html.contains("-20%"));
    assert_eq!(html.matches(r#"<article class="testimonial-card">"#).count(), 3);
    assert!(html.contains("https://wa.me/213550000000"));
    assert!(!html.contains("skeleton\""));
}

#[tokio::test]
async fn test_product_limit_is_forwarded() {
    let mut config = StorefrontConfig::default();
    config.catalog.product_limit = 1;
    let page = HomePage::load(&fixtures(), &config).await;
    let buckets = page.featured.state.loaded().unwrap();
    assert_eq!(buckets.new_arrivals.len(), 1);
}
