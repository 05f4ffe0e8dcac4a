//! Home page assembly: shell, section order, streaming.

use std::fmt::Display;
use std::time::Duration;

use futures::future::join;
use futures::Sink;
use storefront_core::{SectionError, StorefrontConfig};
use storefront_data::CatalogSource;
use storefront_streaming::{html::escape, HeadContent, Shell, StreamingSink};

use crate::context::PageContext;
use crate::data::{COLLECTIONS, TESTIMONIALS};
use crate::sections::*;

/// Home page sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    Departments,
    Collections,
    Featured,
    Trust,
    Testimonials,
    Newsletter,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::Departments,
        SectionId::Collections,
        SectionId::Featured,
        SectionId::Trust,
        SectionId::Testimonials,
        SectionId::Newsletter,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Departments => "departments",
            SectionId::Collections => "collections",
            SectionId::Featured => "featured",
            SectionId::Trust => "trust",
            SectionId::Testimonials => "testimonials",
            SectionId::Newsletter => "newsletter",
        }
    }

    /// Whether the section waits on catalog data.
    pub fn needs_data(&self) -> bool {
        matches!(self, SectionId::Departments | SectionId::Featured)
    }
}

/// State of every home section at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub hero: HeroSlider,
    pub rotate_interval: Duration,
    pub departments: DepartmentsGrid,
    pub featured: FeaturedProducts,
    pub newsletter: NewsletterSection,
}

impl Default for HomePage {
    fn default() -> Self {
        Self {
            hero: HeroSlider::new(),
            rotate_interval: ROTATE_INTERVAL,
            departments: DepartmentsGrid::default(),
            featured: FeaturedProducts::default(),
            newsletter: NewsletterSection::default(),
        }
    }
}

impl HomePage {
    /// A page with both catalog sections still loading.
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            rotate_interval: config.hero.rotate_interval(),
            newsletter: NewsletterSection::new(config.contact.whatsapp_url.clone()),
            ..Self::default()
        }
    }

    /// Fetch both catalog sections concurrently and return the loaded page.
    pub async fn load<C>(source: &C, config: &StorefrontConfig) -> Self
    where
        C: CatalogSource + ?Sized,
    {
        let (departments, products) = join(
            load_departments(source),
            load_products(source, config.catalog.product_limit),
        )
        .await;

        Self {
            departments: DepartmentsGrid::loaded(departments),
            featured: FeaturedProducts::loaded(products),
            ..Self::new(config)
        }
    }

    pub fn render_section(&self, id: SectionId, ctx: PageContext) -> String {
        match id {
            SectionId::Hero => self.hero.render(ctx, self.rotate_interval),
            SectionId::Departments => self.departments.render(ctx),
            SectionId::Collections => render_collections(&COLLECTIONS, ctx),
            SectionId::Featured => self.featured.render(ctx),
            SectionId::Trust => render_trust(ctx),
            SectionId::Testimonials => render_testimonials(&TESTIMONIALS, ctx),
            SectionId::Newsletter => self.newsletter.render(ctx),
        }
    }

    /// Send `ids` in order to a sink whose shell is already out.
    pub async fn stream_sections<S, E>(
        &self,
        sink: &mut StreamingSink<S, E>,
        ids: &[SectionId],
        ctx: PageContext,
    ) -> Result<(), SectionError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        for id in ids {
            sink.send_section(id.name(), &self.render_section(*id, ctx)).await?;
        }
        Ok(())
    }

    /// Stream the whole page: shell, every section, closing.
    pub async fn stream<S, E>(
        &self,
        sink: &mut StreamingSink<S, E>,
        ctx: PageContext,
        title: &str,
    ) -> Result<(), SectionError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        let shell = home_shell(ctx, title);
        sink.send_shell(&shell.render_opening()).await?;
        self.stream_sections(sink, &SectionId::ALL, ctx).await?;
        sink.finish(&home_closing(&shell)).await
    }

    /// Render the whole page to a string.
    pub fn render_to_string(&self, ctx: PageContext, title: &str) -> String {
        let shell = home_shell(ctx, title);
        let mut html = shell.render_opening();
        for id in SectionId::ALL {
            html.push_str(&self.render_section(id, ctx));
            html.push('\n');
        }
        html.push_str(&home_closing(&shell));
        html
    }
}

/// Document shell for the home page in `ctx.locale`.
pub fn home_shell(ctx: PageContext, title: &str) -> Shell {
    let head = HeadContent::new(title)
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta(
            "description",
            ctx.pick(
                "Informatique, smartphones et accessoires en Algérie. Paiement à la livraison.",
                "إعلام آلي وهواتف وملحقات في الجزائر. الدفع عند الاستلام.",
            ),
        )
        .with_style(HOME_STYLES);

    let other = match ctx.locale {
        storefront_core::Locale::Fr => ("ar", "العربية"),
        storefront_core::Locale::Ar => ("fr", "Français"),
    };

    Shell::new(ctx.locale, head)
        .with_body_start(format!(
            r#"<body>
<header class="site-header">
    <a href="/" class="logo">COMPUTER HOUSE</a>
    <a href="/?lang={code}" class="lang-switch" hreflang="{code}">{label}</a>
</header>
<main>
"#,
            code = other.0,
            label = escape(other.1),
        ))
        .with_body_end("</main>\n</body>\n</html>")
}

/// Closing markup: client behavior script, then the shell end.
pub fn home_closing(shell: &Shell) -> String {
    format!("{}\n{}", HOME_SCRIPT, shell.render_closing())
}

const HOME_SCRIPT: &str = r#"<script>
(function () {
    var hero = document.querySelector('[data-section="hero"]');
    if (hero) {
        var dots = hero.querySelectorAll('.hero-dot');
        var slides = hero.querySelectorAll('.hero-slide');
        var counter = hero.querySelector('.hero-counter');
        var current = parseInt(hero.dataset.current, 10) || 0;
        var go = function (i) {
            slides.forEach(function (s, j) {
                var on = j === i;
                s.hidden = !on;
                s.classList.remove('fade-in');
                if (on) {
                    void s.offsetWidth;
                    s.classList.add('fade-in');
                    hero.style.setProperty('--accent', s.dataset.accent);
                    hero.style.setProperty('--accent-bg', s.dataset.accentBg);
                    if (counter) { counter.textContent = s.dataset.counter; }
                }
            });
            dots.forEach(function (d, j) { d.classList.toggle('active', j === i); });
            hero.dataset.current = i;
            current = i;
        };
        dots.forEach(function (d, i) { d.addEventListener('click', function () { go(i); }); });
        var ms = parseInt(hero.dataset.interval, 10) || 5000;
        setInterval(function () { go((current + 1) % slides.length); }, ms);
    }
    document.querySelectorAll('[data-section="featured"] [role="tab"]').forEach(function (tab) {
        tab.addEventListener('click', function () {
            var key = tab.dataset.tab;
            var root = tab.closest('[data-section="featured"]');
            root.querySelectorAll('[role="tab"]').forEach(function (t) {
                var on = t.dataset.tab === key;
                t.classList.toggle('active', on);
                t.setAttribute('aria-selected', on);
            });
            root.querySelectorAll('[role="tabpanel"]').forEach(function (p) {
                p.hidden = p.dataset.panel !== key;
            });
        });
    });
})();
</script>"#;

const HOME_STYLES: &str = r##"
:root {
    --primary: #4f46e5;
    --primary-fg: #ffffff;
    --bg: #ffffff;
    --muted: #f4f4f5;
    --text: #18181b;
    --text-muted: #71717a;
    --border: #e4e4e7;
    --amber: #fbbf24;
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: 'Inter', 'Cairo', -apple-system, 'Segoe UI', sans-serif;
    background: var(--bg);
    color: var(--text);
    line-height: 1.5;
}

a { color: inherit; text-decoration: none; }

.site-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1rem 2rem;
    border-bottom: 1px solid var(--border);
}

.logo { font-weight: 800; color: var(--primary); }

section { padding: 4rem 1rem; }
section > * { max-width: 80rem; margin-inline: auto; }
section.muted { background: var(--muted); }

.section-header { margin-bottom: 2rem; text-align: center; }
.section-header.split { display: flex; justify-content: space-between; align-items: end; text-align: start; }
.section-header h2 { font-size: 1.875rem; font-weight: 700; }
.section-header p { color: var(--text-muted); font-size: 0.875rem; }
.view-all { color: var(--primary); font-weight: 500; }

/* Hero */
.hero {
    position: relative;
    min-height: 90vh;
    background: var(--accent-bg);
    transition: background-color 0.7s;
}
.hero-brand { position: absolute; top: 2.5rem; inset-inline-start: 3rem; color: var(--accent); }
.hero-brand strong { display: block; font-size: 1.75rem; }
.hero-brand small { letter-spacing: 0.3em; opacity: 0.6; }
.hero-counter { position: absolute; top: 2.5rem; inset-inline-end: 3rem; color: var(--accent); opacity: 0.5; }
.hero-slide { display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; align-items: center; padding-top: 6rem; }
.hero-slide[hidden] { display: none; }
.hero.rtl .hero-text { order: 2; text-align: right; }
.hero-badge { display: inline-block; padding: 0.6rem 1.2rem; border: 2px solid var(--accent); border-radius: 999px; color: var(--accent); font-weight: 600; }
.hero-title { font-size: 5rem; color: var(--accent); line-height: 1.1; margin: 2rem 0 1rem; }
.hero-description { font-size: 1.75rem; color: #374151; }
.hero-features { display: grid; grid-template-columns: repeat(3, 1fr); list-style: none; gap: 1.5rem; margin: 2rem 0; text-align: center; color: #4b5563; }
.hero-actions { display: flex; gap: 1rem; flex-wrap: wrap; }
.btn-primary { background: var(--accent); color: white; padding: 1rem 2rem; border-radius: 999px; font-weight: 600; }
.btn-outline { border: 2px solid var(--accent); color: var(--accent); padding: 1rem 2rem; border-radius: 999px; font-weight: 600; }
.hero-media img { width: 100%; height: 650px; object-fit: cover; border-radius: 1.5rem; box-shadow: 0 25px 50px rgba(0,0,0,0.25); }
.hero-nav { position: absolute; bottom: 3rem; left: 50%; transform: translateX(-50%); display: flex; gap: 0.75rem; }
.hero-dot { width: 12px; height: 8px; border: 0; border-radius: 999px; background: var(--accent); opacity: 0.25; cursor: pointer; transition: width 0.5s; }
.hero-dot.active { width: 48px; opacity: 1; }
.fade-in { animation: fade 0.7s ease-in-out; }
@keyframes fade { from { opacity: 0; } to { opacity: 1; } }

/* Departments */
.dept-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.dept-card { display: flex; gap: 1rem; align-items: flex-start; padding: 1.25rem; border: 1px solid var(--border); border-radius: 0.75rem; }
.dept-card:hover { border-color: var(--primary); box-shadow: 0 4px 12px rgba(79,70,229,0.08); }
.dept-card.skeleton { height: 7rem; }
.dept-icon { width: 3rem; height: 3rem; border-radius: 0.75rem; background: rgba(79,70,229,0.1); flex-shrink: 0; }
.dept-body { flex: 1; }
.chips { display: flex; flex-wrap: wrap; gap: 0.375rem; margin-top: 0.5rem; }
.chip { background: var(--muted); color: var(--text-muted); border-radius: 999px; padding: 0.125rem 0.625rem; font-size: 11px; }

/* Collections */
.collection-grid { display: grid; grid-template-columns: repeat(5, 1fr); gap: 1rem; }
.collection-tile { display: flex; flex-direction: column; align-items: center; text-align: center; padding: 1.5rem; background: var(--bg); border: 1px solid var(--border); border-radius: 0.75rem; }
.collection-icon { width: 3.5rem; height: 3.5rem; border-radius: 1rem; margin-bottom: 1rem; }
.collection-tile p { font-size: 0.75rem; color: var(--text-muted); }
.collection-count { margin-top: 0.75rem; font-size: 0.75rem; color: var(--primary); }

/* Featured */
.tabs { display: inline-flex; background: var(--muted); border-radius: 0.5rem; padding: 0.25rem; margin-bottom: 1.5rem; }
.tab { border: 0; background: transparent; padding: 0.375rem 0.75rem; border-radius: 0.375rem; cursor: pointer; }
.tab.active { background: var(--bg); box-shadow: 0 1px 2px rgba(0,0,0,0.08); }
.product-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; }
.product-card { display: block; border: 1px solid var(--border); border-radius: 0.75rem; overflow: hidden; }
.product-card.skeleton { height: 18rem; }
.product-card.out-of-stock { opacity: 0.7; }
.product-media { position: relative; aspect-ratio: 1; background: var(--muted); }
.product-media img { width: 100%; height: 100%; object-fit: cover; }
.badges { position: absolute; top: 0.5rem; inset-inline-start: 0.5rem; display: flex; flex-direction: column; gap: 0.25rem; }
.badge { font-size: 0.7rem; font-weight: 700; padding: 0.125rem 0.5rem; border-radius: 999px; color: white; }
.badge-deal { background: #dc2626; }
.badge-best { background: var(--primary); }
.badge-stock { background: #52525b; }
.product-body { padding: 0.75rem; }
.brand { font-size: 0.75rem; color: var(--text-muted); }
.compare-at { color: var(--text-muted); font-size: 0.8rem; }
.empty-state { padding: 1.5rem; border: 1px solid var(--border); border-radius: 0.75rem; text-align: center; color: var(--text-muted); font-size: 0.875rem; }

/* Trust */
.trust { border-block: 1px solid var(--border); padding: 3rem 1rem; }
.trust-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1.5rem; }
.trust-item { display: flex; gap: 1rem; }
.trust-icon { width: 2.75rem; height: 2.75rem; border-radius: 0.75rem; background: rgba(79,70,229,0.1); flex-shrink: 0; }
.trust-item h3 { font-size: 0.875rem; }
.trust-item p { font-size: 0.75rem; color: var(--text-muted); }

/* Testimonials */
.testimonial-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.testimonial-card { border: 1px solid var(--border); border-radius: 0.75rem; padding: 1.5rem; }
.stars { display: flex; gap: 0.25rem; margin-bottom: 0.75rem; }
.star { width: 1rem; height: 1rem; background: var(--muted); clip-path: polygon(50% 0, 61% 35%, 98% 35%, 68% 57%, 79% 91%, 50% 70%, 21% 91%, 32% 57%, 2% 35%, 39% 35%); }
.star.filled { background: var(--amber); }
.testimonial-card blockquote { font-size: 0.875rem; color: var(--text-muted); margin-bottom: 1rem; }
.testimonial-author { display: flex; gap: 0.5rem; align-items: center; }
.avatar { display: flex; align-items: center; justify-content: center; width: 2rem; height: 2rem; border-radius: 50%; background: rgba(79,70,229,0.1); color: var(--primary); font-size: 0.75rem; font-weight: 700; }
.author-city { font-size: 0.75rem; color: var(--text-muted); }

/* Newsletter */
.newsletter { background: var(--primary); color: var(--primary-fg); padding-bottom: 0; }
.newsletter-inner { display: flex; justify-content: space-between; align-items: center; gap: 2rem; padding-bottom: 4rem; }
.newsletter-copy p { opacity: 0.8; font-size: 0.875rem; }
.newsletter-form { display: flex; gap: 0.5rem; width: 100%; max-width: 28rem; }
.newsletter-form input { flex: 1; padding: 0.625rem 0.75rem; border-radius: 0.375rem; border: 1px solid rgba(255,255,255,0.2); background: rgba(255,255,255,0.1); color: inherit; }
.newsletter-form button { padding: 0.625rem 1rem; border: 0; border-radius: 0.375rem; background: var(--bg); color: var(--primary); font-weight: 600; }
.whatsapp-cta { border-top: 1px solid rgba(255,255,255,0.1); padding: 1rem; text-align: center; font-size: 0.875rem; }

/* Skeleton loading */
.skeleton {
    background: linear-gradient(90deg, #f4f4f5 25%, #fafafa 50%, #f4f4f5 75%);
    background-size: 200% 100%;
    animation: shimmer 1.5s infinite;
}
@keyframes shimmer {
    0% { background-position: 200% 0; }
    100% { background-position: -200% 0; }
}

@media (max-width: 1024px) {
    .hero-slide { grid-template-columns: 1fr; gap: 2rem; }
    .hero.rtl .hero-text { order: 0; }
    .dept-grid, .product-grid, .trust-grid { grid-template-columns: repeat(2, 1fr); }
    .collection-grid, .testimonial-grid { grid-template-columns: repeat(2, 1fr); }
}

@media (max-width: 640px) {
    .hero-title { font-size: 3.5rem; }
    .dept-grid { display: flex; overflow-x: auto; }
    .dept-card { min-width: 240px; }
    .collection-grid, .testimonial-grid, .trust-grid { grid-template-columns: 1fr; }
    .newsletter-inner { flex-direction: column; text-align: center; }
}
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::Locale;

    #[test]
    fn test_section_order() {
        let names: Vec<&str> = SectionId::ALL.iter().map(SectionId::name).collect();
        assert_eq!(
            names,
            ["hero", "departments", "collections", "featured", "trust", "testimonials", "newsletter"]
        );
        assert!(SectionId::Featured.needs_data());
        assert!(!SectionId::Trust.needs_data());
    }

    #[test]
    fn test_new_page_is_loading() {
        let page = HomePage::new(&StorefrontConfig::default());
        assert!(page.departments.state.is_loading());
        assert!(page.featured.state.is_loading());
        assert_eq!(page.rotate_interval, Duration::from_secs(5));
    }

    #[test]
    fn test_render_to_string_rtl_shell() {
        let page = HomePage::default();
        let html = page.render_to_string(PageContext::new(Locale::Ar), "Computer House");
        assert!(html.contains(r#"<html lang="ar" dir="rtl">"#));
        assert!(html.contains(r#"href="/?lang=fr""#));
        assert!(html.trim_end().ends_with("</html>"));

        let positions: Vec<usize> = SectionId::ALL
            .iter()
            .map(|id| html.find(&format!(r#"data-section="{}""#, id.name())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
