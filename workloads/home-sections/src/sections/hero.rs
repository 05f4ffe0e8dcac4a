//! Rotating hero banner.

use std::time::Duration;

use storefront_streaming::html::escape;

use crate::context::PageContext;
use crate::data::{Slide, SLIDES, SLIDE_FEATURES};

/// Default auto-advance period.
pub const ROTATE_INTERVAL: Duration = Duration::from_secs(5);

/// Slider position over the fixed slide list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeroSlider {
    current: usize,
}

impl HeroSlider {
    pub const fn new() -> Self {
        Self { current: 0 }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide(&self) -> &'static Slide {
        &SLIDES[self.current]
    }

    /// Move to the next slide, wrapping after the last.
    pub fn advance(&mut self) {
        self.current = (self.current + 1) % SLIDES.len();
    }

    /// Jump to `index`. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= SLIDES.len() {
            return false;
        }
        self.current = index;
        true
    }

    /// Position counter, e.g. `01 / 04`.
    pub fn counter(&self) -> String {
        format!("{:02} / {:02}", self.current + 1, SLIDES.len())
    }

    pub fn render(&self, ctx: PageContext, interval: Duration) -> String {
        render_hero(self, ctx, interval)
    }
}

fn render_slide(index: usize, slide: &Slide, active: bool, ctx: PageContext) -> String {
    let locale = ctx.locale;
    let title = escape(slide.title.text(locale));
    let features: String = SLIDE_FEATURES
        .iter()
        .map(|f| format!(r#"<li class="hero-feature">{}</li>"#, escape(f.text(locale))))
        .collect();

    format!(
        r#"<div class="hero-slide{fade}" data-slide="{index}" data-counter="{counter}" data-accent="{color}" data-accent-bg="{bg}" style="--accent: {color}; --accent-bg: {bg}"{hidden}>
        <div class="hero-text">
            <span class="hero-badge">{badge}</span>
            <h1 class="hero-title">{title}</h1>
            <p class="hero-description">{description}</p>
            <ul class="hero-features">{features}</ul>
            <div class="hero-actions">
                <a href="/products" class="btn-primary">{browse}</a>
                <a href="/contact" class="btn-outline">{contact}</a>
            </div>
        </div>
        <div class="hero-media">
            <img src="{image}" alt="{title}"{loading}>
        </div>
    </div>"#,
        fade = if active { " fade-in" } else { "" },
        counter = HeroSlider { current: index }.counter(),
        color = slide.color,
        bg = slide.bg_color,
        hidden = if active { "" } else { " hidden" },
        badge = escape(slide.badge.text(locale)),
        description = escape(slide.description.text(locale)),
        browse = ctx.pick("Voir produits", "تصفح المنتجات"),
        contact = ctx.pick("Contact", "اتصل بنا"),
        image = escape(slide.image_src),
        loading = if active { "" } else { r#" loading="lazy""# },
    )
}

/// Render the hero banner. Every slide is emitted; all but the current one
/// are hidden until the client script swaps them in.
pub fn render_hero(slider: &HeroSlider, ctx: PageContext, interval: Duration) -> String {
    let slide = slider.slide();

    let panels: String = SLIDES
        .iter()
        .enumerate()
        .map(|(i, s)| render_slide(i, s, i == slider.current(), ctx))
        .collect();

    let dots: String = SLIDES
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let active = if i == slider.current() { " active" } else { "" };
            format!(
                r#"<button class="hero-dot{active}" data-slide="{i}" style="--accent: {color}" aria-label="{n}"></button>"#,
                color = s.color,
                n = i + 1,
            )
        })
        .collect();

    format!(
        r#"<section class="hero{rtl}" data-section="hero" data-interval="{interval}" data-current="{index}" style="--accent: {color}; --accent-bg: {bg}">
    <div class="hero-brand"><strong>COMPUTER HOUSE</strong><small>MAISON TECH</small></div>
    <div class="hero-counter">{counter}</div>
    {panels}
    <nav class="hero-nav">{dots}</nav>
</section>"#,
        rtl = if ctx.is_rtl() { " rtl" } else { "" },
        interval = interval.as_millis(),
        index = slider.current(),
        color = slide.color,
        bg = slide.bg_color,
        counter = slider.counter(),
        panels = panels,
        dots = dots,
    )
}
