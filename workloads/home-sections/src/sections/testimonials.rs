//! Customer testimonials.

use storefront_streaming::html::escape;

use crate::context::PageContext;
use crate::data::Testimonial;

/// Cards shown on the home page.
pub const MAX_TESTIMONIALS: usize = 3;

const STARS: u8 = 5;

/// Render at most the first three testimonials.
pub fn render_testimonials(testimonials: &[Testimonial], ctx: PageContext) -> String {
    let cards: String = testimonials
        .iter()
        .take(MAX_TESTIMONIALS)
        .map(|item| {
            let stars: String = (0..STARS)
                .map(|j| {
                    let class = if j < item.rating { "star filled" } else { "star" };
                    format!(r#"<span class="{class}"></span>"#)
                })
                .collect();

            format!(
                r#"<article class="testimonial-card">
    <div class="stars" aria-label="{rating}/5">{stars}</div>
    <blockquote>"{text}"</blockquote>
    <div class="testimonial-author">
        <span class="avatar">{initial}</span>
        <div><p class="author-name">{name}</p><p class="author-city">{city}</p></div>
    </div>
</article>"#,
                rating = item.rating,
                stars = stars,
                text = escape(item.text.text(ctx.locale)),
                initial = escape(&item.initial().to_string()),
                name = escape(item.name),
                city = escape(item.city),
            )
        })
        .collect();

    format!(
        r#"<section class="testimonials" data-section="testimonials">
    <div class="section-header"><h2>{title}</h2></div>
    <div class="testimonial-grid">{cards}</div>
</section>"#,
        title = escape(ctx.t.sections.testimonials),
        cards = cards,
    )
}
