//! Newsletter and WhatsApp contact strip.

use storefront_core::DEFAULT_WHATSAPP_URL;
use storefront_streaming::html::escape;

use crate::context::PageContext;

/// Newsletter strip; only the WhatsApp link varies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsletterSection {
    pub whatsapp_url: String,
}

impl Default for NewsletterSection {
    fn default() -> Self {
        Self {
            whatsapp_url: DEFAULT_WHATSAPP_URL.to_string(),
        }
    }
}

impl NewsletterSection {
    pub fn new(whatsapp_url: impl Into<String>) -> Self {
        Self {
            whatsapp_url: whatsapp_url.into(),
        }
    }

    pub fn render(&self, ctx: PageContext) -> String {
        render_newsletter(&self.whatsapp_url, ctx)
    }
}

/// Render the signup form and the WhatsApp call to action.
pub fn render_newsletter(whatsapp_url: &str, ctx: PageContext) -> String {
    let s = &ctx.t.sections;
    format!(
        r#"<section class="newsletter" data-section="newsletter">
    <div class="newsletter-inner">
        <div class="newsletter-copy">
            <h2>{heading}</h2>
            <p>{sub}</p>
        </div>
        <form class="newsletter-form" id="newsletter-form">
            <input type="email" name="email" placeholder="{placeholder}" aria-label="{placeholder}" required>
            <button type="submit">{subscribe}</button>
        </form>
    </div>
    <div class="whatsapp-cta">
        <a href="{url}" target="_blank" rel="noopener noreferrer">{cta}</a>
    </div>
</section>"#,
        heading = escape(s.newsletter),
        sub = escape(s.newsletter_sub),
        placeholder = escape(s.email_placeholder),
        subscribe = escape(s.subscribe),
        url = escape(whatsapp_url),
        cta = escape(s.whatsapp_cta),
    )
}
