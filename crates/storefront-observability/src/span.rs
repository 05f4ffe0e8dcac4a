//! Request spans.

use storefront_core::RequestContext;
use tracing::Span;

/// Open the span a page render runs in.
pub fn request_span(ctx: &RequestContext) -> Span {
    tracing::info_span!(
        "request",
        request_id = %ctx.request_id,
        method = %ctx.method,
        path = %ctx.path,
        locale = %ctx.locale,
    )
}
