//! Spin HTTP entry point.

use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;
use tracing::Instrument;

use storefront_core::{RequestContext, StorefrontConfig};
use storefront_data::HttpCatalog;
use storefront_observability::{init_logging, request_span, PageMetrics};
use storefront_streaming::StreamingSink;

use crate::context::PageContext;
use crate::page::{home_closing, home_shell, HomePage, SectionId};

/// Catalog API used when the `catalog_base_url` variable is unset.
const DEFAULT_CATALOG_URL: &str = "http://127.0.0.1:3000/api/store";

fn respond_status(response_out: ResponseOutparam, status: u16) {
    let response = OutgoingResponse::new(Fields::new());
    if response.set_status_code(status).is_err() {
        tracing::error!(status, "invalid status code");
    }
    response_out.set(response);
}

fn load_config() -> StorefrontConfig {
    let mut config = StorefrontConfig::default();
    config.catalog.base_url = spin_sdk::variables::get("catalog_base_url").ok();
    if let Ok(url) = spin_sdk::variables::get("whatsapp_url") {
        config.contact.whatsapp_url = url;
    }
    config
}

/// Home page handler.
#[http_component]
async fn handle_home(req: IncomingRequest, response_out: ResponseOutparam) {
    let config = load_config();
    init_logging(&config.logging);

    if req.method() != Method::Get {
        respond_status(response_out, 405);
        return;
    }

    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let mut ctx = RequestContext::new(storefront_core::Method::GET, &path);
    for value in req.headers().get(&"cookie".to_string()) {
        ctx = ctx.append_header("cookie", String::from_utf8_lossy(&value));
    }
    let locale = ctx.resolve_locale(config.storefront.default_locale);

    let span = request_span(&ctx);
    serve(ctx, config, response_out, PageContext::new(locale))
        .instrument(span)
        .await;
}

async fn serve(
    ctx: RequestContext,
    config: StorefrontConfig,
    response_out: ResponseOutparam,
    page_ctx: PageContext,
) {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), "text/html; charset=utf-8".into()),
        ("content-language".to_owned(), page_ctx.locale.code().into()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into()),
        (
            "cache-control".to_owned(),
            "public, max-age=60, stale-while-revalidate=30".into(),
        ),
        ("vary".to_owned(), "Cookie".into()),
    ];

    let headers = match Fields::from_list(&header_list) {
        Ok(headers) => headers,
        Err(e) => {
            tracing::error!(error = ?e, "invalid response headers");
            respond_status(response_out, 500);
            return;
        }
    };
    let response = OutgoingResponse::new(headers);
    if response.set_status_code(200).is_err() {
        tracing::error!("failed to set status");
    }

    let body = response.take_body();
    response_out.set(response);
    let mut sink = StreamingSink::new(body, ctx.timing.clone());

    let shell = home_shell(page_ctx, &config.storefront.title);
    if let Err(e) = sink.send_shell(&shell.render_opening()).await {
        tracing::error!(error = %e, "Failed to send shell");
        return;
    }

    // The hero needs no data; send it before the catalog calls resolve.
    let mut page = HomePage::new(&config);
    if let Err(e) = page.stream_sections(&mut sink, &[SectionId::Hero], page_ctx).await {
        tracing::error!(error = %e, "Failed to send hero");
        return;
    }

    let base_url = config.catalog.base_url.as_deref().unwrap_or(DEFAULT_CATALOG_URL);
    let catalog = HttpCatalog::new(base_url);
    let loaded = HomePage::load(&catalog, &config).await;
    page.departments = loaded.departments;
    page.featured = loaded.featured;

    let rest: Vec<SectionId> = SectionId::ALL
        .into_iter()
        .filter(|id| *id != SectionId::Hero)
        .collect();
    if let Err(e) = page.stream_sections(&mut sink, &rest, page_ctx).await {
        tracing::error!(error = %e, "Failed to stream sections");
        return;
    }

    if let Err(e) = sink.finish(&home_closing(&shell)).await {
        tracing::error!(error = %e, "Failed to finish page");
        return;
    }

    PageMetrics::collect(&ctx, sink.timing()).log();
}
