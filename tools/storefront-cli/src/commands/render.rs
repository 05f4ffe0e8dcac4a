//! Offline home page rendering.

use std::convert::Infallible;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context as _, Result};
use home_sections::mount::MountedHomePage;
use home_sections::{HomePage, PageContext, SectionId};
use storefront_core::{LogFormat, LoggingSettings, Locale, Method, RequestContext, TimingContext};
use storefront_data::FixtureCatalog;
use storefront_observability::{init_logging, PageMetrics};
use storefront_streaming::StreamingSink;

use super::RenderArgs;
use crate::context::Context;
use crate::output::{format_bytes, format_micros};

/// Run the render command.
pub async fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    init_logging(&cli_logging(ctx));

    let locale = parse_locale(args.locale.as_deref(), ctx.config.storefront.default_locale)?;
    let mut request = RequestContext::new(Method::GET, format!("/?lang={}", locale.code()));
    request.resolve_locale(ctx.config.storefront.default_locale);

    let page = if args.skeleton {
        ctx.output.debug("Rendering first paint without catalog data");
        HomePage::new(&ctx.config)
    } else {
        let dir = fixtures_dir(&args, ctx)?;
        ctx.output.debug(&format!("Loading catalog from {}", dir.display()));

        let mounted = MountedHomePage::mount(Arc::new(FixtureCatalog::new(dir)), &ctx.config);
        let page = mounted.snapshot().await;
        mounted.unmount();
        page
    };

    let mut sink: StreamingSink<Vec<Vec<u8>>, Infallible> =
        StreamingSink::new(Vec::new(), TimingContext::new());
    page.stream(&mut sink, PageContext::new(locale), &ctx.config.storefront.title)
        .await?;

    let metrics = PageMetrics::collect(&request, sink.timing());
    metrics.log();
    let html = sink.into_inner().concat();

    match &args.out {
        Some(out) => {
            let out = ctx.resolve_path(out);
            std::fs::write(&out, &html)
                .with_context(|| format!("Failed to write {}", out.display()))?;

            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({
                    "out": out.display().to_string(),
                    "bytes": html.len(),
                    "metrics": &metrics,
                }));
                return Ok(());
            }

            ctx.output.success(&format!(
                "Rendered {} home page to {} ({})",
                locale.code(),
                out.display(),
                format_bytes(html.len())
            ));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(&html).context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    if ctx.output.is_verbose() {
        ctx.output.kv("request_id", &metrics.request_id);
        ctx.output.kv("time_to_shell", &format_micros(metrics.time_to_shell_us));
        ctx.output.kv(
            "time_to_first_section",
            &format_micros(metrics.time_to_first_section_us),
        );
        for section in &metrics.sections {
            ctx.output.kv(&section.name, &format_micros(Some(section.duration_us)));
        }
    }

    Ok(())
}

/// List home sections in page order.
pub fn list_sections(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let sections: Vec<_> = SectionId::ALL
            .iter()
            .map(|id| serde_json::json!({ "name": id.name(), "needs_data": id.needs_data() }))
            .collect();
        ctx.output.json(&sections);
        return Ok(());
    }

    ctx.output.header("Home sections");
    for id in SectionId::ALL {
        let source = if id.needs_data() { "catalog" } else { "static" };
        ctx.output.list_item(&format!("{} ({})", id.name(), source));
    }
    Ok(())
}

fn parse_locale(arg: Option<&str>, fallback: Locale) -> Result<Locale> {
    match arg {
        None => Ok(fallback),
        Some(code) => match Locale::from_code(code) {
            Some(locale) => Ok(locale),
            None => bail!("Unknown locale '{}'. Expected 'fr' or 'ar'.", code),
        },
    }
}

fn fixtures_dir(args: &RenderArgs, ctx: &Context) -> Result<PathBuf> {
    let dir = match (&args.fixtures, &ctx.config.catalog.fixtures_dir) {
        (Some(dir), _) => ctx.resolve_path(dir),
        (None, Some(dir)) => ctx.resolve_config_path(dir),
        (None, None) => bail!(
            "No catalog fixtures given. Pass --fixtures <dir> or set catalog.fixtures_dir."
        ),
    };

    if !dir.is_dir() {
        bail!("Fixtures directory not found: {}", dir.display());
    }
    Ok(dir)
}

/// Logs share stderr with CLI messages, so keep them human-readable unless
/// JSON output was asked for.
fn cli_logging(ctx: &Context) -> LoggingSettings {
    let mut settings = ctx.config.logging.clone();
    settings.format = if ctx.output.is_json() {
        LogFormat::Json
    } else {
        LogFormat::Human
    };
    if ctx.output.is_verbose() {
        settings.level = "debug".to_string();
    }
    settings
}
