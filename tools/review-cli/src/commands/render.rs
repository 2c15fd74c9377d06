//! Render one review record.

use anyhow::{Context as _, Result};
use review_core::page::ReviewPage;
use review_single::render_page;

use super::{load_record, load_settings, RenderArgs, RenderFormat};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let record = load_record(&ctx.resolve_path(&args.record))?;
    let settings = load_settings(args.settings.as_deref(), ctx)?;

    let page = ReviewPage::compose(&record, settings.as_ref());
    ctx.output.debug(&format!("Composed sections: {}", page.anchors().join(", ")));

    let rendered = match args.format {
        RenderFormat::Html => render_page(&page, &ctx.config.site),
        RenderFormat::Json => serde_json::to_string_pretty(&page)?,
    };

    match args.output {
        Some(ref output) => {
            let path = ctx.resolve_path(output);
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;

            ctx.output.success(&format!(
                "Rendered {} ({})",
                path.display(),
                format_bytes(rendered.len() as u64)
            ));
        }
        None => println!("{}", rendered),
    }

    Ok(())
}
