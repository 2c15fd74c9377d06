//! Render a directory of review records to static pages.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use review_core::page::ReviewPage;
use review_single::render_page;

use super::{load_record, load_settings, settings_path, BuildArgs};
use crate::context::Context;
use crate::output::format_bytes;

/// Run the build command.
pub fn run(args: BuildArgs, ctx: &Context) -> Result<()> {
    let input_dir = ctx.resolve_arg_or_config(args.input.as_deref(), &ctx.config.build.input_dir);
    let output_dir =
        ctx.resolve_arg_or_config(args.output.as_deref(), &ctx.config.build.output_dir);

    if !input_dir.is_dir() {
        bail!("Input directory not found: {}", input_dir.display());
    }

    ctx.output.header("Building review pages");

    ctx.output.step(1, 3, "Loading rating settings");
    let settings = load_settings(args.settings.as_deref(), ctx)?;
    let settings_path = settings_path(args.settings.as_deref(), ctx);

    let records = list_records(&input_dir, settings_path.as_deref())?;
    if records.is_empty() {
        bail!("No review records (*.json) found in {}", input_dir.display());
    }
    ctx.output
        .debug(&format!("Found {} record(s) in {}", records.len(), input_dir.display()));

    // Confirm before writing into existing output
    if !args.yes && is_non_empty_dir(&output_dir)? {
        if ctx.output.is_json() {
            bail!(
                "Output directory {} is not empty. Use --yes to write into it.",
                output_dir.display()
            );
        }
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "{} is not empty. Write pages into it?",
                output_dir.display()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            ctx.output.warn("Build cancelled");
            return Ok(());
        }
    }

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    ctx.output.step(2, 3, "Rendering pages");
    let progress = ctx.output.progress(records.len() as u64, "rendering");
    let mut written = HashSet::new();
    let mut failures = Vec::new();
    let mut total_bytes = 0u64;

    for path in &records {
        match build_page(path, &output_dir, settings.as_ref(), ctx) {
            Ok((slug, bytes)) => {
                if !written.insert(slug.clone()) {
                    progress.suspend(|| {
                        ctx.output
                            .warn(&format!("{} overwrote an earlier page for '{}'", path.display(), slug))
                    });
                }
                total_bytes += bytes;
            }
            Err(e) => {
                let error = format!("{:#}", e);
                tracing::warn!(record = %path.display(), %error, "skipped record");
                failures.push(path.display().to_string());
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    ctx.output.step(3, 3, "Done");
    ctx.output.kv("Pages", &written.len().to_string());
    ctx.output.kv("Size", &format_bytes(total_bytes));
    ctx.output.kv("Output", &output_dir.display().to_string());

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "pages": written.len(),
            "bytes": total_bytes,
            "output": output_dir,
            "failed": failures,
        }));
    }

    if !failures.is_empty() {
        for failure in &failures {
            ctx.output.list_item(failure);
        }
        bail!("{} record(s) failed to render", failures.len());
    }

    ctx.output.success("Build complete!");
    Ok(())
}

/// Render one record into `<output>/<slug>/index.html`.
fn build_page(
    path: &Path,
    output_dir: &Path,
    settings: Option<&review_core::RatingSettings>,
    ctx: &Context,
) -> Result<(String, u64)> {
    let record = load_record(path)?;
    let slug = record
        .slug()
        .filter(|slug| !matches!(*slug, "." | ".."))
        .map(str::to_string)
        .or_else(|| path.file_stem().and_then(|stem| stem.to_str()).map(str::to_string))
        .with_context(|| format!("Cannot derive a page name for {}", path.display()))?;

    let page = ReviewPage::compose(&record, settings);
    let html = render_page(&page, &ctx.config.site);

    let page_dir = output_dir.join(&slug);
    std::fs::create_dir_all(&page_dir)
        .with_context(|| format!("Failed to create {}", page_dir.display()))?;
    let target = page_dir.join("index.html");
    std::fs::write(&target, &html).with_context(|| format!("Failed to write {}", target.display()))?;

    ctx.output.debug(&format!("{} -> {}", path.display(), target.display()));
    Ok((slug, html.len() as u64))
}

/// JSON files directly under `dir`, sorted, excluding the settings file.
fn list_records(dir: &Path, settings: Option<&Path>) -> Result<Vec<PathBuf>> {
    let settings = settings.and_then(|path| path.canonicalize().ok());

    let mut records: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read {}", dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
        .filter(|path| settings.is_none() || path.canonicalize().ok() != settings)
        .collect();

    records.sort();
    Ok(records)
}

fn is_non_empty_dir(dir: &Path) -> Result<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    Ok(std::fs::read_dir(dir)?.next().is_some())
}
