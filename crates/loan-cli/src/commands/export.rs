use std::path::{Path, PathBuf};

use anyhow::Context;
use loan_api::{ApiClient, TimelineExport};

use crate::cli::root_commands::ExportArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::render;
use crate::progress::Progress;

/// Handle `loanline export`.
pub async fn handle(
    args: &ExportArgs,
    client: &ApiClient,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let loan = args.loan.trim();
    anyhow::ensure!(!loan.is_empty(), "loan number is empty");

    let spinner = Progress::spinner(&format!("Exporting loan {loan}"));
    let export = client
        .export_timeline(loan, args.export_format)
        .await
        .with_context(|| format!("failed to export timeline for loan {loan}"))?;
    spinner.finish_clear();

    match &args.out {
        Some(out) => {
            let path = write_export(&export, out, flags.format)?;
            tracing::info!(path = %path.display(), "timeline exported");
            if !flags.quiet {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => print!("{}", export_body(&export, flags.format)?),
    }
    Ok(())
}

/// File contents for `export`: CSV text as delivered, JSON pretty-printed
/// unless `raw` output was requested.
fn export_body(export: &TimelineExport, format: OutputFormat) -> anyhow::Result<String> {
    let mut body = match export {
        TimelineExport::Csv(csv) => csv.content.clone(),
        TimelineExport::Json(timeline) => render(timeline, format)?,
    };
    if !body.ends_with('\n') {
        body.push('\n');
    }
    Ok(body)
}

/// Write `export` to `out`. A directory target receives the suggested file
/// name.
fn write_export(
    export: &TimelineExport,
    out: &Path,
    format: OutputFormat,
) -> anyhow::Result<PathBuf> {
    let path = if out.is_dir() {
        out.join(export.suggested_filename())
    } else {
        out.to_path_buf()
    };

    std::fs::write(&path, export_body(export, format)?)
        .with_context(|| format!("failed to write export to {}", path.display()))?;
    Ok(path)
}
