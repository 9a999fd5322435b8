use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use catalog_cli::config::{DashboardConfig, FilterConfig};
use catalog_cli::summary::{render_snapshot, snapshot_json, types_table};
use catalog_core::{Dashboard, load_catalog};

use crate::cli::{OutputFormatArg, SummaryArgs, TypesArgs};

fn open_dashboard(csv: &Path) -> Result<Dashboard> {
    let catalog =
        load_catalog(csv).with_context(|| format!("load catalog {}", csv.display()))?;
    Dashboard::new(catalog).with_context(|| format!("open dashboard for {}", csv.display()))
}

pub fn run_types(args: &TypesArgs) -> Result<()> {
    let dashboard = open_dashboard(&args.csv)?;
    println!("{}", types_table(dashboard.catalog()));
    println!("Release years: {}", dashboard.year_bounds());
    Ok(())
}

pub fn run_summary(args: &SummaryArgs) -> Result<()> {
    let span = info_span!("summary", source = %args.csv.display());
    let _guard = span.enter();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)?,
        None => DashboardConfig::default(),
    };
    let mut options = config.options();
    if let Some(top) = args.top {
        options = options.with_top_n(top);
    }

    let dashboard = open_dashboard(&args.csv)?.with_options(options);
    let flags = FilterConfig {
        types: (!args.types.is_empty()).then(|| args.types.clone()),
        year_min: args.year_min,
        year_max: args.year_max,
    };
    let criteria = config
        .filter
        .overridden_by(flags)
        .resolve(&dashboard)
        .context("build filter criteria")?;
    let snapshot = dashboard.refresh(&criteria).context("refresh dashboard")?;

    match args.format {
        OutputFormatArg::Table => {
            let preview = snapshot.preview_dataframe().context("build preview")?;
            println!("{}", render_snapshot(&snapshot, &preview.to_string()));
        }
        OutputFormatArg::Json => {
            println!("{}", snapshot_json(&snapshot).context("serialize snapshot")?);
        }
    }

    if let Some(path) = &args.corpus_out {
        fs::write(path, &snapshot.cast_corpus.text)
            .with_context(|| format!("write cast corpus {}", path.display()))?;
        info!(
            path = %path.display(),
            names = snapshot.cast_corpus.token_count,
            "cast corpus written"
        );
    }
    Ok(())
}
