use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::info;

use cms_import::{ContentRecord, ImportOptions, MemoryRepository, delete_all_of_type, run_import};
use cms_ingest::read_headers;
use cms_model::{ImportOutcome, ImportRequest};
use cms_schema::{EditorRegistry, inspect_content_type};

use crate::cli::{DeleteAllArgs, DescribeArgs, HeadersArgs, ImportArgs};
use crate::summary::apply_table_style;

/// Everything the import subcommand reports back to the user.
pub struct ImportRunResult {
    pub outcomes: Vec<ImportOutcome>,
    pub output: Option<PathBuf>,
    pub has_failures: bool,
}

pub fn run_import_command(args: &ImportArgs) -> Result<ImportRunResult> {
    let mut repository = load_repository(&args.schema)?;
    let request = load_request(&args.mapping)?;
    let csv = File::open(&args.csv)
        .with_context(|| format!("open csv: {}", args.csv.display()))?;

    let registry = EditorRegistry::builtin();
    let outcomes = run_import(
        &mut repository,
        &registry,
        &request,
        BufReader::new(csv),
        &ImportOptions::default(),
    )?;

    let output = if args.dry_run {
        None
    } else {
        match &args.output {
            Some(path) => {
                write_records(path, repository.records())?;
                Some(path.clone())
            }
            None => None,
        }
    };

    let has_failures = outcomes.iter().any(ImportOutcome::is_failed);
    Ok(ImportRunResult {
        outcomes,
        output,
        has_failures,
    })
}

pub fn run_describe(args: &DescribeArgs) -> Result<()> {
    let repository = load_repository(&args.schema)?;
    let registry = EditorRegistry::builtin();
    let description = inspect_content_type(&repository, &registry, args.content_type_id)?;

    println!(
        "Content type: {} ({}), varies by culture: {}",
        description.name, description.alias, description.varies_by_culture
    );
    for variant in &description.variants {
        let marker = if variant.is_default { " (default)" } else { "" };
        println!();
        println!("Variant {}{}", variant.locale_tag, marker);
        let mut table = Table::new();
        table.set_header(vec!["Group", "Field", "Binding key", "Editor", "Varies"]);
        apply_table_style(&mut table);
        for group in &variant.groups {
            for field in &group.fields {
                table.add_row(vec![
                    group.name.clone(),
                    field.display_name.clone(),
                    field.binding_key(),
                    field.editor.to_string(),
                    if field.varies_by_locale { "yes" } else { "no" }.to_string(),
                ]);
            }
        }
        println!("{table}");
    }
    Ok(())
}

pub fn run_headers(args: &HeadersArgs) -> Result<()> {
    let csv = File::open(&args.csv)
        .with_context(|| format!("open csv: {}", args.csv.display()))?;
    let headers = read_headers(BufReader::new(csv))?;
    for header in headers {
        println!("{header}");
    }
    Ok(())
}

pub fn run_delete_all(args: &DeleteAllArgs) -> Result<()> {
    let mut repository = load_repository(&args.schema)?;
    let removed = delete_all_of_type(&mut repository, args.content_type_id)?;
    println!("Removed {removed} record(s)");
    Ok(())
}

fn load_repository(path: &Path) -> Result<MemoryRepository> {
    let file =
        File::open(path).with_context(|| format!("open content model: {}", path.display()))?;
    MemoryRepository::from_json(BufReader::new(file))
}

fn load_request(path: &Path) -> Result<ImportRequest> {
    let file =
        File::open(path).with_context(|| format!("open mapping request: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse mapping request: {}", path.display()))
}

fn write_records(path: &Path, records: &[ContentRecord]) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create output: {}", path.display()))?;
    serde_json::to_writer_pretty(file, records)
        .with_context(|| format!("write records: {}", path.display()))?;
    info!(record_count = records.len(), output = %path.display(), "records written");
    Ok(())
}
