//! Import orchestration: drives schema inspection, row mapping, and
//! repository writes for one run.
//!
//! Rows are processed strictly in file order; a bad row records a failed
//! outcome and never aborts the run. The only errors that escape are
//! whole-run setup failures (unknown content type, unreadable CSV, bad
//! mapping request).

use std::io::Read;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use tracing::{debug, debug_span, info, info_span};
use uuid::Uuid;

use cms_ingest::{CsvDocument, RawRow};
use cms_model::{
    ColumnMapping, ContentHandle, ContentRepository, EditorConfigProvider, ImportOutcome,
    ImportRequest, LocalizationProvider,
};
use cms_schema::{ContentTypeDescription, EditorRegistry, inspect_content_type};

use crate::error::{ImportError, RowError};
use crate::mapper::map_row;

/// Run-level options.
#[derive(Debug, Clone, Default)]
pub struct ImportOptions {
    /// Cooperative stop flag, checked between rows. Rows already written
    /// stay written; unprocessed rows produce no outcomes.
    pub stop: Option<Arc<AtomicBool>>,
}

impl ImportOptions {
    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

/// Imports a whole CSV stream into the repository.
///
/// The content type is resolved once; the header line is read once and
/// reused for every row. Returns one outcome per processed data row, in
/// file order.
pub fn run_import<B>(
    backend: &mut B,
    registry: &EditorRegistry,
    request: &ImportRequest,
    csv: impl Read,
    options: &ImportOptions,
) -> Result<Vec<ImportOutcome>, ImportError>
where
    B: ContentRepository + LocalizationProvider + EditorConfigProvider,
{
    let span = info_span!(
        "import",
        content_type_id = request.content_type_id,
        parent_id = request.parent_id
    );
    let _guard = span.enter();
    let start = Instant::now();

    let mapping = ColumnMapping::from_bindings(&request.fields)?;
    let description = inspect_content_type(&*backend, registry, request.content_type_id)?;
    let document = CsvDocument::from_reader(csv)?;
    debug!(
        content_type_alias = %description.alias,
        binding_count = mapping.len(),
        row_count = document.row_count(),
        "import run prepared"
    );

    let mut outcomes = Vec::with_capacity(document.row_count());
    for row in document.rows() {
        if options.stop_requested() {
            info!(processed = outcomes.len(), "import stopped on request");
            break;
        }
        let row_span = debug_span!("row", index = row.index());
        let _row_guard = row_span.enter();
        match import_row(backend, &description, &mapping, request.parent_id, &row) {
            Ok((handle, title)) => {
                outcomes.push(ImportOutcome::created(row.index(), handle.0, title));
            }
            Err(error) => {
                debug!(error = %error, "row failed");
                outcomes.push(ImportOutcome::failed(row.index(), error.to_string()));
            }
        }
    }

    let failed = outcomes.iter().filter(|outcome| outcome.is_failed()).count();
    info!(
        row_count = outcomes.len(),
        created = outcomes.len() - failed,
        failed,
        duration_ms = start.elapsed().as_millis(),
        "import complete"
    );
    Ok(outcomes)
}

/// Creates, fills, and publishes one record.
///
/// No rollback is issued on failure; a partially written record's fate is
/// the repository's own concern.
fn import_row<B>(
    backend: &mut B,
    description: &ContentTypeDescription,
    mapping: &ColumnMapping,
    parent_id: i64,
    row: &RawRow<'_>,
) -> Result<(ContentHandle, String), RowError>
where
    B: ContentRepository + LocalizationProvider + EditorConfigProvider,
{
    let plan = map_row(row, mapping, &description.variants, &*backend)?;
    let title = plan
        .title
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let handle = backend
        .create_content(&title, parent_id, &description.alias)
        .map_err(RowError::Repository)?;

    let default_locale = description.default_locale().map(str::to_string);
    if description.varies_by_culture
        && let Some(locale) = &default_locale
    {
        backend
            .set_culture_name(handle, &title, locale)
            .map_err(RowError::Repository)?;
    }

    for assignment in plan.assignments {
        backend
            .set_value(
                handle,
                &assignment.alias,
                assignment.value,
                assignment.locale.as_deref(),
            )
            .map_err(RowError::Repository)?;
    }

    let publish_locale = if description.varies_by_culture {
        default_locale.as_deref()
    } else {
        None
    };
    backend
        .save_and_publish(handle, publish_locale)
        .map_err(RowError::Repository)?;

    Ok((handle, title))
}

/// Administrative bulk delete passthrough; no business logic.
pub fn delete_all_of_type<B>(backend: &mut B, content_type_id: i64) -> anyhow::Result<usize>
where
    B: ContentRepository,
{
    let removed = backend.delete_all_of_type(content_type_id)?;
    info!(content_type_id, removed, "bulk delete complete");
    Ok(removed)
}
