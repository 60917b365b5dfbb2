use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, Color, Table};
use tracing::{debug, info, info_span, warn};

use pulse_import::{ImportSession, RecordSink};
use pulse_ingest::read_import_text;
use pulse_map::{MappingState, synonyms};
use pulse_model::{ClientField, ColumnMapping, ParsedTable, ProjectedRecord};

use crate::cli::ImportArgs;
use crate::logging::redact_value;
use crate::summary::{apply_table_style, dim_cell, header_cell};
use crate::types::ImportOutcome;

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Label"),
        header_cell("Accepted headers"),
    ]);
    apply_table_style(&mut table);
    for field in ClientField::ALL {
        table.add_row(vec![
            Cell::new(field.as_str()).fg(Color::Blue),
            Cell::new(field.label()),
            Cell::new(synonyms(field).join(", ")),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Record-creation collaborator used by the CLI: emits the committed batch
/// as a JSON array, to a file or stdout.
struct JsonSink {
    output: Option<PathBuf>,
}

impl RecordSink for JsonSink {
    fn create_records(&mut self, records: &[ProjectedRecord]) -> Result<()> {
        let json = serde_json::to_string_pretty(records).context("serialize records")?;
        match &self.output {
            Some(path) => {
                fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let span = info_span!("import", file = %args.file.display());
    let _guard = span.enter();

    let text = read_import_text(&args.file)?;
    let file_name = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("import.csv")
        .to_string();

    let mut session = ImportSession::new();
    if !session.select_file(&file_name, &text) {
        bail!("{}", session.error().unwrap_or("Could not parse CSV file"));
    }

    if let Some(path) = &args.mapping {
        load_saved_mapping(&mut session, path)?;
    }
    apply_adjustments(&mut session, &args.skip, &args.map)?;

    print_mapping(&session);

    let total_rows = session.table().map(ParsedTable::row_count).unwrap_or(0);
    let columns = session.table().map(ParsedTable::column_count).unwrap_or(0);
    let mapped = session
        .mapping()
        .map(MappingState::mapped_count)
        .unwrap_or(0);

    if !session.request_preview() {
        bail!("no columns are mapped; use --map to assign at least one column");
    }

    let preview = session.preview();
    if let Some(first) = preview.first()
        && let Ok(sample) = serde_json::to_string(first)
    {
        debug!(record = %redact_value(&sample), "first preview record");
    }
    print_preview(&session, &preview);

    if let Some(path) = &args.save_mapping {
        save_mapping(&session, path)?;
    }

    let committed = if args.dry_run {
        session.cancel();
        None
    } else {
        let mut sink = JsonSink {
            output: args.output.clone(),
        };
        session.confirm(&mut sink)?
    };

    Ok(ImportOutcome {
        file_name,
        total_rows,
        columns,
        mapped,
        skipped: columns.saturating_sub(mapped),
        committed,
        output: args.output.clone(),
    })
}

/// Applies `--skip` then `--map` adjustments to the seeded mapping.
///
/// This layer owns the one-column-per-field rule: a `--map` that would
/// claim a field another column already holds is refused, mirroring how
/// the intake dialog disables already-used targets.
fn apply_adjustments(session: &mut ImportSession, skips: &[String], maps: &[String]) -> Result<()> {
    let state = session.mapping_mut().context("no mapping state")?;
    for reference in skips {
        let column = state
            .resolve_column(reference)
            .with_context(|| format!("unknown column '{reference}'"))?;
        state.unset(column);
        debug!(column, reference = %reference, "column skipped");
    }
    for adjustment in maps {
        let (column_ref, field_name) = adjustment
            .split_once('=')
            .with_context(|| format!("--map expects COLUMN=FIELD, got '{adjustment}'"))?;
        let field_name = field_name.trim();
        let target = ClientField::from_name(field_name).with_context(|| {
            format!("unknown field '{field_name}'; run `clientpulse fields` to list them")
        })?;
        let column = state
            .resolve_column(column_ref)
            .with_context(|| format!("unknown column '{}'", column_ref.trim()))?;
        if state.target(column) != Some(target) && state.is_target_used(target) {
            bail!(
                "field '{}' is already mapped to another column; --skip that column first",
                target.as_str()
            );
        }
        state.set(column, target);
        debug!(column, target = %target, "column remapped");
    }
    Ok(())
}

fn load_saved_mapping(session: &mut ImportSession, path: &Path) -> Result<()> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read mapping {}", path.display()))?;
    let mapping: ColumnMapping =
        serde_json::from_str(&text).with_context(|| format!("parse mapping {}", path.display()))?;
    let state = session.mapping_mut().context("no mapping state")?;
    if let Some(max) = mapping.max_column()
        && max >= state.headers().len()
    {
        warn!(
            column = max,
            columns = state.headers().len(),
            "saved mapping references a column beyond this file; it will project as empty"
        );
    }
    state.replace(mapping);
    info!(file = %path.display(), "saved mapping loaded");
    Ok(())
}

fn save_mapping(session: &ImportSession, path: &Path) -> Result<()> {
    let state = session.mapping().context("no mapping state")?;
    let json = serde_json::to_string_pretty(state.mapping()).context("serialize mapping")?;
    fs::write(path, json).with_context(|| format!("write mapping {}", path.display()))?;
    info!(file = %path.display(), entries = state.mapped_count(), "mapping saved");
    Ok(())
}

fn print_mapping(session: &ImportSession) {
    let Some(state) = session.mapping() else {
        return;
    };
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("CSV column"),
        header_cell("Target field"),
    ]);
    apply_table_style(&mut table);
    for (column, header) in state.headers().iter().enumerate() {
        let target = match state.target(column) {
            Some(field) => Cell::new(field.label()).fg(Color::Green),
            None => dim_cell("skip"),
        };
        table.add_row(vec![Cell::new(column), Cell::new(header), target]);
    }
    println!("{table}");
}

fn print_preview(session: &ImportSession, preview: &[ProjectedRecord]) {
    let Some(state) = session.mapping() else {
        return;
    };
    let total = session.table().map(ParsedTable::row_count).unwrap_or(0);
    println!("Showing first {} of {} rows", preview.len(), total);
    let fields: Vec<ClientField> = state.mapping().targets().collect();
    let mut table = Table::new();
    table.set_header(
        fields
            .iter()
            .map(|field| header_cell(field.label()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for record in preview {
        table.add_row(
            fields
                .iter()
                .map(|field| match record.get(*field) {
                    Some(value) if !value.is_empty() => Cell::new(value),
                    _ => dim_cell("—"),
                })
                .collect::<Vec<_>>(),
        );
    }
    println!("{table}");
}
