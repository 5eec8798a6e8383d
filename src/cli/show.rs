//! Show a saved datafile

use std::io::Write;

use crate::error::{BuddyError, BuddyResult};
use crate::storage::{DatafileStore, SavedDatafile};
use crate::validation;

/// Load and parse a saved datafile by base name
pub fn load_datafile(store: &dyn DatafileStore, name: &str) -> BuddyResult<SavedDatafile> {
    let name =
        validation::validate_filename(name).map_err(|e| BuddyError::invalid("datafile name", e))?;
    let content = store.read(&name)?;
    SavedDatafile::parse(&content)
}

/// Print a saved datafile with per-category totals
pub fn handle_show_command<W: Write>(
    store: &dyn DatafileStore,
    name: &str,
    json: bool,
    out: &mut W,
) -> BuddyResult<()> {
    let saved = load_datafile(store, name)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &saved)?;
        writeln!(out)?;
        return Ok(());
    }

    if saved.categories.is_empty() {
        writeln!(out, "No categories saved in {}.", name.trim())?;
        return Ok(());
    }

    for category in &saved.categories {
        writeln!(out, "{}", category.name)?;
        for line in &category.lines {
            writeln!(out, "  {:<30} {:>12}", line.name, line.total.to_string())?;
        }
        writeln!(out, "  {:<30} {:>12}", "Category Total:", category.total().to_string())?;
        writeln!(out)?;
    }
    writeln!(out, "{:<32} {:>12}", "Total Expenses:", saved.total().to_string())?;

    Ok(())
}
