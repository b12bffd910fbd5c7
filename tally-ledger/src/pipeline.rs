//! Folder pipeline: enumerate exports, route, parse, build, write.
//!
//! One blocking batch pass. Failures never escape a single file's scope: an
//! unroutable name or a malformed file is logged and contributes nothing,
//! and the run continues. Only folder-level I/O errors propagate.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tally_ingest::Provider;
use tracing::{debug, info, warn};

use crate::builder::Ledger;
use crate::sheet;

/// Build `ExpenseSheet.xlsx` from every routable export in `folder`.
///
/// Returns `Ok(None)` when no file contributed a record; nothing is written
/// and this is not an error.
pub fn build_expense_sheet(folder: &Path) -> Result<Option<PathBuf>> {
    let mut file_names: Vec<String> = std::fs::read_dir(folder)
        .with_context(|| format!("reading folder {}", folder.display()))?
        .filter_map(|entry| {
            let entry = entry.ok()?;
            entry
                .file_type()
                .ok()?
                .is_file()
                .then(|| entry.file_name().to_string_lossy().into_owned())
        })
        .collect();
    // Directory order is platform-dependent; sort so reruns are identical.
    file_names.sort();

    let mut sets = Vec::new();
    for name in &file_names {
        debug!("found {name}");

        let Some(provider) = Provider::route(name) else {
            warn!("no provider convention matches {name}, skipping");
            continue;
        };

        let path = folder.join(name);
        match provider.parse(&path) {
            Ok(txns) => {
                info!("parsed {} transactions from {name}", txns.len());
                sets.push(txns);
            }
            Err(e) => warn!("skipping {name}: {e}"),
        }
    }

    let Some(ledger) = Ledger::build(sets) else {
        info!("no transactions parsed; nothing to write");
        return Ok(None);
    };

    let path = sheet::write_sheet(&ledger, folder)?;
    info!(
        "wrote {} transactions to {}",
        ledger.transactions.len(),
        path.display()
    );

    Ok(Some(path))
}
