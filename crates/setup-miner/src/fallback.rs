use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{MinerError, Result};
use crate::types::SetupStep;

const EMBEDDED_TABLE: &str = include_str!("fallback_steps.toml");

#[derive(Debug, Deserialize)]
struct TableFile {
    #[serde(default)]
    package: Vec<TableEntry>,
}

#[derive(Debug, Deserialize)]
struct TableEntry {
    name: String,
    steps: Vec<String>,
}

/// Read-only mapping from package identifier to hand-curated setup steps.
#[derive(Debug, Clone, Default)]
pub struct FallbackTable {
    order: Vec<String>,
    entries: HashMap<String, Vec<SetupStep>>,
}

static BUILTIN: Lazy<FallbackTable> = Lazy::new(|| match FallbackTable::parse(EMBEDDED_TABLE) {
    Ok(table) => table,
    Err(err) => {
        log::error!("builtin fallback table unusable: {err}");
        FallbackTable::default()
    }
});

impl FallbackTable {
    /// The table shipped with the crate, parsed once per process.
    pub fn builtin() -> &'static FallbackTable {
        &BUILTIN
    }

    pub fn parse(source: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(source)?;
        let mut table = Self::default();
        for entry in file.package {
            if table.entries.contains_key(&entry.name) {
                return Err(MinerError::DuplicateEntry(entry.name));
            }
            let steps = entry.steps.into_iter().map(SetupStep::from_line).collect();
            table.order.push(entry.name.clone());
            table.entries.insert(entry.name, steps);
        }
        Ok(table)
    }

    /// Exact-match lookup; unknown identifiers yield an empty list.
    pub fn steps_for(&self, package: &str) -> Vec<SetupStep> {
        self.entries.get(package).cloned().unwrap_or_default()
    }

    /// Identifiers in table order.
    pub fn known_packages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Steps from the builtin table for `package`.
pub fn static_steps(package: &str) -> Vec<SetupStep> {
    FallbackTable::builtin().steps_for(package)
}
