//! Init operation - write starter configuration files.

use std::path::Path;

use autocrud_core::{File, FileRules, Overwrite, WriteResult};
use autocrud_manifest::{DEFAULT_CONFIG, EXAMPLE_SCHEMA};
use eyre::Result;

use crate::reports::{InitFile, InitReport};

/// Execute the init operation.
///
/// Existing files are left untouched.
pub fn init(dir: &Path) -> Result<InitReport> {
    let rules = FileRules {
        overwrite: Overwrite::IfMissing,
    };

    let files = [("crud.toml", DEFAULT_CONFIG), ("schema.toml", EXAMPLE_SCHEMA)]
        .into_iter()
        .map(|(name, content)| {
            let result = File::new(dir.join(name), content)
                .with_rules(rules.clone())
                .write()?;
            Ok(InitFile {
                path: name.to_string(),
                written: result == WriteResult::Written,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(InitReport {
        dir: dir.to_path_buf(),
        files,
    })
}
