//! Init command report data structures.

use std::path::PathBuf;

use serde::Serialize;

use super::output::{Output, Report};

/// Files created by `crud init`.
#[derive(Debug, Serialize)]
pub struct InitReport {
    pub dir: PathBuf,
    pub files: Vec<InitFile>,
}

#[derive(Debug, Serialize)]
pub struct InitFile {
    pub path: String,
    pub written: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        out.section(&format!("Initialized {}", self.dir.display()));
        for file in &self.files {
            if file.written {
                out.added_item(&file.path);
            } else {
                out.skipped_item(&format!("{} (exists, skipped)", file.path));
            }
        }

        out.newline();
        out.section("Next steps");
        out.list_item("describe your tables in schema.toml");
        out.list_item("crud generate Post");
    }
}
