use serde::Serialize;
use std::fmt;

use super::CsvExport;

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub data_dir: String,
    pub config_file: String,
    pub config_file_exists: bool,
    pub url: Option<String>,
    /// Masked; the full key is never printed
    pub anon_key: Option<String>,
    pub posts_table: String,
    pub window_days: i64,
    pub recent_limit: usize,
}

impl ConfigViewModel {
    /// Label/value pairs in display order
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        let unset = || "(not set)".to_string();
        vec![
            ("data_dir", self.data_dir.clone()),
            ("config_file", self.config_file.clone()),
            ("backend.url", self.url.clone().unwrap_or_else(unset)),
            ("backend.anon_key", self.anon_key.clone().unwrap_or_else(unset)),
            ("backend.posts_table", self.posts_table.clone()),
            ("dashboard.window_days", self.window_days.to_string()),
            ("dashboard.recent_limit", self.recent_limit.to_string()),
        ]
    }
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (key, value) in self.entries() {
            writeln!(f, "{:<24} {}", key, value)?;
        }
        if !self.config_file_exists {
            writeln!(f)?;
            writeln!(f, "(config file not found; showing defaults and environment)")?;
        }
        Ok(())
    }
}

impl CsvExport for ConfigViewModel {
    fn csv_header(&self) -> Vec<&'static str> {
        vec!["key", "value"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.entries()
            .into_iter()
            .map(|(key, value)| vec![key.to_string(), value])
            .collect()
    }
}
