use anyhow::Result;
use is_terminal::IsTerminal;
use serde::Serialize;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::args::OutputFormat;
use crate::presentation::view_models::{CommandResultViewModel, CsvExport};
use crate::presentation::ConsoleRenderer;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    data_dir: PathBuf,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, data_dir: PathBuf) -> Self {
        Self { format, data_dir }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Render a view model in the configured output format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display + CsvExport,
    {
        let color = self.format == OutputFormat::Plain && std::io::stdout().is_terminal();
        ConsoleRenderer::new(self.format, color).render(view_model)
    }
}
