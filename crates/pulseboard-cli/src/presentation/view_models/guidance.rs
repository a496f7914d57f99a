use serde::Serialize;
use std::fmt;

use super::CsvExport;

/// What to do next when `pulseboard` runs without a command
#[derive(Debug, Serialize)]
pub struct GuidanceViewModel {
    pub configured: bool,
    pub signed_in: bool,
    pub data_dir: String,
}

impl fmt::Display for GuidanceViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "pulseboard - post metrics dashboard\n")?;

        if !self.configured {
            writeln!(f, "Get started:")?;
            writeln!(
                f,
                "  pulseboard config init --url <SUPABASE_URL> --anon-key <KEY>"
            )?;
            writeln!(f, "  pulseboard login --email <EMAIL>\n")?;
        } else if !self.signed_in {
            writeln!(f, "Sign in to load your posts:")?;
            writeln!(f, "  pulseboard login --email <EMAIL>\n")?;
        } else {
            writeln!(f, "Quick commands:")?;
            writeln!(f, "  pulseboard dashboard          # Interactive dashboard")?;
            writeln!(f, "  pulseboard posts --limit 20   # Latest posts")?;
            writeln!(f, "  pulseboard summary            # Period-over-period metrics\n")?;
        }

        writeln!(f, "Data directory: {}", self.data_dir)?;
        writeln!(f, "For more commands:")?;
        writeln!(f, "  pulseboard --help")
    }
}

impl CsvExport for GuidanceViewModel {
    fn csv_header(&self) -> Vec<&'static str> {
        vec!["configured", "signed_in", "data_dir"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.configured.to_string(),
            self.signed_in.to_string(),
            self.data_dir.clone(),
        ]]
    }
}
