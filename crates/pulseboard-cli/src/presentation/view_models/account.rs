use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use super::CsvExport;

#[derive(Debug, Serialize)]
pub struct AccountViewModel {
    pub user_id: String,
    pub email: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    pub expired: bool,
}

#[derive(Debug, Serialize)]
pub struct LogoutViewModel {
    pub was_signed_in: bool,
}

impl fmt::Display for AccountViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use crate::presentation::views::AccountView;
        write!(f, "{}", AccountView::new(self))
    }
}

impl fmt::Display for LogoutViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.was_signed_in {
            writeln!(f, "Local session removed.")
        } else {
            writeln!(f, "No stored session.")
        }
    }
}

impl CsvExport for AccountViewModel {
    fn csv_header(&self) -> Vec<&'static str> {
        vec!["user_id", "email", "expires_at", "expired"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.user_id.clone(),
            self.email.clone().unwrap_or_default(),
            self.expires_at
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default(),
            self.expired.to_string(),
        ]]
    }
}

impl CsvExport for LogoutViewModel {
    fn csv_header(&self) -> Vec<&'static str> {
        vec!["was_signed_in"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        vec![vec![self.was_signed_in.to_string()]]
    }
}
