use std::fmt;

use crate::presentation::formatters::format_timestamp;
use crate::presentation::view_models::AccountViewModel;

pub struct AccountView<'a> {
    data: &'a AccountViewModel,
}

impl<'a> AccountView<'a> {
    pub fn new(data: &'a AccountViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for AccountView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {}",
            "email",
            self.data.email.as_deref().unwrap_or("-")
        )?;
        writeln!(f, "{:<12} {}", "user id", self.data.user_id)?;

        let mut expires = format_timestamp(self.data.expires_at);
        if self.data.expired {
            expires.push_str(" (expired, refreshed on next use)");
        }
        writeln!(f, "{:<12} {}", "expires", expires)
    }
}
