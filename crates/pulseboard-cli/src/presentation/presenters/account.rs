use chrono::{DateTime, Duration, Utc};
use pulseboard_types::Session;

use crate::presentation::view_models::{
    AccountViewModel, CommandResultViewModel, Guidance, LogoutViewModel, StatusBadge,
};

fn account(session: &Session, now: DateTime<Utc>) -> AccountViewModel {
    AccountViewModel {
        user_id: session.user.id.to_string(),
        email: session.user.email.clone(),
        expires_at: session.expires_at_datetime(),
        expired: session.is_expired(now, Duration::zero()),
    }
}

fn display_name(session: &Session) -> String {
    session
        .user
        .email
        .clone()
        .unwrap_or_else(|| session.user.id.to_string())
}

pub fn present_login(session: &Session, now: DateTime<Utc>) -> CommandResultViewModel<AccountViewModel> {
    CommandResultViewModel::new(account(session, now))
        .with_badge(StatusBadge::success(format!(
            "Signed in as {}",
            display_name(session)
        )))
        .with_suggestion(Guidance::new("Open the dashboard").with_command("pulseboard dashboard"))
}

pub fn present_whoami(session: &Session, now: DateTime<Utc>) -> CommandResultViewModel<AccountViewModel> {
    CommandResultViewModel::new(account(session, now))
}

pub fn present_logout(was_signed_in: bool) -> CommandResultViewModel<LogoutViewModel> {
    let badge = if was_signed_in {
        StatusBadge::success("Signed out")
    } else {
        StatusBadge::warning("Not signed in")
    };
    CommandResultViewModel::new(LogoutViewModel { was_signed_in }).with_badge(badge)
}
