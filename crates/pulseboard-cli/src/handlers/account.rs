use anyhow::Result;
use chrono::Utc;
use pulseboard_runtime::{Error as RuntimeError, Pulseboard, SESSION_NOT_FOUND, SessionStore};
use tokio::runtime::Runtime;
use tracing::debug;

use super::HandlerContext;
use crate::presentation::presenters;

pub fn login(ctx: &HandlerContext, runtime: &Runtime, email: &str, password: &str) -> Result<()> {
    let app = Pulseboard::open(ctx.data_dir())?;
    let session = runtime.block_on(app.login(email, password))?;
    ctx.render(presenters::present_login(&session, Utc::now()))
}

pub fn logout(ctx: &HandlerContext, runtime: &Runtime) -> Result<()> {
    let was_signed_in = match Pulseboard::open(ctx.data_dir()) {
        Ok(app) => runtime.block_on(app.logout())?,
        // Without a backend there is nothing to revoke; just drop the file
        Err(RuntimeError::NotConfigured(reason)) => {
            debug!(%reason, "backend not configured, clearing local session only");
            SessionStore::new(ctx.data_dir()).clear()?
        }
        Err(err) => return Err(err.into()),
    };
    ctx.render(presenters::present_logout(was_signed_in))
}

pub fn whoami(ctx: &HandlerContext) -> Result<()> {
    let Some(session) = SessionStore::new(ctx.data_dir()).load()? else {
        anyhow::bail!("{} (run `pulseboard login`)", SESSION_NOT_FOUND);
    };
    ctx.render(presenters::present_whoami(&session, Utc::now()))
}
