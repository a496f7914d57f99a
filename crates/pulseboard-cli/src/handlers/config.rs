use anyhow::Result;
use pulseboard_runtime::config::CONFIG_FILE;
use pulseboard_runtime::{Config, SessionStore};

use super::HandlerContext;
use crate::presentation::presenters;

pub fn show(ctx: &HandlerContext) -> Result<()> {
    let config_path = ctx.data_dir().join(CONFIG_FILE);
    let config = Config::load(ctx.data_dir())?;
    ctx.render(presenters::present_config_show(
        ctx.data_dir(),
        &config_path,
        &config,
    ))
}

pub fn init(
    ctx: &HandlerContext,
    url: String,
    anon_key: String,
    posts_table: Option<String>,
) -> Result<()> {
    let config_path = ctx.data_dir().join(CONFIG_FILE);

    // Environment overrides are deliberately not baked into the file
    let mut config = Config::load_from(&config_path)?;
    config.backend.url = Some(url);
    config.backend.anon_key = Some(anon_key);
    if let Some(table) = posts_table {
        config.backend.posts_table = table;
    }
    config.endpoint()?;

    config.save_to(&config_path)?;
    ctx.render(presenters::present_config_saved(
        ctx.data_dir(),
        &config_path,
        &config,
    ))
}

/// Printed when `pulseboard` runs with no command and nobody is signed in
pub fn guidance(ctx: &HandlerContext) -> Result<()> {
    let config = Config::load(ctx.data_dir())?;
    let configured = config.endpoint().is_ok();
    let signed_in = SessionStore::new(ctx.data_dir()).load()?.is_some();
    ctx.render(presenters::present_guidance(
        ctx.data_dir(),
        configured,
        signed_in,
    ))
}
