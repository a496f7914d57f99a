use pulseboard_runtime::Config;
use pulseboard_types::mask_secret;
use std::path::Path;

use crate::presentation::view_models::{
    CommandResultViewModel, ConfigViewModel, Guidance, GuidanceViewModel, SettingsViewModel,
    StatusBadge,
};

pub fn present_config(data_dir: &Path, config_file: &Path, config: &Config) -> ConfigViewModel {
    ConfigViewModel {
        data_dir: data_dir.display().to_string(),
        config_file: config_file.display().to_string(),
        config_file_exists: config_file.exists(),
        url: config.backend.url.clone(),
        anon_key: config.backend.anon_key.as_deref().map(mask_secret),
        posts_table: config.backend.posts_table.clone(),
        window_days: config.dashboard.window_days,
        recent_limit: config.dashboard.recent_limit,
    }
}

pub fn present_config_show(
    data_dir: &Path,
    config_file: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    let result = CommandResultViewModel::new(present_config(data_dir, config_file, config));
    if config.backend.url.is_none() || config.backend.anon_key.is_none() {
        return result.with_suggestion(
            Guidance::new("Configure the Supabase project")
                .with_command("pulseboard config init --url <URL> --anon-key <KEY>"),
        );
    }
    result
}

pub fn present_config_saved(
    data_dir: &Path,
    config_file: &Path,
    config: &Config,
) -> CommandResultViewModel<ConfigViewModel> {
    CommandResultViewModel::new(present_config(data_dir, config_file, config))
        .with_badge(StatusBadge::success("Configuration saved"))
        .with_suggestion(Guidance::new("Sign in").with_command("pulseboard login --email <EMAIL>"))
}

/// Settings page entries for the dashboard
pub fn present_settings(
    data_dir: &Path,
    config: &Config,
    signed_in_as: Option<String>,
) -> SettingsViewModel {
    let unset = || "(not set)".to_string();
    SettingsViewModel {
        entries: vec![
            (
                "Signed in as".to_string(),
                signed_in_as.unwrap_or_else(|| "-".to_string()),
            ),
            (
                "Backend URL".to_string(),
                config.backend.url.clone().unwrap_or_else(unset),
            ),
            (
                "API key".to_string(),
                config
                    .backend
                    .anon_key
                    .as_deref()
                    .map(mask_secret)
                    .unwrap_or_else(unset),
            ),
            ("Posts table".to_string(), config.backend.posts_table.clone()),
            (
                "Comparison window".to_string(),
                format!("{} days", config.dashboard.window_days),
            ),
            (
                "Recent posts shown".to_string(),
                config.dashboard.recent_limit.to_string(),
            ),
            ("Data directory".to_string(), data_dir.display().to_string()),
        ],
    }
}

pub fn present_guidance(
    data_dir: &Path,
    configured: bool,
    signed_in: bool,
) -> CommandResultViewModel<GuidanceViewModel> {
    CommandResultViewModel::new(GuidanceViewModel {
        configured,
        signed_in,
        data_dir: data_dir.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_anon_key_is_masked() {
        let mut config = Config::default();
        config.backend.url = Some("https://abc.supabase.co".to_string());
        config.backend.anon_key = Some("eyJhbGciOiJIUzI1NiJ9.payload.sig".to_string());

        let vm = present_config(
            &PathBuf::from("/data"),
            &PathBuf::from("/data/config.toml"),
            &config,
        );
        let key = vm.anon_key.unwrap();
        assert!(!key.contains("payload"));
        assert!(key.starts_with("eyJh"));
    }

    #[test]
    fn test_unconfigured_show_suggests_init() {
        let result = present_config_show(
            &PathBuf::from("/data"),
            &PathBuf::from("/data/config.toml"),
            &Config::default(),
        );
        assert_eq!(result.suggestions.len(), 1);
    }
}
