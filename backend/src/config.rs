use anyhow::{Context, Result};
use meetup::MeetupConfig;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub public_dir: PathBuf,
    pub meetup: MeetupConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let meetup_path =
            env::var("MEETUP_CONFIG").unwrap_or_else(|_| "config/meetup".to_string());

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            public_dir: env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| "Public".to_string())
                .into(),
            meetup: load_meetup_config(::config::File::with_name(&meetup_path).required(false))
                .with_context(|| format!("Failed to load Meetup settings from {}", meetup_path))?,
        })
    }
}

/// Read the Meetup settings from `file`, with `MEETUP_*` environment
/// variables taking precedence (`MEETUP_HOST`, `MEETUP_GROUP_NAME`, ...).
///
/// Missing keys are not an error here; the API client reports them.
pub fn load_meetup_config<S>(file: S) -> Result<MeetupConfig>
where
    S: ::config::Source + Send + Sync + 'static,
{
    load_meetup_layers(file, ::config::Environment::with_prefix("MEETUP"))
}

/// The file and the environment are deserialized separately, then merged:
/// the file spells keys `group-name` while the environment yields
/// `group_name`, and both in one map would be a duplicate field.
///
/// `MEETUP_CONFIG` also lands in the environment layer as a `config` key,
/// which `MeetupConfig` does not have and ignores.
fn load_meetup_layers<S>(file: S, env: ::config::Environment) -> Result<MeetupConfig>
where
    S: ::config::Source + Send + Sync + 'static,
{
    let from_file: MeetupConfig = ::config::Config::builder()
        .add_source(file)
        .build()?
        .try_deserialize()?;

    let from_env: MeetupConfig = ::config::Config::builder()
        .add_source(env.try_parsing(true))
        .build()?
        .try_deserialize()?;

    let meetup = from_file.overridden_by(from_env);
    if meetup.events_endpoint().is_none() {
        tracing::warn!("Meetup settings are incomplete; the events page will be empty");
    }

    Ok(meetup)
}
