#[macro_use]
extern crate tracing;

mod app_config;
mod args;

pub use app_config::{
    default_data_file,
    get_config_dir,
};
pub use args::Args;
use color_eyre::Result;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::HashMap,
    path::{
        Path,
        PathBuf,
    },
};

/// Settings for one report run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot to render. Falls back to [`default_data_file`] when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Debug logging, from `--verbose` or the config file.
    #[serde(default)]
    pub verbose: bool,
    pub title: String,
    /// Model name shown in the header and the footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer_link: Option<String>,
    /// Width of the `─` rules framing every section.
    pub panel_width: usize,
    /// Number of countries listed in the traffic table.
    pub top_countries: usize,
    /// Offset added to the UTC peak hour to show it in local time.
    pub local_utc_offset_hours: i64,
    pub local_zone_label: String,
}

const DEFAULT_CONFIG: &str = include_str!("default-config.yaml");

impl Default for Config {
    fn default() -> Self {
        serde_yml::from_str(DEFAULT_CONFIG).expect("Failed to parse default config")
    }
}

impl config::Source for Config {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new((*self).clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        let mut cache = HashMap::<String, config::Value>::new();
        if let Some(data_file) = &self.data_file {
            cache.insert("data_file".to_string(), data_file.display().to_string().into());
        }
        cache.insert("verbose".to_string(), self.verbose.into());
        cache.insert("title".to_string(), self.title.clone().into());
        if let Some(model) = &self.model {
            cache.insert("model".to_string(), model.clone().into());
        }
        if let Some(footer_link) = &self.footer_link {
            cache.insert("footer_link".to_string(), footer_link.clone().into());
        }
        cache.insert("panel_width".to_string(), (self.panel_width as u64).into());
        cache.insert("top_countries".to_string(), (self.top_countries as u64).into());
        cache.insert("local_utc_offset_hours".to_string(), self.local_utc_offset_hours.into());
        cache.insert("local_zone_label".to_string(), self.local_zone_label.clone().into());
        Ok(cache)
    }
}

impl Config {
    /// Layers the built-in defaults, an optional `config.yaml` in the config directory and the
    /// command-line arguments, in increasing order of precedence.
    pub fn new(args: Args) -> Result<Self, config::ConfigError> {
        Self::with_config_dir(args, &get_config_dir())
    }

    fn with_config_dir(args: Args, config_dir: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder().add_source(Config::default());

        let config_files = [("config.yaml", config::FileFormat::Yaml)];

        for (file, format) in &config_files {
            let source = config::File::from(config_dir.join(file))
                .format(*format)
                .required(false);
            builder = builder.add_source(source);
        }

        builder = builder.add_source(args);

        let cfg: Self = builder.build()?.try_deserialize()?;
        debug!(config_dir = %config_dir.display(), "Configuration loaded");

        Ok(cfg)
    }

    /// Resolves the snapshot path: the configured `data_file`, or the fixed location next to the
    /// binary.
    pub fn data_file(&self) -> Result<PathBuf> {
        match &self.data_file {
            Some(path) => Ok(path.clone()),
            None => default_data_file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use temp_dir::TempDir;

    #[test]
    fn defaults_come_from_embedded_yaml() {
        let config = Config::default();
        assert_eq!(config.title, "Terminal Usage Report");
        assert_eq!(config.panel_width, 72);
        assert_eq!(config.top_countries, 15);
        assert_eq!(config.local_utc_offset_hours, 7);
        assert_eq!(config.local_zone_label, "WIB");
        assert_eq!(config.data_file, None);
        assert!(!config.verbose);
    }

    #[test]
    fn args_override_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.child("config.yaml"),
            "title: Usage\nmodel: Sonnet\ndata_file: /from/file.json\n",
        )
        .unwrap();

        let args = Args {
            data_file: Some(PathBuf::from("/from/args.json")),
            verbose: true,
        };
        let config = Config::with_config_dir(args, dir.path()).unwrap();

        assert_eq!(config.title, "Usage");
        assert_eq!(config.model.as_deref(), Some("Sonnet"));
        assert_eq!(config.data_file, Some(PathBuf::from("/from/args.json")));
        assert!(config.verbose);
        assert_eq!(config.panel_width, 72);
    }

    #[test]
    fn verbose_from_config_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.child("config.yaml"), "verbose: true\n").unwrap();

        let config = Config::with_config_dir(Args::default(), dir.path()).unwrap();
        assert!(config.verbose);
    }

    #[test]
    fn missing_config_file_is_fine() {
        let dir = TempDir::new().unwrap();
        let config = Config::with_config_dir(Args::default(), dir.path()).unwrap();
        assert_eq!(config.top_countries, 15);
        assert_eq!(config.data_file().unwrap(), default_data_file().unwrap());
    }
}
