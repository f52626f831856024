use clap::Parser;
use std::path::PathBuf;

/// Credit burn report
#[derive(Parser, Debug, Clone, Default)]
#[command(author, version = version(), about, long_about = None)]
pub struct Args {
    /// Optional snapshot file to read instead of `../data/terminal_analytics.json` next to the binary.
    #[clap(long = "data-file", value_name = "FILE")]
    pub data_file: Option<PathBuf>,

    /// Print debug logs to stderr.
    #[clap(short, long = "verbose", action)]
    pub verbose: bool,
}

mod config_ext {
    use super::*;
    use config::{
        Map,
        Source,
        Value,
    };
    use std::collections::HashMap;

    impl Source for Args {
        fn clone_into_box(&self) -> Box<dyn Source + Send + Sync> {
            Box::new((*self).clone())
        }

        fn collect(&self) -> Result<Map<String, Value>, config::ConfigError> {
            let mut cache = HashMap::<String, Value>::new();
            if let Some(data_file) = &self.data_file {
                cache.insert("data_file".to_string(), data_file.display().to_string().into());
            }
            if self.verbose {
                cache.insert("verbose".to_string(), true.into());
            }
            Ok(cache)
        }
    }
}

pub fn version() -> String {
    let author = clap::crate_authors!();
    let config_dir_path = crate::get_config_dir().display().to_string();

    format!(
        "\
{version}

Authors: {author}

Config directory: {config_dir_path}",
        version = env!("CARGO_PKG_VERSION"),
    )
}
