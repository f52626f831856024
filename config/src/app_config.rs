use directories::ProjectDirs;
use eyre::{
    Context as _,
    OptionExt as _,
    Result,
};
use std::{
    env,
    path::PathBuf,
};

lazy_static::lazy_static! {
    pub(crate) static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    static ref CONFIG_FOLDER: Option<PathBuf> = env::var(format!("{}_CONFIG", PROJECT_NAME.clone()))
        .ok()
        .map(PathBuf::from);
}

/// Location of the snapshot relative to the installed binary.
const SNAPSHOT_RELATIVE_PATH: [&str; 3] = ["..", "data", "terminal_analytics.json"];

/// Directory searched for `config.yaml`, overridable with `CREDIT_BURN_CONFIG_CONFIG`.
pub fn get_config_dir() -> PathBuf {
    let directory = if let Some(s) = CONFIG_FOLDER.clone() {
        s
    } else if let Some(proj_dirs) = project_directory() {
        proj_dirs.config_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".config")
    };
    directory
}

/// The snapshot path used when nothing is configured: `<exe dir>/../data/terminal_analytics.json`.
pub fn default_data_file() -> Result<PathBuf> {
    let exe = env::current_exe().context("Failed to locate the running executable")?;
    let exe_dir = exe
        .parent()
        .ok_or_eyre("Executable path has no parent directory")?;
    Ok(SNAPSHOT_RELATIVE_PATH
        .iter()
        .fold(exe_dir.to_path_buf(), |path, segment| path.join(segment)))
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("app", "clawshi", env!("CARGO_PKG_NAME"))
}
