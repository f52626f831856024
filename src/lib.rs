#[macro_use]
extern crate tracing;

mod logging;

use color_eyre::Result;
pub use credit_burn_config::{
    Args,
    Config,
};
use credit_burn_dashboard::{
    Report,
    Snapshot,
    Theme,
};
use eyre::Context as _;
pub use logging::init_logging;

/// Installs the color-eyre report handler and a panic hook: detailed backtraces in debug builds,
/// a crash report file in release builds.
pub fn init_errors() -> Result<()> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_HOMEPAGE")
        ))
        .display_location_section(cfg!(debug_assertions))
        .into_hooks();
    eyre_hook.install()?;

    std::panic::set_hook(Box::new(move |panic_info| {
        #[cfg(not(debug_assertions))]
        {
            let metadata = human_panic::metadata!();
            let file_path = human_panic::handle_dump(&metadata, panic_info);
            human_panic::print_msg(file_path, &metadata).expect("human-panic: printing error message to console failed");
            eprintln!("{}", panic_hook.panic_report(panic_info));
        }
        let msg = format!("{}", panic_hook.panic_report(panic_info));
        error!("Error: {}", strip_ansi_escapes::strip_str(msg));

        #[cfg(debug_assertions)]
        {
            better_panic::Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        std::process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Loads the snapshot named by `config` and prints the report to stdout.
pub fn run(config: &Config) -> Result<()> {
    print!("{}", render(config)?);
    debug!("Report written");
    Ok(())
}

#[instrument(level = "debug", skip_all)]
fn render(config: &Config) -> Result<String> {
    let path = config.data_file()?;
    info!(path = %path.display(), "Rendering report");

    let snapshot = Snapshot::load(&path).wrap_err("Cannot render the report without a snapshot")?;
    Ok(Report::new(&snapshot, config, Theme::default()).format())
}
