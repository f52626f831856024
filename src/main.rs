use clap::Parser;
use color_eyre::Result;
use credit_burn_report::{
    init_errors,
    init_logging,
    run,
    Args,
    Config,
};

fn main() -> Result<()> {
    init_errors()?;
    let config = Config::new(Args::parse())?;
    init_logging(&config)?;

    run(&config)
}
