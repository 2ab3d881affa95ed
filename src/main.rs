use std::process;

use anyhow::{self, format_err, Context};
use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;

use dcaspt2gen::interfaces::cli::{log_heading, Cli};
use dcaspt2gen::interfaces::dfcoef::run_sum_dirac_dfcoef;
use dcaspt2gen::interfaces::input::Input;
use dcaspt2gen::io::settings::Settings;
use dcaspt2gen::io::AppDirInfo;

/// Configures the main diagnostic logger and the `dcaspt2gen-output` logger carrying the nicely
/// formatted derivation output.
fn init_logging(verbose: u8) -> Result<(), anyhow::Error> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{m}{n}")))
        .build();
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .logger(Logger::builder().build("dcaspt2gen-output", LevelFilter::Info))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|err| format_err!(err))?;
    log4rs::init_config(config).map_err(|err| format_err!(err))?;
    Ok(())
}

fn run(cli: &Cli) -> Result<(), anyhow::Error> {
    init_logging(cli.verbose)?;
    log_heading();

    let dirs = match cli.app_dir.as_ref() {
        Some(dir) => AppDirInfo::in_dir(dir)?,
        None => AppDirInfo::new()?,
    };
    let settings = Settings::load_or_create(&dirs.settings_file)
        .with_context(|| "Unable to load the application settings")?;

    if let (Some(dirac_output), Some(molecule)) =
        (cli.dirac_output.as_ref(), cli.molecule.as_ref())
    {
        let summary = run_sum_dirac_dfcoef(dirac_output, molecule)?;
        log::info!(
            target: "dcaspt2gen-output",
            "Classify the spinors of `{}` in a job file to generate inputs from it.",
            summary.display()
        );
    }

    let Some(config) = cli.config.as_ref() else {
        return Ok(());
    };
    let input = Input::from_yaml_file(config)?;
    input.handle(&dirs, &settings, cli.output.as_deref())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
