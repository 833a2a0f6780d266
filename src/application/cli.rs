use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ExporterName;
use crate::domain::services::actions::help_text;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn arg_service_url() -> Arg {
    return Arg::new(ConfigKey::ServiceURL.to_string())
        .short('u')
        .long(ConfigKey::ServiceURL.to_string())
        .env("JOBFIT_SERVICE_URL")
        .num_args(1)
        .help(format!(
            "Base URL of the resume scoring service. [default: {}]",
            Config::default(ConfigKey::ServiceURL)
        ));
}

fn arg_service_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::ServiceHealthCheckTimeout.to_string())
        .long(ConfigKey::ServiceHealthCheckTimeout.to_string())
        .env("JOBFIT_SERVICE_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(
            format!("Time to wait in milliseconds before timing out when health checking the scoring service at startup. [default: {}]", Config::default(ConfigKey::ServiceHealthCheckTimeout)),
        );
}

fn arg_exporter() -> Arg {
    return Arg::new(ConfigKey::Exporter.to_string())
        .short('e')
        .long(ConfigKey::Exporter.to_string())
        .env("JOBFIT_EXPORTER")
        .num_args(1)
        .help(format!(
            "The format used when exporting a match report. [default: {}]",
            Config::default(ConfigKey::Exporter)
        ))
        .value_parser(PossibleValuesParser::new(ExporterName::VARIANTS));
}

fn arg_export_dir() -> Arg {
    return Arg::new(ConfigKey::ExportDir.to_string())
        .long(ConfigKey::ExportDir.to_string())
        .env("JOBFIT_EXPORT_DIR")
        .num_args(1)
        .help(format!(
            "Directory where exported match reports are saved. [default: {}]",
            Config::default(ConfigKey::ExportDir)
        ));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("jobfit")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(help_text())
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_service_url())
        .arg(arg_service_health_check_timeout())
        .arg(arg_exporter())
        .arg(arg_export_dir())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("JOBFIT_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        );
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
