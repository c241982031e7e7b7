use {
    anyhow::{Context, Result},
    clap::{Args, Parser},
    log::{debug, error},
    release_bump::{
        commands::bump_version::{self, CommandArgs},
        utils::reporter,
    },
    std::{error::Error, io::IsTerminal, path::PathBuf},
};

#[derive(Parser)]
#[command(
    name = "release-bump",
    about = "Bump the version in package.json and package-lock.json",
    version
)]
struct ReleaseBump {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(flatten)]
    command: CommandArgs,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        help = "Run in DIR instead of the current directory"
    )]
    pub cwd: Option<PathBuf>,

    #[arg(long, help = "Print only the new version, even on a terminal")]
    pub plain: bool,
}

fn main() {
    match try_main() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            error!("Error: {err}");
            for (i, cause) in err.chain().skip(1).enumerate() {
                error!("  {}: {}", i.saturating_add(1), cause);
            }
            std::process::exit(1);
        }
    }
}

fn try_main() -> Result<i32> {
    let cli = ReleaseBump::parse();

    let level = if cli.global.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let directory = match cli.global.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to get the current directory")?,
    };
    let interactive = !cli.global.plain && std::io::stdout().is_terminal();

    let mut reporter = reporter::for_mode(interactive);
    let outcome = bump_version::run(&cli.command, &directory, reporter.as_mut());
    if let Some(err) = outcome.error() {
        let mut cause = err.source();
        while let Some(inner) = cause {
            debug!("caused by: {inner}");
            cause = inner.source();
        }
    }
    Ok(outcome.exit_code())
}
