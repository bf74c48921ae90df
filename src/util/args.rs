use std::path::PathBuf;

use clap::Parser;

use crate::output;

pub struct Args {
    pub output: PathBuf,
    pub quiet: bool,
    pub log_dir: Option<PathBuf>,
}

impl Args {
    pub fn parse() -> Self {
        Self::from(ArgsCli::parse())
    }
}

impl From<ArgsCli> for Args {
    fn from(args: ArgsCli) -> Self {
        let ArgsCli {
            output,
            quiet,
            log_dir,
        } = args;

        Self {
            output: output.unwrap_or_else(output::default_path),
            quiet,
            log_dir,
        }
    }
}

#[derive(Parser)]
#[clap(about = DESCRIPTION)]
struct ArgsCli {
    #[clap(short, long, value_name = "PATH")]
    /// Where to write the badge [default: result/result.svg]
    output: Option<PathBuf>,
    #[clap(short, long, action)]
    /// Only display errors
    quiet: bool,
    #[clap(long, value_name = "DIR")]
    /// Also write debug logs into a daily rotating file in this directory
    log_dir: Option<PathBuf>,
}

static DESCRIPTION: &str = r#"
Signs into programmers.co.kr and renders the user's statistics
(skill level, score, solved coding tests, rank) into an SVG badge.

Credentials are read from the env variables PROGRAMMERS_TOKEN_ID
and PROGRAMMERS_TOKEN_PW, or from a `.env` file."#;
