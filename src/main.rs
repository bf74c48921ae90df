#![deny(clippy::all, nonstandard_style, rust_2018_idioms)]

#[macro_use]
extern crate eyre;

#[macro_use]
extern crate tracing;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use eyre::{Context as _, Report, Result};
use tokio::{runtime::Builder as RuntimeBuilder, signal};

use self::{
    config::{Credentials, Endpoints, MissingCredentials},
    context::Context,
    util::Args,
};

mod badge;
mod client;
mod config;
mod context;
mod logging;
mod model;
mod output;
mod util;

fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    let args = Args::parse();
    let _log_worker_guard = logging::init(args.quiet, args.log_dir.as_deref());

    match dotenv {
        Ok(path) => debug!("Loaded env variables from {}", path.display()),
        Err(err) if err.not_found() => {}
        Err(err) => warn!("{:?}", Report::new(err).wrap_err("Failed to parse .env")),
    }

    let runtime = match RuntimeBuilder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!("{:?}", Report::new(err).wrap_err("Failed to build runtime"));

            return ExitCode::FAILURE;
        }
    };

    let credentials = Credentials::from_env();
    let mut stdout = io::stdout();

    match runtime.block_on(async_main(args, credentials, &mut stdout)) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:?}", err.wrap_err("Failed to create badge"));

            ExitCode::FAILURE
        }
    }
}

/// Missing credentials are not a failure: the guidance goes straight to
/// `out` so that no log filter can hide it.
async fn async_main<W: Write>(
    args: Args,
    credentials: Result<Credentials, MissingCredentials>,
    out: &mut W,
) -> Result<()> {
    let credentials = match credentials {
        Ok(credentials) => credentials,
        Err(missing) => {
            debug!("Missing env variables: {:?}", missing.missing);
            writeln!(out, "{missing}").context("failed to print guidance")?;

            return Ok(());
        }
    };

    let ctx = Context::new(Endpoints::default())?;

    tokio::select! {
        res = ctx.run(&credentials, &args.output) => res,
        res = signal::ctrl_c() => {
            res.context("failed to await ctrl+c")?;

            bail!("received Ctrl+C before the badge was written")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_credentials_print_guidance() {
        let tmp = tempfile::tempdir().unwrap();
        let output = tmp.path().join("result").join("result.svg");

        let args = Args {
            output: output.clone(),
            quiet: true,
            log_dir: None,
        };

        let missing = MissingCredentials {
            missing: vec![config::ID_VAR],
        };

        let mut out = Vec::new();
        async_main(args, Err(missing), &mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "환경 변수 PROGRAMMERS_TOKEN_ID 와 PROGRAMMERS_TOKEN_PW를 설정해주세요.\n"
        );
        assert!(!output.exists());
        assert!(!output.parent().unwrap().exists());
    }
}
