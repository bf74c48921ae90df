use std::path::Path;

use eyre::{Context as _, Result};

use crate::{
    badge::Badge,
    client::Client,
    config::{Credentials, Endpoints},
    output,
};

mod record;

pub struct Context {
    client: Client,
}

impl Context {
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        let client = Client::new(endpoints).context("failed to create client")?;

        Ok(Self { client })
    }

    /// Fetch the user's statistics and write them as a badge to `output`.
    ///
    /// Nothing is written unless every request succeeded.
    pub async fn run(&self, credentials: &Credentials, output: &Path) -> Result<()> {
        let record = self.request_user_record(credentials).await?;
        let badge = Badge::from(&record);

        info!(
            skill_level = &*badge.level,
            score = &*badge.score,
            solved = &*badge.solved,
            rank = &*badge.rank,
            "Received user record"
        );

        output::write_badge(output, &badge.render()).context("failed to write badge")?;
        info!("Successfully created badge at {}", output.display());

        Ok(())
    }
}
