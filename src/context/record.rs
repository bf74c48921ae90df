use eyre::{Context as _, Result};

use crate::{config::Credentials, model::UserRecord};

use super::Context;

impl Context {
    /// Sign in, then request and deserialize the user's record.
    pub async fn request_user_record(&self, credentials: &Credentials) -> Result<UserRecord> {
        let session = self
            .client
            .sign_in(credentials)
            .await
            .context("failed to sign in")?;

        let bytes = self
            .client
            .user_record(&session)
            .await
            .context("failed to request user record")?;

        UserRecord::from_slice(&bytes)
    }
}
