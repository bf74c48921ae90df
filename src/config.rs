use std::{
    env,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

use serde::Serialize;

pub const ID_VAR: &str = "PROGRAMMERS_TOKEN_ID";
pub const PW_VAR: &str = "PROGRAMMERS_TOKEN_PW";

pub const SIGN_IN_URL: &str = "https://programmers.co.kr/api/v1/account/sign-in";
pub const USER_RECORD_URL: &str = "https://programmers.co.kr/api/v1/users/record";

/// Urls of the two remote endpoints.
#[derive(Clone, Debug)]
pub struct Endpoints {
    pub sign_in: Box<str>,
    pub user_record: Box<str>,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            sign_in: SIGN_IN_URL.into(),
            user_record: USER_RECORD_URL.into(),
        }
    }
}

/// Account email and password used to sign in.
///
/// Serializes into the sign-in payload `{"email": .., "password": ..}`.
#[derive(Serialize)]
pub struct Credentials {
    pub email: Box<str>,
    pub password: Box<str>,
}

impl Credentials {
    /// Read both credentials from the environment.
    pub fn from_env() -> Result<Self, MissingCredentials> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, MissingCredentials>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        match (lookup(ID_VAR), lookup(PW_VAR)) {
            (Some(email), Some(password)) => Ok(Self {
                email: email.into_boxed_str(),
                password: password.into_boxed_str(),
            }),
            (email, password) => {
                let missing = [(ID_VAR, email.is_none()), (PW_VAR, password.is_none())]
                    .into_iter()
                    .filter_map(|(name, missing)| missing.then_some(name))
                    .collect();

                Err(MissingCredentials { missing })
            }
        }
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// At least one of the credential env variables is unset.
#[derive(Debug)]
pub struct MissingCredentials {
    pub missing: Vec<&'static str>,
}

impl Display for MissingCredentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "환경 변수 {ID_VAR} 와 {PW_VAR}를 설정해주세요.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_present() {
        let creds = Credentials::from_lookup(|name| match name {
            ID_VAR => Some("me@example.com".to_owned()),
            PW_VAR => Some("hunter2".to_owned()),
            _ => None,
        })
        .unwrap();

        assert_eq!(&*creds.email, "me@example.com");
        assert_eq!(&*creds.password, "hunter2");
    }

    #[test]
    fn both_absent() {
        let err = Credentials::from_lookup(|_| None).unwrap_err();

        assert_eq!(err.missing, [ID_VAR, PW_VAR]);
        assert_eq!(
            err.to_string(),
            "환경 변수 PROGRAMMERS_TOKEN_ID 와 PROGRAMMERS_TOKEN_PW를 설정해주세요."
        );
    }

    #[test]
    fn password_absent() {
        let err = Credentials::from_lookup(|name| (name == ID_VAR).then(|| "id".to_owned()))
            .unwrap_err();

        assert_eq!(err.missing, [PW_VAR]);
    }

    #[test]
    fn debug_hides_password() {
        let creds = Credentials {
            email: "me@example.com".into(),
            password: "hunter2".into(),
        };

        let debug = format!("{creds:?}");
        assert!(debug.contains("me@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn default_endpoints() {
        let endpoints = Endpoints::default();

        assert_eq!(&*endpoints.sign_in, SIGN_IN_URL);
        assert_eq!(&*endpoints.user_record, USER_RECORD_URL);
    }
}
