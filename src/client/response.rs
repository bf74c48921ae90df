use std::{
    error::Error as StdError,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
};

use bytes::Bytes;
use http::StatusCode;

/// Response body kept around for error messages.
pub struct ResponseBody(String);

impl From<Bytes> for ResponseBody {
    fn from(bytes: Bytes) -> Self {
        Self(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl Display for ResponseBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.0.is_empty() {
            Ok(())
        } else {
            write!(f, "; Response: {}", self.0)
        }
    }
}

/// The remote answered with a status other than `200 OK`.
pub struct StatusError {
    pub status: StatusCode,
    pub url: Box<str>,
    pub body: ResponseBody,
}

impl Display for StatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "failed with status code {} when requesting url {}{}",
            self.status, self.url, self.body
        )
    }
}

impl Debug for StatusError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(self, f)
    }
}

impl StdError for StatusError {}
