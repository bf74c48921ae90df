use std::fmt::{Display, Formatter, Result as FmtResult};

/// Cookies handed out on sign-in, replayed on the following request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Session {
    cookies: Vec<Box<str>>,
}

impl Session {
    /// Collect the `name=value` pairs of `Set-Cookie` header values,
    /// dropping their attributes.
    pub fn from_set_cookies<'a, I>(set_cookies: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let cookies = set_cookies
            .into_iter()
            .map(|cookie| cookie.split_once(';').map_or(cookie, |(pair, _)| pair))
            .map(str::trim)
            .filter(|pair| !pair.is_empty())
            .map(Box::from)
            .collect();

        Self { cookies }
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Value for the `Cookie` request header.
    pub fn cookie_header(&self) -> String {
        self.to_string()
    }
}

impl Display for Session {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut iter = self.cookies.iter();

        if let Some(cookie) = iter.next() {
            f.write_str(cookie)?;

            for cookie in iter {
                write!(f, "; {cookie}")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_attributes() {
        let session = Session::from_set_cookies(["a=1; Path=/", "b=2; Secure"]);

        assert_eq!(session.len(), 2);
        assert_eq!(session.cookie_header(), "a=1; b=2");
    }

    #[test]
    fn keeps_bare_pairs_and_order() {
        let session = Session::from_set_cookies([
            "_session=abc; HttpOnly; SameSite=Lax",
            "remember=yes",
            "csrf=x=y; Path=/",
        ]);

        assert_eq!(session.cookie_header(), "_session=abc; remember=yes; csrf=x=y");
    }

    #[test]
    fn skips_empty_values() {
        let session = Session::from_set_cookies(["", " ; Path=/", "a=1"]);

        assert_eq!(session.cookie_header(), "a=1");
    }

    #[test]
    fn empty() {
        let session = Session::from_set_cookies(Vec::<&str>::new());

        assert!(session.is_empty());
        assert_eq!(session.cookie_header(), "");
    }
}
