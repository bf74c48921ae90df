use std::fmt::{Display, Formatter, Result as FmtResult};

use eyre::{Context as _, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Statistics returned by the user record endpoint.
///
/// The three sections are required; every statistic within them is optional.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub skill_check: SkillCheck,
    pub ranking: Ranking,
    pub coding_test: CodingTest,
}

impl UserRecord {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).context("failed to deserialize user record")
    }
}

#[derive(Debug, Deserialize)]
pub struct SkillCheck {
    pub level: Option<Stat>,
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
    pub score: Option<Stat>,
    pub rank: Option<Stat>,
}

#[derive(Debug, Deserialize)]
pub struct CodingTest {
    pub solved: Option<Stat>,
}

/// A scalar statistic kept in its textual JSON form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stat(Box<str>);

impl Stat {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Stat {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let text = match Value::deserialize(d)? {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            other => other.to_string(),
        };

        Ok(Self(text.into_boxed_str()))
    }
}

impl Display for Stat {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat(s: &Option<Stat>) -> Option<&str> {
        s.as_ref().map(Stat::as_str)
    }

    #[test]
    fn full_record() {
        let json = br#"{
            "skillCheck": { "level": 4 },
            "ranking": { "score": 1500, "rank": 120 },
            "codingTest": { "solved": 37, "total": 500 },
            "userId": 12345
        }"#;

        let record = UserRecord::from_slice(json).unwrap();

        assert_eq!(stat(&record.skill_check.level), Some("4"));
        assert_eq!(stat(&record.ranking.score), Some("1500"));
        assert_eq!(stat(&record.ranking.rank), Some("120"));
        assert_eq!(stat(&record.coding_test.solved), Some("37"));
    }

    #[test]
    fn null_and_absent_leaves() {
        let json = br#"{
            "skillCheck": {},
            "ranking": { "score": null, "rank": 7 },
            "codingTest": { "solved": null }
        }"#;

        let record = UserRecord::from_slice(json).unwrap();

        assert_eq!(stat(&record.skill_check.level), None);
        assert_eq!(stat(&record.ranking.score), None);
        assert_eq!(stat(&record.ranking.rank), Some("7"));
        assert_eq!(stat(&record.coding_test.solved), None);
    }

    #[test]
    fn scalars_render_verbatim() {
        let json = br#"{
            "skillCheck": { "level": "Lv. 3" },
            "ranking": { "score": 12.5, "rank": true },
            "codingTest": { "solved": [1, 2] }
        }"#;

        let record = UserRecord::from_slice(json).unwrap();

        assert_eq!(stat(&record.skill_check.level), Some("Lv. 3"));
        assert_eq!(stat(&record.ranking.score), Some("12.5"));
        assert_eq!(stat(&record.ranking.rank), Some("true"));
        assert_eq!(stat(&record.coding_test.solved), Some("[1,2]"));
    }

    #[test]
    fn missing_section_is_fatal() {
        let json = br#"{ "skillCheck": { "level": 1 }, "ranking": {} }"#;
        let err = UserRecord::from_slice(json).unwrap_err();

        assert!(format!("{err:?}").contains("codingTest"));
    }

    #[test]
    fn null_section_is_fatal() {
        let json = br#"{ "skillCheck": null, "ranking": {}, "codingTest": {} }"#;

        assert!(UserRecord::from_slice(json).is_err());
    }

    #[test]
    fn malformed_json() {
        assert!(UserRecord::from_slice(b"<html>").is_err());
    }
}
