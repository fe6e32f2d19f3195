use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{IdeInfoError, Result};

/// Canonical identifier of a build target: `[@repo]//package/path:name`.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Label {
    workspace_name: Option<String>,
    package: String,
    target_name: String,
}

impl Label {
    /// Parses a label string. `//foo/bar` is shorthand for `//foo/bar:bar`.
    pub fn parse(label: &str) -> Result<Label> {
        let invalid = |reason: &'static str| IdeInfoError::InvalidLabel {
            label: label.to_string(),
            reason,
        };

        let (workspace_name, rest) = match label.strip_prefix('@') {
            Some(stripped) => {
                let idx = stripped
                    .find("//")
                    .ok_or_else(|| invalid("missing '//' after repository name"))?;
                let repo = &stripped[..idx];
                if repo.is_empty() {
                    return Err(invalid("repository name must not be empty"));
                }
                if repo.contains('/') || repo.contains(':') {
                    return Err(invalid("repository name must not contain '/' or ':'"));
                }
                (Some(repo.to_string()), &stripped[idx..])
            }
            None => (None, label),
        };

        let rest = rest
            .strip_prefix("//")
            .ok_or_else(|| invalid("must start with '//' or '@'"))?;
        let (package, target_name) = match rest.split_once(':') {
            Some(split) => split,
            None => (rest, rest.rsplit_once('/').map_or(rest, |(_, name)| name)),
        };

        if target_name.is_empty() {
            return Err(invalid("target name must not be empty"));
        }
        if target_name.contains(':') {
            return Err(invalid("target name must not contain ':'"));
        }
        if target_name.contains("//") {
            return Err(invalid("target name must not contain '//'"));
        }
        if package.starts_with('/') || package.ends_with('/') {
            return Err(invalid("package must not start or end with '/'"));
        }
        if package.contains("//") {
            return Err(invalid("package must not contain '//'"));
        }

        Ok(Label {
            workspace_name,
            package: package.to_string(),
            target_name: target_name.to_string(),
        })
    }

    /// External repository name, `None` for the main repository.
    pub fn workspace_name(&self) -> Option<&str> {
        self.workspace_name.as_deref()
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(workspace_name) = &self.workspace_name {
            write!(f, "@{}", workspace_name)?;
        }
        write!(f, "//{}:{}", self.package, self.target_name)
    }
}

impl FromStr for Label {
    type Err = IdeInfoError;

    fn from_str(s: &str) -> Result<Self> {
        Label::parse(s)
    }
}

impl TryFrom<String> for Label {
    type Error = IdeInfoError;

    fn try_from(value: String) -> Result<Self> {
        Label::parse(&value)
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_json_snapshot;
    use test_case::test_case;

    #[test_case("//foo/bar:baz", None, "foo/bar", "baz" ; "plain")]
    #[test_case("//:root", None, "", "root" ; "root_package")]
    #[test_case("//foo/bar", None, "foo/bar", "bar" ; "implicit_name")]
    #[test_case("@maven//com/google:guava", Some("maven"), "com/google", "guava" ; "external")]
    #[test_case("//foo:bar/baz.txt", None, "foo", "bar/baz.txt" ; "name_with_slash")]
    fn parse_valid(label: &str, workspace: Option<&str>, package: &str, name: &str) {
        let parsed = Label::parse(label).unwrap();
        assert_eq!(parsed.workspace_name(), workspace);
        assert_eq!(parsed.package(), package);
        assert_eq!(parsed.target_name(), name);
    }

    #[test_case("foo:bar" ; "no_prefix")]
    #[test_case("//foo:" ; "empty_name")]
    #[test_case("//" ; "empty")]
    #[test_case("//foo/:bar" ; "trailing_slash")]
    #[test_case("///foo:bar" ; "leading_slash")]
    #[test_case("//foo//bar:baz" ; "double_slash")]
    #[test_case("//foo:bar:baz" ; "two_colons")]
    #[test_case("@repo/x//foo:bar" ; "slash_in_repo")]
    #[test_case("@repo:foo" ; "repo_without_slashes")]
    #[test_case("//foo:a//b" ; "double_slash_in_name")]
    #[test_case("@//foo:bar" ; "empty_repo")]
    fn parse_invalid(label: &str) {
        let err = Label::parse(label).unwrap_err();
        assert!(matches!(err, IdeInfoError::InvalidLabel { label: l, .. } if l == label));
    }

    #[test]
    fn canonical_string() {
        assert_eq!(Label::parse("//foo/bar").unwrap().to_string(), "//foo/bar:bar");
        assert_eq!(
            Label::parse("@maven//com/google:guava").unwrap().to_string(),
            "@maven//com/google:guava"
        );
        assert_eq!(
            Label::parse("//foo/bar").unwrap(),
            "//foo/bar:bar".parse::<Label>().unwrap()
        );
    }

    #[test]
    fn serialization() {
        let label = Label::parse("//java/com/example:lib").unwrap();
        assert_json_snapshot!(label, @r#""//java/com/example:lib""#);
        assert_eq!(
            serde_json::from_str::<Label>(r#""//java/com/example:lib""#).unwrap(),
            label
        );
        assert!(serde_json::from_str::<Label>(r#""java:lib""#).is_err());
    }
}
