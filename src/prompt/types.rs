use serde::{Deserialize, Serialize};

/// A validated (and, when requested, confirmed) answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    /// Single selection or a single line of text.
    One(String),
    /// Multi-selection values or collected lines, first-occurrence order.
    Many(Vec<String>),
    /// Yes/no result.
    Bool(bool),
}

impl Answer {
    pub fn as_one(&self) -> Option<&str> {
        match self {
            Answer::One(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            Answer::Many(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Answer::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// One-line rendering used by the confirmation sub-dialog.
    pub(crate) fn summary(&self) -> String {
        match self {
            Answer::One(value) => value.clone(),
            Answer::Many(values) => values.join(", "),
            Answer::Bool(true) => "yes".to_string(),
            Answer::Bool(false) => "no".to_string(),
        }
    }
}

/// How an option prompt lists its choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Numbered list on one line; selection by number or label.
    #[default]
    Inline,
    /// One option per line with a letter code; selection by letter or label.
    Menu,
}

impl std::str::FromStr for DisplayMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "inline" => Ok(DisplayMode::Inline),
            "menu" => Ok(DisplayMode::Menu),
            other => Err(crate::Error::Config(format!(
                "unrecognized display mode: {other:?} (expected \"inline\" or \"menu\")"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_joins_many_with_commas() {
        let answer = Answer::Many(vec!["Apple".to_string(), "Cherry".to_string()]);
        assert_eq!(answer.summary(), "Apple, Cherry");
    }

    #[test]
    fn display_mode_parses_legacy_strings() {
        assert_eq!("inline".parse::<DisplayMode>().unwrap(), DisplayMode::Inline);
        assert_eq!(" Menu ".parse::<DisplayMode>().unwrap(), DisplayMode::Menu);
        assert!("fancy".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn answer_serializes_to_json() {
        let json = serde_json::to_string(&Answer::One("Banana".to_string())).unwrap();
        assert_eq!(json, r#"{"One":"Banana"}"#);
    }
}
