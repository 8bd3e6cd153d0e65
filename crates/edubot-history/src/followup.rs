// SPDX-FileCopyrightText: 2026 EduBot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned follow-up questions built from a previous answer.

use strum::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FollowUp {
    Explain,
    Hint,
    Example,
    Steps,
}

impl FollowUp {
    /// Question text that quotes `original` back to the tutor.
    pub fn prompt(self, original: &str) -> String {
        match self {
            FollowUp::Explain => format!("Can you explain \"{original}\" in simpler terms?"),
            FollowUp::Hint => format!("Can you give me a hint about \"{original}\"?"),
            FollowUp::Example => format!("Can you give me an example related to \"{original}\"?"),
            FollowUp::Steps => format!("Can you break down \"{original}\" into steps?"),
        }
    }

    /// Button-style label shown under a bot message.
    pub fn label(self) -> &'static str {
        match self {
            FollowUp::Explain => "Explain again",
            FollowUp::Hint => "Give a hint",
            FollowUp::Example => "Show example",
            FollowUp::Steps => "Break into steps",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn prompts_quote_the_original() {
        assert_eq!(
            FollowUp::Explain.prompt("x=2"),
            "Can you explain \"x=2\" in simpler terms?"
        );
        assert_eq!(
            FollowUp::Hint.prompt("x=2"),
            "Can you give me a hint about \"x=2\"?"
        );
        assert_eq!(
            FollowUp::Example.prompt("x=2"),
            "Can you give me an example related to \"x=2\"?"
        );
        assert_eq!(
            FollowUp::Steps.prompt("x=2"),
            "Can you break down \"x=2\" into steps?"
        );
    }

    #[test]
    fn parses_command_names() {
        assert_eq!(FollowUp::from_str("hint").unwrap(), FollowUp::Hint);
        assert_eq!(FollowUp::from_str("STEPS").unwrap(), FollowUp::Steps);
        assert!(FollowUp::from_str("quiz").is_err());
    }

    #[test]
    fn every_variant_has_distinct_label() {
        let labels: std::collections::HashSet<_> = FollowUp::iter().map(FollowUp::label).collect();
        assert_eq!(labels.len(), 4);
    }
}
