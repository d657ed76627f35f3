//! Golf skill verdicts
//!
//! Everything here is a pure function of the first letter of a name.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Yes,
    No,
}

/// Which result screen to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageVariant {
    Celebratory,
    Discouraging,
    Intensified, // R names get the harsher copy
}

/// Copy for a result screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub icon: &'static str,
    pub headline: &'static str,
    pub line: String,
    pub subline: String,
}

/// Outcome of a single submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub name: String,
    pub verdict: Verdict,
    pub is_r_name: bool,
    pub variant: MessageVariant,
}

/// Whitespace as a browser's `String.prototype.trim` sees it: Unicode
/// whitespace except NEL (U+0085), plus the byte order mark.
fn is_blank_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{0085}') || c == '\u{FEFF}'
}

/// The name with surrounding blanks removed
pub fn trim_name(name: &str) -> &str {
    name.trim_matches(is_blank_char)
}

/// First character after trimming, uppercased
pub fn first_letter(name: &str) -> Option<char> {
    trim_name(name)
        .chars()
        .next()
        .and_then(|c| c.to_uppercase().next())
}

pub fn is_r_name(name: &str) -> bool {
    first_letter(name) == Some('R')
}

/// Decide whether someone is good at golf.
///
/// Blank names and anything that isn't one of the lucky letters are a no.
pub fn resolve(name: &str) -> Verdict {
    match first_letter(name) {
        // Fixed overrides first
        Some('C' | 'J' | 'Z') => Verdict::Yes,
        Some('R') => Verdict::No,
        // Vowels
        Some('A' | 'E' | 'I' | 'O' | 'U') => Verdict::Yes,
        // Late in the alphabet
        Some('T' | 'V' | 'W' | 'X' | 'Y') => Verdict::Yes,
        _ => Verdict::No,
    }
}

impl Assessment {
    /// Assess a submitted name. Returns `None` for blank input.
    pub fn of(name: &str) -> Option<Self> {
        if trim_name(name).is_empty() {
            return None;
        }

        let verdict = resolve(name);
        let is_r_name = is_r_name(name);

        Some(Self {
            name: name.to_string(),
            verdict,
            is_r_name,
            variant: MessageVariant::select(verdict, is_r_name),
        })
    }

    pub fn message(&self) -> Message {
        self.variant.message(&self.name)
    }
}

impl MessageVariant {
    pub fn select(verdict: Verdict, is_r_name: bool) -> Self {
        match (verdict, is_r_name) {
            (Verdict::Yes, _) => MessageVariant::Celebratory,
            (Verdict::No, true) => MessageVariant::Intensified,
            (Verdict::No, false) => MessageVariant::Discouraging,
        }
    }

    pub fn message(&self, name: &str) -> Message {
        match self {
            MessageVariant::Celebratory => Message {
                icon: "🏆",
                headline: "YES!",
                line: format!("{}, you're a golf legend!", name),
                subline: "Your swing is poetry in motion. The green is your canvas!".to_string(),
            },
            MessageVariant::Discouraging => Message {
                icon: "⛳",
                headline: "NOT QUITE...",
                line: format!("{}, golf might not be your calling", name),
                subline: "But hey, there's always mini golf!".to_string(),
            },
            MessageVariant::Intensified => Message {
                icon: "💀",
                headline: "ABSOLUTELY NOT!",
                line: "Nah you're still bad gang".to_string(),
                subline: format!(
                    "{}, you're an embarrassment to the course. Your swing is so terrible, \
                     even the ball is ashamed. Maybe try a different sport... or better yet, don't.",
                    name
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(set: &str) -> impl Iterator<Item = char> + '_ {
        set.chars()
    }

    #[test]
    fn test_blank_names_are_no() {
        for name in ["", " ", "   ", "\t\n"] {
            assert_eq!(resolve(name), Verdict::No, "{:?}", name);
            assert!(Assessment::of(name).is_none());
        }
    }

    #[test]
    fn test_override_letters() {
        for c in letters("CJZ") {
            let name = format!("{}ody", c);
            assert_eq!(resolve(&name), Verdict::Yes);
            assert_eq!(resolve(&name.to_lowercase()), Verdict::Yes);
        }

        assert_eq!(resolve("Rick"), Verdict::No);
        assert_eq!(resolve("rick"), Verdict::No);
        assert!(is_r_name("  rick"));
    }

    #[test]
    fn test_yes_letters() {
        for c in letters("AEIOUTVWXY") {
            assert_eq!(resolve(&c.to_string()), Verdict::Yes, "{}", c);
            assert_eq!(resolve(&c.to_ascii_lowercase().to_string()), Verdict::Yes, "{}", c);
        }
    }

    #[test]
    fn test_no_letters() {
        for c in letters("BDFGHKLMNPQS") {
            let name = format!("{}am", c);
            assert_eq!(resolve(&name), Verdict::No, "{}", c);
            assert!(!is_r_name(&name));
        }
    }

    #[test]
    fn test_leading_whitespace_and_case() {
        assert_eq!(resolve("  ollie "), Verdict::Yes);
        for name in ["charlie", "CHARLIE", "Charlie"] {
            assert_eq!(resolve(name), Verdict::Yes);
        }
        assert_eq!(first_letter("  zed"), Some('Z'));
        assert_eq!(first_letter(""), None);
    }

    #[test]
    fn test_trim_matches_browser_whitespace() {
        assert_eq!(resolve("\u{FEFF}Charlie"), Verdict::Yes);
        assert_eq!(resolve("\u{00A0}\u{3000}Ava\u{2028}"), Verdict::Yes);
        assert!(Assessment::of("\u{FEFF} ").is_none());

        // NEL isn't trimmed, so it's the first character
        assert_eq!(first_letter("\u{0085}Charlie"), Some('\u{0085}'));
        assert_eq!(resolve("\u{0085}Charlie"), Verdict::No);
        assert!(Assessment::of("\u{0085}").is_some());
    }

    #[test]
    fn test_non_letters_fall_through_to_no() {
        for name in ["42", "_underscore", "Ørjan", "!bang"] {
            assert_eq!(resolve(name), Verdict::No, "{}", name);
        }
    }

    #[test]
    fn test_scenarios() {
        let charlie = Assessment::of("Charlie").unwrap();
        assert_eq!(charlie.verdict, Verdict::Yes);
        assert_eq!(charlie.variant, MessageVariant::Celebratory);

        let randy = Assessment::of("Randy").unwrap();
        assert_eq!(randy.verdict, Verdict::No);
        assert!(randy.is_r_name);
        assert_eq!(randy.variant, MessageVariant::Intensified);

        let sam = Assessment::of("Sam").unwrap();
        assert_eq!(sam.verdict, Verdict::No);
        assert!(!sam.is_r_name);
        assert_eq!(sam.variant, MessageVariant::Discouraging);
    }

    #[test]
    fn test_message_copy() {
        let msg = Assessment::of("Charlie").unwrap().message();
        assert_eq!(msg.headline, "YES!");
        assert_eq!(msg.line, "Charlie, you're a golf legend!");

        let msg = Assessment::of("Sam").unwrap().message();
        assert_eq!(msg.headline, "NOT QUITE...");
        assert_eq!(msg.line, "Sam, golf might not be your calling");

        let msg = Assessment::of("Randy").unwrap().message();
        assert_eq!(msg.icon, "💀");
        assert!(msg.subline.starts_with("Randy, you're an embarrassment"));
    }

    #[test]
    fn test_assessment_json() {
        let json = serde_json::to_value(Assessment::of("Randy").unwrap()).unwrap();
        assert_eq!(json["verdict"], "no");
        assert_eq!(json["is_r_name"], true);
        assert_eq!(json["variant"], "intensified");
    }
}
