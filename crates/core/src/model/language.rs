use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of languages a question carries buffers for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Java,
    Cpp,
    Python,
    Javascript,
}

impl Language {
    /// Every supported language, in display order.
    pub const ALL: [Language; 4] = [
        Language::Java,
        Language::Cpp,
        Language::Python,
        Language::Javascript,
    ];

    /// Wire tag used in provider payloads and per-language maps.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::Python => "python",
            Language::Javascript => "javascript",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::Python => "Python",
            Language::Javascript => "JavaScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error type for parsing a `Language` from its wire tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLanguageError {
    raw: String,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language tag: {}", self.raw)
    }
}

impl std::error::Error for ParseLanguageError {}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "java" => Ok(Language::Java),
            "cpp" => Ok(Language::Cpp),
            "python" => Ok(Language::Python),
            "javascript" => Ok(Language::Javascript),
            other => Err(ParseLanguageError {
                raw: other.to_string(),
            }),
        }
    }
}

/// Total map with exactly one slot per `Language`.
///
/// Modeled as a struct rather than a `HashMap` so "all four keys are always
/// present" holds by construction wherever a per-language map exists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMap<T> {
    java: T,
    cpp: T,
    python: T,
    javascript: T,
}

impl<T> LanguageMap<T> {
    /// Build a map by evaluating `f` once per language.
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(Language) -> T) -> Self {
        Self {
            java: f(Language::Java),
            cpp: f(Language::Cpp),
            python: f(Language::Python),
            javascript: f(Language::Javascript),
        }
    }

    #[must_use]
    pub fn get(&self, language: Language) -> &T {
        match language {
            Language::Java => &self.java,
            Language::Cpp => &self.cpp,
            Language::Python => &self.python,
            Language::Javascript => &self.javascript,
        }
    }

    pub fn get_mut(&mut self, language: Language) -> &mut T {
        match language {
            Language::Java => &mut self.java,
            Language::Cpp => &mut self.cpp,
            Language::Python => &mut self.python,
            Language::Javascript => &mut self.javascript,
        }
    }

    pub fn set(&mut self, language: Language, value: T) {
        *self.get_mut(language) = value;
    }

    /// Iterate entries in `Language::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        Language::ALL.iter().map(move |lang| (*lang, self.get(*lang)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn language_tag_roundtrip() {
        for lang in Language::ALL {
            let parsed: Language = lang.as_str().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert!("rust".parse::<Language>().is_err());
    }

    #[test]
    fn map_holds_all_four_slots() {
        let map = LanguageMap::from_fn(|lang| lang.as_str().to_string());
        assert_eq!(map.iter().count(), 4);
        assert_eq!(map.get(Language::Cpp), "cpp");
    }

    #[test]
    fn set_replaces_exactly_one_slot() {
        let mut map = LanguageMap::from_fn(|_| String::new());
        map.set(Language::Python, "pass".to_string());
        assert_eq!(map.get(Language::Python), "pass");
        assert_eq!(map.get(Language::Java), "");
    }
}
