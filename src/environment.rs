//! Ambient default-locale query.
//!
//! A browser exposes its preferred language directly; a process reads it
//! from the POSIX locale variables instead.

use std::env;

use tracing::debug;

use crate::locale::canonicalize_tag;

/// Variables consulted in order; the first non-empty one wins
const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_NUMERIC", "LANG"];

/// Source of the environment's preferred locale
pub trait LocaleEnvironment {
    /// Preferred language tag, or `None` when the environment does not say
    fn preferred_locale(&self) -> Option<String>;
}

impl<T: LocaleEnvironment + ?Sized> LocaleEnvironment for Box<T> {
    fn preferred_locale(&self) -> Option<String> {
        (**self).preferred_locale()
    }
}

/// Reads `LC_ALL`, `LC_NUMERIC` and `LANG`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl LocaleEnvironment for SystemEnvironment {
    fn preferred_locale(&self) -> Option<String> {
        let (variable, raw) = LOCALE_VARIABLES.iter().find_map(|name| {
            env::var(name)
                .ok()
                .filter(|value| !value.is_empty())
                .map(|value| (*name, value))
        })?;
        let locale = normalize_posix_locale(&raw);
        debug!(variable, raw = %raw, ?locale, "read ambient locale");
        locale
    }
}

/// An environment with a fixed answer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedEnvironment(pub Option<String>);

impl FixedEnvironment {
    pub fn new(locale: impl Into<String>) -> Self {
        Self(Some(locale.into()))
    }

    pub fn unknown() -> Self {
        Self(None)
    }
}

impl LocaleEnvironment for FixedEnvironment {
    fn preferred_locale(&self) -> Option<String> {
        self.0.clone()
    }
}

/// Turn a POSIX locale name such as `de_DE.UTF-8@euro` into `de-DE`
///
/// `C`, `POSIX` and names that do not form a language tag yield `None`.
pub fn normalize_posix_locale(raw: &str) -> Option<String> {
    let name = raw
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    if name.is_empty() || name == "C" || name == "POSIX" {
        return None;
    }
    canonicalize_tag(&name.replace('_', "-"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_posix_locale() {
        assert_eq!(normalize_posix_locale("de_DE.UTF-8").as_deref(), Some("de-DE"));
        assert_eq!(normalize_posix_locale("fr_FR@euro").as_deref(), Some("fr-FR"));
        assert_eq!(normalize_posix_locale("en-gb").as_deref(), Some("en-GB"));
        assert_eq!(normalize_posix_locale("ja").as_deref(), Some("ja"));
        assert_eq!(normalize_posix_locale("C"), None);
        assert_eq!(normalize_posix_locale("C.UTF-8"), None);
        assert_eq!(normalize_posix_locale("POSIX"), None);
        assert_eq!(normalize_posix_locale(""), None);
        assert_eq!(normalize_posix_locale("not a locale"), None);
    }

    #[test]
    fn test_system_environment_precedence() {
        temp_env::with_vars(
            [
                ("LC_ALL", None),
                ("LC_NUMERIC", Some("fr_FR.UTF-8")),
                ("LANG", Some("de_DE.UTF-8")),
            ],
            || {
                assert_eq!(SystemEnvironment.preferred_locale().as_deref(), Some("fr-FR"));
            },
        );
    }

    #[test]
    fn test_system_environment_skips_empty_values() {
        temp_env::with_vars(
            [
                ("LC_ALL", Some("")),
                ("LC_NUMERIC", None),
                ("LANG", Some("hi_IN.UTF-8")),
            ],
            || {
                assert_eq!(SystemEnvironment.preferred_locale().as_deref(), Some("hi-IN"));
            },
        );
    }

    #[test]
    fn test_system_environment_unknown() {
        temp_env::with_vars(
            [("LC_ALL", Some("C")), ("LC_NUMERIC", None), ("LANG", None)],
            || {
                assert_eq!(SystemEnvironment.preferred_locale(), None);
            },
        );
        temp_env::with_vars_unset(["LC_ALL", "LC_NUMERIC", "LANG"], || {
            assert_eq!(SystemEnvironment.preferred_locale(), None);
        });
    }

    #[test]
    fn test_fixed_environment() {
        assert_eq!(FixedEnvironment::new("ja-JP").preferred_locale().as_deref(), Some("ja-JP"));
        assert_eq!(FixedEnvironment::unknown().preferred_locale(), None);
    }
}
