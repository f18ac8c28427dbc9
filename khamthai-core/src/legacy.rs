//! Deprecated entry points kept for backward compatibility

use std::fmt;

use crate::classifier::is_authentic;

/// Target of the `tracing` event emitted by [`legacy_check`]
pub const DEPRECATION_TARGET: &str = "khamthai::deprecation";

/// Describes a call to a deprecated entry point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// Name that was called
    pub deprecated: &'static str,
    /// Name to call instead
    pub replacement: &'static str,
}

impl DeprecationNotice {
    /// Notice for [`legacy_check`]
    pub const LEGACY_CHECK: Self = Self {
        deprecated: "legacy_check",
        replacement: "is_authentic",
    };
}

impl fmt::Display for DeprecationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is deprecated, use {} instead",
            self.deprecated, self.replacement
        )
    }
}

/// Same as [`legacy_check`], reporting the deprecation through `notify`
///
/// `notify` is called exactly once, before the word is classified. The
/// result is always identical to [`is_authentic`].
pub fn legacy_check_with<F>(word: &str, notify: F) -> bool
where
    F: FnOnce(&DeprecationNotice),
{
    notify(&DeprecationNotice::LEGACY_CHECK);
    is_authentic(word)
}

/// Old name of [`is_authentic`]
///
/// Emits one `warn`-level `tracing` event per call on the
/// [`DEPRECATION_TARGET`] target, then delegates.
#[deprecated(since = "0.1.0", note = "use is_authentic instead")]
pub fn legacy_check(word: &str) -> bool {
    legacy_check_with(word, |notice| {
        tracing::warn!(
            target: DEPRECATION_TARGET,
            deprecated = notice.deprecated,
            replacement = notice.replacement,
            "{notice}"
        );
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_message() {
        assert_eq!(
            DeprecationNotice::LEGACY_CHECK.to_string(),
            "legacy_check is deprecated, use is_authentic instead"
        );
    }

    #[test]
    fn test_notify_called_once_per_call() {
        let mut calls = 0;
        for word in ["มะม่วง", "สามารถ", ""] {
            legacy_check_with(word, |notice| {
                assert_eq!(*notice, DeprecationNotice::LEGACY_CHECK);
                calls += 1;
            });
        }
        assert_eq!(calls, 3);
    }

    #[test]
    #[allow(deprecated)]
    fn test_legacy_check_matches_is_authentic() {
        for word in ["มะม่วง", "ตะวัน", "สามารถ", "อิสริยาภรณ์", "ศึก", "Avocado", ""] {
            assert_eq!(legacy_check(word), is_authentic(word), "{word}");
        }
    }
}
