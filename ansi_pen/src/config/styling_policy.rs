// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// Environment variable that turns styling off when it is set to anything other than
/// `""` or `"0"`. See <https://no-color.org/>.
pub const NO_COLOR_ENV_VAR: &str = "NO_COLOR";

/// Whether a pen frames its writes with style and reset sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StylingPolicy {
    #[default]
    Enabled,
    /// Payloads are written unmodified, with no sequences around them.
    Disabled,
}

impl StylingPolicy {
    #[must_use]
    pub const fn is_enabled(self) -> bool { matches!(self, StylingPolicy::Enabled) }
}

impl From<bool> for StylingPolicy {
    fn from(enabled: bool) -> Self {
        if enabled {
            StylingPolicy::Enabled
        } else {
            StylingPolicy::Disabled
        }
    }
}

/// Process wide styling policy, used by [`Pen::from_env`].
///
/// 1. An override set with [`set_override`] always wins.
/// 2. Otherwise the `NO_COLOR` environment variable is examined, every time
///    [`detect`] is called.
///
/// # Testing support
///
/// Tests that call [`set_override`] or [`clear_override`] must be annotated with
/// `#[serial]` from the [serial_test](https://crates.io/crates/serial_test) crate, since
/// tests run in parallel and share this global.
///
/// [`Pen::from_env`]: crate::Pen::from_env
/// [`set_override`]: global_styling_policy::set_override
/// [`clear_override`]: global_styling_policy::clear_override
/// [`detect`]: global_styling_policy::detect
pub mod global_styling_policy {
    #[allow(clippy::wildcard_imports)]
    use super::*;

    static STYLING_POLICY_GLOBAL: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);
    const NOT_SET_VALUE: i8 = -1;

    #[must_use]
    pub fn detect() -> StylingPolicy {
        match try_get_override() {
            Some(it) => it,
            None => examine_env_vars_to_determine_styling_policy(),
        }
    }

    pub fn set_override(value: StylingPolicy) {
        tracing::debug!(?value, "styling policy override set");
        STYLING_POLICY_GLOBAL.store(i8::from(value), Ordering::SeqCst);
    }

    pub fn clear_override() {
        tracing::debug!("styling policy override cleared");
        STYLING_POLICY_GLOBAL.store(NOT_SET_VALUE, Ordering::SeqCst);
    }

    #[must_use]
    pub fn try_get_override() -> Option<StylingPolicy> {
        StylingPolicy::try_from(STYLING_POLICY_GLOBAL.load(Ordering::SeqCst)).ok()
    }
}

#[must_use]
pub fn examine_env_vars_to_determine_styling_policy() -> StylingPolicy {
    let no_color = env::var(NO_COLOR_ENV_VAR).ok();
    if no_color_disables_styling(no_color.as_deref()) {
        tracing::debug!(?no_color, "styling disabled by {NO_COLOR_ENV_VAR}");
        StylingPolicy::Disabled
    } else {
        StylingPolicy::Enabled
    }
}

/// `value` is the content of `NO_COLOR`, or [`None`] if it is not set.
#[must_use]
pub fn no_color_disables_styling(value: Option<&str>) -> bool {
    match value {
        None | Some("" | "0") => false,
        Some(_) => true,
    }
}

mod convert_between_styling_policy_and_i8 {
    impl TryFrom<i8> for super::StylingPolicy {
        type Error = i8;

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(super::StylingPolicy::Enabled),
                2 => Ok(super::StylingPolicy::Disabled),
                _ => Err(value),
            }
        }
    }

    impl From<super::StylingPolicy> for i8 {
        #[rustfmt::skip]
        fn from(value: super::StylingPolicy) -> Self {
            match value {
                super::StylingPolicy::Enabled  => 1,
                super::StylingPolicy::Disabled => 2,
            }
        }
    }
}
