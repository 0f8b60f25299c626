//! Platform and locale provider adapters

use crate::application::ports::{LocaleProvider, Platform, PlatformProvider};

/// Platform provider based on the compilation target.
///
/// Collapses every Apple platform variant to `ios` except macOS; unknown
/// targets also report `ios`, matching the backend's expectations.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPlatformProvider;

impl PlatformProvider for SystemPlatformProvider {
    fn platform(&self) -> Platform {
        if cfg!(target_os = "macos") {
            Platform::Macos
        } else {
            Platform::Ios
        }
    }
}

/// Locale provider reading the process environment.
///
/// Best effort: extracts a language tag from `LC_ALL` or `LANG`
/// (`en_US.UTF-8` becomes `en-US`) and reports `None` when neither is set.
/// Hosts with access to a real locale API should supply their own provider.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvLocaleProvider;

impl EnvLocaleProvider {
    fn normalize(raw: &str) -> Option<String> {
        let tag = raw.split('.').next().unwrap_or(raw).trim();
        if tag.is_empty() || tag == "C" || tag == "POSIX" {
            return None;
        }
        Some(tag.replace('_', "-"))
    }
}

impl LocaleProvider for EnvLocaleProvider {
    fn locale(&self) -> Option<String> {
        ["LC_ALL", "LANG"]
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find_map(|value| Self::normalize(&value))
    }
}
