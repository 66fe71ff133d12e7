use super::catalog::{canonical, lookup, Strings, DEFAULT_CODE};

/// Derives the startup language code.
///
/// A persisted preference wins when it names a catalog entry. Otherwise the
/// primary subtag of the platform language tag is used (`"de-AT"` -> `"de"`,
/// `"pt_BR.UTF-8"` -> `"pt"`), falling back to [`DEFAULT_CODE`].
pub fn resolve_code(persisted: Option<&str>, platform_tag: Option<&str>) -> &'static str {
    if let Some(code) = persisted.and_then(|code| canonical(code.trim())) {
        return code;
    }
    platform_tag
        .map(primary_subtag)
        .and_then(|subtag| canonical(&subtag))
        .unwrap_or(DEFAULT_CODE)
}

/// Lowercased primary subtag of a BCP-47 or POSIX-style language tag.
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase()
}

/// Active language for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleState {
    code: &'static str,
}

impl Default for LocaleState {
    fn default() -> Self {
        Self { code: DEFAULT_CODE }
    }
}

impl LocaleState {
    pub fn resolve(persisted: Option<&str>, platform_tag: Option<&str>) -> Self {
        Self {
            code: resolve_code(persisted, platform_tag),
        }
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn strings(&self) -> &'static Strings {
        // `code` is only ever assigned from catalog keys.
        lookup(self.code).unwrap_or_else(default_strings)
    }

    /// Switches to `code` if it is a catalog key.
    ///
    /// Returns `true` when the caller should persist the new code. Unknown
    /// codes leave the state untouched and return `false`.
    pub fn select(&mut self, code: &str) -> bool {
        match canonical(code) {
            Some(known) => {
                self.code = known;
                true
            }
            None => false,
        }
    }
}

fn default_strings() -> &'static Strings {
    match lookup(DEFAULT_CODE) {
        Some(strings) => strings,
        None => unreachable!("default locale missing from catalog"),
    }
}
