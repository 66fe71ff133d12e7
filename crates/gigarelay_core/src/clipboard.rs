use std::time::Duration;

/// How long a "copied" confirmation stays visible.
pub const COPIED_INDICATOR_DURATION: Duration = Duration::from_millis(1500);

/// Which result link a copy action refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    Page,
    Direct,
    Proxy,
}

impl CopyTarget {
    pub const ALL: [CopyTarget; 3] = [CopyTarget::Page, CopyTarget::Direct, CopyTarget::Proxy];

    pub fn label(self) -> &'static str {
        match self {
            CopyTarget::Page => "page",
            CopyTarget::Direct => "raw",
            CopyTarget::Proxy => "proxy",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|target| target.label().eq_ignore_ascii_case(label))
    }
}

/// Transient "just copied" marker.
///
/// Every successful copy bumps the generation; an expiry only clears the
/// marker when it carries the latest generation, so a second copy restarts
/// the timer instead of being cut short by the first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CopyIndicator {
    active: Option<CopyTarget>,
    generation: u64,
}

impl CopyIndicator {
    pub fn active(&self) -> Option<CopyTarget> {
        self.active
    }

    /// Marks `target` as copied and returns the generation to expire.
    pub fn mark(&mut self, target: CopyTarget) -> u64 {
        self.generation += 1;
        self.active = Some(target);
        self.generation
    }

    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.active.is_none() {
            return false;
        }
        self.active = None;
        true
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_expiry_is_ignored() {
        let mut indicator = CopyIndicator::default();
        let first = indicator.mark(CopyTarget::Page);
        let second = indicator.mark(CopyTarget::Proxy);

        assert!(!indicator.expire(first));
        assert_eq!(indicator.active(), Some(CopyTarget::Proxy));
        assert!(indicator.expire(second));
        assert_eq!(indicator.active(), None);
    }

    #[test]
    fn labels_match_result_rows() {
        assert_eq!(CopyTarget::from_label("RAW"), Some(CopyTarget::Direct));
        assert_eq!(CopyTarget::from_label("files"), None);
    }
}
