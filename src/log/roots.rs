//! Black/gray classification of roots.
//!
//! The log does not say how strongly a root holds its object. Once the roots
//! section reaches the wrapper and global objects, everything that follows is
//! treated as gray. This is a heuristic keyed on description text and can be
//! wrong on unusual logs.

use crate::graph::RootColor;

#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    Exact(&'static str),
    Prefix(&'static str),
}

impl Matcher {
    fn matches(self, description: &str) -> bool {
        match self {
            Matcher::Exact(s) => description == s,
            Matcher::Prefix(p) => description.starts_with(p),
        }
    }
}

/// Evaluated in order; the first matching rule sets the running color.
pub const ROOT_COLOR_RULES: &[(Matcher, RootColor)] = &[
    (Matcher::Exact("XPC global object"), RootColor::Gray),
    (Matcher::Prefix("XPCWrappedNative"), RootColor::Gray),
    (Matcher::Prefix("XPCVariant"), RootColor::Gray),
    (Matcher::Prefix("nsXPCWrappedJS"), RootColor::Gray),
];

/// Running color for one pass over a roots section.
#[derive(Debug, Clone)]
pub struct RootClassifier {
    current: RootColor,
}

impl Default for RootClassifier {
    fn default() -> Self {
        Self {
            current: RootColor::Black,
        }
    }
}

impl RootClassifier {
    /// Color for the root described by `description`.
    ///
    /// The color only ever weakens: after the first gray switch, every later
    /// root is gray.
    pub fn classify(&mut self, description: &str) -> RootColor {
        if self.current.is_black() {
            if let Some((_, color)) = ROOT_COLOR_RULES
                .iter()
                .find(|(matcher, _)| matcher.matches(description))
            {
                self.current = self.current.max(*color);
            }
        }
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn switches_to_gray_on_marker_and_stays_gray() {
        let mut c = RootClassifier::default();
        let colors: Vec<RootColor> = [
            "nsDocument normal",
            "JS Object (Window)",
            "XPCWrappedNative (Window)",
            "nsDocument normal",
        ]
        .iter()
        .map(|d| c.classify(d))
        .collect();

        assert_eq!(
            colors,
            vec![
                RootColor::Black,
                RootColor::Black,
                RootColor::Gray,
                RootColor::Gray
            ]
        );
    }

    #[test]
    fn global_object_must_match_exactly() {
        let mut c = RootClassifier::default();
        assert_eq!(c.classify("XPC global object (sandbox)"), RootColor::Black);
        assert_eq!(c.classify("XPC global object"), RootColor::Gray);
    }

    #[test]
    fn every_prefix_triggers_the_switch() {
        for prefix in ["XPCVariant", "nsXPCWrappedJS", "XPCWrappedNative"] {
            let mut c = RootClassifier::default();
            assert_eq!(c.classify(&format!("{prefix} (nsIFoo)")), RootColor::Gray);
        }
    }
}
