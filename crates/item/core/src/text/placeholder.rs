use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Placeholder values owned by a definition. Ordered for deterministic snapshots.
pub type Placeholders = BTreeMap<String, String>;

/// Anything that can resolve `{name}` tokens.
///
/// The core never fetches values itself; callers hand in a mapping before each
/// render.
pub trait PlaceholderSource {
    fn resolve(&self, name: &str) -> Option<&str>;
}

impl PlaceholderSource for BTreeMap<String, String> {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<S: BuildHasher> PlaceholderSource for HashMap<String, String, S> {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PlaceholderSource for [(&str, &str)] {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }
}

impl<const N: usize> PlaceholderSource for [(&str, &str); N] {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.as_slice().resolve(name)
    }
}

/// Source with no values: every token is stripped.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPlaceholders;

impl PlaceholderSource for NoPlaceholders {
    fn resolve(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Replaces every `{name}` in `template` in a single pass.
///
/// - known names are replaced by their value
/// - unknown names are removed together with their braces
/// - substituted values are not scanned again
/// - a `{` without a closing `}` (or with another `{` before it) is literal text
pub fn substitute<P>(template: &str, placeholders: &P) -> String
where
    P: PlaceholderSource + ?Sized,
{
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        match after_open.find(['{', '}']) {
            Some(close) if after_open.as_bytes()[close] == b'}' => {
                let name = &after_open[..close];
                if let Some(value) = placeholders.resolve(name) {
                    output.push_str(value);
                }
                rest = &after_open[close + 1..];
            }
            _ => {
                output.push('{');
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}
