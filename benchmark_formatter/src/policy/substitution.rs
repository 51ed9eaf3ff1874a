//!
//! Header label substitution.
//!

///
/// Header label substitution: every occurrence of `pattern` in a column key is
/// replaced with `replacement`.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    /// The substring to look for.
    pub pattern: String,
    /// The display text.
    pub replacement: String,
}

impl Substitution {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(pattern: &str, replacement: &str) -> Self {
        Self {
            pattern: pattern.to_owned(),
            replacement: replacement.to_owned(),
        }
    }

    ///
    /// Applies the substitution to `label`.
    ///
    pub fn apply(&self, label: &str) -> String {
        label.replace(self.pattern.as_str(), self.replacement.as_str())
    }
}
