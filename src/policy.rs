use serde::{Deserialize, Serialize};

/// Equivalence flags for a single `identical` call.
///
/// The defaults are the historical defaults of the `identical` builtin:
/// numeric equality and NA folding are on, attributes are compared as a set,
/// and closures are compared including their environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdenticalPolicy {
    /// Compare doubles with `==` instead of bitwise (`num.eq`).
    pub num_eq: bool,
    /// Fold all NA and all NaN payloads into one class each (`single.NA`).
    pub single_na: bool,
    /// Ignore the insertion order of attributes (`attrib.as.set`).
    pub attrib_as_set: bool,
    /// Accepted for compatibility; closures carry no bytecode here.
    pub ignore_bytecode: bool,
    /// Skip the enclosing environment check for closures.
    pub ignore_environment: bool,
    /// Accepted for compatibility; source spans never take part in the
    /// comparison.
    pub ignore_srcref: bool,
}

impl Default for IdenticalPolicy {
    fn default() -> Self {
        IdenticalPolicy {
            num_eq: true,
            single_na: true,
            attrib_as_set: true,
            ignore_bytecode: false,
            ignore_environment: false,
            ignore_srcref: false,
        }
    }
}

impl IdenticalPolicy {
    pub fn with_num_eq(mut self, num_eq: bool) -> Self {
        self.num_eq = num_eq;
        self
    }
    pub fn with_single_na(mut self, single_na: bool) -> Self {
        self.single_na = single_na;
        self
    }
    pub fn with_attrib_as_set(mut self, attrib_as_set: bool) -> Self {
        self.attrib_as_set = attrib_as_set;
        self
    }
    pub fn with_ignore_environment(mut self, ignore_environment: bool) -> Self {
        self.ignore_environment = ignore_environment;
        self
    }

    /// Parses a policy from a JSON object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
