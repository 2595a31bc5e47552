use core::fmt::Display;

use internment::Intern;

use crate::traits::identity::Identity;

/// An interned identifier. Two symbols with the same name share one interned
/// instance, so comparison is a pointer check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol(Intern<String>);

impl Symbol {
    pub fn new(name: &str) -> Self {
        Symbol(Intern::new(name.to_string()))
    }

    pub fn name(&self) -> &str {
        self.0.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Identity for Symbol {
    fn same_ref(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Symbol::new(name)
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "`{}`", self.name())
    }
}
