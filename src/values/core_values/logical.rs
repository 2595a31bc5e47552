use core::fmt::Display;
use core::ops::Not;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Tri-state logical element. The discriminants are the legacy byte codes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive,
)]
#[repr(i8)]
pub enum Logical {
    False = 0,
    True = 1,
    NA = -1,
}

impl Logical {
    pub fn is_na(&self) -> bool {
        *self == Logical::NA
    }

    /// Returns `None` for NA.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Logical::True => Some(true),
            Logical::False => Some(false),
            Logical::NA => None,
        }
    }
}

impl From<bool> for Logical {
    fn from(value: bool) -> Self {
        if value { Logical::True } else { Logical::False }
    }
}

impl Not for Logical {
    type Output = Logical;

    fn not(self) -> Self::Output {
        match self {
            Logical::True => Logical::False,
            Logical::False => Logical::True,
            Logical::NA => Logical::NA,
        }
    }
}

impl Display for Logical {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Logical::True => write!(f, "TRUE"),
            Logical::False => write!(f, "FALSE"),
            Logical::NA => write!(f, "NA"),
        }
    }
}
