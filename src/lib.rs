#[macro_use]
extern crate mopa;

extern crate alloc;

pub mod builtin;
pub mod error;
pub mod identical;
pub mod logger;
pub mod policy;
pub mod syntax;
pub mod traits;
pub mod values;

pub use identical::{identical, identical_with_visitor};
pub use policy::IdenticalPolicy;
