use alloc::rc::Rc;
use core::fmt::{Debug, Formatter};

use crate::traits::identity::Identity;

/// A handle to native memory, identified by its address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExternalHandle {
    pub address: usize,
}

impl ExternalHandle {
    pub fn new(address: usize) -> Self {
        ExternalHandle { address }
    }
}

impl Identity for ExternalHandle {
    fn same_ref(&self, other: &Self) -> bool {
        self.address == other.address
    }
}

/// An object owned by a foreign host. The runtime never looks inside,
/// but the owner can get its concrete type back via `downcast_ref`.
pub trait ForeignObject: mopa::Any + Debug {}

mopafy!(ForeignObject);

#[derive(Clone)]
pub struct ForeignRef(Rc<dyn ForeignObject>);

impl ForeignRef {
    pub fn new<T: ForeignObject>(object: T) -> Self {
        ForeignRef(Rc::new(object))
    }

    pub fn object(&self) -> &dyn ForeignObject {
        self.0.as_ref()
    }
}

impl Identity for ForeignRef {
    fn same_ref(&self, other: &Self) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl Debug for ForeignRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "<foreign {:?}>", self.0)
    }
}
