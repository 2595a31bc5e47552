pub trait Identity {
    /// Check if two handles refer to the same underlying instance (same
    /// pointer, same address).
    fn same_ref(&self, other: &Self) -> bool;
}

/// Asserts that two values are identical under the default policy.
#[macro_export]
macro_rules! assert_identical {
    ($left_val:expr, $right_val:expr $(,)?) => {
        $crate::assert_identical!(
            $left_val,
            $right_val,
            $crate::policy::IdenticalPolicy::default()
        )
    };
    ($left_val:expr, $right_val:expr, $policy:expr $(,)?) => {
        match (&$left_val, &$right_val, &$policy) {
            (left_val, right_val, policy) => {
                let result =
                    $crate::identical::identical(left_val, right_val, policy);
                match result {
                    Ok(true) => {}
                    result => core::panic!(
                        "identity assertion failed: `identical(left, right)`\n  left: `{:?}`,\n right: `{:?}`,\n result: `{:?}`",
                        left_val, right_val, result
                    ),
                }
            }
        }
    };
}

/// Asserts that two values are not identical under the default policy.
#[macro_export]
macro_rules! assert_not_identical {
    ($left_val:expr, $right_val:expr $(,)?) => {
        $crate::assert_not_identical!(
            $left_val,
            $right_val,
            $crate::policy::IdenticalPolicy::default()
        )
    };
    ($left_val:expr, $right_val:expr, $policy:expr $(,)?) => {
        match (&$left_val, &$right_val, &$policy) {
            (left_val, right_val, policy) => {
                let result =
                    $crate::identical::identical(left_val, right_val, policy);
                match result {
                    Ok(false) => {}
                    result => core::panic!(
                        "non-identity assertion failed: `!identical(left, right)`\n  left: `{:?}`,\n right: `{:?}`,\n result: `{:?}`",
                        left_val, right_val, result
                    ),
                }
            }
        }
    };
}
