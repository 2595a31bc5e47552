use identical_core::IdenticalPolicy;
use identical_core::logger::init_logger;

pub mod attributes;
pub mod closures;
pub mod pairlists;

/// Every test calls this first so trace output is available with
/// `RUST_LOG=identical_core=trace`.
pub fn init() {
    init_logger();
}

/// All combinations of the flags that influence the result.
pub fn all_policies() -> Vec<IdenticalPolicy> {
    let mut policies = vec![];
    for num_eq in [true, false] {
        for single_na in [true, false] {
            for attrib_as_set in [true, false] {
                for ignore_environment in [true, false] {
                    policies.push(
                        IdenticalPolicy::default()
                            .with_num_eq(num_eq)
                            .with_single_na(single_na)
                            .with_attrib_as_set(attrib_as_set)
                            .with_ignore_environment(ignore_environment),
                    );
                }
            }
        }
    }
    policies
}
