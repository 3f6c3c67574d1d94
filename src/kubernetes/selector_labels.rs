use std::collections::BTreeMap;

use super::Labels;

/// Match labels of a workload selector. Only ever derived from the pod
/// template's [`Labels`] so the selector matches the pods it ships with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorLabels(BTreeMap<String, String>);

impl From<&Labels> for SelectorLabels {
    fn from(value: &Labels) -> Self {
        Self(value.into())
    }
}

impl From<SelectorLabels> for BTreeMap<String, String> {
    fn from(value: SelectorLabels) -> Self {
        value.0
    }
}

impl From<&SelectorLabels> for BTreeMap<String, String> {
    fn from(value: &SelectorLabels) -> Self {
        value.0.clone()
    }
}
