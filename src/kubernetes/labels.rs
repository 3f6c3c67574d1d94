use std::{collections::BTreeMap, ops::Deref};

use super::KUBEVIRT_IO_KEY;

/// Identifying labels of a component, keyed by the `kubevirt.io` domain label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels(BTreeMap<String, String>);

impl Labels {
    #[must_use]
    pub fn component(name: &str) -> Self {
        Self(BTreeMap::from([(KUBEVIRT_IO_KEY.into(), name.into())]))
    }
}

impl Deref for Labels {
    type Target = BTreeMap<String, String>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Labels> for BTreeMap<String, String> {
    fn from(value: Labels) -> Self {
        value.0
    }
}

impl From<&Labels> for BTreeMap<String, String> {
    fn from(value: &Labels) -> Self {
        value.0.clone()
    }
}
