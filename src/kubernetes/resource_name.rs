use std::{fmt::Display, ops::Deref};

/// `.metadata.name` of a built resource, also used as its file name.
#[derive(Debug)]
pub struct ResourceName(String);

impl ResourceName {
    #[must_use]
    pub fn new(value: String) -> Self {
        Self(value)
    }
}

impl Deref for ResourceName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for ResourceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
