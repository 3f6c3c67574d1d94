use std::fmt::Display;

#[derive(Debug)]
pub struct ObjectNamespace(String);

impl Display for ObjectNamespace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ObjectNamespace {
    fn from(value: String) -> Self {
        Self(value)
    }
}
