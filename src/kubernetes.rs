mod constants;
mod image_pull_policy;
mod labels;
mod resource;
mod resource_name;
mod resource_namespace;
mod selector_labels;

pub use constants::*;
pub use image_pull_policy::ImagePullPolicy;
pub use labels::Labels;
pub use resource::Resource;
pub use resource_name::ResourceName;
pub use resource_namespace::ObjectNamespace;
pub use selector_labels::SelectorLabels;
