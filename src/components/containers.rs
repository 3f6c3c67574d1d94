use std::collections::BTreeMap;

use k8s_openapi::{
    api::core::v1::{Container, ResourceRequirements},
    apimachinery::pkg::api::resource::Quantity,
};

use crate::kubernetes::{ImagePullPolicy, RESOURCE_REQUESTS_CPU, RESOURCE_REQUESTS_MEMORY};

use super::image;

/// The single container of a component workload.
///
/// The binary is expected at `/usr/bin/<name>` inside the image.
#[must_use]
pub fn new_containers(
    name: &str,
    namespace: &str,
    image_repository: &str,
    image_tag: &str,
    pull_policy: ImagePullPolicy,
    verbosity: &str,
) -> Vec<Container> {
    let args = vec![
        "--logtostderr=true".into(),
        format!("--v={verbosity}"),
        format!("--namespace={namespace}"),
    ];

    vec![Container {
        args: Some(args),
        command: Some(vec![format!("/usr/bin/{name}")]),
        image: Some(image::resolve(name, image_repository, image_tag)),
        image_pull_policy: Some(pull_policy.into()),
        name: name.into(),
        resources: Some(resource_requirements()),
        ..Default::default()
    }]
}

/// Fixed requests shared by every component: 20Mi memory, 10m cpu.
#[must_use]
pub fn resource_requirements() -> ResourceRequirements {
    ResourceRequirements {
        requests: Some(BTreeMap::from([
            ("cpu".into(), Quantity(RESOURCE_REQUESTS_CPU.into())),
            ("memory".into(), Quantity(RESOURCE_REQUESTS_MEMORY.into())),
        ])),
        ..Default::default()
    }
}
