use crate::{Error, Result};

use super::{ObjectNamespace, ResourceName};

/// Metadata accessors for built resources that must carry a name and namespace.
pub trait Resource: kube::ResourceExt<DynamicType = ()> {
    fn try_name(&self) -> Result<ResourceName> {
        self.meta()
            .name
            .clone()
            .map(ResourceName::new)
            .ok_or(Error::MissingObjectKey(".metadata.name"))
    }

    fn try_namespace(&self) -> Result<ObjectNamespace> {
        self.meta()
            .namespace
            .clone()
            .map(ObjectNamespace::from)
            .ok_or(Error::MissingObjectKey(".metadata.namespace"))
    }
}

impl Resource for k8s_openapi::api::apps::v1::Deployment {}

#[cfg(test)]
mod tests {
    use k8s_openapi::api::apps::v1::Deployment;
    use kube::core::ObjectMeta;

    use crate::{Error, kubernetes::Resource};

    #[test]
    fn try_name_present() {
        // arrange
        let deployment = Deployment {
            metadata: ObjectMeta {
                name: Some("mrm-operator".into()),
                namespace: Some("openshift-machine-api".into()),
                ..Default::default()
            },
            ..Default::default()
        };

        // act
        let name = deployment.try_name().unwrap();
        let namespace = deployment.try_namespace().unwrap();

        // assert
        assert_eq!("mrm-operator", &*name);
        assert_eq!("openshift-machine-api", namespace.to_string());
    }

    #[test]
    fn try_name_missing() {
        // arrange
        let deployment = Deployment::default();

        // act
        let result = deployment.try_name();

        // assert
        assert!(matches!(
            result,
            Err(Error::MissingObjectKey(".metadata.name"))
        ));
    }
}
