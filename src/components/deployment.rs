use k8s_openapi::{
    api::apps::v1::{Deployment, DeploymentSpec},
    apimachinery::pkg::apis::meta::v1::LabelSelector,
};
use kube::core::ObjectMeta;

use crate::kubernetes::{ImagePullPolicy, Labels, SelectorLabels};

use super::pod_template;

const DEPLOYMENT_REPLICAS: i32 = 1;

/*
 * ============================================================================
 * Config
 * ============================================================================
 */
/// Parameters identifying one component Deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentConfig<'a> {
    pub name: &'a str,
    pub namespace: &'a str,
    pub image_repository: &'a str,
    pub image_tag: &'a str,
    pub pull_policy: ImagePullPolicy,
    pub verbosity: &'a str,
}

impl DeploymentConfig<'_> {
    #[must_use]
    pub fn to_deployment(&self) -> Deployment {
        new_deployment(
            self.name,
            self.namespace,
            self.image_repository,
            self.image_tag,
            self.pull_policy,
            self.verbosity,
        )
    }
}

/*
 * ============================================================================
 * Builder
 * ============================================================================
 */
/// Single replica `apps/v1` Deployment for the component `name`.
///
/// The component name is the resource name, the `kubevirt.io` label value, the
/// selector, the service account, the container name and the binary name.
/// Inputs are not validated.
#[must_use]
#[tracing::instrument(level = "debug")]
pub fn new_deployment(
    name: &str,
    namespace: &str,
    image_repository: &str,
    image_tag: &str,
    pull_policy: ImagePullPolicy,
    verbosity: &str,
) -> Deployment {
    let template = pod_template::new_pod_template_spec(
        name,
        namespace,
        image_repository,
        image_tag,
        pull_policy,
        verbosity,
    );

    let labels = Labels::component(name);
    let selector_labels = SelectorLabels::from(&labels);

    Deployment {
        metadata: ObjectMeta {
            name: Some(name.into()),
            namespace: Some(namespace.into()),
            labels: Some(labels.into()),
            ..Default::default()
        },
        spec: Some(DeploymentSpec {
            replicas: Some(DEPLOYMENT_REPLICAS),
            selector: LabelSelector {
                match_labels: Some(selector_labels.into()),
                ..Default::default()
            },
            template,
            ..Default::default()
        }),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use k8s_openapi::{api::apps::v1::Deployment, apimachinery::pkg::api::resource::Quantity};

    use crate::kubernetes::ImagePullPolicy;

    use super::{DeploymentConfig, new_deployment};

    fn config(name: &str) -> DeploymentConfig<'_> {
        DeploymentConfig {
            name,
            namespace: "openshift-machine-api",
            image_repository: "quay.io/kubevirt",
            image_tag: "v1.0.0",
            pull_policy: ImagePullPolicy::Always,
            verbosity: "2",
        }
    }

    fn kubevirt_label(name: &str) -> Option<BTreeMap<String, String>> {
        Some(BTreeMap::from([("kubevirt.io".to_string(), name.to_string())]))
    }

    #[test]
    fn end_to_end() {
        // act
        let deployment = config("mrm-operator").to_deployment();

        // assert
        assert_eq!(Some("mrm-operator"), deployment.metadata.name.as_deref());
        assert_eq!(
            Some("openshift-machine-api"),
            deployment.metadata.namespace.as_deref()
        );

        let spec = deployment.spec.unwrap();
        assert_eq!(Some(1), spec.replicas);

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(4, pod_spec.tolerations.unwrap().len());

        let container = &pod_spec.containers[0];
        assert_eq!(
            Some("quay.io/kubevirt/mrm-operator:v1.0.0"),
            container.image.as_deref()
        );
        assert_eq!(
            Some(vec!["/usr/bin/mrm-operator".to_string()]),
            container.command
        );
        assert_eq!(
            Some(vec![
                "--logtostderr=true".to_string(),
                "--v=2".to_string(),
                "--namespace=openshift-machine-api".to_string(),
            ]),
            container.args
        );
        assert_eq!(Some("Always"), container.image_pull_policy.as_deref());
    }

    #[test]
    fn identity_propagation() {
        for name in ["mrm-operator", "machine-health-check", "x"] {
            // act
            let deployment = config(name).to_deployment();

            // assert
            assert_eq!(Some(name), deployment.metadata.name.as_deref());
            assert_eq!(kubevirt_label(name), deployment.metadata.labels);

            let spec = deployment.spec.unwrap();
            let template_labels = spec.template.metadata.unwrap().labels;
            assert_eq!(kubevirt_label(name), template_labels);
            assert_eq!(template_labels, spec.selector.match_labels);
            assert_eq!(None, spec.selector.match_expressions);

            let pod_spec = spec.template.spec.unwrap();
            assert_eq!(Some(name), pod_spec.service_account_name.as_deref());
            assert_eq!(name, pod_spec.containers[0].name);
            assert_eq!(
                Some(vec![format!("/usr/bin/{name}")]),
                pod_spec.containers[0].command
            );
        }
    }

    #[test]
    fn fixed_cardinalities() {
        for policy in [
            ImagePullPolicy::Always,
            ImagePullPolicy::IfNotPresent,
            ImagePullPolicy::Never,
        ] {
            // act
            let deployment = new_deployment("a", "b", "c", "d", policy, "9");

            // assert
            let spec = deployment.spec.unwrap();
            assert_eq!(Some(1), spec.replicas);

            let pod_spec = spec.template.spec.unwrap();
            assert_eq!(1, pod_spec.containers.len());
            assert_eq!(4, pod_spec.tolerations.unwrap().len());
            assert_eq!(3, pod_spec.containers[0].args.as_ref().unwrap().len());
            assert_eq!(
                Some(policy.as_str()),
                pod_spec.containers[0].image_pull_policy.as_deref()
            );
            assert_eq!(
                Some(&Quantity("20Mi".into())),
                pod_spec.containers[0]
                    .resources
                    .as_ref()
                    .and_then(|f| f.requests.as_ref())
                    .and_then(|f| f.get("memory"))
            );
        }
    }

    #[test]
    fn deterministic() {
        // act
        let first = config("mrm-operator").to_deployment();
        let second = config("mrm-operator").to_deployment();

        // assert
        assert_eq!(first, second);
        assert_eq!(None, first.status);
        assert_eq!(None, first.metadata.creation_timestamp);
        assert_eq!(None, first.metadata.uid);
    }

    #[test]
    fn empty_inputs() {
        // act
        let deployment = new_deployment("", "", "", "", ImagePullPolicy::IfNotPresent, "");

        // assert
        assert_eq!(Some(""), deployment.metadata.name.as_deref());
        assert_eq!(kubevirt_label(""), deployment.metadata.labels);

        let spec = deployment.spec.unwrap();
        assert_eq!(kubevirt_label(""), spec.selector.match_labels);

        let pod_spec = spec.template.spec.unwrap();
        assert_eq!(Some(""), pod_spec.service_account_name.as_deref());
        assert_eq!(Some("/:"), pod_spec.containers[0].image.as_deref());
        assert_eq!(
            Some(vec!["/usr/bin/".to_string()]),
            pod_spec.containers[0].command
        );
    }

    #[test]
    fn api_version_and_kind() {
        // act
        let value = serde_json::to_value(config("mrm-operator").to_deployment()).unwrap();

        // assert
        assert_eq!(
            <Deployment as k8s_openapi::Resource>::API_VERSION,
            value["apiVersion"]
        );
        assert_eq!("apps/v1", value["apiVersion"]);
        assert_eq!("Deployment", value["kind"]);
    }
}
