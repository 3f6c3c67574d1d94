use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::{PodSecurityContext, PodSpec, PodTemplateSpec, Toleration};
use kube::core::ObjectMeta;

use crate::kubernetes::{
    CRITICAL_ADDONS_ONLY_KEY, ImagePullPolicy, Labels, NODE_KUBERNETES_IO_NOT_READY_KEY,
    NODE_KUBERNETES_IO_UNREACHABLE_KEY, NODE_ROLE_KUBERNETES_IO_MASTER_KEY,
    NODE_ROLE_KUBERNETES_IO_MASTER_VALUE, POD_SECURITY_CONTEXT_RUN_AS_NON_ROOT,
    TAINT_EFFECT_NO_EXECUTE, TAINT_EFFECT_NO_SCHEDULE, TOLERATION_OPERATOR_EXISTS,
    TOLERATION_SECONDS_NODE_LOST,
};

use super::containers;

/// Pod template pinned to control plane nodes, running as non-root under the
/// component's own service account.
#[must_use]
pub fn new_pod_template_spec(
    name: &str,
    namespace: &str,
    image_repository: &str,
    image_tag: &str,
    pull_policy: ImagePullPolicy,
    verbosity: &str,
) -> PodTemplateSpec {
    let containers = containers::new_containers(
        name,
        namespace,
        image_repository,
        image_tag,
        pull_policy,
        verbosity,
    );

    PodTemplateSpec {
        metadata: Some(ObjectMeta {
            labels: Some(Labels::component(name).into()),
            ..Default::default()
        }),
        spec: Some(PodSpec {
            containers,
            node_selector: Some(node_selector()),
            security_context: Some(PodSecurityContext {
                run_as_non_root: Some(POD_SECURITY_CONTEXT_RUN_AS_NON_ROOT),
                ..Default::default()
            }),
            service_account_name: Some(name.into()),
            tolerations: Some(tolerations()),
            ..Default::default()
        }),
    }
}

#[must_use]
pub fn node_selector() -> BTreeMap<String, String> {
    BTreeMap::from([(
        NODE_ROLE_KUBERNETES_IO_MASTER_KEY.into(),
        NODE_ROLE_KUBERNETES_IO_MASTER_VALUE.into(),
    )])
}

/// Taints every component tolerates, in a stable order.
#[must_use]
pub fn tolerations() -> Vec<Toleration> {
    vec![
        Toleration {
            effect: Some(TAINT_EFFECT_NO_SCHEDULE.into()),
            key: Some(NODE_ROLE_KUBERNETES_IO_MASTER_KEY.into()),
            ..Default::default()
        },
        Toleration {
            key: Some(CRITICAL_ADDONS_ONLY_KEY.into()),
            operator: Some(TOLERATION_OPERATOR_EXISTS.into()),
            ..Default::default()
        },
        Toleration {
            effect: Some(TAINT_EFFECT_NO_EXECUTE.into()),
            key: Some(NODE_KUBERNETES_IO_NOT_READY_KEY.into()),
            operator: Some(TOLERATION_OPERATOR_EXISTS.into()),
            toleration_seconds: Some(TOLERATION_SECONDS_NODE_LOST),
            ..Default::default()
        },
        Toleration {
            effect: Some(TAINT_EFFECT_NO_EXECUTE.into()),
            key: Some(NODE_KUBERNETES_IO_UNREACHABLE_KEY.into()),
            operator: Some(TOLERATION_OPERATOR_EXISTS.into()),
            toleration_seconds: Some(TOLERATION_SECONDS_NODE_LOST),
            ..Default::default()
        },
    ]
}
