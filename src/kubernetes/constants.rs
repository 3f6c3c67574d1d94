pub const KUBEVIRT_IO_KEY: &str = "kubevirt.io";

pub const NAMESPACE_OPENSHIFT_MACHINE_API: &str = "openshift-machine-api";

pub const NODE_ROLE_KUBERNETES_IO_MASTER_KEY: &str = "node-role.kubernetes.io/master";
pub const NODE_ROLE_KUBERNETES_IO_MASTER_VALUE: &str = "";

pub const NODE_KUBERNETES_IO_NOT_READY_KEY: &str = "node.kubernetes.io/not-ready";
pub const NODE_KUBERNETES_IO_UNREACHABLE_KEY: &str = "node.kubernetes.io/unreachable";

pub const CRITICAL_ADDONS_ONLY_KEY: &str = "CriticalAddonsOnly";

pub const POD_SECURITY_CONTEXT_RUN_AS_NON_ROOT: bool = true;

pub const RESOURCE_REQUESTS_CPU: &str = "10m";
pub const RESOURCE_REQUESTS_MEMORY: &str = "20Mi";

pub const TAINT_EFFECT_NO_EXECUTE: &str = "NoExecute";
pub const TAINT_EFFECT_NO_SCHEDULE: &str = "NoSchedule";

pub const TOLERATION_OPERATOR_EXISTS: &str = "Exists";
pub const TOLERATION_SECONDS_NODE_LOST: i64 = 120;
