//! Decoded Kubernetes workload shapes.
//!
//! Rendered manifests are heterogeneous: controllers keep their pod template
//! under `spec.template.spec`, CronJobs nest it one level deeper under the
//! job template, and bare Pods carry the pod spec directly. Kinds without
//! containers (ConfigMaps, Services, RBAC objects) decode as [`Workload::Other`]
//! and simply resolve to no pod specs.

use serde::Deserialize;

/// One container entry of a pod spec. Only the fields the walker needs are
/// modeled; everything else in the manifest is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Container {
    pub name: Option<String>,
    pub image: Option<String>,
}

/// A pod spec's container collections.
///
/// Each collection is `Option<Vec<_>>` rather than a bare `Vec` so a field
/// absent from the manifest stays distinguishable from one that is present
/// but empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodSpec {
    pub init_containers: Option<Vec<Container>>,
    pub containers: Option<Vec<Container>>,
    pub ephemeral_containers: Option<Vec<Container>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodTemplateSpec {
    pub spec: Option<PodSpec>,
}

/// `spec` of Deployments, DaemonSets, StatefulSets, ReplicaSets and Jobs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplatedSpec {
    pub template: Option<PodTemplateSpec>,
}

/// `spec` of a CronJob: the pod template hangs off the job template.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSpec {
    pub job_template: Option<JobTemplateSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobTemplateSpec {
    pub spec: Option<TemplatedSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub name: String,
}

/// Body of the controller kinds and Jobs.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ControllerManifest {
    #[serde(default)]
    pub metadata: Metadata,
    pub spec: Option<TemplatedSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CronJobManifest {
    #[serde(default)]
    pub metadata: Metadata,
    pub spec: Option<CronJobSpec>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PodManifest {
    #[serde(default)]
    pub metadata: Metadata,
    pub spec: Option<PodSpec>,
}

/// A decoded manifest, dispatched on `kind`.
#[derive(Debug, Clone)]
pub enum Workload {
    Deployment(ControllerManifest),
    DaemonSet(ControllerManifest),
    StatefulSet(ControllerManifest),
    ReplicaSet(ControllerManifest),
    Job(ControllerManifest),
    CronJob(CronJobManifest),
    Pod(PodManifest),
    /// Any kind without a recognized container path.
    Other { kind: String, name: String },
}

impl Workload {
    /// Decode one YAML document into a workload.
    ///
    /// Unknown and extra fields are tolerated. An unrecognized `kind` decodes
    /// to [`Workload::Other`] rather than failing; only malformed YAML or a
    /// known kind with a structurally wrong spec is an error.
    pub fn decode(document: &str) -> Result<Self, serde_yaml::Error> {
        let value: serde_yaml::Value = serde_yaml::from_str(document)?;
        let kind = value
            .get("kind")
            .and_then(serde_yaml::Value::as_str)
            .unwrap_or_default()
            .to_string();

        Ok(match kind.as_str() {
            "Deployment" => Self::Deployment(serde_yaml::from_value(value)?),
            "DaemonSet" => Self::DaemonSet(serde_yaml::from_value(value)?),
            "StatefulSet" => Self::StatefulSet(serde_yaml::from_value(value)?),
            "ReplicaSet" => Self::ReplicaSet(serde_yaml::from_value(value)?),
            "Job" => Self::Job(serde_yaml::from_value(value)?),
            "CronJob" => Self::CronJob(serde_yaml::from_value(value)?),
            "Pod" => Self::Pod(serde_yaml::from_value(value)?),
            _ => {
                let name = value
                    .get("metadata")
                    .and_then(|m| m.get("name"))
                    .and_then(serde_yaml::Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                Self::Other { kind, name }
            }
        })
    }

    /// The manifest's `kind`.
    pub fn kind(&self) -> &str {
        match self {
            Self::Deployment(_) => "Deployment",
            Self::DaemonSet(_) => "DaemonSet",
            Self::StatefulSet(_) => "StatefulSet",
            Self::ReplicaSet(_) => "ReplicaSet",
            Self::Job(_) => "Job",
            Self::CronJob(_) => "CronJob",
            Self::Pod(_) => "Pod",
            Self::Other { kind, .. } => kind,
        }
    }

    /// The manifest's `metadata.name`.
    pub fn name(&self) -> &str {
        match self {
            Self::Deployment(m)
            | Self::DaemonSet(m)
            | Self::StatefulSet(m)
            | Self::ReplicaSet(m)
            | Self::Job(m) => &m.metadata.name,
            Self::CronJob(m) => &m.metadata.name,
            Self::Pod(m) => &m.metadata.name,
            Self::Other { name, .. } => name,
        }
    }

    /// Resolve the pod-spec locations defined for this kind. Kinds without a
    /// container path resolve to no locations.
    pub fn pod_specs(&self) -> Vec<&PodSpec> {
        match self {
            Self::Deployment(m)
            | Self::DaemonSet(m)
            | Self::StatefulSet(m)
            | Self::ReplicaSet(m)
            | Self::Job(m) => m
                .spec
                .as_ref()
                .and_then(|spec| spec.template.as_ref())
                .and_then(|template| template.spec.as_ref())
                .into_iter()
                .collect(),
            Self::CronJob(m) => m
                .spec
                .as_ref()
                .and_then(|spec| spec.job_template.as_ref())
                .and_then(|job| job.spec.as_ref())
                .and_then(|spec| spec.template.as_ref())
                .and_then(|template| template.spec.as_ref())
                .into_iter()
                .collect(),
            Self::Pod(m) => m.spec.as_ref().into_iter().collect(),
            Self::Other { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_deployment() {
        let yaml = r#"
apiVersion: apps/v1
kind: Deployment
metadata:
  name: nginx-deployment
  labels:
    app: nginx
spec:
  replicas: 3
  template:
    spec:
      containers:
      - name: nginx
        image: nginx:1.14.2
"#;
        let workload = Workload::decode(yaml).unwrap();
        assert_eq!(workload.kind(), "Deployment");
        assert_eq!(workload.name(), "nginx-deployment");

        let specs = workload.pod_specs();
        assert_eq!(specs.len(), 1);
        let containers = specs[0].containers.as_ref().unwrap();
        assert_eq!(containers[0].image.as_deref(), Some("nginx:1.14.2"));
        assert!(specs[0].init_containers.is_none());
    }

    #[test]
    fn test_decode_cronjob_nested_template() {
        let yaml = r#"
apiVersion: batch/v1
kind: CronJob
metadata:
  name: backup
spec:
  schedule: "0 3 * * *"
  jobTemplate:
    spec:
      template:
        spec:
          containers:
          - name: backup
            image: backup:v2
"#;
        let workload = Workload::decode(yaml).unwrap();
        let specs = workload.pod_specs();
        assert_eq!(specs.len(), 1);
        let containers = specs[0].containers.as_ref().unwrap();
        assert_eq!(containers[0].image.as_deref(), Some("backup:v2"));
    }

    #[test]
    fn test_decode_bare_pod() {
        let yaml = r#"
apiVersion: v1
kind: Pod
metadata:
  name: debug
spec:
  containers:
  - name: shell
    image: busybox:1.36
"#;
        let workload = Workload::decode(yaml).unwrap();
        assert_eq!(workload.kind(), "Pod");
        assert_eq!(workload.pod_specs().len(), 1);
    }

    #[test]
    fn test_unrecognized_kind_decodes_as_other() {
        let yaml = r#"
apiVersion: v1
kind: ConfigMap
metadata:
  name: app-config
data:
  key: value
"#;
        let workload = Workload::decode(yaml).unwrap();
        assert_eq!(workload.kind(), "ConfigMap");
        assert_eq!(workload.name(), "app-config");
        assert!(workload.pod_specs().is_empty());
    }

    #[test]
    fn test_absent_vs_empty_container_list() {
        let yaml = r#"
kind: Pod
metadata:
  name: p
spec:
  containers: []
"#;
        let workload = Workload::decode(yaml).unwrap();
        let specs = workload.pod_specs();
        assert!(specs[0].containers.as_ref().unwrap().is_empty());
        assert!(specs[0].init_containers.is_none());
    }

    #[test]
    fn test_unknown_fields_are_tolerated() {
        let yaml = r#"
kind: Deployment
metadata:
  name: fwd-compat
  annotations:
    some/new: field
spec:
  newTopLevelField: true
  template:
    metadata:
      labels:
        app: x
    spec:
      nodeSelector:
        disk: ssd
      containers:
      - name: app
        image: app:1.0
        resources:
          limits:
            cpu: "1"
"#;
        let workload = Workload::decode(yaml).unwrap();
        assert_eq!(workload.pod_specs().len(), 1);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(Workload::decode("kind: Deployment\nmetadata: [broken").is_err());
    }

    #[test]
    fn test_deployment_without_spec() {
        let workload = Workload::decode("kind: Deployment\nmetadata:\n  name: empty\n").unwrap();
        assert!(workload.pod_specs().is_empty());
    }
}
