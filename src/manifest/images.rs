//! The image walker: collect container image references from decoded
//! workloads.

use serde::Serialize;

use crate::error::{ImagesError, Result};
use crate::manifest::splitter::split_documents;
use crate::manifest::workload::{PodSpec, Workload};

/// Images found in one workload, with kind/name attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    pub kind: String,
    pub name: String,
    pub images: Vec<String>,
}

/// Collect every image referenced by one workload.
///
/// Within each resolved pod spec the order is init containers, then regular
/// containers, then ephemeral containers. Entries with an empty or missing
/// image contribute nothing: admission-mutated manifests can carry
/// placeholder containers without an image at render time. Never fails; a
/// kind with no container path yields an empty list.
pub fn images_in(workload: &Workload) -> Vec<String> {
    workload
        .pod_specs()
        .into_iter()
        .flat_map(pod_spec_images)
        .collect()
}

fn pod_spec_images(spec: &PodSpec) -> Vec<String> {
    let mut images = Vec::new();

    for group in [
        spec.init_containers.as_deref(),
        spec.containers.as_deref(),
        spec.ephemeral_containers.as_deref(),
    ] {
        let Some(containers) = group else { continue };
        for container in containers {
            match container.image.as_deref() {
                Some(image) if !image.is_empty() => images.push(image.to_string()),
                _ => {}
            }
        }
    }

    images
}

/// Split a rendered blob and walk every document, in document order.
///
/// With `continue_on_error` set, documents that fail to decode are logged and
/// skipped; otherwise the first failure aborts with the offending document's
/// index. Workloads contributing zero images produce no record.
pub fn records_from_manifests(blob: &str, continue_on_error: bool) -> Result<Vec<ImageRecord>> {
    let mut records = Vec::new();

    for (index, document) in split_documents(blob).iter().enumerate() {
        let workload = match Workload::decode(document) {
            Ok(workload) => workload,
            Err(source) if continue_on_error => {
                log::warn!("skipping document {index}: {source}");
                continue;
            }
            Err(source) => return Err(ImagesError::Decode { index, source }),
        };

        let images = images_in(&workload);
        log::debug!(
            "{}/{}: {} image(s)",
            workload.kind(),
            workload.name(),
            images.len()
        );

        if !images.is_empty() {
            records.push(ImageRecord {
                kind: workload.kind().to_string(),
                name: workload.name().to_string(),
                images,
            });
        }
    }

    Ok(records)
}
