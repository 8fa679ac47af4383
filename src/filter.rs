//! Post-aggregation filtering of extracted image records.
//!
//! Registry filtering and deduplication run after the walker, never inside
//! it, so the walker's contract stays "what images exist in this object".

use std::collections::HashSet;

use crate::manifest::ImageRecord;

/// Keep only images that contain any of the given registry substrings.
/// Records left with no images are dropped. An empty filter keeps everything.
pub fn filter_registries(records: Vec<ImageRecord>, registries: &[String]) -> Vec<ImageRecord> {
    if registries.is_empty() {
        return records;
    }

    records
        .into_iter()
        .filter_map(|mut record| {
            record
                .images
                .retain(|image| registries.iter().any(|registry| image.contains(registry)));
            if record.images.is_empty() {
                None
            } else {
                Some(record)
            }
        })
        .collect()
}

/// Flatten records into one ordered image list.
pub fn all_images(records: &[ImageRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| record.images.iter().cloned())
        .collect()
}

/// Flatten records into an image list with first-seen deduplication.
pub fn unique_images(records: &[ImageRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    all_images(records)
        .into_iter()
        .filter(|image| seen.insert(image.clone()))
        .collect()
}
