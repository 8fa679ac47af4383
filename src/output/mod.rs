//! Output rendering for extracted image records.

pub mod json;
pub mod table;
pub mod yaml;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::manifest::ImageRecord;

/// Render records in the requested format.
pub fn render_records(records: &[ImageRecord], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::format_records(records)),
        OutputFormat::Json => json::format(records),
        OutputFormat::Yaml => yaml::format(records),
    }
}

/// Render a flat image list (the `--unique` view) in the requested format.
pub fn render_images(images: &[String], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table::format_images(images)),
        OutputFormat::Json => json::format(images),
        OutputFormat::Yaml => yaml::format(images),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<ImageRecord> {
        vec![ImageRecord {
            kind: "Deployment".to_string(),
            name: "web".to_string(),
            images: vec!["nginx:1.27".to_string()],
        }]
    }

    #[test]
    fn test_table_lists_one_row_per_image() {
        let rendered = render_records(&sample(), OutputFormat::Table).unwrap();
        assert!(rendered.contains("Deployment"));
        assert!(rendered.contains("nginx:1.27"));
    }

    #[test]
    fn test_json_round_trips() {
        let rendered = render_records(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed[0]["images"][0], "nginx:1.27");
    }

    #[test]
    fn test_yaml_output() {
        let rendered = render_images(&["a:1".to_string()], OutputFormat::Yaml).unwrap();
        assert!(rendered.contains("a:1"));
    }
}
