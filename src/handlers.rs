//! Command handlers.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::error::{ImagesError, Result};
use crate::{config, filter, helm, manifest, output};

/// Handle `chart-images get`: obtain the rendered manifest blob, extract the
/// image records, apply filters and print (or write) the result.
#[allow(clippy::too_many_arguments)]
pub fn handle_get(
    chart: Option<String>,
    from_release: bool,
    manifest_path: Option<PathBuf>,
    release_name: String,
    values: Vec<PathBuf>,
    set: Vec<String>,
    namespace: Option<String>,
    registry: Vec<String>,
    unique: bool,
    skip_broken: bool,
    format: Option<OutputFormat>,
    output_path: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_config(std::env::current_dir().ok().as_deref())?;

    let blob = read_manifests(
        chart,
        from_release,
        manifest_path,
        &release_name,
        &values,
        &set,
        namespace.as_deref(),
    )?;

    let records = manifest::records_from_manifests(&blob, skip_broken)?;
    log::info!("extracted {} image record(s)", records.len());

    let registries = if registry.is_empty() {
        config.registries
    } else {
        registry
    };
    let records = filter::filter_registries(records, &registries);

    let format = format.or(config.format).unwrap_or(OutputFormat::Table);
    let rendered = if unique || config.unique {
        output::render_images(&filter::unique_images(&records), format)?
    } else {
        output::render_records(&records, format)?
    };

    match output_path {
        Some(path) => {
            fs::write(&path, &rendered)?;
            log::info!("result written to {}", path.display());
        }
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    Ok(())
}

fn read_manifests(
    chart: Option<String>,
    from_release: bool,
    manifest_path: Option<PathBuf>,
    release_name: &str,
    values: &[PathBuf],
    set: &[String],
    namespace: Option<&str>,
) -> Result<String> {
    if let Some(path) = manifest_path {
        return if path.as_os_str() == "-" {
            let mut blob = String::new();
            std::io::stdin().read_to_string(&mut blob)?;
            Ok(blob)
        } else {
            Ok(fs::read_to_string(&path)?)
        };
    }

    let Some(target) = chart else {
        return Err(ImagesError::Usage(
            "a chart path or release name is required".to_string(),
        ));
    };

    if from_release {
        helm::release_manifest(&target, namespace)
    } else {
        helm::render_chart(&target, release_name, values, set, namespace)
    }
}
