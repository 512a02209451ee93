//! Generation of the `icons` template statics from a dataset

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::cache::Dataset;
use crate::error::DatasetError;
use crate::icon::Variant;

pub const GENERATED_HEADER: &str = "// Code generated by `heroicons-svg generate`; DO NOT EDIT.";

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One generated static
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDefinition {
    pub ident: String,
    pub name: String,
    pub variant: Variant,
}

/// Rust identifier for a dataset icon, e.g. `academic-cap-20-solid` -> `ACADEMIC_CAP_MINI`
pub fn constant_name(name: &str, variant: Variant) -> String {
    let base = variant.base_name(name);
    let mut ident: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert_str(0, "ICON_");
    }

    match variant {
        Variant::Solid => ident.push_str("_SOLID"),
        Variant::Mini => ident.push_str("_MINI"),
        Variant::Micro => ident.push_str("_MICRO"),
        Variant::Outline | Variant::Unknown => {}
    }
    ident
}

/// Derive one definition per icon, sorted by identifier.
///
/// When two names map to the same identifier the lexicographically first
/// name wins and the other is skipped.
pub fn icon_definitions(dataset: &Dataset) -> Vec<IconDefinition> {
    let mut definitions: BTreeMap<String, IconDefinition> = BTreeMap::new();

    for name in dataset.icons.keys() {
        let variant = Variant::from_icon_name(name);
        let ident = constant_name(name, variant);
        if let Some(existing) = definitions.get(&ident) {
            warn!(
                ident = %ident,
                name = %name,
                kept = %existing.name,
                "skipping icon with duplicate identifier"
            );
            continue;
        }
        definitions.insert(
            ident.clone(),
            IconDefinition {
                ident,
                name: name.clone(),
                variant,
            },
        );
    }

    definitions.into_values().collect()
}

/// Render the source of `src/icons/generated.rs`
pub fn generate_source(definitions: &[IconDefinition]) -> String {
    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push_str("\n\nuse crate::icon::{IconRecord, Variant};\n\n");

    for def in definitions {
        out.push_str(&format!(
            "pub static {}: IconRecord = IconRecord::template({:?}, Variant::{});\n",
            def.ident,
            def.name,
            def.variant.as_str()
        ));
    }

    out.push_str("\n/// Every generated template, sorted by constant name\n");
    out.push_str("pub static ALL: &[&IconRecord] = &[\n");
    for def in definitions {
        out.push_str(&format!("    &{},\n", def.ident));
    }
    out.push_str("];\n");
    out
}

/// Parse `dataset_text` and write the generated module to `output`
pub fn write_source(dataset_text: &str, output: &Path) -> Result<usize, CodegenError> {
    let dataset = Dataset::parse(dataset_text)?;
    let definitions = icon_definitions(&dataset);
    let source = generate_source(&definitions);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| CodegenError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(output, source).map_err(|source| CodegenError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(path = %output.display(), count = definitions.len(), "generated icon templates");
    Ok(definitions.len())
}
