//! Companion implementation file lookup.
//!
//! A header's implementation file gives the model context it cannot get
//! from the declarations alone. The probe is deterministic and read-only:
//! same directory first, then a sibling `src/` directory, then the
//! `include/` tree mirrored under `src/`.

use std::path::{Component, Path, PathBuf};

const HEADER_EXTENSIONS: &[&str] = &["h", "hh", "hpp", "hxx"];
const SOURCE_EXTENSIONS: &[&str] = &["cpp", "cc", "cxx", "c"];

/// Find the implementation file pairing to `header`, if one exists.
///
/// Returns `None` for non-header paths and when no candidate exists on
/// disk. The first match wins, probing source extensions in order per
/// candidate directory.
pub fn find_companion_file(header: &Path) -> Option<PathBuf> {
    let extension = header.extension()?.to_str()?;
    if !HEADER_EXTENSIONS.contains(&extension.to_lowercase().as_str()) {
        return None;
    }

    let stem = header.file_stem()?.to_str()?;
    for dir in candidate_dirs(header) {
        for source_ext in SOURCE_EXTENSIONS {
            // Not with_extension: dotted stems like `config.in` would
            // collapse to `config.cpp`
            let candidate = dir.join(format!("{stem}.{source_ext}"));
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    None
}

fn candidate_dirs(header: &Path) -> Vec<PathBuf> {
    let parent = header.parent().unwrap_or_else(|| Path::new(""));
    let mut dirs = vec![parent.to_path_buf(), parent.join("../src")];

    // include/foo/bar.h -> src/foo/bar.cpp
    if let Some(mirrored) = mirror_include_under_src(header) {
        dirs.push(mirrored);
    }

    dirs
}

fn mirror_include_under_src(header: &Path) -> Option<PathBuf> {
    let parent = header.parent()?;
    let components: Vec<Component> = parent.components().collect();
    let include_pos = components
        .iter()
        .position(|c| c.as_os_str() == "include")?;

    let mut mirrored = PathBuf::new();
    for component in &components[..include_pos] {
        mirrored.push(component);
    }
    mirrored.push("src");
    for component in &components[include_pos + 1..] {
        mirrored.push(component);
    }
    Some(mirrored)
}
