/*
 Copyright (c) 2025 Mark Hughes

 This program is free software: you can redistribute it and/or modify
 it under the terms of the GNU Affero General Public License as published by
 the Free Software Foundation, either version 3 of the License, or
 (at your option) any later version.

 This program is distributed in the hope that it will be useful,
 but WITHOUT ANY WARRANTY; without even the implied warranty of
 MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 GNU Affero General Public License for more details.

 You should have received a copy of the GNU Affero General Public License
 along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

//! Installed-application probe.
//!
//! The resolver only needs to answer one question: "is the viewer app for
//! this media type installed right now?". That sits behind [`AppRegistry`]
//! so tests can answer it from memory, while [`DesktopApps`] answers it
//! from the host's application-entry directories.

use std::io::ErrorKind;
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};

// Filename extension of application registry entry files
pub const APP_ENTRY_EXTENSION: &str = "desktop";

/// Metadata record found for an application id.
///
/// The resolver never reads the record content. Presence of a record,
/// including an empty one, is what "installed" means.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppEntry {
    pub app_id: String,
    /// Where the entry was found in the host registry
    pub path: PathBuf,
}

/// Capability to query the host's application registry.
///
/// `lookup()` is a point-in-time snapshot with no caching, so an app
/// reported installed may still have gone by launch time.
pub trait AppRegistry {
    /// Query the registry for metadata about `app_id`.
    ///
    /// Returns `Ok(None)` when the registry reports "not found". Any other
    /// registry failure is returned as an error rather than folded into
    /// "not installed".
    fn lookup(&self, app_id: &str) -> Result<Option<AppEntry>>;

    /// Whether an app with the given id is installed
    fn is_installed(&self, app_id: &str) -> Result<bool> {
        Ok(self.lookup(app_id)?.is_some())
    }
}

/// Host application registry backed by freedesktop-style application entry
/// directories.
///
/// An application id `X` is installed when an entry file `X.desktop`
/// exists in any of the roots. Default roots are the per-user applications
/// directory followed by each directory on `XDG_DATA_DIRS` (or the
/// standard system locations when unset).
pub struct DesktopApps {
    roots: Vec<PathBuf>,
}

impl DesktopApps {
    pub fn new() -> DesktopApps {
        DesktopApps {
            roots: default_entry_roots(),
        }
    }

    /// A registry over the given entry directories instead of the host
    /// defaults. Roots are searched in order.
    pub fn with_roots(roots: Vec<PathBuf>) -> DesktopApps {
        DesktopApps { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl Default for DesktopApps {
    fn default() -> Self {
        DesktopApps::new()
    }
}

impl AppRegistry for DesktopApps {
    fn lookup(&self, app_id: &str) -> Result<Option<AppEntry>> {
        let entry_name = format!("{app_id}.{APP_ENTRY_EXTENSION}");
        for root in &self.roots {
            let candidate = root.join(&entry_name);
            match std::fs::metadata(&candidate) {
                Ok(_metadata) => {
                    log::debug!("found entry for '{app_id}' at {candidate:?}");
                    return Ok(Some(AppEntry {
                        app_id: app_id.to_string(),
                        path: candidate,
                    }));
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(eyre!(
                        "Failed to query application registry at {candidate:?} - {e}"
                    ));
                }
            }
        }
        log::debug!("no entry for '{app_id}' in {} roots", self.roots.len());
        Ok(None)
    }
}

/// Application entry directories searched by default, in order
pub fn default_entry_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Some(data_dir) = dirs_next::data_dir() {
        roots.push(data_dir.join("applications"));
    }

    match std::env::var("XDG_DATA_DIRS") {
        Ok(data_dirs) => {
            for dir in data_dirs.split(':').filter(|dir| !dir.is_empty()) {
                roots.push(PathBuf::from(dir).join("applications"));
            }
        }
        Err(_) => {
            roots.push(PathBuf::from("/usr/local/share/applications"));
            roots.push(PathBuf::from("/usr/share/applications"));
        }
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch_entry(dir: &std::path::Path, app_id: &str) {
        // An empty entry file is still a metadata record
        std::fs::write(dir.join(format!("{app_id}.desktop")), b"").expect("write entry");
    }

    #[test]
    fn check_empty_entry_counts_as_installed() {
        let apps = tempfile::tempdir().expect("tempdir");
        touch_entry(apps.path(), "com.oculus.cinema");

        let registry = DesktopApps::with_roots(vec![apps.path().to_path_buf()]);
        assert!(registry.is_installed("com.oculus.cinema").expect("lookup"));

        let entry = registry
            .lookup("com.oculus.cinema")
            .expect("lookup")
            .expect("entry");
        assert_eq!(entry.app_id, "com.oculus.cinema");
        assert_eq!(entry.path, apps.path().join("com.oculus.cinema.desktop"));
    }

    #[test]
    fn check_missing_entry_is_not_installed() {
        let apps = tempfile::tempdir().expect("tempdir");
        let registry = DesktopApps::with_roots(vec![apps.path().to_path_buf()]);

        assert!(registry.lookup("haha.i.am.an.android.package").expect("lookup").is_none());
        assert!(!registry.is_installed("haha.i.am.an.android.package").expect("lookup"));
    }

    #[test]
    fn check_roots_are_searched_in_order() {
        let first = tempfile::tempdir().expect("tempdir");
        let second = tempfile::tempdir().expect("tempdir");
        touch_entry(second.path(), "com.oculus.oculus360photos");

        let registry = DesktopApps::with_roots(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);

        let entry = registry
            .lookup("com.oculus.oculus360photos")
            .expect("lookup")
            .expect("entry");
        assert_eq!(
            entry.path,
            second.path().join("com.oculus.oculus360photos.desktop")
        );

        // A missing root before a populated one is "not found", not a failure
        let registry = DesktopApps::with_roots(vec![
            first.path().join("does-not-exist"),
            second.path().to_path_buf(),
        ]);
        assert!(registry.is_installed("com.oculus.oculus360photos").expect("lookup"));
    }
}
