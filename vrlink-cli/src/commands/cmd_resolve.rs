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

use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result};

use vrlink::{resolve_deep_link, DesktopApps, MediaType};

/// Registry over the given entry directories, or over the host defaults
/// when none were given
fn registry_for(apps_dirs: Vec<PathBuf>) -> DesktopApps {
    if apps_dirs.is_empty() {
        DesktopApps::new()
    } else {
        log::debug!("probing custom application directories: {apps_dirs:?}");
        DesktopApps::with_roots(apps_dirs)
    }
}

/// Resolve a media id and print the deep link without opening it.
pub(crate) fn handle_resolve(
    media_type: MediaType,
    media_id: &str,
    apps_dirs: Vec<PathBuf>,
    json: bool,
) -> Result<()> {
    let registry = registry_for(apps_dirs);
    match resolve_deep_link(&registry, media_id, media_type)? {
        Some(deep_link) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&deep_link)?);
            } else {
                println!("{}", deep_link.url);
            }
            Ok(())
        }
        None => {
            println!("Nothing to open: the media id is empty");
            Ok(())
        }
    }
}

/// Resolve a media id and open the deep link on this device.
///
/// When the resolved link is pinned to a native viewer app the launch is
/// constrained to that app, otherwise the platform picks its default
/// handler for the URL (e.g. a browser).
pub(crate) fn handle_open(
    media_type: MediaType,
    media_id: &str,
    apps_dirs: Vec<PathBuf>,
) -> Result<()> {
    let registry = registry_for(apps_dirs);
    let deep_link = match resolve_deep_link(&registry, media_id, media_type)? {
        Some(deep_link) => deep_link,
        None => {
            println!("Nothing to open: the media id is empty");
            return Ok(());
        }
    };

    println!("Opening {}", deep_link.url);
    match &deep_link.app {
        Some(app) => open::with(deep_link.url.as_str(), app)
            .map_err(|e| eyre!("Failed to open {} with '{app}' - {e}", deep_link.url)),
        None => open::that(deep_link.url.as_str())
            .map_err(|e| eyre!("Failed to open {} - {e}", deep_link.url)),
    }
}
