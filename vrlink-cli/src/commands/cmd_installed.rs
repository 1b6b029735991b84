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

use color_eyre::eyre::Result;

use vrlink::{AppRegistry, DesktopApps};

/// Run the installed-application probe directly and report the result.
pub(crate) fn handle_installed(app_id: &str, apps_dirs: Vec<PathBuf>) -> Result<()> {
    let registry = if apps_dirs.is_empty() {
        DesktopApps::new()
    } else {
        DesktopApps::with_roots(apps_dirs)
    };

    match registry.lookup(app_id)? {
        Some(entry) => println!("'{app_id}' is installed ({})", entry.path.display()),
        None => println!("'{app_id}' is not installed"),
    }

    Ok(())
}
