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

use color_eyre::Result;

use crate::cli_options::{Opt, Subcommands};

pub(crate) fn cli_commands(opt: Opt) -> Result<()> {
    match opt.cmd {
        Subcommands::Resolve {
            media_type,
            media_id,
            json,
            apps_dir,
        } => {
            match crate::commands::cmd_resolve::handle_resolve(media_type, &media_id, apps_dir, json)
            {
                Ok(()) => Ok(()),
                Err(e) => {
                    println!("{e:?}");
                    Err(e)
                }
            }
        }

        Subcommands::Open {
            media_type,
            media_id,
            apps_dir,
        } => match crate::commands::cmd_resolve::handle_open(media_type, &media_id, apps_dir) {
            Ok(()) => Ok(()),
            Err(e) => {
                println!("{e:?}");
                Err(e)
            }
        },

        Subcommands::Installed { app_id, apps_dir } => {
            match crate::commands::cmd_installed::handle_installed(&app_id, apps_dir) {
                Ok(()) => Ok(()),
                Err(e) => {
                    println!("{e:?}");
                    Err(e)
                }
            }
        }
    }
}
