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

use clap::{Parser, Subcommand};

use vrlink::MediaType;

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    long_about = "vrlink resolves a Facebook 360 media id to a deep link: into the native VR viewer app for the media type when installed, or to m.facebook.com when not."
)]
pub(crate) struct Opt {
    #[command(subcommand)]
    pub cmd: Subcommands,
}

#[derive(Subcommand)]
pub(crate) enum Subcommands {
    /// Resolve a media id and print the deep link without opening it
    Resolve {
        /// The kind of 360 media the id refers to
        #[arg(value_enum)]
        media_type: MediaType,
        /// The Facebook id of the media (treated as opaque)
        media_id: String,
        /// Print the resolved link as JSON, including any app constraint
        #[arg(long)]
        json: bool,
        /// Application entry directory to probe instead of the host
        /// defaults (may be repeated, searched in order)
        #[arg(long, value_name = "DIRECTORY")]
        apps_dir: Vec<PathBuf>,
    },

    /// Resolve a media id and open the deep link on this device
    Open {
        /// The kind of 360 media the id refers to
        #[arg(value_enum)]
        media_type: MediaType,
        /// The Facebook id of the media (treated as opaque)
        media_id: String,
        /// Application entry directory to probe instead of the host
        /// defaults (may be repeated, searched in order)
        #[arg(long, value_name = "DIRECTORY")]
        apps_dir: Vec<PathBuf>,
    },

    /// Report whether an application is installed on this device
    Installed {
        /// Application id to look for (e.g. com.oculus.cinema)
        app_id: String,
        /// Application entry directory to probe instead of the host
        /// defaults (may be repeated, searched in order)
        #[arg(long, value_name = "DIRECTORY")]
        apps_dir: Vec<PathBuf>,
    },
}
