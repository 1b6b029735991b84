/*
*   Copyright (c) 2025 Mark Hughes

*   This program is free software: you can redistribute it and/or modify
*   it under the terms of the GNU Affero General Public License as published by
*   the Free Software Foundation, either version 3 of the License, or
*   (at your option) any later version.

*   This program is distributed in the hope that it will be useful,
*   but WITHOUT ANY WARRANTY; without even the implied warranty of
*   MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*   GNU Affero General Public License for more details.

*   You should have received a copy of the GNU Affero General Public License
*   along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

mod cli_options;
mod commands;

use clap::Parser;
use color_eyre::Result;

use crate::commands::subcommands;
use cli_options::Opt;

fn main() -> Result<()> {
    color_eyre::install().expect("Failed to initialise error handler");
    env_logger::init();

    let opt = Opt::parse();
    subcommands::cli_commands(opt)?;

    Ok(())
}
