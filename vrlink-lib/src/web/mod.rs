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

pub mod link;

// The two URL shapes this crate produces, and nothing else:
//
//    oculus://<media path>/fb/<media id>     (native viewer installed)
//    https://m.facebook.com/<media id>       (web fallback)

pub const URI_SCHEME_OCULUS: &str = "oculus";
pub const URI_MEDIA_SOURCE_FB: &str = "fb";

pub const URI_SCHEME_HTTPS: &str = "https";
pub const URI_FB_AUTHORITY: &str = "m.facebook.com";
