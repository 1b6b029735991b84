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

// Application ids of the native viewer apps, one per media type.
pub const OCULUS_CINEMA_APP: &str = "com.oculus.cinema";
pub const OCULUS_360PHOTOS_APP: &str = "com.oculus.oculus360photos";

/// The kind of 360 media a deep link refers to.
///
/// Each media type is fixed at compile time to the native viewer
/// application able to render it and to the authority segment used in the
/// native `oculus://` URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum MediaType {
    Video,
    Photo,
}

impl MediaType {
    /// Application id of the native viewer app for this media type
    pub fn viewer_app(&self) -> &'static str {
        match self {
            MediaType::Video => OCULUS_CINEMA_APP,
            MediaType::Photo => OCULUS_360PHOTOS_APP,
        }
    }

    /// Authority segment used for this media type in the native URL
    pub fn media_path(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Photo => "photo",
        }
    }
}

#[test]
fn check_media_type_attributes() {
    assert_eq!(MediaType::Video.viewer_app(), "com.oculus.cinema");
    assert_eq!(MediaType::Video.media_path(), "video");
    assert_eq!(MediaType::Photo.viewer_app(), "com.oculus.oculus360photos");
    assert_eq!(MediaType::Photo.media_path(), "photo");
}
