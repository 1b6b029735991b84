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

//! Construction of the two deep link URL shapes.
//!
//! Both builders are pure functions of their inputs. The media id is
//! treated as opaque and appended as a single path segment, so it gets
//! standard path-segment percent-encoding and nothing more.

use color_eyre::eyre::{eyre, Result};
use serde::Serialize;
use url::Url;

use crate::media::MediaType;
use crate::web::{URI_FB_AUTHORITY, URI_MEDIA_SOURCE_FB, URI_SCHEME_HTTPS, URI_SCHEME_OCULUS};

/// A resolved launch: the URL to open plus, when the native viewer was
/// confirmed installed at resolution time, the application id the launch
/// should be pinned to.
///
/// When `app` is `None` the platform picks its default handler for the
/// URL, typically a browser for the https fallback shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeepLink {
    pub url: Url,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app: Option<String>,
}

/// Build the URL addressed to the native viewer app for `media_type`:
/// `oculus://<media path>/fb/<media id>`
pub fn native_media_url(media_id: &str, media_type: MediaType) -> Result<Url> {
    let media_path = media_type.media_path();
    let mut url = Url::parse(&format!("{URI_SCHEME_OCULUS}://{media_path}"))?;
    url.path_segments_mut()
        .map_err(|()| eyre!("Cannot append path segments to '{URI_SCHEME_OCULUS}://{media_path}'"))?
        .push(URI_MEDIA_SOURCE_FB)
        .push(media_id);
    Ok(url)
}

/// Build the web fallback URL: `https://m.facebook.com/<media id>`
pub fn fallback_media_url(media_id: &str) -> Result<Url> {
    let mut url = Url::parse(&format!("{URI_SCHEME_HTTPS}://{URI_FB_AUTHORITY}"))?;
    url.path_segments_mut()
        .map_err(|()| eyre!("Cannot append path segments to '{URI_SCHEME_HTTPS}://{URI_FB_AUTHORITY}'"))?
        .push(media_id);
    Ok(url)
}

#[test]
fn check_native_url_shapes() {
    let url = native_media_url("ImmaFBID", MediaType::Video).expect("build url");
    assert_eq!(url.as_str(), "oculus://video/fb/ImmaFBID");

    let url = native_media_url("ImmaFBID", MediaType::Photo).expect("build url");
    assert_eq!(url.as_str(), "oculus://photo/fb/ImmaFBID");
}

#[test]
fn check_fallback_url_shape() {
    let url = fallback_media_url("ImmaFBID").expect("build url");
    assert_eq!(url.as_str(), "https://m.facebook.com/ImmaFBID");
}

#[test]
fn check_media_id_is_a_single_encoded_segment() {
    // Opaque ids pass through with standard path-segment encoding only
    let url = native_media_url("a b/c", MediaType::Video).expect("build url");
    assert_eq!(url.as_str(), "oculus://video/fb/a%20b%2Fc");

    let url = fallback_media_url("a b/c").expect("build url");
    assert_eq!(url.as_str(), "https://m.facebook.com/a%20b%2Fc");
}
