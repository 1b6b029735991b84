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

use color_eyre::eyre::Result;

use crate::media::MediaType;
use crate::registry::AppRegistry;
use crate::web::link::{fallback_media_url, native_media_url, DeepLink};

/// Resolve a media id to a deep link the caller can dispatch.
///
/// If the native viewer app for `media_type` is installed the link targets
/// it directly (`oculus://...` pinned to that app), otherwise the link is
/// the m.facebook.com fallback with no app constraint.
///
/// Returns `Ok(None)` when `media_id` is empty - the only input validation
/// performed. A registry failure other than "not found" propagates rather
/// than silently selecting the fallback.
pub fn resolve_deep_link(
    registry: &impl AppRegistry,
    media_id: &str,
    media_type: MediaType,
) -> Result<Option<DeepLink>> {
    if media_id.is_empty() {
        return Ok(None);
    }

    let viewer_app = media_type.viewer_app();
    if registry.is_installed(viewer_app)? {
        log::debug!("'{viewer_app}' is installed, deep linking into it");
        Ok(Some(DeepLink {
            url: native_media_url(media_id, media_type)?,
            app: Some(viewer_app.to_string()),
        }))
    } else {
        log::debug!("'{viewer_app}' not installed, falling back to the web");
        Ok(Some(DeepLink {
            url: fallback_media_url(media_id)?,
            app: None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::AppEntry;

    use color_eyre::eyre::eyre;
    use std::path::PathBuf;

    const RANDOM_FBID: &str = "ImmaFBID";

    /// In-memory registry: installed app ids, or a poisoned lookup
    struct FakeRegistry {
        installed: Vec<&'static str>,
        fail: bool,
    }

    impl FakeRegistry {
        fn with_installed(installed: Vec<&'static str>) -> FakeRegistry {
            FakeRegistry {
                installed,
                fail: false,
            }
        }

        fn failing() -> FakeRegistry {
            FakeRegistry {
                installed: vec![],
                fail: true,
            }
        }
    }

    impl AppRegistry for FakeRegistry {
        fn lookup(&self, app_id: &str) -> Result<Option<AppEntry>> {
            if self.fail {
                return Err(eyre!("registry query failed"));
            }
            if self.installed.contains(&app_id) {
                // An empty record, which still means installed
                Ok(Some(AppEntry {
                    app_id: app_id.to_string(),
                    path: PathBuf::new(),
                }))
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn check_video_with_viewer_installed() {
        let registry = FakeRegistry::with_installed(vec!["com.oculus.cinema"]);
        let link = resolve_deep_link(&registry, RANDOM_FBID, MediaType::Video)
            .expect("resolve")
            .expect("deep link");
        assert_eq!(link.url.as_str(), "oculus://video/fb/ImmaFBID");
        assert_eq!(link.app.as_deref(), Some("com.oculus.cinema"));
    }

    #[test]
    fn check_photo_with_viewer_installed() {
        let registry = FakeRegistry::with_installed(vec!["com.oculus.oculus360photos"]);
        let link = resolve_deep_link(&registry, RANDOM_FBID, MediaType::Photo)
            .expect("resolve")
            .expect("deep link");
        assert_eq!(link.url.as_str(), "oculus://photo/fb/ImmaFBID");
        assert_eq!(link.app.as_deref(), Some("com.oculus.oculus360photos"));
    }

    #[test]
    fn check_video_with_no_viewer_installed() {
        let registry = FakeRegistry::with_installed(vec![]);
        let link = resolve_deep_link(&registry, RANDOM_FBID, MediaType::Video)
            .expect("resolve")
            .expect("deep link");
        assert_eq!(link.url.as_str(), "https://m.facebook.com/ImmaFBID");
        assert_eq!(link.app, None);
    }

    #[test]
    fn check_photo_with_no_viewer_installed() {
        let registry = FakeRegistry::with_installed(vec![]);
        let link = resolve_deep_link(&registry, RANDOM_FBID, MediaType::Photo)
            .expect("resolve")
            .expect("deep link");
        assert_eq!(link.url.as_str(), "https://m.facebook.com/ImmaFBID");
        assert_eq!(link.app, None);
    }

    #[test]
    fn check_empty_media_id_resolves_to_nothing() {
        // Regardless of what the registry would say
        let registry = FakeRegistry::with_installed(vec![
            "com.oculus.cinema",
            "com.oculus.oculus360photos",
        ]);
        assert_eq!(
            resolve_deep_link(&registry, "", MediaType::Video).expect("resolve"),
            None
        );
        assert_eq!(
            resolve_deep_link(&registry, "", MediaType::Photo).expect("resolve"),
            None
        );
        // Empty id short-circuits before the registry, so even a failing
        // registry resolves to nothing
        assert_eq!(
            resolve_deep_link(&FakeRegistry::failing(), "", MediaType::Video).expect("resolve"),
            None
        );
    }

    #[test]
    fn check_installed_apps_do_not_cross_media_types() {
        // Only the cinema app is installed, so photos still fall back
        let registry = FakeRegistry::with_installed(vec!["com.oculus.cinema"]);
        let link = resolve_deep_link(&registry, RANDOM_FBID, MediaType::Photo)
            .expect("resolve")
            .expect("deep link");
        assert_eq!(link.url.as_str(), "https://m.facebook.com/ImmaFBID");
        assert_eq!(link.app, None);
    }

    #[test]
    fn check_registry_failure_propagates() {
        assert!(resolve_deep_link(&FakeRegistry::failing(), RANDOM_FBID, MediaType::Video).is_err());
    }
}
