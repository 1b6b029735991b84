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

//! # vrlink
//!
//! Resolve a Facebook 360 media identifier to something the host can open:
//! a deep link into the native VR viewer app for that media type when one
//! is installed, or the m.facebook.com web fallback when it isn't.
//!
//! The decision is a single synchronous probe-then-branch:
//!
//!    `resolve_deep_link(&registry, media_id, media_type)`
//!
//! which returns `Ok(None)` for an empty identifier, or a [`DeepLink`]
//! holding the URL to open and, for the native branch, the viewer
//! application id the launch should be pinned to.
//!
//! The installed-application check sits behind the [`AppRegistry`] trait so
//! callers (and tests) can substitute their own registry for the default
//! [`DesktopApps`] lookup.

pub mod media;
pub mod registry;
pub mod resolve;
pub mod web;

pub use media::MediaType;
pub use registry::{AppEntry, AppRegistry, DesktopApps};
pub use resolve::resolve_deep_link;
pub use web::link::DeepLink;
