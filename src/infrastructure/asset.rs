// SPDX-License-Identifier: MPL-2.0
//! `app://` resource locators for local files.
//!
//! Picked files are addressed as `app://localhost/<path>`, with the path
//! percent-encoded segment by segment so the locator stays a valid URL
//! while keeping `/` separators readable.

use crate::application::port::{AssetResolver, AssetUrl, ConvertError};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::path::Path;
use url::Url;

/// URL scheme used for local assets.
pub const ASSET_SCHEME: &str = "app";

/// Host component of local asset locators.
pub const ASSET_HOST: &str = "localhost";

/// Characters escaped inside a path. `/` is kept as the separator.
const PATH_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Resolves absolute local paths to `app://localhost/...` locators.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppAssetResolver;

impl AppAssetResolver {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AssetResolver for AppAssetResolver {
    fn resolve(&self, path: &Path) -> Result<AssetUrl, ConvertError> {
        if path.as_os_str().is_empty() {
            return Err(ConvertError::EmptyPath);
        }
        if !path.has_root() {
            return Err(ConvertError::RelativePath(path.to_path_buf()));
        }

        let mut raw = path.to_string_lossy().into_owned();
        // Windows paths come with backslashes and a drive prefix
        if cfg!(windows) {
            raw = raw.replace('\\', "/");
        }
        if !raw.starts_with('/') {
            raw.insert(0, '/');
        }

        let encoded = utf8_percent_encode(&raw, PATH_ENCODE_SET);
        let url = Url::parse(&format!("{ASSET_SCHEME}://{ASSET_HOST}{encoded}"))
            .map_err(|err| ConvertError::InvalidUrl(err.to_string()))?;

        Ok(AssetUrl::new(url.as_str(), path))
    }
}
