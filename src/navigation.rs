//! List-to-detail navigation: the frame name travels as one URL-encoded
//! `frame` query parameter and is matched exactly on arrival.

use std::borrow::Cow;

use url::Url;

use crate::{CatalogError, Result};

pub const DETAIL_PAGE: &str = "details.html";
pub const FRAME_PARAM: &str = "frame";

/// Relative links resolve against this before the query is read.
const LINK_BASE: &str = "file:///";

pub fn detail_link(frame_name: &str) -> String {
    format!("{DETAIL_PAGE}?{FRAME_PARAM}={}", urlencoding::encode(frame_name))
}

/// Extracts the frame name from a detail link, a full URL or a bare query
/// string. Keys and values are form-decoded; the first `frame` wins.
pub fn frame_from_link(link: &str) -> Result<String> {
    let link = if link.contains('?') { Cow::Borrowed(link) } else { Cow::Owned(format!("?{link}")) };
    let url = Url::parse(LINK_BASE)
        .and_then(|base| base.join(&link))
        .map_err(|_| CatalogError::MissingFrameParam)?;
    url.query_pairs()
        .find(|(key, _)| *key == FRAME_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|name| !name.is_empty())
        .ok_or(CatalogError::MissingFrameParam)
}
