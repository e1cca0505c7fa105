//! Value Objects for the frame catalog

use icu_collator::{Collator, CollatorOptions};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// SKU (Stock Keeping Unit) value object
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    /// Kept verbatim; only a blank identifier is rejected.
    pub fn new(value: impl Into<String>) -> Result<Self, SkuError> {
        let value = value.into();
        if value.trim().is_empty() { return Err(SkuError::Empty); }
        Ok(Self(value))
    }
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Sku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self.0) }
}

#[derive(Debug, Clone)] pub enum SkuError { Empty }
impl std::error::Error for SkuError {}
impl fmt::Display for SkuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self { Self::Empty => write!(f, "SKU empty") }
    }
}

/// Descriptive color labels of a SKU, independent of its `Color`.
///
/// The dataset carries these either as a JSON array or as one
/// comma-separated string; both collapse into the same trimmed set here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColorTags(BTreeSet<String>);

impl ColorTags {
    pub fn from_joined(joined: &str) -> Self { Self::from_iter(joined.split(',')) }

    pub fn contains(&self, tag: &str) -> bool { self.0.contains(tag) }
    pub fn intersects(&self, selected: &BTreeSet<String>) -> bool { selected.iter().any(|t| self.0.contains(t)) }
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.0.iter().map(String::as_str) }
    pub fn is_empty(&self) -> bool { self.0.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for ColorTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColorTags {
    List(Vec<String>),
    Joined(String),
}

impl<'de> Deserialize<'de> for ColorTags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<RawColorTags>::deserialize(deserializer)? {
            Some(RawColorTags::List(tags)) => Self::from_iter(tags),
            Some(RawColorTags::Joined(joined)) => Self::from_joined(&joined),
            None => Self::default(),
        })
    }
}

/// Gallery image descriptor: a filename plus an optional view label.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageRef { filename: String, view: Option<String> }

impl ImageRef {
    pub fn new(filename: impl Into<String>, view: Option<String>) -> Self {
        Self { filename: filename.into().trim().to_string(), view }
    }
    pub fn filename(&self) -> &str { &self.filename }
    pub fn label(&self) -> &str { self.view.as_deref().unwrap_or("") }
}

/// What a view should display for an image slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "file", rename_all = "snake_case")]
pub enum ImageSource {
    Asset(String),
    Placeholder,
}

impl ImageSource {
    /// Empty or missing filenames resolve to the placeholder.
    pub fn from_filename(filename: Option<&str>) -> Self {
        match filename.map(str::trim) {
            Some(f) if !f.is_empty() => Self::Asset(f.to_string()),
            _ => Self::Placeholder,
        }
    }
    pub fn is_placeholder(&self) -> bool { matches!(self, Self::Placeholder) }
}

/// Image directory plus the reserved "no image available" filename.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDir { root: PathBuf, placeholder: String }

impl ImageDir {
    pub fn new(root: impl Into<PathBuf>, placeholder: impl Into<String>) -> Self {
        Self { root: root.into(), placeholder: placeholder.into() }
    }
    pub fn root(&self) -> &Path { &self.root }
    pub fn placeholder_path(&self) -> PathBuf { self.root.join(&self.placeholder) }

    pub fn path_of(&self, source: &ImageSource) -> PathBuf {
        match source {
            ImageSource::Asset(file) => self.root.join(file),
            ImageSource::Placeholder => self.placeholder_path(),
        }
    }
}

impl Default for ImageDir { fn default() -> Self { Self::new("images", "coming-soon.jpg") } }

thread_local! {
    static COLLATOR: Option<Collator> = Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Root-locale collation (accents and case are secondary to the base
/// letters, lowercase first), then raw order so distinct strings never
/// compare equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .with(|collator| collator.as_ref().map_or(Ordering::Equal, |c| c.compare(a, b)))
        .then_with(|| a.cmp(b))
}

/// Parses user-typed numeric text; anything unparseable counts as absent.
pub fn parse_bound(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses an exact measurement choice; anything unparseable counts as absent.
pub fn parse_measurement(text: &str) -> Option<i32> {
    text.trim().parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn test_sku() { let sku = Sku::new(" av-001 ").unwrap(); assert_eq!(sku.as_str(), " av-001 "); }
    #[test]
    fn test_sku_any_length() {
        let long = "X".repeat(200);
        assert_eq!(Sku::new(long.clone()).unwrap().as_str(), long);
    }
    #[test]
    fn test_sku_empty() { assert!(Sku::new("   ").is_err()); }

    #[test]
    fn test_color_tags_shapes_agree() {
        let a: ColorTags = serde_json::from_str(r#"["Gold", " Black "]"#).unwrap();
        let b: ColorTags = serde_json::from_str(r#""Black, Gold""#).unwrap();
        assert_eq!(a, b);
        let empty: ColorTags = serde_json::from_str("null").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_locale_cmp() {
        let mut names = vec!["beta", "Alpha", "alpha", "Gamma"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["alpha", "Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn test_locale_cmp_accents_sort_with_base_letter() {
        let mut names = vec!["Zeta", "Éclair", "Eagle", "ópalo", "Oval"];
        names.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(names, vec!["Eagle", "Éclair", "ópalo", "Oval", "Zeta"]);
        assert_eq!(locale_cmp("Éclair", "Éclair"), Ordering::Equal);
    }

    #[test]
    fn test_image_source() {
        assert!(ImageSource::from_filename(Some(" ")).is_placeholder());
        assert!(ImageSource::from_filename(None).is_placeholder());
        let dir = ImageDir::default();
        assert_eq!(dir.path_of(&ImageSource::from_filename(Some("a.jpg"))), PathBuf::from("images/a.jpg"));
        assert_eq!(dir.path_of(&ImageSource::Placeholder), PathBuf::from("images/coming-soon.jpg"));
    }

    #[test]
    fn test_malformed_numbers_are_absent() {
        assert_eq!(parse_bound("abc"), None);
        assert_eq!(parse_bound(" 61.5 "), Some(61.5));
        assert_eq!(parse_measurement("5x"), None);
        assert_eq!(parse_measurement("52"), Some(52));
    }
}
