//! Filter option extraction

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::value_objects::locale_cmp;
use crate::SkuRecord;

/// Distinct, sorted values per filterable dimension.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub materials: Vec<String>,
    /// Distinct variant `Color` values; the list-view color filters offer
    /// `color_tags`.
    pub colors: Vec<String>,
    pub color_tags: Vec<String>,
    pub eye_sizes: Vec<i32>,
    pub bridges: Vec<i32>,
    pub frame_pds: Vec<i32>,
    pub temples: Vec<i32>,
}

impl FilterOptions {
    /// Extracts options from the records passed in. Callers hand in the
    /// active (non-discontinued) list.
    pub fn extract<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SkuRecord>,
    {
        let records: Vec<&SkuRecord> = records.into_iter().collect();
        Self {
            materials: distinct_strings(records.iter().map(|r| r.material.as_str())),
            colors: distinct_strings(records.iter().map(|r| r.color.as_str())),
            color_tags: distinct_strings(records.iter().flat_map(|r| r.color_tags.iter())),
            eye_sizes: distinct_numbers(records.iter().map(|r| r.eye_size)),
            bridges: distinct_numbers(records.iter().map(|r| r.b)),
            frame_pds: distinct_numbers(records.iter().map(|r| r.frame_pd)),
            temples: distinct_numbers(records.iter().map(|r| r.temple)),
        }
    }
}

/// Empty strings never become an option.
pub(crate) fn distinct_strings<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let set: BTreeSet<&str> = values.filter(|v| !v.is_empty()).collect();
    let mut out: Vec<String> = set.into_iter().map(str::to_string).collect();
    out.sort_by(|a, b| locale_cmp(a, b));
    out
}

pub(crate) fn distinct_numbers(values: impl Iterator<Item = i32>) -> Vec<i32> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sku;
    use serde_json::json;

    #[test]
    fn test_extract_options() {
        let records = vec![
            sku(json!({ "Material": "Sport", "Color": "gold", "ColorTags": "Gold, Brown", "EyeSize": 54, "FramePD": 72 })),
            sku(json!({ "Material": "", "Color": "Black", "ColorTags": ["black", "Gold"], "EyeSize": 50 })),
            sku(json!({ "Material": "Safety", "Color": "Black", "EyeSize": 54 })),
        ];
        let opts = FilterOptions::extract(&records);
        assert_eq!(opts.materials, vec!["Safety", "Sport"]);
        assert_eq!(opts.colors, vec!["Black", "gold"]);
        assert_eq!(opts.color_tags, vec!["black", "Black", "Brown", "Gold"]);
        assert_eq!(opts.eye_sizes, vec![50, 54]);
        assert_eq!(opts.frame_pds, vec![70, 72]);
        assert_eq!(opts.temples, vec![140]);
    }

    #[test]
    fn test_extract_empty() {
        let opts = FilterOptions::extract(std::iter::empty());
        assert_eq!(opts, FilterOptions::default());
    }
}
