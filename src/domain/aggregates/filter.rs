//! Filter/search predicate for the catalog list view

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::value_objects::{parse_bound, parse_measurement};
use crate::SkuRecord;

/// Frame PD dimension: checkbox set, exact dropdown, or numeric range.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FramePdFilter {
    #[default]
    Any,
    OneOf { values: BTreeSet<i32> },
    Exact { value: i32 },
    /// Inclusive; a missing bound is unbounded on that side.
    Range { min: Option<f64>, max: Option<f64> },
}

impl FramePdFilter {
    /// Builds the hybrid exact/range filter from raw control text. A
    /// parseable exact value wins and the range inputs are ignored.
    pub fn from_inputs(exact: Option<&str>, min: Option<&str>, max: Option<&str>) -> Self {
        if let Some(value) = exact.and_then(parse_measurement) {
            return Self::Exact { value };
        }
        let (min, max) = (min.and_then(parse_bound), max.and_then(parse_bound));
        if min.is_none() && max.is_none() { Self::Any } else { Self::Range { min, max } }
    }

    pub fn is_active(&self) -> bool {
        match self {
            Self::Any => false,
            Self::OneOf { values } => !values.is_empty(),
            Self::Exact { .. } => true,
            Self::Range { min, max } => min.is_some() || max.is_some(),
        }
    }

    pub fn accepts(&self, frame_pd: i32) -> bool {
        match self {
            Self::Any => true,
            Self::OneOf { values } => values.is_empty() || values.contains(&frame_pd),
            Self::Exact { value } => frame_pd == *value,
            Self::Range { min, max } => {
                let v = f64::from(frame_pd);
                min.map_or(true, |lo| v >= lo) && max.map_or(true, |hi| v <= hi)
            }
        }
    }
}

/// The user's current list-view selections. Empty sets and `None` mean
/// "do not filter on this dimension".
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FilterState {
    search: Option<String>,
    pub color_tags: BTreeSet<String>,
    pub material: Option<String>,
    /// Single color dropdown; tested against the record's `ColorTags`.
    pub color: Option<String>,
    pub eye_sizes: BTreeSet<i32>,
    pub bridges: BTreeSet<i32>,
    pub frame_pd: FramePdFilter,
    pub temples: BTreeSet<i32>,
}

impl FilterState {
    pub fn new() -> Self { Self::default() }

    /// Stores the search term trimmed and lowercased; blank clears it.
    pub fn with_search(mut self, term: &str) -> Self { self.set_search(term); self }

    pub fn set_search(&mut self, term: &str) {
        let term = term.trim().to_lowercase();
        self.search = if term.is_empty() { None } else { Some(term) };
    }

    pub fn search(&self) -> Option<&str> { self.search.as_deref() }

    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into()).filter(|m| !m.is_empty());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into()).filter(|c| !c.is_empty());
        self
    }

    pub fn with_color_tag(mut self, tag: impl Into<String>) -> Self {
        self.color_tags.insert(tag.into());
        self
    }

    pub fn with_eye_size(mut self, size: i32) -> Self { self.eye_sizes.insert(size); self }
    pub fn with_bridge(mut self, b: i32) -> Self { self.bridges.insert(b); self }
    pub fn with_temple(mut self, temple: i32) -> Self { self.temples.insert(temple); self }
    pub fn with_frame_pd(mut self, filter: FramePdFilter) -> Self { self.frame_pd = filter; self }

    /// Number of dimensions currently constraining the result.
    pub fn active_dimensions(&self) -> usize {
        [
            self.search.is_some(),
            !self.color_tags.is_empty(),
            self.material.is_some(),
            self.color.is_some(),
            !self.eye_sizes.is_empty(),
            !self.bridges.is_empty(),
            self.frame_pd.is_active(),
            !self.temples.is_empty(),
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }

    pub fn is_empty(&self) -> bool { self.active_dimensions() == 0 }

    pub fn matches(&self, record: &SkuRecord) -> bool {
        if let Some(term) = &self.search {
            if !matches_search(record, term) { return false; }
        }
        if !self.color_tags.is_empty() && !record.color_tags.intersects(&self.color_tags) { return false; }
        if self.material.as_ref().is_some_and(|m| *m != record.material) { return false; }
        if self.color.as_ref().is_some_and(|c| !record.color_tags.contains(c)) { return false; }
        if !member_or_unset(&self.eye_sizes, record.eye_size) { return false; }
        if !member_or_unset(&self.bridges, record.b) { return false; }
        if !self.frame_pd.accepts(record.frame_pd) { return false; }
        member_or_unset(&self.temples, record.temple)
    }

    /// Records passing every active dimension, in input order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a SkuRecord>
    where
        I: IntoIterator<Item = &'a SkuRecord>,
    {
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn member_or_unset(selected: &BTreeSet<i32>, value: i32) -> bool {
    selected.is_empty() || selected.contains(&value)
}

/// `term` is already lowercased.
fn matches_search(record: &SkuRecord, term: &str) -> bool {
    record.frame_name.to_lowercase().contains(term)
        || record.color_tags.iter().any(|t| t.to_lowercase().contains(term))
        || [record.eye_size, record.b, record.frame_pd, record.temple]
            .iter()
            .any(|n| n.to_string().contains(term))
        || record.material.to_lowercase().contains(term)
}
