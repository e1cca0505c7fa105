//! Frame grouping: SKUs sharing a `FrameName` become one thumbnail card

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::value_objects::{locale_cmp, ImageSource};
use crate::SkuRecord;

pub const SAFETY_MATERIAL: &str = "Safety";
pub const SPORT_MATERIAL: &str = "Sport";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Badge { Safety, Sport }

impl Badge {
    pub fn label(&self) -> &'static str {
        match self { Self::Safety => SAFETY_MATERIAL, Self::Sport => SPORT_MATERIAL }
    }
}

/// A frame and its member SKUs. Never empty.
#[derive(Clone, Debug, Serialize)]
pub struct FrameGroup<'a> {
    frame_name: &'a str,
    skus: Vec<&'a SkuRecord>,
    representative: ImageSource,
    is_safety: bool,
    is_sport: bool,
}

impl<'a> FrameGroup<'a> {
    fn start(first: &'a SkuRecord) -> Self {
        Self {
            frame_name: &first.frame_name,
            skus: vec![first],
            representative: ImageSource::from_filename(first.hero_image()),
            is_safety: first.has_material(SAFETY_MATERIAL),
            is_sport: first.has_material(SPORT_MATERIAL),
        }
    }

    fn push(&mut self, sku: &'a SkuRecord) {
        self.is_safety |= sku.has_material(SAFETY_MATERIAL);
        self.is_sport |= sku.has_material(SPORT_MATERIAL);
        self.skus.push(sku);
    }

    pub fn frame_name(&self) -> &'a str { self.frame_name }
    pub fn skus(&self) -> &[&'a SkuRecord] { &self.skus }
    pub fn representative_image(&self) -> &ImageSource { &self.representative }
    pub fn is_safety(&self) -> bool { self.is_safety }
    pub fn is_sport(&self) -> bool { self.is_sport }

    /// Safety outranks Sport when a frame carries both.
    pub fn badge(&self) -> Option<Badge> {
        if self.is_safety { Some(Badge::Safety) } else if self.is_sport { Some(Badge::Sport) } else { None }
    }
}

/// Groups by exact `FrameName`, members in input order, groups sorted by name.
pub fn group_frames<'a, I>(records: I) -> Vec<FrameGroup<'a>>
where
    I: IntoIterator<Item = &'a SkuRecord>,
{
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    let mut groups: Vec<FrameGroup<'a>> = Vec::new();
    for record in records {
        match index.get(record.frame_name.as_str()) {
            Some(&i) => groups[i].push(record),
            None => {
                index.insert(&record.frame_name, groups.len());
                groups.push(FrameGroup::start(record));
            }
        }
    }
    // Stable sort keeps first-seen order for names that compare equal.
    groups.sort_by(|a, b| locale_cmp(a.frame_name, b.frame_name));
    groups
}
