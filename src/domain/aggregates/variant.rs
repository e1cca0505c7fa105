//! Variant selector for the detail view (color x eye size)

use serde::Serialize;

use crate::domain::aggregates::options::{distinct_numbers, distinct_strings};
use crate::domain::events::{DetailEvent, DomainEvent};
use crate::{CatalogError, Result, SkuRecord};

/// Lookup key of a variant within one frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct VariantKey { pub color: String, pub eye_size: i32 }

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "index", rename_all = "snake_case")]
pub enum VariantState {
    #[default]
    NoVariant,
    /// Index into the frame's member list.
    Selected(usize),
}

#[derive(Clone, Debug)]
pub struct VariantSelector {
    colors: Vec<String>,
    eye_sizes: Vec<i32>,
    color: Option<String>,
    eye_size: Option<i32>,
    state: VariantState,
    events: Vec<DomainEvent>,
}

impl VariantSelector {
    /// Builds the option lists and resolves the default (first color, first
    /// eye size) selection.
    pub fn new(skus: &[SkuRecord]) -> Self {
        let colors = distinct_strings(skus.iter().map(|s| s.color.as_str()));
        let eye_sizes = distinct_numbers(skus.iter().map(|s| s.eye_size));
        let mut selector = Self {
            color: colors.first().cloned(),
            eye_size: eye_sizes.first().copied(),
            colors,
            eye_sizes,
            state: VariantState::NoVariant,
            events: vec![],
        };
        selector.resolve(skus);
        selector
    }

    pub fn colors(&self) -> &[String] { &self.colors }
    pub fn eye_sizes(&self) -> &[i32] { &self.eye_sizes }
    pub fn selected_color(&self) -> Option<&str> { self.color.as_deref() }
    pub fn selected_eye_size(&self) -> Option<i32> { self.eye_size }
    pub fn state(&self) -> &VariantState { &self.state }

    pub fn key(&self) -> Option<VariantKey> {
        Some(VariantKey { color: self.color.clone()?, eye_size: self.eye_size? })
    }

    pub fn active<'a>(&self, skus: &'a [SkuRecord]) -> Option<&'a SkuRecord> {
        match self.state {
            VariantState::Selected(i) => skus.get(i),
            VariantState::NoVariant => None,
        }
    }

    pub fn select_color(&mut self, skus: &[SkuRecord], color: &str) -> Result<&VariantState> {
        if !self.colors.iter().any(|c| c == color) {
            return Err(CatalogError::InvalidSelection { dimension: "color", value: color.to_string() });
        }
        self.color = Some(color.to_string());
        self.resolve(skus);
        Ok(&self.state)
    }

    pub fn select_eye_size(&mut self, skus: &[SkuRecord], eye_size: i32) -> Result<&VariantState> {
        if !self.eye_sizes.contains(&eye_size) {
            return Err(CatalogError::InvalidSelection { dimension: "eye size", value: eye_size.to_string() });
        }
        self.eye_size = Some(eye_size);
        self.resolve(skus);
        Ok(&self.state)
    }

    /// First record matching both selections wins.
    fn resolve(&mut self, skus: &[SkuRecord]) {
        let Some(key) = self.key() else {
            self.state = VariantState::NoVariant;
            return;
        };
        let found = skus.iter().position(|s| s.color == key.color && s.eye_size == key.eye_size);
        self.state = match found {
            Some(i) => {
                self.raise_event(DomainEvent::Detail(DetailEvent::VariantSelected {
                    sku: skus[i].sku.clone(), color: key.color, eye_size: key.eye_size,
                }));
                VariantState::Selected(i)
            }
            None => {
                self.raise_event(DomainEvent::Detail(DetailEvent::VariantCleared { color: key.color, eye_size: key.eye_size }));
                VariantState::NoVariant
            }
        };
    }

    pub fn take_events(&mut self) -> Vec<DomainEvent> { std::mem::take(&mut self.events) }
    fn raise_event(&mut self, e: DomainEvent) { self.events.push(e); }
}
