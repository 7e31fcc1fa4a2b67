//! The TextGrid container
//!
//! A `TextGrid` is an ordered mapping from tier name to [`Tier`] over a
//! shared time domain. Tier names are unique and insertion order is
//! meaningful — it is the on-disk tier order.

use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::tier::Tier;
use crate::error::GridError;

/// A set of annotation tiers over a shared time domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextGrid {
    xmin: f64,
    xmax: f64,
    /// The file this grid was read from, if any.
    filename: Option<PathBuf>,
    tiers: IndexMap<String, Tier>,
}

impl TextGrid {
    pub fn new(xmin: f64, xmax: f64) -> Result<Self, GridError> {
        if !(xmin <= xmax) {
            return Err(GridError::Invariant(format!(
                "grid xmin {xmin} > xmax {xmax}"
            )));
        }
        Ok(TextGrid {
            xmin,
            xmax,
            filename: None,
            tiers: IndexMap::new(),
        })
    }

    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn set_filename(&mut self, path: impl Into<PathBuf>) {
        self.filename = Some(path.into());
    }

    /// Number of tiers.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    /// Append a tier. Tier names are unique; reusing one is an error.
    pub fn insert_tier(&mut self, name: impl Into<String>, tier: Tier) -> Result<(), GridError> {
        let name = name.into();
        if self.tiers.contains_key(&name) {
            return Err(GridError::Invariant(format!(
                "duplicate tier name \"{name}\""
            )));
        }
        self.tiers.insert(name, tier);
        Ok(())
    }

    /// Remove a tier by name, keeping the order of the remaining tiers.
    pub fn remove_tier(&mut self, name: &str) -> Option<Tier> {
        self.tiers.shift_remove(name)
    }

    pub fn tier(&self, name: &str) -> Option<&Tier> {
        self.tiers.get(name)
    }

    pub fn tier_mut(&mut self, name: &str) -> Option<&mut Tier> {
        self.tiers.get_mut(name)
    }

    /// Tier by on-disk position.
    pub fn tier_at(&self, index: usize) -> Option<(&str, &Tier)> {
        self.tiers
            .get_index(index)
            .map(|(name, tier)| (name.as_str(), tier))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tier)> {
        self.tiers.iter().map(|(name, tier)| (name.as_str(), tier))
    }

    pub fn tier_names(&self) -> impl Iterator<Item = &str> {
        self.tiers.keys().map(String::as_str)
    }

    /// Move every boundary in the grid, including its extent, by `delta`.
    pub fn offset_time(&mut self, delta: f64) {
        self.xmin += delta;
        self.xmax += delta;
        for tier in self.tiers.values_mut() {
            tier.offset(delta);
        }
    }

    /// Check every tier's ordering invariants against the grid extent.
    pub fn validate(&self) -> Result<(), GridError> {
        for (name, tier) in &self.tiers {
            tier.validate(self.xmin, self.xmax).map_err(|e| match e {
                GridError::Invariant(msg) => {
                    GridError::Invariant(format!("tier \"{name}\": {msg}"))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

/// Equality is over annotation content: extent and tiers, not the source
/// filename. Tier order matters — it is the on-disk order.
impl PartialEq for TextGrid {
    fn eq(&self, other: &Self) -> bool {
        self.xmin == other.xmin
            && self.xmax == other.xmax
            && self.tiers.len() == other.tiers.len()
            && self.tiers.iter().zip(other.tiers.iter()).all(|(a, b)| a == b)
    }
}
