use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;
use thiserror::Error;

/// An extracurricular activity and its roster.
///
/// The name is the key of the activity inside an [`ActivityCatalog`], so it is
/// not part of the serialized record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    // Capacity is informational; a roster may exceed it.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("activity {0:?} is listed more than once")]
    DuplicateActivity(String),
}

/// The fixed set of activities keyed by name, kept in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ActivityCatalog {
    activities: IndexMap<String, Activity>,
}

impl ActivityCatalog {
    /// Names are unique; a repeated name rejects the whole catalog.
    pub fn new(activities: Vec<Activity>) -> Result<Self, CatalogError> {
        let mut by_name: IndexMap<String, Activity> = IndexMap::with_capacity(activities.len());
        for activity in activities {
            match by_name.entry(activity.name.clone()) {
                Entry::Occupied(entry) => {
                    return Err(CatalogError::DuplicateActivity(entry.key().clone()));
                }
                Entry::Vacant(entry) => {
                    entry.insert(activity);
                }
            }
        }
        Ok(Self {
            activities: by_name,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities.get_mut(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
