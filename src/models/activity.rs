use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// One enrollable activity as held by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(name: &str, description: &str, schedule: &str, max_participants: usize) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }
}

/// What clients see of an activity; the name is the key it is listed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl From<&Activity> for ActivityView {
    fn from(activity: &Activity) -> Self {
        Self {
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            max_participants: activity.max_participants,
            participants: activity.participants.clone(),
        }
    }
}

/// Snapshot of the catalog in seed order. Serializes as a JSON object
/// keyed by activity name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActivityListing {
    entries: Vec<(String, ActivityView)>,
}

impl ActivityListing {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, view)| view)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ActivityView)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl<'a> FromIterator<&'a Activity> for ActivityListing {
    fn from_iter<I: IntoIterator<Item = &'a Activity>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|a| (a.name.clone(), ActivityView::from(a)))
                .collect(),
        }
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, view) in &self.entries {
            map.serialize_entry(name, view)?;
        }
        map.end()
    }
}
