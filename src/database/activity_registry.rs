use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::database::seed_catalog::{self, CatalogError};
use crate::models::{Activity, ActivityListing, ActivityView};

/// Why a roster operation was refused. The message is the client-facing
/// `detail` text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student is already signed up")]
    AlreadyRegistered,

    #[error("Activity is full")]
    CapacityExceeded,

    #[error("Student is not signed up for this activity")]
    NotRegistered,

    #[error("Email is required")]
    InvalidEmail,
}

/// In-memory store of every activity and its roster.
///
/// One lock covers the whole catalog: signup and unregister hold the write
/// lock across check-and-mutate, reads clone a snapshot under the read lock.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: RwLock<Vec<Activity>>,
}

impl ActivityRegistry {
    pub fn new(catalog: Vec<Activity>) -> Result<Self, CatalogError> {
        seed_catalog::validate_catalog(&catalog)?;
        Ok(Self {
            activities: RwLock::new(catalog),
        })
    }

    /// Registry over the built-in catalog.
    pub fn seeded() -> Self {
        Self {
            activities: RwLock::new(seed_catalog::default_catalog()),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn list_activities(&self) -> ActivityListing {
        self.read().iter().collect()
    }

    pub fn activity(&self, activity_name: &str) -> Option<ActivityView> {
        self.read()
            .iter()
            .find(|a| a.name == activity_name)
            .map(ActivityView::from)
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut activities = self.write();
        let activity = find_mut(&mut activities, activity_name)?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadyRegistered);
        }
        if activity.is_full() {
            return Err(RegistryError::CapacityExceeded);
        }

        activity.participants.push(email.to_string());
        Ok(format!("Signed up {email} for {activity_name}"))
    }

    pub fn unregister_from(&self, activity_name: &str, email: &str) -> Result<String, RegistryError> {
        let mut activities = self.write();
        let activity = find_mut(&mut activities, activity_name)?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(format!("Unregistered {email} from {activity_name}"))
    }

    /// Legacy unregister by participant id. Participant ids are not roster
    /// keys, so nothing is looked up or removed.
    pub fn unregister(&self, participant_id: &str) -> String {
        format!("Participant {participant_id} unregistered")
    }

    // Every mutation runs its checks before touching the roster, so the
    // data behind a poisoned lock is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Activity>> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Activity>> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ActivityRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

fn find_mut<'a>(
    activities: &'a mut [Activity],
    activity_name: &str,
) -> Result<&'a mut Activity, RegistryError> {
    activities
        .iter_mut()
        .find(|a| a.name == activity_name)
        .ok_or(RegistryError::NotFound)
}
