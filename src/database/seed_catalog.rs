use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("activity name is empty")]
    EmptyName,

    #[error("duplicate activity name '{0}'")]
    DuplicateName(String),

    #[error("activity '{0}' has no capacity")]
    ZeroCapacity(String),

    #[error("activity '{activity}' lists '{email}' more than once")]
    DuplicateParticipant { activity: String, email: String },

    #[error("activity '{activity}' has {enrolled} participants but room for {max}")]
    OverCapacity {
        activity: String,
        enrolled: usize,
        max: usize,
    },
}

/// The catalog the service starts with when no catalog file is configured.
pub fn default_catalog() -> Vec<Activity> {
    vec![
        Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        ),
        Activity::new(
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        ),
        Activity::new(
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        ),
        Activity::new(
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
        ),
        Activity::new(
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
        ),
        Activity::new(
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
        ),
        Activity::new(
            "Drama Club",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
        ),
        Activity::new(
            "Math Club",
            "Solve challenging problems and participate in math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        ),
        Activity::new(
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        ),
    ]
}

/// Reads a catalog file: a JSON array of activities, in the order they
/// should be listed.
pub fn load_catalog(path: &Path) -> Result<Vec<Activity>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog: Vec<Activity> =
        serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

pub fn validate_catalog(catalog: &[Activity]) -> Result<(), CatalogError> {
    let mut names = HashSet::new();
    for activity in catalog {
        if activity.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !names.insert(activity.name.as_str()) {
            return Err(CatalogError::DuplicateName(activity.name.clone()));
        }
        if activity.max_participants == 0 {
            return Err(CatalogError::ZeroCapacity(activity.name.clone()));
        }

        let mut emails = HashSet::new();
        for email in &activity.participants {
            if !emails.insert(email.as_str()) {
                return Err(CatalogError::DuplicateParticipant {
                    activity: activity.name.clone(),
                    email: email.clone(),
                });
            }
        }
        if activity.participants.len() > activity.max_participants {
            return Err(CatalogError::OverCapacity {
                activity: activity.name.clone(),
                enrolled: activity.participants.len(),
                max: activity.max_participants,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_catalog_is_valid() {
        let catalog = default_catalog();
        validate_catalog(&catalog).unwrap();

        let chess = catalog.iter().find(|a| a.name == "Chess Club").unwrap();
        assert_eq!(chess.max_participants, 12);
        assert!(chess.participants.is_empty());
    }

    #[test]
    fn rejects_duplicate_names() {
        let catalog = vec![
            Activity::new("Chess Club", "a", "b", 2),
            Activity::new("Chess Club", "c", "d", 3),
        ];
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateName(name)) if name == "Chess Club"
        ));
    }

    #[test]
    fn rejects_zero_capacity_and_overfull_rosters() {
        let catalog = vec![Activity::new("Empty", "a", "b", 0)];
        assert!(matches!(
            validate_catalog(&catalog),
            Err(CatalogError::ZeroCapacity(_))
        ));

        let mut tiny = Activity::new("Tiny", "a", "b", 1);
        tiny.participants = vec!["a@example.com".into(), "b@example.com".into()];
        assert!(matches!(
            validate_catalog(&[tiny]),
            Err(CatalogError::OverCapacity { enrolled: 2, max: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_participants() {
        let mut club = Activity::new("Club", "a", "b", 5);
        club.participants = vec!["a@example.com".into(), "a@example.com".into()];
        assert!(matches!(
            validate_catalog(&[club]),
            Err(CatalogError::DuplicateParticipant { email, .. }) if email == "a@example.com"
        ));
    }

    #[test]
    fn loads_catalog_file_in_file_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "Robotics", "description": "Build robots", "schedule": "Mondays", "max_participants": 8,
                  "participants": ["r@example.com"]}},
                {{"name": "Choir", "description": "Sing", "schedule": "Fridays", "max_participants": 25}}
            ]"#
        )
        .unwrap();

        let catalog = load_catalog(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].name, "Robotics");
        assert_eq!(catalog[0].participants, vec!["r@example.com".to_string()]);
        assert!(catalog[1].participants.is_empty());
    }

    #[test]
    fn reports_unreadable_and_malformed_files() {
        let missing = Path::new("/definitely/not/here/catalog.json");
        assert!(matches!(
            load_catalog(missing),
            Err(CatalogError::Read { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            load_catalog(file.path()),
            Err(CatalogError::Parse { .. })
        ));
    }
}
