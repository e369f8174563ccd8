use tracing::info;

use crate::database::{ActivityRegistry, RegistryError};
use crate::models::ActivityListing;

pub fn list_activities(registry: &ActivityRegistry) -> ActivityListing {
    registry.list_activities()
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    let email = normalize_email(email)?;
    let message = registry.signup(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "signup accepted");
    Ok(message)
}

pub fn unregister_from(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<String, RegistryError> {
    let email = normalize_email(email)?;
    let message = registry.unregister_from(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "participant removed");
    Ok(message)
}

pub fn unregister_participant(registry: &ActivityRegistry, participant_id: &str) -> String {
    registry.unregister(participant_id)
}

fn normalize_email(email: &str) -> Result<&str, RegistryError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(RegistryError::InvalidEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_trims_email() {
        let registry = ActivityRegistry::seeded();
        let message = signup(&registry, "Math Club", "  m@example.com ").unwrap();
        assert_eq!(message, "Signed up m@example.com for Math Club");
        assert_eq!(
            registry.activity("Math Club").unwrap().participants,
            vec!["m@example.com".to_string()]
        );
        assert_eq!(
            signup(&registry, "Math Club", "m@example.com"),
            Err(RegistryError::AlreadyRegistered)
        );
    }

    #[test]
    fn blank_email_is_rejected_before_lookup() {
        let registry = ActivityRegistry::seeded();
        assert_eq!(
            signup(&registry, "Nonexistent", "   "),
            Err(RegistryError::InvalidEmail)
        );
        assert_eq!(
            unregister_from(&registry, "Math Club", ""),
            Err(RegistryError::InvalidEmail)
        );
    }

    #[test]
    fn unregister_from_round_trip() {
        let registry = ActivityRegistry::seeded();
        signup(&registry, "Drama Club", "d@example.com").unwrap();
        unregister_from(&registry, "Drama Club", "d@example.com").unwrap();
        assert!(registry
            .activity("Drama Club")
            .unwrap()
            .participants
            .is_empty());
    }

    #[test]
    fn listing_follows_seed_order() {
        let registry = ActivityRegistry::seeded();
        let names: Vec<_> = list_activities(&registry).names().map(str::to_string).collect();
        assert_eq!(names.first().map(String::as_str), Some("Chess Club"));
        assert_eq!(names.len(), 9);
    }
}
