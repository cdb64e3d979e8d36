//! The seeded CRM contact directory.

use crate::models::{BlueprintHealth, Contact, ContactStatus};

#[allow(clippy::too_many_arguments)]
fn contact(
    id: &str,
    name: &str,
    role: &str,
    company: &str,
    blueprint_id: &str,
    health: BlueprintHealth,
    status: ContactStatus,
    last_contact: &str,
    email: &str,
    avatar: &str,
) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        company: company.to_string(),
        blueprint_id: blueprint_id.to_string(),
        blueprint_name: format!("Blueprint #{blueprint_id}"),
        blueprint_health: Some(health),
        status,
        last_contact: last_contact.to_string(),
        email: email.to_string(),
        avatar: avatar.to_string(),
        sentiment_score: None,
        enriched_data: None,
    }
}

/// All known contacts, ordered by ID.
pub fn directory() -> Vec<Contact> {
    vec![
        contact("1", "Jordan Lee", "Founder", "Sun AI Agency", "102", BlueprintHealth::Healthy, ContactStatus::Active, "2 days ago", "jordan@sun.ai", "JL"),
        contact("2", "Sarah Kim", "Head of Ops", "StartupCo", "097", BlueprintHealth::AtRisk, ContactStatus::InReview, "5 days ago", "sarah@startup.co", "SK"),
        contact("3", "Michael Chen", "CTO", "TechFlow", "105", BlueprintHealth::OnTrack, ContactStatus::Active, "1 week ago", "m.chen@techflow.io", "MC"),
        contact("4", "Emma Davis", "Director", "Creative Inc", "099", BlueprintHealth::Healthy, ContactStatus::Archived, "1 month ago", "emma@creative.inc", "ED"),
    ]
}

/// Finds a contact by ID.
pub fn find(id: &str) -> Option<Contact> {
    directory().into_iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::{enricher::profile_for, scorer::metrics_for};

    #[test]
    fn test_directory() {
        let contacts = directory();
        assert_eq!(contacts.len(), 4);
        assert_eq!(contacts[1].name, "Sarah Kim");
        assert_eq!(contacts[1].blueprint_name, "Blueprint #097");
        assert_eq!(contacts[3].status, ContactStatus::Archived);
        assert_eq!(contacts[0].first_name(), "Jordan");
    }

    #[test]
    fn test_find() {
        assert_eq!(find("3").map(|c| c.company), Some("TechFlow".to_string()));
        assert!(find("9").is_none());
    }

    #[test]
    fn test_seeded_contacts_line_up_with_agents() {
        let sarah = find("2").unwrap();
        assert_eq!(metrics_for(&sarah.id).score, 45);
        assert_eq!(profile_for(&sarah.company).location, "New York, NY");
    }
}
