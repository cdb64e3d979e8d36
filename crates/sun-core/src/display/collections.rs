//! Collection wrappers with table formatting and empty-state messages.

use std::fmt;

use crate::models::{Contact, Project};

/// Newtype wrapper for displaying a project list as a table.
///
/// ```rust
/// use sun_core::{display::Projects, portfolio::sample_projects};
///
/// let output = Projects(sample_projects()).to_string();
/// assert!(output.contains("| Mobile App V2 | TechFlow | On Track | 72% |"));
/// assert_eq!(Projects(vec![]).to_string(), "No projects found.\n");
/// ```
pub struct Projects(pub Vec<Project>);

impl Projects {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Project> {
        self.0.iter()
    }
}

impl fmt::Display for Projects {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No projects found.");
        }

        writeln!(f, "| ID | Project | Client | Status | Progress | Due | Next milestone |")?;
        writeln!(f, "|:-|:-|:-|:-|-:|:-|:-|")?;
        for p in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {}% | {} | {} |",
                p.id, p.title, p.client, p.status, p.progress, p.due_date, p.next_milestone.title
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the contact directory as a table.
pub struct Contacts(pub Vec<Contact>);

impl Contacts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Contacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return writeln!(f, "No contacts found.");
        }

        writeln!(f, "| ID | Name | Company | Blueprint | Status | Last contact |")?;
        writeln!(f, "|:-|:-|:-|:-|:-|:-|")?;
        for c in &self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} | {} |",
                c.id, c.name, c.company, c.blueprint_name, c.status, c.last_contact
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::contacts;

    #[test]
    fn test_contacts_table() {
        let output = Contacts(contacts::directory()).to_string();
        assert_eq!(output.lines().count(), 6);
        assert!(output.contains("| 4 | Emma Davis | Creative Inc | Blueprint #099 | Archived | 1 month ago |"));
    }

    #[test]
    fn test_empty_contacts() {
        assert_eq!(Contacts(vec![]).to_string(), "No contacts found.\n");
    }
}
