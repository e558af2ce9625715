use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Assignee;

/// Entry in the team directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub projects: Vec<String>,
    pub date_joined: Option<NaiveDate>,
}

impl Member {
    pub fn as_assignee(&self) -> Assignee {
        Assignee {
            id: self.id.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
        }
    }

    /// Case-insensitive match on name, email, or role. Empty queries match.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.name.to_lowercase().contains(&query)
            || self.email.to_lowercase().contains(&query)
            || self.role.to_lowercase().contains(&query)
    }
}

pub fn search_members<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    members.iter().filter(|member| member.matches(query)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn test_search_by_name_email_and_role() {
        let team = seed::team_members();

        let names: Vec<_> = search_members(&team, "developer")
            .into_iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["John Doe", "Emma Davis"]);

        assert_eq!(search_members(&team, "bob.wilson@").len(), 1);
        assert_eq!(search_members(&team, "SMITH").len(), 1);
        assert!(search_members(&team, "nobody").is_empty());
        assert_eq!(search_members(&team, "").len(), team.len());
    }

    #[test]
    fn test_as_assignee() {
        let team = seed::team_members();
        let assignee = team[0].as_assignee();
        assert_eq!(assignee.id, "1");
        assert_eq!(assignee.name, "Jane Smith");
        assert!(assignee.avatar.is_some());
    }
}
