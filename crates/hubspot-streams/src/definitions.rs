use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamKind {
    /// Records under /crm/v3/objects, filtered by property list
    CrmObject,
    Pipeline,
    Settings,
    Properties,
}

/// Static description of one HubSpot object type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreamDefinition {
    pub name: &'static str,
    pub implementation: &'static str,
    pub path: &'static str,
    pub primary_keys: &'static [&'static str],
    pub replication_key: Option<&'static str>,
    pub kind: StreamKind,
}

impl StreamDefinition {
    const fn crm_object(name: &'static str, implementation: &'static str, path: &'static str) -> Self {
        Self {
            name,
            implementation,
            path,
            primary_keys: &["id"],
            replication_key: Some("updatedAt"),
            kind: StreamKind::CrmObject,
        }
    }

    const fn pipeline(name: &'static str, implementation: &'static str, path: &'static str) -> Self {
        Self {
            name,
            implementation,
            path,
            primary_keys: &["id"],
            replication_key: None,
            kind: StreamKind::Pipeline,
        }
    }
}

/// Every stream the tap knows about, in discovery order
pub static DEFINITIONS: [StreamDefinition; 22] = [
    StreamDefinition::crm_object("contacts", "Contact", "/crm/v3/objects/contacts"),
    StreamDefinition {
        name: "users",
        implementation: "Users",
        path: "/settings/v3/users",
        primary_keys: &["id"],
        replication_key: None,
        kind: StreamKind::Settings,
    },
    StreamDefinition {
        name: "owners",
        implementation: "Owners",
        path: "/crm/v3/owners",
        primary_keys: &["id"],
        replication_key: Some("updatedAt"),
        kind: StreamKind::Settings,
    },
    StreamDefinition::pipeline("tickets_pipeline", "TicketPipeline", "/crm/v3/pipelines/tickets"),
    StreamDefinition::pipeline("deal_pipelines", "DealPipeline", "/crm/v3/pipelines/deals"),
    StreamDefinition {
        name: "email_subscriptions",
        implementation: "EmailSubscription",
        path: "/communication-preferences/v3/definitions",
        primary_keys: &["id"],
        replication_key: None,
        kind: StreamKind::Settings,
    },
    StreamDefinition {
        name: "property_notes",
        implementation: "PropertyNotes",
        path: "/crm/v3/properties/notes",
        primary_keys: &["name"],
        replication_key: None,
        kind: StreamKind::Properties,
    },
    StreamDefinition::crm_object("companies", "Company", "/crm/v3/objects/companies"),
    StreamDefinition::crm_object("deals", "Deal", "/crm/v3/objects/deals"),
    StreamDefinition::crm_object(
        "feedback_submissions",
        "FeedbackSubmissions",
        "/crm/v3/objects/feedback_submissions",
    ),
    StreamDefinition::crm_object("line_items", "LineItem", "/crm/v3/objects/line_items"),
    StreamDefinition::crm_object("products", "Product", "/crm/v3/objects/products"),
    StreamDefinition::crm_object("tickets", "Ticket", "/crm/v3/objects/tickets"),
    StreamDefinition::crm_object("quotes", "Quote", "/crm/v3/objects/quotes"),
    StreamDefinition::crm_object("goals", "Goal", "/crm/v3/objects/goal_targets"),
    StreamDefinition::crm_object("calls", "Call", "/crm/v3/objects/calls"),
    StreamDefinition::crm_object(
        "communications",
        "Communication",
        "/crm/v3/objects/communications",
    ),
    StreamDefinition::crm_object("emails", "Email", "/crm/v3/objects/emails"),
    StreamDefinition::crm_object("meetings", "Meeting", "/crm/v3/objects/meetings"),
    StreamDefinition::crm_object("notes", "Note", "/crm/v3/objects/notes"),
    StreamDefinition::crm_object("postal_mail", "PostalMail", "/crm/v3/objects/postal_mail"),
    StreamDefinition::crm_object("tasks", "Task", "/crm/v3/objects/tasks"),
];

#[cfg(test)]
pub(crate) fn find(implementation: &str) -> Option<&'static StreamDefinition> {
    DEFINITIONS.iter().find(|d| d.implementation == implementation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_and_implementations_are_unique() {
        let names: HashSet<_> = DEFINITIONS.iter().map(|d| d.name).collect();
        let implementations: HashSet<_> = DEFINITIONS.iter().map(|d| d.implementation).collect();
        assert_eq!(names.len(), DEFINITIONS.len());
        assert_eq!(implementations.len(), DEFINITIONS.len());
    }

    #[test]
    fn test_paths_are_absolute() {
        for definition in DEFINITIONS.iter() {
            assert!(definition.path.starts_with('/'), "{}", definition.name);
            assert!(!definition.primary_keys.is_empty(), "{}", definition.name);
        }
    }

    #[test]
    fn test_find_by_implementation() {
        let goal = find("Goal").unwrap();
        assert_eq!(goal.name, "goals");
        assert_eq!(goal.path, "/crm/v3/objects/goal_targets");
        assert!(find("GoalStream").is_none());
        assert!(find("DealPipeline").unwrap().replication_key.is_none());
    }
}
