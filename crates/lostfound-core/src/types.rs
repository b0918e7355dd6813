use std::fmt;

use serde::{Deserialize, Serialize};

/// MySQL column types used by the tracker catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "args", rename_all = "snake_case")]
pub enum ColumnType {
    Int,
    Varchar(u32),
    Text,
    DateTime,
    Boolean,
    /// In-database enumeration restricted to the given labels.
    Enum(Vec<String>),
}

impl ColumnType {
    pub fn enumeration(labels: &[&str]) -> Self {
        ColumnType::Enum(labels.iter().map(|label| label.to_string()).collect())
    }

    /// Render the type as it appears in a `CREATE TABLE` column definition.
    pub fn to_sql(&self) -> String {
        match self {
            ColumnType::Int => "INT".to_string(),
            ColumnType::Varchar(len) => format!("VARCHAR({len})"),
            ColumnType::Text => "TEXT".to_string(),
            ColumnType::DateTime => "DATETIME".to_string(),
            ColumnType::Boolean => "BOOLEAN".to_string(),
            ColumnType::Enum(labels) => {
                let quoted: Vec<String> = labels
                    .iter()
                    .map(|label| format!("'{}'", label.replace('\'', "''")))
                    .collect();
                format!("ENUM({})", quoted.join(", "))
            }
        }
    }
}

macro_rules! domain_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value of the domain, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|value| value.as_str()).collect()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

domain_enum! {
    /// Lifecycle status of an item.
    ItemStatus {
        Lost => "Lost",
        Found => "Found",
        Stolen => "Stolen",
        Recovered => "Recovered",
    }
}

impl ItemStatus {
    /// Statuses the generator draws from. `Recovered` is only reached after
    /// the script runs, never at seed time.
    pub const GENERATED: &'static [ItemStatus] =
        &[ItemStatus::Lost, ItemStatus::Found, ItemStatus::Stolen];
}

domain_enum! {
    /// Review state of a lost/found pairing.
    MatchStatus {
        Pending => "Pending",
        Confirmed => "Confirmed",
        Rejected => "Rejected",
    }
}

domain_enum! {
    ReportType {
        Lost => "Lost",
        Found => "Found",
        Stolen => "Stolen",
    }
}

domain_enum! {
    AlertType {
        MatchFound => "Match Found",
        StatusUpdate => "Status Update",
        NewComment => "New Comment",
    }
}

domain_enum! {
    /// Actions recorded in the user activity log by the generator.
    ActivityAction {
        Login => "Login",
        Logout => "Logout",
        ReportItem => "Report Item",
        SearchItem => "Search Item",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_type_renders_quoted_labels() {
        let column = ColumnType::enumeration(&ItemStatus::labels());
        assert_eq!(
            column.to_sql(),
            "ENUM('Lost', 'Found', 'Stolen', 'Recovered')"
        );
    }

    #[test]
    fn generated_statuses_exclude_recovered() {
        assert!(!ItemStatus::GENERATED.contains(&ItemStatus::Recovered));
        assert_eq!(ItemStatus::GENERATED.len(), 3);
    }

    #[test]
    fn parse_accepts_labels_with_spaces() {
        assert_eq!(AlertType::parse("Match Found"), Some(AlertType::MatchFound));
        assert_eq!(ActivityAction::parse("Search Item"), Some(ActivityAction::SearchItem));
        assert_eq!(ReportType::parse("Recovered"), None);
    }
}
