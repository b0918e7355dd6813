//! The lost-and-found tracker catalog: table definitions and the static
//! reference data loaded before any generated rows.

use crate::constraints::{FkAction, ForeignKey};
use crate::schema::{Column, DatabaseSchema, Table};
use crate::types::{ColumnType, ItemStatus, MatchStatus, ReportType};

pub const DATABASE_NAME: &str = "CommunityTrackerDB";

/// Table names as they appear in the emitted script.
pub mod tables {
    pub const LOCATIONS: &str = "Locations";
    pub const USER_ROLES: &str = "UserRoles";
    pub const USERS: &str = "Users";
    pub const ITEM_CATEGORIES: &str = "ItemCategories";
    pub const ITEM_CONDITIONS: &str = "ItemConditions";
    pub const ITEM_PRIORITIES: &str = "ItemPriorities";
    pub const ITEMS: &str = "Items";
    pub const MATCHES: &str = "Matches";
    pub const REPORTS: &str = "Reports";
    pub const RECOVERY_METHODS: &str = "RecoveryMethods";
    pub const ALERTS: &str = "Alerts";
    pub const COMMENTS: &str = "Comments";
    pub const ITEM_TAGS: &str = "ItemTags";
    pub const USER_ACTIVITY_LOGS: &str = "UserActivityLogs";
    pub const NOTIFICATION_SETTINGS: &str = "NotificationSettings";
}

/// Tables from the earlier ORM-based seed that share the database.
pub const LEGACY_TABLES: &[&str] = &["categories", "conditions"];

pub const ROLES: &[&str] = &["Admin", "Moderator", "Regular User", "Community Member"];
pub const CATEGORIES: &[&str] = &[
    "Electronics",
    "Documents",
    "Personal Accessories",
    "Vehicles",
    "Pets",
    "Clothing",
    "Keys",
    "Other",
];
pub const CONDITIONS: &[&str] = &["New", "Good", "Used", "Damaged", "Broken"];
pub const PRIORITIES: &[&str] = &["High", "Medium", "Low"];
pub const RECOVERY_METHODS: &[&str] = &[
    "Pickup",
    "Courier",
    "Meetup at Public Place",
    "Police Station Handover",
];

/// Suffixes combined with each city to form the location rows.
pub const LOCATION_VARIANTS: &[&str] = &["City Center", "Airport", "Railway Station"];

/// Row id of `Admin` in `UserRoles`.
pub const ADMIN_ROLE_ID: i64 = 1;
/// Row id of `Regular User` in `UserRoles`.
pub const REGULAR_ROLE_ID: i64 = 3;

/// A lookup table populated from a fixed list of names.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceTable {
    pub table: &'static str,
    pub column: &'static str,
    pub values: &'static [&'static str],
}

/// Static lookup data in insertion order.
pub const REFERENCE_DATA: &[ReferenceTable] = &[
    ReferenceTable {
        table: tables::USER_ROLES,
        column: "RoleName",
        values: ROLES,
    },
    ReferenceTable {
        table: tables::ITEM_CATEGORIES,
        column: "CategoryName",
        values: CATEGORIES,
    },
    ReferenceTable {
        table: tables::ITEM_CONDITIONS,
        column: "ConditionName",
        values: CONDITIONS,
    },
    ReferenceTable {
        table: tables::ITEM_PRIORITIES,
        column: "PriorityLevel",
        values: PRIORITIES,
    },
    ReferenceTable {
        table: tables::RECOVERY_METHODS,
        column: "MethodName",
        values: RECOVERY_METHODS,
    },
];

/// Build the full tracker schema in creation order.
pub fn tracker_schema() -> DatabaseSchema {
    use tables::*;

    let timestamp =
        |name: &str| Column::new(name, ColumnType::DateTime).default_sql("CURRENT_TIMESTAMP");

    let definitions = vec![
        Table::with_id(LOCATIONS, "LocationID")
            .column(Column::new("LocationName", ColumnType::Varchar(100)).not_null()),
        Table::with_id(USER_ROLES, "RoleID")
            .column(Column::new("RoleName", ColumnType::Varchar(50)).not_null())
            .unique("RoleName"),
        Table::with_id(USERS, "UserID")
            .column(Column::new("Name", ColumnType::Varchar(100)).not_null())
            .column(Column::new("Contact", ColumnType::Varchar(50)))
            .column(Column::new("Location", ColumnType::Varchar(100)))
            .column(Column::new("RoleID", ColumnType::Int).not_null())
            .column(Column::new("Email", ColumnType::Varchar(100)))
            .column(timestamp("CreatedAt"))
            .unique("Email")
            .foreign_key(ForeignKey::to("RoleID", USER_ROLES, "RoleID")),
        Table::with_id(ITEM_CATEGORIES, "CategoryID")
            .column(Column::new("CategoryName", ColumnType::Varchar(50)).not_null())
            .unique("CategoryName"),
        Table::with_id(ITEM_CONDITIONS, "ConditionID")
            .column(Column::new("ConditionName", ColumnType::Varchar(50)).not_null())
            .unique("ConditionName"),
        Table::with_id(ITEM_PRIORITIES, "PriorityID")
            .column(Column::new("PriorityLevel", ColumnType::Varchar(50)).not_null())
            .unique("PriorityLevel"),
        Table::with_id(ITEMS, "ItemID")
            .column(Column::new("ItemName", ColumnType::Varchar(100)).not_null())
            .column(Column::new("Description", ColumnType::Text))
            .column(Column::new("UserID", ColumnType::Int).not_null())
            .column(Column::new("CategoryID", ColumnType::Int).not_null())
            .column(Column::new("ConditionID", ColumnType::Int))
            .column(Column::new("PriorityID", ColumnType::Int))
            .column(Column::new("LocationFoundOrLost", ColumnType::Int))
            .column(
                Column::new("Status", ColumnType::enumeration(&ItemStatus::labels())).not_null(),
            )
            .column(timestamp("DateReported"))
            .column(Column::new("ImageURL", ColumnType::Text))
            .foreign_key(ForeignKey::to("UserID", USERS, "UserID"))
            .foreign_key(ForeignKey::to("CategoryID", ITEM_CATEGORIES, "CategoryID"))
            .foreign_key(ForeignKey::to("ConditionID", ITEM_CONDITIONS, "ConditionID"))
            .foreign_key(ForeignKey::to("PriorityID", ITEM_PRIORITIES, "PriorityID"))
            .foreign_key(ForeignKey::to("LocationFoundOrLost", LOCATIONS, "LocationID")),
        Table::with_id(MATCHES, "MatchID")
            .column(Column::new("LostItemID", ColumnType::Int).not_null())
            .column(Column::new("FoundItemID", ColumnType::Int).not_null())
            .column(timestamp("MatchDate"))
            .column(
                Column::new("Status", ColumnType::enumeration(&MatchStatus::labels()))
                    .default_sql("'Pending'"),
            )
            .foreign_key(ForeignKey::to("LostItemID", ITEMS, "ItemID"))
            .foreign_key(ForeignKey::to("FoundItemID", ITEMS, "ItemID")),
        Table::with_id(REPORTS, "ReportID")
            .column(Column::new("ItemID", ColumnType::Int).not_null())
            .column(Column::new("UserID", ColumnType::Int).not_null())
            .column(
                Column::new("ReportType", ColumnType::enumeration(&ReportType::labels()))
                    .not_null(),
            )
            .column(timestamp("ReportDate"))
            .foreign_key(ForeignKey::to("ItemID", ITEMS, "ItemID"))
            .foreign_key(ForeignKey::to("UserID", USERS, "UserID")),
        Table::with_id(tables::RECOVERY_METHODS, "MethodID")
            .column(Column::new("MethodName", ColumnType::Varchar(100)).not_null()),
        Table::with_id(ALERTS, "AlertID")
            .column(Column::new("ItemID", ColumnType::Int))
            .column(Column::new("UserID", ColumnType::Int).not_null())
            .column(timestamp("AlertDate"))
            .column(Column::new("AlertType", ColumnType::Varchar(50)))
            .column(Column::new("Message", ColumnType::Text))
            .column(Column::new("IsRead", ColumnType::Boolean).default_sql("FALSE"))
            .foreign_key(ForeignKey::to("ItemID", ITEMS, "ItemID").on_delete(FkAction::SetNull))
            .foreign_key(ForeignKey::to("UserID", USERS, "UserID")),
        Table::with_id(COMMENTS, "CommentID")
            .column(Column::new("ItemID", ColumnType::Int).not_null())
            .column(Column::new("UserID", ColumnType::Int).not_null())
            .column(Column::new("CommentText", ColumnType::Text).not_null())
            .column(timestamp("CommentDate"))
            .foreign_key(ForeignKey::to("ItemID", ITEMS, "ItemID"))
            .foreign_key(ForeignKey::to("UserID", USERS, "UserID")),
        Table::with_id(ITEM_TAGS, "TagID")
            .column(Column::new("ItemID", ColumnType::Int).not_null())
            .column(Column::new("TagName", ColumnType::Varchar(50)).not_null())
            .foreign_key(ForeignKey::to("ItemID", ITEMS, "ItemID")),
        Table::with_id(USER_ACTIVITY_LOGS, "LogID")
            .column(Column::new("UserID", ColumnType::Int).not_null())
            .column(Column::new("ActionType", ColumnType::Varchar(50)))
            .column(timestamp("ActionDate"))
            .column(Column::new("Description", ColumnType::Text))
            .foreign_key(ForeignKey::to("UserID", USERS, "UserID")),
        Table::with_id(NOTIFICATION_SETTINGS, "SettingID")
            .column(Column::new("UserID", ColumnType::Int).not_null())
            .column(Column::new("EmailAlerts", ColumnType::Boolean).default_sql("TRUE"))
            .column(Column::new("SMSAlerts", ColumnType::Boolean).default_sql("FALSE"))
            .column(Column::new("PushAlerts", ColumnType::Boolean).default_sql("TRUE"))
            .foreign_key(ForeignKey::to("UserID", USERS, "UserID")),
    ];

    DatabaseSchema {
        database: DATABASE_NAME.to_string(),
        tables: definitions,
        legacy_tables: LEGACY_TABLES.iter().map(|name| name.to_string()).collect(),
    }
}
