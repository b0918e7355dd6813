//! Views, procedures and triggers, carried verbatim into the script. They
//! run only inside the target engine.

pub const VIEW_NAMES: &[&str] = &["LostItemsView", "FoundItemsView", "MatchSummaryView"];
pub const PROCEDURE_NAMES: &[&str] = &["CreateUser", "ReportItem"];
pub const TRIGGER_NAMES: &[&str] = &["AfterItemInsert", "AfterMatchInsert"];

pub const VIEWS_SQL: &str = "\
CREATE VIEW LostItemsView AS
SELECT i.ItemID, i.ItemName, i.Description, c.CategoryName, l.LocationName, i.DateReported, u.Name as UsersName
FROM Items i
JOIN ItemCategories c ON i.CategoryID = c.CategoryID
JOIN Locations l ON i.LocationFoundOrLost = l.LocationID
JOIN Users u ON i.UserID = u.UserID
WHERE i.Status = 'Lost';

CREATE VIEW FoundItemsView AS
SELECT i.ItemID, i.ItemName, i.Description, c.CategoryName, l.LocationName, i.DateReported
FROM Items i
JOIN ItemCategories c ON i.CategoryID = c.CategoryID
JOIN Locations l ON i.LocationFoundOrLost = l.LocationID
WHERE i.Status = 'Found';

CREATE VIEW MatchSummaryView AS
SELECT m.MatchID, m.MatchDate, m.Status,
       l.ItemName as LostItem, f.ItemName as FoundItem,
       loc.LocationName
FROM Matches m
JOIN Items l ON m.LostItemID = l.ItemID
JOIN Items f ON m.FoundItemID = f.ItemID
JOIN Locations loc ON l.LocationFoundOrLost = loc.LocationID;
";

pub const PROCEDURES_SQL: &str = "\
CREATE PROCEDURE CreateUser(
    IN p_Name VARCHAR(100),
    IN p_Contact VARCHAR(50),
    IN p_Location VARCHAR(100),
    IN p_Email VARCHAR(100),
    IN p_RoleID INT
)
BEGIN
    INSERT INTO Users (Name, Contact, Location, RoleID, Email)
    VALUES (p_Name, p_Contact, p_Location, p_RoleID, p_Email);
END //

CREATE PROCEDURE ReportItem(
    IN p_ItemName VARCHAR(100),
    IN p_Description TEXT,
    IN p_UserID INT,
    IN p_CategoryID INT,
    IN p_LocationID INT,
    IN p_Status VARCHAR(20)
)
BEGIN
    INSERT INTO Items (ItemName, Description, UserID, CategoryID, LocationFoundOrLost, Status, DateReported)
    VALUES (p_ItemName, p_Description, p_UserID, p_CategoryID, p_LocationID, p_Status, NOW());
END //
";

// The match trigger self-joins Items on (CategoryID, LocationFoundOrLost)
// for every insert and does not dedup repeated pairs.
pub const TRIGGERS_SQL: &str = "\
CREATE TRIGGER AfterItemInsert
AFTER INSERT ON Items
FOR EACH ROW
BEGIN
    INSERT INTO UserActivityLogs (UserID, ActionType, Description, ActionDate)
    VALUES (NEW.UserID, 'Reported Item', CONCAT('User reported item: ', NEW.ItemName, ' as ', NEW.Status), NOW());

    IF NEW.Status = 'Found' THEN
        INSERT INTO Matches (LostItemID, FoundItemID, MatchDate, Status)
        SELECT ItemID, NEW.ItemID, NOW(), 'Pending'
        FROM Items
        WHERE Status = 'Lost'
          AND CategoryID = NEW.CategoryID
          AND LocationFoundOrLost = NEW.LocationFoundOrLost
          AND ItemID != NEW.ItemID;
    ELSEIF NEW.Status = 'Lost' THEN
        INSERT INTO Matches (LostItemID, FoundItemID, MatchDate, Status)
        SELECT NEW.ItemID, ItemID, NOW(), 'Pending'
        FROM Items
        WHERE Status = 'Found'
          AND CategoryID = NEW.CategoryID
          AND LocationFoundOrLost = NEW.LocationFoundOrLost
          AND ItemID != NEW.ItemID;
    END IF;
END //

CREATE TRIGGER AfterMatchInsert
AFTER INSERT ON Matches
FOR EACH ROW
BEGIN
    DECLARE lostUser INT;
    DECLARE foundUser INT;

    SELECT UserID INTO lostUser FROM Items WHERE ItemID = NEW.LostItemID;
    SELECT UserID INTO foundUser FROM Items WHERE ItemID = NEW.FoundItemID;

    INSERT INTO Alerts (ItemID, UserID, AlertType, Message, AlertDate)
    VALUES (NEW.LostItemID, lostUser, 'Match Found', 'A potential match has been found for your lost item!', NOW());

    INSERT INTO Alerts (ItemID, UserID, AlertType, Message, AlertDate)
    VALUES (NEW.FoundItemID, foundUser, 'Match Found', 'The item you found matches a lost report!', NOW());
END //
";

/// Views, then procedures and triggers inside a `//` delimiter block.
pub fn logic_sql() -> String {
    format!("{VIEWS_SQL}\nDELIMITER //\n\n{PROCEDURES_SQL}\n{TRIGGERS_SQL}\nDELIMITER ;\n")
}
