use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Vihaan", "Aditya", "Sai", "Arjun", "Reyansh", "Muhammad", "Omar", "Ali", "Hassan",
    "Ahmed", "Bilal", "Usman", "Hamza", "Fatima", "Aisha", "Zainab", "Maryam", "Zara", "Priya",
    "Neha", "Ananya", "Diya", "Sana", "Hina", "Kiran", "Rahul", "Amit", "Rohan", "Vikram",
];

const LAST_NAMES: &[&str] = &[
    "Sharma", "Patel", "Verma", "Singh", "Kumar", "Gupta", "Khan", "Ahmed", "Ali", "Malik",
    "Hussain", "Qureshi", "Raza", "Shah", "Chaudhry", "Mishra", "Reddy", "Nair", "Fernandes",
];

const CITIES: &[&str] = &[
    "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Ahmedabad", "Chennai", "Kolkata", "Surat",
    "Pune", "Jaipur", "Karachi", "Lahore", "Faisalabad", "Rawalpindi", "Gujranwala", "Peshawar",
    "Multan", "Islamabad", "Quetta",
];

const ITEM_NAMES: &[&str] = &[
    "iPhone 13 Pro",
    "Samsung Galaxy S21",
    "Leather Wallet",
    "Car Keys",
    "Honda Civic",
    "Passport",
    "Debit Card",
    "Labrador Dog",
    "Persian Cat",
    "Dell XPS Laptop",
    "MacBook Air",
    "Wrist Watch",
    "Gold Ring",
    "Backpack",
    "Sunglasses",
    "Driving License",
    "Textbooks",
    "Bicycle",
    "Motorbike",
];

const DESCRIPTIONS: &[&str] = &[
    "Black color, slight scratch on screen.",
    "Brown leather, contains ID cards.",
    "Key with a blue keychain.",
    "White color, dent on bumper.",
    "Valid till 2030.",
    "Lost near the park.",
    "Found at the metro station.",
    " wearing a red collar.",
    "Grey color, laptop bag included.",
    "Gold plated, engraved initials.",
];

const TAGS: &[&str] = &[
    "Electronics", "Mobile", "Wallet", "Keys", "Document", "Pet", "Vehicle", "Clothing", "Jewelry",
    "Bag",
];

const COMMENTS: &[&str] = &[
    "Is this still available?",
    "I found something similar",
    "Please contact me",
    "Can you provide more details?",
    "I lost this too!",
];

/// Candidate values the generators sample from.
///
/// Any pool omitted from a config file keeps its built-in list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ValuePools {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub cities: Vec<String>,
    pub item_names: Vec<String>,
    pub descriptions: Vec<String>,
    pub tags: Vec<String>,
    pub comments: Vec<String>,
}

impl Default for ValuePools {
    fn default() -> Self {
        Self {
            first_names: owned(FIRST_NAMES),
            last_names: owned(LAST_NAMES),
            cities: owned(CITIES),
            item_names: owned(ITEM_NAMES),
            descriptions: owned(DESCRIPTIONS),
            tags: owned(TAGS),
            comments: owned(COMMENTS),
        }
    }
}

impl ValuePools {
    pub fn validate(&self) -> Result<(), GenerationError> {
        let pools = [
            ("first_names", &self.first_names),
            ("last_names", &self.last_names),
            ("cities", &self.cities),
            ("item_names", &self.item_names),
            ("descriptions", &self.descriptions),
            ("tags", &self.tags),
            ("comments", &self.comments),
        ];
        for (name, values) in pools {
            if values.is_empty() {
                return Err(GenerationError::InvalidConfig(format!(
                    "value pool '{name}' is empty"
                )));
            }
        }
        self.validate_email_bases()
    }

    /// Every (first, last) pair must yield a distinct lower-cased email
    /// prefix, and no prefix may end in a digit that the numeric suffix
    /// could run into.
    fn validate_email_bases(&self) -> Result<(), GenerationError> {
        let mut bases = HashSet::new();
        for first in &self.first_names {
            for last in &self.last_names {
                let base = format!("{}{}", first.to_lowercase(), last.to_lowercase());
                if base.ends_with(|ch: char| ch.is_ascii_digit()) {
                    return Err(GenerationError::InvalidConfig(format!(
                        "name pair '{first} {last}' ends in a digit"
                    )));
                }
                if !bases.insert(base) {
                    return Err(GenerationError::InvalidConfig(format!(
                        "name pair '{first} {last}' repeats an email prefix"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
