//! What the activity list region shows, independent of the DOM.
//!
//! Strings are handed over untouched; the client places them in text nodes
//! and attribute values, never in markup.

use crate::model::Directory;

pub const LOADING: &str = "Loading activities...";
pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS: &str = "No participants yet";
pub const PLACEHOLDER: &str = "-- Select an activity --";

/// Value of `data-action` on removal buttons.
pub const UNREGISTER_ACTION: &str = "unregister";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub spots_left: i64,
    pub participants: &'a [String],
}

impl Card<'_> {
    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    pub fn roster_heading(&self) -> String {
        format!("Participants ({})", self.participants.len())
    }
}

/// One card per activity, in directory order.
pub fn cards(directory: &Directory) -> Vec<Card<'_>> {
    directory
        .iter()
        .map(|(name, activity)| Card {
            name,
            description: &activity.description,
            schedule: &activity.schedule,
            spots_left: activity.spots_left(),
            participants: &activity.participants,
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Placeholder first, then one option per activity.
pub fn select_options(directory: &Directory) -> Vec<SelectOption> {
    let mut options = vec![SelectOption {
        value: String::new(),
        label: PLACEHOLDER.to_string(),
    }];
    options.extend(directory.keys().map(|name| SelectOption {
        value: name.clone(),
        label: name.clone(),
    }));
    options
}
