//! User-facing texts.

pub const MENU_TITLE: &str = "Phonebook Menu:";
pub const MENU_PROMPT: &str = "Select a menu item: ";
pub const INVALID_CHOICE: &str = "You must enter a number from 1 to 7";

pub const CONTACTS_HEADER: &str = "Contacts:";
pub const CONTACT_NOT_FOUND: &str = "Contact not found";
pub const CONTACT_DETAILS: &str = "Current contact details:";

pub const CONTACT_CREATED: &str = "Contact created successfully!";
pub const CONTACT_UPDATED: &str = "Contact updated successfully!";
pub const CONTACT_DELETED: &str = "Contact deleted successfully!";
pub const IDS_EXHAUSTED: &str = "No contact ids left; remove the contact with the largest id first.";
pub const DELETE_CANCELLED: &str = "Deletion cancelled";
pub const CONTACTS_SAVED: &str = "Contacts saved successfully!";
pub const SAVE_FAILED: &str = "Error saving!";
pub const CLOSING: &str = "The phonebook is closing!";

pub const LABEL_ID: &str = "ID: ";
pub const LABEL_NAME: &str = "Name: ";
pub const LABEL_PHONE: &str = "Phone: ";
pub const LABEL_COMMENT: &str = "Comment (optional): ";

pub const ENTER_DETAILS: &str = "Enter contact details:";
pub const ENTER_NEW_DETAILS: &str = "Enter new details (press Enter to keep current value):";
pub const ENTER_SEARCH: &str = "Enter search term: ";
pub const ENTER_ID: &str = "Enter contact ID: ";
pub const FIELD_REQUIRED: &str = "Field cannot be empty!";
pub const INVALID_NUMBER: &str = "Please enter a valid number!";

pub const CONFIRM_SAVE_ON_EXIT: &str =
    "Are you sure you want to save changes before exiting? (y/n): ";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this contact? (y/n): ";
pub const AFFIRMATIVE: &str = "y";

pub const SEPARATOR: &str = "------------------------------";
