//! CSS selectors and attributes of the tee time portal pages.

/// Login form fields
pub const USERNAME_FIELD: &str = "#lgUserName";
pub const PASSWORD_FIELD: &str = "#lgPassword";
pub const LOGIN_BUTTON: &str = "#lgLoginButton";

/// Slot anchors in the odd and even rows of the booking table
pub const SLOT_ANCHORS: [&str; 2] = [
    ".rwdTr.noRowColor.ftOdd a",
    ".rwdTr.noRowColor.ftEven a",
];

/// Attribute holding the JSON payload of a slot anchor
pub const SLOT_PAYLOAD_ATTRIBUTE: &str = "data-ftjson";

/// Button that submits the booking request after a slot is clicked
pub const CONFIRM_BUTTON: &str = ".submit_request_button";
