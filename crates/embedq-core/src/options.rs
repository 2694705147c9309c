use serde::{Deserialize, Serialize};

pub const MIN_DESCRIPTION_LEN: usize = 3;
pub const MAX_DESCRIPTION_LEN: usize = 100;

/// The flat key/value request accepted by the embed-code generation
/// service. Every field is a string and may be empty; serialized key names
/// are fixed by the service contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedOptions {
    #[serde(default, rename = "courseid")]
    pub course_id: String,
    #[serde(default, rename = "categoryidnumber")]
    pub category_idnumber: String,
    #[serde(default, rename = "questionidnumber")]
    pub question_idnumber: String,
    #[serde(default, rename = "iframedescription")]
    pub iframe_description: String,
    #[serde(default)]
    pub behaviour: String,
    #[serde(default, rename = "maxmark")]
    pub max_mark: String,
    #[serde(default)]
    pub variant: String,
    #[serde(default)]
    pub correctness: String,
    #[serde(default)]
    pub marks: String,
    #[serde(default, rename = "markdp")]
    pub mark_dp: String,
    #[serde(default)]
    pub feedback: String,
    #[serde(default, rename = "generalfeedback")]
    pub general_feedback: String,
    #[serde(default, rename = "rightanswer")]
    pub right_answer: String,
    #[serde(default)]
    pub history: String,
    #[serde(default, rename = "forcedlanguage")]
    pub forced_language: String,
}

impl EmbedOptions {
    // The form validates these as well and handles the user-facing message;
    // a failing check here only means no request is issued.
    pub fn ready_to_submit(&self) -> bool {
        if self.question_idnumber.is_empty() {
            return false;
        }

        // The iframe description may be left blank to get the default one.
        let len = self.iframe_description.chars().count();
        len == 0 || (MIN_DESCRIPTION_LEN..=MAX_DESCRIPTION_LEN).contains(&len)
    }
}
