use serde::{Deserialize, Serialize};

pub const COMPONENT: &str = "embedquestion";
pub const BUTTON_NAME: &str = "embedquestion";
pub const ICON_NAME: &str = "embedquestion";

/// The host menu the plugin's entry belongs to.
pub const INSERT_MENU: &str = "insert";

/// Host-supplied plugin configuration. The relevant context id scopes the
/// question-selector form to the right course.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginConfig {
    #[serde(default, rename = "relevantContextId")]
    pub relevant_context_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub name: String,
    pub text: String,
    pub icon: String,
}

pub trait MenuRegistry {
    fn add_menu_item(&mut self, menu: &str, item: MenuItem);
}

/// Register the plugin's single menu entry with the host editor.
pub fn register_menu(registry: &mut dyn MenuRegistry, button_text: impl Into<String>) {
    registry.add_menu_item(
        INSERT_MENU,
        MenuItem {
            name: BUTTON_NAME.to_string(),
            text: button_text.into(),
            icon: ICON_NAME.to_string(),
        },
    );
}
