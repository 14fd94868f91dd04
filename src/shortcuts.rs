use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Generate,
    Copy,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Binding {
    pub code: &'static str,
    pub ctrl: bool,
    pub action: Action,
}

// `ctrl: false` bindings fire whether or not Ctrl is held.
pub const BINDINGS: [Binding; 3] = [
    Binding {
        code: "Space",
        ctrl: false,
        action: Action::Generate,
    },
    Binding {
        code: "Enter",
        ctrl: false,
        action: Action::Generate,
    },
    Binding {
        code: "KeyC",
        ctrl: true,
        action: Action::Copy,
    },
];

pub fn resolve(code: &str, ctrl: bool) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|binding| binding.code == code && (ctrl || !binding.ctrl))
        .map(|binding| binding.action)
}

pub fn bindings_json() -> String {
    serde_json::to_string(&BINDINGS).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_and_enter_generate() {
        assert_eq!(resolve("Space", false), Some(Action::Generate));
        assert_eq!(resolve("Enter", false), Some(Action::Generate));
        assert_eq!(resolve("Enter", true), Some(Action::Generate));
    }

    #[test]
    fn copy_needs_ctrl() {
        assert_eq!(resolve("KeyC", true), Some(Action::Copy));
        assert_eq!(resolve("KeyC", false), None);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        assert_eq!(resolve("KeyX", true), None);
        assert_eq!(resolve("Escape", false), None);
    }

    #[test]
    fn bindings_export_for_the_page() {
        let json = bindings_json();
        assert!(json.contains(r#""code":"KeyC","ctrl":true,"action":"copy""#));
    }
}
