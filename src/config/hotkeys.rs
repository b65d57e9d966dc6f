//! Hotkey configuration management.
//!
//! This module defines the hotkey system for the application: the bindable
//! actions, key combinations, and the default bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// Represents all possible actions that can be bound to hotkeys.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HotkeyAction {
    Spin,
    ToggleLog,
    Quit,
}

impl HotkeyAction {
    /// Order in which actions are matched when one key is bound to several.
    ///
    pub const PRIORITY: [HotkeyAction; 3] =
        [HotkeyAction::Quit, HotkeyAction::Spin, HotkeyAction::ToggleLog];
}

/// Represents a key combination (KeyCode + modifiers).
///
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hotkey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Hotkey {
    /// Unmodified key.
    ///
    pub fn plain(code: KeyCode) -> Self {
        Hotkey {
            code,
            modifiers: KeyModifiers::empty(),
        }
    }
}

/// Custom serialization for Hotkey.
///
impl Serialize for Hotkey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Hotkey", 3)?;
        state.serialize_field("code", &KeyCodeSerde::from(self.code))?;
        if let KeyCode::Char(c) = self.code {
            state.serialize_field("char", &c)?;
        }
        state.serialize_field("modifiers", &KeyModifiersSerde::from(self.modifiers))?;
        state.end()
    }
}

/// Custom deserialization for Hotkey.
///
impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct HotkeyHelper {
            code: KeyCodeSerde,
            #[serde(default)]
            char: Option<char>,
            #[serde(default)]
            modifiers: KeyModifiersSerde,
        }

        let helper = HotkeyHelper::deserialize(deserializer)?;
        let code = match helper.code {
            KeyCodeSerde::Char => match helper.char {
                Some(c) => KeyCode::Char(c),
                None => {
                    return Err(serde::de::Error::custom(
                        "Char key code requires 'char' field",
                    ))
                }
            },
            KeyCodeSerde::Esc => KeyCode::Esc,
            KeyCodeSerde::Enter => KeyCode::Enter,
            KeyCodeSerde::Tab => KeyCode::Tab,
        };
        Ok(Hotkey {
            code,
            modifiers: helper.modifiers.into(),
        })
    }
}

/// Helper enum for serializing KeyCode.
///
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
enum KeyCodeSerde {
    Char,
    Esc,
    Enter,
    Tab,
}

impl From<KeyCode> for KeyCodeSerde {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Esc => KeyCodeSerde::Esc,
            KeyCode::Enter => KeyCodeSerde::Enter,
            KeyCode::Tab => KeyCodeSerde::Tab,
            _ => KeyCodeSerde::Char, // Fallback for unsupported keys
        }
    }
}

/// Helper struct for serializing KeyModifiers.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KeyModifiersSerde {
    #[serde(default)]
    control: bool,
    #[serde(default)]
    shift: bool,
    #[serde(default)]
    alt: bool,
}

impl From<KeyModifiers> for KeyModifiersSerde {
    fn from(modifiers: KeyModifiers) -> Self {
        KeyModifiersSerde {
            control: modifiers.contains(KeyModifiers::CONTROL),
            shift: modifiers.contains(KeyModifiers::SHIFT),
            alt: modifiers.contains(KeyModifiers::ALT),
        }
    }
}

impl From<KeyModifiersSerde> for KeyModifiers {
    fn from(serde: KeyModifiersSerde) -> Self {
        let mut result = KeyModifiers::empty();
        if serde.control {
            result |= KeyModifiers::CONTROL;
        }
        if serde.shift {
            result |= KeyModifiers::SHIFT;
        }
        if serde.alt {
            result |= KeyModifiers::ALT;
        }
        result
    }
}

/// Maps hotkey actions to their key bindings. An action may have several.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hotkeys {
    bindings: HashMap<HotkeyAction, Vec<Hotkey>>,
}

impl Default for Hotkeys {
    fn default() -> Self {
        default_hotkeys()
    }
}

impl Hotkeys {
    /// Return the action bound to the key event, if any. A key bound to
    /// several actions resolves to the first in `HotkeyAction::PRIORITY`.
    ///
    pub fn action_for(&self, event: &KeyEvent) -> Option<HotkeyAction> {
        HotkeyAction::PRIORITY.into_iter().find(|action| {
            self.get(*action)
                .iter()
                .any(|hotkey| matches_hotkey(event, hotkey))
        })
    }

    /// Return the bindings for an action.
    ///
    pub fn get(&self, action: HotkeyAction) -> &[Hotkey] {
        self.bindings
            .get(&action)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Fill in defaults for actions the user left unbound.
    ///
    pub fn with_defaults(mut self) -> Self {
        for (action, hotkeys) in default_hotkeys().bindings {
            self.bindings.entry(action).or_insert(hotkeys);
        }
        self
    }
}

/// Returns default hotkey mappings.
///
pub fn default_hotkeys() -> Hotkeys {
    let mut bindings = HashMap::new();
    bindings.insert(
        HotkeyAction::Spin,
        vec![Hotkey::plain(KeyCode::Char(' ')), Hotkey::plain(KeyCode::Enter)],
    );
    bindings.insert(
        HotkeyAction::ToggleLog,
        vec![Hotkey::plain(KeyCode::Char('l'))],
    );
    bindings.insert(
        HotkeyAction::Quit,
        vec![Hotkey::plain(KeyCode::Char('q')), Hotkey::plain(KeyCode::Esc)],
    );
    Hotkeys { bindings }
}

/// Checks if a KeyEvent matches a Hotkey.
///
pub fn matches_hotkey(event: &KeyEvent, hotkey: &Hotkey) -> bool {
    event.code == hotkey.code && event.modifiers == hotkey.modifiers
}

/// Builds a footer text string from hotkey configurations.
///
pub fn build_footer_text(hotkeys: &Hotkeys, actions: &[(HotkeyAction, &str)]) -> String {
    actions
        .iter()
        .filter_map(|(action, description)| {
            let keys = hotkeys.get(*action);
            if keys.is_empty() {
                return None;
            }
            let keys: Vec<String> = keys.iter().map(format_hotkey_display).collect();
            Some(format!(" {}: {}", keys.join("/"), description))
        })
        .collect::<Vec<_>>()
        .join(",")
}

/// Formats a hotkey for display in the footer.
///
pub fn format_hotkey_display(hotkey: &Hotkey) -> String {
    let mut parts = Vec::new();
    if hotkey.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if hotkey.modifiers.contains(KeyModifiers::SHIFT) {
        parts.push("Shift");
    }
    if hotkey.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }

    let key_str = match &hotkey.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        _ => "Unknown".to_string(),
    };

    if parts.is_empty() {
        key_str
    } else {
        format!("{}+{}", parts.join("+"), key_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn event(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_matches_hotkey() {
        let hotkey = Hotkey::plain(KeyCode::Char('q'));
        assert!(matches_hotkey(
            &event(KeyCode::Char('q'), KeyModifiers::empty()),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &event(KeyCode::Char('q'), KeyModifiers::CONTROL),
            &hotkey
        ));
        assert!(!matches_hotkey(
            &event(KeyCode::Char('w'), KeyModifiers::empty()),
            &hotkey
        ));
    }

    #[test]
    fn test_action_for_default_bindings() {
        let hotkeys = default_hotkeys();
        let spin = event(KeyCode::Char(' '), KeyModifiers::empty());
        assert_eq!(hotkeys.action_for(&spin), Some(HotkeyAction::Spin));
        let enter = event(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(hotkeys.action_for(&enter), Some(HotkeyAction::Spin));
        let esc = event(KeyCode::Esc, KeyModifiers::empty());
        assert_eq!(hotkeys.action_for(&esc), Some(HotkeyAction::Quit));
        let other = event(KeyCode::Char('z'), KeyModifiers::empty());
        assert_eq!(hotkeys.action_for(&other), None);
    }

    #[test]
    fn test_key_bound_twice_resolves_by_priority() {
        let x = event(KeyCode::Char('x'), KeyModifiers::empty());
        // Each map gets a fresh hasher, so iteration order varies between them.
        for _ in 0..20 {
            let mut bindings = HashMap::new();
            bindings.insert(HotkeyAction::Spin, vec![Hotkey::plain(KeyCode::Char('x'))]);
            bindings.insert(HotkeyAction::Quit, vec![Hotkey::plain(KeyCode::Char('x'))]);
            bindings.insert(
                HotkeyAction::ToggleLog,
                vec![Hotkey::plain(KeyCode::Char('x'))],
            );
            let hotkeys = Hotkeys { bindings };
            assert_eq!(hotkeys.action_for(&x), Some(HotkeyAction::Quit));
        }

        let mut bindings = HashMap::new();
        bindings.insert(HotkeyAction::ToggleLog, vec![Hotkey::plain(KeyCode::Enter)]);
        let hotkeys = Hotkeys { bindings }.with_defaults();
        let enter = event(KeyCode::Enter, KeyModifiers::empty());
        assert_eq!(hotkeys.action_for(&enter), Some(HotkeyAction::Spin));
    }

    #[test]
    fn test_with_defaults_keeps_user_bindings() {
        let mut bindings = HashMap::new();
        bindings.insert(HotkeyAction::Spin, vec![Hotkey::plain(KeyCode::Char('s'))]);
        let hotkeys = Hotkeys { bindings }.with_defaults();

        assert_eq!(hotkeys.get(HotkeyAction::Spin).len(), 1);
        assert!(!hotkeys.get(HotkeyAction::Quit).is_empty());
        assert!(!hotkeys.get(HotkeyAction::ToggleLog).is_empty());
    }

    #[test]
    fn test_hotkey_serialization() {
        let hotkey = Hotkey {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::CONTROL,
        };
        let serialized = serde_yaml::to_string(&hotkey).unwrap();
        assert!(serialized.contains("j"));
        let deserialized: Hotkey = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkey, deserialized);
    }

    #[test]
    fn test_char_without_char_field_is_rejected() {
        let result: Result<Hotkey, _> = serde_yaml::from_str("code: Char\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_hotkeys_serialization() {
        let hotkeys = default_hotkeys();
        let serialized = serde_yaml::to_string(&hotkeys).unwrap();
        assert!(serialized.contains("spin"));
        let deserialized: Hotkeys = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(hotkeys, deserialized);
    }

    #[test]
    fn test_format_hotkey_display() {
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Char(' '))), "Space");
        assert_eq!(format_hotkey_display(&Hotkey::plain(KeyCode::Esc)), "Esc");
        let ctrl_c = Hotkey {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert_eq!(format_hotkey_display(&ctrl_c), "Ctrl+c");
    }

    #[test]
    fn test_build_footer_text() {
        let hotkeys = default_hotkeys();
        let text = build_footer_text(&hotkeys, &[(HotkeyAction::Spin, "spin")]);
        assert_eq!(text, " Space/Enter: spin");
    }
}
