//! Field identity and kind classification.
//!
//! A field is one editable area of a structured note, identified by its
//! ordinal position. The host classifies each field's semantic role on every
//! render pass; the classification decides which action button is shown.

/// Ordinal of an editor field, stable for the lifetime of the editing session.
pub type FieldId = u32;

/// Semantic role of a field, supplied by the host per render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Plain text, no action button.
    #[default]
    Plain,
    /// Language text eligible for speech.
    Language,
    /// Audio reference playable from the sound collection.
    Sound,
}

impl FieldKind {
    /// Map the host's string tag to a kind. Unrecognized tags are treated
    /// as `Plain`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "plain" => FieldKind::Plain,
            "language" => FieldKind::Language,
            "sound" => FieldKind::Sound,
            other => {
                if !other.is_empty() {
                    log::warn!("unrecognized field kind '{}', treating as plain", other);
                }
                FieldKind::Plain
            }
        }
    }

    /// The action button this kind carries, if any.
    pub fn action(self) -> Option<FieldAction> {
        match self {
            FieldKind::Plain => None,
            FieldKind::Language => Some(FieldAction {
                label: "Speak",
                verb: "ttsspeak",
                class: "class-language-field",
            }),
            FieldKind::Sound => Some(FieldAction {
                label: "Play",
                verb: "playsoundcollection",
                class: "class-sound-field",
            }),
        }
    }
}

/// Description of an action button: visible label, outbound command verb,
/// and the CSS class marking the element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldAction {
    pub label: &'static str,
    pub verb: &'static str,
    pub class: &'static str,
}

impl FieldAction {
    /// Command string sent through the host bridge when the button activates.
    pub fn command(&self, id: FieldId) -> String {
        format!("{}:{}", self.verb, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tags_map_to_kinds() {
        assert_eq!(FieldKind::from_tag("plain"), FieldKind::Plain);
        assert_eq!(FieldKind::from_tag("language"), FieldKind::Language);
        assert_eq!(FieldKind::from_tag("sound"), FieldKind::Sound);
    }

    #[test]
    fn unknown_tag_falls_back_to_plain() {
        assert_eq!(FieldKind::from_tag("picture"), FieldKind::Plain);
        assert_eq!(FieldKind::from_tag("Language"), FieldKind::Plain);
        assert_eq!(FieldKind::from_tag(""), FieldKind::Plain);
    }

    #[test]
    fn action_lookup_matches_kind() {
        assert!(FieldKind::Plain.action().is_none());

        let speak = FieldKind::Language.action().unwrap();
        assert_eq!(speak.label, "Speak");
        assert_eq!(speak.command(3), "ttsspeak:3");

        let play = FieldKind::Sound.action().unwrap();
        assert_eq!(play.label, "Play");
        assert_eq!(play.command(0), "playsoundcollection:0");
    }
}
