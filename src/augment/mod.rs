//! Field augmentor: owns per-field decoration state and reconciles it
//! against the host's classification on every render pass.
//!
//! The host owns the editor fields and re-renders them at will; this module
//! owns everything it appended to them. `reconfigure` is idempotent:
//! repeating it with the same field set and kinds changes nothing. The
//! setter operations are driven by background completions and may race a
//! re-render, so a reference to an untracked field is always a logged drop,
//! never an error.

pub mod host;
mod inline;

pub use host::{DecorationHost, InlineRowHandles};
pub use inline::InlineKey;

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::field::{FieldId, FieldKind};
use crate::models::{ActionSpec, DecorationConfig, IndicatorSpec};
use crate::utils::encoding::decode_or_raw;
use inline::InlineRow;

/// One field of the current render pass, as reported by the host.
#[derive(Debug, Clone)]
pub struct FieldSpec<T> {
    pub id: FieldId,
    pub kind: FieldKind,
    /// Container the decoration is appended to.
    pub label_container: T,
    /// Editing area whose content `set_field_content` overwrites.
    pub editing_area: T,
}

/// Indicator pair created once per tracked field.
struct Indicators<T> {
    loading: T,
    generated_for: T,
}

/// Decoration state owned per tracked field.
struct FieldState<T> {
    label_container: T,
    editing_area: T,
    indicators: Indicators<T>,
    kind: FieldKind,
    /// The attached Speak/Play button; `None` iff `kind` is `Plain`.
    action: Option<T>,
}

/// Counts reported back to the host after a reconfigure pass.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ReconfigureSummary {
    /// Fields tracked after the pass.
    pub tracked: usize,
    /// Fields that received a fresh indicator pair this pass.
    pub decorated: usize,
    pub actions_added: usize,
    pub actions_removed: usize,
    /// Previously tracked fields dropped because the pass no longer names them.
    pub pruned: usize,
}

/// Owns the decoration attached to the host's editor fields.
pub struct Augmentor<H: DecorationHost> {
    host: H,
    config: DecorationConfig,
    fields: HashMap<FieldId, FieldState<H::Handle>>,
    inline: HashMap<InlineKey, InlineRow<H::Handle>>,
}

impl<H: DecorationHost> Augmentor<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, DecorationConfig::default())
    }

    pub fn with_config(host: H, config: DecorationConfig) -> Self {
        Self {
            host,
            config,
            fields: HashMap::new(),
            inline: HashMap::new(),
        }
    }

    /// Read access to the decoration host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Number of fields currently tracked.
    pub fn tracked_fields(&self) -> usize {
        self.fields.len()
    }

    /// Reconcile decoration against the complete current field set.
    ///
    /// Indicators are created once per tracked field and re-hidden on every
    /// later pass; the action button is replaced only when the field's kind
    /// changed; fields absent from `fields` are pruned. Pruning is
    /// bookkeeping only: the host already removed their DOM subtree.
    pub fn reconfigure(&mut self, fields: Vec<FieldSpec<H::Handle>>) -> ReconfigureSummary {
        let mut summary = ReconfigureSummary::default();
        let mut seen: HashSet<FieldId> = HashSet::with_capacity(fields.len());

        for spec in fields {
            if !seen.insert(spec.id) {
                log::warn!("field {} listed twice in one pass, keeping first entry", spec.id);
                continue;
            }

            let state = match self.fields.entry(spec.id) {
                Entry::Occupied(entry) => {
                    let state = entry.into_mut();
                    // Handles may be fresh references to the same nodes.
                    state.label_container = spec.label_container;
                    state.editing_area = spec.editing_area;
                    // Stale visibility from a previous pass must not survive.
                    self.host.set_visible(&state.indicators.loading, false);
                    self.host.set_visible(&state.indicators.generated_for, false);
                    state
                }
                Entry::Vacant(entry) => {
                    let indicators = Indicators {
                        loading: self.host.append_indicator(
                            &spec.label_container,
                            &IndicatorSpec::loading(spec.id, &self.config),
                        ),
                        generated_for: self.host.append_indicator(
                            &spec.label_container,
                            &IndicatorSpec::generated_for(spec.id),
                        ),
                    };
                    summary.decorated += 1;
                    entry.insert(FieldState {
                        label_container: spec.label_container,
                        editing_area: spec.editing_area,
                        indicators,
                        kind: FieldKind::Plain,
                        action: None,
                    })
                }
            };

            if state.kind != spec.kind {
                if let Some(old) = state.action.take() {
                    self.host.remove(&old);
                    summary.actions_removed += 1;
                }
                if let Some(action) = spec.kind.action() {
                    let button = self
                        .host
                        .append_action(&state.label_container, &ActionSpec::new(action, spec.id));
                    state.action = Some(button);
                    summary.actions_added += 1;
                }
                state.kind = spec.kind;
            }
        }

        let before = self.fields.len();
        self.fields.retain(|id, _| seen.contains(id));
        summary.pruned = before - self.fields.len();
        summary.tracked = self.fields.len();
        summary
    }

    /// Reveal the loading indicator for `id` and hide the generated-for
    /// indicator. Dropped if `id` is not tracked yet.
    pub fn show_loading(&mut self, id: FieldId) {
        let Some(state) = self.fields.get(&id) else {
            log::warn!("show_loading for untracked field {}, dropping", id);
            return;
        };
        self.host.set_visible(&state.indicators.loading, true);
        self.host.set_visible(&state.indicators.generated_for, false);
    }

    /// Hide the loading indicator and reveal the generated-for indicator,
    /// labelled with the decoded source text.
    pub fn hide_loading(&mut self, id: FieldId, encoded_source: &str) {
        let Some(state) = self.fields.get(&id) else {
            log::warn!("hide_loading for untracked field {}, dropping", id);
            return;
        };
        let source = decode_or_raw(encoded_source);
        let text = format!("{}{}", self.config.generated_prefix, source);
        self.host.set_visible(&state.indicators.loading, false);
        self.host.set_text(&state.indicators.generated_for, &text);
        self.host.set_visible(&state.indicators.generated_for, true);
    }

    /// Overwrite the field's editing-area content with the decoded HTML
    /// fragment. Destructive: the previous content is replaced, not appended.
    pub fn set_field_content(&mut self, id: FieldId, encoded_value: &str) {
        let Some(state) = self.fields.get(&id) else {
            log::warn!("set_field_content for untracked field {}, dropping", id);
            return;
        };
        let value = decode_or_raw(encoded_value);
        self.host.set_html(&state.editing_area, &value);
    }
}
