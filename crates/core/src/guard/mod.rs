//! Runtime capability guards injected into transpiled handler bodies

use crate::config::Config;
use crate::utils::identifier::{is_identifier_char, is_java_identifier};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const PLAYER_TAG: &str = "player";

const FALLBACK_LOCAL: &str = "guarded";

/// The Java type a sender must be, and what to tell it when it is not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Capability {
    pub target_type: String,
    pub rejection_message: String,
}

impl Capability {
    pub fn new(target_type: impl Into<String>, rejection_message: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            rejection_message: rejection_message.into(),
        }
    }

    pub fn player() -> Self {
        Self::new(
            "Player",
            "You have to be a player in order to use this command!",
        )
    }
}

/// Capability tags known to the guard injector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityRegistry {
    capabilities: BTreeMap<String, Capability>,
}

impl Default for CapabilityRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register(PLAYER_TAG, Capability::player());
        registry
    }
}

impl CapabilityRegistry {
    pub fn empty() -> Self {
        Self {
            capabilities: BTreeMap::new(),
        }
    }

    /// Built-in capabilities overlaid with the ones declared in `config`
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::default();
        for (tag, capability) in &config.capabilities {
            registry.register(tag.clone(), capability.clone());
        }
        registry
    }

    pub fn register(&mut self, tag: impl Into<String>, capability: Capability) {
        self.capabilities.insert(tag.into(), capability);
    }

    pub fn get(&self, tag: &str) -> Option<&Capability> {
        self.capabilities.get(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.capabilities.keys().map(String::as_str)
    }

    /// Guard `body` so it only runs for senders holding capability `tag`.
    ///
    /// Every use of `sender` in the body is renamed to a fresh local of the
    /// capability's type, and a preamble rejecting other senders is
    /// prepended. An unknown tag logs a warning and returns `body` unchanged.
    pub fn inject(&self, body: &str, sender: &str, tag: &str) -> String {
        let Some(capability) = self.get(tag) else {
            warn!(
                "unknown type: {tag} (known: {})",
                self.tags().collect::<Vec<_>>().join(", ")
            );
            return body.to_string();
        };

        let local = fresh_identifier(body, &local_base(tag));
        debug!("Guarding handler with {} as '{}'", capability.target_type, local);

        let ty = &capability.target_type;
        let message = escape_java_string(&capability.rejection_message);
        let preamble = format!(
            "{ty} {local} = {sender} instanceof {ty} ? ({ty}) {sender} : null;\n\
             if (!({local} instanceof {ty})) {{\n    \
             {sender}.sendMessage(\"{message}\");\n    \
             return false;\n\
             }}\n"
        );

        preamble + &rename_identifier(body, sender, &local)
    }
}

/// Replace whole-identifier occurrences of `from` with `to`
pub fn rename_identifier(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (start, _) in text.match_indices(from) {
        let end = start + from.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        if before.is_some_and(is_identifier_char) || after.is_some_and(is_identifier_char) {
            continue;
        }
        out.push_str(&text[last..start]);
        out.push_str(to);
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

fn contains_identifier(text: &str, name: &str) -> bool {
    rename_identifier(text, name, "") != text
}

/// Lower-cased identifier characters of `tag`, or [`FALLBACK_LOCAL`] when
/// those do not form a usable Java name
fn local_base(tag: &str) -> String {
    let base: String = tag
        .chars()
        .filter(|c| is_identifier_char(*c))
        .collect::<String>()
        .to_lowercase();
    if is_java_identifier(&base) {
        base
    } else {
        FALLBACK_LOCAL.to_string()
    }
}

/// `base`, or `base1`, `base2`, ... if the body already uses it
fn fresh_identifier(body: &str, base: &str) -> String {
    if !contains_identifier(body, base) {
        return base.to_string();
    }
    (1..)
        .map(|n| format!("{base}{n}"))
        .find(|candidate| !contains_identifier(body, candidate))
        .unwrap_or_else(|| base.to_string())
}

fn escape_java_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}
