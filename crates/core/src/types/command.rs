use super::trigger_bundle::TriggerBundle;
use crate::error::{Error, Result};
use crate::guard::CapabilityRegistry;
use crate::transpiler::transpile;

pub const DEFAULT_USAGE: &str = "this command doesn't specify a usage";
pub const DEFAULT_DESCRIPTION: &str = "this command doesn't have a description";

/// A command a plugin registers, plus its generated Java once a handler is set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub usage: String,
    pub description: String,
    pub aliases: Option<Vec<String>>,
    sender: Option<String>,
    trigger: Option<TriggerBundle>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            usage: DEFAULT_USAGE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            aliases: None,
            sender: None,
            trigger: None,
        }
    }

    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_aliases(mut self, aliases: Vec<String>) -> Self {
        self.aliases = Some(aliases);
        self
    }

    /// Set the callback run when the command is used.
    ///
    /// Replaces any earlier handler, including guards applied to it.
    pub fn on_use(&mut self, source: &str) -> Result<()> {
        let handler = transpile(source)?;
        self.trigger = Some(TriggerBundle::new(&self.name, &handler));
        self.sender = Some(handler.params.sender);
        Ok(())
    }

    /// Restrict the handler to senders holding capability `tag`.
    ///
    /// Unknown tags are reported and ignored.
    pub fn execute_type(&mut self, tag: &str, registry: &CapabilityRegistry) -> Result<()> {
        let (Some(trigger), Some(sender)) = (self.trigger.as_mut(), self.sender.as_deref()) else {
            return Err(Error::MissingHandler(self.name.clone()));
        };
        trigger.handler.body = registry.inject(&trigger.handler.body, sender, tag);
        Ok(())
    }

    /// Sender parameter name taken from the handler's signature
    pub fn sender(&self) -> Option<&str> {
        self.sender.as_deref()
    }

    pub fn trigger(&self) -> Option<&TriggerBundle> {
        self.trigger.as_ref()
    }

    pub(crate) fn trigger_mut(&mut self) -> Option<&mut TriggerBundle> {
        self.trigger.as_mut()
    }

    pub fn has_handler(&self) -> bool {
        self.trigger.is_some()
    }
}
