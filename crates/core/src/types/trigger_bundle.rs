use crate::transpiler::TranspiledHandler;

/// Imports every generated command class starts with
pub const COMMAND_IMPORTS: [&str; 4] = [
    "org.bukkit.command.Command",
    "org.bukkit.command.CommandExecutor",
    "org.bukkit.command.CommandSender",
    "org.bukkit.entity.Player",
];

/// Signature and body of one generated Java method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSource {
    pub signature: String,
    pub body: String,
}

/// Generated source fragments for one command class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerBundle {
    /// Empty until the command is attached to a plugin
    pub package: String,
    pub imports: Vec<String>,
    pub class_header: String,
    pub constructor: MethodSource,
    pub handler: MethodSource,
}

impl TriggerBundle {
    pub fn new(class_name: &str, handler: &TranspiledHandler) -> Self {
        Self {
            package: String::new(),
            imports: COMMAND_IMPORTS.iter().map(|i| i.to_string()).collect(),
            class_header: format!("public class {class_name} implements CommandExecutor"),
            constructor: MethodSource {
                signature: format!("public {class_name}(Plugin plugin)"),
                body: format!("plugin.getCommand(\"{class_name}\").setExecutor(this);"),
            },
            handler: MethodSource {
                signature: handler.signature.clone(),
                body: handler.body.clone(),
            },
        }
    }

    /// Point the bundle at the plugin whose qualified name is `qualified_plugin`
    /// (`<package>.<name>`).
    pub fn stamp(&mut self, qualified_plugin: &str) {
        self.package = format!("{qualified_plugin}.commands");
        self.imports.push(format!("{qualified_plugin}.Plugin"));
    }
}
