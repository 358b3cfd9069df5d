//! Java source text for generated command classes and the entry point

use crate::types::{EntryPoint, TriggerBundle};
use std::fmt::Write;

const INDENT: &str = "    ";

/// Render the full source of one command class
pub fn render_command_source(bundle: &TriggerBundle) -> String {
    let mut out = String::new();
    write_header(&mut out, &bundle.package, &bundle.imports);

    let _ = writeln!(out, "{} {{", bundle.class_header);
    write_method(&mut out, &bundle.constructor.signature, &bundle.constructor.body);
    out.push('\n');
    write_method(&mut out, &bundle.handler.signature, &bundle.handler.body);
    out.push_str("}\n");
    out
}

/// Render `Plugin.java`, instantiating each class in `command_classes` in
/// `onEnable`
pub fn render_entry_point(entry: &EntryPoint, command_classes: &[String]) -> String {
    let mut out = String::new();
    write_header(&mut out, &entry.package, &entry.imports);

    let registrations = command_classes
        .iter()
        .map(|class| format!("new {class}(this);"))
        .collect::<Vec<_>>()
        .join("\n");

    let _ = writeln!(out, "{} {{", entry.class_header);
    let _ = writeln!(out, "{INDENT}@Override");
    write_method(&mut out, "public void onEnable()", &registrations);
    out.push_str("}\n");
    out
}

fn write_header(out: &mut String, package: &str, imports: &[String]) {
    let _ = writeln!(out, "package {package};");
    for import in imports {
        let _ = writeln!(out, "import {import};");
    }
}

fn write_method(out: &mut String, signature: &str, body: &str) {
    let _ = writeln!(out, "{INDENT}{signature} {{");
    for line in body.lines() {
        if line.trim().is_empty() {
            out.push('\n');
        } else {
            let _ = writeln!(out, "{INDENT}{INDENT}{line}");
        }
    }
    let _ = writeln!(out, "{INDENT}}}");
}
