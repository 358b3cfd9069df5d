use plugsmith_core::{BuildArtifact, MethodSource};

/// Render a generated method the way it appears in the class file
pub fn format_method(method: &MethodSource) -> String {
    let mut out = format!("{} {{\n", method.signature);
    for line in method.body.lines() {
        if !line.trim().is_empty() {
            out.push_str("    ");
            out.push_str(line);
        }
        out.push('\n');
    }
    out.push('}');
    out
}

pub fn print_artifact(artifact: &BuildArtifact) {
    println!("✅ Built {} ({} bytes)", artifact.path.display(), artifact.size);
    if artifact.registered_commands.is_empty() {
        println!("   No commands registered");
    } else {
        println!("   Commands: {}", artifact.registered_commands.join(", "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_method_indents_body() {
        let method = MethodSource {
            signature: "public boolean onCommand(CommandSender s, Command c, String l, String[] a)"
                .to_string(),
            body: "if (a.length > 0) {\n    s.sendMessage(a[0]);\n}\n\nreturn true;".to_string(),
        };
        assert_eq!(
            format_method(&method),
            "public boolean onCommand(CommandSender s, Command c, String l, String[] a) {\n    if (a.length > 0) {\n        s.sendMessage(a[0]);\n    }\n\n    return true;\n}"
        );
    }
}
