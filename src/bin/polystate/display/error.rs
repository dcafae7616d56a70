use std::io::{self, Write};

use anyhow::Error;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(engine_err) = err.downcast_ref::<polymer_states::EngineError>() {
        use polymer_states::EngineError;

        match engine_err {
            EngineError::InvalidParameter { name, .. } => {
                hints.push(format!("The '{}' argument is out of range", name));
                hints.push("LINK_COUNT must be a positive integer".to_string());
                hints.push("H and C must be finite and non-negative".to_string());
            }
            EngineError::StateSpaceMismatch { .. } => {
                hints.push("A persisted state listing may be truncated or stale".to_string());
                hints.push(
                    "Re-run 'polystate states' to regenerate the listing".to_string(),
                );
            }
        }
    } else if let Some(io_err) = err.downcast_ref::<polymer_states::IoError>() {
        use polymer_states::IoError;

        match io_err {
            IoError::Io { source } => {
                collect_std_io_hints(source, &mut hints);
            }
            IoError::Parse { format, line, .. } => {
                hints.push(format!("Parser stopped near line {} of the {}", line, format));
                hints.push("States use one U/D/L/R/S sequence per line".to_string());
            }
            IoError::Json { .. } => {
                hints.push("The matrix file is not valid JSON".to_string());
                hints.push("Regenerate it with 'polystate matrix ... --out'".to_string());
            }
            IoError::InvalidData(_) => {
                hints.push("The persisted data contradicts the model invariants".to_string());
                hints.push("Regenerate the file instead of editing it by hand".to_string());
            }
        }
    } else {
        let msg = err.to_string().to_lowercase();
        if msg.contains("no such file") || msg.contains("not found") {
            hints.push("Check that the file path is correct".to_string());
        } else if msg.contains("permission denied") {
            hints.push("Check file permissions with `ls -la`".to_string());
        }
    }

    if hints.is_empty() { None } else { Some(hints) }
}

fn collect_std_io_hints(source: &std::io::Error, hints: &mut Vec<String>) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".to_string());
            hints.push("Check the path spelling and ensure the file exists".to_string());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".to_string());
            hints.push("Check file permissions with `ls -la`".to_string());
        }
        ErrorKind::WriteZero => {
            hints.push("Failed to write data (disk full?)".to_string());
        }
        ErrorKind::BrokenPipe => {
            hints.push("Broken pipe: the output consumer terminated".to_string());
            hints.push("This may occur when piping to commands like `head`".to_string());
        }
        _ => {
            hints.push("Check file path, permissions, and disk space".to_string());
        }
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
