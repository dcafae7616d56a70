use std::io::{self, Write};

use polymer_states::{StateSpace, TransitionMatrix};

const INDENT: &str = "      ";

/// Largest block of the matrix shown in a terminal preview.
const PREVIEW_LIMIT: usize = 10;

pub fn print_space_summary(space: &StateSpace) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let _ = writeln!(out);
    let _ = writeln!(out, "{INDENT}Link count:    {}", space.link_count());
    let _ = writeln!(out, "{INDENT}State count:   {}", space.len());
    let _ = writeln!(out);
}

pub fn print_matrix_preview(space: &StateSpace, matrix: &TransitionMatrix) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let size = matrix.size();
    let shown = size.min(PREVIEW_LIMIT);

    let _ = writeln!(
        out,
        "Generator matrix: {size} x {size}, {} stored rates",
        matrix.stored_entry_count()
    );

    if shown < size {
        let _ = writeln!(out, "Top-left {shown} x {shown} block:");
    }
    let _ = writeln!(out);

    let _ = write!(out, "{:>8}", "");
    for j in 0..shown {
        let _ = write!(out, " {:>8}", state_label(space, j));
    }
    let _ = writeln!(out);

    for i in 0..shown {
        let _ = write!(out, "{:>8}", state_label(space, i));
        for j in 0..shown {
            let _ = write!(out, " {:>8.3}", matrix.get(i, j));
        }
        let _ = writeln!(out);
    }

    let _ = writeln!(out);
}

fn state_label(space: &StateSpace, index: usize) -> String {
    match space.get(index) {
        Some(state) => state.to_string(),
        None => index.to_string(),
    }
}
