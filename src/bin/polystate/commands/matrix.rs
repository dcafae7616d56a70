use std::path::Path;

use anyhow::{Context, Result};

use polymer_states::io::{write_matrix, write_matrix_image};
use polymer_states::{build_matrix, enumerate_states};

use crate::cli::{MatrixArgs, MatrixOutputFormat};
use crate::display::{Context as DisplayContext, Progress, print_matrix_preview};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 3;

pub fn run_matrix(args: MatrixArgs, ctx: DisplayContext) -> Result<()> {
    let format = resolve_output_format(&args);

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Enumerating conformations");
    let space = enumerate_states(args.link_count).context("State enumeration failed")?;
    let enumerated = format!("{} states for {} links", space.len(), args.link_count);
    progress.complete_step("Enumerating conformations", &[enumerated.as_str()]);

    progress.step("Building generator matrix");
    let matrix =
        build_matrix(&space, args.h, args.c).context("Matrix construction failed")?;
    let built = format!(
        "{} stored rates (h = {}, c = {})",
        matrix.stored_entry_count(),
        args.h,
        args.c
    );
    progress.complete_step("Building generator matrix", &[built.as_str()]);

    match &args.out {
        Some(path) => {
            progress.step("Exporting matrix");
            let writer = create_output(Some(path))?;
            match format {
                MatrixOutputFormat::Pgm => write_matrix_image(writer, &matrix)
                    .context("Failed to write matrix image")?,
                MatrixOutputFormat::Json => {
                    write_matrix(writer, &matrix, space.link_count())
                        .context("Failed to write matrix file")?
                }
            }
            let exported = format!("→ {}", path.display());
            progress.complete_step("Exporting matrix", &[exported.as_str()]);
            progress.finish();
        }
        None => {
            progress.finish();
            print_matrix_preview(&space, &matrix);
        }
    }

    Ok(())
}

fn resolve_output_format(args: &MatrixArgs) -> MatrixOutputFormat {
    if let Some(format) = args.output_format {
        return format;
    }
    match args.out.as_deref().and_then(Path::extension) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => MatrixOutputFormat::Json,
        _ => MatrixOutputFormat::Pgm,
    }
}
