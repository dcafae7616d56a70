use anyhow::{Context, Result};

use polymer_states::enumerate_states;
use polymer_states::io::write_states;

use crate::cli::StatesArgs;
use crate::display::{Context as DisplayContext, Progress, print_space_summary};
use crate::io::create_output;

const TOTAL_STEPS: u8 = 2;

pub fn run_states(args: StatesArgs, ctx: DisplayContext) -> Result<()> {
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Enumerating conformations");
    let space = enumerate_states(args.link_count).context("State enumeration failed")?;
    let enumerated = format!("{} states for {} links", space.len(), args.link_count);
    progress.complete_step("Enumerating conformations", &[enumerated.as_str()]);

    if ctx.interactive {
        print_space_summary(&space);
    }

    progress.step("Writing state listing");
    let writer = create_output(args.output.as_deref())?;
    write_states(writer, &space).context("Failed to write state listing")?;

    let target = args
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    let written = format!("→ {}", target);
    progress.complete_step("Writing state listing", &[written.as_str()]);

    progress.finish();

    Ok(())
}
