mod matrix;
mod states;

use matrix::run_matrix;
use states::run_states;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::States(args) => run_states(args, ctx),
        Command::Matrix(args) => run_matrix(args, ctx),
    }
}
