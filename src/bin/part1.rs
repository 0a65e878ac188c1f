use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::{AdjacencyTable, CLIArgs};

fn main() -> Result<()> {
    guard_patrol::init_tracing();
    let args = CLIArgs::parse();
    let lab = guard_patrol::read_lab(&args.input_path).with_context(|| {
        format!(
            "Failed to read laboratory from given file({}).",
            args.input_path.display()
        )
    })?;

    let table = AdjacencyTable::build(lab.grid());
    let path = guard_patrol::walk(lab.grid(), &table, lab.guard())?;
    println!(
        "The guard will visit {} distinct position(s) before leaving given laboratory.",
        path.visited_n()
    );

    Ok(())
}
