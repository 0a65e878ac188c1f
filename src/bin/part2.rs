use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::{orchestrator, AdjacencyTable, CLIArgs, LoopDetector};

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
    let pool = orchestrator::build_pool(args.threads)
        .context("Failed to build thread pool for checking loop positions.")?;
    let detector = LoopDetector::new(lab.grid(), &table);
    let loop_n = pool.install(|| orchestrator::count_looping_candidates(&path, &detector));

    println!(
        "There is(are) {} location(s) which can make guard loops in given laboratory.",
        loop_n
    );

    Ok(())
}
