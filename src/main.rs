use anyhow::{Context, Result, anyhow};
use minigolf_scorecard::args;
use minigolf_scorecard::logging::init_tracing;
use minigolf_scorecard::model::players_from_names;
use minigolf_scorecard::repl::run_scorecard_repl;

fn main() -> Result<()> {
    let args = args::args_checks().context("check arguments")?;
    init_tracing(args.log_json).map_err(|e| anyhow!("init logging: {e}"))?;

    tracing::info!(
        players = ?args.players,
        rounds = args.rounds,
        export_dir = %args.export_dir.display(),
        "starting session"
    );

    run_scorecard_repl(
        players_from_names(args.players),
        args.rounds,
        args.export_dir,
    )
}
