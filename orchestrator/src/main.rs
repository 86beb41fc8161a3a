mod cli;

use clap::Parser;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Cli::parse().into_run_config()?;
    let report = orchestrator::train(config)?;

    for trial in &report.trials {
        println!("{}", trial.view);
    }

    if let (true, Some(summary)) = (report.trials.len() > 1, report.summary()) {
        println!(
            "test acc over {} trials: mean {:.1}% | min {:.1}% | max {:.1}%",
            report.trials.len(),
            summary.mean * 100.,
            summary.min * 100.,
            summary.max * 100.
        );
    }

    Ok(())
}
