use std::path::PathBuf;

use anyhow::Result;
use log::warn;

use statcalc::pipeline::{FileOutcome, PipelineConfig, run};

fn main() -> Result<()> {
    env_logger::init();
    let config = config_from_args();
    let summary = run(&config)?;

    for (filename, outcome) in &summary.files {
        match outcome {
            FileOutcome::Teams => println!("Computed stats for {filename}"),
            FileOutcome::TeamsAndIndividuals => {
                println!("Computed stats for {filename} (teams + individuals)")
            }
            FileOutcome::TeamsIndividualsWithheld => {
                println!("Computed stats for {filename} (individual tables withheld)")
            }
            FileOutcome::Rejected => println!("Skipped {filename} (self-play records)"),
        }
    }
    println!("\nDone!");
    Ok(())
}

fn config_from_args() -> PipelineConfig {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let mut config = PipelineConfig::default();
    let mut idx = 0;
    while idx < args.len() {
        match args[idx].as_str() {
            "--data" if idx + 1 < args.len() => {
                config.data_dir = PathBuf::from(&args[idx + 1]);
                idx += 1;
            }
            "--results" if idx + 1 < args.len() => {
                config.results_dir = PathBuf::from(&args[idx + 1]);
                idx += 1;
            }
            "--window" if idx + 1 < args.len() => {
                match args[idx + 1].parse::<u32>() {
                    Ok(n) if n > 0 => config.form_window = n,
                    _ => warn!("ignoring invalid --window value {:?}", args[idx + 1]),
                }
                idx += 1;
            }
            "--margin" if idx + 1 < args.len() => {
                match args[idx + 1].parse::<u32>() {
                    Ok(n) => config.big_result_margin = n,
                    _ => warn!("ignoring invalid --margin value {:?}", args[idx + 1]),
                }
                idx += 1;
            }
            other => warn!("ignoring unknown argument {other:?}"),
        }
        idx += 1;
    }
    config
}
