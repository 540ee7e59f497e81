//! The `process-data` command: load, clean, rank and export.

use tracing::info;

use crate::{
    config::ProcessConfig,
    valuations::{
        build_rankings, load_data, remove_keepers, write_workbook, ExportOptions,
        PositionRankings, PositionSummary, ProcessSummary,
    },
    Result,
};

/// Run the whole pipeline for `config` and return what was written.
pub fn run_process_data(config: &ProcessConfig) -> Result<ProcessSummary> {
    let table = load_data(&config.sources())?;
    let loaded = table.len();
    info!("Loaded {} players", loaded);

    let table = remove_keepers(&config.keepers, table)?;
    let keepers_removed = loaded - table.len();

    let rankings = build_rankings(&table)?;
    write_workbook(
        &rankings,
        &config.output_path,
        ExportOptions {
            create_dirs: config.create_output_dirs,
        },
    )?;

    Ok(summarize(config, &rankings, table.len(), keepers_removed))
}

fn summarize(
    config: &ProcessConfig,
    rankings: &PositionRankings,
    total_players: usize,
    keepers_removed: usize,
) -> ProcessSummary {
    let per_position = rankings
        .sheets
        .iter()
        .map(|(position, rows)| PositionSummary {
            position: *position,
            players: rows.len(),
            top: rows.first().map(|r| r.name.clone()),
        })
        .collect();

    ProcessSummary {
        output: config.output_path.display().to_string(),
        total_players,
        keepers_removed,
        per_position,
    }
}

/// Handle the process-data command
pub fn handle_process_data(config: ProcessConfig, as_json: bool) -> Result<()> {
    let summary = run_process_data(&config)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&summary)?); // tarpaulin::skip
    } else {
        // tarpaulin::skip - console output
        println!(
            "Saved {} players to {} ({} keepers removed)",
            summary.total_players, summary.output, summary.keepers_removed
        );
        for line in &summary.per_position {
            println!(
                "{:<2} {:>4} players  top: {}",
                line.position,
                line.players,
                line.top.as_deref().unwrap_or("-")
            );
        }
    }

    Ok(())
}
