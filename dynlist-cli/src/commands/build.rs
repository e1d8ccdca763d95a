use anyhow::{Context, Result};
use colored::*;
use dynlist_core::{List, ListConfig, Status};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use tracing::{debug, info, warn};

use crate::GrowthArg;

/// How the list is configured and seeded before values are appended
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Treat the input as one JSON value per line
    pub jsonl: bool,
    /// Pre-size the list with this many `null` elements
    pub init: Option<i64>,
    /// Growth policy used while appending
    pub growth: GrowthArg,
    /// Element ceiling; appends beyond it are refused
    pub max_elements: Option<usize>,
}

/// Summary of a build run, written as JSON
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct BuildReport {
    pub len: usize,
    pub capacity: usize,
    pub status: Status,
    pub code: i32,
    pub init_status: Option<Status>,
    pub appended: usize,
    pub failed_appends: usize,
    pub first_failure: Option<usize>,
}

fn read_values(content: &str, jsonl: bool) -> Result<Vec<Value>> {
    if jsonl {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(n, line)| {
                serde_json::from_str(line)
                    .with_context(|| format!("Failed to parse JSON on line {}", n + 1))
            })
            .collect()
    } else {
        serde_json::from_str(content).with_context(|| "Failed to parse JSON input")
    }
}

pub fn execute(input: &str, output: Option<&str>, options: &BuildOptions) -> Result<BuildReport> {
    info!("Building list from {}", input);

    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let values = read_values(&content, options.jsonl)?;
    info!("Found {} values to append", values.len());

    let mut config = ListConfig::new().growth(options.growth.into());
    if let Some(max) = options.max_elements {
        config = config.max_elements(max);
    }

    let mut list: List<Value> = List::with_config(config);

    // A failed init is recorded and the appends still run
    let init_status = options.init.map(|size| {
        match list.init(size) {
            Ok(()) => debug!("Pre-sized list with {} null elements", list.len()),
            Err(e) => warn!("Failed to initialize list with {} elements: {}", size, e),
        }
        list.status()
    });

    let mut appended = 0;
    let mut failed_appends = 0;
    let mut first_failure = None;

    for (i, value) in values.into_iter().enumerate() {
        match list.append(value) {
            Ok(()) => appended += 1,
            Err(e) => {
                failed_appends += 1;
                if first_failure.is_none() {
                    first_failure = Some(i);
                }
                warn!("Value {} was not appended: {}", i, e);
            }
        }
    }

    let report = BuildReport {
        len: list.len(),
        capacity: list.capacity(),
        status: list.status(),
        code: list.error_code(),
        init_status,
        appended,
        failed_appends,
        first_failure,
    };

    list.deinit();

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&report)
            .with_context(|| "Failed to serialize build report")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Build report written to: {}", output_path);
    } else {
        println!("\n=== Build Results ===");
        println!("Length:            {}", report.len);
        println!("Capacity:          {}", report.capacity);
        if let Some(init) = report.init_status {
            if init.is_error() {
                println!("Init status:       {}", format!("{:?} ({})", init, init.code()).red());
            } else {
                println!("Init status:       {:?} ({})", init, init.code());
            }
        }
        println!("Appended:          {}", report.appended.to_string().green());
        if report.failed_appends > 0 {
            println!("Failed appends:    {}", report.failed_appends.to_string().red());
        } else {
            println!("Failed appends:    {}", report.failed_appends);
        }
        println!("Last status:       {:?} ({})", report.status, report.code);
    }

    Ok(report)
}
