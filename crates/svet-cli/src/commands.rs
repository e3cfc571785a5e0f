use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use svet_cli::boundary::{Reply, handle_request};
use svet_cli::render::{results_table, summary_line};
use svet_match::{EquipmentMatcher, MatchOptions, SimilarityMetric};
use svet_model::MatchSummary;
use tracing::debug;

use crate::cli::{MatchArgs, OutputArg, ScoreArgs};

/// Exit code for a request rejected as a client error.
pub const EXIT_REJECTED: i32 = 2;

pub fn run_match(args: &MatchArgs) -> Result<i32> {
    let options = MatchOptions::default()
        .with_threshold(args.threshold)
        .with_metric(args.scoring.metric.into())
        .with_mode(args.mode.into());
    let matcher = EquipmentMatcher::new(options).context("configure matcher")?;
    debug!(?options, "matcher configured");

    let body = read_body(args.request.as_deref())?;
    let reply = handle_request(&body, &matcher);

    match (&reply, args.output) {
        (Reply::Matched(results), OutputArg::Table) => {
            println!("{}", results_table(results));
            println!("{}", summary_line(&MatchSummary::from_results(results)));
        }
        _ => {
            let json = reply.to_json(args.pretty).context("serialize response")?;
            println!("{json}");
        }
    }

    Ok(if reply.is_success() { 0 } else { EXIT_REJECTED })
}

pub fn run_score(args: &ScoreArgs) -> Result<()> {
    let metric: SimilarityMetric = args.scoring.metric.into();
    let left = args.left.to_lowercase();
    let right = args.right.to_lowercase();
    let exact = left == right;
    let similarity = if exact {
        1.0
    } else {
        metric.score(&left, &right)
    };
    println!("metric: {}", metric.as_str());
    println!("similarity: {similarity:.4}");
    println!("exact: {exact}");
    Ok(())
}

fn read_body(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("read request body from {}", path.display())),
        _ => {
            let mut body = String::new();
            io::stdin()
                .read_to_string(&mut body)
                .context("read request body from stdin")?;
            Ok(body)
        }
    }
}
