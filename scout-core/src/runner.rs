//! Sequential campaign execution
//!
//! Queries run strictly one at a time. A failed query is reported on stdout
//! and the run continues with the next one; only the final tallies reveal
//! that something went wrong.

use crate::campaigns::Campaign;
use crate::perplexity::{ChatRequest, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, SonarClient};
use anyhow::Result;
use tracing::debug;

/// Width of the banner line printed before each query
const BANNER_WIDTH: usize = 70;

/// Outcome tallies for one campaign run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub completed: usize,
    pub failed: usize,
}

/// Send a single research query and return the response text
pub async fn run_query(client: &SonarClient, system_prompt: &str, query: &str) -> Result<String> {
    let request = ChatRequest::new(DEFAULT_MODEL, query)
        .system(system_prompt)
        .max_tokens(DEFAULT_MAX_TOKENS);

    let response = client.chat_completion(&request).await?;
    Ok(response.content_or_err()?.to_string())
}

/// Run every query of a campaign in order, printing results to stdout
///
/// Each query gets a banner, then either the response text or an error line.
/// Errors never abort the run.
pub async fn run_campaign(client: &SonarClient, campaign: &Campaign) -> RunReport {
    let mut report = RunReport::default();

    for query in campaign.queries {
        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("Search: {query}");
        println!("{}", "=".repeat(BANNER_WIDTH));

        match run_query(client, campaign.system_prompt, query).await {
            Ok(content) => {
                println!("{content}");
                report.completed += 1;
            }
            Err(e) => {
                println!("Error: {e:#}");
                report.failed += 1;
            }
        }

        debug!(
            campaign = campaign.name,
            completed = report.completed,
            failed = report.failed,
            "query finished"
        );
    }

    report
}
