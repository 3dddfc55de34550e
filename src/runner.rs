// src/runner.rs
use std::error::Error;

use crate::{
    config::AppOptions,
    core::{HttpClient, Throttle},
    file::{self, Written},
    progress::Progress,
    score::{self, PlayerRecord, RankedEntry},
    specs::{
        hypixel::HypixelStats, leaderboard::HypixelLeaderboard, mojang::MojangResolver,
        LeaderboardPage, NameResolver, PlayerId, StatsSource,
    },
};

/// The three remote collaborators of a run.
pub struct Services<'a> {
    pub page: &'a dyn LeaderboardPage,
    pub resolver: &'a dyn NameResolver,
    pub stats: &'a dyn StatsSource,
}

/// Summary of what was produced.
pub struct RunSummary {
    pub board: Vec<RankedEntry>,
    pub written: Written,
}

/// Top-level runner against the live sites.
pub fn run(opts: &AppOptions, progress: &mut dyn Progress) -> Result<RunSummary, Box<dyn Error>> {
    let api_key = opts.scrape.api_key.as_deref().ok_or("missing Hypixel API key")?;

    let client = HttpClient::new()?;
    let page = HypixelLeaderboard::new(client.clone());
    let resolver = MojangResolver::new(client.clone());
    let stats = HypixelStats::new(client, api_key);

    run_with(opts, &Services { page: &page, resolver: &resolver, stats: &stats }, progress)
}

/// Page → names → ids → documents → board → file.
///
/// Only the page step is fatal. A player whose lookup or fetch fails is kept with
/// an absent document.
pub fn run_with(
    opts: &AppOptions,
    services: &Services<'_>,
    progress: &mut dyn Progress,
) -> Result<RunSummary, Box<dyn Error>> {
    progress.log("Getting players.");
    let names = services.page.player_names(&opts.scrape.url, opts.scrape.player_count)?;
    if names.is_empty() {
        return Err(format!("no players found on {}", opts.scrape.url).into());
    }
    logf!("{} players on the leaderboard", names.len());

    progress.log("Getting UUIDs.");
    let ids = resolve_all(names, services.resolver, opts, progress);

    progress.log("Getting stats.");
    let records = fetch_all(ids, services.stats, opts, progress);

    progress.log("Creating leaderboard.");
    let board = score::run(records, &opts.score);

    progress.log("Writing to file.");
    let written = file::export_board(opts.export.file_name.as_deref(), &board, opts.score.decimals);

    Ok(RunSummary { board, written })
}

fn resolve_all(
    names: Vec<String>,
    resolver: &dyn NameResolver,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Vec<(String, Option<PlayerId>)> {
    let mut throttle = Throttle::new(opts.scrape.lookup_delay());
    progress.begin(names.len());

    let out = names
        .into_iter()
        .map(|name| match throttle.run(|| resolver.resolve(&name)) {
            Ok(id) => {
                progress.item_done(&name);
                (name, Some(id))
            }
            Err(e) => {
                logw!("failed to obtain UUID for {name}: {e}");
                progress.item_failed(&name, &e.to_string());
                (name, None)
            }
        })
        .collect();

    progress.finish();
    out
}

fn fetch_all(
    ids: Vec<(String, Option<PlayerId>)>,
    stats: &dyn StatsSource,
    opts: &AppOptions,
    progress: &mut dyn Progress,
) -> Vec<PlayerRecord> {
    let mut throttle = Throttle::new(opts.scrape.stats_delay());
    progress.begin(ids.len());

    let out = ids
        .into_iter()
        .map(|(name, id)| {
            let Some(id) = id else {
                progress.item_failed(&name, "no UUID");
                return PlayerRecord { name, document: None };
            };
            match throttle.run(|| stats.fetch(&id)) {
                Ok(doc) => {
                    progress.item_done(&name);
                    PlayerRecord { name, document: Some(doc) }
                }
                Err(e) => {
                    logw!("failed to fetch stats for {name}: {e}");
                    progress.item_failed(&name, &e.to_string());
                    PlayerRecord { name, document: None }
                }
            }
        })
        .collect();

    progress.finish();
    out
}
