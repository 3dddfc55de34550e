// src/specs/leaderboard.rs
//! Scraping *spec* for hypixel.net leaderboard pages.
//!
//! Shape of the page (only what we rely on):
//! ```html
//! <table class="leaderboard ...">
//!   <tr class="player"> <td>1</td> <td><a href="/player/...">[MVP+] Name</a></td> ... </tr>
//!   ...
//! </table>
//! ```
//! - The first element carrying class `leaderboard` is the board.
//! - Every element inside it carrying class `player` is one row, in rank order.
//! - The row's first `<a>` holds the name. Rows without a usable link are skipped and
//!   do not count toward the requested number of players.

use std::collections::HashSet;

use crate::core::html::{inner_after_open_tag, next_element_named, next_element_with_class, strip_tags};
use crate::core::sanitize::{compact_name, strip_brackets};
use crate::core::{FetchError, HttpClient};
use super::LeaderboardPage;

pub struct HypixelLeaderboard {
    client: HttpClient,
}

impl HypixelLeaderboard {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

impl LeaderboardPage for HypixelLeaderboard {
    fn player_names(&self, url: &str, count: usize) -> Result<Vec<String>, FetchError> {
        let doc = self.client.get_text(url)?;
        extract_names(&doc, count)
    }
}

/// Pull up to `count` unique names out of a leaderboard page, in page order.
pub fn extract_names(doc: &str, count: usize) -> Result<Vec<String>, FetchError> {
    let (ts, te) = next_element_with_class(doc, "leaderboard", 0)
        .ok_or_else(|| FetchError::Scrape(s!("leaderboard table not found")))?;
    let board = &doc[ts..te];

    let mut names = Vec::new();
    let mut seen = HashSet::new();
    let mut pos = 0usize;

    while names.len() < count {
        let Some((rs, re)) = next_element_with_class(board, "player", pos) else { break };
        pos = re;

        let Some(name) = first_link_text(&board[rs..re]) else {
            logd!("leaderboard row without a player link, skipping");
            continue;
        };
        if !seen.insert(name.clone()) {
            logw!("{name} appears twice on the leaderboard, keeping the first");
            continue;
        }
        names.push(name);
    }

    logd!("scraped {} names from leaderboard", names.len());
    Ok(names)
}

fn first_link_text(row: &str) -> Option<String> {
    let (a_s, a_e) = next_element_named(row, "a", 0)?;
    let text = strip_tags(inner_after_open_tag(&row[a_s..a_e]));
    let name = compact_name(&strip_brackets(&text));
    (!name.is_empty()).then_some(name)
}
