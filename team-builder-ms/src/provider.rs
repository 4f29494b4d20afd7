use reqwest::blocking::Client;

use serde_json;

use team_builder_common::api::roster::{PlayerRecord, RosterResponse};
use team_builder_common::errors::*;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Where the rating records of a roster come from.
pub trait RosterProvider
{
    fn fetch_roster(&self, players: &[String], game_id: &str) -> Result<Vec<PlayerRecord>>;
}

/// Talks to the roster data service over HTTP.
pub struct HttpRosterProvider
{
    base_url: String,
    client: Client,
}

impl HttpRosterProvider
{
    pub fn new<S>(base_url: S) -> HttpRosterProvider
        where S: Into<String>
    {
        HttpRosterProvider {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    pub fn team_building_url(&self) -> String
    {
        format!("{}/teamBuilding", self.base_url.trim_end_matches('/'))
    }
}

impl RosterProvider for HttpRosterProvider
{
    fn fetch_roster(&self, players: &[String], game_id: &str) -> Result<Vec<PlayerRecord>>
    {
        debug!("Fetching Player Data from Server for game: {}", game_id);

        let response = self.client.get(&self.team_building_url())
            .query(&[("players", players.join(",")), ("gameId", game_id.to_string())])
            .send()?;

        if !response.status().is_success()
        {
            bail!(ErrorKind::ProviderStatus(response.status().as_u16()));
        }

        let roster: RosterResponse = response.json()?;

        trace!("Server returned {} of {} requested players", roster.available_team_members.len(), players.len());
        Ok(roster.available_team_members)
    }
}

/// Serves a fixed roster, for running without the data service.
pub struct StaticRosterProvider
{
    records: Vec<PlayerRecord>,
}

impl StaticRosterProvider
{
    pub fn new(records: Vec<PlayerRecord>) -> StaticRosterProvider
    {
        StaticRosterProvider {
            records,
        }
    }

    /// Reads a file shaped like the data service's team building response
    pub fn from_file<P>(path: P) -> Result<StaticRosterProvider>
        where P: AsRef<Path>
    {
        let file = File::open(path.as_ref())
            .chain_err(|| format!("Failed to open roster file: {}", path.as_ref().display()))?;
        let roster: RosterResponse = serde_json::from_reader(BufReader::new(file))?;

        Ok(StaticRosterProvider::new(roster.available_team_members))
    }
}

impl RosterProvider for StaticRosterProvider
{
    /// Only the requested players are returned, matched case insensitively
    fn fetch_roster(&self, players: &[String], _game_id: &str) -> Result<Vec<PlayerRecord>>
    {
        Ok(self.records.iter()
            .filter(|record| players.iter().any(|player| player.eq_ignore_ascii_case(&record.name)))
            .cloned()
            .collect())
    }
}
