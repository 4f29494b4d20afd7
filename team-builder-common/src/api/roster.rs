//! What the roster data service hands back for a team building request.

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct RoleRatingRecord
{
    pub role: String,
    pub value: f64,
    pub is_primary: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRecord
{
    pub name: String,
    #[serde(alias = "discordNameTag")]
    pub discord_handle: String,
    pub role_ratings: Vec<RoleRatingRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct RosterResponse
{
    #[serde(default)]
    pub available_team_members: Vec<PlayerRecord>,
}

/// How many teams of how many players a game is played with.
///
/// `balance_threshold` overrides the service wide threshold when the game has one configured.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig
{
    pub game_id: String,
    pub max_team_count: usize,
    pub max_team_size: usize,
    #[serde(default)]
    pub balance_threshold: Option<f64>,
}

impl GameConfig
{
    /// Every team slot of the game, `None` when the product doesn't fit a `usize`
    pub fn total_capacity(&self) -> Option<usize>
    {
        self.max_team_count.checked_mul(self.max_team_size)
    }
}
