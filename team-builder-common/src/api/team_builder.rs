use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct MemberSummary
{
    pub name: String,
    pub tag: String,
    pub role: String,
    pub rating: f64,
    pub is_primary_role: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct TeamSummary
{
    pub label: String,
    pub total_rating: f64,
    pub members: Vec<MemberSummary>,
}

/// A finished match flattened for whoever renders it (chat embeds etc).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, new)]
pub struct MatchSummary
{
    pub game_id: String,
    pub teams: Vec<TeamSummary>,
    pub spread: f64,
    pub balanced: bool,
    pub generated_at: DateTime<Utc>,
}

impl MatchSummary
{
    pub fn member_count(&self) -> usize
    {
        self.teams.iter()
            .map(|team| team.members.len())
            .sum()
    }
}
