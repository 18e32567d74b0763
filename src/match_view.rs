//! Typed match records and read-only lookups over them

use serde::{Deserialize, Serialize};

/// Encrypted account identifier, stable across summoner renames
pub type AccountId = String;
/// Identifier of one completed game
pub type MatchId = u64;
/// Per-match player slot, not stable across matches
pub type ParticipantId = u32;
/// Side of the map within one match
pub type TeamId = u32;

/// Value of `Team::win` for the winning side
const WIN_FLAG: &str = "Win";

/// Match detail as returned by `match/v4/matches/{id}` (after filtering)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub game_id: MatchId,
    /// Epoch milliseconds
    pub game_creation: i64,
    pub teams: Vec<Team>,
    pub participants: Vec<Participant>,
    pub participant_identities: Vec<ParticipantIdentity>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub team_id: TeamId,
    /// "Win" or "Fail"; absent for remakes
    #[serde(default)]
    pub win: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub participant_id: ParticipantId,
    pub team_id: TeamId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentity {
    pub participant_id: ParticipantId,
    pub player: Player,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub summoner_name: String,
    pub account_id: AccountId,
}

impl MatchRecord {
    pub fn view(&self) -> MatchView<'_> {
        MatchView::new(self)
    }
}

/// Read-only projection over one [`MatchRecord`]
///
/// Every lookup is a linear scan and returns `None` when the participant,
/// name or team is not part of the match.
#[derive(Debug, Clone, Copy)]
pub struct MatchView<'a> {
    record: &'a MatchRecord,
}

impl<'a> MatchView<'a> {
    pub fn new(record: &'a MatchRecord) -> Self {
        Self { record }
    }

    pub fn match_id(&self) -> MatchId {
        self.record.game_id
    }

    /// Game creation time in epoch milliseconds
    pub fn timestamp(&self) -> i64 {
        self.record.game_creation
    }

    pub fn winning_team_id(&self) -> Option<TeamId> {
        self.record
            .teams
            .iter()
            .find(|team| team.win.as_deref() == Some(WIN_FLAG))
            .map(|team| team.team_id)
    }

    fn identity_by_name(&self, name: &str) -> Option<&'a ParticipantIdentity> {
        self.record
            .participant_identities
            .iter()
            .find(|identity| identity.player.summoner_name == name)
    }

    fn identity_by_id(&self, participant_id: ParticipantId) -> Option<&'a ParticipantIdentity> {
        self.record
            .participant_identities
            .iter()
            .find(|identity| identity.participant_id == participant_id)
    }

    pub fn participant_id(&self, name: &str) -> Option<ParticipantId> {
        self.identity_by_name(name).map(|identity| identity.participant_id)
    }

    pub fn participant_name(&self, participant_id: ParticipantId) -> Option<&'a str> {
        self.identity_by_id(participant_id)
            .map(|identity| identity.player.summoner_name.as_str())
    }

    pub fn account_id(&self, participant_id: ParticipantId) -> Option<&'a str> {
        self.identity_by_id(participant_id)
            .map(|identity| identity.player.account_id.as_str())
    }

    /// Current-match summoner name for an account
    pub fn account_name(&self, account_id: &str) -> Option<&'a str> {
        self.record
            .participant_identities
            .iter()
            .find(|identity| identity.player.account_id == account_id)
            .map(|identity| identity.player.summoner_name.as_str())
    }

    pub fn team_id(&self, name: &str) -> Option<TeamId> {
        let participant_id = self.participant_id(name)?;
        self.record
            .participants
            .iter()
            .find(|participant| participant.participant_id == participant_id)
            .map(|participant| participant.team_id)
    }

    pub fn is_in_team(&self, name: &str, team_id: TeamId) -> Option<bool> {
        self.team_id(name).map(|team| team == team_id)
    }

    /// `None` when `name` did not play or no team is flagged as the winner
    pub fn is_winner(&self, name: &str) -> Option<bool> {
        let winning_team = self.winning_team_id()?;
        self.is_in_team(name, winning_team)
    }

    /// Participant ids on `team_id`, in record order
    pub fn team_member_ids(&self, team_id: TeamId) -> Vec<ParticipantId> {
        self.record
            .participants
            .iter()
            .filter(|participant| participant.team_id == team_id)
            .map(|participant| participant.participant_id)
            .collect()
    }

    /// Names of everyone on `name`'s team, `name` included
    pub fn team_members(&self, name: &str) -> Option<Vec<&'a str>> {
        let team_id = self.team_id(name)?;
        Some(
            self.team_member_ids(team_id)
                .into_iter()
                .filter_map(|participant_id| self.participant_name(participant_id))
                .collect(),
        )
    }

    /// Account ids of everyone on `name`'s team, `name` included
    pub fn team_members_account_ids(&self, name: &str) -> Option<Vec<&'a str>> {
        let team_id = self.team_id(name)?;
        Some(
            self.team_member_ids(team_id)
                .into_iter()
                .filter_map(|participant_id| self.account_id(participant_id))
                .collect(),
        )
    }
}

#[cfg(test)]
#[path = "match_view_tests.rs"]
mod tests;
