use serde::{Serialize, Deserialize};

/// Row from `player_details`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerRow {
    pub player_id: i64,
    pub player_name: Option<String>,
}

impl PlayerRow {
    /// Convert database row to API response format
    pub fn to_player(&self) -> Player {
        Player {
            player_id: self.player_id,
            player_name: self.player_name.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub player_id: i64,
    pub player_name: Option<String>,
}

/// Body of `PUT /players/{id}/`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayerRequest {
    pub player_name: String,
}

/// Row from `match_details`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MatchRow {
    pub match_id: i64,
    #[sqlx(rename = "match")]
    pub match_name: String,
    pub year: i64,
}

impl MatchRow {
    pub fn to_match(&self) -> Match {
        Match {
            match_id: self.match_id,
            match_name: self.match_name.clone(),
            year: self.year,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub match_id: i64,
    #[serde(rename = "match")]
    pub match_name: String,
    pub year: i64,
}

/// Row from `player_match_score`, the join between players and matches
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerMatchScoreRow {
    pub player_match_id: i64,
    pub player_id: i64,
    pub match_id: i64,
    pub score: i64,
    pub fours: i64,
    pub sixes: i64,
}

impl PlayerMatchScoreRow {
    pub fn to_player_match_score(&self) -> PlayerMatchScore {
        PlayerMatchScore {
            player_match_id: self.player_match_id,
            player_id: self.player_id,
            match_id: self.match_id,
            score: self.score,
            fours: self.fours,
            sixes: self.sixes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchScore {
    pub player_match_id: i64,
    pub player_id: i64,
    pub match_id: i64,
    pub score: i64,
    pub fours: i64,
    pub sixes: i64,
}

/// Aggregate row for a player's career totals.
///
/// SUM without GROUP BY always yields one row, so a player with no score
/// rows comes back with every column NULL.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlayerStatsRow {
    pub player_id: Option<i64>,
    pub player_name: Option<String>,
    pub total_score: Option<i64>,
    pub total_fours: Option<i64>,
    pub total_sixes: Option<i64>,
}

impl PlayerStatsRow {
    /// `None` when the aggregate matched no score rows.
    pub fn to_player_stats(&self) -> Option<PlayerStats> {
        let player_id = self.player_id?;

        Some(PlayerStats {
            player_id,
            player_name: self.player_name.clone(),
            total_score: self.total_score.unwrap_or(0),
            total_fours: self.total_fours.unwrap_or(0),
            total_sixes: self.total_sixes.unwrap_or(0),
        })
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_id: i64,
    pub player_name: Option<String>,
    pub total_score: i64,
    pub total_fours: i64,
    pub total_sixes: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn player_serializes_camel_case() {
        let row = PlayerRow {
            player_id: 1,
            player_name: Some("Ram".to_string()),
        };

        let value = serde_json::to_value(row.to_player()).unwrap();
        assert_eq!(value, json!({ "playerId": 1, "playerName": "Ram" }));
    }

    #[test]
    fn missing_player_name_stays_null() {
        let row = PlayerRow {
            player_id: 2,
            player_name: None,
        };

        let value = serde_json::to_value(row.to_player()).unwrap();
        assert_eq!(value, json!({ "playerId": 2, "playerName": null }));
    }

    #[test]
    fn match_uses_plain_match_key() {
        let row = MatchRow {
            match_id: 18,
            match_name: "Kolkata".to_string(),
            year: 2014,
        };

        let value = serde_json::to_value(row.to_match()).unwrap();
        assert_eq!(
            value,
            json!({ "matchId": 18, "match": "Kolkata", "year": 2014 })
        );
    }

    #[test]
    fn player_match_score_maps_every_column() {
        let row = PlayerMatchScoreRow {
            player_match_id: 5,
            player_id: 7,
            match_id: 2,
            score: 50,
            fours: 4,
            sixes: 1,
        };

        let value = serde_json::to_value(row.to_player_match_score()).unwrap();
        assert_eq!(
            value,
            json!({
                "playerMatchId": 5,
                "playerId": 7,
                "matchId": 2,
                "score": 50,
                "fours": 4,
                "sixes": 1
            })
        );
    }

    #[test]
    fn empty_aggregate_has_no_stats() {
        let row = PlayerStatsRow {
            player_id: None,
            player_name: None,
            total_score: None,
            total_fours: None,
            total_sixes: None,
        };

        assert_eq!(row.to_player_stats(), None);
    }

    #[test]
    fn null_totals_become_zero() {
        let row = PlayerStatsRow {
            player_id: Some(3),
            player_name: Some("Joseph".to_string()),
            total_score: Some(120),
            total_fours: None,
            total_sixes: None,
        };

        let stats = row.to_player_stats().unwrap();
        assert_eq!(stats.total_score, 120);
        assert_eq!(stats.total_fours, 0);
        assert_eq!(stats.total_sixes, 0);
    }

    #[test]
    fn update_request_reads_camel_case() {
        let req: UpdatePlayerRequest =
            serde_json::from_value(json!({ "playerName": "Raju" })).unwrap();
        assert_eq!(req.player_name, "Raju");
    }
}
