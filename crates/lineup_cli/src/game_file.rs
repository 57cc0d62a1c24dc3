//! Game file: roster plus the 4-quarter lineup, as exported by the web app.
//!
//! ```json
//! {
//!   "format": "9v9",
//!   "roster": [{ "id": 1, "name": "Ava", "preferred_positions": ["GK"] }],
//!   "quarters": [{ "assignments": [{ "position": 1, "player_id": 1 }] }]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use lineup_core::contracts::check_proposal;
use lineup_core::{FairPlayRules, GameFormat, LineupProposal, QuarterPlan, Roster};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameFile {
    pub format: GameFormat,
    pub roster: Roster,
    pub quarters: Vec<QuarterPlan>,
}

impl GameFile {
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read game file: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse game file: {}", path.display()))
    }

    /// Loads and runs the boundary contracts; a malformed file never
    /// reaches the validator or the diff engine.
    pub fn load_checked(path: &Path, rules: &FairPlayRules) -> Result<(Roster, LineupProposal)> {
        let game = Self::load(path)?;
        let proposal = LineupProposal::new(game.format, game.quarters);
        check_proposal(&proposal, &game.roster, rules)
            .with_context(|| format!("Invalid lineup in {}", path.display()))?;
        Ok((game.roster, proposal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_game(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    const GAME: &str = r#"{
        "format": "7v7",
        "roster": [
            {"id": 1, "name": "Ava"}, {"id": 2, "name": "Ben"},
            {"id": 3, "name": "Cleo"}, {"id": 4, "name": "Dev"}
        ],
        "quarters": [
            {"assignments": [{"position": 1, "player_id": 1}, {"position": 2, "player_id": 2}]},
            {"assignments": [{"position": 1, "player_id": 2}, {"position": 2, "player_id": 3}]},
            {"assignments": [{"position": 1, "player_id": 3}, {"position": 2, "player_id": 4}]},
            {"assignments": [{"position": 1, "player_id": 4}, {"position": 2, "player_id": 1}]}
        ]
    }"#;

    #[test]
    fn test_load_checked_accepts_well_formed_game() {
        let file = write_game(GAME);
        let (roster, proposal) =
            GameFile::load_checked(file.path(), &FairPlayRules::default()).unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(proposal.quarters.len(), 4);
        assert_eq!(proposal.format, GameFormat::SevenVSeven);
    }

    #[test]
    fn test_load_checked_rejects_contract_violation() {
        let broken = GAME.replace(
            r#""player_id": 4}, {"position": 2"#,
            r#""player_id": 9}, {"position": 2"#,
        );
        let file = write_game(&broken);
        let err = GameFile::load_checked(file.path(), &FairPlayRules::default()).unwrap_err();
        assert!(format!("{err:#}").contains("not on the roster"), "{err:#}");
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        let err = GameFile::load(&path).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
