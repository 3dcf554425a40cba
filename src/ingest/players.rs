use anyhow::{Context, Result};
use csv::StringRecord;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{field, reader_builder};
use crate::domain::PlayerProfile;
use crate::errors::{row_context, with_file_context, with_parse_context};

const PLAYER_ID_COL: usize = 0;
const LAST_NAME_COL: usize = 2;
const FIRST_NAME_COL: usize = 3;
const FLAG_CODE_COL: usize = 5;

pub fn read_players(path: &Path) -> Result<Vec<PlayerProfile>> {
    let file = with_file_context(File::open(path), "open", path)?;
    let players = read_players_from_reader(file, &path.display().to_string())?;

    info!("  → Loaded {} players from {}", players.len(), path.display());
    Ok(players)
}

/// The player list has no header row
pub fn read_players_from_reader<R: Read>(rdr: R, source: &str) -> Result<Vec<PlayerProfile>> {
    let mut reader = reader_builder(false).from_reader(rdr);
    let mut players = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        let record = with_parse_context(result, source)?;
        let profile = parse_player(&record).with_context(|| row_context(source, idx + 1))?;
        players.push(profile);
    }

    Ok(players)
}

fn parse_player(record: &StringRecord) -> Result<PlayerProfile> {
    Ok(PlayerProfile {
        player_id: field(record, PLAYER_ID_COL, "player_id")?.to_string(),
        last_name: field(record, LAST_NAME_COL, "last_name")?.to_string(),
        first_name: field(record, FIRST_NAME_COL, "first_name")?.to_string(),
        flag_code: field(record, FLAG_CODE_COL, "flag_code")?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_players() {
        let csv = "\
f324,/en/players/roger-federer/f324/overview,Federer,Roger,roger-federer,SUI
n409,/en/players/rafael-nadal/n409/overview,Nadal,Rafael,rafael-nadal,ESP
";
        let players = read_players_from_reader(csv.as_bytes(), "players").unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(
            players[1],
            PlayerProfile {
                player_id: "n409".to_string(),
                last_name: "Nadal".to_string(),
                first_name: "Rafael".to_string(),
                flag_code: "ESP".to_string(),
            }
        );
    }

    #[test]
    fn test_short_player_row_is_fatal() {
        let csv = "f324,url,Federer,Roger,roger-federer,SUI\nbroken,row\n";
        let err = read_players_from_reader(csv.as_bytes(), "players").unwrap_err();

        assert!(format!("{:#}", err).contains("Malformed row 2 in players"));
    }
}
