use std::fs::File;
use std::path::Path;

use enum_iterator::all;
use enum_iterator::Sequence;
use flate2::read::GzDecoder;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use strum_macros::Display;

use crate::error::DatagenError;
use crate::error::Result;
use crate::writer;
use crate::writer::RollingWriter;
use crate::CLICKSTREAM_BASE;
use crate::EVENT_WINDOW_MS;
use crate::START_TMS;
use crate::USER_DIMENSIONS_FILE;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Event {
    #[strum(serialize = "purchase")]
    Purchase,
    #[strum(serialize = "click")]
    Click,
    #[strum(serialize = "level_complete")]
    LevelComplete,
    #[strum(serialize = "level_fail")]
    LevelFail,
}

/// ISO 3166-1 alpha-3.
pub const COUNTRY_CODES: &[&str] = &[
    "AFG", "ALB", "DZA", "AND", "AGO", "ARG", "ARM", "AUS", "AUT", "AZE", "BHS", "BHR", "BGD",
    "BRB", "BLR", "BEL", "BLZ", "BEN", "BTN", "BOL", "BIH", "BWA", "BRA", "BRN", "BGR", "BFA",
    "BDI", "KHM", "CMR", "CAN", "CPV", "CAF", "TCD", "CHL", "CHN", "COL", "COM", "COG", "COD",
    "CRI", "CIV", "HRV", "CUB", "CYP", "CZE", "DNK", "DJI", "DMA", "DOM", "ECU", "EGY", "SLV",
    "GNQ", "ERI", "EST", "SWZ", "ETH", "FJI", "FIN", "FRA", "GAB", "GMB", "GEO", "DEU", "GHA",
    "GRC", "GRD", "GTM", "GIN", "GNB", "GUY", "HTI", "HND", "HUN", "ISL", "IND", "IDN", "IRN",
    "IRQ", "IRL", "ISR", "ITA", "JAM", "JPN", "JOR", "KAZ", "KEN", "KIR", "PRK", "KOR", "KWT",
    "KGZ", "LAO", "LVA", "LBN", "LSO", "LBR", "LBY", "LIE", "LTU", "LUX", "MDG", "MWI", "MYS",
    "MDV", "MLI", "MLT", "MHL", "MRT", "MUS", "MEX", "FSM", "MDA", "MCO", "MNG", "MNE", "MAR",
    "MOZ", "MMR", "NAM", "NRU", "NPL", "NLD", "NZL", "NIC", "NER", "NGA", "MKD", "NOR", "OMN",
    "PAK", "PLW", "PAN", "PNG", "PRY", "PER", "PHL", "POL", "PRT", "QAT", "ROU", "RUS", "RWA",
    "KNA", "LCA", "VCT", "WSM", "SMR", "STP", "SAU", "SEN", "SRB", "SYC", "SLE", "SGP", "SVK",
    "SVN", "SLB", "SOM", "ZAF", "SSD", "ESP", "LKA", "SDN", "SUR", "SWE", "CHE", "SYR", "TJK",
    "TZA", "THA", "TLS", "TGO", "TON", "TTO", "TUN", "TUR", "TKM", "TUV", "UGA", "UKR", "ARE",
    "GBR", "USA", "URY", "UZB", "VUT", "VEN", "VNM", "YEM", "ZMB", "ZWE",
];

#[derive(Debug, Clone, Deserialize)]
struct UserRow {
    user_id: String,
    install_tms: i64,
}

/// Re-reads the dimension file in `dir` and emits `events_per_user` rows of
/// `[user_id, country_code, event_name, event_tms]` per user through a
/// rolling writer capped at `max_lines` rows per file. One country is drawn
/// per user and shared by all of that user's events.
pub fn generate(dir: &Path, max_lines: i64, events_per_user: usize) -> Result<()> {
    let file = File::open(dir.join(USER_DIMENSIONS_FILE))?;
    let rdr = writer::csv_reader(GzDecoder::new(file));

    let mut wtr = RollingWriter::try_new(dir, CLICKSTREAM_BASE, max_lines)?;
    let mut rng = rand::thread_rng();
    let events = all::<Event>().collect::<Vec<_>>();
    for res in rdr.into_deserialize() {
        let user: UserRow = res?;
        if user.install_tms < 0 {
            return Err(DatagenError::Internal(format!(
                "negative install_tms for user {}",
                user.user_id
            )));
        }
        let country = *COUNTRY_CODES.choose(&mut rng).unwrap();
        for _ in 0..events_per_user {
            let event = events.choose(&mut rng).unwrap();
            let event_tms = START_TMS + rng.gen_range(0..EVENT_WINDOW_MS);
            wtr.write_record([
                user.user_id.as_str(),
                country,
                event.to_string().as_str(),
                event_tms.to_string().as_str(),
            ])?;
        }
    }
    wtr.close()?;

    Ok(())
}
