//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use sohosai_common::{BureauCode, Member, Roster};
use sohosai_server::directory::RosterDirectory;
use uuid::Uuid;

/// Midnight UTC on the given day of November 2026.
pub fn nov(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 11, day, 0, 0, 0).unwrap()
}

pub fn bureau(code: &str) -> BureauCode {
    BureauCode::new(code).unwrap()
}

/// In-memory committee with two bureaus.
pub struct TestCommittee {
    pub directory: RosterDirectory,
    pub finance: Vec<Uuid>,
    pub publicity: Vec<Uuid>,
    pub unaffiliated: Uuid,
}

impl TestCommittee {
    pub fn new() -> Self {
        let finance = vec![Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];
        let publicity = vec![Uuid::new_v4()];
        let unaffiliated = Uuid::new_v4();

        let mut members = Vec::new();
        for (i, id) in finance.iter().enumerate() {
            members.push(member(*id, &format!("finance-{i}"), Some("FINANCE")));
        }
        for (i, id) in publicity.iter().enumerate() {
            members.push(member(*id, &format!("publicity-{i}"), Some("PUBLICITY")));
        }
        members.push(member(unaffiliated, "unaffiliated", None));

        let directory = RosterDirectory::from_roster(Roster {
            bureaus: vec![bureau("GENERAL_AFFAIRS")],
            members,
        })
        .expect("valid roster");

        Self {
            directory,
            finance,
            publicity,
            unaffiliated,
        }
    }

    pub fn everyone(&self) -> Vec<Uuid> {
        let mut all = self.finance.clone();
        all.extend(&self.publicity);
        all.push(self.unaffiliated);
        all
    }
}

fn member(id: Uuid, name: &str, bureau_code: Option<&str>) -> Member {
    Member {
        id,
        name: name.to_string(),
        bureau: bureau_code.map(bureau),
    }
}

/// Path of a fixture file relative to the crate root.
pub fn fixture(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}
