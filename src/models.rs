use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};

pub const FOLDER_CREADA_GIF: &str = "CREADA_GIF";
pub const FOLDER_EN_EDITORIAL: &str = "EN_EDITORIAL";
pub const FOLDER_EN_CONTROL_CALIDAD: &str = "EN_CONTROL_CALIDAD";
pub const FOLDER_EN_CORRECCIONES: &str = "EN_CORRECCIONES";
pub const FOLDER_FINALIZADA: &str = "FINALIZADA";

pub const FILE_ASIGNADO: &str = "ASIGNADO";
pub const FILE_EN_PRODUCCION: &str = "EN_PRODUCCION";
pub const FILE_TERMINADO_EDITORIAL: &str = "TERMINADO_EDITORIAL";
pub const FILE_EN_CORRECCION: &str = "EN_CORRECCION";
pub const FILE_APROBADO_FINAL: &str = "APROBADO_FINAL";

pub const TEAM_GIF: &str = "gif";
pub const TEAM_EDITORIAL: &str = "editorial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Jefe,
    Gif,
    Editorial,
}

impl Role {
    /// Only admins and team leads may create folders and files.
    pub fn can_write(self) -> bool {
        matches!(self, Role::Admin | Role::Jefe)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Jefe => "jefe",
            Role::Gif => "gif",
            Role::Editorial => "editorial",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

/// A unit of editorial work tracked through production states.
///
/// `state` and `owner_team` are free strings; the `FOLDER_*` and `TEAM_*`
/// constants list the values the workflow uses. A payload without
/// `state_started_at` enters its state at the time it is received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub id: i64,
    pub name: String,
    pub state: String,
    pub owner_team: String,
    #[serde(default = "received_now", deserialize_with = "deserialize_timestamp")]
    pub state_started_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub folder_id: i64,
    pub name: String,
    pub state: String,
    pub assigned_to: String,
    #[serde(default = "received_now", deserialize_with = "deserialize_timestamp")]
    pub state_started_at: NaiveDateTime,
}

fn received_now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses an ISO-8601 timestamp into naive UTC. Offset-bearing values
/// (`Z`, `+02:00`) are shifted to UTC; naive values are taken as UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(parsed.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{raw}'")))
}
