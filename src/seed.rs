use chrono::{NaiveDateTime, Timelike};

use crate::models::{
    File, Folder, Role, User, FILE_ASIGNADO, FILE_EN_CORRECCION, FILE_EN_PRODUCCION,
    FOLDER_EN_CONTROL_CALIDAD, FOLDER_EN_EDITORIAL, TEAM_EDITORIAL, TEAM_GIF,
};

/// Users known to the system. The first entry is the account every request
/// resolves to while the fixed-user resolver is active.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            id: 1,
            name: "Admin".to_string(),
            role: Role::Admin,
        },
        User {
            id: 2,
            name: "Nath".to_string(),
            role: Role::Jefe,
        },
        User {
            id: 3,
            name: "Jacobo".to_string(),
            role: Role::Jefe,
        },
    ]
}

pub fn demo_folders(now: NaiveDateTime) -> Vec<Folder> {
    vec![
        Folder {
            id: 1,
            name: "Unidad Álgebra 6°".to_string(),
            state: FOLDER_EN_EDITORIAL.to_string(),
            owner_team: TEAM_GIF.to_string(),
            state_started_at: at(now, 9, None),
        },
        Folder {
            id: 2,
            name: "Guía Trigonometría 10°".to_string(),
            state: FOLDER_EN_CONTROL_CALIDAD.to_string(),
            owner_team: TEAM_EDITORIAL.to_string(),
            state_started_at: at(now, 11, None),
        },
    ]
}

pub fn demo_files(now: NaiveDateTime) -> Vec<File> {
    vec![
        File {
            id: 1,
            folder_id: 1,
            name: "Documento 1 - Introducción".to_string(),
            state: FILE_EN_PRODUCCION.to_string(),
            assigned_to: "Diseñador A".to_string(),
            state_started_at: at(now, 10, None),
        },
        File {
            id: 2,
            folder_id: 1,
            name: "Documento 2 - Ejercicios".to_string(),
            state: FILE_ASIGNADO.to_string(),
            assigned_to: "Diseñador B".to_string(),
            state_started_at: at(now, 9, Some(30)),
        },
        File {
            id: 3,
            folder_id: 2,
            name: "Documento Final".to_string(),
            state: FILE_EN_CORRECCION.to_string(),
            assigned_to: "Editor C".to_string(),
            state_started_at: at(now, 12, None),
        },
    ]
}

/// `now` with the hour (and optionally the minute) replaced.
fn at(now: NaiveDateTime, hour: u32, minute: Option<u32>) -> NaiveDateTime {
    let with_hour = now.with_hour(hour).unwrap_or(now);
    match minute {
        Some(minute) => with_hour.with_minute(minute).unwrap_or(with_hour),
        None => with_hour,
    }
}
