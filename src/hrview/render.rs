//! Terminal rendering of a view snapshot, plain text or JSON.

use super::{
    errors::AppError,
    features::{
        me::CurrentUser,
        users::{User, UserRow},
    },
};
use serde::Serialize;
use std::{fmt::Write, str::FromStr};

const HEADERS: [&str; 3] = ["National code", "Name", "Contract date"];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
}

impl FromStr for Format {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("invalid format: {other}")),
        }
    }
}

#[derive(Serialize)]
struct Snapshot<'a> {
    current_user: &'a CurrentUser,
    users: &'a [User],
}

/// # Errors
/// Returns `AppError::Serialization` if the snapshot cannot be encoded as JSON.
pub fn render(
    format: Format,
    current_user: &CurrentUser,
    users: &[User],
) -> Result<String, AppError> {
    match format {
        Format::Text => Ok(render_text(current_user, users)),
        Format::Json => serde_json::to_string_pretty(&Snapshot {
            current_user,
            users,
        })
        .map_err(|err| AppError::Serialization(format!("Failed to encode view: {err}"))),
    }
}

#[must_use]
pub fn render_text(current_user: &CurrentUser, users: &[User]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", signed_in_line(current_user));
    let _ = writeln!(out);

    if users.is_empty() {
        let _ = writeln!(out, "No users found.");
        return out;
    }

    let rows: Vec<[String; 3]> = users
        .iter()
        .map(UserRow::from_record)
        .map(|row| [row.national_code, row.name, row.contract_date])
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(&mut out, &HEADERS.map(str::to_string), &widths);
    write_row(&mut out, &widths.map(|width| "-".repeat(width)), &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }

    out
}

fn signed_in_line(current_user: &CurrentUser) -> String {
    let name = current_user.full_name.trim();
    let username = current_user.username.trim();

    match (name.is_empty(), username.is_empty()) {
        (true, true) => "Signed in as -".to_string(),
        (false, true) => format!("Signed in as {name}"),
        (true, false) => format!("Signed in as {username}"),
        (false, false) => format!("Signed in as {name} ({username})"),
    }
}

fn write_row(out: &mut String, cells: &[String; 3], widths: &[usize; 3]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hrview::view_model::FALLBACK_FULL_NAME;
    use serde_json::{Value, json};

    fn jane() -> CurrentUser {
        CurrentUser {
            username: "jdoe".to_string(),
            full_name: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn format_parses_case_insensitively() {
        assert_eq!("TEXT".parse::<Format>(), Ok(Format::Text));
        assert_eq!(" json ".parse::<Format>(), Ok(Format::Json));
        assert!("yaml".parse::<Format>().is_err());
    }

    #[test]
    fn empty_list_renders_placeholder() {
        let text = render_text(&jane(), &[]);
        assert_eq!(text, "Signed in as Jane Doe (jdoe)\n\nNo users found.\n");
    }

    #[test]
    fn fallback_label_is_shown_without_username() {
        let user = CurrentUser {
            username: String::new(),
            full_name: FALLBACK_FULL_NAME.to_string(),
        };
        let text = render_text(&user, &[]);
        assert!(text.starts_with("Signed in as unknown user\n"));
    }

    #[test]
    fn rows_are_aligned_in_order() {
        let users = vec![
            json!({
                "NationalCode": "1",
                "FirstName": "Jane",
                "LastName": "Doe",
                "ContractDate": "1400/01/01"
            }),
            json!({
                "NationalCode": "22",
                "FirstName": "Al",
                "LastName": "Bo",
                "ContractDate": null
            }),
        ];
        let text = render_text(&jane(), &users);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[2], "National code  Name      Contract date");
        assert_eq!(lines[3], "-------------  --------  -------------");
        assert_eq!(lines[4], "1              Jane Doe  1400/01/01");
        assert_eq!(lines[5], "22             Al Bo     -");
    }

    #[test]
    fn json_render_passes_records_through() -> Result<(), AppError> {
        let users = vec![json!({ "id": 1 }), json!({ "id": 2 })];
        let rendered = render(Format::Json, &jane(), &users)?;
        let value: Value = serde_json::from_str(&rendered)
            .map_err(|err| AppError::Parse(err.to_string()))?;

        assert_eq!(
            value,
            json!({
                "current_user": { "username": "jdoe", "full_name": "Jane Doe" },
                "users": [{ "id": 1 }, { "id": 2 }]
            })
        );
        Ok(())
    }
}
