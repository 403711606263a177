//! Plain-text rendering of division records.

use shared::{
    domain::Division,
    format::{display_or_dash, format_currency, format_date, parent_organization_label},
};

const HEADERS: [&str; 8] = [
    "DIVISION ID",
    "NAME",
    "HEAD",
    "PARENT ORGANIZATION",
    "BUDGET",
    "STATUS",
    "CREATED",
    "RECORD ID",
];

fn row(division: &Division) -> [String; 8] {
    [
        division.division_id.clone(),
        division.name.clone(),
        display_or_dash(division.head.as_deref()).to_string(),
        parent_organization_label(division.parent_organization.as_deref()).to_string(),
        format_currency(division.budget),
        division.status.label().to_string(),
        format_date(division.created_at.as_deref()),
        division.id.to_string(),
    ]
}

/// Left-aligned columns separated by two spaces, headed by `Divisions (N)`.
pub fn divisions_table(divisions: &[&Division], empty_message: &str) -> String {
    let mut out = format!("Divisions ({})\n", divisions.len());
    if divisions.is_empty() {
        out.push_str(empty_message);
        out.push('\n');
        return out;
    }

    let rows: Vec<[String; 8]> = divisions.iter().map(|d| row(d)).collect();
    let mut widths = HEADERS.map(|header| header.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    push_line(&mut out, HEADERS.iter().copied(), &widths);
    for cells in &rows {
        push_line(&mut out, cells.iter().map(String::as_str), &widths);
    }
    out
}

fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

pub fn division_details(division: &Division) -> String {
    let fields = [
        ("Record ID", division.id.to_string()),
        ("Division ID", division.division_id.clone()),
        ("Name", division.name.clone()),
        (
            "Description",
            display_or_dash(division.description.as_deref()).to_string(),
        ),
        ("Head", display_or_dash(division.head.as_deref()).to_string()),
        (
            "Parent Organization",
            parent_organization_label(division.parent_organization.as_deref()).to_string(),
        ),
        ("Budget", format_currency(division.budget)),
        ("Status", division.status.label().to_string()),
        ("Created", format_date(division.created_at.as_deref())),
    ];
    let label_width = fields
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or_default();

    fields
        .iter()
        .map(|(label, value)| format!("{label:<label_width$}  {value}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::domain::{DivisionStatus, RecordId};

    fn finance() -> Division {
        Division {
            id: RecordId::new("1"),
            division_id: "DIV-001".into(),
            name: "Finance".into(),
            description: Some("Budgets".into()),
            head: Some("Dana Whitfield".into()),
            parent_organization: None,
            budget: Some(1234.5),
            status: DivisionStatus::Active,
            created_at: None,
        }
    }

    #[test]
    fn table_aligns_columns_and_formats_values() {
        let division = finance();
        let mut research = finance();
        research.id = RecordId::new("22");
        research.division_id = "DIV-002".into();
        research.name = "Research and Development".into();
        research.head = None;
        research.budget = None;
        research.status = DivisionStatus::Inactive;

        let table = divisions_table(&[&division, &research], "unused");
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Divisions (2)");
        assert!(lines[1].starts_with("DIVISION ID  NAME"));
        assert!(lines[2].contains("$1,234.50"));
        assert!(lines[2].contains("Global Corp"));
        assert!(lines[3].contains("Inactive"));
        assert!(lines[3].contains("$0.00"));
        let status_col = lines[1].find("STATUS").expect("status header");
        assert_eq!(lines[2].find("Active"), Some(status_col));
        assert_eq!(lines[3].find("Inactive"), Some(status_col));
    }

    #[test]
    fn empty_table_prints_message() {
        let table = divisions_table(&[], "No divisions match your search criteria.");
        assert_eq!(
            table,
            "Divisions (0)\nNo divisions match your search criteria.\n"
        );
    }

    #[test]
    fn details_fall_back_for_missing_fields() {
        let mut division = finance();
        division.description = None;
        let details = division_details(&division);
        assert!(details.contains("Description          -\n"));
        assert!(details.contains("Created              -\n"));
        assert!(details.contains("Parent Organization  Global Corp\n"));
    }
}
