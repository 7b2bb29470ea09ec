use super::types::Project;

/// Width of the label column, the longest label plus two spaces.
const LABEL_WIDTH: usize = 8;

fn field(indent: &str, label: &str, value: &str) -> String {
    format!("{indent}{:<LABEL_WIDTH$}{value}", format!("{label}:"))
}

/// Renders a project as a labeled field list, followed by its apps if it has any.
///
/// Values are written as-is, only the labels are padded.
pub fn format_project(project: &Project) -> String {
    let mut lines = vec![
        field("", "Title", &project.title),
        field("", "Email", &project.author_email),
        field("", "Guid", &project.guid),
        field("", "Type", &project.type_),
    ];

    let apps = project.apps();

    if !apps.is_empty() {
        lines.push("Apps:".to_string());

        for app in apps {
            lines.push(field("  ", "Title", &app.title));
            lines.push(field("  ", "Guid", &app.guid));
        }
    }

    lines.iter().map(|line| format!("{line}\n")).collect()
}
