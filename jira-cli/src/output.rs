//! Human-readable rendering of Jira results.

use std::io::Write;

use anyhow::Result;
use jira_api::{CreatedIssue, Field, IssueType, IssueTypeField, JiraUser, Page, Project, ServerInfo};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Write any result as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
  serde_json::to_writer_pretty(&mut *out, value)?;
  writeln!(out)?;
  Ok(())
}

fn or_dash(value: Option<&str>) -> String {
  match value {
    Some(value) if !value.is_empty() => value.to_string(),
    _ => "-".to_string(),
  }
}

fn yes_no(value: bool) -> &'static str {
  if value { "yes" } else { "no" }
}

pub fn write_server_info<W: Write>(out: &mut W, info: &ServerInfo) -> Result<()> {
  writeln!(out, "Title:      {}", info.server_title)?;
  writeln!(out, "Base URL:   {}", info.base_url)?;
  writeln!(out, "Version:    {} (build {})", info.version, info.build_number)?;
  writeln!(out, "Deployment: {}", or_dash(info.deployment_type.as_deref()))?;
  writeln!(out, "Server time: {}", or_dash(info.server_time.as_deref()))?;
  Ok(())
}

pub fn write_user<W: Write>(out: &mut W, user: &JiraUser) -> Result<()> {
  writeln!(out, "Name:     {}", user.display_name)?;
  writeln!(out, "Id:       {}", or_dash(user.identifier()))?;
  writeln!(out, "Email:    {}", or_dash(user.email_address.as_deref()))?;
  writeln!(out, "Active:   {}", yes_no(user.active))?;
  writeln!(out, "Timezone: {}", or_dash(user.time_zone.as_deref()))?;
  Ok(())
}

pub fn write_fields<W: Write>(out: &mut W, fields: &[Field]) -> Result<()> {
  #[derive(Tabled)]
  struct FieldRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Custom")]
    custom: &'static str,
    #[tabled(rename = "Type")]
    field_type: String,
  }

  let rows = fields.iter().map(|field| FieldRow {
    id: field.id.clone(),
    name: field.name.clone(),
    custom: yes_no(field.custom),
    field_type: or_dash(field.schema.as_ref().map(|schema| schema.field_type.as_str())),
  });

  writeln!(out, "{}", Table::new(rows).with(Style::sharp()))?;
  Ok(())
}

pub fn write_projects<W: Write>(out: &mut W, projects: &[Project]) -> Result<()> {
  #[derive(Tabled)]
  struct ProjectRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    project_type: String,
  }

  let rows = projects.iter().map(|project| ProjectRow {
    key: project.key.clone(),
    name: project.name.clone(),
    id: project.id.clone(),
    project_type: or_dash(project.project_type_key.as_deref()),
  });

  writeln!(out, "{}", Table::new(rows).with(Style::sharp()))?;
  Ok(())
}

fn issue_type_table(issue_types: &[IssueType]) -> Table {
  #[derive(Tabled)]
  struct IssueTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Subtask")]
    subtask: &'static str,
    #[tabled(rename = "Description")]
    description: String,
  }

  let rows = issue_types.iter().map(|issue_type| IssueTypeRow {
    id: issue_type.id.clone(),
    name: issue_type.name.clone(),
    subtask: yes_no(issue_type.subtask),
    description: or_dash(issue_type.description.as_deref()),
  });

  let mut table = Table::new(rows);
  table.with(Style::sharp());
  table
}

pub fn write_project<W: Write>(out: &mut W, project: &Project) -> Result<()> {
  writeln!(out, "{} - {} (id {})", project.key, project.name, project.id)?;
  if let Some(lead) = &project.lead {
    writeln!(out, "Lead: {}", lead.display_name)?;
  }
  if let Some(url) = project.url.as_deref().filter(|url| !url.is_empty()) {
    writeln!(out, "URL:  {url}")?;
  }
  if !project.issue_types.is_empty() {
    writeln!(out, "\n{}", issue_type_table(&project.issue_types))?;
  }
  Ok(())
}

fn write_page_footer<W: Write, T>(out: &mut W, page: &Page<T>) -> Result<()> {
  let shown = page.values.len() as u64;
  if page.is_last && page.start_at == 0 && shown == page.total {
    return Ok(());
  }
  let first = if shown == 0 { page.start_at } else { page.start_at.saturating_add(1) };
  let last = page.start_at.saturating_add(shown);
  writeln!(out, "Showing {first}-{last} of {}", page.total)?;
  Ok(())
}

pub fn write_issue_types<W: Write>(out: &mut W, page: &Page<IssueType>) -> Result<()> {
  writeln!(out, "{}", issue_type_table(&page.values))?;
  write_page_footer(out, page)
}

pub fn write_issue_fields<W: Write>(out: &mut W, page: &Page<IssueTypeField>) -> Result<()> {
  #[derive(Tabled)]
  struct IssueFieldRow {
    #[tabled(rename = "Field")]
    field_id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Required")]
    required: &'static str,
    #[tabled(rename = "Type")]
    field_type: String,
    #[tabled(rename = "Allowed values")]
    allowed: String,
  }

  let rows = page.values.iter().map(|field| IssueFieldRow {
    field_id: field.field_id.clone(),
    name: field.name.clone(),
    required: yes_no(field.required),
    field_type: field.schema.field_type.clone(),
    allowed: {
      let labels: Vec<_> = field.enabled_values().filter_map(|value| value.label()).collect();
      if labels.is_empty() { "-".to_string() } else { labels.join(", ") }
    },
  });

  writeln!(out, "{}", Table::new(rows).with(Style::sharp()))?;
  write_page_footer(out, page)
}

pub fn write_created_issue<W: Write>(out: &mut W, created: &CreatedIssue) -> Result<()> {
  writeln!(out, "Created {} (id {})", created.key, created.id)?;
  writeln!(out, "{}", created.self_url)?;
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn page(start_at: u64, total: u64, is_last: bool, values: Vec<IssueType>) -> Page<IssueType> {
    Page {
      start_at,
      max_results: 50,
      total,
      is_last,
      values,
    }
  }

  fn issue_type(id: &str, name: &str) -> IssueType {
    IssueType {
      self_url: None,
      id: id.to_string(),
      description: None,
      icon_url: None,
      name: name.to_string(),
      subtask: false,
      avatar_id: None,
      hierarchy_level: None,
    }
  }

  #[test]
  fn test_complete_page_has_no_footer() {
    let mut out = Vec::new();
    write_issue_types(&mut out, &page(0, 1, true, vec![issue_type("7", "Story")])).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Story"));
    assert!(!text.contains("Showing"));
  }

  #[test]
  fn test_footer_saturates_on_huge_start() {
    let mut out = Vec::new();
    write_issue_types(&mut out, &page(u64::MAX, 3, false, vec![issue_type("7", "Story")])).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains(&format!("Showing {max}-{max} of 3", max = u64::MAX)));
  }

  #[test]
  fn test_partial_page_has_footer() {
    let mut out = Vec::new();
    write_issue_types(&mut out, &page(10, 30, false, vec![issue_type("7", "Story")])).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Showing 11-11 of 30"));
  }
}
