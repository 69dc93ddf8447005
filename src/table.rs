//! Generic tabular view: ordered columns, ordered rows, per-row actions.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::output::truncate;
use crate::types::Project;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Name,
    Endpoints,
    Tag,
    Actions,
}

impl Column {
    pub const ALL: [Column; 4] = [Column::Name, Column::Endpoints, Column::Tag, Column::Actions];

    pub fn header(self) -> &'static str {
        match self {
            Column::Name => "Name",
            Column::Endpoints => "Endpoints",
            Column::Tag => "Tag",
            Column::Actions => "Actions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Edit,
    Delete,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::Edit, RowAction::Delete];

    pub fn label(self) -> &'static str {
        match self {
            RowAction::Edit => "edit",
            RowAction::Delete => "delete",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    #[serde(flatten)]
    pub project: Project,
    #[serde(skip)]
    pub actions: Vec<RowAction>,
}

impl TableRow {
    fn cell(&self, column: Column) -> String {
        match column {
            Column::Name => self.project.name.clone(),
            Column::Endpoints if self.project.endpoints.is_empty() => "-".to_string(),
            Column::Endpoints => truncate(&self.project.endpoints.join(", "), 48),
            Column::Tag if self.project.tag.is_empty() => "-".to_string(),
            Column::Tag => self.project.tag.clone(),
            Column::Actions => self
                .actions
                .iter()
                .map(|a| a.label())
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    #[serde(skip)]
    pub columns: Vec<Column>,
    pub rows: Vec<TableRow>,
}

impl TableView {
    pub fn from_projects(columns: &[Column], projects: &[Project]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: projects
                .iter()
                .map(|p| TableRow {
                    project: p.clone(),
                    actions: RowAction::ALL.to_vec(),
                })
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().map(|c| c.header()));
        for row in &self.rows {
            builder.push_record(self.columns.iter().map(|c| row.cell(*c)));
        }
        builder.build().with(Style::rounded()).to_string()
    }
}
