//! Project list view-model.
//!
//! Owns the rendered snapshot of projects and turns user intents into calls
//! on the injected collaborators. Every failure is reported through the
//! notifier exactly once and leaves the snapshot untouched.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::confirm::Confirmer;
use crate::directory::ProjectDirectory;
use crate::error::{AdminError, Result};
use crate::notify::{Notifier, Severity};
use crate::table::{Column, TableView};
use crate::types::{Project, ProjectEdit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Uninitialized,
    Loading,
    Loaded,
    Error,
}

/// Identifies one issued load; only the latest ticket may apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Stale,
}

pub struct ProjectListView<D, N, C> {
    directory: D,
    notifier: N,
    confirmer: C,
    visible_columns: Vec<Column>,
    projects: Vec<Project>,
    status: ViewStatus,
    loaded_at: Option<DateTime<Utc>>,
    issued: u64,
}

impl<D, N, C> ProjectListView<D, N, C>
where
    D: ProjectDirectory,
    N: Notifier,
    C: Confirmer,
{
    pub fn new(directory: D, notifier: N, confirmer: C) -> Self {
        Self {
            directory,
            notifier,
            confirmer,
            visible_columns: Column::ALL.to_vec(),
            projects: Vec::new(),
            status: ViewStatus::Uninitialized,
            loaded_at: None,
            issued: 0,
        }
    }

    #[cfg(test)]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    #[cfg(test)]
    pub fn visible_columns(&self) -> &[Column] {
        &self.visible_columns
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn table(&self) -> TableView {
        TableView::from_projects(&self.visible_columns, &self.projects)
    }

    /// Find a loaded project by id or name.
    pub fn find(&self, key: &str) -> Result<&Project> {
        self.projects
            .iter()
            .find(|p| p.matches(key))
            .ok_or_else(|| AdminError::ProjectNotFound(key.to_string()))
    }

    /// First load of an activation. Later calls in the same activation are no-ops.
    pub async fn initialize(&mut self) -> Result<()> {
        if self.status != ViewStatus::Uninitialized {
            debug!(status = ?self.status, "view already initialized");
            return Ok(());
        }
        self.load_projects().await
    }

    /// Start a new activation, keeping the last snapshot on screen.
    #[cfg(test)]
    pub fn reactivate(&mut self) {
        self.status = ViewStatus::Uninitialized;
    }

    pub async fn load_projects(&mut self) -> Result<()> {
        let ticket = self.begin_load();
        let fetched = self.directory.list_projects().await;
        self.finish_load(ticket, fetched).map(|_| ())
    }

    /// Issue a load, superseding any earlier one still in flight.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.issued += 1;
        self.status = ViewStatus::Loading;
        debug!(seq = self.issued, "loading projects");
        LoadTicket(self.issued)
    }

    /// Apply the result of a load unless a newer load has been issued since.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        fetched: Result<Vec<Project>>,
    ) -> Result<LoadOutcome> {
        if ticket.0 != self.issued {
            debug!(seq = ticket.0, latest = self.issued, "discarding stale project load");
            return Ok(LoadOutcome::Stale);
        }

        match fetched {
            Ok(projects) => {
                info!(count = projects.len(), "projects loaded");
                self.projects = projects;
                self.status = ViewStatus::Loaded;
                self.loaded_at = Some(Utc::now());
                Ok(LoadOutcome::Applied)
            }
            Err(e) => {
                let err = AdminError::FetchFailure(Box::new(e));
                debug!(error = %err, "project load failed");
                self.status = ViewStatus::Error;
                self.notifier.notify(Severity::Error, &err.to_string());
                Err(err)
            }
        }
    }

    /// Validate, update, then refresh. Once the update succeeds the call
    /// succeeds; a failed refresh is only notified.
    pub async fn request_edit(&mut self, project: &Project, edit: &ProjectEdit) -> Result<()> {
        if let Err(e) = edit.validate() {
            return Err(self.mutation_failed("update", project, e));
        }

        match self.directory.update_project(&project.id, edit).await {
            Ok(updated) => {
                info!(project = %updated.id, "project updated");
                self.notifier
                    .notify(Severity::Success, &format!("Project {} updated", updated.name));
                self.refresh_after_mutation().await;
                Ok(())
            }
            Err(e) => Err(self.mutation_failed("update", project, e)),
        }
    }

    /// Confirm, delete, then refresh. A declined prompt changes nothing and a
    /// failed refresh does not turn a completed deletion into an error.
    pub async fn request_delete(&mut self, project: &Project) -> Result<()> {
        let prompt = format!("Delete project {} ({})?", project.name, project.id);
        if !self.confirmer.confirm(&prompt) {
            self.notifier.notify(
                Severity::Info,
                &format!("Deletion of {} cancelled", project.name),
            );
            return Ok(());
        }

        match self.directory.delete_project(&project.id).await {
            Ok(()) => {
                info!(project = %project.id, "project deleted");
                self.notifier
                    .notify(Severity::Success, &format!("Project {} deleted", project.name));
                self.refresh_after_mutation().await;
                Ok(())
            }
            Err(e) => Err(self.mutation_failed("delete", project, e)),
        }
    }

    async fn refresh_after_mutation(&mut self) {
        if self.load_projects().await.is_err() {
            debug!("refresh after mutation failed; snapshot is out of date");
        }
    }

    fn mutation_failed(&self, action: &'static str, project: &Project, e: AdminError) -> AdminError {
        let err = AdminError::mutation(action, &project.name, e);
        debug!(error = %err, "project mutation failed");
        self.notifier.notify(Severity::Error, &err.to_string());
        err
    }
}
