//! The directory service seam: where the authoritative project collection lives.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Project, ProjectEdit};

/// Read and mutate the remote project collection.
#[async_trait]
pub trait ProjectDirectory: Send + Sync {
    /// Current projects, in the order the service returns them.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    async fn update_project(&self, id: &str, edit: &ProjectEdit) -> Result<Project>;

    async fn delete_project(&self, id: &str) -> Result<()>;
}

#[async_trait]
impl<'a, T: ProjectDirectory + ?Sized> ProjectDirectory for &'a T {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        (**self).list_projects().await
    }

    async fn update_project(&self, id: &str, edit: &ProjectEdit) -> Result<Project> {
        (**self).update_project(id, edit).await
    }

    async fn delete_project(&self, id: &str) -> Result<()> {
        (**self).delete_project(id).await
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use super::*;
    use crate::error::AdminError;

    /// In-memory directory with switchable failures.
    #[derive(Default)]
    pub struct MemoryDirectory {
        projects: Mutex<Vec<Project>>,
        fail_list: AtomicBool,
        fail_mutations: AtomicBool,
        list_calls: AtomicUsize,
        mutation_calls: AtomicUsize,
    }

    impl MemoryDirectory {
        pub fn with(projects: Vec<Project>) -> Self {
            Self {
                projects: Mutex::new(projects),
                ..Default::default()
            }
        }

        pub fn set_fail_list(&self, fail: bool) {
            self.fail_list.store(fail, Ordering::SeqCst);
        }

        pub fn set_fail_mutations(&self, fail: bool) {
            self.fail_mutations.store(fail, Ordering::SeqCst);
        }

        pub fn list_calls(&self) -> usize {
            self.list_calls.load(Ordering::SeqCst)
        }

        pub fn mutation_calls(&self) -> usize {
            self.mutation_calls.load(Ordering::SeqCst)
        }

        fn unavailable() -> AdminError {
            AdminError::Api {
                status: 503,
                message: "directory unavailable".into(),
            }
        }
    }

    #[async_trait]
    impl ProjectDirectory for MemoryDirectory {
        async fn list_projects(&self) -> Result<Vec<Project>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_list.load(Ordering::SeqCst) {
                return Err(Self::unavailable());
            }
            Ok(self.projects.lock().unwrap().clone())
        }

        async fn update_project(&self, id: &str, edit: &ProjectEdit) -> Result<Project> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::unavailable());
            }
            let mut projects = self.projects.lock().unwrap();
            let project = projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| AdminError::ProjectNotFound(id.to_string()))?;
            *project = edit.apply_to(project);
            Ok(project.clone())
        }

        async fn delete_project(&self, id: &str) -> Result<()> {
            self.mutation_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::unavailable());
            }
            let mut projects = self.projects.lock().unwrap();
            let before = projects.len();
            projects.retain(|p| p.id != id);
            if projects.len() == before {
                return Err(AdminError::ProjectNotFound(id.to_string()));
            }
            Ok(())
        }
    }
}
