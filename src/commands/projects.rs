use crate::cli::{DeleteArgs, EditArgs};
use crate::confirm::{AssumeYes, Confirmer, PromptConfirmer};
use crate::directory::ProjectDirectory;
use crate::error::Result;
use crate::notify::Notifier;
use crate::output;
use crate::types::ProjectEdit;
use crate::view::{ProjectListView, ViewStatus};

fn print_view<D, N, C>(view: &ProjectListView<D, N, C>)
where
    D: ProjectDirectory,
    N: Notifier,
    C: Confirmer,
{
    // A failed refresh after a mutation was already notified; skip the stale table.
    if view.status() == ViewStatus::Loaded {
        output::print_table(&view.table(), view.loaded_at());
    }
}

pub async fn list<D: ProjectDirectory, N: Notifier>(directory: D, notifier: N) -> Result<()> {
    let mut view = ProjectListView::new(directory, notifier, AssumeYes);
    view.initialize().await?;
    print_view(&view);
    Ok(())
}

pub async fn edit<D: ProjectDirectory, N: Notifier>(
    directory: D,
    notifier: N,
    args: EditArgs,
) -> Result<()> {
    let edit = ProjectEdit {
        tag: args.tag,
        endpoints: (!args.endpoints.is_empty()).then_some(args.endpoints),
    };
    edit.validate()?;

    let mut view = ProjectListView::new(directory, notifier, AssumeYes);
    view.initialize().await?;

    let project = view.find(&args.project)?.clone();
    view.request_edit(&project, &edit).await?;
    print_view(&view);
    Ok(())
}

pub async fn delete<D: ProjectDirectory, N: Notifier>(
    directory: D,
    notifier: N,
    args: DeleteArgs,
) -> Result<()> {
    let confirmer: Box<dyn Confirmer> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(PromptConfirmer)
    };

    let mut view = ProjectListView::new(directory, notifier, confirmer);
    view.initialize().await?;

    let project = view.find(&args.project)?.clone();
    view.request_delete(&project).await?;
    print_view(&view);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::testing::MemoryDirectory;
    use crate::error::AdminError;
    use crate::notify::Severity;
    use crate::notify::testing::RecordingNotifier;
    use crate::types::Project;

    fn directory() -> MemoryDirectory {
        MemoryDirectory::with(vec![Project {
            id: "p-1".into(),
            name: "Analytics".into(),
            endpoints: vec!["local".into()],
            tag: "research".into(),
        }])
    }

    #[tokio::test]
    async fn edit_without_changes_fails_before_loading() {
        let directory = directory();
        let args = EditArgs {
            project: "p-1".into(),
            tag: None,
            endpoints: Vec::new(),
        };

        let err = edit(&directory, RecordingNotifier::default(), args)
            .await
            .unwrap_err();

        assert!(matches!(err, AdminError::EmptyEdit));
        assert_eq!(directory.list_calls(), 0);
    }

    #[tokio::test]
    async fn edit_unknown_project_is_not_found() {
        let directory = directory();
        let args = EditArgs {
            project: "nope".into(),
            tag: Some("ops".into()),
            endpoints: Vec::new(),
        };

        let err = edit(&directory, RecordingNotifier::default(), args)
            .await
            .unwrap_err();

        assert!(matches!(err, AdminError::ProjectNotFound(_)));
        assert_eq!(directory.mutation_calls(), 0);
    }

    #[tokio::test]
    async fn delete_with_yes_skips_prompt() {
        let directory = directory();
        let args = DeleteArgs {
            project: "analytics".into(),
            yes: true,
        };

        delete(&directory, RecordingNotifier::default(), args)
            .await
            .unwrap();

        assert_eq!(directory.mutation_calls(), 1);
        assert_eq!(directory.list_calls(), 2);
    }

    #[tokio::test]
    async fn failed_list_is_notified_once_and_marked_reported() {
        let directory = directory();
        directory.set_fail_list(true);
        let notifier = RecordingNotifier::default();

        let err = list(&directory, &notifier).await.unwrap_err();

        assert!(err.is_reported());
        assert_eq!(notifier.events.borrow().len(), 1);
        assert_eq!(notifier.count(Severity::Error), 1);
    }

    #[tokio::test]
    async fn failed_delete_is_notified_once_and_marked_reported() {
        let directory = directory();
        directory.set_fail_mutations(true);
        let notifier = RecordingNotifier::default();
        let args = DeleteArgs {
            project: "p-1".into(),
            yes: true,
        };

        let err = delete(&directory, &notifier, args).await.unwrap_err();

        assert!(err.is_reported());
        assert_eq!(notifier.count(Severity::Error), 1);
    }

    #[tokio::test]
    async fn input_errors_are_left_to_the_caller() {
        let directory = directory();
        let notifier = RecordingNotifier::default();
        let args = EditArgs {
            project: "p-1".into(),
            tag: Some("Not A Slug".into()),
            endpoints: Vec::new(),
        };

        let err = edit(&directory, &notifier, args).await.unwrap_err();

        assert!(!err.is_reported());
        assert!(notifier.events.borrow().is_empty());
    }
}
