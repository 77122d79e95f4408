//! One function per non-interactive command.
//!
//! Each handler loads the board unless it already is, performs its
//! operation through the controller and prints the outcome to `out`.

use std::io::Write;

use anyhow::{Context, bail};
use labboard_board::{AutoConfirm, BoardController, DropOutcome, Interaction, RemoveOutcome};
use labboard_protocol::{BoardItem, ItemId};
use labboard_service::{DataService, ResearcherDirectory};
use tracing::debug;

use super::args::{AddArgs, DeleteArgs, EditArgs, MoveArgs};
use super::edit::EditableItem;
use super::output::{write_item_line, write_lanes, write_researchers};

/// Prints every lane of the board.
///
/// # Errors
///
/// Returns an error if loading fails or output cannot be written.
pub async fn list<T, S>(board: &mut BoardController<T, S>, out: &mut impl Write) -> anyhow::Result<()>
where
    T: BoardItem,
    S: DataService<T>,
{
    board.load().await?;
    write_lanes(out, &board.lanes())?;
    Ok(())
}

/// Creates an item. Without `--status` it lands in the first column.
///
/// # Errors
///
/// Returns an error if the fields are invalid or the service fails.
pub async fn add<T, S>(
    board: &mut BoardController<T, S>,
    args: AddArgs,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    T: EditableItem,
    S: DataService<T>,
{
    let status = args
        .fields
        .status
        .clone()
        .unwrap_or_else(|| board.columns().first().id().to_string());
    let draft = T::draft(args.title, status, &args.fields, args.project)?;

    let created = board.create(draft).await?;
    writeln!(
        out,
        "Created {} #{} in {}",
        T::KIND.display_name().to_lowercase(),
        created.id(),
        column_name(board, created.status())
    )?;
    write_item_line(out, &created)?;
    Ok(())
}

/// Changes the given fields of an item.
///
/// # Errors
///
/// Returns an error if the item is not on the board, a field is invalid or
/// the service fails.
pub async fn edit<T, S>(
    board: &mut BoardController<T, S>,
    args: EditArgs,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    T: EditableItem,
    S: DataService<T>,
{
    ensure_loaded(board).await?;
    let mut item = find(board, args.id)?.clone();
    item.apply(args.title.as_deref(), &args.fields)?;

    let stored = board.update(item).await?;
    writeln!(
        out,
        "Updated {} #{}",
        T::KIND.display_name().to_lowercase(),
        stored.id()
    )?;
    write_item_line(out, &stored)?;
    Ok(())
}

/// Drags an item and drops it on another column.
///
/// # Errors
///
/// Returns an error if the item or the column is unknown, or the service
/// fails.
pub async fn move_item<T, S>(
    board: &mut BoardController<T, S>,
    args: MoveArgs,
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    T: BoardItem,
    S: DataService<T>,
{
    ensure_loaded(board).await?;
    find(board, args.id)?;
    board.begin_drag(args.id)?;

    match board.drop_on(&args.status).await {
        Ok(DropOutcome::Moved(item)) => writeln!(
            out,
            "Moved \"{}\" to {}",
            item.title(),
            column_name(board, item.status())
        )?,
        Ok(DropOutcome::Unchanged) => writeln!(
            out,
            "#{} is already in {}",
            args.id,
            column_name(board, &args.status)
        )?,
        Err(err) => {
            let columns: Vec<&str> = board.columns().iter().map(|c| c.id()).collect();
            debug!(?columns, "drop failed");
            return Err(err).with_context(|| format!("columns are: {}", columns.join(", ")));
        }
    }
    Ok(())
}

/// Deletes an item after confirmation through `prompt`, or without asking
/// with `--yes`.
///
/// # Errors
///
/// Returns an error if the item is not on the board or the service fails.
pub async fn delete<T, S>(
    board: &mut BoardController<T, S>,
    args: DeleteArgs,
    prompt: &mut (dyn Interaction + Send),
    out: &mut impl Write,
) -> anyhow::Result<()>
where
    T: BoardItem,
    S: DataService<T>,
{
    ensure_loaded(board).await?;

    let outcome = if args.yes {
        let mut auto = AutoConfirm::new(true);
        let outcome = board.remove(args.id, &mut auto).await;
        for acknowledgment in auto.acknowledgments() {
            writeln!(out, "{}", acknowledgment.message())?;
        }
        outcome?
    } else {
        board.remove(args.id, prompt).await?
    };

    match outcome {
        RemoveOutcome::Deleted => {}
        RemoveOutcome::Declined => writeln!(out, "Nothing deleted")?,
        RemoveOutcome::NotOnBoard => bail!(not_found::<T>(args.id)),
    }
    Ok(())
}

/// Prints the researcher directory.
///
/// # Errors
///
/// Returns an error if the service fails or output cannot be written.
pub async fn researchers(
    directory: &dyn ResearcherDirectory,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let researchers = directory
        .researchers()
        .await
        .context("could not list researchers")?;
    write_researchers(out, &researchers)?;
    Ok(())
}

async fn ensure_loaded<T, S>(board: &mut BoardController<T, S>) -> anyhow::Result<()>
where
    T: BoardItem,
    S: DataService<T>,
{
    if !board.is_loaded() {
        board.load().await?;
    }
    Ok(())
}

fn find<T, S>(board: &BoardController<T, S>, id: ItemId) -> anyhow::Result<&T>
where
    T: BoardItem,
    S: DataService<T>,
{
    board
        .item(id)
        .ok_or_else(|| anyhow::anyhow!(not_found::<T>(id)))
}

fn not_found<T: BoardItem>(id: ItemId) -> String {
    format!("no {} #{id} on the board", T::KIND.display_name().to_lowercase())
}

fn column_name<T, S>(board: &BoardController<T, S>, id: &str) -> String
where
    T: BoardItem,
    S: DataService<T>,
{
    board
        .columns()
        .find(id)
        .map_or_else(|| id.to_string(), |column| column.name().to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use labboard_protocol::{ColumnSet, Project, Task, dummy};
    use labboard_service::{Call, InMemoryService, ServiceError, StaticDirectory};

    use super::*;
    use crate::cli::args::FieldArgs;
    use crate::cli::prompt::StdioPrompt;

    type Board<T> = BoardController<T, Arc<InMemoryService<T>>>;

    fn projects() -> (Board<Project>, Arc<InMemoryService<Project>>) {
        let service = Arc::new(InMemoryService::new(dummy::dummy_projects()));
        let board = BoardController::with_column_set(ColumnSet::project_defaults(), Arc::clone(&service));
        (board, service)
    }

    fn text(out: Vec<u8>) -> String {
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn list_prints_every_column() {
        let (mut board, _) = projects();
        let mut out = Vec::new();
        list(&mut board, &mut out).await.unwrap();

        let text = text(out);
        assert!(text.starts_with("To Do (2)\n"));
        assert!(text.contains("In Progress (2)\n"));
        assert!(text.contains("  #5   Glacier retreat archive\n"));
    }

    #[tokio::test]
    async fn add_defaults_to_first_column() {
        let (mut board, service) = projects();
        let args = AddArgs {
            project: None,
            title: "Seed bank".into(),
            fields: FieldArgs::default(),
        };
        let mut out = Vec::new();
        add(&mut board, args, &mut out).await.unwrap();

        assert!(text(out).starts_with("Created project #6 in To Do\n"));
        let stored = service.items().await;
        assert_eq!(stored.last().map(|p| p.status.as_str()), Some("todo"));
    }

    #[tokio::test]
    async fn add_task_to_project() {
        let service = Arc::new(InMemoryService::new(dummy::dummy_tasks_for(2)));
        let mut board = BoardController::with_column_set(ColumnSet::task_defaults(), Arc::clone(&service));
        let args = AddArgs {
            project: Some(2),
            title: "Book the boat".into(),
            fields: FieldArgs {
                status: Some("in-progress".into()),
                ..FieldArgs::default()
            },
        };
        add::<Task, _>(&mut board, args, &mut Vec::new()).await.unwrap();

        let tasks = service.items().await;
        let task = tasks.iter().find(|t| t.title == "Book the boat").unwrap();
        assert_eq!(task.project, 2);
        assert_eq!(task.status, "in-progress");
    }

    #[tokio::test]
    async fn add_rejects_unknown_status() {
        let (mut board, service) = projects();
        let args = AddArgs {
            project: None,
            title: "Seed bank".into(),
            fields: FieldArgs {
                status: Some("someday".into()),
                ..FieldArgs::default()
            },
        };
        assert!(add(&mut board, args, &mut Vec::new()).await.is_err());
        assert!(service.calls().await.is_empty());
    }

    #[tokio::test]
    async fn edit_changes_given_fields() {
        let (mut board, service) = projects();
        let args = EditArgs {
            id: 3,
            project: None,
            title: None,
            fields: FieldArgs {
                notes: Some("Use satellite data".into()),
                ..FieldArgs::default()
            },
        };
        let mut out = Vec::new();
        edit(&mut board, args, &mut out).await.unwrap();

        assert!(text(out).starts_with("Updated project #3\n"));
        let stored = service.items().await;
        let project = stored.iter().find(|p| p.id == 3).unwrap();
        assert_eq!(project.notes, "Use satellite data");
        assert_eq!(project.title, "Urban heat islands");
    }

    #[tokio::test]
    async fn edit_unknown_item_fails_without_request() {
        let (mut board, service) = projects();
        let args = EditArgs {
            id: 42,
            project: None,
            title: Some("Nope".into()),
            fields: FieldArgs::default(),
        };
        let err = edit(&mut board, args, &mut Vec::new()).await.unwrap_err();

        assert_eq!(err.to_string(), "no project #42 on the board");
        assert_eq!(service.calls().await, [Call::List]);
    }

    #[tokio::test]
    async fn move_reports_outcome() {
        let (mut board, _) = projects();
        let mut out = Vec::new();
        let args = MoveArgs {
            id: 2,
            status: "done".into(),
            project: None,
        };
        move_item(&mut board, args, &mut out).await.unwrap();
        assert_eq!(text(out), "Moved \"Coral reef bleaching\" to Done\n");

        let mut out = Vec::new();
        let args = MoveArgs {
            id: 5,
            status: "done".into(),
            project: None,
        };
        move_item(&mut board, args, &mut out).await.unwrap();
        assert_eq!(text(out), "#5 is already in Done\n");
    }

    #[tokio::test]
    async fn move_to_unknown_column_lists_columns() {
        let (mut board, _) = projects();
        let args = MoveArgs {
            id: 2,
            status: "archived".into(),
            project: None,
        };
        let err = move_item(&mut board, args, &mut Vec::new()).await.unwrap_err();

        assert_eq!(err.to_string(), "columns are: todo, in-progress, done");
        assert!(board.drag_session().is_none());
    }

    #[tokio::test]
    async fn delete_asks_first() {
        let (mut board, service) = projects();
        let args = DeleteArgs {
            id: 3,
            project: None,
            yes: false,
        };
        let mut prompt = StdioPrompt::new(&b"n\n"[..], Vec::new());
        let mut out = Vec::new();
        delete(&mut board, args, &mut prompt, &mut out).await.unwrap();

        assert_eq!(text(out), "Nothing deleted\n");
        assert_eq!(service.items().await.len(), 5);
    }

    #[tokio::test]
    async fn delete_with_yes_skips_prompt() {
        let (mut board, service) = projects();
        let args = DeleteArgs {
            id: 3,
            project: None,
            yes: true,
        };
        let mut prompt = AutoConfirm::new(false);
        let mut out = Vec::new();
        delete(&mut board, args, &mut prompt, &mut out).await.unwrap();

        assert_eq!(text(out), "Project \"Urban heat islands\" deleted\n");
        assert!(prompt.questions().is_empty());
        assert_eq!(service.items().await.len(), 4);
    }

    #[tokio::test]
    async fn delete_failure_is_printed_and_returned() {
        let (mut board, service) = projects();
        board.load().await.unwrap();
        service.fail_next(ServiceError::Conflict { id: 3 }).await;

        let args = DeleteArgs {
            id: 3,
            project: None,
            yes: true,
        };
        let mut out = Vec::new();
        let result = delete(&mut board, args, &mut AutoConfirm::new(true), &mut out).await;

        assert!(result.is_err());
        assert!(text(out).starts_with("Could not delete project \"Urban heat islands\""));
    }

    #[tokio::test]
    async fn delete_missing_item_fails() {
        let (mut board, _) = projects();
        let args = DeleteArgs {
            id: 9,
            project: None,
            yes: true,
        };
        let err = delete(&mut board, args, &mut AutoConfirm::new(true), &mut Vec::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no project #9 on the board");
    }

    #[tokio::test]
    async fn researchers_are_listed() {
        let directory = StaticDirectory::new(dummy::dummy_researchers());
        let mut out = Vec::new();
        researchers(&directory, &mut out).await.unwrap();
        assert!(text(out).starts_with("Jane Smith (#1)\n"));
    }
}
