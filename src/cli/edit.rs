//! Building and editing items from command line fields.

use labboard_protocol::{BoardItem, ItemId, NewProject, NewTask, Project, Task, parse_due_date};

use super::args::FieldArgs;

/// An item the command line can create and edit.
pub trait EditableItem: BoardItem {
    /// Builds a creation payload. `project` is the owning project of a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the due date does not parse, or if a task has no
    /// project.
    fn draft(
        title: String,
        status: String,
        fields: &FieldArgs,
        project: Option<ItemId>,
    ) -> anyhow::Result<Self::Draft>;

    /// Applies the given fields, leaving the others untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the due date does not parse.
    fn apply(&mut self, title: Option<&str>, fields: &FieldArgs) -> anyhow::Result<()>;
}

impl EditableItem for Project {
    fn draft(
        title: String,
        status: String,
        fields: &FieldArgs,
        _project: Option<ItemId>,
    ) -> anyhow::Result<NewProject> {
        Ok(NewProject {
            title,
            description: fields.description.clone().unwrap_or_default(),
            status,
            due_date: parse_due(fields)?.flatten(),
            notes: fields.notes.clone().unwrap_or_default(),
        })
    }

    fn apply(&mut self, title: Option<&str>, fields: &FieldArgs) -> anyhow::Result<()> {
        apply_common(
            Common {
                title: &mut self.title,
                description: &mut self.description,
                status: &mut self.status,
                due_date: &mut self.due_date,
                notes: &mut self.notes,
            },
            title,
            fields,
        )
    }
}

impl EditableItem for Task {
    fn draft(
        title: String,
        status: String,
        fields: &FieldArgs,
        project: Option<ItemId>,
    ) -> anyhow::Result<NewTask> {
        let project = project.ok_or_else(|| anyhow::anyhow!("a task needs a --project"))?;
        Ok(NewTask {
            title,
            description: fields.description.clone().unwrap_or_default(),
            status,
            due_date: parse_due(fields)?.flatten(),
            notes: fields.notes.clone().unwrap_or_default(),
            project,
        })
    }

    fn apply(&mut self, title: Option<&str>, fields: &FieldArgs) -> anyhow::Result<()> {
        apply_common(
            Common {
                title: &mut self.title,
                description: &mut self.description,
                status: &mut self.status,
                due_date: &mut self.due_date,
                notes: &mut self.notes,
            },
            title,
            fields,
        )
    }
}

/// The fields projects and tasks share.
struct Common<'a> {
    title: &'a mut String,
    description: &'a mut String,
    status: &'a mut String,
    due_date: &'a mut Option<chrono::NaiveDate>,
    notes: &'a mut String,
}

fn apply_common(item: Common<'_>, title: Option<&str>, fields: &FieldArgs) -> anyhow::Result<()> {
    // Parse first so a bad date leaves the item untouched
    let due = parse_due(fields)?;

    if let Some(title) = title {
        *item.title = title.to_string();
    }
    if let Some(description) = &fields.description {
        item.description.clone_from(description);
    }
    if let Some(status) = &fields.status {
        item.status.clone_from(status);
    }
    if let Some(due) = due {
        *item.due_date = due;
    }
    if let Some(notes) = &fields.notes {
        item.notes.clone_from(notes);
    }
    Ok(())
}

/// Parses `--due` when given; `Some(None)` clears the date.
fn parse_due(fields: &FieldArgs) -> anyhow::Result<Option<Option<chrono::NaiveDate>>> {
    fields
        .due
        .as_deref()
        .map(parse_due_date)
        .transpose()
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn project_draft_uses_given_fields() {
        let fields = FieldArgs {
            description: Some("Map the reef".into()),
            due: Some("2025-06-01".into()),
            ..FieldArgs::default()
        };
        let draft = Project::draft("Reef".into(), "todo".into(), &fields, None).unwrap();

        assert_eq!(draft.title, "Reef");
        assert_eq!(draft.description, "Map the reef");
        assert_eq!(draft.due_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn task_draft_needs_project() {
        let fields = FieldArgs::default();
        assert!(Task::draft("Dive".into(), "planning".into(), &fields, None).is_err());

        let draft = Task::draft("Dive".into(), "planning".into(), &fields, Some(2)).unwrap();
        assert_eq!(draft.project, 2);
    }

    #[test]
    fn apply_changes_only_given_fields() {
        let mut project = Project::new(1, "Soil survey", "todo");
        project.notes = "keep".into();
        let fields = FieldArgs {
            status: Some("done".into()),
            due: Some("2025-01-31".into()),
            ..FieldArgs::default()
        };
        project.apply(Some("Soil study"), &fields).unwrap();

        assert_eq!(project.title, "Soil study");
        assert_eq!(project.status, "done");
        assert_eq!(project.due_date, NaiveDate::from_ymd_opt(2025, 1, 31));
        assert_eq!(project.notes, "keep");
    }

    #[test]
    fn empty_due_clears_date() {
        let mut task = Task::new(3, 1, "Sequence DNA", "planning");
        task.due_date = NaiveDate::from_ymd_opt(2025, 2, 1);
        let fields = FieldArgs {
            due: Some(String::new()),
            ..FieldArgs::default()
        };
        task.apply(None, &fields).unwrap();
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn bad_due_date_leaves_item_untouched() {
        let mut task = Task::new(3, 1, "Sequence DNA", "planning");
        let fields = FieldArgs {
            due: Some("soon".into()),
            status: Some("completed".into()),
            ..FieldArgs::default()
        };
        assert!(task.apply(Some("Other"), &fields).is_err());
        assert_eq!(task.title, "Sequence DNA");
        assert_eq!(task.status, "planning");
    }
}
