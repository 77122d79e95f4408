//! The REST implementation of [`DataService`].

use std::marker::PhantomData;

use async_trait::async_trait;
use labboard_protocol::{BoardItem, ItemId, Project, Task, Version};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

use crate::client::ServiceClient;
use crate::error::Result;
use crate::service::DataService;

/// Placeholder replaced by an item id in item paths.
pub const ID_PLACEHOLDER: &str = "{id}";

/// Placeholder replaced by a project id in the project tasks path.
pub const PROJECT_PLACEHOLDER: &str = "{project}";

/// The path layout of the REST service.
///
/// Item paths contain [`ID_PLACEHOLDER`], the project tasks path contains
/// [`PROJECT_PLACEHOLDER`].
///
/// # Examples
///
/// ```
/// use labboard_service::EndpointLayout;
///
/// let layout = EndpointLayout::default();
/// let endpoints = layout.tasks_of(4);
/// assert_eq!(endpoints.list, "/task/project/4");
/// assert_eq!(endpoints.item_path(9), "/task/9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct EndpointLayout {
    /// Project collection, used to list and create projects.
    pub projects: String,
    /// A single project.
    pub project: String,
    /// The tasks of one project.
    pub project_tasks: String,
    /// Task collection, used to create tasks.
    pub tasks: String,
    /// A single task.
    pub task: String,
    /// The researcher directory.
    pub researchers: String,
}

impl Default for EndpointLayout {
    fn default() -> Self {
        Self {
            projects: "/projects".to_string(),
            project: "/projects/{id}".to_string(),
            project_tasks: "/task/project/{project}".to_string(),
            tasks: "/task".to_string(),
            task: "/task/{id}".to_string(),
            researchers: "/researchers".to_string(),
        }
    }
}

impl EndpointLayout {
    /// Endpoints of the project board.
    #[must_use]
    pub fn projects(&self) -> Endpoints {
        Endpoints {
            list: self.projects.clone(),
            create: self.projects.clone(),
            item: self.project.clone(),
        }
    }

    /// Endpoints of the task board of `project`.
    #[must_use]
    pub fn tasks_of(&self, project: ItemId) -> Endpoints {
        Endpoints {
            list: self
                .project_tasks
                .replace(PROJECT_PLACEHOLDER, &project.to_string()),
            create: self.tasks.clone(),
            item: self.task.clone(),
        }
    }

    /// Returns the names of the paths that lack their placeholder.
    #[must_use]
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.project.contains(ID_PLACEHOLDER) {
            missing.push("project");
        }
        if !self.task.contains(ID_PLACEHOLDER) {
            missing.push("task");
        }
        if !self.project_tasks.contains(PROJECT_PLACEHOLDER) {
            missing.push("project_tasks");
        }
        missing
    }
}

/// The paths one board talks to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Lists the collection.
    pub list: String,
    /// Creates an item.
    pub create: String,
    /// Addresses one item, with an `{id}` placeholder.
    pub item: String,
}

impl Endpoints {
    /// Returns the path of the item `id`.
    #[must_use]
    pub fn item_path(&self, id: ItemId) -> String {
        self.item.replace(ID_PLACEHOLDER, &id.to_string())
    }
}

/// A [`DataService`] backed by the REST service.
///
/// # Examples
///
/// ```no_run
/// use labboard_service::{DataService, EndpointLayout, HttpService, ServiceClient};
/// use labboard_service::client::DEFAULT_TIMEOUT;
///
/// # async fn example() -> labboard_service::Result<()> {
/// let client = ServiceClient::new("http://localhost:3000", DEFAULT_TIMEOUT)?;
/// let service = HttpService::projects(client, &EndpointLayout::default());
/// let projects = service.list().await?;
/// println!("{} projects", projects.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpService<T> {
    client: ServiceClient,
    endpoints: Endpoints,
    _item: PhantomData<fn() -> T>,
}

impl<T: BoardItem> HttpService<T> {
    /// Creates a service for the collection at `endpoints`.
    #[must_use]
    pub fn new(client: ServiceClient, endpoints: Endpoints) -> Self {
        Self {
            client,
            endpoints,
            _item: PhantomData,
        }
    }

    /// Returns the endpoints this service talks to.
    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }
}

impl HttpService<Project> {
    /// Creates the project service.
    #[must_use]
    pub fn projects(client: ServiceClient, layout: &EndpointLayout) -> Self {
        Self::new(client, layout.projects())
    }
}

impl HttpService<Task> {
    /// Creates the service for the tasks of `project`.
    #[must_use]
    pub fn tasks(client: ServiceClient, layout: &EndpointLayout, project: ItemId) -> Self {
        Self::new(client, layout.tasks_of(project))
    }
}

#[async_trait]
impl<T: BoardItem> DataService<T> for HttpService<T> {
    #[instrument(skip(self), fields(kind = %T::KIND, path = %self.endpoints.list))]
    async fn list(&self) -> Result<Vec<T>> {
        let items: Vec<T> = self.client.get_json(&self.endpoints.list).await?;
        debug!(count = items.len(), "fetched items");
        Ok(items)
    }

    #[instrument(skip(self, draft), fields(kind = %T::KIND))]
    async fn create(&self, draft: &T::Draft) -> Result<T> {
        let created: T = self.client.post_json(&self.endpoints.create, draft).await?;
        debug!(id = created.id(), "created item");
        Ok(created)
    }

    #[instrument(skip(self, item), fields(kind = %T::KIND, id = item.id(), status = item.status()))]
    async fn update(&self, item: &T) -> Result<T> {
        let path = self.endpoints.item_path(item.id());
        let answer: Option<Value> = self
            .client
            .patch_json(&path, item.id(), item.version(), item)
            .await?;
        // An accepted patch stored what was sent, whatever the body holds.
        let mut stored = item.clone();
        if let Some(version) = answer.as_ref().and_then(answered_version) {
            stored.set_version(Some(version));
        }
        Ok(stored)
    }

    #[instrument(skip(self), fields(kind = %T::KIND))]
    async fn delete(&self, id: ItemId) -> Result<()> {
        self.client.delete(&self.endpoints.item_path(id), id).await
    }
}

/// The version in a patch answer, if the body is a record that has one.
fn answered_version(answer: &Value) -> Option<Version> {
    answer.get("version")?.as_u64()
}
