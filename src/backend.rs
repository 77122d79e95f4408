//! Where the boards get their data.

use anyhow::Context;
use labboard_board::BoardController;
use labboard_config::Config;
use labboard_protocol::{BoardItem, ItemId, Project, Task, dummy};
use labboard_service::{
    DataService, EndpointLayout, HttpService, InMemoryService, RemoteDirectory,
    ResearcherDirectory, ServiceClient, StaticDirectory,
};
use tracing::info;

/// A board over a boxed data service.
pub type Board<T> = BoardController<T, Box<dyn DataService<T>>>;

/// The REST service, or sample data held in memory.
#[derive(Debug, Clone)]
pub enum Backend {
    /// The configured REST service.
    Remote {
        client: ServiceClient,
        layout: EndpointLayout,
    },
    /// Sample data. Changes last until the process exits.
    Demo,
}

impl Backend {
    /// Picks the backend for a run.
    ///
    /// # Errors
    ///
    /// Returns an error if the service URL cannot be used.
    pub fn from_config(config: &Config, demo: bool) -> anyhow::Result<Self> {
        if demo {
            info!("serving sample data");
            return Ok(Self::Demo);
        }
        let client = ServiceClient::new(&config.service.base_url, config.service.timeout())
            .context("could not create the service client")?;
        info!(base_url = %client.base_url(), "using REST service");
        Ok(Self::Remote {
            client,
            layout: config.service.endpoints.clone(),
        })
    }

    /// Returns the project service.
    #[must_use]
    pub fn projects(&self) -> Box<dyn DataService<Project>> {
        match self {
            Self::Remote { client, layout } => Box::new(HttpService::projects(client.clone(), layout)),
            Self::Demo => Box::new(InMemoryService::new(dummy::dummy_projects())),
        }
    }

    /// Returns the service for the tasks of `project`.
    #[must_use]
    pub fn tasks(&self, project: ItemId) -> Box<dyn DataService<Task>> {
        match self {
            Self::Remote { client, layout } => {
                Box::new(HttpService::tasks(client.clone(), layout, project))
            }
            Self::Demo => Box::new(InMemoryService::new(dummy::dummy_tasks_for(project))),
        }
    }

    /// Returns the researcher directory.
    #[must_use]
    pub fn researchers(&self) -> Box<dyn ResearcherDirectory> {
        match self {
            Self::Remote { client, layout } => {
                Box::new(RemoteDirectory::new(client.clone(), layout.researchers.clone()))
            }
            Self::Demo => Box::new(StaticDirectory::new(dummy::dummy_researchers())),
        }
    }
}

/// Builds a board with the configured columns and unknown status policy.
///
/// # Errors
///
/// Returns an error if the configured columns are unusable.
pub fn board<T: BoardItem>(config: &Config, service: Box<dyn DataService<T>>) -> anyhow::Result<Board<T>> {
    let columns = config.columns(T::KIND)?;
    Ok(BoardController::with_column_set(columns, service)
        .with_policy(config.board(T::KIND).unknown_status))
}
