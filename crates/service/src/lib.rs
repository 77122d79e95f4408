//! Data service access for labboard.
//!
//! This crate provides the [`DataService`] contract the board relies on and
//! its implementations.
//!
//! # Overview
//!
//! - [`DataService`]: list, create, update and delete items of one collection
//! - [`HttpService`]: the implementation over the REST service, built on
//!   [`ServiceClient`] and an [`EndpointLayout`]
//! - [`InMemoryService`]: an in-process implementation for demos and tests
//! - [`ResearcherDirectory`]: the read-only researcher list
//! - [`ServiceError`]: classified failures
//!
//! Requests are never retried. Every request carries the client timeout,
//! and a timeout surfaces as [`ServiceError::Timeout`].
//!
//! # Examples
//!
//! Moving the tasks of a project to a new status:
//!
//! ```no_run
//! use std::time::Duration;
//! use labboard_protocol::BoardItem;
//! use labboard_service::{DataService, EndpointLayout, HttpService, ServiceClient};
//!
//! # async fn example() -> labboard_service::Result<()> {
//! let client = ServiceClient::new("http://localhost:3000", Duration::from_secs(10))?;
//! let tasks = HttpService::tasks(client, &EndpointLayout::default(), 1);
//!
//! for task in tasks.list().await? {
//!     if task.status() == "planning" {
//!         tasks.update(&task.with_status("in-progress")).await?;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod http;
pub mod memory;
pub mod service;

pub use client::{RemoteDirectory, ServiceClient};
pub use error::{Result, ServiceError};
pub use http::{EndpointLayout, Endpoints, HttpService};
pub use memory::{Call, InMemoryService};
pub use service::{DataService, ResearcherDirectory, StaticDirectory};
