//! The controller: loads the list, routes clicks, and talks to the collection.
//!
//! Every network failure is caught here and logged. Nothing is retried and a
//! failed call leaves the table as it was.

use event_list_client::{ClientError, EventsApi};
use event_list_core::events::{
    plan, Action, Command, ControlKind, EventCache, EventDraft, EventId, EventPatch, EventRecord,
    FormInput, ValidationFailure,
};

use crate::dom::{delegate, Click};
use crate::error::ViewError;
use crate::view::Renderer;

/// Session state of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing loaded yet.
    Idle,
    /// Fetching the list.
    Loading,
    /// Waiting for user input.
    Ready,
    /// One network round trip for a user action is in flight.
    Busy,
}

/// A call to the collection endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    List,
    Create,
    Update,
    Remove,
}

/// What handling one user action amounted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The list was fetched and rendered.
    Loaded { count: usize },
    /// An add form was appended at `row`.
    FormOpened { row: usize },
    /// The add form was discarded.
    Discarded,
    Created(EventRecord),
    Deleted(EventId),
    /// The row switched to inline editing.
    Editing(EventId),
    Updated(EventId),
    /// Form input was invalid; nothing was sent.
    Rejected(ValidationFailure),
    /// A call failed and was logged.
    Failed {
        operation: Operation,
        status: Option<u16>,
    },
    /// The click did not map to anything.
    Ignored,
}

/// Wires the cache, the renderer and the collection client together.
pub struct Controller<A> {
    api: A,
    cache: EventCache,
    view: Renderer,
    phase: Phase,
    delegating: bool,
}

impl<A: EventsApi> Controller<A> {
    pub fn new(api: A, cache: EventCache, view: Renderer) -> Self {
        Self {
            api,
            cache,
            view,
            phase: Phase::Idle,
            delegating: false,
        }
    }

    /// Fetches the list, loads it into the cache, renders it, and starts
    /// handling row clicks.
    ///
    /// On failure the cache and the table are left untouched.
    pub async fn init(&mut self) -> Outcome {
        let previous = self.phase;
        self.phase = Phase::Loading;

        match self.api.list().await {
            Ok(events) => {
                let count = events.len();
                self.view.render_events(&events);
                self.cache.load(events);
                self.delegating = true;
                self.phase = Phase::Ready;
                tracing::info!(count, "Loaded events");
                Outcome::Loaded { count }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load events");
                self.phase = if previous == Phase::Idle {
                    Phase::Idle
                } else {
                    Phase::Ready
                };
                failed(Operation::List, &e)
            }
        }
    }

    /// The "add event" button.
    pub fn open_add_form(&mut self) -> Outcome {
        let row = self.view.show_add_form();
        Outcome::FormOpened { row }
    }

    /// Types into the form at `row`.
    pub fn fill_form(&mut self, row: usize, inputs: FormInput) -> Result<(), ViewError> {
        self.view.fill_form(row, inputs)
    }

    /// Handles a click anywhere in the table body.
    pub async fn click(&mut self, click: Click) -> Outcome {
        if self.view.is_add_form(click.row) {
            return match click.control {
                ControlKind::SaveNew => self.submit_add_form(click.row).await,
                ControlKind::CancelNew => match self.view.cancel_add_form(click.row) {
                    Ok(()) => Outcome::Discarded,
                    Err(e) => {
                        tracing::warn!(error = %e, "Cancel ignored");
                        Outcome::Ignored
                    }
                },
                _ => Outcome::Ignored,
            };
        }

        if !self.delegating {
            tracing::debug!(?click, "Click before the list was loaded");
            return Outcome::Ignored;
        }

        match delegate(self.view.body(), &click) {
            Some(action) => self.dispatch(action).await,
            None => Outcome::Ignored,
        }
    }

    /// Carries out a row action.
    pub async fn dispatch(&mut self, action: Action) -> Outcome {
        tracing::debug!(?action, "Dispatching");
        match plan(&action, &self.cache) {
            Command::Remove(id) => self.handle_delete(id).await,
            Command::BeginEdit(record) => match self.view.show_edit_form(&record) {
                Ok(_) => Outcome::Editing(record.id),
                Err(e) => {
                    tracing::warn!(error = %e, "Cannot edit row");
                    Outcome::Ignored
                }
            },
            Command::Update { id, patch } => self.handle_update(id, patch).await,
            Command::Reload => self.init().await,
            Command::Reject(failure) => {
                tracing::warn!(error = %failure, "Edit rejected");
                Outcome::Rejected(failure)
            }
            Command::Ignore(reason) => {
                tracing::warn!(id = %action.id, ?reason, "Action ignored");
                Outcome::Ignored
            }
        }
    }

    /// Validates the add form, sends the draft, then re-renders.
    async fn submit_add_form(&mut self, row: usize) -> Outcome {
        let draft = match self.view.save_add_form(row) {
            Ok(draft) => draft,
            Err(ViewError::Validation(failure)) => {
                tracing::warn!(error = %failure, "Add form rejected");
                return Outcome::Rejected(failure);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Save ignored");
                return Outcome::Ignored;
            }
        };

        let outcome = self.handle_add(draft).await;
        self.view.refresh();
        outcome
    }

    /// Creates the event, then renders a freshly fetched list.
    pub async fn handle_add(&mut self, draft: EventDraft) -> Outcome {
        self.phase = Phase::Busy;
        let outcome = match self.api.create(&draft).await {
            Ok(created) => {
                tracing::info!(id = %created.id, "Created event");
                self.cache.add(created.clone());
                match self.api.list().await {
                    Ok(events) => self.view.render_events(&events),
                    Err(e) => tracing::error!(error = %e, "Failed to load events"),
                }
                Outcome::Created(created)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to add event");
                failed(Operation::Create, &e)
            }
        };
        self.phase = Phase::Ready;
        outcome
    }

    async fn handle_delete(&mut self, id: EventId) -> Outcome {
        self.phase = Phase::Busy;
        let outcome = match self.api.remove(&id).await {
            Ok(_) => {
                tracing::info!(%id, "Deleted event");
                self.cache.remove(&id);
                if let Err(e) = self.view.remove_row(&id) {
                    tracing::warn!(error = %e, "Deleted event had no row");
                }
                Outcome::Deleted(id)
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "Failed to delete event");
                failed(Operation::Remove, &e)
            }
        };
        self.phase = Phase::Ready;
        outcome
    }

    async fn handle_update(&mut self, id: EventId, patch: EventPatch) -> Outcome {
        self.phase = Phase::Busy;
        match self.api.update(&id, &patch).await {
            Ok(_) => {
                tracing::info!(%id, "Updated event");
                self.cache.patch(&id, &patch);
                self.phase = Phase::Ready;
                // A failed reload is already logged; the update itself went through.
                self.init().await;
                Outcome::Updated(id)
            }
            Err(e) => {
                tracing::error!(error = %e, %id, "Failed to save edited event");
                self.phase = Phase::Ready;
                failed(Operation::Update, &e)
            }
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cache(&self) -> &EventCache {
        &self.cache
    }

    pub fn view(&self) -> &Renderer {
        &self.view
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

fn failed(operation: Operation, error: &ClientError) -> Outcome {
    Outcome::Failed {
        operation,
        status: error.status(),
    }
}
