//! The renderer: owns the table body and the list it last rendered.

use event_list_core::events::{
    record_to_row_model, validate_draft, ControlKind, EventDraft, EventId, EventRecord, FormInput,
};

use crate::dom::{FormKind, FormRow, Row, RowContent, TableBody};
use crate::error::ViewError;

/// Renders event records into a [`TableBody`] and captures form input.
///
/// The renderer never talks to the network. Submitting the add form yields a
/// validated draft for the controller to send.
#[derive(Debug, Default)]
pub struct Renderer {
    body: TableBody,
    events: Vec<EventRecord>,
    renders: usize,
}

impl Renderer {
    pub fn new(body: TableBody) -> Self {
        Self {
            body,
            events: Vec::new(),
            renders: 0,
        }
    }

    /// Clears the body and inserts one display row per record.
    pub fn render_events(&mut self, events: &[EventRecord]) {
        self.events = events.to_vec();
        self.body.clear();
        for event in events {
            self.body.insert_row(Row::display(record_to_row_model(event)));
        }
        self.renders += 1;
    }

    /// Renders again from the last list given to `render_events`.
    pub fn refresh(&mut self) {
        let events = std::mem::take(&mut self.events);
        self.render_events(&events);
    }

    /// Removes the row whose element id names `id`.
    pub fn remove_row(&mut self, id: &EventId) -> Result<(), ViewError> {
        let index = self
            .body
            .position_of(id)
            .ok_or_else(|| ViewError::RowNotFound(id.to_string()))?;
        self.body.remove_row_at(index);
        Ok(())
    }

    /// Appends an empty add-form row and returns its index.
    pub fn show_add_form(&mut self) -> usize {
        self.body.insert_row(Row {
            element_id: None,
            content: RowContent::Form(FormRow::add()),
        })
    }

    /// Replaces the record's row with inputs pre-filled from the record.
    pub fn show_edit_form(&mut self, record: &EventRecord) -> Result<usize, ViewError> {
        let index = self
            .body
            .position_of(&record.id)
            .ok_or_else(|| ViewError::RowNotFound(record.id.to_string()))?;
        if let Some(row) = self.body.row_mut(index) {
            row.content =
                RowContent::Form(FormRow::edit(&record.id, FormInput::from_record(record)));
        }
        Ok(index)
    }

    /// Sets the input values of a form row.
    pub fn fill_form(&mut self, row: usize, inputs: FormInput) -> Result<(), ViewError> {
        match self.body.row_mut(row).map(|row| &mut row.content) {
            Some(RowContent::Form(form)) => {
                form.inputs = inputs;
                Ok(())
            }
            _ => Err(ViewError::NotAForm(row)),
        }
    }

    /// Returns true if `row` is an uncommitted add-form row.
    pub fn is_add_form(&self, row: usize) -> bool {
        self.add_form(row).is_some()
    }

    /// Validates the add form at `row`.
    ///
    /// On a validation failure nothing changes and the failure is returned for
    /// the host to show as a prompt.
    pub fn save_add_form(&self, row: usize) -> Result<EventDraft, ViewError> {
        let form = self.add_form(row).ok_or(ViewError::NotAForm(row))?;
        Ok(validate_draft(&form.inputs)?)
    }

    /// Removes the add form at `row`.
    pub fn cancel_add_form(&mut self, row: usize) -> Result<(), ViewError> {
        if !self.is_add_form(row) {
            return Err(ViewError::NotAForm(row));
        }
        self.body.remove_row_at(row);
        Ok(())
    }

    /// The control kinds present on `row`, in display order.
    pub fn controls_at(&self, row: usize) -> Vec<ControlKind> {
        self.body
            .row(row)
            .map(|row| row.controls().iter().map(|control| control.kind).collect())
            .unwrap_or_default()
    }

    pub fn body(&self) -> &TableBody {
        &self.body
    }

    /// The list last handed to `render_events`.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// How many full renders have happened.
    pub fn render_count(&self) -> usize {
        self.renders
    }

    fn add_form(&self, row: usize) -> Option<&FormRow> {
        self.body
            .row(row)
            .and_then(Row::form)
            .filter(|form| form.kind == FormKind::Add)
    }
}
