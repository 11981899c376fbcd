//! In-memory model of the events table body and the delegation adapter.
//!
//! Rows carry an element id (the event id as text) and controls tagged with a
//! `data-id`, exactly what a browser table would expose. [`delegate`] reads a
//! click on that structure and produces a tagged [`Action`].

use event_list_core::events::{
    ids_equal, Action, ActionKind, Control, ControlKind, EventId, FormInput, RowModel,
};

/// Which form a form row holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// Uncommitted row for a new event.
    Add,
    /// Inline edit of an existing event.
    Edit,
}

/// A row whose cells are inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRow {
    pub kind: FormKind,
    pub inputs: FormInput,
    pub controls: Vec<Control>,
}

impl FormRow {
    pub fn add() -> Self {
        Self {
            kind: FormKind::Add,
            inputs: FormInput::default(),
            controls: vec![
                Control::untagged(ControlKind::SaveNew),
                Control::untagged(ControlKind::CancelNew),
            ],
        }
    }

    pub fn edit(id: &EventId, inputs: FormInput) -> Self {
        let id = id.to_string();
        Self {
            kind: FormKind::Edit,
            inputs,
            controls: vec![
                Control::tagged(ControlKind::SaveEdit, id.clone()),
                Control::tagged(ControlKind::CancelEdit, id),
            ],
        }
    }
}

/// What a row currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowContent {
    Display(RowModel),
    Form(FormRow),
}

/// One `<tr>` of the table body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub element_id: Option<String>,
    pub content: RowContent,
}

impl Row {
    pub fn display(model: RowModel) -> Self {
        Self {
            element_id: Some(model.element_id.clone()),
            content: RowContent::Display(model),
        }
    }

    pub fn controls(&self) -> &[Control] {
        match &self.content {
            RowContent::Display(model) => &model.controls,
            RowContent::Form(form) => &form.controls,
        }
    }

    pub fn control(&self, kind: ControlKind) -> Option<&Control> {
        self.controls().iter().find(|control| control.kind == kind)
    }

    pub fn form(&self) -> Option<&FormRow> {
        match &self.content {
            RowContent::Form(form) => Some(form),
            RowContent::Display(_) => None,
        }
    }

    /// Returns true if this row's element id names `id`.
    pub fn is_for(&self, id: &EventId) -> bool {
        self.element_id
            .as_deref()
            .is_some_and(|element_id| ids_equal(&EventId::from(element_id), id))
    }
}

/// The table body element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableBody {
    rows: Vec<Row>,
}

impl TableBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Appends a row and returns its index.
    pub fn insert_row(&mut self, row: Row) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Removes the row at `index`.
    pub fn remove_row_at(&mut self, index: usize) -> Option<Row> {
        (index < self.rows.len()).then(|| self.rows.remove(index))
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// Index of the row whose element id names `id`.
    pub fn position_of(&self, id: &EventId) -> Option<usize> {
        self.rows.iter().position(|row| row.is_for(id))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A click on one control of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Click {
    pub row: usize,
    pub control: ControlKind,
}

impl Click {
    pub fn new(row: usize, control: ControlKind) -> Self {
        Self { row, control }
    }
}

/// Delegated handling for the table body.
///
/// Maps clicks on edit/delete controls and on inline-edit save/cancel controls
/// to actions. Add-form controls are wired by the renderer itself and yield
/// `None` here, as do clicks that hit no control.
pub fn delegate(body: &TableBody, click: &Click) -> Option<Action> {
    let row = body.row(click.row)?;
    let control = row.control(click.control)?;

    let kind = match click.control {
        ControlKind::Delete => ActionKind::Delete,
        ControlKind::Edit => ActionKind::Edit,
        ControlKind::SaveEdit => ActionKind::Save(row.form()?.inputs.clone()),
        ControlKind::CancelEdit => ActionKind::Cancel,
        ControlKind::SaveNew | ControlKind::CancelNew => return None,
    };

    // Display rows are addressed by their element id, form controls by data-id.
    let id = match click.control {
        ControlKind::Delete | ControlKind::Edit => row
            .element_id
            .as_deref()
            .or(control.data_id.as_deref())?,
        _ => control.data_id.as_deref()?,
    };

    Some(Action::new(kind, id))
}
