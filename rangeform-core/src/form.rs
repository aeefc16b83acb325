//! Parameter form: the parameters of one document, laid out row by row.

use std::sync::mpsc::Sender;

use crate::error::ParameterError;
use crate::factory::{build_parameter, ParseMode};
use crate::layout::Host;
use crate::node::ParameterDocument;
use crate::notify::ValueChanged;
use crate::parameter::{FloatParameter, Parameter};

/// Separator between values in [`ParameterForm::command_arguments`].
pub const ARGUMENT_SEPARATOR: &str = ",";

struct FormEntry {
    /// Index of the source node in the document.
    node_index: usize,
    parameter: Box<dyn Parameter>,
}

/// The parameters built from a document, in document order.
#[derive(Default)]
pub struct ParameterForm {
    entries: Vec<FormEntry>,
}

impl ParameterForm {
    /// Build one parameter per node.
    ///
    /// In lenient mode nodes of unknown kind are skipped with a warning;
    /// in strict mode the first bad node is an error.
    pub fn from_document(
        document: &ParameterDocument,
        mode: ParseMode,
    ) -> Result<Self, ParameterError> {
        let mut entries = Vec::with_capacity(document.parameters.len());
        for (node_index, node) in document.parameters.iter().enumerate() {
            match build_parameter(node, mode) {
                Ok(parameter) => entries.push(FormEntry { node_index, parameter }),
                Err(e) if mode == ParseMode::Lenient => {
                    log::warn!("skipping parameter '{}': {e}", node.name());
                }
                Err(e) => return Err(e),
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attach every parameter to its own row of `host`.
    ///
    /// Returns how many were attached (zero when the host has no grid).
    pub fn attach_all(&mut self, host: &mut dyn Host) -> usize {
        let mut attached = 0;
        for (row, entry) in self.entries.iter_mut().enumerate() {
            if entry.parameter.add_to(host, row) {
                attached += 1;
            }
        }
        attached
    }

    pub fn get(&self, index: usize) -> Option<&dyn Parameter> {
        self.entries
            .get(index)
            .map(|e| e.parameter.as_ref() as &dyn Parameter)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut dyn Parameter> {
        self.entries
            .get_mut(index)
            .map(|e| e.parameter.as_mut() as &mut dyn Parameter)
    }

    pub fn float(&self, index: usize) -> Option<&FloatParameter> {
        self.entries.get(index)?.parameter.as_float()
    }

    pub fn float_mut(&mut self, index: usize) -> Option<&mut FloatParameter> {
        self.entries.get_mut(index)?.parameter.as_float_mut()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.parameter.name() == name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut dyn Parameter> {
        let index = self.position(name)?;
        self.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Parameter> + '_ {
        self.entries.iter().map(|e| e.parameter.as_ref() as &dyn Parameter)
    }

    pub fn reset_all(&mut self) {
        for entry in &mut self.entries {
            entry.parameter.reset();
        }
    }

    /// Write every parameter's value back into its source node.
    ///
    /// `document` must be the one this form was built from.
    pub fn save_into(&self, document: &mut ParameterDocument) {
        for entry in &self.entries {
            match document.parameters.get_mut(entry.node_index) {
                Some(node) => entry.parameter.save_value(node),
                None => log::warn!(
                    "document has no node {} for parameter '{}'",
                    entry.node_index,
                    entry.parameter.name()
                ),
            }
        }
    }

    /// All text values joined by commas, in form order.
    pub fn command_arguments(&self) -> String {
        self.iter()
            .map(|p| p.text_value())
            .collect::<Vec<_>>()
            .join(ARGUMENT_SEPARATOR)
    }

    /// Forward every parameter's change events into `tx`.
    pub fn subscribe_channel(&mut self, tx: &Sender<ValueChanged>) {
        for entry in &mut self.entries {
            entry.parameter.notifier_mut().subscribe_channel(tx.clone());
        }
    }
}

impl std::fmt::Debug for ParameterForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|e| e.parameter.name()))
            .finish()
    }
}
