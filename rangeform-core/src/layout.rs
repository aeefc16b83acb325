//! Host layout contract.
//!
//! A parameter attaches itself to a row of a grid supplied by its host.
//! Hosts that have no grid make attachment a silent no-op.

use std::collections::BTreeMap;

/// Which surface a grid cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SurfaceRole {
    Label,
    Slider,
    Editor,
}

impl SurfaceRole {
    /// Column a parameter row places this surface in.
    pub fn column(self) -> usize {
        match self {
            SurfaceRole::Label => 0,
            SurfaceRole::Slider => 1,
            SurfaceRole::Editor => 2,
        }
    }
}

/// Span and origin of a widget in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

/// Row/column grid a parameter places its surfaces into.
pub trait GridLayout {
    fn add_widget(&mut self, role: SurfaceRole, cell: GridCell);

    /// Take every widget whose origin lies in `row` out of the grid.
    fn remove_widgets(&mut self, row: usize);
}

/// Anything a parameter can be attached to.
pub trait Host {
    /// The host's grid, if it lays out its children in one.
    fn grid_layout(&mut self) -> Option<&mut dyn GridLayout>;
}

/// In-memory grid keyed by origin cell.
///
/// Placing a widget on an occupied origin replaces the previous occupant,
/// so reattaching a parameter to the same row leaves no stale cells.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormGrid {
    cells: BTreeMap<(usize, usize), (SurfaceRole, GridCell)>,
}

impl FormGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn widget_at(&self, row: usize, column: usize) -> Option<SurfaceRole> {
        self.cells.get(&(row, column)).map(|(role, _)| *role)
    }

    /// Roles placed in `row`, in column order.
    pub fn row(&self, row: usize) -> Vec<(usize, SurfaceRole)> {
        self.cells
            .range((row, 0)..(row + 1, 0))
            .map(|(&(_, column), (role, _))| (column, *role))
            .collect()
    }

    /// One past the highest occupied row.
    pub fn row_count(&self) -> usize {
        self.cells
            .values()
            .map(|(_, cell)| cell.row + cell.row_span)
            .max()
            .unwrap_or(0)
    }

    pub fn column_count(&self) -> usize {
        self.cells
            .values()
            .map(|(_, cell)| cell.column + cell.column_span)
            .max()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

impl GridLayout for FormGrid {
    fn add_widget(&mut self, role: SurfaceRole, cell: GridCell) {
        self.cells.insert((cell.row, cell.column), (role, cell));
    }

    fn remove_widgets(&mut self, row: usize) {
        self.cells.retain(|&(origin_row, _), _| origin_row != row);
    }
}

impl Host for FormGrid {
    fn grid_layout(&mut self) -> Option<&mut dyn GridLayout> {
        Some(self)
    }
}

/// A host that lays its children out some other way.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGrid;

impl Host for NoGrid {
    fn grid_layout(&mut self) -> Option<&mut dyn GridLayout> {
        None
    }
}
