use std::array::from_fn;

use crate::dice::{Color, MIN_COLUMN, NUM_ROWS};

/// Text shown in place of a crossed-out box.
pub const MARK: &str = "X";

/// One colored row of numbered boxes.
///
/// Boxes are stored by position. Positions always run left to right; the label
/// printed in a box depends on the row direction.
#[derive(Clone, Debug)]
pub(crate) struct Row {
    color: Color,
    cells: Vec<bool>,
    locked: bool,
}

impl Row {
    fn new(color: Color, num_columns: usize) -> Self {
        Self {
            color,
            cells: vec![false; num_columns],
            locked: false,
        }
    }

    pub(crate) fn color(&self) -> Color {
        self.color
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.locked
    }

    pub(crate) fn label(&self, position: usize) -> u8 {
        let offset = if self.color.is_ascending() {
            position
        } else {
            self.cells.len() - 1 - position
        };
        MIN_COLUMN + offset as u8
    }

    pub(crate) fn is_marked(&self, position: usize) -> bool {
        self.cells.get(position).copied().unwrap_or(false)
    }

    /// The final box of the row; crossing it locks the row.
    pub(crate) fn lock_position(&self) -> usize {
        self.cells.len() - 1
    }

    pub(crate) fn is_lock_cell(&self, position: usize) -> bool {
        position == self.lock_position()
    }

    pub(crate) fn last_marked(&self) -> Option<usize> {
        self.cells.iter().rposition(|marked| *marked)
    }

    /// A box can only be crossed while nothing at or past it has been crossed.
    pub(crate) fn is_excluded(&self, position: usize) -> bool {
        self.last_marked().is_some_and(|last| last >= position)
    }

    pub(crate) fn marked_count(&self) -> usize {
        self.cells.iter().filter(|marked| **marked).count()
    }

    /// Marks counted for scoring. A locked row earns one extra mark.
    pub(crate) fn scoring_marks(&self) -> usize {
        self.marked_count() + usize::from(self.locked)
    }

    /// Crosses out a box. Returns true when the row became locked.
    pub(crate) fn mark(&mut self, position: usize) -> bool {
        debug_assert!(!self.is_excluded(position));
        self.cells[position] = true;
        if self.is_lock_cell(position) {
            self.locked = true;
        }
        self.locked
    }

    pub(crate) fn labels(&self) -> Vec<String> {
        (0..self.cells.len())
            .map(|position| {
                if self.cells[position] {
                    String::from(MARK)
                } else {
                    self.label(position).to_string()
                }
            })
            .collect()
    }
}

/// The four rows of a score sheet in canonical color order.
#[derive(Clone, Debug)]
pub(crate) struct Board {
    rows: [Row; NUM_ROWS],
}

impl Board {
    pub(crate) fn new(num_columns: usize) -> Self {
        Self {
            rows: from_fn(|idx| Row::new(Color::ALL[idx], num_columns)),
        }
    }

    pub(crate) fn rows(&self) -> &[Row; NUM_ROWS] {
        &self.rows
    }

    pub(crate) fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub(crate) fn locked_rows(&self) -> usize {
        self.rows.iter().filter(|row| row.is_locked()).count()
    }

    pub(crate) fn labels(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(Row::labels).collect()
    }
}
