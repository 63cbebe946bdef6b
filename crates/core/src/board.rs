//! Board module - manages the game grid
//!
//! The board is a WIDTH x HEIGHT grid of [`Cell`]s stored in a flat row-major
//! vector (`row * width + col`). Each cell owns at most one [`Item`] by value;
//! an item's position is derived by looking it up ([`Board::locate`]) rather
//! than stored on the item.

use crate::error::LinesError;
use crate::types::{Color, Coord};

/// Identity of a spawned ball, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u32);

/// A colored ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    pub id: ItemId,
    pub color: Color,
}

impl Item {
    pub fn new(id: ItemId, color: Color) -> Self {
        Self { id, color }
    }
}

/// One grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    item: Option<Item>,
    selected: bool,
    preview: Option<Color>,
}

impl Cell {
    pub fn item(&self) -> Option<Item> {
        self.item
    }

    pub fn color(&self) -> Option<Color> {
        self.item.map(|item| item.color)
    }

    pub fn is_empty(&self) -> bool {
        self.item.is_none()
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Color hint of an item scheduled to land here.
    pub fn preview(&self) -> Option<Color> {
        self.preview
    }

    fn reset(&mut self) {
        *self = Cell::default();
    }
}

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, at: Coord) -> Option<usize> {
        if at.row >= self.height || at.col >= self.width {
            return None;
        }
        Some((at.row as usize) * (self.width as usize) + (at.col as usize))
    }

    fn coord_of(&self, idx: usize) -> Coord {
        let w = self.width as usize;
        Coord::new((idx / w) as u8, (idx % w) as u8)
    }

    fn out_of_bounds(&self, at: Coord) -> LinesError {
        LinesError::OutOfBounds {
            at,
            width: self.width,
            height: self.height,
        }
    }

    fn checked_index(&self, at: Coord) -> Result<usize, LinesError> {
        self.index(at).ok_or_else(|| self.out_of_bounds(at))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.index(at).is_some()
    }

    /// Bounds-checked cell access.
    pub fn cell_at(&self, at: Coord) -> Result<&Cell, LinesError> {
        let idx = self.checked_index(at)?;
        Ok(&self.cells[idx])
    }

    /// In bounds and holding no item.
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.index(at).is_some_and(|idx| self.cells[idx].is_empty())
    }

    /// Color of the item at `at`, `None` when empty or out of bounds.
    pub fn color_at(&self, at: Coord) -> Option<Color> {
        self.index(at).and_then(|idx| self.cells[idx].color())
    }

    /// Neighbor in direction `(d_row, d_col)`, if it is on the board.
    pub fn neighbor(&self, at: Coord, d_row: i8, d_col: i8) -> Option<Coord> {
        at.offset(d_row, d_col).filter(|c| self.contains(*c))
    }

    /// Put an item into a cell. Returns whatever item was there before.
    pub fn place(&mut self, at: Coord, item: Item) -> Result<Option<Item>, LinesError> {
        let idx = self.checked_index(at)?;
        Ok(self.cells[idx].item.replace(item))
    }

    /// Remove and return the item in a cell.
    pub fn take(&mut self, at: Coord) -> Result<Option<Item>, LinesError> {
        let idx = self.checked_index(at)?;
        Ok(self.cells[idx].item.take())
    }

    pub fn set_selected(&mut self, at: Coord, selected: bool) -> Result<(), LinesError> {
        let idx = self.checked_index(at)?;
        self.cells[idx].selected = selected;
        Ok(())
    }

    pub fn set_preview(&mut self, at: Coord, color: Option<Color>) -> Result<(), LinesError> {
        let idx = self.checked_index(at)?;
        self.cells[idx].preview = color;
        Ok(())
    }

    /// Wipe item, selection and preview from one cell.
    pub fn reset_cell(&mut self, at: Coord) -> Result<(), LinesError> {
        let idx = self.checked_index(at)?;
        self.cells[idx].reset();
        Ok(())
    }

    /// Wipe every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.reset();
        }
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cells.len()).map(|idx| self.coord_of(idx))
    }

    /// Coordinates of empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.scan(|cell| cell.is_empty())
    }

    /// Coordinates of occupied cells, row-major.
    pub fn filled_cells(&self) -> Vec<Coord> {
        self.scan(|cell| !cell.is_empty())
    }

    fn scan(&self, pred: impl Fn(&Cell) -> bool) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| pred(cell))
            .map(|(idx, _)| self.coord_of(idx))
            .collect()
    }

    /// Where an item currently sits.
    pub fn locate(&self, id: ItemId) -> Option<Coord> {
        self.cells
            .iter()
            .position(|cell| cell.item.is_some_and(|item| item.id == id))
            .map(|idx| self.coord_of(idx))
    }

    /// Get a reference to the internal cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
