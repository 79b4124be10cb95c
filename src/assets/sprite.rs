//! Character-art sprites scaled to a size in world units.

use crate::game::Mask;
use ratatui::style::Color;

/// Block used for placeholder sprites.
pub const SOLID_CELL: char = '█';

/// A grid of characters stretched over `width × height` world units.
/// Spaces are transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    rows: Vec<Vec<char>>,
    columns: usize,
    pub color: Color,
    pub width: f64,
    pub height: f64,
}

impl Sprite {
    /// Parse character art. Returns `None` if the art has no visible cell.
    pub fn parse(art: &str, color: Color, width: f64, height: f64) -> Option<Self> {
        let rows: Vec<Vec<char>> = art
            .lines()
            .map(|line| line.trim_end_matches('\r').chars().collect())
            .collect();
        if rows.iter().all(|row| row.iter().all(|c| c.is_whitespace())) {
            return None;
        }
        let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
        Some(Self {
            rows,
            columns,
            color,
            width,
            height,
        })
    }

    /// Opaque rectangle; what a missing asset turns into.
    pub fn solid(color: Color, width: f64, height: f64) -> Self {
        Self {
            rows: vec![vec![SOLID_CELL]],
            columns: 1,
            color,
            width,
            height,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.columns == 1 && self.rows.len() == 1 && self.rows[0][0] == SOLID_CELL
    }

    /// Character at normalized coordinates `u, v ∈ [0, 1)`, or `None` where
    /// transparent or out of range.
    pub fn sample(&self, u: f64, v: f64) -> Option<char> {
        if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
            return None;
        }
        let row = ((v * self.rows.len() as f64) as usize).min(self.rows.len() - 1);
        let col = ((u * self.columns as f64) as usize).min(self.columns - 1);
        match self.rows[row].get(col) {
            Some(c) if !c.is_whitespace() => Some(*c),
            _ => None,
        }
    }

    /// Collision mask with one bit per world unit.
    pub fn mask(&self) -> Mask {
        Mask::from_fn(
            self.width.round() as usize,
            self.height.round() as usize,
            |u, v| self.sample(u, v).is_some(),
        )
    }
}
