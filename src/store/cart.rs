use crate::domain::{CartLine, CartSummary};

/// Cart lines in display order, at most one per product.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole cart.
    pub fn load(&mut self, lines: Vec<CartLine>) {
        self.lines = lines;
    }

    /// Replaces the line for `id` in place, or appends it if the product has no line yet.
    ///
    /// Returns `true` when a new line was appended.
    pub fn upsert(&mut self, id: &str, line: CartLine) -> bool {
        match self.lines.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = line;
                false
            }
            None => {
                self.lines.push(line);
                true
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    pub fn snapshot(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary::from_lines(&self.lines)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
