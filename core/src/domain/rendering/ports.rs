use crate::domain::rendering::entities::MarkupBlock;

/// Converts markup text into structured blocks. Must be pure and total.
pub trait MarkupRenderer: Send + Sync {
    fn render(&self, text: &str) -> Vec<MarkupBlock>;
}
