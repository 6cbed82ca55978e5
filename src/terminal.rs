//! Text output for laid out word stacks

use wrapping_hstack::{Arrangement, ItemModel, LinePlan, RenderSink, Spacer};

/// Character grid the arranged words are drawn into
pub struct Canvas {
    width: usize,
    rows: Vec<Vec<char>>,
}

impl Canvas {
    pub fn new(width: usize) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    /// Draw every placed word at its rounded column and row
    pub fn draw(&mut self, words: &ItemModel<String>, arrangement: &Arrangement) {
        let height = arrangement.height.round() as usize;
        self.rows = vec![vec![' '; self.width]; height];

        for placement in &arrangement.placements {
            let Some(word) = words.get(placement.index).payload() else {
                continue;
            };

            let row = placement.origin.y.round() as usize;
            let column = placement.origin.x.round().max(0.0) as usize;
            let Some(cells) = self.rows.get_mut(row) else {
                continue;
            };

            for (offset, ch) in word.chars().enumerate() {
                let x = column + offset;
                if x >= cells.len() {
                    // Oversized words run past the right border.
                    cells.resize(x + 1, ' ');
                }
                cells[x] = ch;
            }
        }
    }

    /// Rows framed by a border marking the container width
    pub fn lines(&self) -> Vec<String> {
        let border = format!("+{}+", "-".repeat(self.width));
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(border.clone());
        lines.extend(self.rows.iter().map(|row| {
            let text: String = row.iter().collect();
            format!("|{}|", text)
        }));
        lines.push(border);
        lines
    }
}

/// Sink that logs the spacer structure of every line
#[derive(Default)]
pub struct PlanLog {
    current: Vec<String>,
    pub lines: usize,
    pub words: usize,
}

impl RenderSink<String> for PlanLog {
    fn begin_line(&mut self, _line_index: usize, _plan: &LinePlan) {
        self.current.clear();
    }

    fn spacer(&mut self, spacer: Spacer) {
        let token = match spacer {
            Spacer::Fixed(width) => format!("[{width}]"),
            Spacer::Flexible { min } => format!("<{min}..>"),
            Spacer::Padding { share } => format!("({share})"),
        };
        self.current.push(token);
    }

    fn item(&mut self, _index: usize, payload: &String) {
        self.words += 1;
        self.current.push(payload.clone());
    }

    fn end_line(&mut self, line_index: usize, plan: &LinePlan) {
        self.lines += 1;
        log::debug!(
            "line {line_index} [{}, {}): {}",
            plan.line.start,
            plan.line.end,
            self.current.join(" ")
        );
    }
}
