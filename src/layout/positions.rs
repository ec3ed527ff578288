use std::iter::{Enumerate, Peekable};

use id_arena::Id;

use super::align::Alignment;
use super::lines::{Line, LineItem};
use crate::collection::LayoutBox;
use crate::params::LayoutParams;
use crate::rect::Rect;
use crate::units::Pt;

/// Where a single box ended up
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Placement {
    /// Which box of the collection this is
    pub id: Id<LayoutBox>,
    /// Index of the line the box was wrapped onto
    pub line: usize,
    /// The box's bounds; `rect.x1, rect.y1` is the position handed to the caller
    pub rect: Rect,
}

impl Placement {
    /// The top-left corner of the box
    pub fn position(&self) -> (Pt, Pt) {
        self.rect.origin()
    }
}

/// Horizontal cursor over the boxes of the line being placed
struct LineCursor {
    index: usize,
    items: std::vec::IntoIter<LineItem>,
    baseline: Pt,
    x: Pt,
    gap_override: Option<Pt>,
}

/// Turns a stream of [Line]s into one [Placement] per box, in the order the boxes
/// were added.
///
/// A vertical cursor starts at 0 and is advanced by each line's height (or the fixed
/// line height, if set) times the line height multiplier *before* that line's boxes
/// are placed. Boxes hang from that cursor: a box's top is `cursor - box.height`, so
/// every box on a line shares the same bottom edge.
pub struct Placements<'p, L>
where
    L: Iterator<Item = Line>,
{
    lines: Peekable<Enumerate<L>>,
    params: &'p LayoutParams,
    y0: Pt,
    current: Option<LineCursor>,
}

impl<'p, L> Placements<'p, L>
where
    L: Iterator<Item = Line>,
{
    pub fn new(lines: L, params: &'p LayoutParams) -> Self {
        Placements {
            lines: lines.enumerate().peekable(),
            params,
            y0: Pt::ZERO,
            current: None,
        }
    }

    /// The vertical cursor after the most recently started line
    pub fn baseline(&self) -> Pt {
        self.y0
    }

    fn start_line(&mut self, index: usize, line: Line, is_last: bool) -> LineCursor {
        self.y0 += self.params.line_advance(line.max_height);

        let alignment = match self.params.alignment {
            Alignment::Justified if is_last && !self.params.justify_last_line => Alignment::Left,
            alignment => alignment,
        };
        let (x, gap_override) = alignment.resolve(&line, self.params.wrap_limit());

        tracing::trace!(
            "placing line {} at y = {} from x = {} ({})",
            index,
            self.y0,
            x,
            alignment
        );

        LineCursor {
            index,
            items: line.items.into_iter(),
            baseline: self.y0,
            x,
            gap_override,
        }
    }
}

impl<'p, L> Iterator for Placements<'p, L>
where
    L: Iterator<Item = Line>,
{
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        loop {
            if let Some(cursor) = self.current.as_mut() {
                if let Some(item) = cursor.items.next() {
                    let top = cursor.baseline - item.height;
                    let rect = Rect::from_origin_size((cursor.x, top), item.width, item.height);
                    cursor.x += item.width + cursor.gap_override.unwrap_or(item.space);
                    return Some(Placement {
                        id: item.id,
                        line: cursor.index,
                        rect,
                    });
                }
            }

            let (index, line) = self.lines.next()?;
            if line.is_empty() {
                tracing::warn!("skipping empty line {}", index);
                continue;
            }
            let is_last = self.lines.peek().is_none();
            self.current = Some(self.start_line(index, line, is_last));
        }
    }
}
