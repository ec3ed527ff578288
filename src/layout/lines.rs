use id_arena::Id;

use crate::collection::LayoutBox;
use crate::units::Pt;

/// A box as placed on a line
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LineItem {
    /// Which box of the collection this is
    pub id: Id<LayoutBox>,
    pub width: Pt,
    pub height: Pt,
    /// The effective gap between this box and the next one on the same line, the
    /// larger of both boxes' minimum spaces. Zero for the last box of a line.
    pub space: Pt,
}

/// A run of consecutive boxes that share a row
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// The boxes on this line, in collection order
    pub items: Vec<LineItem>,
    /// The tallest box on the line
    pub max_height: Pt,
    /// Width of every box plus every gap between them
    pub cum_total_width: Pt,
    /// Width of every box, ignoring spacing
    pub cum_width: Pt,
}

impl Line {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The ids of the boxes on this line, in order
    pub fn ids(&self) -> impl Iterator<Item = Id<LayoutBox>> + '_ {
        self.items.iter().map(|item| item.id)
    }

    /// The uniform gap that stretches this line across `wrap`. Each box is followed
    /// by one such gap, so `cum_width + gap * len == wrap`.
    ///
    /// Returns [None] for an empty line rather than dividing by zero.
    pub fn justified_gap(&self, wrap: Pt) -> Option<Pt> {
        if self.items.is_empty() {
            return None;
        }
        Some((wrap - self.cum_width) / self.items.len() as f32)
    }
}

/// Running totals for the line currently being filled
#[derive(Default)]
struct LineBuilder {
    items: Vec<LineItem>,
    cum_width: Pt,
    cum_space: Pt,
    cum_total_width: Pt,
    max_height: Pt,
    last_min_space: Pt,
}

impl LineBuilder {
    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The gap `rect` would need before it if it were appended now
    fn gap_before(&self, rect: &LayoutBox) -> Pt {
        if self.items.is_empty() {
            Pt::ZERO
        } else {
            rect.min_space.max(self.last_min_space)
        }
    }

    /// What `cum_total_width` would become if `rect` were appended after `gap`
    fn total_width_with(&self, rect: &LayoutBox, gap: Pt) -> Pt {
        (self.cum_width + rect.width) + (self.cum_space + gap)
    }

    fn push(&mut self, id: Id<LayoutBox>, rect: &LayoutBox, gap: Pt) {
        if let Some(previous) = self.items.last_mut() {
            previous.space = gap;
        }

        self.cum_total_width = self.total_width_with(rect, gap);
        self.cum_space += gap;
        self.cum_width += rect.width;
        self.max_height = self.max_height.max(rect.height);
        self.last_min_space = rect.min_space;

        self.items.push(LineItem {
            id,
            width: rect.width,
            height: rect.height,
            space: Pt::ZERO,
        });
    }

    fn finish(self) -> Option<Line> {
        if self.items.is_empty() {
            return None;
        }
        Some(Line {
            items: self.items,
            max_height: self.max_height,
            cum_total_width: self.cum_total_width,
            cum_width: self.cum_width,
        })
    }
}

/// Greedily splits a sequence of boxes into lines no wider than the wrap limit.
///
/// Lines are produced lazily, one per call to [Iterator::next], in a single forward
/// pass over the boxes. A box joins the current line unless the line's total width,
/// plus the gap the box needs, plus the box's own width would exceed `wrap`. The first
/// box of a line is always accepted, so a box wider than `wrap` ends up alone on its
/// own line rather than being dropped. With no wrap limit every box lands on a single
/// line.
pub struct Lines<'a, I>
where
    I: Iterator<Item = (Id<LayoutBox>, &'a LayoutBox)>,
{
    boxes: I,
    wrap: Option<Pt>,
    // the box that overflowed the previous line, which opens the next one
    pending: Option<(Id<LayoutBox>, &'a LayoutBox)>,
    emitted: usize,
}

impl<'a, I> Lines<'a, I>
where
    I: Iterator<Item = (Id<LayoutBox>, &'a LayoutBox)>,
{
    pub fn new(boxes: I, wrap: Option<Pt>) -> Self {
        Lines {
            boxes,
            wrap,
            pending: None,
            emitted: 0,
        }
    }
}

impl<'a, I> Iterator for Lines<'a, I>
where
    I: Iterator<Item = (Id<LayoutBox>, &'a LayoutBox)>,
{
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        let mut builder = LineBuilder::default();

        while let Some((id, rect)) = self.pending.take().or_else(|| self.boxes.next()) {
            let gap = builder.gap_before(rect);

            if let Some(wrap) = self.wrap {
                if !builder.is_empty() && builder.total_width_with(rect, gap) > wrap {
                    self.pending = Some((id, rect));
                    break;
                }
            }

            builder.push(id, rect, gap);
        }

        let line = builder.finish()?;
        tracing::trace!(
            "line {}: {} boxes, {} of {:?}",
            self.emitted,
            line.len(),
            line.cum_total_width,
            self.wrap
        );
        self.emitted += 1;
        Some(line)
    }
}
