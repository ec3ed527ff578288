use id_arena::{Arena, Id};

use crate::error::WrapError;
use crate::layout::{Alignment, Line, Lines, Placement, Placements};
use crate::params::LayoutParams;
use crate::rect::Rect;
use crate::units::Pt;

/// A rectangular element to be wrapped: a word, an inline icon, a button
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LayoutBox {
    pub width: Pt,
    pub height: Pt,
    /// The minimum horizontal gap this box needs after it, before the next box on
    /// the same line. The gap actually used is the larger of this and the next box's
    /// own minimum space.
    pub min_space: Pt,
}

impl LayoutBox {
    pub fn new<W: Into<Pt>, H: Into<Pt>, S: Into<Pt>>(width: W, height: H, min_space: S) -> LayoutBox {
        LayoutBox {
            width: width.into(),
            height: height.into(),
            min_space: min_space.into(),
        }
    }

    /// Checks that the box can be laid out, `index` being where it will sit in the collection
    fn validate(self, index: usize) -> Result<LayoutBox, WrapError> {
        let LayoutBox {
            width,
            height,
            min_space,
        } = self;

        if !width.is_finite() || !height.is_finite() || width.is_negative() || height.is_negative() {
            tracing::debug!("rejecting box {} with size {} x {}", index, width, height);
            return Err(WrapError::InvalidBox {
                index,
                width,
                height,
            });
        }
        if !min_space.is_finite() {
            tracing::debug!("rejecting box {} with minimum space {}", index, min_space);
            return Err(WrapError::InvalidSpace { index, min_space });
        }
        Ok(self)
    }
}

/// An ordered collection of boxes along with the parameters used to wrap them.
///
/// Boxes can only be appended; every layout query re-wraps the whole collection from
/// scratch, so parameters can be changed freely between queries.
#[derive(Default)]
pub struct WrappingCollection {
    boxes: Arena<LayoutBox>,
    params: LayoutParams,
}

impl WrappingCollection {
    /// Create an empty collection
    pub fn new(params: LayoutParams) -> WrappingCollection {
        WrappingCollection {
            boxes: Arena::new(),
            params,
        }
    }

    /// Create a collection seeded from parallel sequences of widths, heights, and
    /// minimum spaces. All three must be the same length.
    pub fn from_parts<W, H, S>(
        widths: W,
        heights: H,
        min_spaces: S,
        params: LayoutParams,
    ) -> Result<WrappingCollection, WrapError>
    where
        W: IntoIterator,
        W::Item: Into<Pt>,
        H: IntoIterator,
        H::Item: Into<Pt>,
        S: IntoIterator,
        S::Item: Into<Pt>,
    {
        let widths: Vec<Pt> = widths.into_iter().map(Into::into).collect();
        let heights: Vec<Pt> = heights.into_iter().map(Into::into).collect();
        let min_spaces: Vec<Pt> = min_spaces.into_iter().map(Into::into).collect();

        if widths.len() != heights.len() || widths.len() != min_spaces.len() {
            tracing::debug!(
                "refusing to seed collection from {} widths, {} heights, {} minimum spaces",
                widths.len(),
                heights.len(),
                min_spaces.len()
            );
            return Err(WrapError::MismatchedLengths {
                widths: widths.len(),
                heights: heights.len(),
                min_spaces: min_spaces.len(),
            });
        }

        let mut collection = WrappingCollection::new(params);
        for ((width, height), min_space) in widths.into_iter().zip(heights).zip(min_spaces) {
            collection.add_box(width, height, Some(min_space))?;
        }
        Ok(collection)
    }

    /// Create a collection seeded from parallel sequences of widths and heights, every
    /// box using the parameters' default minimum space
    pub fn from_sizes<W, H>(widths: W, heights: H, params: LayoutParams) -> Result<WrappingCollection, WrapError>
    where
        W: IntoIterator,
        W::Item: Into<Pt>,
        H: IntoIterator,
        H::Item: Into<Pt>,
    {
        let widths: Vec<Pt> = widths.into_iter().map(Into::into).collect();
        let min_spaces = vec![params.default_min_space; widths.len()];
        WrappingCollection::from_parts(widths, heights, min_spaces, params)
    }

    /// Append a box to the end of the collection, returning its id. Boxes without a
    /// `min_space` use the collection's default minimum space.
    pub fn add_box<W: Into<Pt>, H: Into<Pt>>(
        &mut self,
        width: W,
        height: H,
        min_space: Option<Pt>,
    ) -> Result<Id<LayoutBox>, WrapError> {
        let min_space = min_space.unwrap_or(self.params.default_min_space);
        let rect = LayoutBox::new(width, height, min_space).validate(self.boxes.len())?;
        Ok(self.boxes.alloc(rect))
    }

    /// Remove every box, keeping the layout parameters
    pub fn clear(&mut self) {
        self.boxes = Arena::new();
    }

    pub fn get(&self, id: Id<LayoutBox>) -> Option<&LayoutBox> {
        self.boxes.get(id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.len() == 0
    }

    /// The boxes in the order they were added
    pub fn iter(&self) -> impl Iterator<Item = (Id<LayoutBox>, &LayoutBox)> + '_ {
        self.boxes.iter()
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut LayoutParams {
        &mut self.params
    }

    /// Sets the maximum line width. A negative width removes the limit.
    pub fn set_wrap<D: Into<Pt>>(&mut self, width: D) {
        self.params.wrap_width(width);
    }

    /// Sets a fixed height for every line; zero sizes lines by their tallest box
    pub fn set_line_fixed_height<D: Into<Pt>>(&mut self, height: D) {
        self.params.line_fixed_height(height);
    }

    pub fn set_line_height_multiplier(&mut self, factor: f32) {
        self.params.line_height_multiplier(factor);
    }

    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.params.alignment(alignment);
    }

    /// Sets the minimum space used by boxes added from now on without one of their own
    pub fn set_default_min_space<D: Into<Pt>>(&mut self, space: D) {
        self.params.default_min_space(space);
    }

    pub fn set_justify_last_line(&mut self, justify: bool) {
        self.params.justify_last_line(justify);
    }

    /// Wraps the boxes into lines using the current wrap width
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        Lines::new(self.boxes.iter(), self.params.wrap_limit())
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    /// Lays out every box, yielding where each one lands in the order they were added
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        Placements::new(self.lines(), &self.params)
    }

    /// The top-left corner of every box, in the order they were added
    pub fn positions(&self) -> impl Iterator<Item = (Pt, Pt)> + '_ {
        self.placements().map(|placement| placement.position())
    }

    /// Lays out the whole collection and collects the top-left corner of every box,
    /// in the order they were added
    pub fn compute_positions(&self) -> Vec<(Pt, Pt)> {
        let positions: Vec<(Pt, Pt)> = self.positions().collect();
        tracing::trace!(
            "laid out {} boxes with {} ({})",
            positions.len(),
            self.params.alignment,
            self.params.wrap_width
        );
        positions
    }

    /// The smallest rectangle containing every laid out box, or [None] if there are none
    pub fn bounds(&self) -> Option<Rect> {
        self.placements()
            .map(|placement| placement.rect)
            .reduce(|acc, rect| acc.union(&rect))
    }

    /// The total distance the vertical cursor travels over every line
    pub fn content_height(&self) -> Pt {
        self.lines()
            .map(|line| self.params.line_advance(line.max_height))
            .sum()
    }
}
