//! Render surfaces
//!
//! A `RenderSurface` is whatever actually shows elements: a browser document,
//! a GPU scene, or the in-memory [`HeadlessSurface`]. Toast bars attach their
//! tree to a surface and later read back the rendered height of the bar.
//!
//! Height is read through a [`HeightMeasurer`] in the headless surface. Without
//! a custom measurer, [`EstimatedMeasurer`] derives a height from line count.

use indexmap::IndexMap;
use slotmap::{new_key_type, SlotMap};

use crate::element::Element;

new_key_type! {
    /// Handle to an element tree attached to a surface
    pub struct NodeId;
}

/// Something that can display element trees and report their geometry
pub trait RenderSurface {
    /// Attach a tree and return its handle
    fn attach(&mut self, element: Element) -> NodeId;

    /// Replace the tree behind `node`; returns false if the node is detached
    fn replace(&mut self, node: NodeId, element: Element) -> bool;

    /// Remove a tree, returning it if it was attached
    fn detach(&mut self, node: NodeId) -> Option<Element>;

    /// Check if the node is still attached
    fn is_attached(&self, node: NodeId) -> bool;

    /// Rendered height in pixels of the first element carrying `class`
    /// inside `node`
    ///
    /// Returns `None` when the node is detached or no such element exists.
    fn bounding_height(&self, node: NodeId, class: &str) -> Option<f32>;
}

/// Measures the rendered height of an element
pub trait HeightMeasurer {
    fn measure(&self, element: &Element) -> f32;
}

impl<F> HeightMeasurer for F
where
    F: Fn(&Element) -> f32,
{
    fn measure(&self, element: &Element) -> f32 {
        self(element)
    }
}

/// Height estimate from text line count
#[derive(Debug, Clone)]
pub struct EstimatedMeasurer {
    /// Font size in pixels
    pub font_size: f32,
    /// Line height multiplier
    pub line_height: f32,
    /// Vertical padding on each side of the bar
    pub padding_y: f32,
    /// Vertical margin on each side of the message
    pub message_margin_y: f32,
    /// Minimum content height (the icon box)
    pub min_content_height: f32,
}

impl Default for EstimatedMeasurer {
    fn default() -> Self {
        Self {
            font_size: 16.0,
            line_height: 1.3,
            padding_y: 8.0,
            message_margin_y: 4.0,
            min_content_height: 20.0,
        }
    }
}

impl HeightMeasurer for EstimatedMeasurer {
    fn measure(&self, element: &Element) -> f32 {
        let text = element.text_content();
        let lines = text.lines().count().max(1) as f32;
        let text_height = lines * self.font_size * self.line_height + 2.0 * self.message_margin_y;
        2.0 * self.padding_y + text_height.max(self.min_content_height)
    }
}

/// In-memory surface for tests and non-visual hosts
pub struct HeadlessSurface {
    /// Issues node handles
    keys: SlotMap<NodeId, ()>,
    /// Attached trees in attach order
    nodes: IndexMap<NodeId, Element>,
    measurer: Box<dyn HeightMeasurer>,
}

impl HeadlessSurface {
    pub fn new() -> Self {
        Self::with_measurer(EstimatedMeasurer::default())
    }

    pub fn with_measurer(measurer: impl HeightMeasurer + 'static) -> Self {
        Self {
            keys: SlotMap::with_key(),
            nodes: IndexMap::new(),
            measurer: Box::new(measurer),
        }
    }

    /// Currently attached tree behind `node`
    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(&node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// HTML of every attached tree, in attach order
    pub fn to_html(&self) -> String {
        self.nodes
            .values()
            .map(Element::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSurface for HeadlessSurface {
    fn attach(&mut self, element: Element) -> NodeId {
        let node = self.keys.insert(());
        self.nodes.insert(node, element);
        node
    }

    fn replace(&mut self, node: NodeId, element: Element) -> bool {
        match self.nodes.get_mut(&node) {
            Some(slot) => {
                *slot = element;
                true
            }
            None => false,
        }
    }

    fn detach(&mut self, node: NodeId) -> Option<Element> {
        self.keys.remove(node)?;
        self.nodes.shift_remove(&node)
    }

    fn is_attached(&self, node: NodeId) -> bool {
        self.nodes.contains_key(&node)
    }

    fn bounding_height(&self, node: NodeId, class: &str) -> Option<f32> {
        let root = self.nodes.get(&node)?;
        let target = root.find_by_class(class)?;
        Some(self.measurer.measure(target))
    }
}
