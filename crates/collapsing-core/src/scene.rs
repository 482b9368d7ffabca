use crate::{Color, Rect};

/// Opaque handle to a host view. The layout never looks inside a view; it only
/// decides where the host should put it.
pub type ViewId = u64;

/// Output of one paint pass, in draw order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SceneNode {
    /// Position a host view.
    Place { view: ViewId, rect: Rect },
    Rect {
        rect: Rect,
        color: Color,
    },
    Text {
        rect: Rect,
        text: String,
        color: Color,
        size: f32,
    },
    /// A navigation bar button.
    Action {
        id: ViewId,
        rect: Rect,
        title: String,
        color: Color,
    },
    PushClip {
        rect: Rect,
    },
    PopClip,
}

impl Scene {
    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
    }

    /// Rect assigned to `view`, if it was placed in this scene.
    pub fn placement(&self, view: ViewId) -> Option<Rect> {
        self.nodes.iter().find_map(|n| match n {
            SceneNode::Place { view: v, rect } if *v == view => Some(*rect),
            _ => None,
        })
    }
}

/// Host side of the paint pass.
pub trait Presenter {
    fn configure_surface(&mut self, width: f32, height: f32);
    fn present(&mut self, scene: &Scene);
}
