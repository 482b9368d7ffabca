use collapsing_core::{Presenter, Rect, Scene, SceneNode};

use crate::controller::CollapsingLayout;

impl CollapsingLayout {
    /// Build the scene for the current state. Empty until the first
    /// successful layout pass.
    ///
    /// Draw order: slot placements inside a clip of the container bounds,
    /// then the overlay bar (background, title, visible actions) while it has
    /// any opacity.
    pub fn paint(&self) -> Scene {
        let mut scene = Scene::default();
        let (Some(viewport), Some(frames)) = (self.viewport(), self.frames()) else {
            return scene;
        };

        let bounds = viewport.bounds();
        scene.push(SceneNode::PushClip { rect: bounds });

        let placed = [
            (self.slot(crate::SlotKey::Header), frames.header),
            (self.slot(crate::SlotKey::Section), frames.section),
            (self.slot(crate::SlotKey::Content), Some(frames.content)),
        ];
        for (slot, rect) in placed {
            if let (Some(slot), Some(rect)) = (slot, rect) {
                scene.push(SceneNode::Place {
                    view: slot.view,
                    rect,
                });
            }
        }

        let state = self.bar_state();
        if state.opacity > 0.0 {
            let bar = self.bar().frame(bounds.w, viewport.safe_top());
            scene.push(SceneNode::Rect {
                rect: bar,
                color: state.background,
            });
            if !state.title.is_empty() {
                scene.push(SceneNode::Text {
                    rect: title_rect(bar),
                    text: state.title.clone(),
                    color: state.title_color,
                    size: state.title_size,
                });
            }
            for (action, rect) in self.bar().action_frames(bar) {
                scene.push(SceneNode::Action {
                    id: action.id,
                    rect,
                    title: action.title,
                    color: state.title_color,
                });
            }
        }

        scene.push(SceneNode::PopClip);
        scene
    }

    /// Paint and hand the scene to `presenter`.
    pub fn present(&self, presenter: &mut dyn Presenter) {
        if let Some(viewport) = self.viewport() {
            presenter.configure_surface(viewport.size.width, viewport.size.height);
        }
        presenter.present(&self.paint());
    }
}

// Title keeps clear of the action column on both sides so it stays centered.
fn title_rect(bar: Rect) -> Rect {
    let side = crate::overlay::ACTION_WIDTH * 2.0;
    let w = (bar.w - side * 2.0).max(0.0);
    Rect::new(bar.x + (bar.w - w) / 2.0, bar.y, w, bar.h)
}
