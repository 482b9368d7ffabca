//! Drives a profile screen (180pt header, 44pt tab strip, long list) through a
//! scripted scroll down and back up, logging every frame that changed.
//!
//! Run with `RUST_LOG=debug cargo run -p profile_screen [config.json]`.

use std::path::Path;

use anyhow::Context;
use collapsing_core::{Color, EdgeInsets, Presenter, Scene, SceneNode, Size};
use collapsing_ui::*;
use serde::Deserialize;

const HEADER: u64 = 1;
const TABS: u64 = 2;
const LIST: u64 = 3;

#[derive(Debug, Deserialize)]
#[serde(default)]
struct DemoConfig {
    layout: CollapsingConfig,
    bar: BarStyle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            layout: CollapsingConfig::default(),
            bar: BarStyle::default().background(Color::from_hex("#FFD60A")),
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DemoConfig> {
    let Some(path) = path else {
        return Ok(DemoConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

struct LogPresenter {
    frame: usize,
}

impl Presenter for LogPresenter {
    fn configure_surface(&mut self, width: f32, height: f32) {
        log::trace!("surface {width}x{height}");
    }

    fn present(&mut self, scene: &Scene) {
        self.frame += 1;
        for node in &scene.nodes {
            match node {
                SceneNode::Place { view, rect } => {
                    log::info!("#{} view {view}: y={:.1} h={:.1}", self.frame, rect.y, rect.h)
                }
                SceneNode::Rect { color, .. } => {
                    log::info!("#{} bar alpha {}", self.frame, color.3)
                }
                SceneNode::Text { text, .. } => log::info!("#{} title {text:?}", self.frame),
                SceneNode::Action { title, .. } => log::info!("#{} action {title:?}", self.frame),
                SceneNode::PushClip { .. } | SceneNode::PopClip => {}
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref().map(Path::new))?;

    let mut screen = CollapsingLayout::new(config.layout);
    screen.configure_header(Some(HEADER), 180.0);
    screen.configure_section(Some(TABS), 44.0);
    screen.configure_content(Some(LIST));
    screen.configure_bar_title("Profile");
    screen.configure_bar_style(config.bar);
    screen.configure_collapsed_actions([BarAction::new(10, "Follow")]);
    screen.set_viewport(Size::new(375.0, 812.0), EdgeInsets::top(88.0));
    screen.layout();

    let mut presenter = LogPresenter { frame: 0 };
    screen.present(&mut presenter);

    let source = ScrollSourceId(LIST);
    let mut list = ScrollState::new(812.0 - 132.0, 5000.0);
    let steps = std::iter::repeat_n(24.0, 12).chain(std::iter::repeat_n(-24.0, 12));
    for dy in steps {
        list.scroll_immediate(dy);
        let response = screen.on_scroll(source, list.get());
        if !response.changes.is_empty() {
            log::debug!(
                "offset {:.0}: {:?} progress {:.2}",
                list.get(),
                response.changes,
                screen.progress()
            );
            screen.present(&mut presenter);
        }
    }

    log::info!(
        "done after {} frames; collapsed={}",
        presenter.frame,
        screen.is_collapsed()
    );
    Ok(())
}
