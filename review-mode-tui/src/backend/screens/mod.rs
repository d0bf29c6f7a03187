//! 演示屏幕
//!
//! 每个屏幕都只持有共享世界的句柄，数据在每次查询时重新读取。

mod councilors;
mod fleets;
mod research;

use std::rc::Rc;

use review_mode_core::Screen;

use councilors::CouncilorsScreen;
use fleets::FleetsScreen;
use research::ResearchScreen;

use super::world::SharedWorld;

/// 按显示顺序构建所有屏幕
pub fn demo_screens(world: &SharedWorld) -> Vec<Box<dyn Screen>> {
    vec![
        Box::new(CouncilorsScreen::new(Rc::clone(world))),
        Box::new(FleetsScreen::new(Rc::clone(world))),
        Box::new(ResearchScreen::new(Rc::clone(world))),
    ]
}
