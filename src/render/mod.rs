//! Scene construction and asset loading.
//!
//! Spawns the planet, its cloud shell, the satellites and the starfield, and
//! watches asynchronous model loads so satellites join the frame update only
//! once their model exists.

mod background;
pub mod bodies;
pub mod loading;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodiesPlugin;
use self::loading::LoadingPlugin;

/// Plugin aggregating all scene construction.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((BodiesPlugin, LoadingPlugin, BackgroundPlugin));
    }
}
