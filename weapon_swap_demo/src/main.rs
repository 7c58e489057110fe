//! Weapon swap demo
//!
//! Builds a headless player rig holding a flail, lets the scene-wide search
//! find the handle and ball, then plays a few seconds of idle and attack
//! animation while the substitutes flip between grip and swing pose.

use std::f32::consts::TAU;
use weapon_swap::glam::Vec3;
use weapon_swap::prelude::scene::{
    dump_hierarchy, ComponentKind, ComponentRef, ModelTemplate, NodeKey, ParticleEffect,
    RendererComponent, Scene, SceneGraph,
};
use weapon_swap::prelude::swap::{
    CandidateSearch, Discovery, SearchConfig, SwapConfig, SwapSession, VisualSwapController,
};
use weapon_swap::prelude::{ManualClock, Result};
use weapon_swap::{swap_info, swap_warn};

const SOURCE: &str = "weapon_swap_demo";

/// Frames per second of the simulated host
const FPS: f32 = 30.0;

struct DemoRig {
    scene: Scene,
    player: NodeKey,
    chain: NodeKey,
    trail: NodeKey,
}

fn build_scene() -> Result<DemoRig> {
    let mut scene = Scene::new();
    let world = scene.add_root("World");
    let terrain = scene.add_child(world, "Terrain")?;
    scene.set_renderer(terrain, RendererComponent::new("ground", &["grass"]));

    let player = scene.add_child(world, "LocalPlayer")?;
    let hand = scene.add_chain(player, &["Armature", "Spine", "Shoulder_R", "Hand_R"])?;
    let weapon = scene.add_child(hand, "Flail(Clone)")?;

    let handle = scene.add_child(weapon, "mdl_8454")?;
    scene.set_renderer(handle, RendererComponent::new("8454_grip", &["wood", "iron"]));

    let chain = scene.add_child(weapon, "Chain")?;
    scene.set_renderer(chain, RendererComponent::bare());
    scene.set_local_position(chain, Vec3::new(0.0, 0.2, 0.0));

    let head = scene.add_child(chain, "mdl_8459")?;
    scene.set_renderer(head, RendererComponent::new("8459_spiked", &["iron"]));
    scene.set_local_position(head, Vec3::new(0.0, -0.8, 0.0));

    let sparks = scene.add_child(head, "Sparks")?;
    scene.set_particles(sparks, ParticleEffect { playing: true, live_particles: 32 });

    let trail = scene.add_child(weapon, "AttackTrail")?;
    scene.set_trail(trail, false);

    Ok(DemoRig { scene, player, chain, trail })
}

fn substitute() -> ModelTemplate {
    ModelTemplate::new("Wrench")
        .with_renderer("wrench_body", &["chrome"])
        .with_child(ModelTemplate::new("Jaw").with_renderer("wrench_jaw", &["chrome"]))
}

fn main() -> Result<()> {
    let DemoRig { mut scene, player, chain, trail } = build_scene()?;
    dump_hierarchy(&scene, player);

    let mut session = SwapSession::new(
        VisualSwapController::new(SwapConfig {
            template: Some(substitute()),
            ..SwapConfig::default()
        }),
        Discovery::SceneWide(CandidateSearch::new(SearchConfig::default())),
    );
    let clock = ManualClock::new(1.0 / FPS);
    let trail_effect = ComponentRef { node: trail, kind: ComponentKind::TrailEffect };

    let mut swinging = false;
    for frame in 0..(4.0 * FPS) as u32 {
        let t = frame as f32 / FPS;

        // 1.0s..2.0s: wide overhead spin of the chain, trail off
        // 2.5s..3.0s: attack animation with the trail on, chain barely moving
        if (1.0..2.0).contains(&t) {
            let angle = (t - 1.0) * TAU * 1.5;
            scene.set_local_position(chain, Vec3::new(angle.sin(), 0.2 + angle.cos(), 0.0));
        } else {
            scene.set_local_position(chain, Vec3::new(0.0, 0.2, 0.0));
        }
        scene.set_enabled(trail_effect, (2.5..3.0).contains(&t));

        match session.tick(&mut scene, &clock) {
            Ok(Some(state)) if state.swinging != swinging => {
                swinging = state.swinging;
                swap_info!(SOURCE, "t={:.2}s {} (effects={}, speed={:.2?})",
                    t,
                    if swinging { "swing pose" } else { "grip pose" },
                    state.effect_driven,
                    state.speed);
            }
            Ok(_) => {}
            Err(e) => {
                swap_warn!(SOURCE, "frame {}: {}", frame, e);
            }
        }
    }

    if let Some(pair) = session.controller().substitutes() {
        swap_info!(SOURCE, "final: grip visible={}, swing visible={}",
            scene.is_visible(pair.grip), scene.is_visible(pair.swing));
    }
    Ok(())
}
