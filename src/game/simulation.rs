//! Simulation Step
//!
//! Advances the world by one frame. Movement constants are per frame; only the
//! shoot cooldown uses real elapsed time. The phases run in a fixed order and
//! each one reads what the previous phase wrote:
//!
//! 1. Horizontal intent from input
//! 2. Gravity
//! 3. Position integration
//! 4. Dead-zone camera tracking
//! 5. Parallax background offset
//! 6. Shooting (cooldown)
//! 7. Bullet advance and culling
//! 8. Platform collision
//! 9. Jump trigger
//! 10. Coin pickup
//! 11. Canvas bounds clamp

use std::time::Duration;
use crate::config::GameConfig;
use crate::input::InputFlags;
use super::collision::{resolve_platform, Contact};
use super::components::{Bullet, Facing};
use super::event::GameEvent;
use super::rect::Rect;
use super::world::World;

/// Run one simulation step
pub fn step(world: &mut World, input: &InputFlags, config: &GameConfig, elapsed: Duration) {
    let canvas_width = config.canvas.width;
    let canvas_height = config.canvas.height;

    apply_horizontal_intent(world, input, config.physics.move_speed);

    world.player.velocity_y += config.physics.gravity;
    world.player.x += world.player.velocity_x;
    world.player.y += world.player.velocity_y;

    world.camera.track(&mut world.player, &config.camera, canvas_width);
    world.background_x = world.camera.parallax_offset(config.camera.parallax_factor, canvas_width);

    update_shooting(world, input, config, elapsed);
    update_bullets(world, canvas_width);

    resolve_platforms(world);

    if input.up && !world.player.jumping && world.player.on_ground {
        world.player.velocity_y = config.physics.jump_force;
        world.player.jumping = true;
    }

    collect_coins(world, config.scoring.coin_reward);
    clamp_to_canvas(world, canvas_width, canvas_height);
}

/// Left wins when both directions are held
fn apply_horizontal_intent(world: &mut World, input: &InputFlags, move_speed: f32) {
    let player = &mut world.player;
    if input.left {
        player.velocity_x = -move_speed;
        player.facing = Facing::Left;
    } else if input.right {
        player.velocity_x = move_speed;
        player.facing = Facing::Right;
    } else {
        player.velocity_x = 0.0;
    }
}

/// Tick the cooldown, then fire from the leading edge if allowed
fn update_shooting(world: &mut World, input: &InputFlags, config: &GameConfig, elapsed: Duration) {
    world.shoot_cooldown = world.shoot_cooldown.saturating_sub(elapsed);

    if !input.shoot || !world.shoot_cooldown.is_zero() {
        return;
    }

    let player = &world.player;
    let weapon = &config.weapon;
    let screen_x = match player.facing {
        Facing::Right => player.x + player.width,
        Facing::Left => player.x,
    };

    world.bullets.push(Bullet {
        rect: Rect::new(
            world.camera.to_world_x(screen_x),
            player.y + player.height / 2.0,
            weapon.bullet_width,
            weapon.bullet_height,
        ),
        direction: player.facing,
        speed: weapon.bullet_speed,
    });
    world.shoot_cooldown = weapon.shoot_cooldown();
    world.events.send(GameEvent::ShotFired);
}

/// Move every bullet, then drop the ones outside the visible window
fn update_bullets(world: &mut World, canvas_width: f32) {
    let camera = world.camera;
    world.bullets.retain_mut(|bullet| {
        bullet.advance();
        camera.is_visible_x(bullet.rect.x, canvas_width)
    });
}

/// Resolve each overlapping platform independently, in level order
fn resolve_platforms(world: &mut World) {
    world.player.on_ground = false;
    for platform in &world.platforms {
        let screen = world.camera.to_screen(platform.rect);
        if let Some(contact) = resolve_platform(&mut world.player, screen) {
            if contact != Contact::Landed {
                log::trace!("platform contact {:?} at world x {}", contact, platform.rect.x);
            }
        }
    }
}

fn collect_coins(world: &mut World, reward: u32) {
    let player_rect = world.player.rect();
    let mut collected_any = false;
    for coin in world.coins.iter_mut().filter(|c| !c.is_collected()) {
        if player_rect.overlaps(&world.camera.to_screen(coin.rect)) && coin.collect() {
            world.score = world.score.saturating_add(reward);
            world.events.send(GameEvent::CoinCollected { score: world.score });
            log::debug!("coin collected at world x {}, score {}", coin.rect.x, world.score);
            collected_any = true;
        }
    }
    if collected_any && world.coins_remaining() == 0 {
        log::info!("All coins collected, final score {}", world.score);
    }
}

fn clamp_to_canvas(world: &mut World, canvas_width: f32, canvas_height: f32) {
    let player = &mut world.player;
    if player.x < 0.0 {
        player.x = 0.0;
    }
    if player.x + player.width > canvas_width {
        player.x = canvas_width - player.width;
    }
    if player.bottom() > canvas_height {
        player.y = canvas_height - player.height;
        player.velocity_y = 0.0;
        player.jumping = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::Level;

    const FRAME: Duration = Duration::from_millis(16);

    fn config() -> GameConfig {
        GameConfig::default()
    }

    fn world_with(player: Rect, platforms: Vec<Rect>, coins: Vec<Rect>) -> World {
        World::from_level(&Level { player, platforms, coins })
    }

    fn idle() -> InputFlags {
        InputFlags::default()
    }

    #[test]
    fn test_first_idle_step_applies_gravity() {
        let mut world = World::from_level(&Level::default());
        step(&mut world, &idle(), &config(), FRAME);
        assert_eq!(world.player.velocity_y, 0.5);
        assert_eq!(world.player.y, 200.5);
        assert_eq!(world.player.x, 50.0);
        assert!(!world.player.on_ground);
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_falls_and_lands_once_on_ground() {
        let mut world = World::from_level(&Level::default());
        let mut landings = 0;

        for _ in 0..200 {
            let was_on_ground = world.player.on_ground;
            step(&mut world, &idle(), &config(), FRAME);
            if world.player.on_ground && !was_on_ground {
                landings += 1;
                assert_eq!(world.player.velocity_y, 0.0);
            }
        }

        assert_eq!(landings, 1);
        assert!(world.events.is_empty());
        assert_eq!(world.player.y, 350.0 - 32.0);
        assert!(world.player.on_ground);
        assert!(!world.player.jumping);
    }

    #[test]
    fn test_landing_clears_jumping_in_same_step() {
        let mut world = world_with(
            Rect::new(100.0, 310.0, 32.0, 32.0),
            vec![Rect::new(0.0, 350.0, 800.0, 20.0)],
            vec![],
        );
        world.player.jumping = true;
        world.player.velocity_y = 9.5;
        step(&mut world, &idle(), &config(), FRAME);
        assert_eq!(world.player.y, 318.0);
        assert_eq!(world.player.velocity_y, 0.0);
        assert!(!world.player.jumping);
    }

    #[test]
    fn test_jump_passes_up_through_platform_and_lands_on_top() {
        let mut world = world_with(
            Rect::new(310.0, 318.0, 32.0, 32.0),
            vec![Rect::new(0.0, 350.0, 800.0, 20.0), Rect::new(300.0, 250.0, 100.0, 20.0)],
            vec![],
        );
        step(&mut world, &idle(), &config(), FRAME);
        assert!(world.player.on_ground);

        let jump = InputFlags { up: true, ..Default::default() };
        step(&mut world, &jump, &config(), FRAME);
        assert!(world.player.jumping);

        let mut min_y = world.player.y;
        for _ in 0..120 {
            step(&mut world, &idle(), &config(), FRAME);
            min_y = min_y.min(world.player.y);
        }

        // Rises 0.5 * (1 + 2 + ... + 23) = 138 from 318, clear of the platform
        assert_eq!(min_y, 180.0);
        assert_eq!(world.player.y, 250.0 - 32.0);
        assert_eq!(world.player.velocity_y, 0.0);
        assert!(world.player.on_ground);
        assert!(!world.player.jumping);
    }

    #[test]
    fn test_canvas_floor_stops_fall_and_clears_jumping() {
        let mut world = world_with(Rect::new(100.0, 370.0, 32.0, 32.0), vec![], vec![]);
        world.player.jumping = true;
        world.player.velocity_y = 5.0;
        step(&mut world, &idle(), &config(), FRAME);
        assert_eq!(world.player.bottom(), 400.0);
        assert_eq!(world.player.velocity_y, 0.0);
        assert!(!world.player.jumping);
        assert!(!world.player.on_ground);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut world = world_with(Rect::new(200.0, 0.0, 32.0, 32.0), vec![], vec![]);
        let input = InputFlags { left: true, right: true, ..Default::default() };
        step(&mut world, &input, &config(), FRAME);
        assert_eq!(world.player.velocity_x, -5.0);
        assert_eq!(world.player.facing, Facing::Left);
        assert_eq!(world.player.x, 195.0);
    }

    #[test]
    fn test_jump_from_ground() {
        let mut world = World::from_level(&Level::default());
        for _ in 0..100 {
            step(&mut world, &idle(), &config(), FRAME);
        }
        assert!(world.player.on_ground);

        let jump = InputFlags { up: true, ..Default::default() };
        step(&mut world, &jump, &config(), FRAME);
        assert_eq!(world.player.velocity_y, -12.0);
        assert!(world.player.jumping);

        // Holding jump in the air does not re-trigger
        step(&mut world, &jump, &config(), FRAME);
        assert_eq!(world.player.velocity_y, -11.5);
        assert!(world.player.jumping);
    }

    #[test]
    fn test_no_jump_while_airborne() {
        let mut world = world_with(Rect::new(100.0, 50.0, 32.0, 32.0), vec![], vec![]);
        let jump = InputFlags { up: true, ..Default::default() };
        step(&mut world, &jump, &config(), FRAME);
        assert!(!world.player.jumping);
        assert_eq!(world.player.velocity_y, 0.5);
    }

    #[test]
    fn test_camera_scroll_repins_player() {
        let mut world = world_with(Rect::new(478.0, 100.0, 32.0, 32.0), vec![], vec![]);
        let right = InputFlags { right: true, ..Default::default() };
        step(&mut world, &right, &config(), FRAME);
        assert_eq!(world.camera.x, 5.0);
        assert_eq!(world.player.x, 800.0 * 0.6);
        assert_eq!(world.background_x, -2.5);
    }

    #[test]
    fn test_stays_inside_canvas() {
        let cfg = config();
        let mut world = world_with(Rect::new(10.0, 0.0, 32.0, 32.0), vec![], vec![]);
        let left = InputFlags { left: true, ..Default::default() };
        for _ in 0..300 {
            step(&mut world, &left, &cfg, FRAME);
            let p = &world.player;
            assert!(p.x >= 0.0 && p.x <= cfg.canvas.width - p.width);
            assert!(p.bottom() <= cfg.canvas.height);
        }
        assert_eq!(world.player.x, 0.0);
        assert_eq!(world.player.y, 400.0 - 32.0);
        assert_eq!(world.camera.x, 0.0);

        let right = InputFlags { right: true, ..Default::default() };
        for _ in 0..300 {
            step(&mut world, &right, &cfg, FRAME);
            let p = &world.player;
            assert!(p.x >= 0.0 && p.x <= cfg.canvas.width - p.width);
            assert!(p.bottom() <= cfg.canvas.height);
        }
    }

    #[test]
    fn test_coin_scores_exactly_once() {
        let mut world = world_with(
            Rect::new(100.0, 318.0, 32.0, 32.0),
            vec![Rect::new(0.0, 350.0, 800.0, 20.0)],
            vec![Rect::new(110.0, 330.0, 15.0, 15.0)],
        );
        for _ in 0..10 {
            step(&mut world, &idle(), &config(), FRAME);
        }
        assert_eq!(world.score, 10);
        assert!(world.coins[0].is_collected());
        let pickups: Vec<_> = world
            .events
            .drain()
            .filter(|e| matches!(e, GameEvent::CoinCollected { .. }))
            .collect();
        assert_eq!(pickups, vec![GameEvent::CoinCollected { score: 10 }]);
    }

    #[test]
    fn test_coin_collision_uses_camera() {
        // Coin at world x 1200 is on screen at 400 once the camera has scrolled 800.
        let mut world = world_with(
            Rect::new(400.0, 100.0, 32.0, 32.0),
            vec![],
            vec![Rect::new(1200.0, 100.0, 15.0, 15.0)],
        );
        step(&mut world, &idle(), &config(), FRAME);
        assert_eq!(world.score, 0);

        world.camera.x = 800.0;
        step(&mut world, &idle(), &config(), FRAME);
        assert_eq!(world.score, 10);
    }

    #[test]
    fn test_bullet_spawns_at_leading_edge() {
        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot = InputFlags { shoot: true, ..Default::default() };
        step(&mut world, &shoot, &config(), FRAME);
        assert_eq!(world.bullets.len(), 1);
        // Spawned at x = 132 (right edge), advanced once in the same step
        assert_eq!(world.bullets[0].rect.x, 142.0);
        assert_eq!(world.bullets[0].rect.y, 200.5 + 16.0);
        assert_eq!(world.bullets[0].direction, Facing::Right);
        assert!(world.events.drain().any(|e| e == GameEvent::ShotFired));

        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot_left = InputFlags { shoot: true, left: true, ..Default::default() };
        step(&mut world, &shoot_left, &config(), FRAME);
        // Player moved to 95, spawned at its left edge, advanced once
        assert_eq!(world.bullets[0].rect.x, 85.0);
        assert_eq!(world.bullets[0].direction, Facing::Left);
    }

    #[test]
    fn test_bullet_travel_is_linear() {
        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot = InputFlags { shoot: true, ..Default::default() };
        step(&mut world, &shoot, &config(), FRAME);
        let spawn_x = 132.0;

        for n in 2..=20 {
            step(&mut world, &idle(), &config(), FRAME);
            assert_eq!(world.bullets.len(), 1);
            assert_eq!(world.bullets[0].rect.x, spawn_x + 10.0 * n as f32);
        }
    }

    #[test]
    fn test_bullet_culled_when_leaving_view() {
        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot = InputFlags { shoot: true, ..Default::default() };
        step(&mut world, &shoot, &config(), FRAME);

        // 132 + 10n <= 800 holds up to n = 66; n = 67 lands at 802.
        for _ in 2..=66 {
            step(&mut world, &idle(), &config(), FRAME);
        }
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].rect.x, 792.0);
        step(&mut world, &idle(), &config(), FRAME);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_left_bullet_culled_past_camera_left_edge() {
        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot_left = InputFlags { shoot: true, left: true, ..Default::default() };
        step(&mut world, &shoot_left, &config(), FRAME);
        assert_eq!(world.bullets[0].rect.x, 85.0);

        // 95 - 10n stays >= 0 up to n = 9; n = 10 lands at -5.
        for _ in 2..=9 {
            step(&mut world, &idle(), &config(), FRAME);
        }
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].rect.x, 5.0);
        step(&mut world, &idle(), &config(), FRAME);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_bullet_culled_when_camera_scrolls_past_it() {
        let mut world = world_with(Rect::new(480.0, 200.0, 32.0, 32.0), vec![], vec![]);
        world.bullets.push(Bullet {
            rect: Rect::new(10.0, 216.0, 10.0, 4.0),
            direction: Facing::Right,
            speed: 1.0,
        });
        let right = InputFlags { right: true, ..Default::default() };

        // Camera gains 5 per step, the bullet 1
        step(&mut world, &right, &config(), FRAME);
        step(&mut world, &right, &config(), FRAME);
        assert_eq!(world.camera.x, 10.0);
        assert_eq!(world.bullets.len(), 1);
        assert_eq!(world.bullets[0].rect.x, 12.0);

        step(&mut world, &right, &config(), FRAME);
        assert_eq!(world.camera.x, 15.0);
        assert!(world.bullets.is_empty());
    }

    #[test]
    fn test_shoot_cooldown_limits_fire_rate() {
        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot = InputFlags { shoot: true, ..Default::default() };
        let frame = Duration::from_millis(50);
        let mut shots = 0;

        // 1 second of holding fire at 20 fps with a 250ms cooldown
        for _ in 0..20 {
            step(&mut world, &shoot, &config(), frame);
            shots += world.events.drain().filter(|e| *e == GameEvent::ShotFired).count();
        }
        assert_eq!(shots, 4);
    }

    #[test]
    fn test_shoot_cooldown_is_time_based() {
        let mut world = world_with(Rect::new(100.0, 200.0, 32.0, 32.0), vec![], vec![]);
        let shoot = InputFlags { shoot: true, ..Default::default() };

        let mut shots = 0;
        let fire = |world: &mut World| {
            step(world, &shoot, &config(), Duration::from_millis(1));
            world.events.drain().filter(|e| *e == GameEvent::ShotFired).count()
        };

        shots += fire(&mut world);
        assert_eq!(world.bullets.len(), 1);

        // Many fast frames inside the window: no second shot
        for _ in 0..200 {
            shots += fire(&mut world);
        }
        assert_eq!(shots, 1);

        // Crossing 250ms allows the next one
        for _ in 0..50 {
            shots += fire(&mut world);
        }
        assert_eq!(shots, 2);
    }

    #[test]
    fn test_walks_into_platform_side() {
        let mut world = world_with(
            Rect::new(262.0, 318.0, 32.0, 32.0),
            vec![
                Rect::new(0.0, 350.0, 800.0, 20.0),
                Rect::new(300.0, 300.0, 40.0, 50.0),
            ],
            vec![],
        );
        let right = InputFlags { right: true, ..Default::default() };
        for _ in 0..5 {
            step(&mut world, &right, &config(), FRAME);
        }
        assert_eq!(world.player.x, 268.0);
        assert_eq!(world.player.y, 318.0);
    }
}
