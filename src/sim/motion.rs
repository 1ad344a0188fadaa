//! Motion integration
//!
//! Velocity moves position by elapsed time, then the position is wrapped back
//! into the field. Steering only ever touches the craft.

use super::state::{SpaceObject, Tuning};
use super::tick::TickInput;
use super::topology::Field;
use crate::heading_vector;

/// Advance `obj` by its velocity over `dt` seconds and re-wrap it
#[inline]
pub fn integrate(obj: &mut SpaceObject, field: &Field, dt: f32) {
    obj.pos += obj.vel * dt;
    obj.pos = field.wrap(obj.pos);
}

/// Apply held rotation and thrust input to the craft
pub fn steer(craft: &mut SpaceObject, input: &TickInput, tuning: &Tuning, dt: f32) {
    if input.rotate_left {
        craft.heading -= tuning.rotation_speed * dt;
    }
    if input.rotate_right {
        craft.heading += tuning.rotation_speed * dt;
    }

    // Acceleration changes velocity
    if input.thrust {
        craft.vel += heading_vector(craft.heading) * tuning.thrust_accel * dt;
    }
}

/// Cosmetic fragment rotation
#[inline]
pub fn spin(fragment: &mut SpaceObject, tuning: &Tuning, dt: f32) {
    fragment.heading += tuning.fragment_spin * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_integrate_moves_by_velocity() {
        let field = Field::default();
        let mut obj = SpaceObject::new(1, Vec2::new(10.0, 10.0), Vec2::new(4.0, -2.0));
        integrate(&mut obj, &field, 0.5);
        assert_eq!(obj.pos, Vec2::new(12.0, 9.0));
    }

    #[test]
    fn test_integrate_wraps_after_moving() {
        let field = Field::new(160.0, 100.0);
        let mut obj = SpaceObject::new(1, Vec2::new(159.0, 0.5), Vec2::new(4.0, -2.0));
        integrate(&mut obj, &field, 0.5);
        assert_eq!(obj.pos, Vec2::new(1.0, 99.5));
    }

    #[test]
    fn test_steer_rotation() {
        let tuning = Tuning::default();
        let mut craft = SpaceObject::craft(Vec2::ZERO);

        let right = TickInput {
            rotate_right: true,
            ..Default::default()
        };
        steer(&mut craft, &right, &tuning, 0.1);
        assert!((craft.heading - 0.5).abs() < 1e-6);

        let left = TickInput {
            rotate_left: true,
            ..Default::default()
        };
        steer(&mut craft, &left, &tuning, 0.2);
        assert!((craft.heading + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_both_rotations_cancel() {
        let tuning = Tuning::default();
        let mut craft = SpaceObject::craft(Vec2::ZERO);
        let input = TickInput {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        steer(&mut craft, &input, &tuning, 0.1);
        assert!(craft.heading.abs() < 1e-6);
    }

    #[test]
    fn test_thrust_accelerates_along_heading() {
        let tuning = Tuning::default();
        let mut craft = SpaceObject::craft(Vec2::ZERO);
        let input = TickInput {
            thrust: true,
            ..Default::default()
        };
        steer(&mut craft, &input, &tuning, 0.5);
        // Heading 0 points up: 20 * 0.5 toward -y
        assert!(craft.vel.x.abs() < 1e-6);
        assert!((craft.vel.y + 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_no_input_leaves_craft_alone() {
        let tuning = Tuning::default();
        let mut craft = SpaceObject::craft(Vec2::new(3.0, 4.0));
        craft.vel = Vec2::new(1.0, 1.0);
        steer(&mut craft, &TickInput::default(), &tuning, 1.0);
        assert_eq!(craft.vel, Vec2::new(1.0, 1.0));
        assert_eq!(craft.heading, 0.0);
    }

    #[test]
    fn test_spin_is_cosmetic() {
        let tuning = Tuning::default();
        let mut rock = SpaceObject::fragment(16, Vec2::new(5.0, 5.0), Vec2::ZERO);
        spin(&mut rock, &tuning, 2.0);
        assert!((rock.heading - 1.0).abs() < 1e-6);
        assert_eq!(rock.pos, Vec2::new(5.0, 5.0));
    }
}
