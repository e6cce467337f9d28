#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use crate::commands::{InputFrame, PointerButtons, SimCommand};
    use crate::components::Particle;
    use crate::enums::FlightPhase;
    use crate::events::SimEvent;
    use crate::math::{clamp, deg_to_rad, rad_to_deg, Vector2, VectorExt};
    use crate::state::{RenderSnapshot, ShakeOffset};
    use crate::types::{SimTime, Velocity};

    // ---- Vector math ----

    #[test]
    fn test_set_distance_on_zero_vector_stays_zero() {
        let mut v = Vector2::ZERO;
        v.set_distance(16.0);
        assert!(!v.x.is_nan() && !v.y.is_nan(), "set_distance produced NaN: {v:?}");
        assert_eq!(v, Vector2::ZERO);
    }

    #[test]
    fn test_set_distance_keeps_direction() {
        let v = Vector2::new(3.0, -4.0).with_distance(10.0);
        assert!((v.x - 6.0).abs() < 1e-5);
        assert!((v.y + 8.0).abs() < 1e-5);
        assert!((v.length() - 10.0).abs() < 1e-5);
    }

    #[test]
    fn test_heading_quadrants() {
        assert!((Vector2::new(1.0, 0.0).heading()).abs() < 1e-6);
        assert!((Vector2::new(0.0, 1.0).heading() - FRAC_PI_2).abs() < 1e-6);
        assert!((Vector2::new(-1.0, 0.0).heading() - PI).abs() < 1e-6);
        assert!((Vector2::new(0.0, -1.0).heading() + FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_heading_of_zero_vector_is_zero() {
        assert_eq!(Vector2::ZERO.heading(), 0.0);
    }

    #[test]
    fn test_from_heading_is_unit_length() {
        for deg in [0.0_f32, 37.0, 90.0, 181.0, -45.0] {
            let v = Vector2::from_heading(deg_to_rad(deg));
            assert!((v.length() - 1.0).abs() < 1e-6);
            assert!((rad_to_deg(v.heading()) - deg_wrap(deg)).abs() < 1e-3);
        }
    }

    fn deg_wrap(deg: f32) -> f32 {
        let mut d = deg;
        while d > 180.0 {
            d -= 360.0;
        }
        d
    }

    #[test]
    fn test_deg_rad_conversion() {
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
        assert!((rad_to_deg(FRAC_PI_2) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(5.0, 0.0, 1.0), 1.0);
        assert_eq!(clamp(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
    }

    #[test]
    fn test_speed_matches_length() {
        assert!((Velocity::new(30.0, 40.0).speed() - 50.0).abs() < 1e-5);
    }

    // ---- Components / enums ----

    #[test]
    fn test_flight_phase_from_life() {
        assert_eq!(FlightPhase::from_life(0.01), FlightPhase::Guided);
        assert_eq!(FlightPhase::from_life(0.0), FlightPhase::Ballistic);
        assert_eq!(FlightPhase::from_life(-1.5), FlightPhase::Ballistic);
    }

    #[test]
    fn test_particle_age_ratio_and_expiry() {
        let mut p = Particle::new(0.5);
        assert_eq!(p.age_ratio(), 0.0);
        assert!(!p.is_expired());

        p.time = 0.25;
        assert!((p.age_ratio() - 0.5).abs() < 1e-6);

        p.time = 0.5;
        assert!(p.is_expired());
        assert_eq!(p.age_ratio(), 1.0);
    }

    #[test]
    fn test_sim_time_advance() {
        let mut t = SimTime::default();
        for _ in 0..100 {
            t.advance(0.01);
        }
        assert_eq!(t.tick, 100);
        assert!((t.elapsed_secs - 1.0).abs() < 1e-5);
    }

    // ---- Snapshot helpers ----

    #[test]
    fn test_window_to_playfield_undoes_shake() {
        let snapshot = RenderSnapshot {
            shake_offset: ShakeOffset { x: 1, y: -3 },
            ..Default::default()
        };
        let p = snapshot.window_to_playfield(Vector2::new(100.0, 100.0));
        assert_eq!(p, Vector2::new(99.0, 103.0));
    }

    // ---- Serialization ----

    #[test]
    fn test_sim_command_serde() {
        let commands = vec![
            SimCommand::FireMissile,
            SimCommand::FireBurst { count: 32 },
            SimCommand::ToggleDebug,
            SimCommand::Pause,
            SimCommand::Resume,
        ];
        for cmd in commands {
            let json = serde_json::to_string(&cmd).unwrap();
            let back: SimCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(cmd, back);
        }
    }

    #[test]
    fn test_sim_event_is_tagged() {
        let event = SimEvent::Impact {
            position: Vector2::new(1.0, 2.0),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"Impact\""), "got {json}");
    }

    #[test]
    fn test_input_frame_default_has_nothing_pressed() {
        let input = InputFrame::at(Vector2::new(10.0, 20.0));
        assert_eq!(input.buttons, PointerButtons::default());
        assert!(!input.debug_key);
        assert_eq!(input.pointer, Vector2::new(10.0, 20.0));
    }
}
