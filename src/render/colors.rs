use std::f32::consts::TAU;

/// One RGB triple per vertex, cycling through the hue wheel once over the
/// whole mesh. Channel k of vertex i is `(1 + cos(2pi * (i/n - k/3))) / 2`.
pub fn rainbow(n_points: usize) -> Vec<[f32; 3]> {
    let step = 1.0 / n_points as f32;
    (0..n_points)
        .map(|i| {
            let mut color = [0.0f32; 3];
            for (k, channel) in color.iter_mut().enumerate() {
                let angle = TAU * (i as f32 * step - k as f32 / 3.0);
                *channel = (1.0 + angle.cos()) * 0.5;
            }
            color
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_stay_in_unit_range() {
        for color in rainbow(96) {
            for channel in color {
                assert!((0.0..=1.0).contains(&channel), "out of range: {channel}");
            }
        }
    }

    #[test]
    fn test_first_vertex_is_red_dominant() {
        let colors = rainbow(96);
        let first = colors[0];
        assert!((first[0] - 1.0).abs() < 1e-6);
        assert!((first[1] - 0.25).abs() < 1e-6);
        assert!((first[2] - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_one_full_hue_cycle() {
        let n = 96;
        let colors = rainbow(n);
        // A third of the way around, green takes over from red
        let third = colors[n / 3];
        assert!(third[1] > third[0]);
        assert!(third[1] > 0.99);
    }

    #[test]
    fn test_length_matches_request() {
        assert_eq!(rainbow(7).len(), 7);
        assert!(rainbow(0).is_empty());
    }
}
