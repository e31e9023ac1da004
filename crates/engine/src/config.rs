//! Configuration for the Xiangqi engine.

#[derive(Debug, Clone)]
pub struct Config {
    // Evaluation constants
    pub check_bonus: i32,
    pub crossed_soldier_multiplier: i32,

    // Search constants
    pub min_depth: i32,
    pub max_depth: i32,
    pub default_depth: i32,
}

impl Config {
    /// Clamps a requested difficulty to the supported search depths. Swapped
    /// bounds are taken in order, and nothing below one ply is searched.
    pub fn clamp_depth(&self, depth_hint: i32) -> i32 {
        let low = self.min_depth.min(self.max_depth).max(1);
        let high = self.min_depth.max(self.max_depth).max(1);
        depth_hint.clamp(low, high)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_bonus: 500,
            crossed_soldier_multiplier: 2,
            min_depth: 1,
            max_depth: 4,
            default_depth: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_depth() {
        let config = Config::default();
        assert_eq!(config.clamp_depth(0), 1);
        assert_eq!(config.clamp_depth(-3), 1);
        assert_eq!(config.clamp_depth(3), 3);
        assert_eq!(config.clamp_depth(10), 4);
        assert_eq!(config.clamp_depth(config.default_depth), 3);
    }

    #[test]
    fn test_clamp_depth_with_swapped_bounds() {
        let config = Config { min_depth: 4, max_depth: 2, ..Config::default() };
        assert_eq!(config.clamp_depth(1), 2);
        assert_eq!(config.clamp_depth(3), 3);
        assert_eq!(config.clamp_depth(9), 4);

        let config = Config { min_depth: -2, max_depth: 0, ..Config::default() };
        assert_eq!(config.clamp_depth(0), 1);
    }
}
