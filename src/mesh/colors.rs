//! Color mapping for area fills

use crate::area::AreaColor;

/// RGBA color type
pub type FillColor = [f32; 4];

/// Trait for mapping area colors to fill colors
pub trait ColorMapper {
    /// Map an area's color (`None` while uncolored) to an RGBA fill
    fn map_color(&self, color: Option<AreaColor>) -> FillColor;
}

/// Default mapper: translucent primaries, fully transparent when uncolored
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicColorMapper;

impl ColorMapper for BasicColorMapper {
    fn map_color(&self, color: Option<AreaColor>) -> FillColor {
        match color {
            None => [0.0, 0.0, 0.0, 0.0],
            Some(AreaColor::Red) => [1.0, 0.0, 0.0, 0.3],
            Some(AreaColor::Green) => [0.0, 1.0, 0.0, 0.3],
            Some(AreaColor::Blue) => [0.0, 0.0, 1.0, 0.3],
            Some(AreaColor::Yellow) => [1.0, 1.0, 0.0, 0.3],
        }
    }
}

/// Custom color mapper that allows setting the fill for each color
#[derive(Debug, Clone)]
pub struct CustomColorMapper {
    pub uncolored: FillColor,
    pub red: FillColor,
    pub green: FillColor,
    pub blue: FillColor,
    pub yellow: FillColor,
}

impl Default for CustomColorMapper {
    fn default() -> Self {
        let basic = BasicColorMapper;
        Self {
            uncolored: basic.map_color(None),
            red: basic.map_color(Some(AreaColor::Red)),
            green: basic.map_color(Some(AreaColor::Green)),
            blue: basic.map_color(Some(AreaColor::Blue)),
            yellow: basic.map_color(Some(AreaColor::Yellow)),
        }
    }
}

impl ColorMapper for CustomColorMapper {
    fn map_color(&self, color: Option<AreaColor>) -> FillColor {
        match color {
            None => self.uncolored,
            Some(AreaColor::Red) => self.red,
            Some(AreaColor::Green) => self.green,
            Some(AreaColor::Blue) => self.blue,
            Some(AreaColor::Yellow) => self.yellow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_color_mapper() {
        let mapper = BasicColorMapper;

        assert_eq!(mapper.map_color(None)[3], 0.0); // Uncolored is invisible

        let red = mapper.map_color(Some(AreaColor::Red));
        assert_eq!(red[0], 1.0);
        assert_eq!(red[3], 0.3);

        let yellow = mapper.map_color(Some(AreaColor::Yellow));
        assert_eq!(&yellow[..3], &[1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_custom_color_mapper() {
        let custom = CustomColorMapper {
            uncolored: [0.1, 0.1, 0.1, 1.0],
            blue: [0.0, 0.2, 0.5, 1.0],
            ..Default::default()
        };

        assert_eq!(custom.map_color(None), [0.1, 0.1, 0.1, 1.0]);
        assert_eq!(custom.map_color(Some(AreaColor::Blue)), [0.0, 0.2, 0.5, 1.0]);
        assert_eq!(
            custom.map_color(Some(AreaColor::Green)),
            BasicColorMapper.map_color(Some(AreaColor::Green))
        );
    }

    #[test]
    fn test_all_colors_are_distinct() {
        let mapper = BasicColorMapper;
        let fills: Vec<FillColor> = AreaColor::ALL.iter().map(|&c| mapper.map_color(Some(c))).collect();
        for (i, a) in fills.iter().enumerate() {
            assert!(fills[i + 1..].iter().all(|b| a != b));
        }
    }
}
