use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PaletteError {
    #[error("a palette needs at least one courier color")]
    Empty,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    pub fn new(color: impl Into<String>) -> Self {
        Color(color.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

const COURIER_COLORS: [&str; 8] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#808000",
];
const DEPOT_COLOR: &str = "#000000";
const DROPPED_COLOR: &str = "#9e9e9e";

/// Fixed set of colors. Couriers beyond the palette size share colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    couriers: Vec<Color>,
    depot: Color,
    dropped: Color,
}

impl Palette {
    pub fn new(couriers: Vec<Color>, depot: Color, dropped: Color) -> Result<Self, PaletteError> {
        if couriers.is_empty() {
            return Err(PaletteError::Empty);
        }

        Ok(Palette {
            couriers,
            depot,
            dropped,
        })
    }

    pub fn len(&self) -> usize {
        self.couriers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.couriers.is_empty()
    }

    pub fn courier(&self, courier: usize) -> &Color {
        &self.couriers[courier % self.couriers.len()]
    }

    pub fn depot(&self) -> &Color {
        &self.depot
    }

    pub fn dropped(&self) -> &Color {
        &self.dropped
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            couriers: COURIER_COLORS.into_iter().map(Color::new).collect(),
            depot: Color::new(DEPOT_COLOR),
            dropped: Color::new(DROPPED_COLOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_couriers_alias_beyond_palette_size() {
        let palette = Palette::default();

        assert_ne!(palette.courier(0), palette.courier(1));
        assert_eq!(palette.courier(3), palette.courier(3 + palette.len()));
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert_eq!(
            Palette::new(vec![], Color::new("#000"), Color::new("#999")),
            Err(PaletteError::Empty)
        );
    }
}
