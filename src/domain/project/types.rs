// SPDX-License-Identifier: MPL-2.0
//! Project configuration values read by the player surface.

/// Named aspect ratio presets a project can be rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectRatio {
    Wide,
    Vertical,
    Square,
    Classic,
    Tall,
}

impl AspectRatio {
    /// All presets in menu order.
    pub const ALL: [AspectRatio; 5] = [
        AspectRatio::Wide,
        AspectRatio::Vertical,
        AspectRatio::Square,
        AspectRatio::Classic,
        AspectRatio::Tall,
    ];

    /// Display name of the preset.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AspectRatio::Wide => "Wide",
            AspectRatio::Vertical => "Vertical",
            AspectRatio::Square => "Square",
            AspectRatio::Classic => "Classic",
            AspectRatio::Tall => "Tall",
        }
    }

    /// Width and height terms of the ratio, e.g. `(16, 9)`.
    #[must_use]
    pub fn ratio(self) -> (u32, u32) {
        match self {
            AspectRatio::Wide => (16, 9),
            AspectRatio::Vertical => (9, 16),
            AspectRatio::Square => (1, 1),
            AspectRatio::Classic => (4, 3),
            AspectRatio::Tall => (3, 4),
        }
    }

    /// Ratio as a single width / height value.
    #[must_use]
    pub fn value(self) -> f64 {
        let (w, h) = self.ratio();
        f64::from(w) / f64::from(h)
    }
}

/// Aspect ratio chosen in the player toolbar.
///
/// `Auto` is stored on the project as "no aspect ratio" and means the ratio
/// follows the source display geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AspectRatioSelection {
    #[default]
    Auto,
    Preset(AspectRatio),
}

impl AspectRatioSelection {
    /// Options in the order the selector lists them.
    #[must_use]
    pub fn options() -> Vec<AspectRatioSelection> {
        std::iter::once(AspectRatioSelection::Auto)
            .chain(AspectRatio::ALL.into_iter().map(AspectRatioSelection::Preset))
            .collect()
    }

    /// Reads the selection from the value stored on the project.
    #[must_use]
    pub fn from_project(value: Option<AspectRatio>) -> Self {
        value.map_or(AspectRatioSelection::Auto, AspectRatioSelection::Preset)
    }

    /// Value to store on the project.
    #[must_use]
    pub fn to_project(self) -> Option<AspectRatio> {
        match self {
            AspectRatioSelection::Auto => None,
            AspectRatioSelection::Preset(ratio) => Some(ratio),
        }
    }

    /// Label shown in the selector.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            AspectRatioSelection::Auto => "Auto",
            AspectRatioSelection::Preset(ratio) => ratio.name(),
        }
    }

    /// Effective width / height ratio, deriving `Auto` from the display size.
    ///
    /// Returns `None` when `Auto` is selected and the display has no area.
    #[must_use]
    pub fn resolve(self, display: XY<u32>) -> Option<f64> {
        match self {
            AspectRatioSelection::Preset(ratio) => Some(ratio.value()),
            AspectRatioSelection::Auto if display.x > 0 && display.y > 0 => {
                Some(f64::from(display.x) / f64::from(display.y))
            }
            AspectRatioSelection::Auto => None,
        }
    }
}

/// Two-component value used for crop positions and sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
}

impl<T> XY<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

/// Crop rectangle stored on the project background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CropArea {
    pub position: XY<u32>,
    pub size: XY<u32>,
}

impl CropArea {
    /// Initial crop shown when the crop dialog opens.
    ///
    /// Uses the project's existing crop when there is one, otherwise the
    /// full display starting at the origin.
    #[must_use]
    pub fn dialog_default(existing: Option<&CropArea>, display: XY<u32>) -> CropArea {
        match existing {
            Some(crop) => *crop,
            None => CropArea {
                position: XY::new(0, 0),
                size: display,
            },
        }
    }
}
