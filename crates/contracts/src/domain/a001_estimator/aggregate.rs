use serde::{Deserialize, Serialize};

// ============================================================================
// Bounds & prices
// ============================================================================

pub const AREA_MIN: u32 = 5;
pub const AREA_MAX: u32 = 50;
pub const UNITS_MIN: u32 = 4;
pub const UNITS_MAX: u32 = 24;

pub const DEFAULT_AREA: u32 = 10;
pub const DEFAULT_UNITS: u32 = 8;

/// Price of one cabinet unit or drawer.
pub const UNIT_PRICE: u32 = 800;

const LOWER_SPREAD: f64 = 0.9;
const UPPER_SPREAD: f64 = 1.1;

// ============================================================================
// Material
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Mdf,
    #[default]
    Wood,
    Premium,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Mdf, Material::Wood, Material::Premium];

    pub fn code(&self) -> &'static str {
        match self {
            Material::Mdf => "mdf",
            Material::Wood => "wood",
            Material::Premium => "premium",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.code() == code)
    }

    /// Base price per square meter.
    pub fn price_per_meter(&self) -> u32 {
        match self {
            Material::Mdf => 1500,
            Material::Wood => 2500,
            Material::Premium => 3500,
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            Material::Mdf => "MDF",
            Material::Wood => "خشب طبيعي",
            Material::Premium => "بريميوم",
        }
    }

    pub fn description_ar(&self) -> &'static str {
        match self {
            Material::Mdf => "اقتصادي وعملي",
            Material::Wood => "متوسط الفخامة",
            Material::Premium => "فاخر وراقي",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Material::Mdf => "🪵",
            Material::Wood => "🌳",
            Material::Premium => "✨",
        }
    }
}

// ============================================================================
// Style
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KitchenStyle {
    #[default]
    Modern,
    Classic,
    Minimal,
    Dark,
}

impl KitchenStyle {
    pub const ALL: [KitchenStyle; 4] = [
        KitchenStyle::Modern,
        KitchenStyle::Classic,
        KitchenStyle::Minimal,
        KitchenStyle::Dark,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            KitchenStyle::Modern => "modern",
            KitchenStyle::Classic => "classic",
            KitchenStyle::Minimal => "minimal",
            KitchenStyle::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            KitchenStyle::Modern => 1.2,
            KitchenStyle::Classic => 1.15,
            KitchenStyle::Minimal | KitchenStyle::Dark => 1.0,
        }
    }

    pub fn label_ar(&self) -> &'static str {
        match self {
            KitchenStyle::Modern => "عصري",
            KitchenStyle::Classic => "كلاسيكي",
            KitchenStyle::Minimal => "بسيط",
            KitchenStyle::Dark => "داكن",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            KitchenStyle::Modern => "🏢",
            KitchenStyle::Classic => "🏛️",
            KitchenStyle::Minimal => "⚪",
            KitchenStyle::Dark => "⚫",
        }
    }
}

// ============================================================================
// Input
// ============================================================================

/// Estimator answers. Always valid: setters and deserialization clamp
/// into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawEstimatorInput")]
pub struct EstimatorInput {
    area: u32,
    material: Material,
    style: KitchenStyle,
    units: u32,
}

impl Default for EstimatorInput {
    fn default() -> Self {
        Self {
            area: DEFAULT_AREA,
            material: Material::default(),
            style: KitchenStyle::default(),
            units: DEFAULT_UNITS,
        }
    }
}

/// Wire shape before clamping.
#[derive(Deserialize)]
struct RawEstimatorInput {
    area: i64,
    material: Material,
    style: KitchenStyle,
    units: i64,
}

impl From<RawEstimatorInput> for EstimatorInput {
    fn from(raw: RawEstimatorInput) -> Self {
        Self::new(raw.area, raw.material, raw.style, raw.units)
    }
}

impl EstimatorInput {
    pub fn new(area: i64, material: Material, style: KitchenStyle, units: i64) -> Self {
        let mut input = Self {
            area: DEFAULT_AREA,
            material,
            style,
            units: DEFAULT_UNITS,
        };
        input.set_area(area);
        input.set_units(units);
        input
    }

    pub fn area(&self) -> u32 {
        self.area
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn style(&self) -> KitchenStyle {
        self.style
    }

    pub fn units(&self) -> u32 {
        self.units
    }

    /// Set the area in m², clamped to `[AREA_MIN, AREA_MAX]`.
    pub fn set_area(&mut self, area: i64) {
        self.area = area.clamp(AREA_MIN as i64, AREA_MAX as i64) as u32;
    }

    /// Set the unit count, clamped to `[UNITS_MIN, UNITS_MAX]`.
    pub fn set_units(&mut self, units: i64) {
        self.units = units.clamp(UNITS_MIN as i64, UNITS_MAX as i64) as u32;
    }

    pub fn set_material(&mut self, material: Material) {
        self.material = material;
    }

    pub fn set_style(&mut self, style: KitchenStyle) {
        self.style = style;
    }

    /// `area * base + units * UNIT_PRICE`
    pub fn subtotal(&self) -> u64 {
        u64::from(self.area) * u64::from(self.material.price_per_meter())
            + u64::from(self.units) * u64::from(UNIT_PRICE)
    }
}

// ============================================================================
// Estimate
// ============================================================================

/// Price range in riyals. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceEstimate {
    pub min: u64,
    pub max: u64,
}

/// Price range for the full wizard, style multiplier included.
///
/// ```text
/// subtotal = area * base + units * 800
/// min = floor(subtotal * style * 0.9)
/// max =  ceil(subtotal * style * 1.1)
/// ```
/// Intermediate math is `f64`, multiplied left to right, so results match
/// the quotes the site has always produced to the riyal.
pub fn calculate_estimate(input: &EstimatorInput) -> PriceEstimate {
    spread(input.subtotal(), input.style.multiplier())
}

/// Price range of the compact widget, which does not ask for a style.
pub fn estimate_without_style(input: &EstimatorInput) -> PriceEstimate {
    spread(input.subtotal(), 1.0)
}

fn spread(subtotal: u64, multiplier: f64) -> PriceEstimate {
    let subtotal = subtotal as f64;
    PriceEstimate {
        min: (subtotal * multiplier * LOWER_SPREAD).floor() as u64,
        max: (subtotal * multiplier * UPPER_SPREAD).ceil() as u64,
    }
}
