use serde::{Deserialize, Serialize};

/// Spinal region a Cobb angle is measured over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Region {
    ProximalThoracic,
    MainThoracic,
    ThoracolumbarLumbar,
}

impl Region {
    pub const ALL: [Region; 3] = [
        Region::ProximalThoracic,
        Region::MainThoracic,
        Region::ThoracolumbarLumbar,
    ];

    pub fn index(self) -> usize {
        match self {
            Region::ProximalThoracic => 0,
            Region::MainThoracic => 1,
            Region::ThoracolumbarLumbar => 2,
        }
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Region::ProximalThoracic => "pt",
            Region::MainThoracic => "mt",
            Region::ThoracolumbarLumbar => "tll",
        }
    }
}

/// Radiograph family an angle triple was measured on. Each family carries
/// its own interobserver standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AngleFamily {
    Coronal,
    CoronalBend,
    Sagittal,
}

impl AngleFamily {
    pub fn name(self) -> &'static str {
        match self {
            AngleFamily::Coronal => "coronal",
            AngleFamily::CoronalBend => "coronal_bend",
            AngleFamily::Sagittal => "sagittal",
        }
    }
}

impl std::fmt::Display for AngleFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// PT, MT and TL/L angles in degrees, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AngleTriple(pub [f64; 3]);

impl AngleTriple {
    pub fn new(pt: f64, mt: f64, tll: f64) -> Self {
        Self([pt, mt, tll])
    }
}

impl std::ops::Index<Region> for AngleTriple {
    type Output = f64;

    fn index(&self, region: Region) -> &f64 {
        &self.0[region.index()]
    }
}

/// The three angle triples a Lenke classification is read from.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CobbAngles {
    pub coronal: AngleTriple,
    pub coronal_bend: AngleTriple,
    pub sagittal: AngleTriple,
}

impl CobbAngles {
    pub fn family(&self, family: AngleFamily) -> &AngleTriple {
        match family {
            AngleFamily::Coronal => &self.coronal,
            AngleFamily::CoronalBend => &self.coronal_bend,
            AngleFamily::Sagittal => &self.sagittal,
        }
    }
}
