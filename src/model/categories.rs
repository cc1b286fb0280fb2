use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CurveType {
    MainThoracic,
    DoubleThoracic,
    DoubleMajor,
    TripleMajor,
    ThoracolumbarLumbar,
    ThoracolumbarLumbarMainThoracic,
}

impl CurveType {
    pub const ALL: [CurveType; 6] = [
        CurveType::MainThoracic,
        CurveType::DoubleThoracic,
        CurveType::DoubleMajor,
        CurveType::TripleMajor,
        CurveType::ThoracolumbarLumbar,
        CurveType::ThoracolumbarLumbarMainThoracic,
    ];

    /// Lenke type number, 1 through 6.
    pub fn number(self) -> u8 {
        match self {
            CurveType::MainThoracic => 1,
            CurveType::DoubleThoracic => 2,
            CurveType::DoubleMajor => 3,
            CurveType::TripleMajor => 4,
            CurveType::ThoracolumbarLumbar => 5,
            CurveType::ThoracolumbarLumbarMainThoracic => 6,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CurveType::MainThoracic => "main_thoracic",
            CurveType::DoubleThoracic => "double_thoracic",
            CurveType::DoubleMajor => "double_major",
            CurveType::TripleMajor => "triple_major",
            CurveType::ThoracolumbarLumbar => "thoracolumbar_lumbar",
            CurveType::ThoracolumbarLumbarMainThoracic => "thoracolumbar_lumbar_main_thoracic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SagittalModifier {
    Hypokyphotic,
    Normal,
    Hyperkyphotic,
}

impl SagittalModifier {
    pub const ALL: [SagittalModifier; 3] = [
        SagittalModifier::Hypokyphotic,
        SagittalModifier::Normal,
        SagittalModifier::Hyperkyphotic,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            SagittalModifier::Hypokyphotic => "-",
            SagittalModifier::Normal => "N",
            SagittalModifier::Hyperkyphotic => "+",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SagittalModifier::Hypokyphotic => "hypokyphotic",
            SagittalModifier::Normal => "normal",
            SagittalModifier::Hyperkyphotic => "hyperkyphotic",
        }
    }
}
