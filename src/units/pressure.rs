use serde::{Deserialize, Serialize};

/// 압력 표시 단위. 콤보박스 순서(0=Pa, 1=mmHg)와 동일하다.
/// 내부 저장값은 항상 Pa 이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    Pascal,
    MmHg,
}

const MMHG_PER_PA: f64 = 0.00750062;

impl PressureUnit {
    pub const ALL: [PressureUnit; 2] = [PressureUnit::Pascal, PressureUnit::MmHg];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        match self {
            PressureUnit::Pascal => 0,
            PressureUnit::MmHg => 1,
        }
    }
}

/// Pa 값을 요청된 표시 단위로 변환한다.
pub fn convert_pressure(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::MmHg => value_pa * MMHG_PER_PA,
    }
}
