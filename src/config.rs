use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::engine::ControlEngine;
use crate::units::{PressureUnit, TemperatureUnit};

pub const DEFAULT_SETTINGS_FILE: &str = "settings.toml";

/// 콤보박스 선택 인덱스를 감싸는 테이블. `[temperature_unit] index = 1` 형태.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitIndex {
    pub index: usize,
}

/// 종료 시 저장하고 시작 시 복원하는 패널 설정.
/// 모든 항목이 선택 사항이며, 빠진 항목은 엔진 기본값을 그대로 둔다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<UnitIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_unit: Option<UnitIndex>,
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일 경로. 지정이 없으면 작업 디렉터리의 settings.toml.
pub fn settings_path(custom: Option<&Path>) -> PathBuf {
    custom
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE))
}

/// 설정 파일을 읽는다. 파일이 없으면 기본값을 돌려준다.
pub fn load(path: &Path) -> Result<PanelSettings, SettingsError> {
    if !path.exists() {
        return Ok(PanelSettings::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// 설정 파일을 읽되 어떤 오류도 호출자에게 넘기지 않는다.
pub fn load_or_default(path: &Path) -> PanelSettings {
    match load(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "settings ignored, using defaults");
            PanelSettings::default()
        }
    }
}

impl PanelSettings {
    /// 엔진의 현재 단위 선택을 담은 설정을 만든다. 언어는 기존 값을 유지한다.
    pub fn capture(&self, engine: &ControlEngine) -> Self {
        Self {
            language: self.language.clone(),
            temperature_unit: Some(UnitIndex {
                index: engine.temperature_unit().index(),
            }),
            pressure_unit: Some(UnitIndex {
                index: engine.pressure_unit().index(),
            }),
        }
    }

    /// 저장된 단위 선택을 엔진에 반영한다. 범위를 벗어난 인덱스는 건너뛴다.
    pub fn apply_to(&self, engine: &mut ControlEngine) {
        if let Some(UnitIndex { index }) = self.temperature_unit {
            if !engine.set_temperature_unit_index(index) {
                tracing::warn!(index, "unknown temperature unit index in settings");
            }
        }
        if let Some(UnitIndex { index }) = self.pressure_unit {
            if !engine.set_pressure_unit_index(index) {
                tracing::warn!(index, "unknown pressure unit index in settings");
            }
        }
    }

    pub fn temperature_unit(&self) -> Option<TemperatureUnit> {
        self.temperature_unit
            .and_then(|u| TemperatureUnit::from_index(u.index))
    }

    pub fn pressure_unit(&self) -> Option<PressureUnit> {
        self.pressure_unit.and_then(|u| PressureUnit::from_index(u.index))
    }

    /// 설정을 파일에 저장한다. 기존 파일은 덮어쓴다.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "settings saved");
        Ok(())
    }
}
