use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const FORM_TITLE: &str = "form.title";
    pub const FORM_TEMPERATURE: &str = "form.temperature";
    pub const FORM_PRESSURE: &str = "form.pressure";
    pub const FORM_HUMIDITY: &str = "form.humidity";
    pub const FORM_OK: &str = "form.ok";
    pub const FORM_CANCEL: &str = "form.cancel";
    pub const FORM_CANCELLED: &str = "form.cancelled";

    pub const PANEL_TITLE: &str = "panel.title";
    pub const PANEL_PRESSURE: &str = "panel.pressure";
    pub const PANEL_TEMPERATURE: &str = "panel.temperature";
    pub const PANEL_AIRFLOW: &str = "panel.airflow";

    pub const BUTTON_UP: &str = "button.up";
    pub const BUTTON_DOWN: &str = "button.down";
    pub const BUTTON_LEFT: &str = "button.left";
    pub const BUTTON_RIGHT: &str = "button.right";
    pub const POWER_TURN_ON: &str = "power.turn_on";
    pub const POWER_TURN_OFF: &str = "power.turn_off";
    pub const THEME_DARK: &str = "theme.dark";
    pub const THEME_LIGHT: &str = "theme.light";

    pub const UNIT_PASCAL: &str = "unit.pascal";
    pub const UNIT_MMHG: &str = "unit.mmhg";

    pub const DISPLAY_TEMPERATURE: &str = "display.temperature";
    pub const DISPLAY_HUMIDITY: &str = "display.humidity";

    pub const CLI_PROMPT: &str = "cli.prompt";
    pub const CLI_HELP: &str = "cli.help";
    pub const CLI_UNKNOWN: &str = "cli.unknown";
    pub const CLI_POWER_STATE_ON: &str = "cli.power_state_on";
    pub const CLI_POWER_STATE_OFF: &str = "cli.power_state_off";
    pub const CLI_THEME_STATE_LIGHT: &str = "cli.theme_state_light";
    pub const CLI_THEME_STATE_DARK: &str = "cli.theme_state_dark";
    pub const CLI_AIRFLOW: &str = "cli.airflow";
    pub const CLI_AIRFLOW_BLOCKED: &str = "cli.airflow_blocked";
    pub const CLI_UNIT_OPTIONS: &str = "cli.unit_options";
    pub const CLI_SETTINGS_SAVED: &str = "cli.settings_saved";
    pub const CLI_EXIT: &str = "cli.exit";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::Ru
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ru => "ru",
            Language::En => "en",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Default for Translator {
    fn default() -> Self {
        Self::new("ru")
    }
}

impl Translator {
    /// 언어 코드(ru/en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 ru로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&Path>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides(Path::new("locales"), lang_code));
        if overrides.is_some() {
            tracing::info!(lang = lang_code, "language pack loaded");
        }
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 -> 내장 문자열 -> 영어 -> 키 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v.clone();
        }
        let builtin = match self.lang {
            Language::Ru => ru(key),
            Language::En => en(key),
            Language::Ko => ko(key),
        };
        builtin
            .or_else(|| en(key))
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ru".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ru") => Some("ru".into()),
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" | "en" | "ko" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 아래 중첩 테이블.
fn load_overrides(dir: &Path, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = dir.join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            tracing::warn!(path = %path.display(), "language pack ignored: no string entries");
        }
        map
    };

    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    let (base, _) = lang.split_once(['-', '_'])?;
    try_load(base)
}

pub(crate) fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ru(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        FORM_TITLE => "Ввод параметров",
        FORM_TEMPERATURE => "Температура (от 16 до 30):",
        FORM_PRESSURE => "Давление (от 0):",
        FORM_HUMIDITY => "Влажность (от 0 до 100):",
        FORM_OK => "OK",
        FORM_CANCEL => "Отмена",
        FORM_CANCELLED => "Ввод отменён.",
        PANEL_TITLE => "Управление кондиционированием",
        PANEL_PRESSURE => "Давление:",
        PANEL_TEMPERATURE => "Температура:",
        PANEL_AIRFLOW => "Направление обдува:",
        BUTTON_UP => "Вверх",
        BUTTON_DOWN => "Вниз",
        BUTTON_LEFT => "Влево",
        BUTTON_RIGHT => "Вправо",
        POWER_TURN_ON => "Включить",
        POWER_TURN_OFF => "Выключить",
        THEME_DARK => "Темная тема",
        THEME_LIGHT => "Светлая тема",
        UNIT_PASCAL => "Па",
        UNIT_MMHG => "мм рт. ст.",
        DISPLAY_TEMPERATURE => "Температура: {value}",
        DISPLAY_HUMIDITY => "Влажность: {value}%",
        CLI_PROMPT => "> ",
        CLI_HELP => {
            "Команды: up, down, left, right, power, theme, temp <16-30>, tunit <0-2>, punit <0-1>, show, help, quit"
        }
        CLI_UNKNOWN => "Неизвестная команда. Введите help.",
        CLI_POWER_STATE_ON => "Питание: включено",
        CLI_POWER_STATE_OFF => "Питание: выключено",
        CLI_THEME_STATE_LIGHT => "Тема: светлая",
        CLI_THEME_STATE_DARK => "Тема: темная",
        CLI_AIRFLOW => "Направление обдува: ({x}, {y})",
        CLI_AIRFLOW_BLOCKED => "Точка уже у границы.",
        CLI_UNIT_OPTIONS => "Единицы температуры: 0=°C 1=K 2=°F; давления: 0=Па 1=мм рт. ст.",
        CLI_SETTINGS_SAVED => "Настройки сохранены.",
        CLI_EXIT => "Завершение работы.",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        FORM_TITLE => "Enter parameters",
        FORM_TEMPERATURE => "Temperature (16 to 30):",
        FORM_PRESSURE => "Pressure (from 0):",
        FORM_HUMIDITY => "Humidity (0 to 100):",
        FORM_OK => "OK",
        FORM_CANCEL => "Cancel",
        FORM_CANCELLED => "Input cancelled.",
        PANEL_TITLE => "Air conditioning control",
        PANEL_PRESSURE => "Pressure:",
        PANEL_TEMPERATURE => "Temperature:",
        PANEL_AIRFLOW => "Airflow direction:",
        BUTTON_UP => "Up",
        BUTTON_DOWN => "Down",
        BUTTON_LEFT => "Left",
        BUTTON_RIGHT => "Right",
        POWER_TURN_ON => "Turn on",
        POWER_TURN_OFF => "Turn off",
        THEME_DARK => "Dark theme",
        THEME_LIGHT => "Light theme",
        UNIT_PASCAL => "Pa",
        UNIT_MMHG => "mmHg",
        DISPLAY_TEMPERATURE => "Temperature: {value}",
        DISPLAY_HUMIDITY => "Humidity: {value}%",
        CLI_PROMPT => "> ",
        CLI_HELP => {
            "Commands: up, down, left, right, power, theme, temp <16-30>, tunit <0-2>, punit <0-1>, show, help, quit"
        }
        CLI_UNKNOWN => "Unknown command. Type help.",
        CLI_POWER_STATE_ON => "Power: on",
        CLI_POWER_STATE_OFF => "Power: off",
        CLI_THEME_STATE_LIGHT => "Theme: light",
        CLI_THEME_STATE_DARK => "Theme: dark",
        CLI_AIRFLOW => "Airflow direction: ({x}, {y})",
        CLI_AIRFLOW_BLOCKED => "The point is already at the edge.",
        CLI_UNIT_OPTIONS => "Temperature units: 0=°C 1=K 2=°F; pressure: 0=Pa 1=mmHg",
        CLI_SETTINGS_SAVED => "Settings saved.",
        CLI_EXIT => "Exiting.",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        FORM_TITLE => "초기값 입력",
        FORM_TEMPERATURE => "온도 (16 ~ 30):",
        FORM_PRESSURE => "압력 (0 이상):",
        FORM_HUMIDITY => "습도 (0 ~ 100):",
        FORM_OK => "확인",
        FORM_CANCEL => "취소",
        FORM_CANCELLED => "입력이 취소되었습니다.",
        PANEL_TITLE => "에어컨 제어",
        PANEL_PRESSURE => "압력:",
        PANEL_TEMPERATURE => "온도:",
        PANEL_AIRFLOW => "송풍 방향:",
        BUTTON_UP => "위",
        BUTTON_DOWN => "아래",
        BUTTON_LEFT => "왼쪽",
        BUTTON_RIGHT => "오른쪽",
        POWER_TURN_ON => "켜기",
        POWER_TURN_OFF => "끄기",
        THEME_DARK => "다크 테마",
        THEME_LIGHT => "라이트 테마",
        UNIT_PASCAL => "Pa",
        UNIT_MMHG => "mmHg",
        DISPLAY_TEMPERATURE => "온도: {value}",
        DISPLAY_HUMIDITY => "습도: {value}%",
        CLI_UNKNOWN => "알 수 없는 명령입니다. help 를 입력하세요.",
        CLI_POWER_STATE_ON => "전원: 켜짐",
        CLI_POWER_STATE_OFF => "전원: 꺼짐",
        CLI_THEME_STATE_LIGHT => "테마: 라이트",
        CLI_THEME_STATE_DARK => "테마: 다크",
        CLI_AIRFLOW => "송풍 방향: ({x}, {y})",
        CLI_AIRFLOW_BLOCKED => "이미 경계에 도달했습니다.",
        CLI_SETTINGS_SAVED => "설정을 저장했습니다.",
        CLI_EXIT => "프로그램을 종료합니다.",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn korean_falls_back_to_english_for_missing_keys() {
        let tr = Translator::new("ko-kr");
        assert_eq!(tr.t(keys::CLI_PROMPT), "> ");
        assert_eq!(tr.t(keys::BUTTON_UP), "위");
    }

    #[test]
    fn unknown_key_returns_key() {
        let tr = Translator::new("en");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let map = parse_toml_to_map("[power]\nturn_on = \"Start\"\n").unwrap();
        assert_eq!(map.get("power.turn_on").map(String::as_str), Some("Start"));
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("en-US"), Some("ko")), "en");
        assert_eq!(resolve_language(Some("auto"), Some("ko")), "ko");
    }
}
