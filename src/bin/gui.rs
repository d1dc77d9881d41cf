#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use std::{fs, path::Path, path::PathBuf};
use aircon_panel::{
    airflow::{AirflowPoint, Direction},
    config,
    engine::{ControlEngine, EngineEvent, LogObserver, PanelSnapshot},
    i18n::{self, keys, Language, Translator},
    logging,
    theme::{Rgb, Theme},
    units::{PressureUnit, TemperatureUnit},
    validation::{RawReadings, TEMPERATURE_MAX_C, TEMPERATURE_MIN_C},
};

const FORM_SIZE: egui::Vec2 = egui::Vec2::new(800.0, 600.0);
const PANEL_SIZE: egui::Vec2 = egui::Vec2::new(1024.0, 768.0);
const MIN_SIZE: egui::Vec2 = egui::Vec2::new(800.0, 600.0);
const BAR_SIZE: egui::Vec2 = egui::Vec2::new(300.0, 100.0);
const PLANE_SIZE: f32 = 300.0;
const MARKER_RADIUS: f32 = 5.0;

/// 에어컨 제어 패널 시뮬레이터.
#[derive(Debug, Parser)]
#[command(name = "aircon_panel", version, about)]
struct Args {
    /// 설정 파일 경로
    #[arg(long)]
    settings: Option<PathBuf>,
    /// 표시 언어 (auto/ru/en/ko)
    #[arg(long, short = 'L')]
    lang: Option<String>,
    /// 언어팩 디렉터리
    #[arg(long)]
    lang_pack: Option<PathBuf>,
}

fn main() -> Result<(), eframe::Error> {
    logging::init();
    let args = Args::parse();

    let settings_file = config::settings_path(args.settings.as_deref());
    let settings = config::load_or_default(&settings_file);
    let lang = i18n::resolve_language(args.lang.as_deref(), settings.language.as_deref());
    let tr = Translator::new_with_pack(&lang, args.lang_pack.as_deref());

    let mut viewport = egui::ViewportBuilder::default()
        .with_title(tr.t(keys::FORM_TITLE))
        .with_inner_size(FORM_SIZE)
        .with_min_inner_size(MIN_SIZE)
        .with_max_inner_size(PANEL_SIZE);
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    eframe::run_native(
        "Air Conditioning Control",
        options,
        Box::new(move |cc| {
            if tr.language() == Language::Ko {
                if let Err(e) = setup_fonts(&cc.egui_ctx) {
                    tracing::warn!("font error: {e}");
                }
            }
            set_text_size(&cc.egui_ctx, 20.0);
            cc.egui_ctx.set_visuals(visuals_for(Theme::default()));
            Box::new(GuiApp::new(tr, settings, settings_file))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

/// 기본 폰트 뒤에 대체 폰트로 등록한다. 라틴/키릴 문자는 기본 폰트가 그대로 그린다.
fn apply_fallback_font(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts
            .families
            .entry(family)
            .or_default()
            .push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

/// 한글 표시용 시스템 폰트를 찾아 적용한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates: Vec<PathBuf> = [
        "assets/fonts/malgun.ttf",
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        candidates.extend(["malgun.ttf", "gulim.ttc"].iter().map(|f| fonts.join(f)));
    }
    let path = candidates
        .into_iter()
        .find(|p| p.exists())
        .ok_or_else(|| "no Korean font found, Hangul may not render".to_string())?;
    let bytes = fs::read(&path)
        .map_err(|e| format!("failed to read font file ({}): {e}", path.display()))?;
    apply_fallback_font(ctx, bytes, "korean_font");
    Ok(())
}

fn set_text_size(ctx: &egui::Context, size: f32) {
    let mut style = (*ctx.style()).clone();
    for style_kind in [egui::TextStyle::Body, egui::TextStyle::Button] {
        style
            .text_styles
            .insert(style_kind, egui::FontId::proportional(size));
    }
    style
        .text_styles
        .insert(egui::TextStyle::Heading, egui::FontId::proportional(size + 4.0));
    style.spacing.slider_width = 240.0;
    ctx.set_style(style);
}

fn color(rgb: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

/// 테마 팔레트를 egui Visuals 로 옮긴다.
fn visuals_for(theme: Theme) -> egui::Visuals {
    let p = theme.palette();
    let mut v = if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    };
    v.panel_fill = color(p.window);
    v.window_fill = color(p.window);
    v.extreme_bg_color = color(p.base);
    v.faint_bg_color = color(p.alternate_base);
    v.override_text_color = Some(color(p.text));
    v.hyperlink_color = color(p.link);
    v.error_fg_color = color(p.bright_text);
    v.selection.bg_fill = color(p.highlight);
    v.selection.stroke.color = color(p.highlighted_text);
    for w in [&mut v.widgets.inactive, &mut v.widgets.noninteractive] {
        w.weak_bg_fill = color(p.button);
        w.fg_stroke.color = color(p.button_text);
    }
    v
}

/// 아래에서부터 채워지는 막대 영역.
fn bottom_fill(frame: egui::Rect, ratio: f64) -> egui::Rect {
    let height = frame.height() * ratio.clamp(0.0, 1.0) as f32;
    egui::Rect::from_min_max(
        egui::pos2(frame.left(), frame.bottom() - height),
        frame.right_bottom(),
    )
}

/// 평면 좌상단 기준 마커 중심 위치. 화면 y는 아래로 증가하므로 뒤집는다.
fn marker_offset(point: AirflowPoint) -> egui::Vec2 {
    let half = PLANE_SIZE / 2.0;
    egui::vec2(half + point.x as f32, half - point.y as f32)
}

fn paint_bar(ui: &mut egui::Ui, ratio: f64, fill: egui::Color32, text: &str, stroke: egui::Color32) {
    let (response, painter) = ui.allocate_painter(BAR_SIZE, egui::Sense::hover());
    let frame = response.rect;
    painter.rect_filled(bottom_fill(frame, ratio), 0.0, fill);
    painter.rect_stroke(frame, 0.0, egui::Stroke::new(1.0, stroke));
    painter.text(
        frame.left_top() + egui::vec2(4.0, 4.0),
        egui::Align2::LEFT_TOP,
        text,
        egui::FontId::proportional(16.0),
        stroke,
    );
}

fn paint_plane(ui: &mut egui::Ui, point: AirflowPoint, stroke: egui::Color32) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(PLANE_SIZE, PLANE_SIZE), egui::Sense::hover());
    let rect = response.rect;
    let origin = rect.left_top();
    let half = PLANE_SIZE / 2.0;
    let pen = egui::Stroke::new(1.0, stroke);
    painter.line_segment(
        [origin + egui::vec2(0.0, half), origin + egui::vec2(PLANE_SIZE, half)],
        pen,
    );
    painter.line_segment(
        [origin + egui::vec2(half, 0.0), origin + egui::vec2(half, PLANE_SIZE)],
        pen,
    );
    let font = egui::FontId::proportional(14.0);
    painter.text(
        origin + egui::vec2(PLANE_SIZE - 2.0, half - 2.0),
        egui::Align2::RIGHT_BOTTOM,
        "X",
        font.clone(),
        stroke,
    );
    painter.text(
        origin + egui::vec2(half + 4.0, 2.0),
        egui::Align2::LEFT_TOP,
        "Y",
        font,
        stroke,
    );
    painter.circle_filled(origin + marker_offset(point), MARKER_RADIUS, egui::Color32::RED);
}

enum Stage {
    Form(RawReadings),
    Panel(Box<ControlEngine>),
}

struct GuiApp {
    tr: Translator,
    settings: config::PanelSettings,
    settings_file: PathBuf,
    stage: Stage,
    saved: bool,
}

impl GuiApp {
    fn new(tr: Translator, settings: config::PanelSettings, settings_file: PathBuf) -> Self {
        Self {
            tr,
            settings,
            settings_file,
            stage: Stage::Form(RawReadings::default()),
            saved: false,
        }
    }

    /// 보정된 초기값으로 엔진을 만들고 저장된 단위를 복원한다.
    fn build_engine(&self, ctx: &egui::Context, raw: &RawReadings) -> ControlEngine {
        let mut engine = ControlEngine::new(raw.validate());
        engine.subscribe(LogObserver);
        let ctx = ctx.clone();
        engine.subscribe(move |event: &EngineEvent| {
            if let EngineEvent::ThemeChanged(theme) = event {
                ctx.set_visuals(visuals_for(*theme));
            }
        });
        self.settings.apply_to(&mut engine);
        engine
    }

    fn enter_panel(&mut self, ctx: &egui::Context, raw: RawReadings) {
        let engine = self.build_engine(ctx, &raw);
        set_text_size(ctx, 16.0);
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(self.tr.t(keys::PANEL_TITLE)));
        ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(PANEL_SIZE));
        self.stage = Stage::Panel(Box::new(engine));
    }

    fn ui_form(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let Stage::Form(raw) = &mut self.stage else {
            return;
        };
        let mut accepted = false;
        let mut cancelled = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(tr.t(keys::FORM_TITLE));
            ui.add_space(12.0);
            let fields = [
                (keys::FORM_TEMPERATURE, &mut raw.temperature, "°C".to_string()),
                (keys::FORM_PRESSURE, &mut raw.pressure, tr.t(keys::UNIT_PASCAL)),
                (keys::FORM_HUMIDITY, &mut raw.humidity, "%".to_string()),
            ];
            for (label, value, unit) in fields {
                ui.label(tr.t(label));
                ui.horizontal(|ui| {
                    ui.add(egui::TextEdit::singleline(value).desired_width(400.0));
                    ui.label(unit);
                });
                ui.add_space(12.0);
            }
            ui.separator();
            ui.horizontal(|ui| {
                accepted = ui.button(tr.t(keys::FORM_OK)).clicked();
                cancelled = ui.button(tr.t(keys::FORM_CANCEL)).clicked();
            });
            if ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                accepted = true;
            }
            if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                cancelled = true;
            }
        });
        if accepted {
            let raw = std::mem::take(raw);
            self.enter_panel(ctx, raw);
        } else if cancelled {
            tracing::info!("startup form cancelled");
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn ui_panel(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let Stage::Panel(engine) = &mut self.stage else {
            return;
        };
        let snap = engine.snapshot(&tr);
        egui::CentralPanel::default().show(ctx, |ui| {
            ui_pressure_row(ui, engine, &snap, &tr);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui_temperature_row(ui, engine, &snap, &tr);
                ui.separator();
                ui_airflow_buttons(ui, engine, &tr);
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(snap.power_label.as_str()).clicked() {
                    engine.toggle_power();
                }
                if ui.button(snap.theme_label.as_str()).clicked() {
                    engine.toggle_theme();
                }
            });
            ui.add_space(8.0);
            // 테마 버튼을 누른 프레임에서도 새 색으로 그린다.
            let stroke = color(engine.theme().stroke_color());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    paint_bar(
                        ui,
                        snap.temperature_fill,
                        egui::Color32::GREEN,
                        &snap.temperature_text,
                        stroke,
                    );
                    ui.add_space(8.0);
                    paint_bar(
                        ui,
                        snap.humidity_fill,
                        egui::Color32::BLUE,
                        &snap.humidity_text,
                        stroke,
                    );
                });
                paint_plane(ui, engine.airflow(), stroke);
            });
        });
    }

    /// 창을 닫을 때 단위 선택을 한 번만 저장한다.
    fn save_on_close(&mut self) {
        if self.saved {
            return;
        }
        if let Stage::Panel(engine) = &self.stage {
            aircon_panel::app::persist(&self.settings, engine, &self.settings_file);
        }
        self.saved = true;
    }
}

fn ui_pressure_row(ui: &mut egui::Ui, engine: &mut ControlEngine, snap: &PanelSnapshot, tr: &Translator) {
    ui.horizontal(|ui| {
        ui.label(tr.t(keys::PANEL_PRESSURE));
        ui.label(snap.pressure_text.as_str());
        let mut index = snap.pressure_unit.index();
        egui::ComboBox::from_id_source("pressure_unit").show_index(
            ui,
            &mut index,
            PressureUnit::ALL.len(),
            |i| aircon_panel::display::pressure_unit_label(tr, PressureUnit::ALL[i]),
        );
        if index != snap.pressure_unit.index() {
            engine.set_pressure_unit_index(index);
        }
    });
}

fn ui_temperature_row(ui: &mut egui::Ui, engine: &mut ControlEngine, snap: &PanelSnapshot, tr: &Translator) {
    ui.label(tr.t(keys::PANEL_TEMPERATURE));
    let mut celsius = snap.temperature_c;
    let slider = egui::Slider::new(&mut celsius, TEMPERATURE_MIN_C..=TEMPERATURE_MAX_C)
        .show_value(false);
    if ui.add(slider).changed() {
        engine.set_temperature(celsius);
    }
    let mut index = snap.temperature_unit.index();
    egui::ComboBox::from_id_source("temperature_unit").show_index(
        ui,
        &mut index,
        TemperatureUnit::ALL.len(),
        |i| TemperatureUnit::ALL[i].symbol(),
    );
    if index != snap.temperature_unit.index() {
        engine.set_temperature_unit_index(index);
    }
}

fn ui_airflow_buttons(ui: &mut egui::Ui, engine: &mut ControlEngine, tr: &Translator) {
    ui.vertical(|ui| {
        ui.label(tr.t(keys::PANEL_AIRFLOW));
        ui.horizontal(|ui| {
            for direction in Direction::ALL {
                let key = match direction {
                    Direction::Up => keys::BUTTON_UP,
                    Direction::Down => keys::BUTTON_DOWN,
                    Direction::Left => keys::BUTTON_LEFT,
                    Direction::Right => keys::BUTTON_RIGHT,
                };
                if ui.button(tr.t(key)).clicked() {
                    engine.move_airflow(direction);
                }
            }
        });
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        if ctx.input(|i| i.viewport().close_requested()) {
            self.save_on_close();
        }
        match self.stage {
            Stage::Form(_) => self.ui_form(ctx),
            Stage::Panel(_) => self.ui_panel(ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_visuals_use_dark_palette() {
        let v = visuals_for(Theme::Dark);
        assert!(v.dark_mode);
        assert_eq!(v.panel_fill, egui::Color32::from_rgb(53, 53, 53));
        assert_eq!(v.override_text_color, Some(egui::Color32::WHITE));
        let v = visuals_for(Theme::Light);
        assert!(!v.dark_mode);
        assert_eq!(v.override_text_color, Some(egui::Color32::BLACK));
    }

    #[test]
    fn marker_flips_y_axis() {
        assert_eq!(marker_offset(AirflowPoint::new(0, 0)), egui::vec2(150.0, 150.0));
        assert_eq!(marker_offset(AirflowPoint::new(150, 150)), egui::vec2(300.0, 0.0));
        assert_eq!(marker_offset(AirflowPoint::new(-150, -150)), egui::vec2(0.0, 300.0));
    }

    #[test]
    fn fill_grows_from_bottom() {
        let frame = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), BAR_SIZE);
        let half = bottom_fill(frame, 0.5);
        assert_eq!(half.top(), 50.0);
        assert_eq!(half.bottom(), 100.0);
        assert_eq!(bottom_fill(frame, 0.0).height(), 0.0);
        assert_eq!(bottom_fill(frame, 3.0).height(), 100.0);
    }

    #[test]
    fn form_then_panel_restores_units() {
        let settings = config::PanelSettings {
            language: None,
            temperature_unit: Some(config::UnitIndex { index: 2 }),
            pressure_unit: Some(config::UnitIndex { index: 1 }),
        };
        let app = GuiApp::new(Translator::new("en"), settings, PathBuf::from("unused.toml"));
        let ctx = egui::Context::default();
        let raw = RawReadings {
            temperature: "40".into(),
            pressure: "-5".into(),
            humidity: "150".into(),
        };
        let engine = app.build_engine(&ctx, &raw);
        assert_eq!(engine.temperature_unit(), TemperatureUnit::Fahrenheit);
        assert_eq!(engine.pressure_unit(), PressureUnit::MmHg);
        assert_eq!(engine.settings().temperature, 30);
        assert_eq!(engine.settings().pressure, 0);
        assert_eq!(engine.settings().humidity, 100);
    }
}
