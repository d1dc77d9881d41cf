//! 라이트/다크 테마와 팔레트 색상.
//!
//! 렌더링 프레임워크와 무관한 RGB 값만 담는다. GUI 쪽에서 egui Visuals 로 옮긴다.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// 시작 상태. 토글 버튼에는 "다크 테마"가 표시된다.
    #[default]
    Light,
    Dark,
}

/// 창 전체에 적용할 팔레트.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub window: Rgb,
    pub window_text: Rgb,
    pub base: Rgb,
    pub alternate_base: Rgb,
    pub text: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub bright_text: Rgb,
    pub link: Rgb,
    pub highlight: Rgb,
    pub highlighted_text: Rgb,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// 사각형 테두리, 축, 글자에 쓰는 색.
    pub fn stroke_color(self) -> Rgb {
        match self {
            Theme::Light => Rgb::BLACK,
            Theme::Dark => Rgb::WHITE,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                window: Rgb(255, 255, 255),
                window_text: Rgb::BLACK,
                base: Rgb(240, 240, 240),
                alternate_base: Rgb(255, 255, 255),
                text: Rgb::BLACK,
                button: Rgb(240, 240, 240),
                button_text: Rgb::BLACK,
                bright_text: Rgb(255, 0, 0),
                link: Rgb(0, 0, 255),
                highlight: Rgb(0, 120, 215),
                highlighted_text: Rgb::WHITE,
            },
            Theme::Dark => Palette {
                window: Rgb(53, 53, 53),
                window_text: Rgb::WHITE,
                base: Rgb(25, 25, 25),
                alternate_base: Rgb(53, 53, 53),
                text: Rgb::WHITE,
                button: Rgb(53, 53, 53),
                button_text: Rgb::WHITE,
                bright_text: Rgb(255, 0, 0),
                link: Rgb(42, 130, 218),
                highlight: Rgb(42, 130, 218),
                highlighted_text: Rgb::BLACK,
            },
        }
    }
}
