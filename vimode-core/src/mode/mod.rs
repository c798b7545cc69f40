//! Video-mode record edited by the default control layout

mod tables;

pub use tables::{
    PRESETS, TV_MODES, TV_MODE_DEBUG_INT, TV_MODE_DEBUG_PAL_DS, TV_MODE_DEBUG_PAL_INT,
    TV_MODE_EURGB60_DS, TV_MODE_EURGB60_INT, TV_MODE_EURGB60_PROG, TV_MODE_MPAL_DS,
    TV_MODE_MPAL_INT, TV_MODE_MPAL_PROG, TV_MODE_NTSC_DS, TV_MODE_NTSC_INT, TV_MODE_NTSC_PROG,
    TV_MODE_PAL_DS, TV_MODE_PAL_INT, TV_MODE_PAL_PROG, XFB_MODES, XFB_MODE_DF, XFB_MODE_SF,
};

use crate::control::{Accessor, Control, NumericField};

/// Width used by the widescreen toggle
pub const WIDESCREEN_WIDTH: u16 = 678;
/// Width restored when widescreen is turned off
pub const STANDARD_WIDTH: u16 = 640;

/// Full render-mode record of the video interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VideoMode {
    /// Encoded as `(format << 2) | scan`
    pub tv_mode: u32,
    pub fb_width: u16,
    pub efb_height: u16,
    pub xfb_height: u16,
    pub vi_x_origin: u16,
    pub vi_y_origin: u16,
    pub vi_width: u16,
    pub vi_height: u16,
    pub xfb_mode: u32,
    pub field_rendering: bool,
    pub aa: bool,
    pub sample_pattern: [[u8; 2]; 12],
    pub vfilter: [u8; 7],
}

/// Signal format encoded in the upper bits of `tv_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TvFormat {
    Ntsc,
    Pal,
    Mpal,
    Debug,
    DebugPal,
    Eurgb60,
}

impl TvFormat {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(TvFormat::Ntsc),
            1 => Some(TvFormat::Pal),
            2 => Some(TvFormat::Mpal),
            3 => Some(TvFormat::Debug),
            4 => Some(TvFormat::DebugPal),
            5 => Some(TvFormat::Eurgb60),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TvFormat::Ntsc => "NTSC",
            TvFormat::Pal => "PAL",
            TvFormat::Mpal => "MPAL",
            TvFormat::Debug => "DEBUG",
            TvFormat::DebugPal => "DEBUG PAL",
            TvFormat::Eurgb60 => "EURGB60",
        }
    }

    /// Widest active picture the format allows
    pub fn max_width(self) -> u16 {
        match self {
            TvFormat::Ntsc | TvFormat::Debug => 720,
            TvFormat::Pal | TvFormat::DebugPal => 720,
            TvFormat::Mpal => 720,
            TvFormat::Eurgb60 => 720,
        }
    }
}

/// Scan type encoded in the low bits of `tv_mode`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    Interlaced,
    DoubleStrike,
    Progressive,
}

impl Scan {
    pub fn name(self) -> &'static str {
        match self {
            Scan::Interlaced => "interlaced",
            Scan::DoubleStrike => "double-strike",
            Scan::Progressive => "progressive",
        }
    }
}

impl VideoMode {
    /// Named entry from [`PRESETS`]
    pub fn preset(name: &str) -> Option<VideoMode> {
        PRESETS.by_name(name).copied()
    }

    pub fn format(&self) -> Option<TvFormat> {
        TvFormat::from_bits(self.tv_mode >> 2)
    }

    pub fn scan(&self) -> Option<Scan> {
        match self.tv_mode & 0b11 {
            0 => Some(Scan::Interlaced),
            1 => Some(Scan::DoubleStrike),
            2 => Some(Scan::Progressive),
            _ => None,
        }
    }

    /// Non-interlaced modes need an extra vsync after reconfiguration
    pub fn is_non_interlaced(&self) -> bool {
        self.tv_mode & 1 != 0
    }

    /// One-line description for the summary row
    pub fn summary(&self) -> String {
        let format = self.format().map(TvFormat::name).unwrap_or("?");
        let scan = self.scan().map(Scan::name).unwrap_or("?");
        format!(
            "{}x{} -> {}x{}  {} {}",
            self.fb_width, self.efb_height, self.vi_width, self.vi_height, format, scan
        )
    }
}

impl Default for VideoMode {
    fn default() -> Self {
        tables::NTSC_480_INT_DF
    }
}

/// Set the active width for 16:9 or 4:3 and re-centre it horizontally
pub fn set_widescreen(mode: &mut VideoMode, widescreen: bool) {
    let max_width = mode
        .format()
        .unwrap_or(TvFormat::Ntsc)
        .max_width();
    mode.vi_width = if widescreen {
        WIDESCREEN_WIDTH
    } else {
        STANDARD_WIDTH
    };
    mode.vi_x_origin = max_width.saturating_sub(mode.vi_width) / 2;
}

fn numeric(
    position: (i32, i32),
    label: &'static str,
    field: Accessor<VideoMode, u16>,
) -> Control<VideoMode> {
    Control::numeric(position, label, NumericField::Unsigned(field))
}

/// The editor layout: one row per editable field plus a summary line
///
/// Positions are in the 640-unit-wide logical canvas the widgets scale from.
pub fn default_controls() -> Vec<Control<VideoMode>> {
    vec![
        Control::structured((200, 0), "Video mode: ", &PRESETS),
        Control::enumerated(
            (200, 40),
            "TV mode: ",
            Accessor::new(|m| &m.tv_mode, |m| &mut m.tv_mode),
            &TV_MODES,
        ),
        numeric(
            (60, 60),
            "FB width: ",
            Accessor::new(|m| &m.fb_width, |m| &mut m.fb_width),
        ),
        Control::enumerated(
            (60, 80),
            "XFB mode: ",
            Accessor::new(|m| &m.xfb_mode, |m| &mut m.xfb_mode),
            &XFB_MODES,
        ),
        numeric(
            (360, 60),
            "EFB height: ",
            Accessor::new(|m| &m.efb_height, |m| &mut m.efb_height),
        ),
        numeric(
            (360, 80),
            "XFB height: ",
            Accessor::new(|m| &m.xfb_height, |m| &mut m.xfb_height),
        ),
        numeric(
            (60, 120),
            "VI width: ",
            Accessor::new(|m| &m.vi_width, |m| &mut m.vi_width),
        ),
        numeric(
            (360, 120),
            "VI height: ",
            Accessor::new(|m| &m.vi_height, |m| &mut m.vi_height),
        ),
        numeric(
            (60, 140),
            "VI X origin: ",
            Accessor::new(|m| &m.vi_x_origin, |m| &mut m.vi_x_origin),
        ),
        numeric(
            (360, 140),
            "VI Y origin: ",
            Accessor::new(|m| &m.vi_y_origin, |m| &mut m.vi_y_origin),
        ),
        Control::info((200, 160), None, VideoMode::summary),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buttons::{Buttons, InputSnapshot};
    use crate::clock::ManualClock;
    use crate::registry::Registry;

    fn press(buttons: Buttons) -> InputSnapshot {
        InputSnapshot::new(buttons, buttons)
    }

    #[test]
    fn test_default_is_a_named_preset() {
        assert_eq!(PRESETS.label_of(&VideoMode::default()), Some("TVNtsc480IntDf"));
        assert_eq!(VideoMode::preset("TVNtsc480IntDf"), Some(VideoMode::default()));
        assert_eq!(VideoMode::preset("TVNope"), None);
    }

    #[test]
    fn test_tv_mode_decoding() {
        let mode = VideoMode::preset("TVPal264Ds").unwrap();
        assert_eq!(mode.format(), Some(TvFormat::Pal));
        assert_eq!(mode.scan(), Some(Scan::DoubleStrike));
        assert!(mode.is_non_interlaced());

        let prog = VideoMode::preset("TVNtsc480Prog").unwrap();
        assert_eq!(prog.scan(), Some(Scan::Progressive));
        assert!(!prog.is_non_interlaced());
    }

    #[test]
    fn test_widescreen_recentres() {
        let mut mode = VideoMode::default();
        set_widescreen(&mut mode, true);
        assert_eq!(mode.vi_width, 678);
        assert_eq!(mode.vi_x_origin, 21);

        set_widescreen(&mut mode, false);
        assert_eq!(mode.vi_width, 640);
        assert_eq!(mode.vi_x_origin, 40);
    }

    #[test]
    fn test_default_layout_formats() {
        let reg = Registry::with_clock(default_controls(), VideoMode::default(), ManualClock::new());
        let values = reg.format_all();
        assert_eq!(values[0], "TVNtsc480IntDf");
        assert_eq!(values[1], "VI_TVMODE_NTSC_INT");
        assert_eq!(values[2], " 640");
        assert_eq!(values[3], "VI_XFBMODE_DF");
        assert_eq!(values[8], "  40");
        assert_eq!(values[10], "640x480 -> 640x480  NTSC interlaced");
    }

    #[test]
    fn test_editing_a_field_makes_preset_custom() {
        let mut reg =
            Registry::with_clock(default_controls(), VideoMode::default(), ManualClock::new());
        reg.select_delta(2);
        reg.dispatch_edit(&press(Buttons::RIGHT));
        assert_eq!(reg.pending().fb_width, 641);
        assert_eq!(reg.format_all()[0], "Custom");
    }

    #[test]
    fn test_preset_cycle_from_custom_lands_on_first() {
        let mut mode = VideoMode::default();
        mode.vi_y_origin = 3;
        let mut reg = Registry::with_clock(default_controls(), mode, ManualClock::new());
        reg.dispatch_edit(&press(Buttons::RIGHT));
        assert_eq!(reg.pending(), &PRESETS.entries()[0].0);
    }

    #[test]
    fn test_tv_mode_unknown_value() {
        let mut mode = VideoMode::default();
        mode.tv_mode = 99;
        let mut reg = Registry::with_clock(default_controls(), mode, ManualClock::new());
        reg.select_delta(1);
        assert_eq!(reg.format_active(), "Unknown (99)");

        reg.dispatch_edit(&press(Buttons::RIGHT));
        assert_eq!(reg.pending().tv_mode, TV_MODE_NTSC_INT);
    }

    #[test]
    fn test_xfb_mode_saturates() {
        let mut reg =
            Registry::with_clock(default_controls(), VideoMode::default(), ManualClock::new());
        reg.select_delta(3);
        reg.dispatch_edit(&press(Buttons::RIGHT));
        assert_eq!(reg.pending().xfb_mode, XFB_MODE_DF);
        reg.dispatch_edit(&press(Buttons::LEFT));
        assert_eq!(reg.pending().xfb_mode, XFB_MODE_SF);
    }
}
