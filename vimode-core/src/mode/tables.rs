//! Lookup tables for TV modes, XFB modes and complete mode presets

use super::VideoMode;
use crate::label::LabelTable;

const fn tv_mode(format: u32, scan: u32) -> u32 {
    (format << 2) | scan
}

const NTSC: u32 = 0;
const PAL: u32 = 1;
const MPAL: u32 = 2;
const DEBUG: u32 = 3;
const DEBUG_PAL: u32 = 4;
const EURGB60: u32 = 5;

const INTERLACE: u32 = 0;
const NON_INTERLACE: u32 = 1;
const PROGRESSIVE: u32 = 2;

pub const TV_MODE_NTSC_INT: u32 = tv_mode(NTSC, INTERLACE);
pub const TV_MODE_NTSC_DS: u32 = tv_mode(NTSC, NON_INTERLACE);
pub const TV_MODE_NTSC_PROG: u32 = tv_mode(NTSC, PROGRESSIVE);
pub const TV_MODE_PAL_INT: u32 = tv_mode(PAL, INTERLACE);
pub const TV_MODE_PAL_DS: u32 = tv_mode(PAL, NON_INTERLACE);
pub const TV_MODE_PAL_PROG: u32 = tv_mode(PAL, PROGRESSIVE);
pub const TV_MODE_EURGB60_INT: u32 = tv_mode(EURGB60, INTERLACE);
pub const TV_MODE_EURGB60_DS: u32 = tv_mode(EURGB60, NON_INTERLACE);
pub const TV_MODE_EURGB60_PROG: u32 = tv_mode(EURGB60, PROGRESSIVE);
pub const TV_MODE_MPAL_INT: u32 = tv_mode(MPAL, INTERLACE);
pub const TV_MODE_MPAL_DS: u32 = tv_mode(MPAL, NON_INTERLACE);
pub const TV_MODE_MPAL_PROG: u32 = tv_mode(MPAL, PROGRESSIVE);
pub const TV_MODE_DEBUG_INT: u32 = tv_mode(DEBUG, INTERLACE);
pub const TV_MODE_DEBUG_PAL_INT: u32 = tv_mode(DEBUG_PAL, INTERLACE);
pub const TV_MODE_DEBUG_PAL_DS: u32 = tv_mode(DEBUG_PAL, NON_INTERLACE);

pub const XFB_MODE_SF: u32 = 0;
pub const XFB_MODE_DF: u32 = 1;

pub static TV_MODES: LabelTable<u32> = LabelTable::new(&[
    (TV_MODE_NTSC_INT, "VI_TVMODE_NTSC_INT"),
    (TV_MODE_NTSC_DS, "VI_TVMODE_NTSC_DS"),
    (TV_MODE_NTSC_PROG, "VI_TVMODE_NTSC_PROG"),
    (TV_MODE_PAL_INT, "VI_TVMODE_PAL_INT"),
    (TV_MODE_PAL_DS, "VI_TVMODE_PAL_DS"),
    (TV_MODE_PAL_PROG, "VI_TVMODE_PAL_PROG"),
    (TV_MODE_EURGB60_INT, "VI_TVMODE_EURGB60_INT"),
    (TV_MODE_EURGB60_DS, "VI_TVMODE_EURGB60_DS"),
    (TV_MODE_EURGB60_PROG, "VI_TVMODE_EURGB60_PROG"),
    (TV_MODE_MPAL_INT, "VI_TVMODE_MPAL_INT"),
    (TV_MODE_MPAL_DS, "VI_TVMODE_MPAL_DS"),
    (TV_MODE_MPAL_PROG, "VI_TVMODE_MPAL_PROG"),
    (TV_MODE_DEBUG_INT, "VI_TVMODE_DEBUG_INT"),
    (TV_MODE_DEBUG_PAL_INT, "VI_TVMODE_DEBUG_PAL_INT"),
    (TV_MODE_DEBUG_PAL_DS, "VI_TVMODE_DEBUG_PAL_DS"),
]);

pub static XFB_MODES: LabelTable<u32> = LabelTable::new(&[
    (XFB_MODE_SF, "VI_XFBMODE_SF"),
    (XFB_MODE_DF, "VI_XFBMODE_DF"),
]);

const MAX_WIDTH: u16 = 720;
const MAX_HEIGHT_NTSC: u16 = 480;
const MAX_HEIGHT_PAL: u16 = 574;

/// Non-antialiased sample pattern
const CENTERED: [[u8; 2]; 12] = [[6, 6]; 12];
/// Multisample pattern of the antialiased modes
const JITTERED: [[u8; 2]; 12] = [
    [3, 2],
    [9, 6],
    [3, 10],
    [3, 2],
    [9, 6],
    [3, 10],
    [9, 2],
    [3, 6],
    [9, 10],
    [9, 2],
    [3, 6],
    [9, 10],
];
/// Copy filter without vertical blending
const SHARP: [u8; 7] = [0, 0, 21, 22, 21, 0, 0];
/// Copy filter used by deflicker modes
const DEFLICKER: [u8; 7] = [8, 8, 10, 12, 10, 8, 8];
/// Copy filter used by the antialiased modes
const BLEND: [u8; 7] = [4, 8, 12, 16, 12, 8, 4];

/// Mode with the usual 640-wide centred picture
const fn mode(
    tv_mode: u32,
    efb_height: u16,
    xfb_height: u16,
    vi_height: u16,
    max_height: u16,
    xfb_mode: u32,
    vfilter: [u8; 7],
) -> VideoMode {
    VideoMode {
        tv_mode,
        fb_width: 640,
        efb_height,
        xfb_height,
        vi_x_origin: (MAX_WIDTH - 640) / 2,
        vi_y_origin: (max_height - vi_height) / 2,
        vi_width: 640,
        vi_height,
        xfb_mode,
        field_rendering: false,
        aa: false,
        sample_pattern: CENTERED,
        vfilter,
    }
}

/// Renders one field per frame
const fn field_rendered(mode: VideoMode) -> VideoMode {
    VideoMode {
        field_rendering: true,
        ..mode
    }
}

const fn antialiased(mode: VideoMode) -> VideoMode {
    VideoMode {
        aa: true,
        sample_pattern: JITTERED,
        ..mode
    }
}

pub(super) const NTSC_480_INT_DF: VideoMode = mode(
    TV_MODE_NTSC_INT,
    480,
    480,
    480,
    MAX_HEIGHT_NTSC,
    XFB_MODE_DF,
    DEFLICKER,
);

/// Complete modes selectable from the "Video mode" row
pub static PRESETS: LabelTable<VideoMode> = LabelTable::new(&[
    (mode(TV_MODE_NTSC_DS, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP), "TVNtsc240Ds"),
    (
        antialiased(mode(TV_MODE_NTSC_DS, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP)),
        "TVNtsc240DsAa",
    ),
    (
        field_rendered(mode(TV_MODE_NTSC_INT, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP)),
        "TVNtsc240Int",
    ),
    (
        antialiased(field_rendered(mode(TV_MODE_NTSC_INT, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP))),
        "TVNtsc240IntAa",
    ),
    (mode(TV_MODE_NTSC_INT, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, SHARP), "TVNtsc480Int"),
    (NTSC_480_INT_DF, "TVNtsc480IntDf"),
    (
        antialiased(mode(TV_MODE_NTSC_INT, 242, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, BLEND)),
        "TVNtsc480IntAa",
    ),
    (mode(TV_MODE_NTSC_PROG, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP), "TVNtsc480Prog"),
    (
        mode(TV_MODE_NTSC_PROG, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, DEFLICKER),
        "TVNtsc480ProgSoft",
    ),
    (
        antialiased(mode(TV_MODE_NTSC_PROG, 242, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, BLEND)),
        "TVNtsc480ProgAa",
    ),
    (mode(TV_MODE_MPAL_DS, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP), "TVMpal240Ds"),
    (
        antialiased(mode(TV_MODE_MPAL_DS, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP)),
        "TVMpal240DsAa",
    ),
    (
        field_rendered(mode(TV_MODE_MPAL_INT, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP)),
        "TVMpal240Int",
    ),
    (
        antialiased(field_rendered(mode(TV_MODE_MPAL_INT, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP))),
        "TVMpal240IntAa",
    ),
    (mode(TV_MODE_MPAL_INT, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, SHARP), "TVMpal480Int"),
    (
        mode(TV_MODE_MPAL_INT, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, DEFLICKER),
        "TVMpal480IntDf",
    ),
    (
        antialiased(mode(TV_MODE_MPAL_INT, 242, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, BLEND)),
        "TVMpal480IntAa",
    ),
    (mode(TV_MODE_MPAL_PROG, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP), "TVMpal480Prog"),
    (
        mode(TV_MODE_MPAL_PROG, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, DEFLICKER),
        "TVMpal480ProgSoft",
    ),
    (
        antialiased(mode(TV_MODE_MPAL_PROG, 242, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, BLEND)),
        "TVMpal480ProgAa",
    ),
    (mode(TV_MODE_PAL_DS, 264, 264, 528, MAX_HEIGHT_PAL, XFB_MODE_SF, SHARP), "TVPal264Ds"),
    (
        antialiased(mode(TV_MODE_PAL_DS, 264, 264, 528, MAX_HEIGHT_PAL, XFB_MODE_SF, SHARP)),
        "TVPal264DsAa",
    ),
    (
        field_rendered(mode(TV_MODE_PAL_INT, 264, 264, 528, MAX_HEIGHT_PAL, XFB_MODE_SF, SHARP)),
        "TVPal264Int",
    ),
    (
        antialiased(field_rendered(mode(TV_MODE_PAL_INT, 264, 264, 528, MAX_HEIGHT_PAL, XFB_MODE_SF, SHARP))),
        "TVPal264IntAa",
    ),
    (mode(TV_MODE_PAL_INT, 528, 528, 528, MAX_HEIGHT_PAL, XFB_MODE_DF, SHARP), "TVPal528Int"),
    (mode(TV_MODE_PAL_INT, 528, 528, 528, MAX_HEIGHT_PAL, XFB_MODE_DF, DEFLICKER), "TVPal528IntDf"),
    (
        antialiased(mode(TV_MODE_PAL_INT, 264, 524, 524, MAX_HEIGHT_PAL, XFB_MODE_DF, BLEND)),
        "TVPal524IntAa",
    ),
    (
        mode(TV_MODE_PAL_INT, 480, 574, 574, MAX_HEIGHT_PAL, XFB_MODE_DF, DEFLICKER),
        "TVPal576IntDfScale",
    ),
    (mode(TV_MODE_PAL_PROG, 528, 528, 528, MAX_HEIGHT_PAL, XFB_MODE_SF, SHARP), "TVPal528Prog"),
    (
        mode(TV_MODE_PAL_PROG, 528, 528, 528, MAX_HEIGHT_PAL, XFB_MODE_SF, DEFLICKER),
        "TVPal528ProgSoft",
    ),
    (
        antialiased(mode(TV_MODE_PAL_PROG, 264, 524, 524, MAX_HEIGHT_PAL, XFB_MODE_SF, BLEND)),
        "TVPal524ProgAa",
    ),
    (
        mode(TV_MODE_PAL_PROG, 480, 574, 574, MAX_HEIGHT_PAL, XFB_MODE_SF, DEFLICKER),
        "TVPal576ProgScale",
    ),
    (
        mode(TV_MODE_EURGB60_DS, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP),
        "TVEurgb60Hz240Ds",
    ),
    (
        antialiased(mode(TV_MODE_EURGB60_DS, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP)),
        "TVEurgb60Hz240DsAa",
    ),
    (
        field_rendered(mode(TV_MODE_EURGB60_INT, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP)),
        "TVEurgb60Hz240Int",
    ),
    (
        antialiased(field_rendered(mode(TV_MODE_EURGB60_INT, 240, 240, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP))),
        "TVEurgb60Hz240IntAa",
    ),
    (
        mode(TV_MODE_EURGB60_INT, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, SHARP),
        "TVEurgb60Hz480Int",
    ),
    (
        mode(TV_MODE_EURGB60_INT, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, DEFLICKER),
        "TVEurgb60Hz480IntDf",
    ),
    (
        antialiased(mode(TV_MODE_EURGB60_INT, 242, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_DF, BLEND)),
        "TVEurgb60Hz480IntAa",
    ),
    (
        mode(TV_MODE_EURGB60_PROG, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, SHARP),
        "TVEurgb60Hz480Prog",
    ),
    (
        mode(TV_MODE_EURGB60_PROG, 480, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, DEFLICKER),
        "TVEurgb60Hz480ProgSoft",
    ),
    (
        antialiased(mode(TV_MODE_EURGB60_PROG, 242, 480, 480, MAX_HEIGHT_NTSC, XFB_MODE_SF, BLEND)),
        "TVEurgb60Hz480ProgAa",
    ),
]);
