// SPDX-License-Identifier: Apache-2.0
//! Template-based SVG generation for puzzle states.
//!
//! Every piece template is drawn centred at the origin pointing up (apex at
//! the top) and placed by a rotate/translate wrapper: slot 1 sits at 0°
//! with slots advancing 30° clockwise, and a piece's centre angle is its
//! start angle plus half its span. Sticker paths carry
//! `id="<piece> <role>"` so downstream tooling can address individual
//! stickers in the emitted document.

use std::fmt::Write as _;

use squan_core::{Layer, PieceKind, PuzzleState};

use crate::color::{ColorScheme, PieceColors};
use crate::error::SceneError;

/// Which layers to include in the emitted document.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LayerChoice {
    /// Top layer only.
    Top,
    /// Bottom layer only.
    Bottom,
    /// Both layers, side by side (or stacked when vertical).
    #[default]
    Both,
}

/// Rendering parameters.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RenderOptions {
    /// Nominal image size in pixels; the drawing itself is laid out on a
    /// 220-unit canvas scaled from a 400-pixel reference.
    pub size: f64,
    /// Ring distance between the two layers, in percent.
    pub gap: f64,
    /// Stack the layers vertically instead of side by side.
    pub vertical: bool,
    /// Draw the slice-position indicator on each layer.
    pub show_slice: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size: 400.0,
            gap: 5.0,
            vertical: false,
            show_slice: true,
        }
    }
}

/// Renders a puzzle state as a standalone SVG document.
///
/// # Errors
/// [`SceneError::UnknownPiece`] when the state carries a piece digit the
/// color tables do not know.
pub fn render(
    state: &PuzzleState,
    scheme: &ColorScheme,
    colors: &PieceColors,
    options: &RenderOptions,
    choice: LayerChoice,
) -> Result<String, SceneError> {
    let frame = Frame::new(options);
    let top = layer_content(&state.top, false, scheme, colors, options, &frame)?;
    let bottom = layer_content(&state.bottom, true, scheme, colors, options, &frame)?;
    Ok(match choice {
        LayerChoice::Top => frame.single_document(&top),
        LayerChoice::Bottom => frame.single_document(&bottom),
        LayerChoice::Both => frame.combined_document(&top, &bottom, options.vertical),
    })
}

/// Shared geometry for one render request.
struct Frame {
    size: f64,
    cx: f64,
    cy: f64,
    margin: f64,
    pad_top: f64,
    pad_other: f64,
    vb_w: f64,
    vb_h: f64,
}

impl Frame {
    fn new(options: &RenderOptions) -> Self {
        let size = options.size * (220.0 / 400.0);
        let cx = size / 2.0;
        let cy = size / 2.0;
        let margin = size * (0.44 * (2.0 + options.gap / 100.0) - 1.0);
        let pad = (size * 0.28).round();

        // The slice indicator bleeds above the natural canvas; reserve
        // room for however far it can reach.
        let slice_h = (122.0 / 220.0) * size;
        let top_apex_y = cy - (123.5 / 220.0) * size;
        let bleed = (-top_apex_y + slice_h * 0.05).ceil().max(0.0);
        let pad_top = pad + bleed;
        let pad_other = pad;

        let vb_w = size + pad_other * 2.0;
        let vb_h = size + pad_top + pad_other;
        Self {
            size,
            cx,
            cy,
            margin,
            pad_top,
            pad_other,
            vb_w,
            vb_h,
        }
    }

    fn single_document(&self, content: &str) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"{x} {y} {w} {h}\">{content}</svg>",
            w = num(self.vb_w),
            h = num(self.vb_h),
            x = num(-self.pad_other),
            y = num(-self.pad_top),
        )
    }

    fn combined_document(&self, top: &str, bottom: &str, vertical: bool) -> String {
        let s = self.size;
        let shift0 = format!(
            "translate({}, {})",
            num(self.pad_other),
            num(self.pad_top)
        );
        let shift1 = if vertical {
            format!(
                "translate({}, {})",
                num(self.pad_other),
                num(self.pad_top + s + self.margin)
            )
        } else {
            format!(
                "translate({}, {})",
                num(self.pad_other + s + self.margin),
                num(self.pad_top)
            )
        };
        let total_w = if vertical {
            self.vb_w
        } else {
            self.pad_other + s + self.margin + s + self.pad_other
        };
        let total_h = if vertical {
            self.pad_top + s + self.margin + s + self.pad_other
        } else {
            self.vb_h
        };
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" \
             viewBox=\"0 0 {w} {h}\"><g transform=\"{shift0}\">{top}</g>\
             <g transform=\"{shift1}\">{bottom}</g></svg>",
            w = num(total_w),
            h = num(total_h),
        )
    }
}

fn layer_content(
    layer: &Layer,
    is_bottom: bool,
    scheme: &ColorScheme,
    colors: &PieceColors,
    options: &RenderOptions,
    frame: &Frame,
) -> Result<String, SceneError> {
    let mut svg = draw_layer(layer, is_bottom, frame.cx, frame.cy, frame.size, scheme, colors)?;
    if options.show_slice {
        svg.push_str(&slice_indicator(is_bottom, frame.cx, frame.cy, frame.size, scheme));
    }
    Ok(svg)
}

/// Renders every piece of one layer, each rotated into its slot around the
/// layer centre.
fn draw_layer(
    layer: &Layer,
    is_bottom: bool,
    cx: f64,
    cy: f64,
    size: f64,
    scheme: &ColorScheme,
    colors: &PieceColors,
) -> Result<String, SceneError> {
    let layer_offset = if is_bottom { -195.0 } else { 15.0 };
    let mut svg = String::new();
    for placement in layer.placements() {
        let span = f64::from(placement.kind.span());
        let start = f64::from(placement.slot - 1) * 30.0;
        let angle = -(start + span * 15.0) + layer_offset;
        let piece = match placement.kind {
            PieceKind::Edge => edge_piece(placement.piece, scheme, colors, size)?,
            PieceKind::Corner => corner_piece(placement.piece, scheme, colors, size)?,
        };
        let _ = write!(
            svg,
            "<g transform=\"translate({},{}) rotate({:.2})\">{piece}</g>",
            num(cx),
            num(cy),
            angle,
        );
    }
    Ok(svg)
}

/// An edge piece centred at origin, pointing up: inner point at the
/// origin, outer band 30° of arc at the top.
fn edge_piece(
    piece: char,
    scheme: &ColorScheme,
    colors: &PieceColors,
    size: f64,
) -> Result<String, SceneError> {
    let paint = colors.edge(piece)?;
    let inner = paint.inner.resolve(scheme);
    let outer = paint.outer.resolve(scheme);
    let border = &scheme.border;

    let scale = (54.0 / 27.0) * (size / 220.0);
    let ox = (50.0 / 100.0) * 27.0;
    let oy = (117.0 / 100.0) * 42.61;
    let tx = -ox * scale;
    let ty = -oy * scale;
    Ok(format!(
        "<g transform=\"translate({tx:.2},{ty:.2}) scale({scale:.4})\">\
         <path fill=\"{border}\" d=\"M.11,4.17l2.4,8.97h21.97l2.4-8.97c.56-2.1-1.02-4.17-3.2-4.17H3.31C1.14,0-.45,2.07.11,4.17Z\"/>\
         <path fill=\"{border}\" d=\"M3.05,15.11l6.57,24.52c1.07,3.98,6.71,3.98,7.77,0l6.57-24.52c.56-2.1-1.02-4.17-3.2-4.17H6.24c-2.18,0-3.76,2.07-3.2,4.17Z\"/>\
         <path class=\"sticker\" id=\"{piece} outer\" fill=\"{outer}\" d=\"M21.3,10.94c.88,0,1.66-.59,1.88-1.45l.78-2.92.51-1.91c.33-1.24-.6-2.45-1.88-2.45H4.41c-1.28,0-2.22,1.22-1.88,2.45l.51,1.91.78,2.92c.23.85,1,1.45,1.88,1.45h15.6Z\"/>\
         <path class=\"sticker\" id=\"{piece} inner\" fill=\"{inner}\" d=\"M19.67,13.14H7.34c-1.28,0-2.22,1.22-1.88,2.45l6.17,23.01c.52,1.93,3.25,1.93,3.77,0l6.17-23.01c.33-1.24-.6-2.45-1.88-2.45Z\"/>\
         </g>"
    ))
}

/// A corner piece centred at origin, pointing up: 60° of arc, apex at the
/// top.
fn corner_piece(
    piece: char,
    scheme: &ColorScheme,
    colors: &PieceColors,
    size: f64,
) -> Result<String, SceneError> {
    let paint = colors.corner(piece)?;
    let top = paint.top.resolve(scheme);
    let left = paint.left.resolve(scheme);
    let right = paint.right.resolve(scheme);
    let border = &scheme.border;

    let scale = (96.0 / 48.5) * (size / 220.0);
    let ox = (-3.5 / 100.0) * 48.5;
    let oy = (103.5 / 100.0) * 48.5;
    let tx = -ox * scale;
    let ty = -oy * scale;
    Ok(format!(
        "<g transform=\"translate({tx:.2},{ty:.2}) scale({scale:.4}) rotate(-45,{ox:.2},{oy:.2})\">\
         <path fill=\"{border}\" d=\"M10.19,2.45l-2.86,10.68h24.73c1.83,0,3.31,1.48,3.31,3.31v24.73l10.68-2.86c1.45-.39,2.45-1.7,2.45-3.2V3.31c0-1.83-1.48-3.31-3.31-3.31H13.39c-1.5,0-2.81,1.01-3.2,2.45Z\"/>\
         <path fill=\"{border}\" d=\"M7.26,13.39L.25,39.56c-1.41,5.28,3.42,10.11,8.7,8.7l26.16-7.01c1.45-.39,2.45-1.7,2.45-3.2V14.25c0-1.83-1.48-3.31-3.31-3.31H10.46c-1.5,0-2.81,1.01-3.2,2.45Z\"/>\
         <path class=\"sticker\" id=\"{piece} right\" fill=\"{right}\" d=\"M35.2,10.94c.52,0,1.01-.21,1.38-.57l.71-.71,5.72-5.72c.64-.64.19-1.73-.72-1.73H14.03c-.88,0-1.66.59-1.88,1.45l-.78,2.92-.51,1.91c-.33,1.24.6,2.45,1.88,2.45h22.47Z\"/>\
         <path class=\"sticker\" id=\"{piece} left\" fill=\"{left}\" d=\"M37.57,35.77c0,1.28,1.22,2.22,2.45,1.88l1.91-.51,2.92-.78c.85-.23,1.45-1,1.45-1.88V6.21c0-.9-1.09-1.36-1.73-.72l-5.72,5.72-.71.71c-.37.37-.57.86-.57,1.38v22.47Z\"/>\
         <path class=\"sticker\" id=\"{piece} top\" fill=\"{top}\" d=\"M33.92,39.28c.85-.23,1.45-1,1.45-1.88V15.09c0-1.08-.87-1.95-1.95-1.95H11.1c-.88,0-1.66.59-1.88,1.45l-7,26.12c-.91,3.39,2.19,6.49,5.58,5.58l26.12-7Z\"/>\
         </g>"
    ))
}

const SLICE_DARK_A: &str = "M42.56,3.6c-.16-.97-.86-1.73-1.81-1.99L35.06.09c-.21-.06-.43-.09-.65-.09-.86,0-1.64.44-2.1,1.17-.46.73-.5,1.63-.13,2.4l1.97,4.05c.42.86,1.28,1.4,2.24,1.4.5,0,.98-.15,1.39-.43l3.73-2.53c.82-.55,1.22-1.5,1.06-2.47Z";
const SLICE_DARK_B: &str = "M8.45,116.55c-.42-.86-1.28-1.4-2.24-1.4-.5,0-.98.15-1.39.43l-3.73,2.53c-.82.55-1.22,1.5-1.06,2.47.16.97.86,1.73,1.81,1.99l5.7,1.53c.21.06.43.09.65.09.86,0,1.64-.44,2.1-1.17.46-.73.5-1.63.13-2.4l-1.97-4.05Z";
const SLICE_FILL_A: &str = "M40.37,3.06l-5.7-1.53c-.09-.02-.18-.04-.26-.04-.69,0-1.21.74-.88,1.42l1.97,4.05c.17.35.52.55.89.55.19,0,.38-.05.55-.17l3.73-2.53c.7-.47.52-1.55-.3-1.77Z";
const SLICE_FILL_B: &str = "M7.1,117.2c-.17-.35-.52-.55-.89-.55-.19,0-.38.05-.55.17l-3.73,2.53c-.7.47-.52,1.55.3,1.77l5.7,1.53c.09.02.18.04.26.04.69,0,1.21-.74.88-1.42l-1.97-4.05Z";

/// The slice-position markers for one layer. The bottom layer's markers
/// are the top's, rotated 30° to sit over its slice line.
fn slice_indicator(is_bottom: bool, cx: f64, cy: f64, size: f64, scheme: &ColorScheme) -> String {
    let scale = (size / 220.0) * 1.965;
    let fill = if is_bottom {
        scheme.slice.as_deref().unwrap_or(&scheme.bottom)
    } else {
        scheme.slice.as_deref().unwrap_or(&scheme.top)
    };
    let transform = if is_bottom {
        format!(
            "translate({},{}) scale({scale:.4}) rotate(-30)",
            num(cx - (98.0 / 220.0) * size),
            num(cy - (86.0 / 220.0) * size),
        )
    } else {
        format!(
            "translate({},{}) scale({scale:.4})",
            num(cx - (42.0 / 220.0) * size),
            num(cy - (123.5 / 220.0) * size),
        )
    };
    format!(
        "<g transform=\"{transform}\">\
         <path d=\"{SLICE_DARK_A}\"/>\
         <path d=\"{SLICE_DARK_B}\"/>\
         <path fill=\"{fill}\" d=\"{SLICE_FILL_A}\"/>\
         <path fill=\"{fill}\" d=\"{SLICE_FILL_B}\"/>\
         </g>"
    )
}

/// Compact decimal formatting: two places, trailing zeros trimmed.
fn num(value: f64) -> String {
    let mut text = format!("{value:.2}");
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    if text == "-0" {
        text = "0".to_owned();
    }
    text
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn solved_svg(choice: LayerChoice) -> String {
        render(
            &PuzzleState::solved(),
            &ColorScheme::default(),
            &PieceColors::default(),
            &RenderOptions::default(),
            choice,
        )
        .unwrap()
    }

    #[test]
    fn combined_document_is_standalone_svg() {
        let svg = solved_svg(LayerChoice::Both);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.matches("viewBox=").count() == 1);
    }

    #[test]
    fn sticker_counts_match_the_solved_state() {
        // Per layer: 4 edges × 2 stickers + 4 corners × 3 stickers.
        let top = solved_svg(LayerChoice::Top);
        assert_eq!(top.matches("class=\"sticker\"").count(), 20);
        let both = solved_svg(LayerChoice::Both);
        assert_eq!(both.matches("class=\"sticker\"").count(), 40);
    }

    #[test]
    fn sticker_ids_address_piece_and_role() {
        let svg = solved_svg(LayerChoice::Top);
        assert!(svg.contains("id=\"0 inner\""));
        assert!(svg.contains("id=\"0 outer\""));
        assert!(svg.contains("id=\"1 top\""));
        assert!(svg.contains("id=\"7 left\""));
    }

    #[test]
    fn slice_indicator_obeys_the_toggle_and_override() {
        let no_slice = render(
            &PuzzleState::solved(),
            &ColorScheme::default(),
            &PieceColors::default(),
            &RenderOptions {
                show_slice: false,
                ..RenderOptions::default()
            },
            LayerChoice::Top,
        )
        .unwrap();
        assert!(!no_slice.contains(SLICE_DARK_A));

        let scheme = ColorScheme {
            slice: Some("#777777".to_owned()),
            ..ColorScheme::default()
        };
        let overridden = render(
            &PuzzleState::solved(),
            &scheme,
            &PieceColors::default(),
            &RenderOptions::default(),
            LayerChoice::Bottom,
        )
        .unwrap();
        assert!(overridden.contains("fill=\"#777777\""));
    }

    #[test]
    fn custom_sticker_paint_reaches_the_output() {
        let mut colors = PieceColors::default();
        colors
            .set_sticker('5', crate::color::StickerRole::Top, crate::color::Paint::Color("#101112".to_owned()))
            .unwrap();
        let svg = render(
            &PuzzleState::solved(),
            &ColorScheme::default(),
            &colors,
            &RenderOptions::default(),
            LayerChoice::Top,
        )
        .unwrap();
        assert!(svg.contains("id=\"5 top\" fill=\"#101112\""));
    }

    #[test]
    fn vertical_layout_changes_the_canvas_shape() {
        let horizontal = solved_svg(LayerChoice::Both);
        let vertical = render(
            &PuzzleState::solved(),
            &ColorScheme::default(),
            &PieceColors::default(),
            &RenderOptions {
                vertical: true,
                ..RenderOptions::default()
            },
            LayerChoice::Both,
        )
        .unwrap();
        assert_ne!(horizontal, vertical);
    }

    #[test]
    fn compact_numbers_drop_trailing_zeros() {
        assert_eq!(num(68.0), "68");
        assert_eq!(num(68.5), "68.5");
        assert_eq!(num(-0.004), "0");
        assert_eq!(num(3.456), "3.46");
    }
}
