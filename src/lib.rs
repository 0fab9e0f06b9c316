// ============================================================================
// CRATE CONFIGURATION & IMPORTS
// ============================================================================

// External crate imports
use bon::Builder;
use pixels::{Pixels, SurfaceTexture};
use rusttype::{Font, Scale};

// Standard library imports
use std::sync::mpsc::Receiver;
use std::time::Instant;

// Window management imports
use winit::dpi::LogicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

// ============================================================================
// COLOR CONFIGURATION
// ============================================================================

/// Color representation for gauge elements
#[derive(Debug, Clone, Copy)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn as_tuple(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Hex form used for SVG stroke attributes, e.g. "#fd5d93".
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ============================================================================
// GAUGE COORDINATE SPACE
// ============================================================================

// The gauge renders into a fixed 200x200 logical space centered at (100,100).
const VIEW_SIZE: f64 = 200.0;
const CENTER_X: f64 = 100.0;
const CENTER_Y: f64 = 100.0;
// Label sits slightly below true center for visual balance.
const LABEL_OFFSET_Y: f64 = 10.0;

// ============================================================================
// PUBLIC API - MAIN INTERFACE
// ============================================================================

/// Command enum for type-safe gauge updates over a channel
#[derive(Debug, Clone)]
pub enum GaugeCommand {
    SetValue(f64),
    SetValueColored(f64, Color),
}

/// Radial arc gauge bound to one drawing surface.
///
/// Owns exactly three retained primitives on its surface: the static dial
/// path, the dynamic value path and the value label. They are created once
/// at construction and mutated in place by [`ArcGauge::update`].
#[derive(Debug, Clone)]
pub struct ArcGauge<S: Surface> {
    surface: S,
    config: GaugeConfig,
    state: GaugeState,
}

#[derive(Debug, Clone, Builder)]
pub struct GaugeConfig {
    /// Value representing full-scale (100% arc sweep).
    #[builder(default = 100.0)]
    pub max: f64,
    /// Initial value, used only at first render.
    #[builder(default = 0.0)]
    pub value: f64,
    /// Angle where the arc begins, degrees clockwise from 12 o'clock.
    #[builder(default = 135.0)]
    pub dial_start_angle: f64,
    /// Angle where a full-scale arc ends. May numerically wrap past 0/360.
    #[builder(default = 45.0)]
    pub dial_end_angle: f64,
    /// Arc radius in the gauge's 200x200 logical space.
    #[builder(default = 80.0)]
    pub radius: f64,
    /// Formats the displayed value.
    #[builder(default = default_label)]
    pub label: fn(f64) -> String,

    // Window configuration
    #[builder(default = "".to_string())]
    pub title: String,
    #[builder(default = 300)]
    pub window_width: usize,
    #[builder(default = 300)]
    pub window_height: usize,
    #[builder(default = 60.0)]
    pub max_framerate: f64,

    // Raster appearance
    #[builder(default = 6)]
    pub dial_thickness: i32,
    #[builder(default = 10)]
    pub value_thickness: i32,
    #[builder(default = 44.0)]
    pub label_font_size: f32,

    // Colors
    pub background_color: Option<Color>,
    pub dial_color: Option<Color>,
    pub value_color: Option<Color>,
    pub text_color: Option<Color>,

    // Font configuration
    #[builder(default = include_bytes!("DejaVuSansMono.ttf"))]
    pub font_data: &'static [u8],
}

fn default_label(value: f64) -> String {
    format!("{}", value.round())
}

#[derive(Debug, Clone)]
struct GaugeState {
    current_value: f64,
    dial: NodeId,
    value_path: NodeId,
    value_text: NodeId,
}

impl GaugeConfig {
    /// Angle for a value: linear interpolation along the wrapped dial range.
    /// Values outside `[0, max]` extrapolate past the dial's visual bounds.
    pub fn angle_for_value(&self, value: f64) -> f64 {
        let range = normalize_angle_delta(self.dial_start_angle, self.dial_end_angle);
        self.dial_start_angle + (value / self.max) * range
    }
}

impl<S: Surface> ArcGauge<S> {
    /// Binds a gauge to `surface` and renders the initial value.
    ///
    /// Sets the surface view box to `0 0 200 200` and appends, in order, the
    /// background dial path, an empty value path and the centered label.
    pub fn new(mut surface: S, config: GaugeConfig) -> Self {
        surface.set_view_box(0.0, 0.0, VIEW_SIZE, VIEW_SIZE);

        let dial = surface.append_path("dial");
        surface.set_path_data(
            dial,
            &arc_path(
                CENTER_X,
                CENTER_Y,
                config.radius,
                config.dial_start_angle,
                config.dial_end_angle,
            ),
        );

        let value_path = surface.append_path("value");
        let value_text = surface.append_text("value-text", CENTER_X, CENTER_Y + LABEL_OFFSET_Y);

        let initial = config.value;
        let mut gauge = Self {
            surface,
            config,
            state: GaugeState {
                current_value: initial,
                dial,
                value_path,
                value_text,
            },
        };
        gauge.update(initial, None);
        gauge
    }

    /// Repaints the value arc and label for `value`.
    ///
    /// Only the value path's data, its stroke (when `color` is given) and the
    /// label text change; the dial is untouched. No input validation: values
    /// outside `[0, max]` draw past the dial bounds, and `max == 0` yields
    /// non-finite coordinates in the path data without panicking.
    pub fn update(&mut self, value: f64, color: Option<&str>) {
        let angle = self.config.angle_for_value(value);
        self.surface.set_path_data(
            self.state.value_path,
            &arc_path(
                CENTER_X,
                CENTER_Y,
                self.config.radius,
                self.config.dial_start_angle,
                angle,
            ),
        );
        if let Some(color) = color {
            self.surface.set_stroke(self.state.value_path, color);
        }
        self.surface
            .set_text_content(self.state.value_text, &(self.config.label)(value));
        self.state.current_value = value;
    }

    pub fn angle_for_value(&self, value: f64) -> f64 {
        self.config.angle_for_value(value)
    }

    /// Last value passed to [`ArcGauge::update`].
    pub fn value(&self) -> f64 {
        self.state.current_value
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn dial_path(&self) -> NodeId {
        self.state.dial
    }

    pub fn value_path(&self) -> NodeId {
        self.state.value_path
    }

    pub fn value_text(&self) -> NodeId {
        self.state.value_text
    }
}

// ============================================================================
// DRAWING SURFACE ABSTRACTION
// ============================================================================

/// Handle to one retained primitive on a [`Surface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeId(usize);

/// Retained-mode drawing surface consumed by [`ArcGauge`].
///
/// Supports setting a logical view box, appending path/text primitives, and
/// mutating a node's path data, stroke color and text content in place.
pub trait Surface {
    fn set_view_box(&mut self, min_x: f64, min_y: f64, width: f64, height: f64);
    fn append_path(&mut self, class: &str) -> NodeId;
    fn append_text(&mut self, class: &str, x: f64, y: f64) -> NodeId;
    fn set_path_data(&mut self, node: NodeId, d: &str);
    fn set_stroke(&mut self, node: NodeId, stroke: &str);
    fn set_text_content(&mut self, node: NodeId, content: &str);
}

/// In-memory [`Surface`] retaining typed nodes, serializable to SVG markup.
#[derive(Debug, Clone, Default)]
pub struct SvgSurface {
    view_box: Option<(f64, f64, f64, f64)>,
    nodes: Vec<SvgNode>,
}

#[derive(Debug, Clone)]
enum SvgNode {
    Path {
        class: String,
        d: String,
        stroke: Option<String>,
    },
    Text {
        class: String,
        x: f64,
        y: f64,
        content: String,
    },
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view_box(&self) -> Option<(f64, f64, f64, f64)> {
        self.view_box
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Path data of `node`, or `None` for text nodes and stale handles.
    pub fn path_data(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(node.0) {
            Some(SvgNode::Path { d, .. }) => Some(d),
            _ => None,
        }
    }

    pub fn stroke(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(node.0) {
            Some(SvgNode::Path { stroke, .. }) => stroke.as_deref(),
            _ => None,
        }
    }

    pub fn text_content(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(node.0) {
            Some(SvgNode::Text { content, .. }) => Some(content),
            _ => None,
        }
    }

    /// Serializes the retained nodes to an SVG document string.
    pub fn to_svg(&self) -> String {
        let mut out = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\"");
        if let Some((min_x, min_y, width, height)) = self.view_box {
            out.push_str(&format!(
                " viewBox=\"{} {} {} {}\"",
                min_x, min_y, width, height
            ));
        }
        out.push('>');
        for node in &self.nodes {
            match node {
                SvgNode::Path { class, d, stroke } => {
                    out.push_str(&format!(
                        "<path class=\"{}\" fill=\"none\" d=\"{}\"",
                        class, d
                    ));
                    if let Some(stroke) = stroke {
                        out.push_str(&format!(" stroke=\"{}\"", stroke));
                    }
                    out.push_str("/>");
                }
                SvgNode::Text {
                    class,
                    x,
                    y,
                    content,
                } => {
                    out.push_str(&format!(
                        "<text class=\"{}\" x=\"{}\" y=\"{}\" text-anchor=\"middle\" alignment-baseline=\"middle\">{}</text>",
                        class, x, y, content
                    ));
                }
            }
        }
        out.push_str("</svg>");
        out
    }
}

impl Surface for SvgSurface {
    fn set_view_box(&mut self, min_x: f64, min_y: f64, width: f64, height: f64) {
        self.view_box = Some((min_x, min_y, width, height));
    }

    fn append_path(&mut self, class: &str) -> NodeId {
        self.nodes.push(SvgNode::Path {
            class: class.to_string(),
            d: String::new(),
            stroke: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    fn append_text(&mut self, class: &str, x: f64, y: f64) -> NodeId {
        self.nodes.push(SvgNode::Text {
            class: class.to_string(),
            x,
            y,
            content: String::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    fn set_path_data(&mut self, node: NodeId, data: &str) {
        if let Some(SvgNode::Path { d, .. }) = self.nodes.get_mut(node.0) {
            *d = data.to_string();
        }
    }

    fn set_stroke(&mut self, node: NodeId, color: &str) {
        if let Some(SvgNode::Path { stroke, .. }) = self.nodes.get_mut(node.0) {
            *stroke = Some(color.to_string());
        }
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) {
        if let Some(SvgNode::Text { content, .. }) = self.nodes.get_mut(node.0) {
            *content = text.to_string();
        }
    }
}

// ============================================================================
// ARC GEOMETRY
// ============================================================================

/// Angular distance from `start` to `end` sweeping clockwise, in `[0, 360)`.
///
/// Adds 360 exactly once when the raw difference is negative; inputs are
/// always within one turn so repeated modulo is not needed.
fn normalize_angle_delta(start: f64, end: f64) -> f64 {
    let mut delta = end - start;
    if delta < 0.0 {
        delta += 360.0;
    }
    delta
}

/// Gauge angles measure clockwise from 12 o'clock, so rotate by -90 degrees
/// before applying trigonometry.
fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let rad = (angle - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// Single circular-arc path segment from `start_angle` to `end_angle`.
///
/// The move-to point is the Cartesian image of `end_angle` and the arc
/// endpoint that of `start_angle`; drawn in reverse with sweep flag 0 the
/// rendered arc sweeps visually clockwise.
fn arc_path(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let (start_x, start_y) = polar_to_cartesian(cx, cy, radius, end_angle);
    let (end_x, end_y) = polar_to_cartesian(cx, cy, radius, start_angle);

    let diff = normalize_angle_delta(start_angle, end_angle);
    let large_arc = if diff > 180.0 { 1 } else { 0 };

    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        start_x, start_y, radius, radius, large_arc, end_x, end_y
    )
}

// ============================================================================
// WINDOW DISPLAY
// ============================================================================

const DEFAULT_BACKGROUND: Color = Color::new(0x1e, 0x1e, 0x2f);
const DEFAULT_DIAL_COLOR: Color = Color::new(0x33, 0x44, 0x55);
const DEFAULT_VALUE_COLOR: Color = Color::new(0x00, 0xf2, 0xc3);
const DEFAULT_TEXT_COLOR: Color = Color::new(0xff, 0xff, 0xff);

impl<S: Surface> ArcGauge<S> {
    /// Opens a window displaying the gauge at its current value.
    pub fn show(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.run_window(None)
    }

    /// Opens a window and applies [`GaugeCommand`]s as they arrive.
    ///
    /// Each applied command also goes through [`ArcGauge::update`], so the
    /// retained surface stays in sync with what the window paints.
    pub fn show_with_commands(
        &mut self,
        receiver: Receiver<GaugeCommand>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        self.run_window(Some(receiver))
    }

    fn run_window(
        &mut self,
        receiver: Option<Receiver<GaugeCommand>>,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let logical_width: usize = self.config.window_width;
        let logical_height: usize = self.config.window_height;

        let event_loop = EventLoop::new()?;
        let window = WindowBuilder::new()
            .with_title(&self.config.title)
            .with_inner_size(LogicalSize::new(
                logical_width as f64,
                logical_height as f64,
            ))
            .with_resizable(false)
            .build(&event_loop)?;

        let window = std::sync::Arc::new(window);
        let window_clone = window.clone();

        let size = window.inner_size();
        let mut fb_width = size.width as usize;
        let mut fb_height = size.height as usize;
        let surface_texture = SurfaceTexture::new(size.width, size.height, &window);
        let mut pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let font = Font::try_from_vec(self.config.font_data.to_vec()).ok_or("invalid font data")?;

        let mut value_color = self.config.value_color.unwrap_or(DEFAULT_VALUE_COLOR);

        let target_fps = self.config.max_framerate;
        let frame_duration = std::time::Duration::from_secs_f64(1.0 / target_fps);
        let mut last_frame = Instant::now();

        event_loop.run(move |event, window_target| {
            window_target.set_control_flow(ControlFlow::Poll);
            match event {
                Event::WindowEvent { event, .. } => match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::Resized(new_size) => {
                        fb_width = new_size.width as usize;
                        fb_height = new_size.height as usize;
                        if let Err(err) = pixels.resize_buffer(new_size.width, new_size.height) {
                            log::warn!("framebuffer resize failed: {err}");
                        }
                        if let Err(err) = pixels.resize_surface(new_size.width, new_size.height) {
                            log::warn!("surface resize failed: {err}");
                        }
                    }
                    WindowEvent::RedrawRequested => {
                        if let Some(ref receiver) = receiver {
                            while let Ok(command) = receiver.try_recv() {
                                match command {
                                    GaugeCommand::SetValue(value) => self.update(value, None),
                                    GaugeCommand::SetValueColored(value, color) => {
                                        value_color = color;
                                        self.update(value, Some(&color.to_hex()));
                                    }
                                }
                            }
                        }

                        let frame = pixels.frame_mut();
                        let mut canvas = Canvas::new(frame, fb_width, fb_height);
                        render_gauge(
                            &mut canvas,
                            self.state.current_value,
                            value_color,
                            &self.config,
                            &font,
                        );
                        if let Err(err) = pixels.render() {
                            log::warn!("render failed: {err}");
                        }
                    }
                    _ => {}
                },
                Event::AboutToWait => {
                    if last_frame.elapsed() >= frame_duration {
                        window_clone.request_redraw();
                        last_frame = Instant::now();
                    }
                }
                _ => {}
            }
        })?;

        Ok(())
    }
}

// ============================================================================
// RENDERING AND DRAWING FUNCTIONS
// ============================================================================

struct Canvas<'a> {
    frame: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> Canvas<'a> {
    fn new(frame: &'a mut [u8], width: usize, height: usize) -> Self {
        Self {
            frame,
            width,
            height,
        }
    }

    fn clear(&mut self, color: (u8, u8, u8)) {
        for chunk in self.frame.chunks_exact_mut(4) {
            chunk.copy_from_slice(&[color.0, color.1, color.2, 0xff]);
        }
    }
}

fn render_gauge(
    canvas: &mut Canvas,
    value: f64,
    value_color: Color,
    config: &GaugeConfig,
    font: &Font,
) {
    canvas.clear(
        config
            .background_color
            .unwrap_or(DEFAULT_BACKGROUND)
            .as_tuple(),
    );

    let cx = canvas.width as i32 / 2;
    let cy = canvas.height as i32 / 2;
    let scale = canvas.width.min(canvas.height) as f64 / VIEW_SIZE;
    let r = (config.radius * scale).round() as i32;

    let start_rad = (config.dial_start_angle - 90.0).to_radians();
    let full_span = normalize_angle_delta(config.dial_start_angle, config.dial_end_angle);

    // Static dial arc over the full range.
    render_arc(
        canvas,
        cx,
        cy,
        r,
        config.dial_thickness,
        start_rad,
        full_span.to_radians(),
        config.dial_color.unwrap_or(DEFAULT_DIAL_COLOR).as_tuple(),
    );

    // Value arc. The raster path clamps the painted sweep to the dial span;
    // the retained surface keeps the unclamped geometry.
    let fraction = if config.max == 0.0 {
        0.0
    } else {
        (value / config.max).clamp(0.0, 1.0)
    };
    if fraction > 0.0 {
        render_arc(
            canvas,
            cx,
            cy,
            r,
            config.value_thickness,
            start_rad,
            (full_span * fraction).to_radians(),
            value_color.as_tuple(),
        );
    }

    let label = (config.label)(value);
    let label_y = cy + (LABEL_OFFSET_Y * scale).round() as i32;
    draw_text(
        canvas.frame,
        canvas.width,
        canvas.height,
        cx,
        label_y,
        &label,
        font,
        Scale::uniform(config.label_font_size),
        config.text_color.unwrap_or(DEFAULT_TEXT_COLOR).as_tuple(),
    );
}

// ============================================================================
// DRAWING PRIMITIVES
// ============================================================================

fn set_pixel(frame: &mut [u8], width: usize, x: usize, y: usize, r: u8, g: u8, b: u8, alpha: f32) {
    if x < width && y < frame.len() / (width * 4) {
        let idx = (y * width + x) * 4;
        let src = [r as f32, g as f32, b as f32, 255.0 * alpha];
        let dst = [
            frame[idx] as f32,
            frame[idx + 1] as f32,
            frame[idx + 2] as f32,
            frame[idx + 3] as f32,
        ];
        let a = src[3] / 255.0;
        let out = [
            (src[0] * a + dst[0] * (1.0 - a)).round() as u8,
            (src[1] * a + dst[1] * (1.0 - a)).round() as u8,
            (src[2] * a + dst[2] * (1.0 - a)).round() as u8,
            0xff,
        ];
        frame[idx..idx + 4].copy_from_slice(&out);
    }
}

fn render_arc(
    canvas: &mut Canvas,
    cx: i32,
    cy: i32,
    r: i32,
    thickness: i32,
    start_angle: f64,
    arc_span: f64,
    color: (u8, u8, u8),
) {
    let mut start = start_angle;
    let mut end = start_angle + arc_span;
    if start < 0.0 {
        start += 2.0 * std::f64::consts::PI;
    }
    if end >= 2.0 * std::f64::consts::PI {
        end -= 2.0 * std::f64::consts::PI;
    }

    for y in 0..canvas.height as i32 {
        for x in 0..canvas.width as i32 {
            let dx = x - cx;
            let dy = y - cy;
            let dist = ((dx * dx + dy * dy) as f64).sqrt();
            if dist < (r - thickness - 1) as f64 || dist > (r + 1) as f64 {
                continue;
            }
            let mut angle = (dy as f64).atan2(dx as f64);
            if angle < 0.0 {
                angle += 2.0 * std::f64::consts::PI;
            }
            let in_arc = if start < end {
                angle >= start && angle <= end
            } else {
                angle >= start || angle <= end
            };
            if in_arc {
                let aa = if dist > r as f64 {
                    1.0 - (dist - r as f64).min(1.0)
                } else if dist < (r - thickness) as f64 {
                    1.0 - ((r - thickness) as f64 - dist).min(1.0)
                } else {
                    1.0
                };
                if aa > 0.0 {
                    set_pixel(
                        canvas.frame,
                        canvas.width,
                        x as usize,
                        y as usize,
                        color.0,
                        color.1,
                        color.2,
                        aa as f32,
                    );
                }
            }
        }
    }
}

fn draw_text(
    frame: &mut [u8],
    width: usize,
    height: usize,
    x: i32,
    y: i32,
    text: &str,
    font: &rusttype::Font,
    scale: rusttype::Scale,
    color: (u8, u8, u8),
) {
    use rusttype::{point, PositionedGlyph};
    let v_metrics = font.v_metrics(scale);
    let glyphs: Vec<PositionedGlyph> = font
        .layout(text, scale, point(0.0, 0.0 + v_metrics.ascent))
        .collect();

    let (min_x, max_x, min_y, max_y) = glyphs.iter().filter_map(|g| g.pixel_bounding_box()).fold(
        (i32::MAX, i32::MIN, i32::MAX, i32::MIN),
        |(min_x, max_x, min_y, max_y), bb| {
            (
                min_x.min(bb.min.x),
                max_x.max(bb.max.x),
                min_y.min(bb.min.y),
                max_y.max(bb.max.y),
            )
        },
    );
    let width_px = if min_x < max_x { max_x - min_x } else { 0 };
    let height_px = if min_y < max_y { max_y - min_y } else { 0 };
    let offset_x = x - width_px / 2;
    let offset_y = y - height_px / 2;
    for glyph in glyphs {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = offset_x + gx as i32 + bb.min.x - min_x;
                let py = offset_y + gy as i32 + bb.min.y - min_y;
                if px >= 0 && px < width as i32 && py >= 0 && py < height as i32 {
                    set_pixel(
                        frame,
                        width,
                        px as usize,
                        py as usize,
                        color.0,
                        color.1,
                        color.2,
                        v as f32,
                    );
                }
            });
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_delta_wraps_once_when_negative() {
        assert_eq!(normalize_angle_delta(135.0, 45.0), 270.0);
        assert_eq!(normalize_angle_delta(0.0, 90.0), 90.0);
        assert_eq!(normalize_angle_delta(90.0, 90.0), 0.0);
    }

    #[test]
    fn angle_for_value_interpolates_along_wrapped_range() {
        let config = GaugeConfig::builder().build();
        assert_eq!(config.angle_for_value(0.0), 135.0);
        assert_eq!(config.angle_for_value(50.0), 270.0);
        // value = max lands on the end angle modulo a full turn
        assert_eq!(config.angle_for_value(100.0) % 360.0, 45.0);
    }

    #[test]
    fn angle_for_value_extrapolates_out_of_range() {
        let config = GaugeConfig::builder().build();
        assert_eq!(config.angle_for_value(150.0), 135.0 + 1.5 * 270.0);
        assert_eq!(config.angle_for_value(-50.0), 135.0 - 0.5 * 270.0);
    }

    #[test]
    fn polar_conversion_puts_angle_zero_at_twelve_oclock() {
        let (x, y) = polar_to_cartesian(100.0, 100.0, 80.0, 0.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 20.0).abs() < 1e-9);

        let (x, y) = polar_to_cartesian(100.0, 100.0, 80.0, 90.0);
        assert!((x - 180.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn large_arc_flag_set_above_half_turn() {
        let long = arc_path(100.0, 100.0, 80.0, 135.0, 337.5); // diff 202.5
        assert!(long.contains(" A 80 80 0 1 0 "));

        let short = arc_path(100.0, 100.0, 80.0, 135.0, 225.0); // diff 90
        assert!(short.contains(" A 80 80 0 0 0 "));
    }

    #[test]
    fn arc_path_is_drawn_in_reverse_point_order() {
        let path = arc_path(100.0, 100.0, 80.0, 135.0, 225.0);
        let (move_x, move_y) = polar_to_cartesian(100.0, 100.0, 80.0, 225.0);
        let (end_x, end_y) = polar_to_cartesian(100.0, 100.0, 80.0, 135.0);
        assert_eq!(
            path,
            format!("M {} {} A 80 80 0 0 0 {} {}", move_x, move_y, end_x, end_y)
        );
    }

    #[test]
    fn default_label_rounds() {
        let config = GaugeConfig::builder().build();
        assert_eq!((config.label)(63.7), "64");
        assert_eq!((config.label)(75.0), "75");
    }

    #[test]
    fn zero_max_renders_without_panicking() {
        let config = GaugeConfig::builder().max(0.0).build();
        let mut gauge = ArcGauge::new(SvgSurface::new(), config);
        gauge.update(75.0, None);
        // Degenerate geometry is allowed to produce a malformed path, but the
        // node invariant must hold.
        assert_eq!(gauge.surface().node_count(), 3);
    }

    #[test]
    fn color_hex_matches_svg_stroke_form() {
        assert_eq!(Color::new(0xfd, 0x5d, 0x93).to_hex(), "#fd5d93");
        assert_eq!(Color::new(0, 0xf2, 0xc3).to_hex(), "#00f2c3");
    }
}
