use serde::{Deserialize, Serialize};

/// A window frame in display coordinates. Origin is the bottom-left or
/// top-left corner depending on the host toolkit; the bridge passes it
/// through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Origin that centers a `width` x `height` frame inside this rect.
    pub fn centered_origin(&self, width: f64, height: f64) -> (f64, f64) {
        (
            self.x + (self.width - width) / 2.0,
            self.y + (self.height - height) / 2.0,
        )
    }
}

/// Live frame of an open window, read back from the toolkit on every query.
/// Field names match the wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStats {
    #[serde(rename = "offsetX")]
    pub offset_x: f64,
    #[serde(rename = "offsetY")]
    pub offset_y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect> for WindowStats {
    fn from(frame: Rect) -> Self {
        Self {
            offset_x: frame.x,
            offset_y: frame.y,
            width: frame.width,
            height: frame.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect::new(10.0, 20.0, 800.0, 600.0);
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn centered_origin_within_area() {
        let area = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let (x, y) = area.centered_origin(960.0, 540.0);
        assert_eq!(x, 480.0);
        assert_eq!(y, 270.0);
    }

    #[test]
    fn centered_origin_respects_area_offset() {
        // Usable area that starts below a menu bar / above a dock.
        let area = Rect::new(0.0, 80.0, 1440.0, 820.0);
        let (x, y) = area.centered_origin(720.0, 410.0);
        assert_eq!(x, 360.0);
        assert_eq!(y, 285.0);
    }

    #[test]
    fn window_stats_wire_field_names() {
        let stats = WindowStats::from(Rect::new(12.0, 34.0, 640.0, 480.0));
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["offsetX"], 12.0);
        assert_eq!(json["offsetY"], 34.0);
        assert_eq!(json["width"], 640.0);
        assert_eq!(json["height"], 480.0);
    }

    #[test]
    fn window_stats_roundtrip() {
        let stats = WindowStats::from(Rect::new(1.0, 2.0, 3.0, 4.0));
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: WindowStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }
}
