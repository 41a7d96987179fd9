// Drawing surface the particle field renders onto. The browser implementation
// lives in renderer.rs; tests use the recording surface below.

pub trait Surface {
    // Size the surface currently occupies on screen, in CSS pixels
    fn display_size(&self) -> (u32, u32);

    // Resizes the backing pixel buffer, which also wipes whatever was drawn
    fn set_backing_size(&mut self, width: u32, height: u32);

    fn clear(&mut self, width: f64, height: f64);

    fn fill_circle(&mut self, center: [f64; 2], radius: f64, style: &str);

    fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], style: &str, line_width: f64);
}

#[cfg(test)]
pub mod recording {
    use super::Surface;

    #[derive(Clone, Debug, PartialEq)]
    pub enum DrawCall {
        Clear { width: f64, height: f64 },
        Circle { center: [f64; 2], radius: f64, style: String },
        Line { from: [f64; 2], to: [f64; 2], style: String, line_width: f64 },
    }

    #[derive(Default)]
    pub struct RecordingSurface {
        pub display: (u32, u32),
        pub backing: (u32, u32),
        pub calls: Vec<DrawCall>,
    }

    impl RecordingSurface {
        pub fn new(width: u32, height: u32) -> Self {
            RecordingSurface {
                display: (width, height),
                ..Default::default()
            }
        }

        pub fn circles(&self) -> usize {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Circle { .. }))
                .count()
        }

        pub fn lines(&self) -> Vec<&DrawCall> {
            self.calls
                .iter()
                .filter(|c| matches!(c, DrawCall::Line { .. }))
                .collect()
        }
    }

    impl Surface for RecordingSurface {
        fn display_size(&self) -> (u32, u32) {
            self.display
        }

        fn set_backing_size(&mut self, width: u32, height: u32) {
            self.backing = (width, height);
            self.calls.clear();
        }

        fn clear(&mut self, width: f64, height: f64) {
            self.calls.clear();
            self.calls.push(DrawCall::Clear { width, height });
        }

        fn fill_circle(&mut self, center: [f64; 2], radius: f64, style: &str) {
            self.calls.push(DrawCall::Circle {
                center,
                radius,
                style: style.to_owned(),
            });
        }

        fn stroke_line(&mut self, from: [f64; 2], to: [f64; 2], style: &str, line_width: f64) {
            self.calls.push(DrawCall::Line {
                from,
                to,
                style: style.to_owned(),
                line_width,
            });
        }
    }
}
