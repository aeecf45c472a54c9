use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Theme,
};

/// Line chart of the rolling distance series; gaps break the line.
#[derive(Clone)]
pub struct DistanceChart {
    data: Vec<Option<f64>>,
}

impl DistanceChart {
    pub fn new(data: Vec<Option<f64>>) -> Self {
        Self { data }
    }
}

impl<Message> canvas::Program<Message> for DistanceChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.05, 0.05, 0.05),
        );

        let present: Vec<f64> = self.data.iter().flatten().copied().collect();
        if present.is_empty() || self.data.len() < 2 {
            return vec![frame.into_geometry()];
        }

        let min = present.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = present.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let range = (max - min).max(1.0);
        let step = bounds.width / (self.data.len() as f32 - 1.0);
        let pad = 8.0;
        let usable = bounds.height - 2.0 * pad;
        let to_point = |index: usize, value: f64| {
            let normalized = ((value - min) / range) as f32;
            Point::new(index as f32 * step, bounds.height - pad - normalized * usable)
        };

        let line = Path::new(|builder| {
            let mut pen_down = false;
            for (i, value) in self.data.iter().enumerate() {
                match value {
                    Some(value) if pen_down => builder.line_to(to_point(i, *value)),
                    Some(value) => {
                        builder.move_to(to_point(i, *value));
                        pen_down = true;
                    }
                    None => pen_down = false,
                }
            }
        });
        frame.stroke(
            &line,
            Stroke::default()
                .with_width(2.5)
                .with_color(Color::from_rgb(0.18, 0.72, 0.89)),
        );

        for (i, value) in self.data.iter().enumerate() {
            if let Some(value) = value {
                let dot = Path::circle(to_point(i, *value), 3.0);
                frame.fill(&dot, Color::from_rgb(0.85, 0.92, 0.98));
            }
        }

        vec![frame.into_geometry()]
    }
}
