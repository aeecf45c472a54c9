use iced::{
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke},
    Color, Point, Rectangle, Renderer, Theme,
};
use rigcore::radar::RadarState;
use std::f64::consts::FRAC_PI_4;

/// Draws a [`RadarState`]: range rings, radial guides, blips, the sweep
/// beam and the center hub.
#[derive(Clone)]
pub struct RadarScope {
    state: RadarState,
}

impl RadarScope {
    pub fn new(state: RadarState) -> Self {
        Self { state }
    }
}

fn polar(center: Point, radius: f32, angle: f64) -> Point {
    Point::new(
        center.x + radius * angle.cos() as f32,
        center.y - radius * angle.sin() as f32,
    )
}

impl<Message> canvas::Program<Message> for RadarScope {
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
            Color::from_rgb(0.02, 0.04, 0.02),
        );

        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let radius = bounds.width.min(bounds.height) / 2.0 - 12.0;
        let grid = Color::from_rgb(0.12, 0.35, 0.15);

        for ring in 1..=4 {
            let ring_radius = radius * (ring as f32 / 4.0);
            let ring_path = Path::circle(center, ring_radius);
            frame.stroke(&ring_path, Stroke::default().with_color(grid));
        }

        let guides = Path::new(|builder| {
            for step in 0..8 {
                builder.move_to(center);
                builder.line_to(polar(center, radius, step as f64 * FRAC_PI_4));
            }
        });
        frame.stroke(&guides, Stroke::default().with_color(grid).with_width(1.0));

        for blip in &self.state.blips {
            let position = polar(center, blip.radius as f32 * radius, blip.angle);
            let marker = Path::circle(position, 4.0);
            frame.fill(
                &marker,
                Color::from_rgba(0.4, 1.0, 0.45, blip.alpha.clamp(0.0, 1.0) as f32),
            );
        }

        let sweep = self.state.sweep.angle;
        let wedge = Path::new(|builder| {
            builder.move_to(center);
            builder.line_to(polar(center, radius, sweep - 0.35));
            builder.line_to(polar(center, radius, sweep - 0.175));
            builder.line_to(polar(center, radius, sweep));
            builder.close();
        });
        frame.fill(&wedge, Color::from_rgba(0.3, 0.9, 0.35, 0.18));
        let beam = Path::line(center, polar(center, radius, sweep));
        frame.stroke(
            &beam,
            Stroke::default()
                .with_width(2.0)
                .with_color(Color::from_rgb(0.45, 1.0, 0.5)),
        );

        let hub = Path::circle(center, 5.0);
        frame.fill(&hub, Color::from_rgb(0.6, 1.0, 0.65));

        vec![frame.into_geometry()]
    }
}
