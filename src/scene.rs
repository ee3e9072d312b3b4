//! Scene composition: an ordered list of drawable items rendered every frame.

use crate::draw::{Canvas, Color, RenderError, WHITE};
use crate::road::{Road, RoadStyle, TrackDrawer};
use crate::sim::{Car, CarDrawer};

/// Everything a drawable item may read while drawing, plus the target canvas.
pub struct DrawContext<'a> {
    pub canvas: &'a mut dyn Canvas,
    pub style: &'a RoadStyle,
    pub road: &'a Road,
    pub cars: &'a [Car],
}

/// Something that can render itself onto the frame.
///
/// Implementors must override [`Drawable::draw`]; the default reports the
/// missing implementation as a [`RenderError::NotImplemented`].
pub trait Drawable {
    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn draw(&self, _ctx: &mut DrawContext<'_>) -> Result<(), RenderError> {
        Err(RenderError::NotImplemented(self.name()))
    }
}

/// Ordered drawable items plus the background they are drawn over.
///
/// Items are drawn in list order (first = bottom layer). The list may be
/// changed freely between frames.
pub struct Scene {
    pub background: Color,
    items: Vec<Box<dyn Drawable>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(WHITE)
    }
}

impl Scene {
    pub fn new(background: Color) -> Self {
        Self {
            background,
            items: Vec::new(),
        }
    }

    /// Builds the standard scene for a road: every track in order, cars on top.
    pub fn for_road(road: &Road, background: Color) -> Self {
        let mut scene = Self::new(background);
        for (id, _) in road.tracks() {
            scene.push(TrackDrawer::new(id));
        }
        scene.push(CarDrawer);
        scene
    }

    pub fn push(&mut self, item: impl Drawable + 'static) {
        self.items.push(Box::new(item));
    }

    pub fn items_mut(&mut self) -> &mut Vec<Box<dyn Drawable>> {
        &mut self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Clears to the background, draws every item in order, then presents.
    ///
    /// The first failing item aborts the frame; nothing is presented.
    pub fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), RenderError> {
        ctx.canvas.clear(self.background)?;
        for item in &self.items {
            item.draw(ctx)?;
        }
        ctx.canvas.present()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{RED, RecordingCanvas};
    use crate::util::Rect;

    struct Marker(Rect);

    impl Drawable for Marker {
        fn draw(&self, ctx: &mut DrawContext<'_>) -> Result<(), RenderError> {
            ctx.canvas.fill_rect(RED, self.0)
        }
    }

    struct Unfinished;

    impl Drawable for Unfinished {}

    fn draw_scene(scene: &Scene, canvas: &mut RecordingCanvas) -> Result<(), RenderError> {
        let road = Road::new();
        let style = RoadStyle::default();
        let mut ctx = DrawContext {
            canvas,
            style: &style,
            road: &road,
            cars: &[],
        };
        scene.draw(&mut ctx)
    }

    #[test]
    fn draws_items_in_order_then_presents() {
        let mut scene = Scene::default();
        scene.push(Marker(Rect::new(0, 0, 1, 1)));
        scene.push(Marker(Rect::new(5, 5, 1, 1)));

        let mut canvas = RecordingCanvas::new();
        draw_scene(&scene, &mut canvas).unwrap();

        assert_eq!(canvas.clears, 1);
        assert_eq!(canvas.presents, 1);
        let rects: Vec<_> = canvas.fills.iter().map(|op| op.rect).collect();
        assert_eq!(rects, vec![Rect::new(0, 0, 1, 1), Rect::new(5, 5, 1, 1)]);
    }

    #[test]
    fn item_without_draw_aborts_frame() {
        let mut scene = Scene::default();
        scene.push(Marker(Rect::new(0, 0, 1, 1)));
        scene.push(Unfinished);

        let mut canvas = RecordingCanvas::new();
        let err = draw_scene(&scene, &mut canvas).unwrap_err();

        assert!(matches!(err, RenderError::NotImplemented(name) if name.ends_with("Unfinished")));
        assert_eq!(canvas.presents, 0);
    }

    #[test]
    fn items_can_be_replaced_between_frames() {
        let mut scene = Scene::default();
        scene.push(Unfinished);
        scene.items_mut().clear();
        scene.push(Marker(Rect::new(1, 1, 1, 1)));

        let mut canvas = RecordingCanvas::new();
        draw_scene(&scene, &mut canvas).unwrap();
        assert_eq!(scene.len(), 1);
        assert_eq!(canvas.fills.len(), 1);
    }
}
